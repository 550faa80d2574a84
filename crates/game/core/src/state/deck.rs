use std::collections::VecDeque;

use crate::env::RngOracle;

/// Ordered, duplicate-free sequence of catalog ids consumed front to back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck<T> {
    cards: VecDeque<T>,
}

impl<T: Copy + PartialEq> Deck<T> {
    pub fn new(cards: Vec<T>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Builds a deck and shuffles it with the given oracle.
    pub fn shuffled(cards: Vec<T>, rng: &mut dyn RngOracle) -> Self {
        let mut deck = Self::new(cards);
        deck.shuffle(rng);
        deck
    }

    /// Fisher-Yates shuffle: position `i` swaps with a uniform pick from `i..`.
    pub fn shuffle(&mut self, rng: &mut dyn RngOracle) {
        let cards = self.cards.make_contiguous();
        let len = cards.len();
        for i in 0..len {
            let k = rng.below((len - i) as u32) as usize;
            cards.swap(i, i + k);
        }
    }

    /// Removes and returns the top card, or `None` when exhausted.
    pub fn draw(&mut self) -> Option<T> {
        self.cards.pop_front()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: T) -> bool {
        self.cards.contains(&card)
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.cards.iter().copied()
    }
}
