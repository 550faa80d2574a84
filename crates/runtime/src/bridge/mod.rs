//! Interaction bridge between a session worker and its clients.
//!
//! Four mailboxes connect the two sides:
//! - statuses: narrative lines, rendezvous, ended by a marker
//! - prompts: decision requests, rendezvous, ended by a marker
//! - ready: one board snapshot per completed phase, rendezvous
//! - choices: answers from clients, never blocks the submitter
//!
//! The outstanding prompt is also published on a watch channel so a choice
//! can be validated without talking to the worker.
mod mailbox;

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc, watch};
use tracing::{debug, warn};

use game_core::{BoardSnapshot, Choice, Prompt, Status};

use crate::api::{GameId, Result, RuntimeError};
use mailbox::{Inbox, Outbox, mailbox};

/// Builds both ends of a session's bridge.
pub(crate) fn channel(
    game: GameId,
    initial_board: BoardSnapshot,
    choice_capacity: usize,
) -> (Bridge, Client) {
    let (status_tx, status_rx) = mailbox();
    let (prompt_tx, prompt_rx) = mailbox();
    let (ready_tx, ready_rx) = mailbox();
    let (choice_tx, choice_rx) = mpsc::channel(choice_capacity.max(1));
    let (outstanding, _) = watch::channel(None);
    let outstanding = Arc::new(outstanding);

    let bridge = Bridge {
        game,
        statuses: status_tx,
        prompts: prompt_tx,
        ready: ready_tx,
        choices: choice_rx,
        outstanding: Arc::clone(&outstanding),
    };
    let client = Client {
        game,
        statuses: Mutex::new(status_rx),
        prompts: Mutex::new(prompt_rx),
        boards: Mutex::new(Boards {
            inbox: ready_rx,
            last: initial_board,
        }),
        choices: choice_tx,
        outstanding,
    };
    (bridge, client)
}

/// Worker side. Every send blocks until a client takes the parcel.
pub(crate) struct Bridge {
    game: GameId,
    statuses: Outbox<Status>,
    prompts: Outbox<Prompt>,
    ready: Outbox<BoardSnapshot>,
    choices: mpsc::Receiver<Choice>,
    outstanding: Arc<watch::Sender<Option<Prompt>>>,
}

impl Bridge {
    pub(crate) async fn log(&self, message: String) -> Result<()> {
        self.statuses.send(Status::new(message)).await
    }

    /// Publishes `prompt` as the outstanding prompt, then hands it over.
    pub(crate) async fn issue_prompt(&self, prompt: Prompt) -> Result<()> {
        debug!(
            target: "runtime::bridge",
            game = %self.game,
            phase = %prompt.phase,
            choices = prompt.choices.len(),
            "issuing prompt"
        );
        self.outstanding.send_replace(Some(prompt.clone()));
        self.prompts.send(prompt).await
    }

    pub(crate) async fn await_choice(&mut self) -> Result<Choice> {
        self.choices.recv().await.ok_or(RuntimeError::SessionClosed)
    }

    pub(crate) async fn ready(&self, board: BoardSnapshot) -> Result<()> {
        self.ready.send(board).await
    }

    /// Withdraws any outstanding prompt and sends the two end markers.
    pub(crate) async fn finish(&self) -> Result<()> {
        self.outstanding.send_replace(None);
        self.statuses.end().await?;
        self.prompts.end().await
    }
}

impl Drop for Bridge {
    // An aborted worker never reaches `finish`.
    fn drop(&mut self) {
        self.outstanding.send_replace(None);
    }
}

struct Boards {
    inbox: Inbox<BoardSnapshot>,
    last: BoardSnapshot,
}

/// Client side, shared by every clone of a session handle.
pub(crate) struct Client {
    game: GameId,
    statuses: Mutex<Inbox<Status>>,
    prompts: Mutex<Inbox<Prompt>>,
    boards: Mutex<Boards>,
    choices: mpsc::Sender<Choice>,
    outstanding: Arc<watch::Sender<Option<Prompt>>>,
}

impl Client {
    pub(crate) async fn status(&self) -> Option<Status> {
        self.statuses.lock().await.recv().await
    }

    pub(crate) async fn prompt(&self) -> Option<Prompt> {
        self.prompts.lock().await.recv().await
    }

    /// Next phase snapshot, or `None` once the session is over.
    pub(crate) async fn next_board(&self) -> Option<BoardSnapshot> {
        let mut boards = self.boards.lock().await;
        let board = boards.inbox.recv().await?;
        boards.last = board.clone();
        Some(board)
    }

    /// Next phase snapshot, or the final one once the session is over.
    pub(crate) async fn board(&self) -> BoardSnapshot {
        let mut boards = self.boards.lock().await;
        match boards.inbox.recv().await {
            Some(board) => {
                boards.last = board.clone();
                board
            }
            None => boards.last.clone(),
        }
    }

    pub(crate) fn outstanding(&self) -> Option<Prompt> {
        self.outstanding.borrow().clone()
    }

    /// Matches `key` against the outstanding prompt and forwards the choice.
    ///
    /// A match withdraws the prompt in the same step, so a second submission
    /// for the same prompt is rejected instead of queued.
    pub(crate) fn submit(&self, key: &str) -> Result<Choice> {
        let mut taken = None;
        self.outstanding.send_if_modified(|current| {
            let Some(choice) = current.as_ref().and_then(|p| p.find(key)).cloned() else {
                return false;
            };
            *current = None;
            taken = Some(choice);
            true
        });

        let Some(choice) = taken else {
            warn!(target: "runtime::bridge", game = %self.game, key, "rejected choice");
            return Err(RuntimeError::InvalidChoice {
                key: key.to_string(),
            });
        };
        self.choices
            .try_send(choice.clone())
            .map_err(|_| RuntimeError::SessionClosed)?;
        debug!(target: "runtime::bridge", game = %self.game, key = %choice.key, "choice accepted");
        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{GameConfig, GameState, PcgRng, Phase};

    use super::*;

    fn board() -> BoardSnapshot {
        let catalog = game_content::standard_catalog().expect("catalog");
        let state = GameState::new(&catalog, &GameConfig::default(), &mut PcgRng::new(1))
            .expect("state");
        state.board(&catalog).expect("board")
    }

    fn menu() -> Prompt {
        Prompt::new(Phase::StartOfTurn, "Select a system to attack, or bide your time.")
            .with("Explore", "Explore and attack")
            .with("Bide", "Bide your time")
    }

    #[tokio::test]
    async fn submit_requires_an_outstanding_prompt() {
        let (_bridge, client) = channel(GameId::new(), board(), 1);
        assert!(matches!(
            client.submit("Bide"),
            Err(RuntimeError::InvalidChoice { .. })
        ));
    }

    #[tokio::test]
    async fn choice_is_matched_once() {
        let (mut bridge, client) = channel(GameId::new(), board(), 1);
        let client = Arc::new(client);
        let reader = Arc::clone(&client);
        let read = tokio::spawn(async move { reader.prompt().await });

        bridge.issue_prompt(menu()).await.expect("issued");
        assert!(read.await.expect("join").is_some());

        assert!(matches!(
            client.submit("attack"),
            Err(RuntimeError::InvalidChoice { .. })
        ));
        assert!(matches!(
            client.submit("  bide\t"),
            Err(RuntimeError::InvalidChoice { ref key }) if key == "  bide\t"
        ));
        assert!(client.outstanding().is_some());
        let choice = client.submit("bIDe").expect("accepted");
        assert_eq!(choice.key, "Bide");
        assert!(client.outstanding().is_none());
        assert!(client.submit("Bide").is_err());

        assert_eq!(bridge.await_choice().await.expect("choice").key, "Bide");
    }

    #[tokio::test]
    async fn dropping_the_worker_side_withdraws_the_prompt() {
        let (bridge, client) = channel(GameId::new(), board(), 1);
        let client = Arc::new(client);
        let reader = Arc::clone(&client);
        let read = tokio::spawn(async move { reader.prompt().await });

        bridge.issue_prompt(menu()).await.expect("issued");
        assert!(read.await.expect("join").is_some());
        assert!(client.outstanding().is_some());

        drop(bridge);
        assert!(client.outstanding().is_none());
        assert!(matches!(
            client.submit("Bide"),
            Err(RuntimeError::InvalidChoice { .. })
        ));
    }

    #[tokio::test]
    async fn board_falls_back_to_the_last_snapshot() {
        let (bridge, client) = channel(GameId::new(), board(), 1);
        drop(bridge);
        assert!(client.next_board().await.is_none());
        assert_eq!(client.board().await.year, 1);
    }

    #[tokio::test]
    async fn finish_sends_both_markers() {
        let (bridge, client) = channel(GameId::new(), board(), 1);
        let worker = tokio::spawn(async move { bridge.finish().await });

        assert!(client.status().await.is_none());
        assert!(client.prompt().await.is_none());
        assert!(worker.await.expect("join").is_ok());
        assert!(client.status().await.is_none());
        assert!(client.prompt().await.is_none());
    }
}
