//! Terminal front end: plays one game against a [`SessionHandle`].
//!
//! Three loops run side by side, one per stream the session produces:
//! statuses are printed as they arrive, a one-line board summary follows
//! every phase, and prompts are answered from stdin.
use std::fmt::Write as _;

use anyhow::Result;
use game_core::{BoardSnapshot, Prompt, System};
use runtime::{
    FirstChoiceProvider, PromptEvent, Runtime, RuntimeError, SessionHandle, StatusEvent, autoplay,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{info, warn};

use crate::config::ClientConfig;

/// Starts one game and plays it to the end.
pub async fn run(runtime: &Runtime, config: &ClientConfig) -> Result<()> {
    let handle = runtime.start_game().await?;
    info!(game = %handle.id(), autoplay = config.autoplay, "game started");

    if config.autoplay {
        let transcript = autoplay(&handle, &FirstChoiceProvider).await?;
        for status in &transcript {
            println!("{status}");
        }
    } else {
        play_interactive(runtime, &handle).await?;
    }

    println!();
    print!("{}", render_board(&handle.board().await));
    Ok(())
}

async fn play_interactive(runtime: &Runtime, handle: &SessionHandle) -> Result<()> {
    let statuses = tokio::spawn(print_statuses(handle.clone()));
    let boards = tokio::spawn(print_boards(handle.clone()));

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let finished = answer_prompts(handle, &mut input).await?;
    if !finished {
        info!(game = %handle.id(), "player quit");
        runtime.end_game(handle.id()).await?;
    }

    statuses.await?;
    boards.await?;
    Ok(())
}

async fn print_statuses(handle: SessionHandle) {
    while let StatusEvent::Message(status) = handle.status().await {
        println!("{status}");
    }
}

async fn print_boards(handle: SessionHandle) {
    while let Some(board) = handle.next_board().await {
        println!("{}", summary(&board));
    }
}

/// Answers prompts until the game ends (`true`) or stdin closes (`false`).
async fn answer_prompts(handle: &SessionHandle, input: &mut Lines<BufReader<Stdin>>) -> Result<bool> {
    while let PromptEvent::Prompt(prompt) = handle.prompt().await {
        print!("{}", render_prompt(&prompt));
        std::io::Write::flush(&mut std::io::stdout())?;

        loop {
            let Some(line) = input.next_line().await? else {
                return Ok(false);
            };
            match handle.submit_choice(line.trim()) {
                Ok(_) => break,
                Err(err @ RuntimeError::InvalidChoice { .. }) => {
                    warn!(game = %handle.id(), error = %err, "invalid input");
                    println!("Invalid choice {:?}. Enter one of: {}", line.trim(), prompt.keys().collect::<Vec<_>>().join(", "));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
    Ok(true)
}

fn render_prompt(prompt: &Prompt) -> String {
    let mut out = format!("\n{}\n", prompt.message);
    for choice in &prompt.choices {
        let _ = writeln!(out, "  [{}] {}", choice.key, choice.label);
    }
    out.push_str("> ");
    out
}

fn names(systems: &[System]) -> String {
    if systems.is_empty() {
        return "-".to_string();
    }
    systems
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line summary printed after each phase.
pub fn summary(board: &BoardSnapshot) -> String {
    format!(
        "[Year {} | {}] metal {} (+{}) wealth {} (+{}) military {} | empire: {} | explored: {} | decks {}/{}/{}",
        board.year,
        board.phase,
        board.metal_storage,
        board.metal_production,
        board.wealth_storage,
        board.wealth_production,
        board.military_strength,
        names(&board.empire),
        names(&board.explored),
        board.decks.near,
        board.decks.distant,
        board.decks.events,
    )
}

/// Full board, printed once the game is over.
pub fn render_board(board: &BoardSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Year {} - {}", board.year, board.phase);
    let _ = writeln!(
        out,
        "Metal {} (+{})  Wealth {} (+{})  Military {}",
        board.metal_storage,
        board.metal_production,
        board.wealth_storage,
        board.wealth_production,
        board.military_strength
    );

    let _ = writeln!(out, "Empire:");
    for system in &board.empire {
        let _ = writeln!(
            out,
            "  {} ({}) resistance {} metal {} wealth {} VP {}",
            system.name,
            system.category,
            system.resistance,
            system.metal,
            system.wealth,
            system.victory_points
        );
    }
    let _ = writeln!(out, "Explored: {}", names(&board.explored));

    let _ = writeln!(out, "Technologies:");
    for tech in board.gen1_techs.iter().chain(&board.gen2_techs) {
        let mark = if tech.owned { "x" } else { " " };
        let _ = writeln!(out, "  [{mark}] {} {} ({}): {}", tech.id, tech.name, tech.cost, tech.ability);
    }

    if let Some(event) = &board.active_event {
        let _ = writeln!(out, "Active event: {}", event.name());
    }
    let _ = writeln!(
        out,
        "Cards left: near {}, distant {}, events {}",
        board.decks.near, board.decks.distant, board.decks.events
    );
    out
}
