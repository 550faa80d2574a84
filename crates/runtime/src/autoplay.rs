//! Drives a session to completion with a [`DecisionProvider`].

use tracing::{debug, warn};

use game_core::Status;

use crate::api::{DecisionProvider, PromptEvent, Result, RuntimeError, SessionHandle, StatusEvent};

/// Plays the game behind `handle` until it ends.
///
/// Statuses and boards are drained concurrently so the worker never stalls;
/// every prompt is answered through `provider`. Returns the full status
/// transcript. A key the provider returns that the prompt does not offer
/// falls back to the prompt's first choice.
///
/// If the provider fails, the drain tasks are stopped and the error is
/// returned; the game itself keeps waiting for a choice until it is ended.
pub async fn autoplay(handle: &SessionHandle, provider: &dyn DecisionProvider) -> Result<Vec<Status>> {
    let statuses = {
        let handle = handle.clone();
        tokio::spawn(async move {
            let mut transcript = Vec::new();
            while let StatusEvent::Message(status) = handle.status().await {
                transcript.push(status);
            }
            transcript
        })
    };
    let boards = {
        let handle = handle.clone();
        tokio::spawn(async move {
            let mut phases = 0usize;
            while handle.next_board().await.is_some() {
                phases += 1;
            }
            phases
        })
    };

    if let Err(err) = answer_prompts(handle, provider).await {
        statuses.abort();
        boards.abort();
        return Err(err);
    }

    let transcript = statuses.await.map_err(RuntimeError::WorkerJoin)?;
    let phases = boards.await.map_err(RuntimeError::WorkerJoin)?;
    debug!(
        target: "runtime::session",
        game = %handle.id(),
        phases,
        lines = transcript.len(),
        "autoplay finished"
    );

    Ok(transcript)
}

async fn answer_prompts(handle: &SessionHandle, provider: &dyn DecisionProvider) -> Result<()> {
    while let PromptEvent::Prompt(prompt) = handle.prompt().await {
        let key = provider.decide(&prompt).await?;
        match handle.submit_choice(&key) {
            Ok(_) => {}
            Err(err) if err.is_recoverable() => {
                warn!(target: "runtime::session", game = %handle.id(), key = %key, "provider chose an unknown key");
                if let Some(first) = prompt.choices.first() {
                    handle.submit_choice(&first.key)?;
                }
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
