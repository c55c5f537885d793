// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;

use crate::{ButtonPhase, CLIArg, ClickOutcome, FakebookClient, LikeButton,
            LikeButtonError, LikeState, StoreNotifier, create_store};

/// What a [`run_session`] ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub state: LikeState,
    pub history: Vec<LikeState>,
    pub phase: ButtonPhase,
    pub outcomes: Vec<ClickOutcome>,
    pub like_count: usize,
}

impl SessionReport {
    /// The final state as JSON, eg: `{"liked":true}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the state can't be serialized.
    pub fn state_json(&self) -> miette::Result<String> {
        serde_json::to_string(&self.state).into_diagnostic()
    }
}

/// Click the button `cli_arg.clicks` times against a [`FakebookClient`], with the button
/// wired to a fresh store.
///
/// # Errors
///
/// Returns the first [`LikeButtonError`]. Clicks after it are not made.
pub async fn run_session(cli_arg: &CLIArg) -> Result<SessionReport, LikeButtonError> {
    let mut store = create_store(cli_arg.store_config());
    let client = FakebookClient::new(!cli_arg.fakebook_declines);
    let mut button = LikeButton::new(client, StoreNotifier { store: &mut store });

    let mut outcomes = Vec::with_capacity(cli_arg.clicks);
    for click in 1..=cli_arg.clicks {
        let outcome = button.on_click_async().await?;
        // % is Display, ? is Debug.
        tracing::info!(
            message = "clicked",
            label = %button.label(),
            click = %click,
            outcome = ?outcome,
            phase = ?button.phase()
        );
        outcomes.push(outcome);
    }

    let phase = button.phase();
    let (client, _) = button.into_parts();
    tracing::info!(message = "session over", like_count = %client.like_count());

    Ok(SessionReport {
        state: store.get_state(),
        history: store.get_history(),
        phase,
        outcomes,
        like_count: client.like_count(),
    })
}
