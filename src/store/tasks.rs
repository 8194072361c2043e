//! Spawned work for the store actor.
//!
//! Registry fetches and synthesis run off the actor loop and report back
//! through one completion channel. Selecting work is tagged with the token
//! it was issued.

use crate::api::TextGenerator;
use crate::error::SynthError;
use crate::synth;
use crate::theme::{ThemeRecord, ThemeRegistry};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

use super::SelectOutcome;

/// Completion notification sent from a spawned task back to the actor.
pub(super) enum Completion {
    Loaded {
        themes: Vec<ThemeRecord>,
        reply: oneshot::Sender<Vec<ThemeRecord>>,
    },
    Resolved {
        token: u64,
        theme: Option<ThemeRecord>,
        reply: oneshot::Sender<SelectOutcome>,
    },
    Generated {
        token: u64,
        result: Result<ThemeRecord, SynthError>,
        reply: oneshot::Sender<Result<SelectOutcome, SynthError>>,
    },
    TransitionElapsed {
        generation: u64,
    },
}

pub(super) type CompletionSender = mpsc::UnboundedSender<Completion>;

pub(super) fn spawn_load(
    registry: Arc<ThemeRegistry>,
    reply: oneshot::Sender<Vec<ThemeRecord>>,
    done_tx: CompletionSender,
) {
    tokio::spawn(async move {
        let themes = registry.list().await;
        let _ = done_tx.send(Completion::Loaded {
            themes,
            reply,
        });
    });
}

pub(super) fn spawn_lookup(
    registry: Arc<ThemeRegistry>,
    token: u64,
    id: String,
    reply: oneshot::Sender<SelectOutcome>,
    done_tx: CompletionSender,
) {
    tokio::spawn(async move {
        let theme = registry.get(&id).await;
        let _ = done_tx.send(Completion::Resolved {
            token,
            theme,
            reply,
        });
    });
}

pub(super) fn spawn_random(
    registry: Arc<ThemeRegistry>,
    token: u64,
    reply: oneshot::Sender<SelectOutcome>,
    done_tx: CompletionSender,
) {
    tokio::spawn(async move {
        let theme = registry.pick_random().await;
        let _ = done_tx.send(Completion::Resolved {
            token,
            theme: Some(theme),
            reply,
        });
    });
}

pub(super) fn spawn_generate(
    generator: Arc<dyn TextGenerator>,
    token: u64,
    api_key: String,
    prompt: String,
    reply: oneshot::Sender<Result<SelectOutcome, SynthError>>,
    done_tx: CompletionSender,
) {
    tokio::spawn(async move {
        let result = synth::synthesize(generator.as_ref(), &api_key, &prompt).await;
        let _ = done_tx.send(Completion::Generated {
            token,
            result,
            reply,
        });
    });
}

pub(super) fn spawn_transition_timer(delay: Duration, generation: u64, done_tx: CompletionSender) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = done_tx.send(Completion::TransitionElapsed { generation });
    });
}
