//! Theme store actor.
//!
//! The store is the only writer of the global root scope. Every request
//! (load, select, random, generate) is queued on one command channel, and
//! selecting requests are stamped with a monotonically increasing token when
//! they are issued. Slow work runs in spawned tasks. A resolved theme is
//! parked until no newer selecting request is still in flight, then the
//! newest parked theme applies and everything older is superseded. Requests
//! that change nothing (a lookup miss, a failed generation) drop out without
//! superseding anyone.

use crate::api::TextGenerator;
use crate::config::StoreConfig;
use crate::error::{StoreError, SynthError};
use crate::scope::{self, StyleDocument, THEME_CHANGING_CLASS};
use crate::synth;
use crate::theme::{ThemeRecord, ThemeRegistry, DEFAULT_THEME_ID};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

mod schema;
mod tasks;

pub use schema::{SelectOutcome, ThemeSnapshot};
use schema::StoreCommand;
use tasks::{Completion, CompletionSender};

/// Store behavior knobs.
#[derive(Debug, Clone)]
pub struct ThemeStoreOptions {
    /// Theme applied by the first `load` when nothing is current.
    pub default_theme: String,
    /// How long the root carries `theme-changing` after a switch. Zero
    /// disables the marker.
    pub transition: Duration,
}

impl Default for ThemeStoreOptions {
    fn default() -> Self {
        Self {
            default_theme: DEFAULT_THEME_ID.to_string(),
            transition: Duration::from_millis(50),
        }
    }
}

impl From<&StoreConfig> for ThemeStoreOptions {
    fn from(config: &StoreConfig) -> Self {
        Self {
            default_theme: config.default_theme.clone(),
            transition: config.transition,
        }
    }
}

/// Handle for sending commands to a spawned theme store.
#[derive(Clone)]
pub struct ThemeStoreHandle {
    commands: mpsc::Sender<StoreCommand>,
    snapshots: watch::Receiver<ThemeSnapshot>,
}

impl ThemeStoreHandle {
    /// Populate the available list; applies the default theme when nothing
    /// is current yet.
    pub async fn load(&self) -> Result<Vec<ThemeRecord>, StoreError> {
        self.request(|reply| StoreCommand::Load { reply }).await
    }

    /// Select a registry or generated theme by id.
    pub async fn select(&self, id: &str) -> Result<SelectOutcome, StoreError> {
        let id = id.to_string();
        self.request(|reply| StoreCommand::Select { id, reply }).await
    }

    /// Select a uniformly random registry theme.
    pub async fn select_random(&self) -> Result<SelectOutcome, StoreError> {
        self.request(|reply| StoreCommand::SelectRandom { reply })
            .await
    }

    /// Synthesize a theme from `prompt`, keep it, and apply it.
    pub async fn generate(&self, api_key: &str, prompt: &str) -> Result<SelectOutcome, StoreError> {
        let api_key = api_key.to_string();
        let prompt = prompt.to_string();
        let result = self
            .request(|reply| StoreCommand::Generate {
                api_key,
                prompt,
                reply,
            })
            .await?;
        Ok(result?)
    }

    /// Copy of the current style document.
    pub async fn document(&self) -> Result<StyleDocument, StoreError> {
        self.request(|reply| StoreCommand::Document { reply }).await
    }

    /// CSS text for the current root scope.
    pub async fn render_css(&self) -> Result<String, StoreError> {
        Ok(self.document().await?.render_css())
    }

    /// Custom properties currently set on the root scope.
    pub async fn root_properties(&self) -> Result<BTreeMap<String, String>, StoreError> {
        Ok(self.document().await?.root().properties().clone())
    }

    /// Latest published state.
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ThemeSnapshot> {
        self.snapshots.clone()
    }

    /// Stop the actor. In-flight results are dropped.
    pub async fn shutdown(&self) {
        let _ = self.commands.send(StoreCommand::Shutdown).await;
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> StoreCommand,
    ) -> Result<T, StoreError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(build(reply_tx))
            .await
            .map_err(|_| StoreError::Closed)?;
        reply_rx.await.map_err(|_| StoreError::Closed)
    }
}

/// Spawn a theme store actor. Must be called inside a tokio runtime.
pub fn spawn_theme_store(
    registry: ThemeRegistry,
    generator: Arc<dyn TextGenerator>,
    options: ThemeStoreOptions,
) -> ThemeStoreHandle {
    let (command_tx, mut command_rx) = mpsc::channel::<StoreCommand>(64);
    let (snapshot_tx, snapshot_rx) = watch::channel(ThemeSnapshot::default());

    tokio::spawn(async move {
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();
        let mut actor = StoreActor {
            registry: Arc::new(registry),
            generator,
            options,
            document: StyleDocument::new(),
            state: ThemeSnapshot::default(),
            in_flight: 0,
            pending: BTreeSet::new(),
            parked: BTreeMap::new(),
            applied_token: 0,
            transition_generation: 0,
            snapshots: snapshot_tx,
            done_tx,
        };

        loop {
            tokio::select! {
                command = command_rx.recv() => match command {
                    Some(StoreCommand::Shutdown) | None => break,
                    Some(command) => actor.handle_command(command),
                },
                Some(done) = done_rx.recv() => actor.handle_completion(done),
            }
        }
        debug!("theme store stopped");
    });

    ThemeStoreHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
    }
}

struct StoreActor {
    registry: Arc<ThemeRegistry>,
    generator: Arc<dyn TextGenerator>,
    options: ThemeStoreOptions,
    document: StyleDocument,
    state: ThemeSnapshot,
    in_flight: usize,
    /// Tokens of selecting requests still in flight.
    pending: BTreeSet<u64>,
    /// Resolved themes waiting on newer pending requests.
    parked: BTreeMap<u64, Parked>,
    /// Token of the last result applied to the root.
    applied_token: u64,
    transition_generation: u64,
    snapshots: watch::Sender<ThemeSnapshot>,
    done_tx: CompletionSender,
}

impl StoreActor {
    fn handle_command(&mut self, command: StoreCommand) {
        match command {
            StoreCommand::Load { reply } => {
                self.begin();
                tasks::spawn_load(self.registry.clone(), reply, self.done_tx.clone());
            }
            StoreCommand::Select { id, reply } => {
                let token = self.issue_token();
                let custom = self.state.custom.iter().find(|theme| theme.id == id).cloned();
                match custom {
                    Some(theme) => self.resolve(token, Some(theme), Reply::Select(reply)),
                    None => tasks::spawn_lookup(
                        self.registry.clone(),
                        token,
                        id,
                        reply,
                        self.done_tx.clone(),
                    ),
                }
            }
            StoreCommand::SelectRandom { reply } => {
                let token = self.issue_token();
                tasks::spawn_random(self.registry.clone(), token, reply, self.done_tx.clone());
            }
            StoreCommand::Generate {
                api_key,
                prompt,
                reply,
            } => {
                // Validation failures never reach the network and never
                // supersede other requests.
                if let Err(err) = synth::validate_request(&api_key, &prompt) {
                    let _ = reply.send(Err(err));
                    return;
                }
                let token = self.issue_token();
                tasks::spawn_generate(
                    self.generator.clone(),
                    token,
                    api_key,
                    prompt,
                    reply,
                    self.done_tx.clone(),
                );
            }
            StoreCommand::Document { reply } => {
                let _ = reply.send(self.document.clone());
            }
            StoreCommand::Shutdown => {}
        }
    }

    fn handle_completion(&mut self, done: Completion) {
        match done {
            Completion::Loaded { themes, reply } => {
                self.finish();
                self.state.available = themes.clone();
                // Nothing newer has applied while `current` is unset, so the
                // default goes on regardless of other requests in flight.
                if self.state.current.is_none() {
                    let initial = themes
                        .iter()
                        .find(|theme| theme.id == self.options.default_theme)
                        .or_else(|| themes.first())
                        .cloned();
                    if let Some(theme) = initial {
                        self.apply_root(theme);
                    }
                }
                self.publish();
                let _ = reply.send(themes);
            }
            Completion::Resolved {
                token,
                theme,
                reply,
            } => self.resolve(token, theme, Reply::Select(reply)),
            Completion::Generated {
                token,
                result,
                reply,
            } => match result {
                Ok(theme) => {
                    self.state.custom.push(theme.clone());
                    self.resolve(token, Some(theme), Reply::Generate(reply));
                }
                Err(err) => {
                    debug!(token, error = %err, "generation failed; current theme unchanged");
                    self.withdraw(token);
                    let _ = reply.send(Err(err));
                }
            },
            Completion::TransitionElapsed { generation } => {
                if generation == self.transition_generation {
                    self.document.root_mut().remove_class(THEME_CHANGING_CLASS);
                }
            }
        }
    }

    /// Park a resolved theme, or answer `NotFound` for a miss, then settle.
    fn resolve(&mut self, token: u64, theme: Option<ThemeRecord>, reply: Reply) {
        match theme {
            Some(theme) => {
                self.parked.insert(token, Parked { theme, reply });
                self.withdraw(token);
            }
            None => {
                debug!(token, "theme lookup missed; current theme unchanged");
                self.withdraw(token);
                reply.send(SelectOutcome::NotFound);
            }
        }
    }

    /// Drop `token` from the in-flight set and settle parked results.
    fn withdraw(&mut self, token: u64) {
        self.finish();
        self.pending.remove(&token);
        let settled = self.settle_parked();
        self.publish();
        for (reply, outcome) in settled {
            reply.send(outcome);
        }
    }

    /// Apply the newest parked theme once nothing newer is in flight, and
    /// supersede every parked result older than the last applied one.
    fn settle_parked(&mut self) -> Vec<(Reply, SelectOutcome)> {
        let mut settled = Vec::new();
        let newest_pending = self.pending.last().copied().unwrap_or(0);
        let newest_parked = self.parked.keys().next_back().copied();
        if let Some(newest) = newest_parked {
            if newest > self.applied_token && newest > newest_pending {
                if let Some(Parked { theme, reply }) = self.parked.remove(&newest) {
                    self.applied_token = newest;
                    self.apply_root(theme.clone());
                    settled.push((reply, SelectOutcome::Applied(theme)));
                }
            }
        }

        let newer = self.parked.split_off(&self.applied_token);
        for (token, Parked { theme, reply }) in std::mem::replace(&mut self.parked, newer) {
            debug!(token, applied = self.applied_token, theme = %theme.id, "discarding stale result");
            settled.push((reply, SelectOutcome::Superseded));
        }
        settled
    }

    fn apply_root(&mut self, theme: ThemeRecord) {
        let root = self.document.root_mut();
        scope::switch(root, self.state.current.as_ref(), &theme);
        info!(theme = %theme.id, name = %theme.name, "applied theme");
        self.state.current = Some(theme);
        self.mark_transition();
    }

    fn mark_transition(&mut self) {
        if self.options.transition.is_zero() {
            return;
        }
        self.transition_generation += 1;
        self.document.root_mut().add_class(THEME_CHANGING_CLASS);
        tasks::spawn_transition_timer(
            self.options.transition,
            self.transition_generation,
            self.done_tx.clone(),
        );
    }

    fn begin(&mut self) {
        self.in_flight += 1;
        self.publish();
    }

    fn issue_token(&mut self) -> u64 {
        self.state.latest_token += 1;
        self.pending.insert(self.state.latest_token);
        self.begin();
        self.state.latest_token
    }

    fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    fn publish(&mut self) {
        self.state.busy = self.in_flight > 0;
        self.snapshots.send_replace(self.state.clone());
    }
}

/// A resolved theme waiting for newer requests to settle.
struct Parked {
    theme: ThemeRecord,
    reply: Reply,
}

enum Reply {
    Select(oneshot::Sender<SelectOutcome>),
    Generate(oneshot::Sender<Result<SelectOutcome, SynthError>>),
}

impl Reply {
    fn send(self, outcome: SelectOutcome) {
        match self {
            Self::Select(tx) => {
                let _ = tx.send(outcome);
            }
            Self::Generate(tx) => {
                let _ = tx.send(Ok(outcome));
            }
        }
    }
}
