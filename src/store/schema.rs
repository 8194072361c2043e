//! Theme store command/outcome schema.

use crate::error::SynthError;
use crate::scope::StyleDocument;
use crate::theme::ThemeRecord;
use tokio::sync::oneshot;

/// Result of one selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The theme is now current and applied to the root scope.
    Applied(ThemeRecord),
    /// No theme has the requested id; nothing changed.
    NotFound,
    /// A newer request applied instead; nothing changed.
    Superseded,
}

impl SelectOutcome {
    pub fn applied(&self) -> Option<&ThemeRecord> {
        match self {
            Self::Applied(theme) => Some(theme),
            _ => None,
        }
    }
}

/// Published view of the store state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub current: Option<ThemeRecord>,
    /// Registry themes, populated by `load`.
    pub available: Vec<ThemeRecord>,
    /// Generated themes, in creation order.
    pub custom: Vec<ThemeRecord>,
    /// True while any request is in flight.
    pub busy: bool,
    /// Last issued selection token.
    pub latest_token: u64,
}

impl ThemeSnapshot {
    /// Registry themes followed by generated ones.
    pub fn selectable(&self) -> impl Iterator<Item = &ThemeRecord> {
        self.available.iter().chain(self.custom.iter())
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_ref().map(|theme| theme.id.as_str())
    }
}

/// Commands accepted by the store actor.
pub(super) enum StoreCommand {
    Load {
        reply: oneshot::Sender<Vec<ThemeRecord>>,
    },
    Select {
        id: String,
        reply: oneshot::Sender<SelectOutcome>,
    },
    SelectRandom {
        reply: oneshot::Sender<SelectOutcome>,
    },
    Generate {
        api_key: String,
        prompt: String,
        reply: oneshot::Sender<Result<SelectOutcome, SynthError>>,
    },
    Document {
        reply: oneshot::Sender<StyleDocument>,
    },
    Shutdown,
}
