//! Stateful page views.
//!
//! A view owns the fetched collection plus its derived projection and tracks
//! the fetch lifecycle with an explicit [`FetchStatus`]. The catalog source,
//! cart and session are passed in by the caller on each operation.

pub mod catalog;
pub mod offers;

pub use catalog::CatalogView;
pub use offers::OffersView;

use crate::error::StorefrontError;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// FetchStatus
// ---------------------------------------------------------------------------

/// Where a view is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is pending.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed; `message` is user-facing.
    Failed { message: String },
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchStatus::Loaded)
    }

    /// User-facing error message when the last fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed { message } => Some(message),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// FetchOutcome
// ---------------------------------------------------------------------------

/// What a call to `fetch` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The collection was replaced with `count` products.
    Loaded { count: usize },
    /// The source failed; the previous collection is kept.
    Failed,
    /// Another fetch was already pending; this request was ignored.
    AlreadyInFlight,
    /// The view was detached; nothing was requested or applied.
    Detached,
}

// ---------------------------------------------------------------------------
// FetchState
// ---------------------------------------------------------------------------

/// Status plus the detached flag, shared by every view.
#[derive(Debug, Clone, Default)]
pub(crate) struct FetchState {
    status: FetchStatus,
    detached: bool,
}

impl FetchState {
    pub(crate) fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub(crate) fn is_detached(&self) -> bool {
        self.detached
    }

    pub(crate) fn detach(&mut self) {
        self.detached = true;
    }

    /// Enter `Loading`, or say why the fetch must not start.
    pub(crate) fn begin(&mut self, view: &'static str) -> Option<FetchOutcome> {
        if self.detached {
            return Some(FetchOutcome::Detached);
        }
        if self.status.is_loading() {
            debug!(view, "fetch ignored; one is already in flight");
            return Some(FetchOutcome::AlreadyInFlight);
        }
        self.status = FetchStatus::Loading;
        None
    }

    /// Record a successful fetch. Returns `false` if the result must be
    /// dropped because the view was detached meanwhile.
    pub(crate) fn succeed(&mut self) -> bool {
        if self.detached {
            return false;
        }
        self.status = FetchStatus::Loaded;
        true
    }

    /// Record a failed fetch with the user-facing `message`.
    pub(crate) fn fail(&mut self, view: &'static str, err: &StorefrontError, message: &str) -> FetchOutcome {
        if self.detached {
            return FetchOutcome::Detached;
        }
        warn!(view, error = %err, "fetch failed");
        self.status = FetchStatus::Failed {
            message: message.to_string(),
        };
        FetchOutcome::Failed
    }
}
