//! Per-fetch-scope load state and the decorated post view record.
//!
//! Each of the three fetch kinds (users, posts-for-user, comments-per-post)
//! owns one [`LoadState`]. The tagged variants replace the boolean
//! loading flags the dataset's reference clients use, so "never tried",
//! "in flight", "settled with data" and "settled with an error" are
//! distinct states.

use crate::error::TransportError;
use crate::models::{Comment, Post};

// ============================================================================
// LoadState
// ============================================================================

/// State of one asynchronous fetch scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    /// No fetch has been issued for this scope
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch settled successfully
    Loaded(T),
    /// The last fetch settled with a failure
    Failed(TransportError),
}

impl<T> LoadState<T> {
    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Whether the scope holds settled data.
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    /// The loaded value, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// The failure of the last settled fetch, if any.
    pub fn error(&self) -> Option<&TransportError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

// ============================================================================
// PostView
// ============================================================================

/// A post decorated with its UI-only state.
///
/// Constructed by the state layer when a posts fetch settles, one per
/// returned [`Post`], and discarded wholesale when a different user is
/// selected. The comment scope starts [`LoadState::Idle`]; expansion
/// drives it through the fetch lifecycle at most once per settled
/// success, and a failed load is retryable on the next expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    pub post: Post,
    pub expanded: bool,
    pub comments: LoadState<Vec<Comment>>,
}

impl PostView {
    /// Decorate a freshly fetched post: collapsed, comments untouched.
    pub fn new(post: Post) -> Self {
        Self {
            post,
            expanded: false,
            comments: LoadState::Idle,
        }
    }

    /// Whether expanding this post should issue a comments fetch.
    ///
    /// True only when no fetch is in flight and none has succeeded; a
    /// prior failure counts as "not fetched" so the user can retry by
    /// collapsing and expanding again.
    pub fn needs_comments(&self) -> bool {
        matches!(self.comments, LoadState::Idle | LoadState::Failed(_))
    }

    /// The loaded comments, or an empty slice before a successful fetch.
    pub fn comments(&self) -> &[Comment] {
        self.comments.data().map(Vec::as_slice).unwrap_or_default()
    }
}
