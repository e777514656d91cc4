//! In-memory session state: which event a user belongs to, and the voice
//! notes collected per event.
//!
//! Both tables live for the process lifetime. There is no eviction and no
//! removal operation; a restart starts from empty.

use std::collections::HashMap;
use std::sync::Arc;
use teloxide::types::UserId;
use tokio::sync::Mutex;

/// Shared store of user -> event-code associations and per-event voice
/// submissions.
///
/// Cloning is cheap; all clones share the same underlying tables. Handlers
/// for different chats may run concurrently, so each operation takes the
/// relevant table lock for the duration of that single call only.
#[derive(Clone, Default)]
pub struct SessionStore {
    /// Current event code for each user, if any
    event_codes: Arc<Mutex<HashMap<UserId, String>>>,
    /// Voice note file ids per event code, in arrival order
    submissions: Arc<Mutex<HashMap<String, Vec<String>>>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `user` with `code`, overwriting any previous association.
    ///
    /// Codes are taken verbatim: no trimming, no normalization, and no
    /// uniqueness check beyond string equality.
    pub async fn set_event_code(&self, user: UserId, code: impl Into<String>) {
        let mut codes = self.event_codes.lock().await;
        codes.insert(user, code.into());
    }

    /// Returns the event code currently associated with `user`, if any.
    pub async fn get_event_code(&self, user: UserId) -> Option<String> {
        let codes = self.event_codes.lock().await;
        codes.get(&user).cloned()
    }

    /// Appends a voice note reference to the sequence for `code`, creating
    /// the sequence on first submission.
    ///
    /// Duplicate references are kept: resubmitting the same note stores it
    /// twice.
    pub async fn append_voice(&self, code: &str, reference: impl Into<String>) {
        let mut submissions = self.submissions.lock().await;
        submissions.entry(code.to_string()).or_default().push(reference.into());
    }

    /// Returns the voice note references submitted under `code`, in arrival
    /// order, or an empty vector for an unknown code.
    ///
    /// This is the retrieval seam for an organizer-facing export; the bot
    /// itself only appends.
    pub async fn submissions_for(&self, code: &str) -> Vec<String> {
        let submissions = self.submissions.lock().await;
        submissions.get(code).cloned().unwrap_or_default()
    }
}
