//! Routing policy: what each classified input does to session state and
//! what the bot says back.

use teloxide::types::UserId;

use crate::session::SessionStore;
use crate::telegram::classify::Inbound;

/// Applies one classified input to the store and returns the reply text,
/// or `None` when the input is dropped silently.
///
/// This is the whole state machine: each call is one independent unit of
/// work, and the only state it touches lives in the store.
pub async fn route(store: &SessionStore, user: UserId, inbound: Inbound<'_>) -> Option<String> {
    match inbound {
        Inbound::Start { code: None } => Some(replies::welcome()),
        Inbound::Start { code: Some(code) } => {
            store.set_event_code(user, code).await;
            log::info!("User {} joined event code via /start", user);
            Some(replies::joined(code))
        }
        Inbound::FreeText(text) => match store.get_event_code(user).await {
            // Any free text from a code-less user becomes their event code,
            // verbatim and unvalidated. Typos included; the reply echoes the
            // code back so the user can spot them.
            None => {
                store.set_event_code(user, text).await;
                log::info!("User {} set event code from free text", user);
                Some(replies::code_set(text))
            }
            Some(current) => Some(replies::already_assigned(&current)),
        },
        Inbound::Voice { reference: None } => {
            // Transport claimed a voice message but supplied no payload
            log::warn!("Voice message from user {} carried no file reference", user);
            Some(replies::invalid_voice())
        }
        Inbound::Voice {
            reference: Some(reference),
        } => match store.get_event_code(user).await {
            None => Some(replies::need_code_first()),
            Some(code) => {
                store.append_voice(&code, reference).await;
                log::info!("Stored voice note from user {} for an event", user);
                Some(replies::voice_saved())
            }
        },
        Inbound::Unhandled => None,
    }
}

/// Reply texts for every recognized input pattern.
pub mod replies {
    /// `/start` without a code
    pub fn welcome() -> String {
        "Welcome to the event voice bot!\n\
         You haven't provided an event code.\n\
         Please enter your event code now, or type /start <code> next time."
            .to_string()
    }

    /// `/start <code>`
    pub fn joined(code: &str) -> String {
        format!(
            "Hello participant! You've joined event code: {code}\n\
             Please send me a short voice note for this occasion."
        )
    }

    /// Free text from a user with no association yet
    pub fn code_set(code: &str) -> String {
        format!(
            "Thanks! Event code set to: {code}\n\
             Please send a voice note to record your message."
        )
    }

    /// Free text from a user who already has a code
    pub fn already_assigned(code: &str) -> String {
        format!(
            "You're already assigned to event code: {code}\n\
             Please send a voice note, or type /start <anotherCode> to switch events."
        )
    }

    /// Voice flag set but no payload attached
    pub fn invalid_voice() -> String {
        "No valid voice note detected.".to_string()
    }

    /// Voice note from a user with no association yet
    pub fn need_code_first() -> String {
        "I don't know which event you're participating in.\n\
         Type /start <yourEventCode> or just enter the code so I can record your note."
            .to_string()
    }

    /// Voice note stored
    pub fn voice_saved() -> String {
        "Thank you for your voice note! It's been saved.\n\
         After the deadline, the organizer will receive all voice notes."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const USER: UserId = UserId(42);

    #[tokio::test]
    async fn test_start_with_code_joins_event() {
        let store = SessionStore::new();
        let reply = route(&store, USER, Inbound::Start { code: Some("Birthday_2025") }).await;

        assert_eq!(store.get_event_code(USER).await.as_deref(), Some("Birthday_2025"));
        assert!(reply.unwrap().contains("joined event code: Birthday_2025"));
    }

    #[tokio::test]
    async fn test_bare_start_creates_no_association() {
        let store = SessionStore::new();
        let reply = route(&store, USER, Inbound::Start { code: None }).await;

        assert_eq!(store.get_event_code(USER).await, None);
        assert!(reply.unwrap().contains("haven't provided an event code"));
    }

    #[tokio::test]
    async fn test_free_text_becomes_event_code() {
        let store = SessionStore::new();
        let reply = route(&store, USER, Inbound::FreeText("MyWeddingXYZ")).await;

        assert_eq!(store.get_event_code(USER).await.as_deref(), Some("MyWeddingXYZ"));
        assert!(reply.unwrap().contains("Event code set to: MyWeddingXYZ"));
    }

    #[tokio::test]
    async fn test_free_text_does_not_overwrite_existing_code() {
        let store = SessionStore::new();
        store.set_event_code(USER, "CodeA").await;

        let reply = route(&store, USER, Inbound::FreeText("hello")).await;

        assert_eq!(store.get_event_code(USER).await.as_deref(), Some("CodeA"));
        assert!(reply.unwrap().contains("already assigned to event code: CodeA"));
    }

    #[tokio::test]
    async fn test_start_with_code_switches_event() {
        let store = SessionStore::new();
        store.set_event_code(USER, "CodeA").await;

        route(&store, USER, Inbound::Start { code: Some("CodeB") }).await;

        assert_eq!(store.get_event_code(USER).await.as_deref(), Some("CodeB"));
    }

    #[tokio::test]
    async fn test_voice_is_stored_under_current_code() {
        let store = SessionStore::new();
        store.set_event_code(USER, "Birthday_2025").await;

        let reply = route(&store, USER, Inbound::Voice { reference: Some("AAEE123") }).await;

        assert_eq!(store.submissions_for("Birthday_2025").await, vec!["AAEE123"]);
        assert!(reply.unwrap().contains("It's been saved"));
    }

    #[tokio::test]
    async fn test_voice_without_code_stores_nothing() {
        let store = SessionStore::new();
        let reply = route(&store, USER, Inbound::Voice { reference: Some("AAEE123") }).await;

        assert!(store.submissions_for("AAEE123").await.is_empty());
        assert!(reply.unwrap().contains("don't know which event"));
    }

    #[tokio::test]
    async fn test_voice_without_payload_is_rejected_without_mutation() {
        let store = SessionStore::new();
        store.set_event_code(USER, "CodeA").await;

        let reply = route(&store, USER, Inbound::Voice { reference: None }).await;

        assert!(store.submissions_for("CodeA").await.is_empty());
        assert_eq!(reply.unwrap(), "No valid voice note detected.");
    }

    #[tokio::test]
    async fn test_voice_stays_with_code_at_submission_time() {
        let store = SessionStore::new();
        store.set_event_code(USER, "CodeA").await;
        route(&store, USER, Inbound::Voice { reference: Some("ref1") }).await;

        // Switching events afterwards must not move the stored note
        route(&store, USER, Inbound::Start { code: Some("CodeB") }).await;
        route(&store, USER, Inbound::Voice { reference: Some("ref2") }).await;

        assert_eq!(store.submissions_for("CodeA").await, vec!["ref1"]);
        assert_eq!(store.submissions_for("CodeB").await, vec!["ref2"]);
    }

    #[tokio::test]
    async fn test_unhandled_input_is_silent() {
        let store = SessionStore::new();
        let reply = route(&store, USER, Inbound::Unhandled).await;

        assert_eq!(reply, None);
        assert_eq!(store.get_event_code(USER).await, None);
    }
}
