//! Single classification step for inbound messages

use teloxide::types::Message;

/// Command token that joins an event with an optional code argument.
///
/// Matched as a case-sensitive prefix of the raw text, so `/startfoo` is
/// still a start command with no argument.
pub const START_COMMAND: &str = "/start";

/// What an inbound message turned out to be.
///
/// Every message is classified exactly once; the router decides what each
/// variant does to session state and which reply it produces. `Unhandled`
/// makes the silent-drop path an explicit branch rather than an absence of
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound<'a> {
    /// `/start`, with the verbatim argument if one was given
    Start { code: Option<&'a str> },
    /// Any other text
    FreeText(&'a str),
    /// A voice note; `reference` is the transport-side file id
    Voice { reference: Option<&'a str> },
    /// Anything else (photos, stickers, locations, ...)
    Unhandled,
}

/// Classifies a message. Text is checked before voice; a Telegram message
/// carries at most one of the two.
pub fn classify(msg: &Message) -> Inbound<'_> {
    if let Some(text) = msg.text() {
        if text.starts_with(START_COMMAND) {
            Inbound::Start {
                code: start_argument(text),
            }
        } else {
            Inbound::FreeText(text)
        }
    } else if let Some(voice) = msg.voice() {
        Inbound::Voice {
            reference: Some(voice.file.id.0.as_str()),
        }
    } else {
        Inbound::Unhandled
    }
}

/// Extracts the event code argument from a `/start` text: everything after
/// the first run of whitespace, verbatim.
///
/// Internal and trailing whitespace in the argument is preserved. A
/// remainder that is entirely whitespace counts as no argument.
pub fn start_argument(text: &str) -> Option<&str> {
    let split_at = text.find(char::is_whitespace)?;
    let argument = text[split_at..].trim_start();
    (!argument.is_empty()).then_some(argument)
}
