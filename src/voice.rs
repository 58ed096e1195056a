//! Speech-capture seam for voice input.
//!
//! Voice input is an optional collaborator: a finder without one attached
//! answers [`Command::VoiceInput`](crate::Command::VoiceInput) with a
//! "voice input is not supported" notice instead of invoking anything. A
//! successful capture yields a single transcribed phrase that feeds
//! [`Pantry::add`](crate::Pantry::add).

use async_trait::async_trait;

use crate::error::Result;

/// A collaborator that can transcribe one spoken phrase.
///
/// Implementations wrap whatever speech facility the embedding platform
/// offers. The finder only ever asks for one phrase at a time.
#[async_trait]
pub trait SpeechCapture: Send + Sync {
    /// Captures and transcribes a single phrase.
    async fn capture(&self) -> Result<String>;
}
