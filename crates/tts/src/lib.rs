#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod http_client;
mod provider;
mod types;

pub use client::{MAX_CHUNK_CHARS, SpeechClient, chunk_text};
pub use error::{Result, TtsError};
pub use provider::{TtsProvider, openai_tts::OpenAiTtsProvider};
pub use types::{SpeechRequest, SpeechResponse};
