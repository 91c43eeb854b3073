//! Clients for remote completion APIs.

pub mod openai_chat;

pub use openai_chat::{CompletionError, OpenAiChat};
