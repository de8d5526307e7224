//! Completion service adapters

pub mod openai;

pub use openai::OpenAiCompletionGateway;
