//! Prompt templates for the ranking stage

pub mod template;

pub use template::MatchPromptTemplate;
