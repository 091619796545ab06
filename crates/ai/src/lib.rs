//! # MediTrack AI
//!
//! Client for the external notes-summarization collaborator.
//!
//! The core system treats summarization as an opaque capability: given a
//! non-empty blob of patient notes it returns a summary string or fails with
//! a provider error. This crate owns the prompt template, the HTTP contract
//! and the error taxonomy; it performs no retries and enforces no timeout of
//! its own.

pub mod client;
pub mod prompts;

pub use client::{NotesSummarizer, SummarizerConfig};

/// Errors surfaced by the summarization collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    /// Rejected locally before any provider call
    #[error("patient notes cannot be empty")]
    EmptyInput,
    /// Bad client configuration, caught at startup
    #[error("invalid summarizer configuration: {0}")]
    InvalidConfig(String),
    /// The request could not be completed
    #[error("summarization request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a failure
    #[error("summarization provider error: {0}")]
    Provider(String),
    /// The provider answered with an unexpected body
    #[error("summarization provider returned an unreadable response: {0}")]
    InvalidResponse(String),
}

/// Result type for summarization operations.
pub type SummarizeResult<T> = Result<T, SummarizeError>;
