//! Scoring service API module.
//!
//! The scoring service is an external collaborator: this module owns the
//! wire models for the submission body and the feedback it returns, plus
//! the HTTP client that carries the single outbound request.

pub mod client;
pub mod models;

pub use client::ScoringClient;
pub use models::{AnswerSet, CandidateProfile, FeedbackResult, InterviewRequest};
