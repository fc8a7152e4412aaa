//! Homework review pipeline.
//!
//! 1) Resolve owner/name from the repository URL
//! 2) Fetch matching source files (`git-repo-fetcher`) and join them
//! 3) Build the review prompt and call the chat model once (`ai-llm-service`)
//! 4) Parse the reply into [`HomeworkFeedback`]
//!
//! No retries, no caching, no concurrency: every step is awaited in order.

pub mod checker;
pub mod clients;
pub mod config;
pub mod errors;
pub mod feedback;
pub mod prompt;

pub use checker::HomeworkChecker;
pub use clients::{ChatCompletion, SourceFetcher};
pub use config::ReviewConfig;
pub use errors::{ReviewError, ReviewResult};
pub use feedback::{HomeworkFeedback, SCORE_MARKER, parse_feedback};
