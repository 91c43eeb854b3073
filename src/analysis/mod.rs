//! Content analysis core.
//!
//! Two pure functions wrap the remote model:
//! - [`prompt::build_analysis_prompt`] renders the deterministic instruction
//!   string for one piece of text.
//! - [`normalize::normalize`] recovers a well-formed result record from the
//!   model's free-form reply, degrading instead of failing.

pub mod normalize;
pub mod prompt;
pub mod result;

pub use normalize::normalize;
pub use prompt::{ANALYST_SYSTEM_PROMPT, build_analysis_prompt};
pub use result::{AnalysisResult, AnalyzeRequest, RecoveryStatus, ToneType, Verdict};
