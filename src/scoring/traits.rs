// Text scorer trait: the seam between the scorers and their callers.
//
// Each scorer (misinformation, persuasion, trusted messenger) implements this
// so the HTTP layer and the CLI can run any of them through the same path.
// Scorers hold only their compiled pattern tables, so one instance can be
// shared across requests.

use anyhow::Result;
use serde::Serialize;

use crate::models::AnalysisRequest;

/// Trait for scoring one request. Implementations are pure: the same
/// request always yields the same output.
pub trait TextScorer: Send + Sync {
    /// The JSON-serializable result this scorer produces.
    type Output: Serialize + Send;

    /// Short human-readable name, used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Score a single request.
    fn score(&self, request: &AnalysisRequest) -> Result<Self::Output>;
}
