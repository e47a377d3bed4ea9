// Scoring: the three independent text scorers and the full analysis that
// combines them.

pub mod analysis;
pub mod misinformation;
pub mod persuasion;
pub mod traits;
pub mod trusted;
