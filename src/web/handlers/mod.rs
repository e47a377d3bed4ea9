// Route handlers for the scoring API.

pub mod analyze;
