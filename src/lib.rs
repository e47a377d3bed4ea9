// SafeDose: misinformation, persuasion and source-trust scoring for text.
//
// This is the library root. The three scorers live under `scoring`; the
// HTTP API is behind the `web` feature.

pub mod config;
pub mod models;
pub mod output;
pub mod scoring;
pub mod text;
pub mod topics;

#[cfg(feature = "web")]
pub mod web;
