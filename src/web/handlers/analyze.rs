// Scoring handlers: POST /api/v1/{analyze, detect-misinformation,
// analyze-persuasion, get-trusted-alternatives}.
//
// All four take the same AnalysisRequest body and differ only in which
// scorer runs. Oversized text is rejected with 413; a scorer error becomes
// a 500 with the cause in the message.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error};

use crate::models::AnalysisRequest;
use crate::scoring::traits::TextScorer;
use crate::web::{api_error, AppState};

/// POST /api/v1/analyze, all three scorers plus recommendations.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Response {
    run_scorer(state.analyzer.as_ref(), &request, state.config.max_text_chars)
}

/// POST /api/v1/detect-misinformation
pub async fn detect_misinformation(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Response {
    run_scorer(
        &state.analyzer.misinformation,
        &request,
        state.config.max_text_chars,
    )
}

/// POST /api/v1/analyze-persuasion
pub async fn analyze_persuasion(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Response {
    run_scorer(
        &state.analyzer.persuasion,
        &request,
        state.config.max_text_chars,
    )
}

/// POST /api/v1/get-trusted-alternatives
pub async fn get_trusted_alternatives(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Response {
    run_scorer(&state.analyzer.trusted, &request, state.config.max_text_chars)
}

fn run_scorer<S: TextScorer>(scorer: &S, request: &AnalysisRequest, max_chars: usize) -> Response {
    let chars = request.text.chars().count();
    if chars > max_chars {
        return api_error(
            StatusCode::PAYLOAD_TOO_LARGE,
            &format!("Text is {chars} characters; the limit is {max_chars}"),
        );
    }

    debug!(scorer = scorer.name(), chars, "Scoring request");

    match scorer.score(request) {
        Ok(output) => Json(output).into_response(),
        Err(e) => {
            error!(scorer = scorer.name(), error = %e, "Scoring failed");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("{} failed: {e}", scorer.name()),
            )
        }
    }
}
