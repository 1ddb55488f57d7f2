// ============================================================================
// Routes
// Router and request handlers
// ============================================================================

use super::dto::{CalcForm, CalcQuery, CalcSuccess, HealthResponse};
use super::error::{form_message, ApiError};
use super::page::{self, FormView};
use crate::domain::CalculationRequest;
use crate::engine::Calculator;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router around a shared calculator
pub fn build_router(calculator: Arc<Calculator>) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/api/calc", get(calc_api))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(calculator)
}

/// GET / - blank form
pub async fn show_form() -> Html<String> {
    Html(page::render(&FormView::empty()))
}

/// POST / - calculate and re-render the form with sticky values
pub async fn submit_form(
    State(calculator): State<Arc<Calculator>>,
    Form(form): Form<CalcForm>,
) -> Html<String> {
    let request = CalculationRequest::new(form.num1.trim(), form.num2.trim(), form.operation);
    let outcome = calculator.calculate_request(&request);

    let mut view = FormView {
        num1: request.num1.unwrap_or_default(),
        num2: request.num2.unwrap_or_default(),
        operation: request.operation,
        result: None,
        error: None,
    };

    match outcome {
        Ok(calc) => view.result = Some(calc.formatted),
        Err(error) => {
            tracing::warn!(error = error.code(), "Form calculation rejected");
            view.error = Some(form_message(error).to_string());
        }
    }

    Html(page::render(&view))
}

/// GET /api/calc?num1=&num2=&op=
pub async fn calc_api(
    State(calculator): State<Arc<Calculator>>,
    Query(query): Query<CalcQuery>,
) -> Result<Json<CalcSuccess>, ApiError> {
    let request = CalculationRequest::from(query);
    let calc = calculator
        .calculate_request(&request)
        .inspect_err(|error| {
            tracing::warn!(
                error = error.code(),
                op = %request.operation,
                "API calculation rejected"
            );
        })?;

    Ok(Json(CalcSuccess::new(calc.formatted, calc.operation)))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
