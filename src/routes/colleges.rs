use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{summarize, Matcher};
use crate::models::{ErrorResponse, HealthResponse, MatchRequest};
use crate::services::CollegeDataset;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: CollegeDataset,
    pub matcher: Matcher,
}

impl AppState {
    pub fn new(dataset: CollegeDataset) -> Self {
        Self {
            dataset,
            matcher: Matcher::new(),
        }
    }
}

/// Configure all college routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/colleges", web::get().to(list_colleges))
        .route("/colleges/match", web::post().to(match_colleges))
        .route("/colleges/insights", web::post().to(match_insights));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let colleges = state.dataset.len();
    let status = if colleges > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        colleges,
    })
}

/// Full dataset endpoint
///
/// GET /api/v1/colleges
async fn list_colleges(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.dataset.records())
}

/// Match colleges endpoint
///
/// POST /api/v1/colleges/match
///
/// Request body:
/// ```json
/// {
///   "filters": {
///     "maxBudget": 40000,
///     "minGradRate": 60,
///     "maxDebt": 30000,
///     "statePreference": "CA",
///     "demographic": "Any",
///     "isStudentParent": false
///   },
///   "weights": { "budget": 3, "gradRate": 2, "state": 1, "debt": 1, "childcare": 1 },
///   "sortBy": "matchScore"
/// }
/// ```
async fn match_colleges(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(response) = validate_request(&req) {
        return response;
    }

    let result = state.matcher.find_matches(state.dataset.records(), &req);

    tracing::info!(
        "Returning {} matches from {} colleges (sort: {:?})",
        result.total,
        state.dataset.len(),
        req.sort_by
    );

    HttpResponse::Ok().json(result)
}

/// Insights over the eligible set
///
/// POST /api/v1/colleges/insights
///
/// Takes the same body as the match endpoint.
async fn match_insights(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(response) = validate_request(&req) {
        return response;
    }

    let result = state.matcher.find_matches(state.dataset.records(), &req);
    let insights = summarize(&result.colleges);

    tracing::info!("Summarised {} matched colleges", insights.count);

    HttpResponse::Ok().json(insights)
}

fn validate_request(req: &MatchRequest) -> Result<(), HttpResponse> {
    req.validate().map_err(|errors| {
        tracing::info!("Validation failed for match request: field_errors={:?}", errors);
        HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        })
    })
}
