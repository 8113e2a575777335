/// HTTP server for the AI Health Advisor
/// Exposes the analysis pipeline as JSON endpoints and serves the frontend page

use axum::{
    extract::Json,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use health_advisor::{
    analyze_symptoms, answer_question, translate_summary, AdvisorConfig, AdvisorError,
    HealthSummary, SUPPORTED_LANGUAGES,
};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Symptom analysis request from the frontend
#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    symptom: String,
    #[serde(default)]
    language: Option<String>,
}

/// Symptom analysis response to the frontend
#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<HealthSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuestionRequest {
    question: String,
}

#[derive(Debug, Serialize)]
struct QuestionResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranslateRequest {
    summary: HealthSummary,
    #[serde(alias = "targetLanguage")]
    target_language: String,
}

fn error_status(error: &AdvisorError) -> StatusCode {
    match error {
        AdvisorError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        AdvisorError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        AdvisorError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        AdvisorError::CreditsExhausted => StatusCode::PAYMENT_REQUIRED,
        AdvisorError::Http(_) | AdvisorError::Upstream(_) => StatusCode::BAD_GATEWAY,
        AdvisorError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Frontend page
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Supported languages for the frontend selector
async fn languages() -> impl IntoResponse {
    Json(SUPPORTED_LANGUAGES)
}

/// Main symptom-analysis endpoint
async fn analyze(Json(payload): Json<AnalyzeRequest>) -> impl IntoResponse {
    let request_id = format!("req_{}", uuid::Uuid::new_v4());
    info!(
        "incoming analysis request - id: {request_id}, symptom length: {}",
        payload.symptom.len()
    );

    let config = match AdvisorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration failed - id: {request_id}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AnalyzeResponse {
                    success: false,
                    result: None,
                    error: Some(e.to_string()),
                }),
            );
        }
    };

    match analyze_symptoms(&config, &payload.symptom, payload.language.as_deref()).await {
        Ok(summary) => {
            info!("analysis succeeded - id: {request_id}, condition: {}", summary.disease);
            (
                StatusCode::OK,
                Json(AnalyzeResponse {
                    success: true,
                    result: Some(summary),
                    error: None,
                }),
            )
        }
        Err(e) => {
            error!("analysis failed - id: {request_id}: {e}");
            (
                error_status(&e),
                Json(AnalyzeResponse {
                    success: false,
                    result: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

/// Free-form health question endpoint
async fn question(Json(payload): Json<QuestionRequest>) -> impl IntoResponse {
    let request_id = format!("req_{}", uuid::Uuid::new_v4());
    info!("incoming question request - id: {request_id}");

    let config = match AdvisorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration failed - id: {request_id}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(QuestionResponse {
                    success: false,
                    answer: None,
                    error: Some(e.to_string()),
                }),
            );
        }
    };

    match answer_question(&config, &payload.question).await {
        Ok(answer) => (
            StatusCode::OK,
            Json(QuestionResponse {
                success: true,
                answer: Some(answer),
                error: None,
            }),
        ),
        Err(e) => {
            error!("question failed - id: {request_id}: {e}");
            (
                error_status(&e),
                Json(QuestionResponse {
                    success: false,
                    answer: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

/// Translate an existing summary into another language
async fn translate(Json(payload): Json<TranslateRequest>) -> impl IntoResponse {
    let request_id = format!("req_{}", uuid::Uuid::new_v4());
    info!(
        "incoming translation request - id: {request_id}, target: {}",
        payload.target_language
    );

    let config = match AdvisorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration failed - id: {request_id}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AnalyzeResponse {
                    success: false,
                    result: None,
                    error: Some(e.to_string()),
                }),
            );
        }
    };

    match translate_summary(&config, &payload.summary, &payload.target_language).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(AnalyzeResponse {
                success: true,
                result: Some(summary),
                error: None,
            }),
        ),
        Err(e) => {
            error!("translation failed - id: {request_id}: {e}");
            (
                error_status(&e),
                Json(AnalyzeResponse {
                    success: false,
                    result: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("ADVISOR_HTTP_PORT")
        .unwrap_or_else(|_| "5001".to_string())
        .parse::<u16>()
        .unwrap_or(5001);

    info!("server configuration: port {port}");
    match AdvisorConfig::from_env() {
        Ok(config) => info!("Gemini API configured - model: {}", config.model),
        Err(e) => error!("{e}"),
    }

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/languages", get(languages))
        .route("/analyze", post(analyze))
        .route("/question", post(question))
        .route("/translate", post(translate))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind listener");

    info!("AI Health Advisor running on http://0.0.0.0:{port}");
    info!("  GET  /          - frontend page");
    info!("  POST /analyze   - structured symptom analysis");
    info!("  POST /question  - free-form health question");
    info!("  POST /translate - translate a summary");
    info!("  GET  /languages - supported languages");
    info!("  GET  /health    - server health");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server failed: {e}");
    }
}
