pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .route("/status", get(handlers::handle_status))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GenerationMode};
    use crate::generation::ContentOrchestrator;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(config: Config) -> Router {
        let orchestrator = ContentOrchestrator::new(config).unwrap();
        build_router(AppState::new(orchestrator))
    }

    fn scenario_body() -> Value {
        json!({
            "location": {"city": "Lisbon", "neighborhood": "Campo de Ourique"},
            "features": {
                "bedrooms": 3,
                "bathrooms": 2,
                "area_sqm": 120,
                "balcony": true,
                "parking": false,
                "elevator": true,
                "floor": 2,
                "year_built": 2005
            },
            "price": 650000,
            "listing_type": "sale",
            "language": "en"
        })
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(Config::default()).oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "seo-listing-api");
    }

    #[tokio::test]
    async fn test_generate_returns_seven_fragments() {
        let response = app(Config::default())
            .oneshot(post_json("/generate", &scenario_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let content = body["content"].as_str().unwrap();
        let lines: Vec<&str> = content.split('\n').collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(
            lines[0],
            "<title>T3 Apartment for Sale in Campo de Ourique, Lisbon</title>"
        );
        assert!(lines[6].starts_with(r#"<p class="call-to-action">"#));
    }

    #[tokio::test]
    async fn test_generate_language_defaults_to_english() {
        let mut body = scenario_body();
        body.as_object_mut().unwrap().remove("language");
        let response = app(Config::default())
            .oneshot(post_json("/generate", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["content"].as_str().unwrap().contains("for Sale"));
    }

    #[tokio::test]
    async fn test_generate_rejects_negative_price() {
        let mut body = scenario_body();
        body["price"] = json!(-1);
        let response = app(Config::default())
            .oneshot(post_json("/generate", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_rejects_line_break_in_neighborhood() {
        let mut body = scenario_body();
        body["location"]["neighborhood"] = json!("Campo de Ourique\nNorth");
        let response = app(Config::default())
            .oneshot(post_json("/generate", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_rejects_unknown_listing_type() {
        let mut body = scenario_body();
        body["listing_type"] = json!("auction");
        let response = app(Config::default())
            .oneshot(post_json("/generate", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_generate_configuration_error_is_500() {
        let config = Config {
            generation_mode: GenerationMode::OpenAi,
            ..Config::default()
        };
        let response = app(config)
            .oneshot(post_json("/generate", &scenario_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Configuration error:"));
    }

    #[tokio::test]
    async fn test_status_template_mode_has_no_backend_fields() {
        let response = app(Config::default()).oneshot(get_request("/status")).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(
            body,
            json!({"generation_mode": "template", "status": "ready"})
        );
    }

    #[tokio::test]
    async fn test_status_ollama_mode_reports_model_and_url() {
        let config = Config {
            generation_mode: GenerationMode::Ollama,
            ..Config::default()
        };
        let response = app(config).oneshot(get_request("/status")).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body["generation_mode"], "ollama");
        assert_eq!(body["ollama_model"], "llama3.2");
        assert_eq!(body["ollama_url"], "http://localhost:11434");
        assert!(body.get("openai_model").is_none());
    }
}
