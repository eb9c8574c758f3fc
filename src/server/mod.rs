mod handlers;
mod state;

pub use handlers::{MessageResponse, health_handler, model_handler, predict_handler};
pub use state::AppState;

use axum::Router;
use axum::routing::get;
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/predict-purchase-intent", get(predict_handler))
        .route("/PurchaseIntent", get(predict_handler))
        .route("/health", get(health_handler))
        .route("/model", get(model_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::trained_bundle;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_router(Arc::new(AppState::new(trained_bundle())))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    const SCENARIO_QUERY: &str = "category=Smart%20Watches&brand=Samsung&price=980.39&age=35&gender=1&frequency=7&satisfaction=2";

    #[tokio::test]
    async fn predicts_a_label_for_a_known_request() {
        let (status, json) =
            get_json(test_app(), &format!("/predict-purchase-intent?{SCENARIO_QUERY}")).await;
        assert_eq!(status, StatusCode::OK);
        let message = json["message"].as_str().unwrap();
        assert!(
            message == "Purchase" || message == "No Purchase",
            "message={message}"
        );
    }

    #[tokio::test]
    async fn legacy_route_accepts_short_parameter_names() {
        let (_, modern) =
            get_json(test_app(), &format!("/predict-purchase-intent?{SCENARIO_QUERY}")).await;
        let (status, legacy) = get_json(
            test_app(),
            "/PurchaseIntent?PrCa=Smart+Watches&PrBr=Samsung&PrPr=980.39&CuAge=35&CuGe=1&PuFr=7&CuSa=2",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(legacy, modern);
    }

    #[tokio::test]
    async fn unseen_category_is_reported_in_the_message() {
        let (status, json) = get_json(
            test_app(),
            "/predict-purchase-intent?category=Nonexistent%20Category&brand=Samsung&price=980.39&age=35&gender=1&frequency=7&satisfaction=2",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["message"],
            "Error: unknown category 'Nonexistent Category' for ProductCategory"
        );
    }

    #[tokio::test]
    async fn bad_number_and_missing_parameter_are_reported() {
        let (_, json) = get_json(
            test_app(),
            "/predict-purchase-intent?category=Laptops&brand=Apple&price=cheap&age=35&gender=1&frequency=7&satisfaction=2",
        )
        .await;
        assert_eq!(
            json["message"],
            "Error: ProductPrice must be a number, got 'cheap'"
        );

        let (_, json) = get_json(test_app(), "/predict-purchase-intent?category=Laptops").await;
        assert_eq!(json["message"], "Error: missing value for ProductBrand");
    }

    #[tokio::test]
    async fn malformed_query_still_answers_with_a_message() {
        let (status, json) = get_json(
            test_app(),
            "/predict-purchase-intent?category=Laptops&PrCa=Laptops",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["message"].as_str().unwrap().starts_with("Error: "));
    }

    #[tokio::test]
    async fn health_reports_ready() {
        let (status, json) = get_json(test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ready");
    }

    #[tokio::test]
    async fn model_endpoint_exposes_the_training_report() {
        let (status, json) = get_json(test_app(), "/model").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["dataset_rows"], 400);
        assert_eq!(json["train_rows"], 300);
        assert_eq!(json["test_rows"], 100);
        assert_eq!(json["forest"]["n_estimators"], 20);
        assert!(
            json["categories"]
                .as_array()
                .unwrap()
                .iter()
                .any(|c| c == "Smart Watches")
        );
        assert!(json["holdout"].as_array().unwrap().iter().any(|m| m["name"] == "accuracy"));
    }

    #[test]
    fn error_messages_are_prefixed() {
        let response = MessageResponse::error("boom");
        assert_eq!(response.message, "Error: boom");
        assert!(response.is_error());
        assert!(!MessageResponse::new("Purchase").is_error());
    }
}
