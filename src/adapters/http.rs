use crate::core::classifier::NumberClassifier;
use crate::domain::model::{ClassificationError, ClassificationResponse, ErrorBody};
use crate::domain::ports::TriviaLookup;
use crate::utils::error::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const CLASSIFY_PATH: &str = "/api/classify-number";

impl IntoResponse for ClassificationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejecting request ({}): {}", self.classification(), self);
        (StatusCode::BAD_REQUEST, Json(ErrorBody::from(&self))).into_response()
    }
}

pub fn router<T: TriviaLookup + 'static>(classifier: Arc<NumberClassifier<T>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(CLASSIFY_PATH, get(classify_number::<T>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(classifier)
}

// A map never fails to extract, so a malformed query still gets a JSON error body.
async fn classify_number<T: TriviaLookup + 'static>(
    State(classifier): State<Arc<NumberClassifier<T>>>,
    Query(params): Query<HashMap<String, String>>,
) -> std::result::Result<Json<ClassificationResponse>, ClassificationError> {
    let raw = params.get("number").map(String::as_str);
    classifier.handle(raw).await.map(Json)
}

pub async fn serve<T: TriviaLookup + 'static>(
    addr: &str,
    classifier: Arc<NumberClassifier<T>>,
) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    tracing::info!("Classify endpoint: http://{}{}", addr, CLASSIFY_PATH);

    axum::serve(listener, router(classifier))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
