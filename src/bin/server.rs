use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use cutlist::{DEFAULT_KERF, Layout, Packer, PieceRequest, Rect};
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Deserialize, Serialize)]
struct OptimizeRequest {
    stock: Rect,
    pieces: Vec<PieceRequest>,
    #[serde(default = "default_kerf")]
    kerf: f64,
}

fn default_kerf() -> f64 {
    DEFAULT_KERF
}

#[derive(Serialize)]
struct OptimizeResponse {
    #[serde(flatten)]
    layout: Layout,
    board_count: usize,
    waste_percent: f64,
}

async fn optimize(
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, (StatusCode, String)> {
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /optimize"
    );

    let layout = Packer::new(req.stock, req.kerf, req.pieces)
        .pack()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let response = OptimizeResponse {
        board_count: layout.board_count(),
        waste_percent: layout.waste_percent(),
        layout,
    };

    Ok(Json(response))
}

#[tokio::main]
async fn main() {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")
        .expect("failed to open development.log");

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let app = Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/optimize", post(optimize))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    eprintln!("Listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}
