use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use base64::Engine;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use noisegrid::NoiseParams;

#[derive(Deserialize)]
struct GenerateRequest {
    seed: Option<u64>,
    size: Option<usize>,
    interval: Option<u32>,
    height: Option<f32>,
    octaves: Option<f32>,
    /// Include the buffer itself (base64 little-endian f32) in the response.
    include_values: Option<bool>,
}

#[derive(Serialize)]
struct GenerateResponse {
    size: usize,
    min: f32,
    max: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<String>,
    timings: Vec<TimingEntry>,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

fn encode_values(values: &[f32]) -> String {
    let mut buf = Vec::with_capacity(values.len() * 4);
    for v in values {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    base64::engine::general_purpose::STANDARD.encode(&buf)
}

async fn generate_handler(
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let defaults = NoiseParams::default();
    let params = NoiseParams {
        autogenerate: false,
        noise_size: req.size.unwrap_or(defaults.noise_size),
        seed: req.seed.unwrap_or(defaults.seed),
        interval: req.interval.unwrap_or(defaults.interval),
        height: req.height.unwrap_or(defaults.height),
        octaves: req.octaves.unwrap_or(defaults.octaves),
    };
    let include_values = req.include_values.unwrap_or(false);

    let result = tokio::task::spawn_blocking(move || noisegrid::generate(&params))
        .await
        .unwrap();

    match result {
        Ok((grid, timings)) => {
            let (min, max) = grid.range();
            Ok(Json(GenerateResponse {
                size: grid.size(),
                min,
                max,
                values: include_values.then(|| encode_values(&grid.data)),
                timings: timings
                    .iter()
                    .map(|t| TimingEntry {
                        name: t.name.to_string(),
                        ms: t.ms,
                    })
                    .collect(),
            }))
        }
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.to_string() })),
        )),
    }
}

#[tokio::main]
async fn main() {
    let app = Router::new()
        .route("/api/generate", post(generate_handler))
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    eprintln!("noise server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
