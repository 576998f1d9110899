//! Actix Web surface exposing the MJPEG stream, the home and log pages, the
//! log tail, and the memory status route.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use actix_web::{App, HttpResponse, HttpServer, web};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use video_ingest::{CameraSource, JpegEncoder};

use crate::{
    config::ServerConfig,
    html,
    logs::{self, LOG_TAIL_LINES, NO_LOGS_PLACEHOLDER},
    status,
    stream::{CameraFeed, SharedFeed, mjpeg_stream},
};

/// Shared state backing HTTP handlers.
pub(crate) struct ServerState {
    pub(crate) feed: SharedFeed,
    pub(crate) log_path: PathBuf,
}

/// Bring up the HTTP surface on the configured bind address.
///
/// Runs a single-worker actix system; the camera is already open by the time
/// any route exists, so `/video` is never served without a device behind it.
pub(crate) fn run(config: ServerConfig, camera: CameraSource, encoder: JpegEncoder) -> Result<()> {
    let feed: SharedFeed = Arc::new(Mutex::new(CameraFeed::new(camera, encoder)));
    let state = web::Data::new(ServerState {
        feed,
        log_path: config.log_path.clone(),
    });

    actix_web::rt::System::new().block_on(async move {
        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .configure(routes)
        })
        .workers(1)
        .bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
        .run();

        info!(
            "preview server listening on http://{}:{}",
            config.host, config.port
        );
        server.await.context("http server failed")
    })
}

/// Route table shared between the real server and the test harness.
pub(crate) fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/video", web::get().to(video_feed))
        .route("/logs", web::get().to(log_page))
        .route("/logs/live", web::get().to(live_logs))
        .route("/status", web::get().to(server_status))
        .route("/test_rout", web::get().to(test_rout));
}

/// Attach the caller to the shared stream generator.
async fn video_feed(state: web::Data<ServerState>) -> HttpResponse {
    info!("video stream requested");
    HttpResponse::Ok()
        .append_header(("Cache-Control", "no-cache"))
        .append_header(("Content-Type", "multipart/x-mixed-replace; boundary=frame"))
        .streaming(mjpeg_stream(state.feed.clone()))
}

/// Home page embedding the video stream.
async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html::index::HOME_HTML)
}

/// Static page that polls the log tail.
async fn log_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html::log_view::LOGS_HTML)
}

/// Last lines of the log file, or a placeholder while none exists.
async fn live_logs(state: web::Data<ServerState>) -> HttpResponse {
    let body = match logs::tail_lines(&state.log_path, LOG_TAIL_LINES) {
        Some(lines) => lines.join("<br>"),
        None => NO_LOGS_PLACEHOLDER.to_string(),
    };
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    memory_usage_gb: f64,
}

/// Process memory usage plus a fixed status string.
async fn server_status() -> HttpResponse {
    let memory_usage_gb = status::memory_usage_gb();
    info!("memory usage: {memory_usage_gb:.2} GB");
    HttpResponse::Ok().json(StatusResponse {
        status: "running",
        memory_usage_gb,
    })
}

/// Debug route kept from the first deployment checks.
async fn test_rout() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "success" }))
}
