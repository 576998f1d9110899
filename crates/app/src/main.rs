mod config;
mod html;
mod logs;
mod server;
mod status;
mod stream;
mod telemetry;
mod users;

use tracing::error;
use video_ingest::{CameraSource, JpegEncoder};

use crate::config::ServerConfig;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = ServerConfig::from_args(&args)?;
    telemetry::init(&config.log_path)?;

    // The camera must be open before any route exists; an unopenable device
    // aborts startup instead of serving a dead `/video`.
    let camera = match CameraSource::open(config.camera_index) {
        Ok(camera) => camera,
        Err(err) => {
            error!("aborting startup: {err}");
            return Err(err.into());
        }
    };
    let encoder = JpegEncoder::new(config.jpeg_quality);

    server::run(config, camera, encoder)
}
