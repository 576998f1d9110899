use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};

const USAGE: &str = "Usage: camserve [--camera <index|/dev/videoN>] [--host <addr>] \
[--port <port>] [--jpeg-quality <1-100>] [--log-file <path>]";

#[derive(Clone, Debug)]
pub(crate) struct ServerConfig {
    pub(crate) camera_index: i32,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) jpeg_quality: i32,
    pub(crate) log_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            camera_index: 0,
            host: "0.0.0.0".to_string(),
            port: 8080,
            jpeg_quality: 85,
            log_path: PathBuf::from("server.log"),
        }
    }
}

impl ServerConfig {
    pub(crate) fn from_args(args: &[String]) -> Result<Self> {
        let mut config = Self::default();

        let mut idx = 1;
        while idx < args.len() {
            match args[idx].as_str() {
                "--camera" => {
                    idx += 1;
                    let value = args
                        .get(idx)
                        .ok_or_else(|| anyhow!("--camera requires a value"))?;
                    config.camera_index = parse_device_index(value).ok_or_else(|| {
                        anyhow!("--camera expects an index or /dev/videoN path, got {value:?}")
                    })?;
                    idx += 1;
                }
                "--host" => {
                    idx += 1;
                    config.host = args
                        .get(idx)
                        .ok_or_else(|| anyhow!("--host requires a value"))?
                        .clone();
                    idx += 1;
                }
                "--port" => {
                    idx += 1;
                    config.port = args
                        .get(idx)
                        .ok_or_else(|| anyhow!("--port requires a value"))?
                        .parse::<u16>()
                        .with_context(|| "--port must be an integer port number".to_string())?;
                    idx += 1;
                }
                "--jpeg-quality" => {
                    idx += 1;
                    let value = args
                        .get(idx)
                        .ok_or_else(|| anyhow!("--jpeg-quality requires a value"))?
                        .parse::<i32>()
                        .with_context(|| {
                            "--jpeg-quality must be an integer between 1 and 100".to_string()
                        })?;
                    if !(1..=100).contains(&value) {
                        bail!("--jpeg-quality must be an integer between 1 and 100");
                    }
                    config.jpeg_quality = value;
                    idx += 1;
                }
                "--log-file" => {
                    idx += 1;
                    let value = args
                        .get(idx)
                        .ok_or_else(|| anyhow!("--log-file requires a value"))?;
                    config.log_path = PathBuf::from(value);
                    idx += 1;
                }
                arg => {
                    bail!("Unrecognised flag: {arg}\n{USAGE}");
                }
            }
        }

        Ok(config)
    }
}

/// Resolve a bare index or a `/dev/videoX` path to a device index.
pub(crate) fn parse_device_index(value: &str) -> Option<i32> {
    if let Ok(index) = value.parse::<i32>() {
        return Some(index);
    }
    if let Some(stripped) = value.strip_prefix("/dev/video") {
        if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
            return stripped.parse::<i32>().ok();
        }
    }
    None
}
