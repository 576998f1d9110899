//! OpenCV-backed camera capture and JPEG encoding for the preview server.
//!
//! `CameraSource` owns the device handle for the whole process lifetime;
//! `JpegEncoder` turns captured frames into wire-ready JPEG buffers.

mod camera;
mod encode;
mod types;

pub use camera::CameraSource;
pub use encode::JpegEncoder;
pub use types::{CaptureError, Frame};
