//! Camera device lifecycle and on-demand frame capture.

use chrono::Utc;
use opencv::{
    prelude::*,
    videoio::{self, VideoCapture},
};
use tracing::{error, info, warn};

use crate::types::{CaptureError, Frame};

/// Exclusive owner of one `VideoCapture` device handle.
///
/// The handle is opened once at startup and stays open for the process
/// lifetime. Frames are pulled on demand; there is no background capture
/// thread and no buffering between reads.
pub struct CameraSource {
    index: i32,
    cap: VideoCapture,
    released: bool,
}

impl CameraSource {
    /// Open camera `index`, preferring the V4L backend before falling back
    /// to whatever OpenCV auto-detects.
    ///
    /// Failure is terminal for startup: callers must not bring up the HTTP
    /// surface without an open handle.
    pub fn open(index: i32) -> Result<Self, CaptureError> {
        for backend in [videoio::CAP_V4L, videoio::CAP_ANY] {
            match VideoCapture::new(index, backend) {
                Ok(cap) => {
                    if cap.is_opened().map_err(|e| CaptureError::Other(e.into()))? {
                        info!("camera #{index} opened");
                        return Ok(Self {
                            index,
                            cap,
                            released: false,
                        });
                    }
                }
                Err(err) => {
                    warn!("camera #{index}: backend {backend} failed: {err}");
                }
            }
        }
        error!("camera #{index}: no backend could open the device");
        Err(CaptureError::Open { index })
    }

    /// Grab and decode one frame.
    ///
    /// Every failure mode (capture error, failed grab, empty frame) is
    /// logged and collapsed into `None`; the caller decides whether that
    /// ends its session. No retry happens here.
    pub fn read(&mut self) -> Option<Frame> {
        let mut mat = Mat::default();
        match self.cap.read(&mut mat) {
            Ok(true) => {}
            Ok(false) => {
                error!("camera #{}: device returned no frame", self.index);
                return None;
            }
            Err(err) => {
                error!("camera #{}: frame read failed: {err}", self.index);
                return None;
            }
        }
        let size = match mat.size() {
            Ok(size) => size,
            Err(err) => {
                error!("camera #{}: frame size query failed: {err}", self.index);
                return None;
            }
        };
        if size.width <= 0 || size.height <= 0 {
            error!("camera #{}: empty frame", self.index);
            return None;
        }
        Some(Frame {
            mat,
            width: size.width,
            height: size.height,
            timestamp_ms: Utc::now().timestamp_millis(),
        })
    }

    /// Release the underlying device. Safe to call repeatedly.
    pub fn close(&mut self) {
        if self.released {
            return;
        }
        if let Err(err) = self.cap.release() {
            warn!("camera #{}: release failed: {err}", self.index);
        } else {
            info!("camera #{} closed", self.index);
        }
        self.released = true;
    }
}

impl Drop for CameraSource {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_rejects_unavailable_device() {
        // No machine enumerates this many video devices.
        let err = CameraSource::open(4096).unwrap_err();
        assert!(matches!(err, CaptureError::Open { index: 4096 }));
    }
}
