//! JPEG encoding of captured frames.

use anyhow::anyhow;
use opencv::{
    core::Vector,
    imgcodecs::{self, IMWRITE_JPEG_QUALITY},
};

use crate::types::{CaptureError, Frame};

/// Stateless JPEG encoder with a fixed quality setting.
#[derive(Clone, Copy, Debug)]
pub struct JpegEncoder {
    quality: i32,
}

impl JpegEncoder {
    pub fn new(quality: i32) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Encode one frame into a JPEG byte buffer.
    ///
    /// A codec failure is reported like a failed read: the streaming session
    /// that requested the frame ends.
    pub fn encode(&self, frame: &Frame) -> Result<Vec<u8>, CaptureError> {
        let mut params = Vector::<i32>::new();
        params.push(IMWRITE_JPEG_QUALITY);
        params.push(self.quality);
        let mut buf = Vector::<u8>::new();
        let encoded = imgcodecs::imencode(".jpg", &frame.mat, &mut buf, &params)
            .map_err(|e| CaptureError::Other(e.into()))?;
        if !encoded {
            return Err(CaptureError::Other(anyhow!("jpeg encoder rejected frame")));
        }
        Ok(buf.to_vec())
    }
}
