use opencv::core::Mat;
use thiserror::Error;

/// Raw BGR frame sampled from the camera at read time.
///
/// Frames are transient: they live long enough to be encoded and are not
/// retained afterwards.
pub struct Frame {
    pub mat: Mat,
    pub width: i32,
    pub height: i32,
    pub timestamp_ms: i64,
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to open camera device #{index}")]
    Open { index: i32 },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_the_device() {
        let err = CaptureError::Open { index: 3 };
        assert_eq!(err.to_string(), "failed to open camera device #3");
    }

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err = CaptureError::Other(anyhow::anyhow!("codec rejected frame"));
        assert_eq!(err.to_string(), "codec rejected frame");
    }
}
