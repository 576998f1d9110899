//! The MJPEG stream generator: a timer-paced loop that pulls one frame per
//! tick and frames it as one multipart part.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use actix_web::web::Bytes;
use async_stream::stream;
use futures_core::Stream;
use tracing::error;
use video_ingest::{CameraSource, JpegEncoder};

/// Fixed pacing between frames; caps the stream at roughly 33 fps and yields
/// control to the runtime between iterations. Not adaptive to encode or
/// network latency.
pub(crate) const FRAME_INTERVAL: Duration = Duration::from_millis(30);

/// Source of ready-to-send JPEG buffers.
///
/// `None` ends the current streaming session; the generator never polls a
/// feed again after it returned `None`.
pub(crate) trait JpegFeed {
    fn next_jpeg(&mut self) -> Option<Vec<u8>>;
}

/// Handle to the single process-wide feed, shared by every `/video` client.
///
/// Concurrent sessions interleave reads on the same camera with no
/// coordination, so each client observes a subset of the captured frames.
/// Accepted limitation of the single-device design.
pub(crate) type SharedFeed = Arc<Mutex<dyn JpegFeed + Send>>;

/// Production feed: one camera read plus one JPEG encode per pull.
pub(crate) struct CameraFeed {
    camera: CameraSource,
    encoder: JpegEncoder,
}

impl CameraFeed {
    pub(crate) fn new(camera: CameraSource, encoder: JpegEncoder) -> Self {
        Self { camera, encoder }
    }
}

impl JpegFeed for CameraFeed {
    fn next_jpeg(&mut self) -> Option<Vec<u8>> {
        let frame = self.camera.read()?;
        match self.encoder.encode(&frame) {
            Ok(jpeg) => Some(jpeg),
            Err(err) => {
                error!("jpeg encode failed: {err}");
                None
            }
        }
    }
}

/// Wrap one encoded frame in the fixed multipart template.
pub(crate) fn multipart_part(jpeg: &[u8]) -> Bytes {
    let mut payload = Vec::with_capacity(jpeg.len() + 48);
    payload.extend_from_slice(b"--frame\r\n");
    payload.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    payload.extend_from_slice(jpeg);
    payload.extend_from_slice(b"\r\n");
    Bytes::from(payload)
}

/// Timer-paced producer behind `GET /video`.
///
/// Each iteration suspends at the interval tick, pulls one frame, and yields
/// one complete part. The first failed pull ends the stream without emitting
/// anything partial. There is no backpressure: a slow client accumulates
/// chunks at the transport layer.
pub(crate) fn mjpeg_stream(
    feed: SharedFeed,
) -> impl Stream<Item = Result<Bytes, actix_web::Error>> {
    stream! {
        let mut interval = actix_web::rt::time::interval(FRAME_INTERVAL);
        loop {
            interval.tick().await;
            let jpeg = match feed.lock() {
                Ok(mut guard) => guard.next_jpeg(),
                Err(_) => {
                    error!("camera feed mutex poisoned, closing stream");
                    break;
                }
            };
            match jpeg {
                Some(jpeg) => yield Ok::<Bytes, actix_web::Error>(multipart_part(&jpeg)),
                None => {
                    error!("no frame received, closing stream");
                    break;
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use futures_util::StreamExt;

    use super::testing::{ScriptedFeed, fake_jpeg};
    use super::*;

    const PART_HEADER: &[u8] = b"--frame\r\nContent-Type: image/jpeg\r\n\r\n";

    fn part_body(part: &[u8]) -> &[u8] {
        assert!(part.starts_with(PART_HEADER), "missing boundary/header");
        assert!(part.ends_with(b"\r\n"), "missing trailing CRLF");
        &part[PART_HEADER.len()..part.len() - 2]
    }

    #[test]
    fn part_template_preserves_jpeg_bytes() {
        let jpeg = fake_jpeg(7);
        let part = multipart_part(&jpeg);
        assert_eq!(part_body(&part), jpeg.as_slice());
        assert_eq!(part.len(), PART_HEADER.len() + jpeg.len() + 2);
    }

    #[actix_web::test]
    async fn emits_one_part_per_frame_then_stops() {
        let (feed, shared) = ScriptedFeed::with_frames(5).shared();
        let parts: Vec<_> = mjpeg_stream(shared).collect().await;

        assert_eq!(parts.len(), 5);
        // Five successful pulls plus the one that ended the session; the
        // failed sixth read is never retried.
        assert_eq!(feed.lock().unwrap().polls, 6);

        for (tag, part) in parts.iter().enumerate() {
            let part = part.as_ref().expect("stream item");
            let body = part_body(part);
            assert_eq!(body, fake_jpeg(tag as u8).as_slice());
            assert_eq!(body[..2], [0xFF, 0xD8]);
        }
    }

    #[actix_web::test]
    async fn failed_first_read_yields_no_parts() {
        let (feed, shared) = ScriptedFeed::with_frames(0).shared();
        let parts: Vec<_> = mjpeg_stream(shared).collect().await;
        assert!(parts.is_empty());
        assert_eq!(feed.lock().unwrap().polls, 1);
    }
}
