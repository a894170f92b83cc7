// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns user-supplied images into size-bounded embeddable references.
//!
//! Empty, non-image, and unshrinkable inputs resolve to "no image" rather
//! than an error, so callers can treat the empty result as "no change".

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use futures::future::join_all;
use showcase_config::model::MediaConfig;
use showcase_core::EncodedImage;
use tracing::{debug, warn};

use crate::compress::{compress, Shrink};
use crate::source::ImageSource;

/// Image intake bound to one set of media limits.
#[derive(Debug, Clone, Default)]
pub struct ImageIntake {
    config: MediaConfig,
}

impl ImageIntake {
    pub fn new(config: MediaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MediaConfig {
        &self.config
    }

    /// Encodes one image. `None` when nothing usable was supplied.
    pub async fn encode_single(&self, source: Option<ImageSource>) -> Option<EncodedImage> {
        let source = source?;
        let config = self.config.clone();
        let label = source.label().to_string();
        match tokio::task::spawn_blocking(move || encode_blocking(source, &config)).await {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(image = %label, error = %e, "image worker failed");
                None
            }
        }
    }

    /// Encodes every image concurrently and waits for all of them.
    ///
    /// Output keeps input order; inputs that yield nothing are left out.
    pub async fn encode_all(&self, sources: Vec<ImageSource>) -> Vec<EncodedImage> {
        if sources.is_empty() {
            return Vec::new();
        }
        let jobs = sources.into_iter().map(|s| self.encode_single(Some(s)));
        join_all(jobs).await.into_iter().flatten().collect()
    }
}

fn encode_blocking(source: ImageSource, config: &MediaConfig) -> Option<EncodedImage> {
    if source.is_empty() {
        return None;
    }
    match source {
        ImageSource::File { name, bytes } => {
            if image::guess_format(&bytes).is_err() {
                debug!(image = %name, "not an image, ignoring");
                return None;
            }
            shrink(&name, &bytes, config)
        }
        ImageSource::Encoded(raw) => {
            let encoded = EncodedImage::parse(raw.trim())?;
            if !encoded.is_inline() || encoded.len() <= config.max_encoded_bytes {
                return Some(encoded);
            }
            // Inline but over the ceiling: re-shrink the embedded bitmap.
            let bytes = encoded
                .as_str()
                .split_once(";base64,")
                .and_then(|(_, payload)| STANDARD.decode(payload).ok());
            match bytes {
                Some(bytes) => shrink("<encoded>", &bytes, config),
                None => {
                    warn!(size = encoded.len(), "oversized inline image is not base64, dropping");
                    None
                }
            }
        }
    }
}

fn shrink(name: &str, bytes: &[u8], config: &MediaConfig) -> Option<EncodedImage> {
    match compress(bytes, config) {
        Ok(Shrink::Fits(c)) => {
            debug!(image = %name, pass = ?c.pass, size = c.image.len(), "image encoded");
            Some(c.image)
        }
        Ok(Shrink::TooLarge { smallest, ceiling }) => {
            warn!(image = %name, smallest, ceiling, "image cannot be shrunk under the ceiling, dropping");
            None
        }
        Err(e) => {
            warn!(image = %name, error = %e, "image could not be processed, ignoring");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::tests::noisy_png;
    use tracing_test::traced_test;

    fn file(name: &str, bytes: Vec<u8>) -> ImageSource {
        ImageSource::File {
            name: name.into(),
            bytes,
        }
    }

    #[tokio::test]
    async fn no_file_is_no_image() {
        let intake = ImageIntake::default();
        assert_eq!(intake.encode_single(None).await, None);
        assert_eq!(intake.encode_single(Some(file("empty.png", vec![]))).await, None);
        assert!(intake.encode_all(Vec::new()).await.is_empty());
    }

    #[tokio::test]
    async fn non_image_files_are_ignored() {
        let intake = ImageIntake::default();
        let text = file("notes.txt", b"hello there".to_vec());
        assert_eq!(intake.encode_single(Some(text)).await, None);
    }

    #[tokio::test]
    async fn encode_all_keeps_order_and_skips_failures() {
        let intake = ImageIntake::default();
        let out = intake
            .encode_all(vec![
                file("a.png", noisy_png(40, 20)),
                file("b.txt", b"nope".to_vec()),
                ImageSource::Encoded("https://cdn.example.com/c.jpg".into()),
            ])
            .await;
        assert_eq!(out.len(), 2);
        assert!(out[0].is_inline());
        assert_eq!(out[1].as_str(), "https://cdn.example.com/c.jpg");
    }

    #[tokio::test]
    async fn encoded_sources_pass_through_when_small() {
        let intake = ImageIntake::default();
        let small = "data:image/png;base64,AAAA".to_string();
        let out = intake.encode_single(Some(ImageSource::Encoded(small.clone()))).await;
        assert_eq!(out.map(|e| e.as_str().to_string()), Some(small));

        let bogus = ImageSource::Encoded("/home/user/photo.jpg".into());
        assert_eq!(intake.encode_single(Some(bogus)).await, None);
    }

    #[tokio::test]
    async fn oversized_inline_image_is_reshrunk() {
        let png = noisy_png(600, 600);
        let inline = format!("data:image/png;base64,{}", STANDARD.encode(&png));
        let intake = ImageIntake::new(MediaConfig {
            max_encoded_bytes: inline.len() - 1,
            ..MediaConfig::default()
        });
        let out = intake
            .encode_single(Some(ImageSource::Encoded(inline.clone())))
            .await
            .unwrap();
        assert!(out.as_str().starts_with("data:image/jpeg;base64,"));
        assert!(out.len() < inline.len());
    }

    #[test]
    #[traced_test]
    fn unshrinkable_image_is_dropped_with_a_warning() {
        let config = MediaConfig {
            max_encoded_bytes: 64,
            ..MediaConfig::default()
        };
        let out = encode_blocking(file("huge.png", noisy_png(200, 200)), &config);
        assert_eq!(out, None);
        assert!(logs_contain("cannot be shrunk under the ceiling"));
    }

    #[tokio::test]
    async fn files_are_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, noisy_png(10, 10)).unwrap();
        let source = ImageSource::read(&path).await.unwrap();
        assert_eq!(source.label(), "photo.png");
        assert!(ImageIntake::default().encode_single(Some(source)).await.is_some());
        assert!(ImageSource::read(dir.path().join("missing.png")).await.is_err());
    }
}
