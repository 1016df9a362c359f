//! Deck → PDF export.
//!
//! Slides are rasterized strictly one at a time on the blocking pool and
//! appended in deck order. Nothing reaches `out` unless every slide
//! succeeds: the document is written beside it as `<name>.part` and renamed
//! into place at the end.

mod cancel;
mod pdf;
mod raster;
mod text;

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::codecs::jpeg::JpegEncoder;
use parking_lot::Mutex;
use thiserror::Error;

use crate::config::ExportConfig;
use crate::model::Deck;
use crate::render::{PAGE_HEIGHT, PAGE_WIDTH};

pub use cancel::CancelHandle;
pub use pdf::{count_pages, PdfWriter};
pub use raster::{FlatRasterizer, RasterError, Rasterizer};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to rasterize slide {slide}: {source}")]
    Rasterize {
        /// 1-based.
        slide: usize,
        #[source]
        source: RasterError,
    },

    #[error("Failed to encode slide {slide}: {source}")]
    Encode {
        slide: usize,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Export task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Export cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Pixel multiplier over the 960×540 page.
    pub scale: u32,
    pub jpeg_quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: 3,
            jpeg_quality: 90,
        }
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            scale: config.scale,
            jpeg_quality: config.jpeg_quality,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub pages: usize,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub done: usize,
    pub total: usize,
}

/// Pages finished so far, readable from any thread while `run` is going.
#[derive(Debug, Clone, Default)]
pub struct ExportProgress {
    inner: Arc<Mutex<ProgressSnapshot>>,
}

impl ExportProgress {
    pub fn snapshot(&self) -> ProgressSnapshot {
        *self.inner.lock()
    }

    fn start(&self, total: usize) {
        *self.inner.lock() = ProgressSnapshot { done: 0, total };
    }

    fn advance(&self) {
        self.inner.lock().done += 1;
    }
}

pub struct ExportPipeline<R: Rasterizer> {
    rasterizer: Arc<R>,
    options: ExportOptions,
    progress: ExportProgress,
}

impl<R: Rasterizer> ExportPipeline<R> {
    pub fn new(rasterizer: R, options: ExportOptions) -> Self {
        Self {
            rasterizer: Arc::new(rasterizer),
            options: ExportOptions {
                scale: options.scale.max(1),
                jpeg_quality: options.jpeg_quality.clamp(1, 100),
            },
            progress: ExportProgress::default(),
        }
    }

    pub fn progress(&self) -> ExportProgress {
        self.progress.clone()
    }

    pub async fn run(
        &self,
        deck: &Deck,
        out: &Path,
        cancel: &CancelHandle,
    ) -> Result<ExportReport, ExportError> {
        let total = deck.len();
        self.progress.start(total);
        tracing::info!(slides = total, path = %out.display(), scale = self.options.scale, "Export started");

        let mut writer = PdfWriter::new(PAGE_WIDTH, PAGE_HEIGHT);
        for (i, slide) in deck.iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::info!(at = i + 1, "Export cancelled");
                return Err(ExportError::Cancelled);
            }

            let rasterizer = Arc::clone(&self.rasterizer);
            let slide = slide.clone();
            let options = self.options;
            let index = i + 1;
            let job = tokio::task::spawn_blocking(move || {
                let page = rasterizer
                    .rasterize(&slide, index, total, options.scale)
                    .map_err(|source| ExportError::Rasterize {
                        slide: index,
                        source,
                    })?;
                let mut jpeg = Cursor::new(Vec::new());
                JpegEncoder::new_with_quality(&mut jpeg, options.jpeg_quality)
                    .encode_image(&page)
                    .map_err(|source| ExportError::Encode {
                        slide: index,
                        source,
                    })?;
                Ok::<_, ExportError>((jpeg.into_inner(), page.width(), page.height()))
            });

            let (jpeg, width, height) = tokio::select! {
                joined = job => joined??,
                _ = cancel.cancelled() => {
                    tracing::info!(at = index, "Export cancelled");
                    return Err(ExportError::Cancelled);
                }
            };
            writer.push_jpeg_page(jpeg, width, height);
            self.progress.advance();
            tracing::debug!(page = index, total, width, height, "Page rendered");
        }

        let pages = writer.page_count();
        let bytes = writer.finish();
        let target = out.to_path_buf();
        tokio::task::spawn_blocking(move || write_then_rename(&target, &bytes)).await??;

        tracing::info!(pages, path = %out.display(), "Export finished");
        Ok(ExportReport {
            pages,
            path: out.to_path_buf(),
        })
    }
}

fn write_then_rename(target: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let mut part = target.as_os_str().to_owned();
    part.push(".part");
    let part = PathBuf::from(part);
    let result = std::fs::write(&part, bytes)
        .map_err(|source| ExportError::Io {
            path: part.clone(),
            source,
        })
        .and_then(|()| {
            std::fs::rename(&part, target).map_err(|source| ExportError::Io {
                path: target.to_path_buf(),
                source,
            })
        });
    if result.is_err() {
        if let Err(e) = std::fs::remove_file(&part) {
            tracing::debug!(path = %part.display(), error = %e, "Partial export not removed");
        }
    }
    result
}
