mod common;

use common::deck_of;
use image::{Rgb, RgbImage};
use parking_lot::Mutex;
use slidegen::export::{
    count_pages, CancelHandle, ExportError, ExportOptions, ExportPipeline, FlatRasterizer,
    RasterError, Rasterizer,
};
use slidegen::model::Slide;
use std::sync::Arc;
use tempfile::TempDir;

/// Records the order slides arrive in and paints a tiny page.
#[derive(Default, Clone)]
struct RecordingRasterizer {
    seen: Arc<Mutex<Vec<String>>>,
}

impl Rasterizer for RecordingRasterizer {
    fn rasterize(
        &self,
        slide: &Slide,
        index: usize,
        total: usize,
        _scale: u32,
    ) -> Result<RgbImage, RasterError> {
        self.seen.lock().push(format!("{}:{}/{}", slide.title, index, total));
        Ok(RgbImage::from_pixel(16, 9, Rgb([index as u8 * 40, 0, 0])))
    }
}

/// Fails on the given 1-based slide.
struct FailingRasterizer {
    fail_at: usize,
}

impl Rasterizer for FailingRasterizer {
    fn rasterize(
        &self,
        _slide: &Slide,
        index: usize,
        _total: usize,
        _scale: u32,
    ) -> Result<RgbImage, RasterError> {
        if index == self.fail_at {
            return Err(RasterError::Other("boom".into()));
        }
        Ok(RgbImage::new(4, 4))
    }
}

#[tokio::test]
async fn exports_one_page_per_slide_in_order() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("deck.pdf");
    let recorder = RecordingRasterizer::default();
    let seen = Arc::clone(&recorder.seen);
    let pipeline = ExportPipeline::new(recorder, ExportOptions::default());

    let report = pipeline.run(&deck_of(3), &out, &CancelHandle::new()).await.unwrap();

    assert_eq!(report.pages, 3);
    assert_eq!(report.path, out);
    assert_eq!(*seen.lock(), vec!["S1:1/3", "S2:2/3", "S3:3/3"]);

    let pdf = std::fs::read(&out).unwrap();
    assert_eq!(count_pages(&pdf), 3);
    let text = String::from_utf8_lossy(&pdf);
    assert_eq!(text.matches("/MediaBox [0 0 960 540]").count(), 3);

    let progress = pipeline.progress().snapshot();
    assert_eq!((progress.done, progress.total), (3, 3));
}

#[tokio::test]
async fn failure_on_one_slide_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("deck.pdf");
    let pipeline = ExportPipeline::new(FailingRasterizer { fail_at: 2 }, ExportOptions::default());

    let err = pipeline.run(&deck_of(3), &out, &CancelHandle::new()).await.unwrap_err();

    match err {
        ExportError::Rasterize { slide, .. } => assert_eq!(slide, 2),
        other => panic!("Expected Rasterize error, got {:?}", other),
    }
    assert!(!out.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn cancelled_export_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("deck.pdf");
    let recorder = RecordingRasterizer::default();
    let seen = Arc::clone(&recorder.seen);
    let pipeline = ExportPipeline::new(recorder, ExportOptions::default());
    let cancel = CancelHandle::new();
    cancel.cancel();

    let err = pipeline.run(&deck_of(2), &out, &cancel).await.unwrap_err();

    assert!(matches!(err, ExportError::Cancelled));
    assert!(seen.lock().is_empty());
    assert!(!out.exists());
}

#[tokio::test]
async fn flat_rasterizer_pages_follow_scale() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("deck.pdf");
    let pipeline = ExportPipeline::new(
        FlatRasterizer,
        ExportOptions {
            scale: 1,
            jpeg_quality: 80,
        },
    );

    pipeline.run(&deck_of(1), &out, &CancelHandle::new()).await.unwrap();

    let pdf = std::fs::read(&out).unwrap();
    let text = String::from_utf8_lossy(&pdf);
    assert!(text.contains("/Width 960 /Height 540"));
    assert!(text.contains("/Filter /DCTDecode"));
}

#[tokio::test]
async fn existing_output_is_replaced_only_on_success() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("deck.pdf");
    std::fs::write(&out, b"previous").unwrap();

    let failing = ExportPipeline::new(FailingRasterizer { fail_at: 1 }, ExportOptions::default());
    assert!(failing.run(&deck_of(1), &out, &CancelHandle::new()).await.is_err());
    assert_eq!(std::fs::read(&out).unwrap(), b"previous");

    let working = ExportPipeline::new(RecordingRasterizer::default(), ExportOptions::default());
    working.run(&deck_of(1), &out, &CancelHandle::new()).await.unwrap();
    assert!(std::fs::read(&out).unwrap().starts_with(b"%PDF"));
}

#[tokio::test]
async fn failed_rename_removes_partial_document() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("deck.pdf");
    std::fs::create_dir(&out).unwrap();
    let pipeline = ExportPipeline::new(RecordingRasterizer::default(), ExportOptions::default());

    let err = pipeline.run(&deck_of(2), &out, &CancelHandle::new()).await.unwrap_err();

    assert!(matches!(err, ExportError::Io { .. }));
    assert!(out.is_dir());
    assert!(!dir.path().join("deck.pdf.part").exists());
}
