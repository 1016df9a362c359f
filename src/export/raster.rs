//! Slide → bitmap.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use thiserror::Error;

use crate::model::Slide;
use crate::render::{self, Surface, PAGE_HEIGHT, PAGE_WIDTH};

use super::text::{paint_text, Fonts};

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Malformed data URL for image '{url}'")]
    DataUrl { url: String },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Bundled font unreadable: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("{0}")]
    Other(String),
}

/// Paints one slide at `scale` times the logical page size.
///
/// Implementations run on the blocking pool, one slide at a time.
pub trait Rasterizer: Send + Sync + 'static {
    fn rasterize(
        &self,
        slide: &Slide,
        index: usize,
        total: usize,
        scale: u32,
    ) -> Result<RgbImage, RasterError>;
}

/// Paints the resolved surface (page fill, an embedded background image
/// scaled to cover, the black overlay) and then the slide's text in the
/// surface ink. Images referenced by remote URL are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatRasterizer;

impl Rasterizer for FlatRasterizer {
    fn rasterize(
        &self,
        slide: &Slide,
        index: usize,
        total: usize,
        scale: u32,
    ) -> Result<RgbImage, RasterError> {
        let rendered = render::render(slide, index, total);
        let mut page = paint(&rendered.surface, PAGE_WIDTH * scale, PAGE_HEIGHT * scale)?;
        let ink = hex_rgb(&rendered.surface.ink).unwrap_or(Rgb([0, 0, 0]));
        let fonts = Fonts::load()?;
        paint_text(&mut page, &fonts, slide, &rendered, ink, scale as f32);
        Ok(page)
    }
}

fn paint(surface: &Surface, width: u32, height: u32) -> Result<RgbImage, RasterError> {
    let fill = hex_rgb(&surface.fill).unwrap_or(Rgb([255, 255, 255]));
    let mut page = RgbImage::from_pixel(width, height, fill);

    let Some(url) = surface.image.as_deref() else {
        return Ok(page);
    };
    let Some(bytes) = decode_data_url(url)? else {
        tracing::debug!(url, "Remote image not embedded in export");
        return Ok(page);
    };

    let picture = image::load_from_memory(&bytes)?.to_rgb8();
    let covered = cover(&picture, width, height);
    imageops::overlay(&mut page, &covered, 0, 0);

    let opacity = surface.overlay_opacity.clamp(0.0, 1.0);
    if opacity > 0.0 {
        let keep = 1.0 - opacity;
        for pixel in page.pixels_mut() {
            for channel in pixel.0.iter_mut() {
                *channel = (f32::from(*channel) * keep).round() as u8;
            }
        }
    }
    Ok(page)
}

/// Scale to fill `width` × `height`, cropping the overflow around the centre.
fn cover(picture: &RgbImage, width: u32, height: u32) -> RgbImage {
    let (pw, ph) = picture.dimensions();
    if pw == 0 || ph == 0 {
        return RgbImage::new(width, height);
    }
    let factor = f64::max(
        f64::from(width) / f64::from(pw),
        f64::from(height) / f64::from(ph),
    );
    let sw = ((f64::from(pw) * factor).ceil() as u32).max(width);
    let sh = ((f64::from(ph) * factor).ceil() as u32).max(height);
    let scaled = imageops::resize(picture, sw, sh, FilterType::Triangle);
    imageops::crop_imm(&scaled, (sw - width) / 2, (sh - height) / 2, width, height).to_image()
}

/// `Ok(None)` for anything that is not a `data:` URL.
fn decode_data_url(url: &str) -> Result<Option<Vec<u8>>, RasterError> {
    let Some(rest) = url.strip_prefix("data:") else {
        return Ok(None);
    };
    let malformed = || RasterError::DataUrl {
        url: url.chars().take(48).collect(),
    };
    let (meta, payload) = rest.split_once(',').ok_or_else(malformed)?;
    if !meta.ends_with(";base64") {
        return Err(malformed());
    }
    STANDARD
        .decode(payload.trim())
        .map(Some)
        .map_err(|_| malformed())
}

/// `#rrggbb` or `#rgb`.
fn hex_rgb(value: &str) -> Option<Rgb<u8>> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
            Some(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
        }
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
            Some(Rgb([channel(0)?, channel(1)?, channel(2)?]))
        }
        _ => None,
    }
}
