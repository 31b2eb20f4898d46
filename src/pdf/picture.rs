// src/pdf/picture.rs
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, Rgb, RgbImage};

use crate::core::net::Fetcher;

use super::metrics::PT_TO_MM;

/// Resolution images are resampled to for their placed size.
pub const EMBED_DPI: f32 = 200.0;
const JPEG_QUALITY: u8 = 85;
const MM_PER_INCH: f32 = 25.4;

/// JPEG bytes ready to go into the PDF as a `/DCTDecode` image.
#[derive(Clone, Debug)]
pub struct Embedded {
    pub width_px: u32,
    pub height_px: u32,
    pub jpeg: Vec<u8>,
}

/// A decoded image ready for placement, with its natural size
/// (one pixel = one point, as the shop images are meant for screen).
pub struct Picture {
    pub image: DynamicImage,
    pub natural_w_mm: f32,
    pub natural_h_mm: f32,
}

impl Picture {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        let image = DynamicImage::ImageRgb8(on_white(&decoded));
        Ok(Self {
            natural_w_mm: image.width() as f32 * PT_TO_MM,
            natural_h_mm: image.height() as f32 * PT_TO_MM,
            image,
        })
    }

    /// Downscale to `w_mm`×`h_mm` at [`EMBED_DPI`] (never upscale) and JPEG-encode.
    pub fn encode_for(&self, w_mm: f32, h_mm: f32) -> Option<Embedded> {
        let max_w = px_for(w_mm);
        let max_h = px_for(h_mm);
        let scaled;
        let img = if self.image.width() > max_w || self.image.height() > max_h {
            scaled = self.image.resize(max_w, max_h, FilterType::Triangle);
            &scaled
        } else {
            &self.image
        };
        let rgb = img.to_rgb8();

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
            .encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)
            .map_err(|e| logw!("Image: JPEG encode failed: {}", e))
            .ok()?;
        logd!("Image: {}x{} px -> {} bytes", rgb.width(), rgb.height(), jpeg.len());
        Some(Embedded { width_px: rgb.width(), height_px: rgb.height(), jpeg })
    }
}

/// Composite over white; the page background is white.
fn on_white(img: &DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }
    let rgba = img.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let blend = |c: u8| ((c as u16 * a as u16 + 255 * (255 - a as u16)) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}

fn px_for(mm: f32) -> u32 {
    ((mm / MM_PER_INCH) * EMBED_DPI).ceil().max(1.0) as u32
}

/// Download and decode; any failure drops the image.
pub fn fetch_picture(fetcher: &Fetcher, url: &str) -> Option<Picture> {
    let bytes = match fetcher.get_bytes(url) {
        Ok(b) => b,
        Err(e) => {
            logw!("Image: download failed {}: {}", url, e);
            return None;
        }
    };
    match Picture::from_bytes(&bytes) {
        Ok(p) => Some(p),
        Err(e) => {
            logw!("Image: decode failed {}: {}", url, e);
            None
        }
    }
}

pub fn load_local(path: &Path) -> Option<Picture> {
    let bytes = std::fs::read(path)
        .map_err(|e| logw!("Image: cannot read {}: {}", path.display(), e))
        .ok()?;
    Picture::from_bytes(&bytes)
        .map_err(|e| logw!("Image: decode failed {}: {}", path.display(), e))
        .ok()
}

/// Shrink (never enlarge) `w`×`h` to fit `max_w`×`max_h`, keeping aspect.
pub fn fit_within(w: f32, h: f32, max_w: f32, max_h: f32) -> (f32, f32) {
    if w <= 0.0 || h <= 0.0 {
        return (0.0, 0.0);
    }
    let aspect = h / w;
    let (mut w, mut h) = (w, h);
    if w > max_w {
        w = max_w;
        h = w * aspect;
    }
    if h > max_h {
        h = max_h;
        w = h / aspect;
    }
    (w, h)
}

/// Scale `w`×`h` up or down to the largest size inside the box.
pub fn fit_contain(w: f32, h: f32, box_w: f32, box_h: f32) -> (f32, f32) {
    if w <= 0.0 || h <= 0.0 {
        return (0.0, 0.0);
    }
    let scale = (box_w / w).min(box_h / h);
    (w * scale, h * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_image_is_not_enlarged() {
        assert_eq!(fit_within(20.0, 10.0, 50.0, 50.0), (20.0, 10.0));
    }

    #[test]
    fn wide_then_tall_constraint() {
        let (w, h) = fit_within(200.0, 100.0, 100.0, 40.0);
        assert!((h - 40.0).abs() < 1e-4);
        assert!((w - 80.0).abs() < 1e-4);
    }

    #[test]
    fn contain_enlarges() {
        let (w, h) = fit_contain(10.0, 5.0, 64.0, 26.0);
        assert!((w - 52.0).abs() < 1e-4);
        assert!((h - 26.0).abs() < 1e-4);
    }

    #[test]
    fn encode_downscales_to_placed_size() {
        let pic = Picture {
            image: DynamicImage::new_rgb8(2400, 1200),
            natural_w_mm: 846.0,
            natural_h_mm: 423.0,
        };
        let emb = pic.encode_for(50.8, 25.4).unwrap();
        // 2in × 1in at 200 dpi
        assert_eq!((emb.width_px, emb.height_px), (400, 200));
        assert_eq!(&emb.jpeg[..2], &[0xFF, 0xD8]);
        assert!(emb.jpeg.len() < 400 * 200 * 3 / 10);
    }

    #[test]
    fn encode_never_upscales() {
        let pic = Picture { image: DynamicImage::new_rgb8(40, 20), natural_w_mm: 14.0, natural_h_mm: 7.0 };
        let emb = pic.encode_for(200.0, 100.0).unwrap();
        assert_eq!((emb.width_px, emb.height_px), (40, 20));
    }

    #[test]
    fn transparent_pixels_become_white() {
        let mut rgba = image::RgbaImage::new(2, 1);
        rgba.put_pixel(0, 0, image::Rgba([0, 0, 0, 0]));
        rgba.put_pixel(1, 0, image::Rgba([10, 20, 30, 255]));
        let rgb = on_white(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(rgb.get_pixel(1, 0).0, [10, 20, 30]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(Picture::from_bytes(b"not an image").is_err());
    }
}
