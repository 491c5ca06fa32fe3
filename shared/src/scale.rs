/// Largest width and height handed to OCR.
pub const MAX_DIMENSION: u32 = 1600;

/// Quality passed to the lossy re-encode.
pub const JPEG_QUALITY: f64 = 0.9;

pub const JPEG_MIME: &str = "image/jpeg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { max_width: MAX_DIMENSION, max_height: MAX_DIMENSION }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    /// `min(1, maxW / w, maxH / h)`. `None` for a degenerate source.
    pub fn ratio(&self, natural_width: u32, natural_height: u32) -> Option<f64> {
        if natural_width == 0 || natural_height == 0 {
            return None;
        }
        let by_width = self.max_width as f64 / natural_width as f64;
        let by_height = self.max_height as f64 / natural_height as f64;
        Some(1.0_f64.min(by_width).min(by_height))
    }

    /// Aspect-preserving target size; never larger than the source. Each side
    /// is at least one pixel.
    pub fn fit(&self, natural_width: u32, natural_height: u32) -> Option<Dimensions> {
        let ratio = self.ratio(natural_width, natural_height)?;
        let scale = |side: u32| ((side as f64 * ratio).round() as u32).max(1);
        Some(Dimensions { width: scale(natural_width), height: scale(natural_height) })
    }
}
