//! Font resolution and line rasterization.
//!
//! Fonts are resolved through an ordered fallback chain: the caller's
//! explicit path first, then a list of well-known TrueType candidates, and
//! finally the built-in 5×7 bitmap font. Resolution never fails; a candidate
//! that cannot be read or parsed is skipped.

use std::path::{Path, PathBuf};

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use fontdue::{Font, FontSettings};
use tracing::debug;

use crate::font5x7;

/// TrueType files probed after the caller's explicit choice.
const FONT_CANDIDATES: &[&str] = &[
    "fonts/arial.ttf",
    "fonts/arialbd.ttf",
    "fonts/verdana.ttf",
    "fonts/SansSerifCollection.ttf",
];

/// Coverage at or above this counts as a lit pixel when thresholding
/// anti-aliased TrueType output down to one bit.
const COVERAGE_THRESHOLD: u8 = 128;

/// A tight-bounding-box 1-bit raster of one rendered line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRaster {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl LineRaster {
    /// An all-unlit raster. Custom [`Rasterizer`] implementations build
    /// their output with this and [`set`](Self::set).
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    /// An empty raster, produced for empty text.
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Build a raster from a per-pixel predicate.
    pub fn from_fn(width: usize, height: usize, lit: impl Fn(usize, usize) -> bool) -> Self {
        let mut raster = Self::new(width, height);
        for row in 0..height {
            for col in 0..width {
                if lit(row, col) {
                    raster.set(row, col, true);
                }
            }
        }
        raster
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.bits[row * self.width + col]
    }

    pub fn set(&mut self, row: usize, col: usize, lit: bool) {
        self.bits[row * self.width + col] = lit;
    }
}

/// Renders one line of text at a pixel size into a [`LineRaster`].
///
/// The seam between the pipeline and whatever produces glyphs; tests swap
/// in deterministic fakes here.
pub trait Rasterizer {
    fn raster_line(&self, text: &str, px: f32) -> LineRaster;
}

/// A resolved font: either a parsed TrueType face or the built-in bitmap
/// fallback.
pub struct SignFont {
    source: FontSource,
}

enum FontSource {
    Truetype(Box<Font>),
    Builtin,
}

impl SignFont {
    /// The guaranteed fallback font.
    pub fn builtin() -> Self {
        Self {
            source: FontSource::Builtin,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.source, FontSource::Builtin)
    }
}

impl std::fmt::Debug for SignFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.source {
            FontSource::Truetype(_) => "truetype",
            FontSource::Builtin => "builtin",
        };
        f.debug_struct("SignFont").field("source", &kind).finish()
    }
}

/// Resolve a font through the fallback chain. Total: always returns a font.
pub fn resolve_font(explicit: Option<&Path>) -> SignFont {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(path) = explicit {
        candidates.push(path.to_path_buf());
    }
    candidates.extend(FONT_CANDIDATES.iter().map(PathBuf::from));

    for candidate in candidates {
        match load_truetype(&candidate) {
            Ok(font) => {
                debug!(path = %candidate.display(), "resolved TrueType font");
                return SignFont {
                    source: FontSource::Truetype(Box::new(font)),
                };
            }
            Err(reason) => {
                debug!(path = %candidate.display(), %reason, "font candidate skipped");
            }
        }
    }

    debug!("falling back to built-in bitmap font");
    SignFont::builtin()
}

fn load_truetype(path: &Path) -> Result<Font, String> {
    let bytes = std::fs::read(path).map_err(|err| err.to_string())?;
    Font::from_bytes(bytes, FontSettings::default()).map_err(|err| err.to_string())
}

impl Rasterizer for SignFont {
    fn raster_line(&self, text: &str, px: f32) -> LineRaster {
        if text.is_empty() {
            return LineRaster::empty();
        }
        match &self.source {
            FontSource::Truetype(font) => raster_truetype(font, text, px),
            FontSource::Builtin => raster_builtin(text, px),
        }
    }
}

fn raster_truetype(font: &Font, text: &str, px: f32) -> LineRaster {
    let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &TextStyle::new(text, px, 0));

    // Tight bounds over the laid-out glyph boxes.
    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    for glyph in layout.glyphs() {
        if glyph.width == 0 || glyph.height == 0 {
            continue;
        }
        let x0 = glyph.x.round() as i32;
        let y0 = glyph.y.round() as i32;
        min_x = min_x.min(x0);
        min_y = min_y.min(y0);
        max_x = max_x.max(x0 + glyph.width as i32);
        max_y = max_y.max(y0 + glyph.height as i32);
    }
    if min_x >= max_x || min_y >= max_y {
        return LineRaster::empty();
    }

    let mut raster = LineRaster::new((max_x - min_x) as usize, (max_y - min_y) as usize);
    for glyph in layout.glyphs() {
        if glyph.width == 0 || glyph.height == 0 {
            continue;
        }
        let (_, coverage) = font.rasterize_config(glyph.key);
        let x0 = glyph.x.round() as i32 - min_x;
        let y0 = glyph.y.round() as i32 - min_y;
        for gy in 0..glyph.height {
            for gx in 0..glyph.width {
                if coverage[gy * glyph.width + gx] >= COVERAGE_THRESHOLD {
                    raster.set(y0 as usize + gy, x0 as usize + gx, true);
                }
            }
        }
    }
    raster
}

fn raster_builtin(text: &str, px: f32) -> LineRaster {
    let scale = ((px / font5x7::GLYPH_HEIGHT as f32).floor() as usize).max(1);
    let advance = (font5x7::GLYPH_WIDTH + 1) * scale;
    let count = text.chars().count();
    let width = count * advance - scale;
    let mut raster = LineRaster::new(width, font5x7::GLYPH_HEIGHT * scale);

    for (index, ch) in text.chars().enumerate() {
        let origin = index * advance;
        let columns = font5x7::glyph(ch);
        for (col, bits) in columns.iter().enumerate() {
            for row in 0..font5x7::GLYPH_HEIGHT {
                if bits >> row & 1 == 1 {
                    for sy in 0..scale {
                        for sx in 0..scale {
                            raster.set(
                                row * scale + sy,
                                origin + col * scale + sx,
                                true,
                            );
                        }
                    }
                }
            }
        }
    }
    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_always_yields_a_font() {
        // No candidate files exist in the test environment, so the chain
        // must bottom out at the builtin.
        let font = resolve_font(None);
        assert!(font.is_builtin());

        let font = resolve_font(Some(Path::new("/definitely/not/here.ttf")));
        assert!(font.is_builtin());
    }

    #[test]
    fn empty_text_rasters_empty() {
        let font = SignFont::builtin();
        let raster = font.raster_line("", 8.0);
        assert_eq!(raster.width(), 0);
        assert_eq!(raster.height(), 0);
    }

    #[test]
    fn builtin_raster_dimensions() {
        let font = SignFont::builtin();
        // 3 glyphs at scale 1: 3 * 6 - 1 columns, 7 rows.
        let raster = font.raster_line("ABC", 8.0);
        assert_eq!(raster.width(), 17);
        assert_eq!(raster.height(), 7);
        assert!(raster.bits.iter().any(|b| *b));
    }

    #[test]
    fn builtin_scales_for_full_height() {
        let font = SignFont::builtin();
        let small = font.raster_line("H", 8.0);
        let full = font.raster_line("H", 15.0);
        assert_eq!(small.height(), 7);
        assert_eq!(full.height(), 14);
        assert_eq!(full.width(), small.width() * 2);
    }

    #[test]
    fn builtin_exclamation_mark_shape() {
        let font = SignFont::builtin();
        let raster = font.raster_line("!", 8.0);
        // 0x5F in the center column: rows 0-4 and 6 lit, row 5 dark.
        assert!(raster.get(0, 2));
        assert!(raster.get(4, 2));
        assert!(!raster.get(5, 2));
        assert!(raster.get(6, 2));
        assert!(!raster.get(0, 0));
    }
}
