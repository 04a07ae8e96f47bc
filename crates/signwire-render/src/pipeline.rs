//! Strip rendering and frame production.
//!
//! Text is rasterized into one continuous 16-row strip, cut into
//! device-width frames, colorized into red/green channels, then optionally
//! centered (single-frame results only) and channel-inverted. Every step is
//! a pure function; the same inputs always yield the same frames.

use signwire_protocol::{DeviceConfig, Frame, PixelMatrix, MATRIX_HEIGHT};
use tracing::debug;

use crate::font::{resolve_font, LineRaster, Rasterizer};
use crate::options::{RenderOptions, TextColor, TextSize};

/// Row where the lower half of a two-line layout begins. The second line is
/// bottom-aligned but never starts above this, so it cannot overlap the
/// first.
const LOWER_HALF_START: usize = MATRIX_HEIGHT / 2;

/// The full-height, variable-width lit-pixel mask of a rendered string
/// before it is cut into frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    width: usize,
    bits: Vec<bool>,
}

impl Strip {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            bits: vec![false; MATRIX_HEIGHT * width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.bits[row * self.width + col]
    }

    pub fn set(&mut self, row: usize, col: usize, lit: bool) {
        self.bits[row * self.width + col] = lit;
    }

    /// Copy a raster in at the given top row, clipping anything that falls
    /// below the strip.
    fn blit(&mut self, raster: &LineRaster, top: usize) {
        for row in 0..raster.height() {
            let dest_row = top + row;
            if dest_row >= MATRIX_HEIGHT {
                break;
            }
            for col in 0..raster.width().min(self.width) {
                if raster.get(row, col) {
                    self.set(dest_row, col, true);
                }
            }
        }
    }
}

/// Render text into device-width frames using the font fallback chain.
pub fn render_frames(text: &str, options: &RenderOptions, config: DeviceConfig) -> Vec<Frame> {
    let font = resolve_font(options.font_path.as_deref());
    render_frames_with(&font, text, options, config)
}

/// Render text into device-width frames with an explicit rasterizer.
pub fn render_frames_with(
    font: &dyn Rasterizer,
    text: &str,
    options: &RenderOptions,
    config: DeviceConfig,
) -> Vec<Frame> {
    let strip = rasterize_strip(font, text, options.size);
    let masks = split_strip(&strip, config);
    let mut frames: Vec<Frame> = masks
        .into_iter()
        .map(|mask| colorize(mask, options.color))
        .collect();

    if frames.len() == 1 {
        center_frame(&mut frames[0]);
    }
    if options.invert {
        for frame in &mut frames {
            invert_frame(frame, options.color);
        }
    }

    debug!(
        strip_width = strip.width(),
        frames = frames.len(),
        "rendered text to frames"
    );
    frames
}

fn rasterize_strip(font: &dyn Rasterizer, text: &str, size: TextSize) -> Strip {
    let px = size.px();

    if size.two_line() {
        // Split at the midpoint character index; each half gets 8 rows.
        let mid = text.chars().count() / 2;
        let split_at = text
            .char_indices()
            .nth(mid)
            .map(|(byte, _)| byte)
            .unwrap_or(text.len());
        let (upper, lower) = text.split_at(split_at);

        let upper_raster = font.raster_line(upper, px);
        let lower_raster = font.raster_line(lower, px);

        let mut strip = Strip::new(upper_raster.width().max(lower_raster.width()));
        strip.blit(&upper_raster, 0);
        let lower_top = MATRIX_HEIGHT
            .saturating_sub(lower_raster.height())
            .max(LOWER_HALF_START);
        strip.blit(&lower_raster, lower_top);
        strip
    } else {
        let raster = font.raster_line(text, px);
        let mut strip = Strip::new(raster.width());
        strip.blit(&raster, MATRIX_HEIGHT.saturating_sub(raster.height()));
        strip
    }
}

/// Cut a strip into consecutive device-width masks, left to right. The
/// final mask is zero-padded past the strip's actual extent. An empty strip
/// yields no masks.
pub fn split_strip(strip: &Strip, config: DeviceConfig) -> Vec<PixelMatrix> {
    let frame_width = config.columns();
    let count = strip.width().div_ceil(frame_width);

    (0..count)
        .map(|index| {
            let origin = index * frame_width;
            let mut mask = PixelMatrix::new(frame_width);
            for row in 0..MATRIX_HEIGHT {
                for col in 0..frame_width.min(strip.width() - origin) {
                    if strip.get(row, origin + col) {
                        mask.set(row, col, true);
                    }
                }
            }
            mask
        })
        .collect()
}

fn colorize(mask: PixelMatrix, color: TextColor) -> Frame {
    let width = mask.width();
    Frame {
        red: if color.lights_red() {
            mask.clone()
        } else {
            PixelMatrix::new(width)
        },
        green: if color.lights_green() {
            mask
        } else {
            PixelMatrix::new(width)
        },
    }
}

/// Horizontally center the combined lit bounding box of both channels,
/// splitting the remaining margin evenly with the left side rounded down.
/// No-op when nothing is lit or the content already spans the full width.
pub fn center_frame(frame: &mut Frame) {
    let Some((min_col, max_col)) = frame.lit_bounds() else {
        return;
    };
    let width = frame.width();
    let content = max_col - min_col + 1;
    if content >= width {
        return;
    }
    let left = (width - content) / 2;
    frame.red = shifted(&frame.red, min_col, max_col, left);
    frame.green = shifted(&frame.green, min_col, max_col, left);
}

fn shifted(matrix: &PixelMatrix, min_col: usize, max_col: usize, dest: usize) -> PixelMatrix {
    let mut out = PixelMatrix::new(matrix.width());
    for row in 0..MATRIX_HEIGHT {
        for offset in 0..=max_col - min_col {
            if matrix.get(row, min_col + offset) {
                out.set(row, dest + offset, true);
            }
        }
    }
    out
}

/// Flip lit/unlit in the channel(s) matching the selected color; the other
/// channel is left untouched.
pub fn invert_frame(frame: &mut Frame, color: TextColor) {
    if color.lights_red() {
        frame.red.invert();
    }
    if color.lights_green() {
        frame.green.invert();
    }
}
