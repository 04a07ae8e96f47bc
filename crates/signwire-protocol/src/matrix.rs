use crate::error::{ProtocolError, Result};

/// Fixed panel height in pixel rows.
pub const MATRIX_HEIGHT: usize = 16;

/// Supported panel widths.
///
/// The sign runs in one of two fixed modes selected by a width-select
/// command; every matrix generated for it must match the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceWidth {
    W128,
    W256,
}

impl DeviceWidth {
    /// Pixel columns in this mode.
    pub fn columns(self) -> usize {
        match self {
            DeviceWidth::W128 => 128,
            DeviceWidth::W256 => 256,
        }
    }
}

impl TryFrom<u32> for DeviceWidth {
    type Error = ProtocolError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            128 => Ok(DeviceWidth::W128),
            256 => Ok(DeviceWidth::W256),
            other => Err(ProtocolError::InvalidWidth(other)),
        }
    }
}

/// Explicit device configuration.
///
/// Threaded through every rendering and packing call so that matrix
/// generation and packing can never silently disagree about the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    pub width: DeviceWidth,
}

impl DeviceConfig {
    pub fn new(width: DeviceWidth) -> Self {
        Self { width }
    }

    /// Pixel columns of the configured panel.
    pub fn columns(self) -> usize {
        self.width.columns()
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            width: DeviceWidth::W128,
        }
    }
}

/// A 16-row lit/unlit pixel grid of fixed width.
///
/// One matrix describes a single color channel; a displayable image is a
/// [`Frame`] of two of them. Immutable once handed to the packer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    width: usize,
    bits: Vec<bool>,
}

impl PixelMatrix {
    /// Create an all-unlit matrix of the given width.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            bits: vec![false; MATRIX_HEIGHT * width],
        }
    }

    /// Create an all-unlit matrix at the configured device width.
    pub fn for_device(config: DeviceConfig) -> Self {
        Self::new(config.columns())
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

    /// Flip every pixel, lit becomes unlit and vice versa.
    pub fn invert(&mut self) {
        for bit in &mut self.bits {
            *bit = !*bit;
        }
    }

    /// Column range `(min, max)` containing lit pixels, or `None` if the
    /// matrix is entirely unlit.
    pub fn lit_bounds(&self) -> Option<(usize, usize)> {
        let mut bounds: Option<(usize, usize)> = None;
        for row in 0..MATRIX_HEIGHT {
            for col in 0..self.width {
                if self.get(row, col) {
                    bounds = Some(match bounds {
                        None => (col, col),
                        Some((min, max)) => (min.min(col), max.max(col)),
                    });
                }
            }
        }
        bounds
    }

    /// Count of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }
}

/// One displayable image: independent red and green channels.
///
/// Both channels lit at the same pixel shows as amber/yellow on hardware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub red: PixelMatrix,
    pub green: PixelMatrix,
}

impl Frame {
    /// Create an all-unlit frame of the given width.
    pub fn blank(width: usize) -> Self {
        Self {
            red: PixelMatrix::new(width),
            green: PixelMatrix::new(width),
        }
    }

    pub fn width(&self) -> usize {
        self.red.width()
    }

    /// Combined lit-column bounds across both channels.
    pub fn lit_bounds(&self) -> Option<(usize, usize)> {
        match (self.red.lit_bounds(), self.green.lit_bounds()) {
            (None, None) => None,
            (Some(b), None) | (None, Some(b)) => Some(b),
            (Some((rmin, rmax)), Some((gmin, gmax))) => Some((rmin.min(gmin), rmax.max(gmax))),
        }
    }
}
