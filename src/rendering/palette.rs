//! Pure mapping from cell state to a display color.

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }
}

/// Base intensity before weight overrides are applied
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shading {
    /// Height clamped into 0..=255
    Height,
    /// Same shade for every cell
    Flat(u8),
}

/// Color rules for one visualizer.
///
/// A weight equal to `source_weight` marks a cell touched by the source
/// brush; a weight above `heavy_threshold` marks a heavy or pinned cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub shading: Shading,
    pub source_weight: f64,
    pub source_shade: u8,
    pub heavy_threshold: f64,
    pub heavy_shade: u8,
}

impl Palette {
    /// Height field shown in gray, sources light, heavy cells mid-gray
    pub const fn grid() -> Self {
        Self {
            shading: Shading::Height,
            source_weight: 10.0,
            source_shade: 200,
            heavy_threshold: 1000.0,
            heavy_shade: 169,
        }
    }

    /// Flat blocks on a light background; anything heavier than a source is black
    pub const fn line() -> Self {
        Self {
            shading: Shading::Flat(170),
            source_weight: 10.0,
            source_shade: 130,
            heavy_threshold: 10.0,
            heavy_shade: 0,
        }
    }

    pub fn color_of(&self, height: f64, weight: f64) -> Rgb {
        let base = match self.shading {
            // NaN saturates to 0
            Shading::Height => height.clamp(0.0, 255.0) as u8,
            Shading::Flat(value) => value,
        };

        let value = if weight == self.source_weight {
            self.source_shade
        } else if weight > self.heavy_threshold {
            self.heavy_shade
        } else {
            base
        };

        Rgb::gray(value)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::grid()
    }
}
