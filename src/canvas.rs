//! The canvas contract and an in-memory implementation.
//!
//! The rasterizer core draws onto anything implementing [`Canvas`]: an
//! addressable grid of palette-index cells with a flush/clear lifecycle.
//! The core never talks to a display directly; window management lives in
//! [`crate::window`] and test code uses [`BufferCanvas`].

/// Color mode selected when a canvas is constructed.
///
/// Construction stands in for an `initialize(mode)` call: a canvas cannot
/// exist without a palette, so drawing before initialization is impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The eight classic terminal colors.
    Palette8,
    /// The eight classic colors plus their bright variants.
    Palette16,
}

impl Mode {
    /// The ARGB palette this mode selects.
    pub fn palette(self) -> &'static [u32] {
        match self {
            Mode::Palette8 => &PALETTE8,
            Mode::Palette16 => &PALETTE16,
        }
    }
}

// Palettes in ARGB8888 format. Index 0 is the background color.
pub const PALETTE8: [u32; 8] = [
    0xFF000000, // black
    0xFFCD0000, // red
    0xFF00CD00, // green
    0xFFCDCD00, // yellow
    0xFF0000EE, // blue
    0xFFCD00CD, // magenta
    0xFF00CDCD, // cyan
    0xFFE5E5E5, // white
];

pub const PALETTE16: [u32; 16] = [
    0xFF000000, // black
    0xFFCD0000, // red
    0xFF00CD00, // green
    0xFFCDCD00, // yellow
    0xFF0000EE, // blue
    0xFFCD00CD, // magenta
    0xFF00CDCD, // cyan
    0xFFE5E5E5, // white
    0xFF7F7F7F, // bright black
    0xFFFF0000, // bright red
    0xFF00FF00, // bright green
    0xFFFFFF00, // bright yellow
    0xFF5C5CFF, // bright blue
    0xFFFF00FF, // bright magenta
    0xFF00FFFF, // bright cyan
    0xFFFFFFFF, // bright white
];

/// An addressable grid of color-index cells.
///
/// Cell values are indices into [`Canvas::palette`]; the palette length is
/// the modulus the render pipeline cycles colors through. Implementations
/// must tolerate out-of-range coordinates in [`Canvas::plot`] by ignoring
/// them; the rasterizers perform no bounds clamping of their own.
pub trait Canvas {
    /// Grid width in cells.
    fn width(&self) -> u32;

    /// Grid height in cells.
    fn height(&self) -> u32;

    /// The ordered ARGB palette. Never empty.
    fn palette(&self) -> &[u32];

    /// Write `value` into cell `(x, y)`. Out-of-range coordinates are
    /// ignored, never an error.
    fn plot(&mut self, x: i32, y: i32, value: u8);

    /// Flush the current cells to the display.
    fn update(&mut self) -> Result<(), String>;

    /// Reset every cell to the background state (index 0).
    fn clear(&mut self);
}

/// A headless canvas backed by a plain cell buffer.
///
/// Used by tests and benchmarks, and useful for rendering into memory
/// without a window. `update` has nothing to flush to and always succeeds.
pub struct BufferCanvas {
    width: u32,
    height: u32,
    cells: Vec<u8>,
    palette: &'static [u32],
}

impl BufferCanvas {
    pub fn new(width: u32, height: u32, mode: Mode) -> Self {
        Self {
            width,
            height,
            cells: vec![0; (width * height) as usize],
            palette: mode.palette(),
        }
    }

    /// The cell value at `(x, y)`, or `None` when out of range.
    pub fn cell(&self, x: i32, y: i32) -> Option<u8> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.cells[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// The raw cell buffer in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Canvas for BufferCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn palette(&self) -> &[u32] {
        self.palette
    }

    fn plot(&mut self, x: i32, y: i32, value: u8) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.cells[(y as u32 * self.width + x as u32) as usize] = value;
        }
    }

    fn update(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn clear(&mut self) {
        self.cells.fill(0);
    }
}

/// Test double that records every `plot` call in order, including
/// out-of-range ones. Lets rasterizer tests assert on exact cell sets and
/// on draw order.
#[cfg(test)]
pub(crate) struct RecordingCanvas {
    width: u32,
    height: u32,
    palette: &'static [u32],
    pub plots: Vec<(i32, i32, u8)>,
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn new(width: u32, height: u32, mode: Mode) -> Self {
        Self {
            width,
            height,
            palette: mode.palette(),
            plots: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn palette(&self) -> &[u32] {
        self.palette
    }

    fn plot(&mut self, x: i32, y: i32, value: u8) {
        self.plots.push((x, y, value));
    }

    fn update(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn clear(&mut self) {
        self.plots.clear();
    }
}
