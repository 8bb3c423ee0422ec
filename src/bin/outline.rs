//! Scatters random triangle outlines, one every half second.
//!
//! The canvas is never cleared, so outlines pile up. Values run over the
//! whole u8 range and wrap through the palette at flush time.

use std::thread;
use std::time::Duration;

use rasterm::prelude::*;
use rasterm::util::Rng;
use rasterm::window::{GRID_HEIGHT, GRID_WIDTH};

fn main() -> Result<(), String> {
    let mut canvas = WindowCanvas::new("outlines", GRID_WIDTH, GRID_HEIGHT, Mode::Palette8)?;
    let mut rng = Rng::new(0xC0FFEE);

    while !canvas.poll_quit() {
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;

        let a = Vec2::new(rng.range_f32(0.0, width), rng.range_f32(0.0, height));
        let b = Vec2::new(rng.range_f32(0.0, width), rng.range_f32(0.0, height));
        let c = Vec2::new(rng.range_f32(0.0, width), rng.range_f32(0.0, height));
        draw_outline(&mut canvas, a, b, c, rng.next_u8());

        canvas.update()?;
        thread::sleep(Duration::from_millis(500));
    }

    Ok(())
}
