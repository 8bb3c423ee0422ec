//! SDL-backed canvas and frame pacing.
//!
//! [`WindowCanvas`] is the real implementation of the canvas contract: a
//! low-resolution cell grid blown up to chunky on-screen pixels. Cells are
//! resolved through the palette only at flush time, so values past the
//! palette length wrap instead of failing.

use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;

use crate::canvas::{Canvas, Mode};

pub const GRID_WIDTH: u32 = 400;
pub const GRID_HEIGHT: u32 = 300;
/// On-screen pixels per grid cell.
pub const PIXEL_SCALE: u32 = 2;
pub const FPS: u64 = 30;
pub const FRAME_TARGET_TIME: Duration = Duration::from_millis(1000 / FPS);

/// Sleeps out the remainder of each frame's time budget.
pub struct FramePacer {
    target: Duration,
    previous: Instant,
}

impl FramePacer {
    pub fn new(target: Duration) -> Self {
        Self {
            target,
            previous: Instant::now(),
        }
    }

    /// Waits until the target duration has passed since the previous
    /// call, then starts timing the next frame.
    pub fn wait(&mut self) {
        let elapsed = self.previous.elapsed();
        if elapsed < self.target {
            std::thread::sleep(self.target - elapsed);
        }
        self.previous = Instant::now();
    }
}

/// A window whose client area shows the cell grid scaled up by
/// [`PIXEL_SCALE`].
pub struct WindowCanvas {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture: sdl2::render::Texture<'static>,
    // Keeps the texture's creator alive; declared after `texture` so the
    // texture is dropped first.
    _texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
    cells: Vec<u8>,
    pixels: Vec<u32>,
    palette: &'static [u32],
}

impl WindowCanvas {
    /// Opens a window sized `width * PIXEL_SCALE` by `height * PIXEL_SCALE`
    /// backed by a `width` by `height` cell grid in the given color mode.
    pub fn new(title: &str, width: u32, height: u32, mode: Mode) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width * PIXEL_SCALE, height * PIXEL_SCALE)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as
        // WindowCanvas. Struct field order drops texture before it.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        // The texture stays at grid resolution; the stretch to window
        // size happens in the copy at flush time.
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        let size = (width * height) as usize;
        Ok(Self {
            canvas,
            texture,
            _texture_creator: texture_creator,
            event_pump,
            width,
            height,
            cells: vec![0; size],
            pixels: vec![0; size],
            palette: mode.palette(),
        })
    }

    /// Drains pending events; true when the window was closed or Escape
    /// was pressed.
    pub fn poll_quit(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return true,
                _ => {}
            }
        }
        false
    }
}

impl Canvas for WindowCanvas {
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
        for (pixel, &cell) in self.pixels.iter_mut().zip(&self.cells) {
            *pixel = self.palette[cell as usize % self.palette.len()];
        }

        let bytes = unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr() as *const u8, self.pixels.len() * 4)
        };
        self.texture
            .update(None, bytes, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(&self.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    fn clear(&mut self) {
        self.cells.fill(0);
    }
}
