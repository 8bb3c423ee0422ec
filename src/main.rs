use rasterm::prelude::*;
use rasterm::window::{FRAME_TARGET_TIME, GRID_HEIGHT, GRID_WIDTH};

/// Radians of X rotation added per frame; Y and Z turn at fixed ratios.
const SPIN_STEP: f32 = 0.02;

fn main() -> Result<(), String> {
    let mut canvas = WindowCanvas::new("rasterm", GRID_WIDTH, GRID_HEIGHT, Mode::Palette8)?;
    let mut engine = Engine::with_projection(300.0, 10.0);
    let mut pacer = FramePacer::new(FRAME_TARGET_TIME);

    let mut cube = Mesh::cube(Vec3::new(10.0, 10.0, 10.0));

    // Full-screen slab behind everything the cube can reach, so the
    // painter's sort always draws it first.
    let mut backdrop = Mesh::plane(80.0, 60.0);
    backdrop.translation = Vec3::new(0.0, 0.0, 120.0);

    let mut angle: f32 = 0.0;

    while !canvas.poll_quit() {
        cube.rotation = Vec3::new(angle, angle * 0.7, angle * 0.4);
        // Swing the cube through the near plane so clipping is visible.
        cube.translation = Vec3::new(0.0, 0.0, 45.0 + 25.0 * (angle * 0.6).sin());

        engine.frame(&mut canvas, |scene| {
            backdrop.build_into(scene);
            cube.build_into(scene);
        })?;

        angle += SPIN_STEP;
        pacer.wait();
    }

    Ok(())
}
