//! Balloon Pop entry point
//!
//! On the web this wires the canvas and starts the frame loop. Natively it
//! runs a short headless demo against the recording surface.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    balloon_pop::platform::web::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use balloon_pop::consts::DEMO_SEED;
    use balloon_pop::driver::{FrameDriver, InputEvent};
    use balloon_pop::renderer::RecordingSurface;
    use balloon_pop::settings::Settings;
    use glam::Vec2;

    env_logger::init();
    log::info!("Balloon Pop (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to play in the browser");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or(DEMO_SEED);
    let mut driver = FrameDriver::new(RecordingSurface::new(800.0, 600.0), &settings, seed);
    driver.start();

    for _ in 0..7 {
        driver.handle(InputEvent::Spawn);
    }

    // Nothing has moved yet, so this pops every balloon on the launch point
    let target = driver.state().launch_point();
    driver.handle(InputEvent::Click {
        client: target,
        canvas_origin: Vec2::ZERO,
    });

    for _ in 0..60 {
        driver.frame();
    }

    let state = driver.state();
    let letters: String = state.live_balloons().map(|b| b.letter).collect();
    log::info!(
        "After {} frames: {} balloons ({} flying: {}), {} particles, {} draw calls last frame",
        state.frame,
        state.balloons.len(),
        state.live_balloons().count(),
        letters,
        state.particles.len(),
        driver.surface().last_frame().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
