//! Browser host: DOM wiring and the animation-frame loop

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent};

use super::{CANVAS_ID, RESET_BUTTON_ID, SPAWN_BUTTON_ID};
use crate::driver::{FrameDriver, InputEvent};
use crate::renderer::canvas::CanvasSurface;
use crate::settings::Settings;

type Game = Rc<RefCell<FrameDriver<CanvasSurface>>>;

/// Acquire the canvas, wire input and start the frame loop
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("Balloon Pop starting...");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("no canvas"))?
        .dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    log::info!("Seed: {}", seed);

    let surface = CanvasSurface::new(canvas.clone(), ctx);
    let game = Rc::new(RefCell::new(FrameDriver::new(surface, &settings, seed)));

    on_button_click(&document, SPAWN_BUTTON_ID, game.clone(), InputEvent::Spawn)?;
    on_button_click(&document, RESET_BUTTON_ID, game.clone(), InputEvent::Reset)?;
    setup_canvas_click(&canvas, game.clone())?;

    if game.borrow_mut().start() {
        request_animation_frame(game);
    }

    Ok(())
}

fn on_button_click(document: &Document, id: &str, game: Game, event: InputEvent) -> Result<(), JsValue> {
    let button = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no #{id} button")))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        game.borrow_mut().handle(event);
    });
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn setup_canvas_click(canvas: &HtmlCanvasElement, game: Game) -> Result<(), JsValue> {
    let canvas_clone = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let rect = canvas_clone.get_bounding_client_rect();
        game.borrow_mut().handle(InputEvent::Click {
            client: Vec2::new(event.client_x() as f32, event.client_y() as f32),
            canvas_origin: Vec2::new(rect.left() as f32, rect.top() as f32),
        });
    });
    canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(game: Game) {
    let Some(window) = web_sys::window() else {
        log::error!("No window; frame loop stopped");
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        frame_loop(game);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

fn frame_loop(game: Game) {
    let keep_running = game.borrow_mut().frame();
    if keep_running {
        request_animation_frame(game);
    }
}
