//! Browser host: drives the scene from a canvas, page scroll, pointer
//! moves and `requestAnimationFrame`.
//!
//! ```js
//! import init, { start } from "./scrollscape.js";
//! await init();
//! const scene = await start("webgl", null);
//! scene.set_material_color("#ff8ad8");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use crate::error::ScrollscapeError;
use crate::input::InputEvent;
use crate::options::Options;
use crate::util::viewport::backing_size;
use crate::SceneEngine;

type SharedEngine = Rc<RefCell<SceneEngine>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn on_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // A logger was already installed by the embedding page.
        log::debug!("console logger already initialized");
    }
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

fn web_error(msg: &str) -> ScrollscapeError {
    ScrollscapeError::Web(msg.to_owned())
}

/// CSS and physical canvas sizes.
struct CanvasSize {
    css: (f32, f32),
    physical: (u32, u32),
}

/// Fill the window: pin the canvas CSS box to the window's inner size and
/// size the backing store to that times the device pixel ratio, capped at
/// `max_pixel_ratio`. The CSS box is set explicitly so it never follows the
/// backing store size.
#[allow(clippy::cast_possible_truncation)]
fn fit_canvas(
    window: &Window,
    canvas: &HtmlCanvasElement,
    max_pixel_ratio: f64,
) -> CanvasSize {
    let inner = |v: Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0)
    };
    let css_w = inner(window.inner_width());
    let css_h = inner(window.inner_height());

    let style = canvas.style();
    if style.set_property("width", &format!("{css_w}px")).is_err()
        || style.set_property("height", &format!("{css_h}px")).is_err()
    {
        log::warn!("could not set canvas CSS size");
    }

    let physical = backing_size(
        (css_w, css_h),
        window.device_pixel_ratio(),
        max_pixel_ratio,
    );
    canvas.set_width(physical.0);
    canvas.set_height(physical.1);
    CanvasSize {
        css: (css_w as f32, css_h as f32),
        physical,
    }
}

fn add_listener<E: FromWasmAbi + 'static>(
    target: &web_sys::EventTarget,
    kind: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), ScrollscapeError> {
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|_| {
            ScrollscapeError::Web(format!("failed to add '{kind}' listener"))
        })?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn request_frame(window: &Window, callback: &FrameCallback) {
    if let Some(cb) = callback.borrow().as_ref() {
        if window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("requestAnimationFrame failed, loop stopped");
        }
    }
}

/// Start the `requestAnimationFrame` loop. Each frame renders, then
/// requests the next one.
fn start_animation_loop(window: Window, engine: SharedEngine) {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let loop_window = window.clone();
    *callback.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        let _ = engine
            .borrow_mut()
            .frame(&mut || request_frame(&loop_window, &next));
    }));
    request_frame(&window, &callback);
}

/// A running scene bound to a page canvas.
#[wasm_bindgen]
pub struct WebScene {
    engine: SharedEngine,
}

/// Attach the scene to the canvas with id `canvas_id` and start rendering.
///
/// `preset_toml` optionally overrides the default options.
///
/// # Errors
///
/// Rejects if the canvas is missing, the preset does not parse, or GPU
/// initialization fails.
#[wasm_bindgen]
pub async fn start(
    canvas_id: String,
    preset_toml: Option<String>,
) -> Result<WebScene, JsValue> {
    WebScene::attach(&canvas_id, preset_toml.as_deref())
        .await
        .map_err(js_error)
}

impl WebScene {
    async fn attach(
        canvas_id: &str,
        preset_toml: Option<&str>,
    ) -> Result<Self, ScrollscapeError> {
        let options = match preset_toml {
            Some(toml) => Options::from_toml(toml)?,
            None => Options::default(),
        };

        let window = web_sys::window().ok_or_else(|| web_error("no window"))?;
        let document =
            window.document().ok_or_else(|| web_error("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| {
                ScrollscapeError::Web(format!("canvas '{canvas_id}' not found"))
            })?
            .dyn_into()
            .map_err(|_| web_error("element is not a canvas"))?;

        let max_ratio = options.display.max_pixel_ratio;
        let size = fit_canvas(&window, &canvas, max_ratio);
        let mut engine = SceneEngine::new(
            wgpu::SurfaceTarget::Canvas(canvas.clone()),
            size.physical,
            options,
        )
        .await?;
        engine.handle_input(InputEvent::Resized {
            width: size.css.0,
            height: size.css.1,
        });
        #[allow(clippy::cast_possible_truncation)]
        engine.handle_input(InputEvent::ScrollTo {
            offset: window.scroll_y().unwrap_or(0.0) as f32,
        });
        let engine = Rc::new(RefCell::new(engine));

        let target: &web_sys::EventTarget = window.as_ref();
        {
            let engine = engine.clone();
            let scroll_window = window.clone();
            add_listener(target, "scroll", move |_: web_sys::Event| {
                #[allow(clippy::cast_possible_truncation)]
                let offset = scroll_window.scroll_y().unwrap_or(0.0) as f32;
                engine
                    .borrow_mut()
                    .handle_input(InputEvent::ScrollTo { offset });
            })?;
        }
        {
            let engine = engine.clone();
            add_listener(target, "pointermove", move |e: MouseEvent| {
                engine.borrow_mut().handle_input(InputEvent::CursorMoved {
                    x: e.client_x() as f32,
                    y: e.client_y() as f32,
                });
            })?;
        }
        {
            let engine = engine.clone();
            let resize_window = window.clone();
            add_listener(target, "resize", move |_: web_sys::Event| {
                let mut engine = engine.borrow_mut();
                let max_ratio = engine.options().display.max_pixel_ratio;
                let size = fit_canvas(&resize_window, &canvas, max_ratio);
                engine.resize_surface(size.physical.0, size.physical.1);
                engine.handle_input(InputEvent::Resized {
                    width: size.css.0,
                    height: size.css.1,
                });
                // Reflow can move the page without a scroll event.
                #[allow(clippy::cast_possible_truncation)]
                let offset = resize_window.scroll_y().unwrap_or(0.0) as f32;
                engine.handle_input(InputEvent::ScrollTo { offset });
            })?;
        }

        start_animation_loop(window, engine.clone());
        log::info!("scene attached to #{canvas_id}");
        Ok(Self { engine })
    }
}

#[wasm_bindgen]
impl WebScene {
    /// Set the material color (`#rrggbb`) of meshes and particles.
    ///
    /// # Errors
    ///
    /// Rejects strings that are not `#rrggbb`.
    pub fn set_material_color(&self, hex: &str) -> Result<(), JsValue> {
        if crate::util::color::parse_hex(hex).is_none() {
            return Err(js_error(format!("invalid color {hex:?}")));
        }
        self.engine
            .borrow_mut()
            .set_option("material", "color", serde_json::json!(hex))
            .map_err(js_error)
    }

    /// Set one option from a JSON-encoded value, as a debug panel would.
    ///
    /// # Errors
    ///
    /// Rejects malformed JSON, unknown fields and mistyped values.
    pub fn set_option_json(
        &self,
        section: &str,
        field: &str,
        json: &str,
    ) -> Result<(), JsValue> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(js_error)?;
        self.engine
            .borrow_mut()
            .set_option(section, field, value)
            .map_err(js_error)
    }

    /// Current options as JSON.
    ///
    /// # Errors
    ///
    /// Rejects if serialization fails.
    pub fn options_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.engine.borrow().options()).map_err(js_error)
    }

    /// JSON Schema of the options, for building a panel.
    ///
    /// # Errors
    ///
    /// Rejects if serialization fails.
    pub fn options_schema(&self) -> Result<String, JsValue> {
        serde_json::to_string(&Options::json_schema()).map_err(js_error)
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f32 {
        self.engine.borrow().fps()
    }
}
