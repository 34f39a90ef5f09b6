// Helpers for reaching into the hosting page: globals, element queries and
// the background canvas that tracks the window size.

use crate::network::{ParticleNetwork, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, Window};

pub const CANVAS_CLASS: &str = "particle-network";

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

pub fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

// Appends the background canvas to <body>; placement is left to the stylesheet
pub fn create_canvas(document: &Document, body: &HtmlElement) -> Result<HtmlCanvasElement, JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.class_list().add_1(CANVAS_CLASS)?;
    body.append_child(&canvas)?;
    Ok(canvas)
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

// Missing or non-numeric sizes collapse to zero, which just renders nothing
pub fn window_size(window: &Window) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width, height))
}

// Sizes the canvas backing store to the window and reports what it ended up as
pub fn fit_canvas_to_window(window: &Window, canvas: &HtmlCanvasElement) -> Result<Viewport, JsValue> {
    let size = window_size(window)?;
    canvas.set_width(size.width.max(0.0) as u32);
    canvas.set_height(size.height.max(0.0) as u32);
    Ok(Viewport::new(canvas.width() as f64, canvas.height() as f64))
}

pub fn listen_for_resize(
    window: &Window,
    canvas: HtmlCanvasElement,
    network: Rc<RefCell<ParticleNetwork>>,
) -> Result<(), JsValue> {
    let target = window.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        match fit_canvas_to_window(&target, &canvas) {
            Ok(viewport) => network
                .borrow_mut()
                .update_viewport(viewport.width, viewport.height),
            Err(err) => console::error_1(&err),
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}
