// Pointer feedback on page controls:
// - ripple: clicking a `.btn` drops a short-lived `span.ripple` at the click point
// - tilt: moving over a blog card rotates it toward the pointer in 3D
//
// The geometry is kept in plain functions so it can be checked off-browser.

use crate::page;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, DomRect, Element, HtmlElement, MouseEvent};

pub const RIPPLE_SELECTOR: &str = ".btn";
pub const RIPPLE_CLASS: &str = "ripple";
pub const RIPPLE_LIFETIME_MS: i32 = 600;

pub const TILT_SELECTOR: &str = ".blog-post.card";
pub const TILT_DAMPING: f64 = 25.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_LIFT_PX: f64 = 10.0;
pub const NEUTRAL_TILT: &str = "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)";

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect { left, top, width, height }
    }

    // Client coordinates relative to the rect's top-left corner
    pub fn offset_of(&self, client_x: f64, client_y: f64) -> [f64; 2] {
        [client_x - self.left, client_y - self.top]
    }

    pub fn center(&self) -> [f64; 2] {
        [self.width / 2.0, self.height / 2.0]
    }
}

impl From<&DomRect> for Rect {
    fn from(rect: &DomRect) -> Self {
        Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
    }
}

// Rotation in degrees. Pointer right of center turns the card around Y,
// pointer above center turns it around X.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tilt {
    pub angle_x: f64,
    pub angle_y: f64,
}

impl Tilt {
    pub fn from_pointer(rect: &Rect, client_x: f64, client_y: f64) -> Tilt {
        let [x, y] = rect.offset_of(client_x, client_y);
        let [center_x, center_y] = rect.center();
        Tilt {
            angle_x: (center_y - y) / TILT_DAMPING,
            angle_y: (x - center_x) / TILT_DAMPING,
        }
    }

    pub fn to_transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
            TILT_PERSPECTIVE_PX, self.angle_x, self.angle_y, TILT_LIFT_PX
        )
    }
}

// A failing element is logged and skipped; the rest still get their effects.
// Returns how many elements were wired.
pub fn init_interactive_effects(document: &Document) -> Result<usize, JsValue> {
    let mut wired = 0;
    for button in page::query_all(document, RIPPLE_SELECTOR)? {
        match attach_ripple(&button) {
            Ok(()) => wired += 1,
            Err(err) => console::error_2(&"ripple not attached:".into(), &err),
        }
    }
    for card in page::query_all(document, TILT_SELECTOR)? {
        match card.dyn_into::<HtmlElement>().map_err(JsValue::from).and_then(attach_tilt) {
            Ok(()) => wired += 1,
            Err(err) => console::error_2(&"tilt not attached:".into(), &err),
        }
    }
    Ok(wired)
}

fn attach_ripple(button: &Element) -> Result<(), JsValue> {
    let host = button.clone();
    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        if let Err(err) = spawn_ripple(&host, &event) {
            console::error_1(&err);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

// Measured against the element actually clicked, which may be a child of the button
fn spawn_ripple(host: &Element, event: &MouseEvent) -> Result<HtmlElement, JsValue> {
    let clicked = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .unwrap_or_else(|| host.clone());
    let rect = Rect::from(&clicked.get_bounding_client_rect());
    let [x, y] = rect.offset_of(event.client_x() as f64, event.client_y() as f64);
    insert_ripple(host, x, y)
}

pub fn insert_ripple(host: &Element, x: f64, y: f64) -> Result<HtmlElement, JsValue> {
    let document = host
        .owner_document()
        .ok_or_else(|| JsValue::from_str("ripple host is not attached to a document"))?;
    let ripple = document.create_element("span")?.dyn_into::<HtmlElement>()?;
    ripple.class_list().add_1(RIPPLE_CLASS)?;
    let style = ripple.style();
    style.set_property("left", &format!("{}px", x))?;
    style.set_property("top", &format!("{}px", y))?;
    host.append_child(&ripple)?;

    let expired = ripple.clone();
    let remove = Closure::once_into_js(move || expired.remove());
    page::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        remove.unchecked_ref(),
        RIPPLE_LIFETIME_MS,
    )?;
    Ok(ripple)
}

fn attach_tilt(card: HtmlElement) -> Result<(), JsValue> {
    let tilted = card.clone();
    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        let rect = Rect::from(&tilted.get_bounding_client_rect());
        let tilt = Tilt::from_pointer(&rect, event.client_x() as f64, event.client_y() as f64);
        set_transform(&tilted, &tilt.to_transform());
    }) as Box<dyn FnMut(MouseEvent)>);
    card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let leaving = card.clone();
    let on_leave = Closure::wrap(Box::new(move |_event: MouseEvent| {
        set_transform(&leaving, NEUTRAL_TILT);
    }) as Box<dyn FnMut(MouseEvent)>);
    card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
    on_leave.forget();
    Ok(())
}

fn set_transform(element: &HtmlElement, transform: &str) {
    if let Err(err) = element.style().set_property("transform", transform) {
        console::error_1(&err);
    }
}
