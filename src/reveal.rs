// Scroll reveal for cards. Each matching element gets the entrance animation
// classes the first time it scrolls into view and is then unobserved, so it
// never hides again.

use crate::page;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_SELECTOR: &str = ".blog-post.card, .feature-card";
pub const REVEAL_CLASSES: [&str; 2] = ["animate__animated", "animate__fadeInUp"];
pub const VISIBILITY_THRESHOLD: f64 = 0.1;
// Starts the animation 50px before the element reaches the bottom edge
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn init_scroll_animations(document: &Document) -> Result<usize, JsValue> {
    let on_intersect = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for i in 0..entries.length() {
            let entry = entries.get(i).unchecked_into::<IntersectionObserverEntry>();
            if entry.is_intersecting() {
                let target = entry.target();
                if let Err(err) = mark_revealed(&target) {
                    console::error_1(&err);
                }
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    let elements = page::query_all(document, REVEAL_SELECTOR)?;
    for element in &elements {
        observer.observe(element);
    }
    Ok(elements.len())
}

pub fn mark_revealed(element: &Element) -> Result<(), JsValue> {
    element
        .class_list()
        .add_2(REVEAL_CLASSES[0], REVEAL_CLASSES[1])
}
