#[macro_use]
mod utils;

pub mod color;
pub mod interactions;
pub mod network;
pub mod page;
pub mod particle;
pub mod proximity;
pub mod renderer;
pub mod reveal;
pub mod scheduler;

use network::ParticleNetwork;
use scheduler::FrameScheduler;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::console;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

thread_local! {
    static EFFECTS_STARTED: Cell<bool> = Cell::new(false);
}

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// Runs every page effect once the DOM is ready: the background particle
// network, the scroll reveal, and the button/card pointer effects.
// Each piece fails independently and only logs. Calling this again is a
// no-op; there is only ever one network per page.
#[wasm_bindgen]
pub fn start_effects() {
    if EFFECTS_STARTED.with(|started| started.replace(true)) {
        log!("page effects already started");
        return;
    }
    let _timer = Timer::new("start_effects");

    if let Err(err) = create_particle_network() {
        console::error_2(&"particle network unavailable:".into(), &err);
    }

    let document = match page::window().and_then(|window| page::document(&window)) {
        Ok(document) => document,
        Err(err) => {
            console::error_1(&err);
            return;
        }
    };
    match reveal::init_scroll_animations(&document) {
        Ok(observed) => log!("scroll reveal watching {} elements", observed),
        Err(err) => console::error_2(&"scroll reveal unavailable:".into(), &err),
    }
    match interactions::init_interactive_effects(&document) {
        Ok(wired) => log!("pointer effects on {} elements", wired),
        Err(err) => console::error_2(&"interactive effects unavailable:".into(), &err),
    }
}

// Creates the background canvas, seeds the particles inside the current
// window size and starts the frame loop.
pub fn create_particle_network() -> Result<(), JsValue> {
    let window = page::window()?;
    let document = page::document(&window)?;
    let body = page::body(&document)?;

    let canvas = page::create_canvas(&document, &body)?;
    let context = page::context_2d(&canvas)?;
    let viewport = page::fit_canvas_to_window(&window, &canvas)?;
    if viewport.is_empty() {
        log!("window has no area yet; nothing is visible until it is resized");
    }

    let mut rng = rand::thread_rng();
    let network = Rc::new(RefCell::new(ParticleNetwork::new(
        ParticleNetwork::PARTICLE_COUNT,
        viewport,
        &mut rng,
    )));
    page::listen_for_resize(&window, canvas, network.clone())?;
    log!(
        "particle network: {} particles in {}x{}",
        ParticleNetwork::PARTICLE_COUNT,
        viewport.width,
        viewport.height
    );

    FrameScheduler::new(network, context).start()
}
