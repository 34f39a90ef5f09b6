// Frame scheduler that drives simulate -> proximity -> render once per
// display refresh for as long as the page lives.
//
// `start` consumes the scheduler: the frame callback owns it from then on and
// keeps re-requesting itself through requestAnimationFrame. There is no stop.

use crate::network::ParticleNetwork;
use crate::renderer::{Renderer, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    NotStarted,
    Running,
}

pub struct FrameScheduler<S: Surface> {
    network: Rc<RefCell<ParticleNetwork>>,
    renderer: Renderer,
    surface: S,
    state: SchedulerState,
    frames: u64,
}

impl<S: Surface + 'static> FrameScheduler<S> {
    pub fn new(network: Rc<RefCell<ParticleNetwork>>, surface: S) -> Self {
        FrameScheduler {
            network,
            renderer: Renderer::new(),
            surface,
            state: SchedulerState::NotStarted,
            frames: 0,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    // One full cycle. Returns the number of connecting lines drawn.
    pub fn tick(&mut self) -> Result<usize, JsValue> {
        self.state = SchedulerState::Running;
        self.frames += 1;

        let mut network = self.network.borrow_mut();
        network.step();
        let pairs = network.proximity_pairs();
        self.renderer.render(&mut self.surface, &network, &pairs)?;
        Ok(pairs.len())
    }

    // Runs the first frame immediately, then hands the scheduler to a
    // self-rescheduling requestAnimationFrame callback.
    pub fn start(mut self) -> Result<(), JsValue> {
        self.run_frame();

        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let next_frame = frame.clone();
        let callback = Closure::wrap(Box::new(move || {
            self.run_frame();
            if let Some(callback) = next_frame.borrow().as_ref() {
                if let Err(err) = request_animation_frame(callback) {
                    console::error_1(&err);
                }
            }
        }) as Box<dyn FnMut()>);

        request_animation_frame(&callback)?;
        *frame.borrow_mut() = Some(callback);
        Ok(())
    }

    fn run_frame(&mut self) {
        #[cfg(feature = "frame-timing")]
        let _timer = crate::Timer::new("FrameScheduler::tick");
        if let Err(err) = self.tick() {
            console::error_1(&err);
        }
    }
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no global `window` exists"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
