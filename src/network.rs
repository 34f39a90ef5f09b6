// Particle store for the background network: a fixed-size sequence of
// particles plus the drawing surface dimensions they wrap inside.

use crate::particle::Particle;
use crate::proximity::{self, ProximityPair};
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

pub struct ParticleNetwork {
    particles: Vec<Particle>,
    viewport: Viewport,
}

impl ParticleNetwork {
    pub const PARTICLE_COUNT: usize = 100;

    pub fn new<R: Rng>(count: usize, viewport: Viewport, rng: &mut R) -> Self {
        ParticleNetwork {
            particles: initialize(count, viewport, rng),
            viewport,
        }
    }

    pub fn from_particles(particles: Vec<Particle>, viewport: Viewport) -> Self {
        ParticleNetwork { particles, viewport }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // Existing particles stay where they are; anything now outside the
    // bounds is wrapped by its next step.
    pub fn update_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn step(&mut self) {
        let viewport = self.viewport;
        for particle in &mut self.particles {
            particle.step(viewport);
        }
    }

    pub fn proximity_pairs(&self) -> Vec<ProximityPair> {
        proximity::find_pairs(&self.particles)
    }
}

pub fn initialize<R: Rng>(count: usize, viewport: Viewport, rng: &mut R) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        particles.push(Particle::random(rng, viewport));
    }
    particles
}
