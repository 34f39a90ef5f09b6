// Simple particle struct to keep track of individual position, velocity, size and alpha.
// Velocity, radius and alpha are fixed at creation; only the position moves.

use crate::network::Viewport;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub alpha: f64,
}

impl Particle {
    pub const MAX_SPEED: f64 = 0.25;
    pub const MIN_RADIUS: f64 = 1.0;
    pub const MAX_RADIUS: f64 = 3.0;
    pub const MIN_ALPHA: f64 = 0.1;
    pub const MAX_ALPHA: f64 = 0.3;

    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, alpha: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            alpha,
        }
    }

    // Uniformly placed inside the viewport, drifting slowly in any direction
    pub fn random<R: Rng>(rng: &mut R, viewport: Viewport) -> Particle {
        let pos_x = rng.gen::<f64>() * viewport.width;
        let pos_y = rng.gen::<f64>() * viewport.height;
        let vel_x = rng.gen::<f64>() * 2.0 * Particle::MAX_SPEED - Particle::MAX_SPEED;
        let vel_y = rng.gen::<f64>() * 2.0 * Particle::MAX_SPEED - Particle::MAX_SPEED;
        let radius =
            rng.gen::<f64>() * (Particle::MAX_RADIUS - Particle::MIN_RADIUS) + Particle::MIN_RADIUS;
        let alpha =
            rng.gen::<f64>() * (Particle::MAX_ALPHA - Particle::MIN_ALPHA) + Particle::MIN_ALPHA;
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, alpha)
    }

    // Moves by one tick of velocity, then teleports across any edge it crossed.
    // The velocity is never touched, so a particle keeps drifting the same way.
    pub fn step(&mut self, viewport: Viewport) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        self.pos[0] = wrap(self.pos[0], viewport.width);
        self.pos[1] = wrap(self.pos[1], viewport.height);
    }
}

// Past the far edge lands on 0, below 0 lands on the far edge
pub fn wrap(coord: f64, extent: f64) -> f64 {
    if coord > extent {
        0.0
    } else if coord < 0.0 {
        extent
    } else {
        coord
    }
}
