// Proximity graph over the particle set. Every unordered pair closer than
// CONNECTION_DISTANCE becomes an edge whose opacity fades linearly to zero
// at the threshold.
//
// The scan is exhaustive over i < j, O(n^2) per frame. That is fine at the
// background's particle count; callers only depend on `find_pairs`, so a
// spatial index can replace the scan without touching the renderer.

use crate::particle::Particle;
use vecmath::Vector2;

pub const CONNECTION_DISTANCE: f64 = 150.0;
pub const MAX_LINE_OPACITY: f64 = 0.2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProximityPair {
    pub from: usize,
    pub to: usize,
    pub from_pos: Vector2<f64>,
    pub to_pos: Vector2<f64>,
    pub distance: f64,
    pub opacity: f64,
}

pub fn line_opacity(distance: f64) -> f64 {
    MAX_LINE_OPACITY * (1.0 - distance / CONNECTION_DISTANCE)
}

pub fn find_pairs(particles: &[Particle]) -> Vec<ProximityPair> {
    let mut pairs = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            let distance = vecmath::vec2_len(vecmath::vec2_sub(a.pos, b.pos));
            if distance < CONNECTION_DISTANCE {
                pairs.push(ProximityPair {
                    from: i,
                    to: j,
                    from_pos: a.pos,
                    to_pos: b.pos,
                    distance,
                    opacity: line_opacity(distance),
                });
            }
        }
    }
    pairs
}
