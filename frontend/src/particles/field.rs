//! Particle state for the hero background.
//!
//! The field owns every particle; `initialize` and `advance` are the only
//! ways it changes. Drawing lives in [`super::renderer`].

use rand::Rng;

/// Upper bound on particles regardless of viewport width
pub const MAX_PARTICLES: usize = 80;
/// One particle per this many pixels of viewport width
pub const PIXELS_PER_PARTICLE: f64 = 16.0;
/// Pairs closer than this get a connecting line
pub const LINK_DISTANCE: f64 = 140.0;
/// Line opacity for two particles at the same spot
pub const LINK_MAX_OPACITY: f64 = 0.15;

const MAX_SPEED: f64 = 0.3;
const RADIUS_RANGE: (f64, f64) = (1.0, 2.5);
const OPACITY_RANGE: (f64, f64) = (0.2, 0.7);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const PALETTE: [Rgb; 3] = [
    Rgb(108, 99, 255),
    Rgb(0, 212, 255),
    Rgb(255, 101, 132),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
    pub color: Rgb,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: between(rng, 0.0, width),
            y: between(rng, 0.0, height),
            vx: between(rng, -MAX_SPEED, MAX_SPEED),
            vy: between(rng, -MAX_SPEED, MAX_SPEED),
            radius: between(rng, RADIUS_RANGE.0, RADIUS_RANGE.1),
            opacity: between(rng, OPACITY_RANGE.0, OPACITY_RANGE.1),
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
        }
    }

    /// Moves one step and bounces off the edges. A particle may end a frame
    /// slightly outside the box; the flipped velocity brings it back.
    fn step(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// Uniform sample in [low, high), or `low` for an empty range.
fn between<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + rng.gen::<f64>() * (high - low)
}

/// Connection between two particles closer than [`LINK_DISTANCE`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub opacity: f64,
}

/// Opacity of the line joining two particles `distance` apart.
pub fn link_opacity(distance: f64) -> f64 {
    (1.0 - distance / LINK_DISTANCE) * LINK_MAX_OPACITY
}

#[derive(Debug, Default)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        let mut field = Self::default();
        field.initialize(width, height, rng);
        field
    }

    pub fn particle_count(width: f64) -> usize {
        let by_width = (width.max(0.0) / PIXELS_PER_PARTICLE).floor() as usize;
        by_width.min(MAX_PARTICLES)
    }

    /// Replaces every particle with a fresh batch sized for the viewport.
    pub fn initialize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let count = Self::particle_count(self.width);
        self.particles = (0..count)
            .map(|_| Particle::random(rng, self.width, self.height))
            .collect();
    }

    pub fn advance(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    /// Every unordered pair closer than [`LINK_DISTANCE`]. O(n²), n is capped.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, p) in self.particles.iter().enumerate() {
            for (j, q) in self.particles.iter().enumerate().skip(i + 1) {
                let dx = p.x - q.x;
                let dy = p.y - q.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < LINK_DISTANCE {
                    links.push(Link {
                        a: i,
                        b: j,
                        distance,
                        opacity: link_opacity(distance),
                    });
                }
            }
        }
        links
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    #[cfg(test)]
    pub(crate) fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self { width, height, particles }
    }
}
