use rand::Rng;

use super::field::{ParticleField, Rgb, PALETTE};

/// Share of the host section that must be on screen before the loop runs
pub const VISIBILITY_THRESHOLD: f64 = 0.1;
const LINK_COLOR: Rgb = PALETTE[0];
const LINK_WIDTH: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(rgb: Rgb, alpha: f64) -> Self {
        Self { rgb, alpha }
    }

    /// CSS colour string, e.g. `rgba(108,99,255,0.15)`
    pub fn to_css(&self) -> String {
        let Rgb(r, g, b) = self.rgb;
        format!("rgba({},{},{},{})", r, g, b, self.alpha)
    }
}

/// Whatever the particles get drawn on. The browser canvas implements this
/// in [`super::canvas`].
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba, width: f64);
}

/// What the host should do with its animation-frame request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopCommand {
    Start,
    Stop,
    Keep,
}

/// Owns the particle field plus the running flag of the frame loop. The host
/// shell forwards resize and intersection events here and schedules frames
/// according to the returned [`LoopCommand`].
pub struct Renderer<R> {
    field: ParticleField,
    rng: R,
    running: bool,
}

impl<R: Rng> Renderer<R> {
    pub fn new(width: f64, height: f64, mut rng: R) -> Self {
        let field = ParticleField::new(width, height, &mut rng);
        Self {
            field,
            rng,
            running: false,
        }
    }

    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.field.initialize(width, height, &mut self.rng);
    }

    /// `visible_ratio` is the intersection ratio of the host section, 0 once
    /// it has left the viewport entirely.
    pub fn on_visibility_change(&mut self, visible_ratio: f64) -> LoopCommand {
        if !self.running && visible_ratio >= VISIBILITY_THRESHOLD {
            self.running = true;
            LoopCommand::Start
        } else if self.running && visible_ratio <= 0.0 {
            self.running = false;
            LoopCommand::Stop
        } else {
            LoopCommand::Keep
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One animation tick: move, then draw.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.field.advance();
        self.render(surface);
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.field.width(), self.field.height());

        let particles = self.field.particles();
        for p in particles {
            surface.fill_circle(p.x, p.y, p.radius, Rgba::new(p.color, p.opacity));
        }

        for link in self.field.links() {
            let (a, b) = (&particles[link.a], &particles[link.b]);
            surface.stroke_line(
                (a.x, a.y),
                (b.x, b.y),
                Rgba::new(LINK_COLOR, link.opacity),
                LINK_WIDTH,
            );
        }
    }

    #[cfg(test)]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::field::LINK_DISTANCE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(f64, f64),
        Circle(f64, f64, f64, Rgba),
        Line((f64, f64), (f64, f64), Rgba),
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(Op::Clear(width, height));
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
            self.ops.push(Op::Circle(x, y, radius, color));
        }

        fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba, width: f64) {
            assert_eq!(width, 1.0);
            self.ops.push(Op::Line(from, to, color));
        }
    }

    fn renderer(width: f64, height: f64) -> Renderer<StdRng> {
        Renderer::new(width, height, StdRng::seed_from_u64(99))
    }

    #[test]
    fn render_clears_then_draws_particles_then_links() {
        let r = renderer(640.0, 480.0);
        let mut surface = RecordingSurface::default();
        r.render(&mut surface);

        let n = r.field().particles().len();
        assert_eq!(n, 40);
        assert_eq!(surface.ops[0], Op::Clear(640.0, 480.0));
        assert!(surface.ops[1..=n].iter().all(|op| matches!(op, Op::Circle(..))));
        assert!(surface.ops[n + 1..].iter().all(|op| matches!(op, Op::Line(..))));
        assert_eq!(surface.ops.len(), 1 + n + r.field().links().len());
    }

    #[test]
    fn lines_use_distance_scaled_opacity() {
        let r = renderer(900.0, 500.0);
        let mut surface = RecordingSurface::default();
        r.render(&mut surface);

        let mut lines = 0;
        for op in &surface.ops {
            if let Op::Line(from, to, color) = op {
                lines += 1;
                let d = ((from.0 - to.0).powi(2) + (from.1 - to.1).powi(2)).sqrt();
                assert!(d < LINK_DISTANCE);
                assert_eq!(color.rgb, Rgb(108, 99, 255));
                assert!((color.alpha - (1.0 - d / 140.0) * 0.15).abs() < 1e-9);
            }
        }
        assert!(lines > 0);
    }

    #[test]
    fn frame_advances_before_drawing() {
        let mut r = renderer(320.0, 320.0);
        let before: Vec<(f64, f64)> = r.field().particles().iter().map(|p| (p.x + p.vx, p.y + p.vy)).collect();

        let mut surface = RecordingSurface::default();
        r.frame(&mut surface);

        let drawn: Vec<(f64, f64)> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle(x, y, _, _) => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(drawn, before);
    }

    #[test]
    fn particle_colour_is_drawn_with_its_opacity() {
        assert_eq!(Rgba::new(Rgb(0, 212, 255), 0.5).to_css(), "rgba(0,212,255,0.5)");
    }

    #[test]
    fn visibility_starts_and_stops_the_loop() {
        let mut r = renderer(800.0, 600.0);
        assert!(!r.is_running());

        assert_eq!(r.on_visibility_change(0.05), LoopCommand::Keep);
        assert!(!r.is_running());

        assert_eq!(r.on_visibility_change(0.1), LoopCommand::Start);
        assert!(r.is_running());
        assert_eq!(r.on_visibility_change(1.0), LoopCommand::Keep);
        assert_eq!(r.on_visibility_change(0.02), LoopCommand::Keep);
        assert!(r.is_running());

        assert_eq!(r.on_visibility_change(0.0), LoopCommand::Stop);
        assert!(!r.is_running());
        assert_eq!(r.on_visibility_change(0.0), LoopCommand::Keep);

        assert_eq!(r.on_visibility_change(0.4), LoopCommand::Start);
    }

    #[test]
    fn resize_rebuilds_the_field() {
        let mut r = renderer(1920.0, 1080.0);
        assert_eq!(r.field().particles().len(), 80);
        r.on_resize(400.0, 800.0);
        assert_eq!(r.field().particles().len(), 25);
        assert_eq!((r.field().width(), r.field().height()), (400.0, 800.0));
    }
}
