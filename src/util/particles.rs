//! Background particle field.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hero canvas shows drifting particles joined by faint lines when close
//! together. The simulation here is pure state seeded explicitly so it runs
//! deterministically in tests; the `ParticleCanvas` component owns the
//! animation frame loop and draws what `links`/`grab_links` report.
//!
//! Particle count scales with canvas area: `count` particles per
//! `density_area` units, where one unit is 1000 square pixels. Clicks add
//! particles up to twice that count; beyond it the oldest ones go first.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::ParticleConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// A line to draw between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
}

/// Ceiling on the field size, as a multiple of the density count.
const CAPACITY_FACTOR: usize = 2;

/// Number of particles for a `width` x `height` canvas.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn density_count(config: &ParticleConfig, width: f64, height: f64) -> usize {
    if config.density_area <= 0.0 {
        return config.count as usize;
    }
    let area = width.max(0.0) * height.max(0.0) / 1000.0;
    // Float-to-int casts saturate; NaN becomes zero.
    (area * f64::from(config.count) / config.density_area).round() as usize
}

/// Opacity of a link between points `distance` apart, or `None` beyond
/// `max_distance`.
#[must_use]
pub fn link_opacity(distance: f64, max_distance: f64, base_opacity: f64) -> Option<f64> {
    (distance < max_distance).then(|| base_opacity * (1.0 - distance / max_distance))
}

pub struct ParticleField {
    config: ParticleConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: SmallRng,
}

impl ParticleField {
    #[must_use]
    pub fn new(config: ParticleConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self { config, width, height, particles: Vec::new(), rng: SmallRng::seed_from_u64(seed) };
        let count = density_count(&config, width, height);
        for _ in 0..count {
            let x = field.random_coord(width);
            let y = field.random_coord(height);
            let particle = field.spawn(x, y);
            field.particles.push(particle);
        }
        log::debug!("particle field {width}x{height} with {count} particles");
        field
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Most particles the field holds at its current size. Never below one
    /// click's worth.
    #[must_use]
    pub fn capacity(&self) -> usize {
        let density = density_count(&self.config, self.width, self.height);
        (density * CAPACITY_FACTOR).max(self.config.push_count as usize)
    }

    /// Track a canvas resize. Particles outside the new bounds wrap on the
    /// next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.evict_oldest();
    }

    /// Advance one frame, wrapping particles that leave the canvas.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x = wrap(p.x + p.vx, w);
            p.y = wrap(p.y + p.vy, h);
        }
    }

    /// Lines between every pair of particles closer than `link_distance`.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if let Some(opacity) = link_opacity(distance, self.config.link_distance, self.config.link_opacity) {
                    links.push(Link { from: (a.x, a.y), to: (b.x, b.y), opacity });
                }
            }
        }
        links
    }

    /// Lines from the hovering pointer to particles within `grab_distance`.
    #[must_use]
    pub fn grab_links(&self, pointer: (f64, f64)) -> Vec<Link> {
        self.particles
            .iter()
            .filter_map(|p| {
                let distance = (p.x - pointer.0).hypot(p.y - pointer.1);
                link_opacity(distance, self.config.grab_distance, 1.0)
                    .map(|opacity| Link { from: pointer, to: (p.x, p.y), opacity })
            })
            .collect()
    }

    /// Click: add `push_count` particles at the pointer.
    pub fn push(&mut self, x: f64, y: f64) {
        for _ in 0..self.config.push_count {
            let particle = self.spawn(x, y);
            self.particles.push(particle);
        }
        self.evict_oldest();
    }

    fn evict_oldest(&mut self) {
        let excess = self.particles.len().saturating_sub(self.capacity());
        if excess > 0 {
            self.particles.drain(..excess);
        }
    }

    fn spawn(&mut self, x: f64, y: f64) -> Particle {
        let speed = self.config.max_speed.max(0.0);
        let (vx, vy) = if speed > 0.0 {
            (self.rng.random_range(-speed..=speed), self.rng.random_range(-speed..=speed))
        } else {
            (0.0, 0.0)
        };
        let radius = self.rng.random_range(0.5..=self.config.max_radius.max(0.5));
        Particle { x, y, vx, vy, radius }
    }

    fn random_coord(&mut self, extent: f64) -> f64 {
        if extent > 0.0 { self.rng.random_range(0.0..extent) } else { 0.0 }
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Draw one frame of `field` onto a 2D canvas context.
#[cfg(feature = "csr")]
pub fn draw(field: &ParticleField, ctx: &web_sys::CanvasRenderingContext2d, pointer: Option<(f64, f64)>) {
    let (w, h) = field.size();
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.5)");
    for p in field.particles() {
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU).is_ok() {
            ctx.fill();
        }
    }
    let grabs = pointer.map(|at| field.grab_links(at)).unwrap_or_default();
    for link in field.links().iter().chain(grabs.iter()) {
        ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {:.3})", link.opacity));
        ctx.begin_path();
        ctx.move_to(link.from.0, link.from.1);
        ctx.line_to(link.to.0, link.to.1);
        ctx.stroke();
    }
}
