//! Airflow visualization: a bounded set of particles pushed radially away from
//! the hub while the fan runs.

use crate::config::AirflowConfig;
use crate::state::FanState;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Direction the fan blows in, relative to the hub.
pub const EMISSION_HEADING: Vec2 = Vec2::X;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    offset: Vec2,
}

impl Particle {
    /// `offset` is relative to the emission center.
    pub fn new(offset: Vec2) -> Self {
        Self { offset }
    }

    /// `angle` in radians, measured from [`EMISSION_HEADING`].
    pub fn at_polar(angle: f32, distance: f32) -> Self {
        Self::new(Vec2::from_angle(angle).rotate(EMISSION_HEADING) * distance)
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn distance(&self) -> f32 {
        self.offset.length()
    }

    pub fn alpha(&self, min_radius: f32, max_radius: f32) -> f32 {
        fade_alpha(self.distance(), min_radius, max_radius)
    }
}

/// Opacity falls linearly from 1 at `min_radius` to 0 at `max_radius`.
pub fn fade_alpha(distance: f32, min_radius: f32, max_radius: f32) -> f32 {
    let span = max_radius - min_radius;
    if !(span > 0.0) {
        return 0.0;
    }
    (1.0 - (distance - min_radius) / span).clamp(0.0, 1.0)
}

/// What the renderer gets to see of a particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub offset: Vec2,
    pub alpha: f32,
}

#[derive(Debug, Clone)]
pub struct AirflowEmitter {
    config: AirflowConfig,
    particles: Vec<Particle>,
}

impl AirflowEmitter {
    pub fn new(config: AirflowConfig) -> Self {
        Self {
            particles: Vec::with_capacity(config.cap),
            config,
        }
    }

    pub fn config(&self) -> &AirflowConfig {
        &self.config
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

    pub fn views(&self) -> impl Iterator<Item = ParticleView> + '_ {
        let (min_radius, max_radius) = (self.config.min_radius, self.config.max_radius);
        self.particles.iter().map(move |particle| ParticleView {
            offset: particle.offset,
            alpha: particle.alpha(min_radius, max_radius),
        })
    }

    /// Adds a particle unless the population is already at the cap.
    pub fn inject(&mut self, particle: Particle) -> bool {
        if self.particles.len() >= self.config.cap {
            return false;
        }
        self.particles.push(particle);
        true
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Spawns, advects and retires particles for one tick. Nothing moves while
    /// the fan is off.
    pub fn tick<R: Rng>(&mut self, state: &FanState, rng: &mut R) {
        if !state.power_on() {
            return;
        }
        let level = state.speed_level().get();

        self.spawn_ambient(rng);
        self.spawn_jet(level, rng);
        self.advect_and_retire(level);
    }

    fn spawn_ambient<R: Rng>(&mut self, rng: &mut R) {
        let ambient = &self.config.ambient;
        if !ambient.enabled || ambient.one_in == 0 || self.particles.len() >= ambient.cap {
            return;
        }
        if rng.random_range(0..ambient.one_in) != 0 {
            return;
        }
        let angle = rng.random_range(0.0..TAU);
        self.particles.push(Particle::at_polar(angle, ambient.distance));
    }

    fn spawn_jet<R: Rng>(&mut self, level: u8, rng: &mut R) {
        if self.particles.len() >= self.config.cap || self.config.spawn_trials == 0 {
            return;
        }
        if rng.random_range(0..self.config.spawn_trials) >= u32::from(level) {
            return;
        }
        let half_arc = self.config.spawn_half_arc_degrees.to_radians();
        let angle = sample_between(rng, -half_arc, half_arc);
        let distance = sample_between(
            rng,
            self.config.spawn_min_distance,
            self.config.spawn_max_distance,
        );
        self.particles.push(Particle::at_polar(angle, distance));
    }

    /// Retirement is checked against the distance before the move, so a
    /// particle is always drawn at least once past `min_radius`.
    fn advect_and_retire(&mut self, level: u8) {
        let step = self.config.base_speed + f32::from(level) * self.config.speed_gain;
        let max_radius = self.config.max_radius;

        self.particles.retain_mut(|particle| {
            if particle.distance() > max_radius {
                return false;
            }
            let direction = particle.offset.try_normalize().unwrap_or(EMISSION_HEADING);
            particle.offset += direction * step;
            true
        });
    }
}

fn sample_between<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.random_range(low..high)
    } else {
        low
    }
}
