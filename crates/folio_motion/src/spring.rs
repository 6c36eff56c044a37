//! Spring physics
//!
//! A damped harmonic oscillator integrated with classic RK4. Retargeting a
//! live spring keeps its current position and velocity, so interrupted
//! animations continue with their momentum instead of restarting.

/// Position tolerance for settling
const REST_DELTA: f32 = 0.01;

/// Velocity tolerance for settling
const REST_SPEED: f32 = 0.1;

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// The reveal spring: critically damped, settles over a few hundred
    /// milliseconds without overshoot.
    pub fn reveal() -> Self {
        Self::new(100.0, 20.0)
    }

    /// Soft settle, a touch of overshoot
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0)
    }

    /// Fast settle for small movements
    pub fn stiff() -> Self {
        Self::new(210.0, 20.0)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::reveal()
    }
}

/// A single animated scalar driven by spring physics
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Spring at rest at `value`
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Aim at a new target. Position and velocity carry over, so a spring
    /// retargeted mid-flight keeps its momentum.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Teleport to `value` at rest
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Within rest tolerance of the target, both in position and velocity
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance by `dt` seconds (one RK4 step)
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        if self.is_settled() {
            // Settled springs pin exactly at the target.
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let (k1x, k1v) = self.derive(self.value, self.velocity);
        let (k2x, k2v) = self.derive(self.value + k1x * dt * 0.5, self.velocity + k1v * dt * 0.5);
        let (k3x, k3v) = self.derive(self.value + k2x * dt * 0.5, self.velocity + k2v * dt * 0.5);
        let (k4x, k4v) = self.derive(self.value + k3x * dt, self.velocity + k3v * dt);

        self.value += dt / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity += dt / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// Derivatives of (position, velocity) at the given state
    fn derive(&self, value: f32, velocity: f32) -> (f32, f32) {
        let displacement = value - self.target;
        let acceleration =
            (-self.config.stiffness * displacement - self.config.damping * velocity)
                / self.config.mass;
        (velocity, acceleration)
    }
}
