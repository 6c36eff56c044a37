//! Folio Motion System
//!
//! Spring physics and per-element motion state for reveal animations.
//!
//! # Features
//!
//! - **Spring physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Interruptible**: retargeting preserves velocity mid-flight
//! - **Frame driven**: a driver ticks every element's springs once per frame

pub mod driver;
pub mod pose;
pub mod spring;

pub use driver::{ElementMotion, MotionDriver, MotionId};
pub use pose::{MotionPose, HIDDEN_SCALE, SLIDE_DISTANCE};
pub use spring::{Spring, SpringConfig};
