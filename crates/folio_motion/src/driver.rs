//! Motion driver
//!
//! Owns one [`ElementMotion`] per animated element and advances them all each
//! frame. Each element runs three springs, one per pose channel, so offset,
//! scale and opacity settle independently with the same physics.

use slotmap::{new_key_type, SlotMap};

use crate::pose::MotionPose;
use crate::spring::{Spring, SpringConfig};

new_key_type! {
    /// Handle to an element's motion state
    pub struct MotionId;
}

/// Springs for one element, one per pose channel
#[derive(Clone, Copy, Debug)]
pub struct ElementMotion {
    offset_x: Spring,
    scale: Spring,
    opacity: Spring,
}

impl ElementMotion {
    /// Motion at rest in `pose`
    pub fn new(config: SpringConfig, pose: MotionPose) -> Self {
        Self {
            offset_x: Spring::new(config, pose.offset_x),
            scale: Spring::new(config, pose.scale),
            opacity: Spring::new(config, pose.opacity),
        }
    }

    /// Animate toward `pose`, keeping in-flight momentum
    pub fn retarget(&mut self, pose: MotionPose) {
        self.offset_x.set_target(pose.offset_x);
        self.scale.set_target(pose.scale);
        self.opacity.set_target(pose.opacity);
    }

    /// Jump to `pose` without animating
    pub fn snap(&mut self, pose: MotionPose) {
        self.offset_x.snap_to(pose.offset_x);
        self.scale.snap_to(pose.scale);
        self.opacity.snap_to(pose.opacity);
    }

    pub fn step(&mut self, dt: f32) {
        self.offset_x.step(dt);
        self.scale.step(dt);
        self.opacity.step(dt);
    }

    /// Current interpolated pose
    pub fn pose(&self) -> MotionPose {
        MotionPose {
            offset_x: self.offset_x.value(),
            scale: self.scale.value(),
            opacity: self.opacity.value(),
        }
    }

    /// Pose the element is heading toward
    pub fn target(&self) -> MotionPose {
        MotionPose {
            offset_x: self.offset_x.target(),
            scale: self.scale.target(),
            opacity: self.opacity.target(),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.offset_x.is_settled() && self.scale.is_settled() && self.opacity.is_settled()
    }
}

/// Per-frame spring scheduler for every animated element
pub struct MotionDriver {
    motions: SlotMap<MotionId, ElementMotion>,
    config: SpringConfig,
}

impl MotionDriver {
    pub fn new() -> Self {
        Self::with_config(SpringConfig::reveal())
    }

    pub fn with_config(config: SpringConfig) -> Self {
        Self {
            motions: SlotMap::with_key(),
            config,
        }
    }

    /// Register an element starting at rest in `pose`
    pub fn insert(&mut self, pose: MotionPose) -> MotionId {
        let id = self.motions.insert(ElementMotion::new(self.config, pose));
        tracing::trace!(?id, "motion registered");
        id
    }

    /// Drop an element's motion state. In-flight springs are abandoned.
    /// Returns false if the id was already removed.
    pub fn remove(&mut self, id: MotionId) -> bool {
        let removed = self.motions.remove(id).is_some();
        if removed {
            tracing::trace!(?id, "motion removed");
        }
        removed
    }

    /// Animate `id` toward `pose`. Returns false for a stale id.
    pub fn retarget(&mut self, id: MotionId, pose: MotionPose) -> bool {
        match self.motions.get_mut(id) {
            Some(motion) => {
                motion.retarget(pose);
                true
            }
            None => false,
        }
    }

    /// Jump `id` to `pose` without animating. Returns false for a stale id.
    pub fn snap(&mut self, id: MotionId, pose: MotionPose) -> bool {
        match self.motions.get_mut(id) {
            Some(motion) => {
                motion.snap(pose);
                true
            }
            None => false,
        }
    }

    pub fn pose(&self, id: MotionId) -> Option<MotionPose> {
        self.motions.get(id).map(ElementMotion::pose)
    }

    pub fn target(&self, id: MotionId) -> Option<MotionPose> {
        self.motions.get(id).map(ElementMotion::target)
    }

    /// Advance every element by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        for (_, motion) in self.motions.iter_mut() {
            motion.step(dt);
        }
    }

    /// True while any element is still animating
    pub fn has_active_motion(&self) -> bool {
        self.motions.values().any(|motion| !motion.is_settled())
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }
}

impl Default for MotionDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::SLIDE_DISTANCE;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn insert_starts_at_rest() {
        let mut driver = MotionDriver::new();
        let id = driver.insert(MotionPose::hidden(false));

        let pose = driver.pose(id).unwrap();
        assert_eq!(pose, MotionPose::hidden(false));
        assert!(!driver.has_active_motion());
    }

    #[test]
    fn retarget_animates_toward_pose() {
        let mut driver = MotionDriver::new();
        let id = driver.insert(MotionPose::hidden(false));

        driver.retarget(id, MotionPose::revealed());
        assert!(driver.has_active_motion());

        for _ in 0..300 {
            driver.tick(DT);
        }

        assert!(!driver.has_active_motion());
        let pose = driver.pose(id).unwrap();
        assert!((pose.offset_x - 0.0).abs() < 0.01);
        assert!((pose.scale - 1.0).abs() < 0.01);
        assert!((pose.opacity - 1.0).abs() < 0.01);
    }

    #[test]
    fn reversal_mid_flight_keeps_momentum() {
        let mut driver = MotionDriver::new();
        let id = driver.insert(MotionPose::hidden(false));
        driver.retarget(id, MotionPose::revealed());

        for _ in 0..10 {
            driver.tick(DT);
        }
        let mid = driver.pose(id).unwrap();
        assert!(mid.offset_x > -SLIDE_DISTANCE && mid.offset_x < 0.0);

        // Send it back where it came from. No restart, no teleport.
        driver.retarget(id, MotionPose::hidden(false));
        driver.tick(DT);
        let after = driver.pose(id).unwrap();
        assert!(after.offset_x > -SLIDE_DISTANCE);

        for _ in 0..300 {
            driver.tick(DT);
        }
        let settled = driver.pose(id).unwrap();
        assert!((settled.offset_x - -SLIDE_DISTANCE).abs() < 0.01);
        assert!((settled.opacity - 0.0).abs() < 0.1);
    }

    #[test]
    fn snap_skips_animation() {
        let mut driver = MotionDriver::new();
        let id = driver.insert(MotionPose::hidden(true));

        driver.snap(id, MotionPose::revealed());
        assert_eq!(driver.pose(id), Some(MotionPose::revealed()));
        assert!(!driver.has_active_motion());
    }

    #[test]
    fn remove_abandons_in_flight_motion() {
        let mut driver = MotionDriver::new();
        let id = driver.insert(MotionPose::hidden(false));
        driver.retarget(id, MotionPose::revealed());

        assert!(driver.remove(id));
        assert!(!driver.remove(id));
        assert_eq!(driver.pose(id), None);
        assert!(!driver.retarget(id, MotionPose::revealed()));
        assert!(!driver.has_active_motion());
        assert!(driver.is_empty());
    }

    #[test]
    fn stale_ids_do_not_alias_new_elements() {
        let mut driver = MotionDriver::new();
        let stale = driver.insert(MotionPose::hidden(false));
        driver.remove(stale);

        let fresh = driver.insert(MotionPose::revealed());
        assert!(!driver.snap(stale, MotionPose::hidden(true)));
        assert_eq!(driver.pose(fresh), Some(MotionPose::revealed()));
    }
}
