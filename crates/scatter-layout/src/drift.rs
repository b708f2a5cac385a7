//! Sinusoidal drift on top of static positions.
//!
//! Placed items float back and forth along their own rotated axis. The
//! engine only supplies the math; the caller owns the animation loop and
//! adds the returned offset to the item's seated position each frame.

use glam::DVec2;

use crate::pose::Pose;

/// Drift oscillator parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drift {
    /// Oscillator rate per unit of time.
    pub speed: f64,
    /// Peak displacement from the seated position.
    pub amplitude: f64,
}

impl Default for Drift {
    fn default() -> Self {
        Self {
            speed: 0.001,
            amplitude: 15.0,
        }
    }
}

impl Drift {
    /// Create an oscillator with the given rate and peak displacement.
    pub fn new(speed: f64, amplitude: f64) -> Self {
        Self { speed, amplitude }
    }

    /// Displacement of an item at time `t`.
    ///
    /// The item drifts along its heading, measured from vertical so an
    /// unrotated item bobs straight up and down. The pose's phase keeps
    /// items from moving in lockstep.
    pub fn offset(&self, pose: &Pose, t: f64) -> DVec2 {
        let heading = (pose.rotation - 90.0).to_radians();
        let amount = (t * self.speed + pose.phase).sin() * self.amplitude;
        DVec2::new(heading.cos() * amount, heading.sin() * amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upright(phase: f64) -> Pose {
        Pose {
            rotation: 0.0,
            mirrored: false,
            phase,
        }
    }

    #[test]
    fn test_offset_bounded_by_amplitude() {
        let drift = Drift::default();
        let pose = upright(123.0);
        for step in 0..100 {
            let offset = drift.offset(&pose, step as f64 * 37.0);
            assert!(offset.length() <= drift.amplitude + 1e-9);
        }
    }

    #[test]
    fn test_unrotated_item_bobs_vertically() {
        let drift = Drift::new(1.0, 10.0);
        // sin(pi/2) = 1 at t = pi/2 with zero phase.
        let offset = drift.offset(&upright(0.0), std::f64::consts::FRAC_PI_2);
        assert!(offset.x.abs() < 1e-9);
        assert!((offset.y - -10.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_amplitude_is_still() {
        let drift = Drift::new(0.5, 0.0);
        let offset = drift.offset(&upright(42.0), 1000.0);
        assert!(offset.length() < 1e-12);
    }

    #[test]
    fn test_phase_shifts_the_cycle() {
        let drift = Drift::new(1.0, 10.0);
        let a = drift.offset(&upright(0.0), 1.0);
        let b = drift.offset(&upright(250.0), 1.0);
        assert!((a - b).length() > 1e-6);
    }
}
