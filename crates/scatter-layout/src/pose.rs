//! Per-item presentation attributes.
//!
//! A pose is drawn once per item at layout time and stays fixed for the
//! item's lifetime; the renderer applies it as a static transform.

use rand::Rng;

/// Static attitude of one placed item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    /// Rotation in degrees, uniform in [0, 360).
    pub rotation: f64,
    /// Mirrored items face the other way.
    pub mirrored: bool,
    /// Phase offset for the drift oscillator, uniform in [0, 1000).
    pub phase: f64,
}

/// Draw poses for `count` items.
///
/// The first half of the items is mirrored so a scene never faces
/// entirely one direction.
pub fn assign_poses<R: Rng>(count: usize, rng: &mut R) -> Vec<Pose> {
    let mirrored_below = count / 2;
    (0..count)
        .map(|index| Pose {
            rotation: rng.gen_range(0.0..360.0),
            mirrored: index < mirrored_below,
            phase: rng.gen_range(0.0..1000.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_poses_in_range() {
        let poses = assign_poses(20, &mut StdRng::seed_from_u64(1));
        assert_eq!(poses.len(), 20);
        for pose in &poses {
            assert!(pose.rotation >= 0.0 && pose.rotation < 360.0);
            assert!(pose.phase >= 0.0 && pose.phase < 1000.0);
        }
    }

    #[test]
    fn test_first_half_mirrored() {
        let poses = assign_poses(7, &mut StdRng::seed_from_u64(2));
        assert!(poses[..3].iter().all(|pose| pose.mirrored));
        assert!(poses[3..].iter().all(|pose| !pose.mirrored));
    }

    #[test]
    fn test_same_seed_same_poses() {
        let first = assign_poses(10, &mut StdRng::seed_from_u64(3));
        let second = assign_poses(10, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }
}
