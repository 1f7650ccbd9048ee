use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scatter `count` points through the scrollable volume.
///
/// X and Z are uniform in `[-spread / 2, spread / 2)`. Y starts half a
/// section above the first mesh and runs down through all `sections`, so
/// particles are visible at every scroll position. The same seed always
/// gives the same field.
#[must_use]
pub fn scatter(
    count: u32,
    spacing: f32,
    sections: usize,
    spread: f32,
    seed: u64,
) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let depth = spacing * sections as f32;
    (0..count)
        .map(|_| {
            let x = (rng.random::<f32>() - 0.5) * spread;
            let y = spacing * 0.5 - rng.random::<f32>() * depth;
            let z = (rng.random::<f32>() - 0.5) * spread;
            Vec3::new(x, y, z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_inside_the_volume() {
        let points = scatter(500, 4.0, 3, 10.0, 1);
        assert_eq!(points.len(), 500);
        for p in points {
            assert!((-5.0..5.0).contains(&p.x));
            assert!((-5.0..5.0).contains(&p.z));
            assert!(p.y <= 2.0 && p.y > -10.0, "y = {}", p.y);
        }
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(scatter(50, 4.0, 3, 10.0, 9), scatter(50, 4.0, 3, 10.0, 9));
        assert_ne!(scatter(50, 4.0, 3, 10.0, 9), scatter(50, 4.0, 3, 10.0, 10));
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(scatter(0, 4.0, 3, 10.0, 1).is_empty());
    }
}
