use glam::Vec3;
use orrery_engine::Rng;
use std::f32::consts::TAU;

/// Points spread uniformly over the solid angle, at radii uniform in `[inner, outer)`.
///
/// The polar angle comes from `acos(u)` with `u` uniform in `[-1, 1]`, which
/// avoids bunching at the poles.
pub fn shell_points(rng: &mut Rng, count: usize, inner: f32, outer: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let radius = rng.range(inner, outer);
            let theta = rng.next_f32() * TAU;
            let phi = rng.range(-1.0, 1.0).clamp(-1.0, 1.0).acos();
            Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_stay_inside_the_shell() {
        let mut rng = Rng::new(7);
        let points = shell_points(&mut rng, 2000, 200.0, 500.0);
        assert_eq!(points.len(), 2000);
        for p in &points {
            let r = p.length();
            assert!(r >= 199.9 && r < 500.1, "radius {r}");
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let a = shell_points(&mut Rng::new(99), 50, 200.0, 500.0);
        let b = shell_points(&mut Rng::new(99), 50, 200.0, 500.0);
        assert_eq!(a, b);
    }

    #[test]
    fn hemispheres_are_balanced() {
        let points = shell_points(&mut Rng::new(12345), 4000, 200.0, 500.0);
        let north = points.iter().filter(|p| p.z > 0.0).count();
        // uniform over solid angle: roughly half above the equator
        assert!(north > 1700 && north < 2300, "north = {north}");
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(shell_points(&mut Rng::new(1), 0, 200.0, 500.0).is_empty());
    }
}
