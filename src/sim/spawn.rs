//! Star spawning
//!
//! Initial position and velocity come from the configured motion profile.
//! Randomness is always drawn from the caller's generator.

use glam::Vec2;
use rand::Rng;

use super::registry::{StarId, StarRegistry};
use super::star::Star;
use crate::config::{SpawnProfile, StarConfig};
use crate::raster::{Surface, query_extent};

/// Uniform in [min, max), or exactly `min` when the range is empty
fn sample_speed<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min < max {
        rng.random_range(min..max)
    } else {
        min
    }
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Offset in [-var, var) around `center`
fn jitter<R: Rng + ?Sized>(rng: &mut R, center: f32, var: u32) -> f32 {
    if var == 0 {
        return center;
    }
    center - var as f32 + rng.random_range(0..2 * u64::from(var)) as f32
}

/// Build a star for a surface of the given extent. None when the extent is
/// unknown; such a star would be culled on the same frame anyway.
pub fn new_star<R: Rng + ?Sized>(
    extent: (u32, u32),
    rng: &mut R,
    config: &StarConfig,
) -> Option<Star> {
    let (width, height) = extent;
    if width == 0 || height == 0 {
        return None;
    }

    let size = rng.random_range(0..config.max_size.max(1));

    let star = match config.profile {
        SpawnProfile::Burst => {
            let pos = Vec2::new(
                jitter(rng, (width / 2) as f32, config.center_var_x),
                jitter(rng, (height / 2) as f32, config.center_var_y),
            );
            let vel = Vec2::new(
                sample_speed(rng, config.min_speed, config.max_speed) * random_sign(rng),
                sample_speed(rng, config.min_speed, config.max_speed) * random_sign(rng),
            );
            Star::new(pos, vel, size)
        }
        SpawnProfile::Drift => {
            // Just off the right edge, always moving left
            let pos = Vec2::new(
                width as f32 + size as f32,
                rng.random_range(0..height) as f32,
            );
            let vel = Vec2::new(
                -sample_speed(rng, config.min_speed, config.max_speed),
                sample_speed(rng, config.min_speed_y, config.max_speed_y) * random_sign(rng),
            );
            Star::new(pos, vel, size)
        }
    };

    Some(star)
}

/// Create one star sized to `surface` and link it at the registry front.
///
/// A spawn that cannot be placed or allocated is skipped; a missing star is
/// cosmetic, so the frame loop carries on.
pub fn spawn_star<S, R>(
    surface: &S,
    registry: &mut StarRegistry,
    rng: &mut R,
    config: &StarConfig,
) -> Option<StarId>
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let Some(star) = new_star(query_extent(surface), rng, config) else {
        log::debug!("Surface extent unknown, skipping spawn");
        return None;
    };

    match registry.insert_front(star) {
        Ok(id) => {
            log::debug!(
                "Spawned star at ({:.1}, {:.1}) vel ({:.2}, {:.2}) size {}",
                star.pos.x,
                star.pos.y,
                star.vel.x,
                star.vel.y,
                star.size
            );
            Some(id)
        }
        Err(e) => {
            log::warn!("Skipping spawn, allocation failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::PixelBuffer;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_links_at_front() {
        let surface = PixelBuffer::new(800, 600);
        let mut registry = StarRegistry::new();
        let mut rng = Pcg32::seed_from_u64(7);
        let config = StarConfig::default();

        let first = spawn_star(&surface, &mut registry, &mut rng, &config).unwrap();
        let second = spawn_star(&surface, &mut registry, &mut rng, &config).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.iter().next(), registry.get(second));
        assert!(registry.get(first).is_some());
    }

    #[test]
    fn test_unknown_extent_skips() {
        let surface = PixelBuffer::new(0, 0);
        let mut registry = StarRegistry::new();
        let mut rng = Pcg32::seed_from_u64(7);

        for profile in [SpawnProfile::Drift, SpawnProfile::Burst] {
            let config = StarConfig::with_profile(profile);
            assert!(spawn_star(&surface, &mut registry, &mut rng, &config).is_none());
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_same_seed_same_star() {
        let config = StarConfig::default();
        let a = new_star((800, 600), &mut Pcg32::seed_from_u64(42), &config);
        let b = new_star((800, 600), &mut Pcg32::seed_from_u64(42), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_speed_when_range_is_empty() {
        let config = StarConfig {
            min_speed: 0.5,
            max_speed: 0.5,
            min_speed_y: 0.0,
            max_speed_y: 0.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..20 {
            let star = new_star((100, 100), &mut rng, &config).unwrap();
            assert_eq!(star.vel.x, -0.5);
            assert_eq!(star.vel.y.abs(), 0.0);
        }
    }

    #[test]
    fn test_burst_signs_vary() {
        let config = StarConfig::with_profile(SpawnProfile::Burst);
        let mut rng = Pcg32::seed_from_u64(3);
        let stars: Vec<Star> = (0..64)
            .filter_map(|_| new_star((800, 600), &mut rng, &config))
            .collect();
        assert!(stars.iter().any(|s| s.vel.x < 0.0));
        assert!(stars.iter().any(|s| s.vel.x > 0.0));
        assert!(stars.iter().any(|s| s.vel.y < 0.0));
        assert!(stars.iter().any(|s| s.vel.y > 0.0));
    }

    #[test]
    fn test_wide_jitter_window() {
        let config = StarConfig {
            center_var_x: u32::MAX,
            center_var_y: 3_000_000_000,
            ..StarConfig::with_profile(SpawnProfile::Burst)
        };
        assert!(config.validate().is_ok());

        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..32 {
            let star = new_star((800, 600), &mut rng, &config).unwrap();
            assert!(star.pos.x.is_finite() && star.pos.x.abs() <= 4.3e9);
            assert!(star.pos.y.is_finite() && star.pos.y.abs() <= 3.1e9);
        }
    }

    proptest! {
        #[test]
        fn prop_drift_spawn_at_right_edge(seed in any::<u64>()) {
            let config = StarConfig::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let star = new_star((800, 600), &mut rng, &config).unwrap();

            prop_assert!(star.size < config.max_size);
            prop_assert_eq!(star.pos.x, 800.0 + star.size as f32);
            prop_assert!(star.pos.y >= 0.0 && star.pos.y < 600.0);
            prop_assert!(star.vel.x < 0.0);
            prop_assert!(-star.vel.x >= config.min_speed && -star.vel.x <= config.max_speed);
            prop_assert!(star.vel.y.abs() <= config.max_speed_y);
        }

        #[test]
        fn prop_burst_spawn_near_center(seed in any::<u64>()) {
            let config = StarConfig::with_profile(SpawnProfile::Burst);
            let mut rng = Pcg32::seed_from_u64(seed);
            let star = new_star((800, 600), &mut rng, &config).unwrap();

            prop_assert!(star.pos.x >= 300.0 && star.pos.x < 500.0);
            prop_assert!(star.pos.y >= 200.0 && star.pos.y < 400.0);
            let speed_x = star.vel.x.abs();
            let speed_y = star.vel.y.abs();
            prop_assert!(speed_x >= config.min_speed && speed_x <= config.max_speed);
            prop_assert!(speed_y >= config.min_speed && speed_y <= config.max_speed);
        }
    }
}
