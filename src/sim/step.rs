//! Per-frame simulation step: movement, culling and the frame clock

use super::registry::StarRegistry;
use crate::raster::{Surface, query_extent};

/// Move every star by its velocity. No allocation, no culling.
pub fn advance(registry: &mut StarRegistry) {
    registry.for_each_mut(|star| star.step());
}

/// Remove every star outside `[-edge, extent + edge]` on either axis.
///
/// A surface reporting a zero extent has unknown bounds and every star is
/// removed. Returns the number of stars removed.
pub fn cull<S: Surface + ?Sized>(surface: &S, registry: &mut StarRegistry, edge: f32) -> usize {
    let extent = query_extent(surface);
    let removed = registry.remove_while(|star| !star.within(extent, edge));
    if removed > 0 {
        log::debug!(
            "Culled {} stars ({} live, extent {}x{})",
            removed,
            registry.len(),
            extent.0,
            extent.1
        );
    }
    removed
}

/// Frames elapsed since the loop started. Wraps at `u64::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    ticks: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// True on frames where a spawn is due. An interval of 0 is treated as 1.
    pub fn spawn_due(&self, interval: u32) -> bool {
        self.ticks % u64::from(interval.max(1)) == 0
    }

    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::PixelBuffer;
    use crate::sim::star::Star;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_drift_off_left_edge() {
        let surface = PixelBuffer::new(100, 100);
        let mut registry = StarRegistry::new();
        registry
            .insert_front(Star::new(Vec2::new(5.0, 5.0), Vec2::new(-1.0, 0.0), 3))
            .unwrap();

        for _ in 0..20 {
            advance(&mut registry);
        }
        let star = registry.iter().next().copied().unwrap();
        assert_eq!(star.pos, Vec2::new(-15.0, 5.0));

        assert_eq!(cull(&surface, &mut registry, 10.0), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_margin_is_inclusive() {
        let surface = PixelBuffer::new(100, 50);
        let mut registry = StarRegistry::new();
        for pos in [
            Vec2::new(-10.0, -10.0),
            Vec2::new(110.0, 60.0),
            Vec2::new(50.0, 25.0),
            Vec2::new(110.5, 0.0),
            Vec2::new(0.0, -10.5),
        ] {
            registry.insert_front(Star::new(pos, Vec2::ZERO, 1)).unwrap();
        }

        assert_eq!(cull(&surface, &mut registry, 10.0), 2);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_unknown_extent_culls_everything() {
        let mut registry = StarRegistry::new();
        for i in 0..6 {
            registry
                .insert_front(Star::new(Vec2::splat(i as f32), Vec2::ZERO, 1))
                .unwrap();
        }

        assert_eq!(cull(&PixelBuffer::new(0, 0), &mut registry, 10.0), 6);
        assert!(registry.is_empty());

        // A single zero axis is also unknown
        registry.insert_front(Star::new(Vec2::ZERO, Vec2::ZERO, 1)).unwrap();
        assert_eq!(cull(&PixelBuffer::new(640, 0), &mut registry, 10.0), 1);
    }

    #[test]
    fn test_frame_clock() {
        let mut clock = FrameClock::new();
        assert!(clock.spawn_due(40));
        clock.tick();
        assert!(!clock.spawn_due(40));
        assert!(clock.spawn_due(1));
        assert!(clock.spawn_due(0));
        assert_eq!(clock.ticks(), 1);

        let mut clock = FrameClock { ticks: u64::MAX };
        clock.tick();
        assert_eq!(clock.ticks(), 0);
    }

    fn star_strategy() -> impl Strategy<Value = Star> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            -20.0f32..20.0,
            -20.0f32..20.0,
            0u32..10,
        )
            .prop_map(|(x, y, vx, vy, size)| Star::new(Vec2::new(x, y), Vec2::new(vx, vy), size))
    }

    proptest! {
        #[test]
        fn prop_advance_adds_velocity(stars in prop::collection::vec(star_strategy(), 0..32)) {
            let mut registry = StarRegistry::new();
            for star in &stars {
                registry.insert_front(*star).unwrap();
            }

            advance(&mut registry);

            // List order is reverse insertion order
            let moved: Vec<Star> = registry.iter().copied().collect();
            prop_assert_eq!(moved.len(), stars.len());
            for (after, before) in moved.iter().zip(stars.iter().rev()) {
                prop_assert_eq!(after.pos.x, before.pos.x + before.vel.x);
                prop_assert_eq!(after.pos.y, before.pos.y + before.vel.y);
                prop_assert_eq!(after.vel, before.vel);
            }
        }

        #[test]
        fn prop_cull_leaves_only_in_bounds(
            stars in prop::collection::vec(star_strategy(), 0..32),
            width in 1u32..400,
            height in 1u32..400,
            edge in 0.0f32..50.0,
        ) {
            let surface = PixelBuffer::new(width, height);
            let mut registry = StarRegistry::new();
            for star in &stars {
                registry.insert_front(*star).unwrap();
            }

            let removed = cull(&surface, &mut registry, edge);
            prop_assert_eq!(removed + registry.len(), stars.len());
            for star in registry.iter() {
                prop_assert!(star.pos.x >= -edge && star.pos.x <= width as f32 + edge);
                prop_assert!(star.pos.y >= -edge && star.pos.y <= height as f32 + edge);
            }
        }
    }
}
