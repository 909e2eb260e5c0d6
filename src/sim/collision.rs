//! Swept box movement against the tile grid
//!
//! The displacement of one tick is split into `floor(|vel|) + 1` equal
//! sub-steps, so no sub-step is longer than one unit. Blocked sub-steps are
//! resolved one axis at a time. Lap times depend on this exact scheme, so it
//! is not a general-purpose sweep.

use glam::DVec2;

use super::map::TileGrid;

/// Axis on which a move was blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    X,
    Y,
    /// Blocked diagonally while each axis alone was free
    Corner,
}

impl Collision {
    const fn bit(self) -> u8 {
        match self {
            Collision::X => 1,
            Collision::Y => 1 << 1,
            Collision::Corner => 1 << 2,
        }
    }
}

/// Set of collisions reported by one move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CollisionSet(u8);

impl CollisionSet {
    pub const EMPTY: Self = Self(0);

    pub fn insert(&mut self, collision: Collision) {
        self.0 |= collision.bit();
    }

    pub fn contains(self, collision: Collision) -> bool {
        self.0 & collision.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Collision> {
        [Collision::X, Collision::Y, Collision::Corner]
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Collision> for CollisionSet {
    fn from_iter<I: IntoIterator<Item = Collision>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for collision in iter {
            set.insert(collision);
        }
        set
    }
}

/// Outcome of [`move_box`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    pub hits: CollisionSet,
    pub pos: DVec2,
    pub vel: DVec2,
}

/// Move a box by its velocity for one tick
///
/// Returns the new center and velocity. Velocity components are zeroed on
/// every axis that was blocked; a corner collision stops the box for the
/// remainder of the tick.
pub fn move_box(mut pos: DVec2, mut vel: DVec2, size: DVec2, map: &TileGrid) -> MoveResult {
    let mut hits = CollisionSet::EMPTY;

    let distance = vel.length();
    if distance < 0.0 {
        return MoveResult { hits, pos, vel };
    }

    let steps = distance as u64;
    let fraction = 1.0 / (steps + 1) as f64;

    for _ in 0..=steps {
        let mut new_pos = pos + vel * fraction;
        if map.test_box(new_pos, size) {
            let mut hit = false;

            if map.test_box(DVec2::new(pos.x, new_pos.y), size) {
                hits.insert(Collision::Y);
                new_pos.y = pos.y;
                vel.y = 0.0;
                hit = true;
            }

            if map.test_box(DVec2::new(new_pos.x, pos.y), size) {
                hits.insert(Collision::X);
                new_pos.x = pos.x;
                vel.x = 0.0;
                hit = true;
            }

            if !hit {
                hits.insert(Collision::Corner);
                new_pos = pos;
                vel = DVec2::ZERO;
            }
        }
        pos = new_pos;
    }

    MoveResult { hits, pos, vel }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYER_SIZE;
    use proptest::prelude::*;

    fn grid(src: &str) -> TileGrid {
        TileGrid::from_text(src).unwrap()
    }

    /// 5 wide, floor on the last of 4 rows (top edge at y=192)
    fn floor_map() -> TileGrid {
        grid("0 0 0 0 0\n0 0 0 0 0\n0 0 0 0 0\n1 1 1 1 1")
    }

    #[test]
    fn test_zero_velocity_is_noop() {
        let map = floor_map();
        let pos = DVec2::new(160.0, 100.0);
        let result = move_box(pos, DVec2::ZERO, PLAYER_SIZE, &map);
        assert!(result.hits.is_empty());
        assert_eq!(result.pos, pos);
        assert_eq!(result.vel, DVec2::ZERO);
    }

    #[test]
    fn test_free_move_applies_full_velocity() {
        let map = floor_map();
        let result = move_box(DVec2::new(160.0, 100.0), DVec2::new(3.0, -4.0), PLAYER_SIZE, &map);
        assert!(result.hits.is_empty());
        assert!((result.pos - DVec2::new(163.0, 96.0)).length() < 1e-9);
        assert_eq!(result.vel, DVec2::new(3.0, -4.0));
    }

    #[test]
    fn test_landing_on_floor_reports_y() {
        let map = floor_map();
        let result = move_box(DVec2::new(160.0, 120.0), DVec2::new(0.0, 50.0), PLAYER_SIZE, &map);

        assert!(result.hits.contains(Collision::Y));
        assert!(!result.hits.contains(Collision::X));
        assert!(!result.hits.contains(Collision::Corner));
        assert_eq!(result.vel.y, 0.0);
        // Stopped within one sub-step of the floor, without touching it
        assert!(result.pos.y > 158.0);
        assert!(!map.test_box(result.pos, PLAYER_SIZE));
    }

    #[test]
    fn test_running_into_wall_reports_x() {
        // Wall in the rightmost column (left edge at x=256)
        let map = grid("0 0 0 0 1\n0 0 0 0 1\n0 0 0 0 1\n0 0 0 0 1");
        let result = move_box(DVec2::new(160.0, 96.0), DVec2::new(8.0, 0.0), PLAYER_SIZE, &map);
        assert!(result.hits.is_empty());

        let result = move_box(DVec2::new(210.0, 96.0), DVec2::new(20.0, 0.0), PLAYER_SIZE, &map);
        assert!(result.hits.contains(Collision::X));
        assert!(!result.hits.contains(Collision::Y));
        assert_eq!(result.vel.x, 0.0);
        assert!(result.pos.x > 222.0);
        assert!(!map.test_box(result.pos, PLAYER_SIZE));
    }

    #[test]
    fn test_sliding_along_floor_keeps_horizontal_motion() {
        let map = floor_map();
        // Resting just above the floor, moving right and down
        let result = move_box(DVec2::new(100.0, 159.0), DVec2::new(5.0, 3.0), PLAYER_SIZE, &map);
        assert_eq!(result.hits, CollisionSet::from_iter([Collision::Y]));
        assert_eq!(result.vel, DVec2::new(5.0, 0.0));
        assert!(result.pos.x > 104.0);
    }

    #[test]
    fn test_corner_collision_discards_motion() {
        // Only the tile diagonally below-right of the box is solid
        let map = grid("0 0 0 0\n0 0 0 0\n0 0 1 0\n0 0 0 0");
        let pos = DVec2::new(95.0, 95.0);
        let result = move_box(pos, DVec2::new(1.0, 1.0), PLAYER_SIZE, &map);

        assert_eq!(result.hits, CollisionSet::from_iter([Collision::Corner]));
        assert_eq!(result.pos, pos);
        assert_eq!(result.vel, DVec2::ZERO);
    }

    #[test]
    fn test_collision_set() {
        let mut set = CollisionSet::EMPTY;
        assert!(set.is_empty());
        set.insert(Collision::Y);
        set.insert(Collision::Y);
        set.insert(Collision::Corner);
        assert!(set.contains(Collision::Y));
        assert!(!set.contains(Collision::X));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Collision::Y, Collision::Corner]);
    }

    /// 6 wide, 8 tall, a single solid row at index 4 (y 256..320) with air
    /// above and below it
    fn ledge_map() -> TileGrid {
        let mut rows = vec!["0 0 0 0 0 0"; 8];
        rows[4] = "2 2 2 2 2 2";
        grid(&rows.join("\n"))
    }

    proptest! {
        #[test]
        fn prop_no_tunneling_through_single_row(
            x in 100.0f64..250.0,
            y in 100.0f64..220.0,
            vx in -8.0f64..8.0,
            vy in 0.0f64..60.0,
        ) {
            let map = ledge_map();
            let result = move_box(DVec2::new(x, y), DVec2::new(vx, vy), PLAYER_SIZE, &map);
            prop_assert!(!map.test_box(result.pos, PLAYER_SIZE));
            prop_assert!(result.pos.y < 224.0);
        }

        #[test]
        fn prop_blocked_axis_has_zero_velocity(
            x in 40.0f64..300.0,
            y in 40.0f64..220.0,
            vx in -64.0f64..64.0,
            vy in -64.0f64..64.0,
        ) {
            let map = ledge_map();
            let result = move_box(DVec2::new(x, y), DVec2::new(vx, vy), PLAYER_SIZE, &map);
            if result.hits.contains(Collision::X) {
                prop_assert_eq!(result.vel.x, 0.0);
            }
            if result.hits.contains(Collision::Y) {
                prop_assert_eq!(result.vel.y, 0.0);
            }
            if result.hits.contains(Collision::Corner) {
                prop_assert_eq!(result.vel, DVec2::ZERO);
            }
            if result.hits.is_empty() {
                prop_assert!((result.pos - DVec2::new(x + vx, y + vy)).length() < 1e-6);
            }
        }
    }
}
