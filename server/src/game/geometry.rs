//! Grid geometry: distances, nearest target and single-step headings.

use crate::game::types::Coord;

/// |dx| + |dy|, widened so any two cells of the `i32` grid fit.
pub fn manhattan_distance(a: Coord, b: Coord) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}

/// Nearest of `enemies` to `origin`; the first one wins a tie.
/// Returns `None` when there is nobody to target.
pub fn closest_enemy(origin: Coord, enemies: &[Coord]) -> Option<Coord> {
    let mut closest: Option<(u64, Coord)> = None;
    for &enemy in enemies {
        let dist = manhattan_distance(origin, enemy);
        match closest {
            Some((best, _)) if dist >= best => {}
            _ => closest = Some((dist, enemy)),
        }
    }
    closest.map(|(_, c)| c)
}

/// Dominant axis of a displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Same,
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// The neighbouring cell one step from `from`. `None` for [`Direction::Same`]
    /// and for a step off the edge of the `i32` grid.
    pub fn step(self, from: Coord) -> Option<Coord> {
        match self {
            Direction::Same => None,
            Direction::Right => Some(Coord::new(from.x.checked_add(1)?, from.y)),
            Direction::Left => Some(Coord::new(from.x.checked_sub(1)?, from.y)),
            Direction::Up => Some(Coord::new(from.x, from.y.checked_add(1)?)),
            Direction::Down => Some(Coord::new(from.x, from.y.checked_sub(1)?)),
        }
    }
}

/// Classifies `from → to`. Equal |dx| and |dy| resolve to the horizontal axis.
pub fn determine_direction(from: Coord, to: Coord) -> Direction {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);

    if dx == 0 && dy == 0 {
        return Direction::Same;
    }

    if dx.abs() >= dy.abs() {
        if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// One cardinal step from `from` toward `to`, `None` if already there.
pub fn step_toward(from: Coord, to: Coord) -> Option<Coord> {
    determine_direction(from, to).step(from)
}
