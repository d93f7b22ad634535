//! Grid geometry helpers shared by every system that touches positions.

use glam::{IVec2, Vec2};

use crate::constants::GRID_SIZE;

/// The largest valid cell coordinate on each axis.
pub fn max_cell() -> Vec2 {
    (GRID_SIZE - 1).as_vec2()
}

/// Clamps a real-valued grid position into `[0, W-1] x [0, H-1]`.
pub fn clamp_to_grid(position: Vec2) -> Vec2 {
    position.clamp(Vec2::ZERO, max_cell())
}

/// Returns whether an integer cell lies on the playfield.
pub fn contains_cell(cell: IVec2) -> bool {
    cell.cmpge(IVec2::ZERO).all() && cell.cmplt(GRID_SIZE.as_ivec2()).all()
}

/// Returns the cell a real-valued position rounds to.
///
/// Halves round away from zero; positions never go negative so this is the
/// same as rounding half up.
pub fn nearest_cell(position: Vec2) -> IVec2 {
    position.round().as_ivec2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_grid() {
        assert_eq!(clamp_to_grid(Vec2::new(-0.5, 20.0)), Vec2::new(0.0, 15.0));
        assert_eq!(clamp_to_grid(Vec2::new(3.25, 7.5)), Vec2::new(3.25, 7.5));
    }

    #[test]
    fn test_contains_cell() {
        assert!(contains_cell(IVec2::new(0, 0)));
        assert!(contains_cell(IVec2::new(15, 15)));
        assert!(!contains_cell(IVec2::new(-1, 0)));
        assert!(!contains_cell(IVec2::new(0, 16)));
    }

    #[test]
    fn test_nearest_cell() {
        assert_eq!(nearest_cell(Vec2::new(2.49, 2.5)), IVec2::new(2, 3));
        assert_eq!(nearest_cell(Vec2::new(0.0, 14.51)), IVec2::new(0, 15));
    }
}
