//! Optotype shapes: a small glyph for the symbol grid and a block pattern for
//! the large tutorial symbol.

use crate::types::Direction;

/// Side length of the large optotype pattern.
pub const OPTOTYPE_SIZE: u16 = 5;

/// Snellen E with its prongs facing right.
const BASE: [[bool; 5]; 5] = [
    [true, true, true, true, true],
    [true, false, false, false, false],
    [true, true, true, true, false],
    [true, false, false, false, false],
    [true, true, true, true, true],
];

/// Single-cell glyph: E faces right, W up, M down, 3 left.
pub fn glyph(direction: Direction) -> char {
    match direction {
        Direction::Right => 'E',
        Direction::Up => 'W',
        Direction::Down => 'M',
        Direction::Left => '3',
    }
}

/// Whether cell `(x, y)` of the large pattern is filled for `direction`.
///
/// Other orientations are the base E rotated (up: -90°, down: +90°) or
/// mirrored (left).
pub fn is_filled(direction: Direction, x: u16, y: u16) -> bool {
    let n = OPTOTYPE_SIZE;
    if x >= n || y >= n {
        return false;
    }
    let (bx, by) = match direction {
        Direction::Right => (x, y),
        Direction::Left => (n - 1 - x, y),
        Direction::Up => (n - 1 - y, x),
        Direction::Down => (y, x),
    };
    BASE[by as usize][bx as usize]
}
