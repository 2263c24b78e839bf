use crate::java_random::{Bound, JavaRandom};

pub const DARK_OAK_BASE_HEIGHT: i32 = 6;

/// Trunk height: `next_int(3) + next_int(2) + base`.
///
/// Always consumes exactly two draws. The draw order is observable by every
/// later consumer of `rng` and must not be swapped.
pub fn compute_height(rng: &mut JavaRandom, base: i32) -> i32 {
    let a = rng.next_int_in(Bound::THREE);
    let b = rng.next_int_in(Bound::TWO);
    a.wrapping_add(b).wrapping_add(base)
}

/// Leaf layer radius for layer offset `i4` (0 at the trunk top, negative below).
///
/// Rust integer division truncates toward zero, so `-3 / 2 == -1`.
pub fn leaf_radius(i4: i32) -> i32 {
    1 - i4 / 2
}

/// Whether the leaf at `(l1, j2)` of the layer with radius `j1` is placed.
///
/// Only true corners reach the draw, and they draw before `i4` is looked at,
/// so middle-layer corners (`i4 == 0`) still consume one value and are
/// always skipped.
pub fn should_place_corner(rng: &mut JavaRandom, l1: i32, j2: i32, j1: i32, i4: i32) -> bool {
    l1.wrapping_abs() != j1
        || j2.wrapping_abs() != j1
        || (rng.next_int_in(Bound::TWO) != 0 && i4 != 0)
}

/// True corner of a layer: both coordinate magnitudes equal the radius.
pub fn is_true_corner(l1: i32, j2: i32, j1: i32) -> bool {
    l1.wrapping_abs() == j1 && j2.wrapping_abs() == j1
}
