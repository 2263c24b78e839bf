use crate::java_random::JavaRandom;
use crate::tree_shape::{leaf_radius, should_place_corner};
use arrayvec::ArrayVec;

pub const LAYER_COUNT: usize = 4;
// Four corners per layer are the only cells that can be skipped
const MAX_SKIPPED: usize = 4 * LAYER_COUNT;

// Leaf position relative to the trunk base
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LeafCell {
    pub dx: i32,
    pub dy: i32,
    pub dz: i32,
    pub layer: i32,
}

/// Leaf cap of a small tree: four layers around the trunk top, walked bottom-up,
/// x outer and z inner, the same order the reference visits them.
#[derive(Clone, Debug)]
pub struct Canopy {
    tree_height: i32,
    placed: usize,
    skipped: ArrayVec<LeafCell, MAX_SKIPPED>,
    draws: usize,
}

impl Canopy {
    pub fn generate(rng: &mut JavaRandom, tree_height: i32) -> Self {
        let mut canopy = Canopy {
            tree_height,
            placed: 0,
            skipped: ArrayVec::new(),
            draws: 0,
        };

        for i4 in -3..=0 {
            let dy = tree_height.wrapping_add(i4);
            let j1 = leaf_radius(i4);

            for l1 in -j1..=j1 {
                for j2 in -j1..=j1 {
                    // A full-period LCG never maps a state onto itself in one step
                    let before = rng.state();
                    let place = should_place_corner(rng, l1, j2, j1, i4);
                    if rng.state() != before {
                        canopy.draws += 1;
                    }
                    if place {
                        canopy.placed += 1;
                    } else {
                        canopy.skipped.push(LeafCell {
                            dx: l1,
                            dy,
                            dz: j2,
                            layer: i4,
                        });
                    }
                }
            }
            log::trace!(
                "Canopy::generate(): layer {} radius {} placed so far {}",
                i4,
                j1,
                canopy.placed
            );
        }

        canopy
    }

    pub fn tree_height(&self) -> i32 {
        self.tree_height
    }

    pub fn placed(&self) -> usize {
        self.placed
    }

    pub fn skipped(&self) -> &[LeafCell] {
        &self.skipped
    }

    /// Number of engine draws the walk consumed.
    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn cell_count(&self) -> usize {
        self.placed + self.skipped.len()
    }
}
