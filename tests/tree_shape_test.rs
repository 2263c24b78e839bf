use tree_parity::{
    compute_height, first_divergence, is_true_corner, leaf_radius, should_place_corner, Canopy,
    JavaRandom, LeafCell, DARK_OAK_BASE_HEIGHT,
};

#[test]
fn test_dark_oak_heights_seed_12345() {
    let expected = [8, 7, 7, 7, 7, 9, 8, 8, 9, 8, 8, 8, 8, 9, 8, 7, 6, 9, 9, 7];
    let mut rng = JavaRandom::new(12345);
    let actual: Vec<i32> = (0..20)
        .map(|_| compute_height(&mut rng, DARK_OAK_BASE_HEIGHT))
        .collect();

    if let Some(i) = first_divergence(&expected, &actual) {
        panic!(
            "height sequence desynchronized at index {}: expected {}, got {}",
            i, expected[i], actual[i]
        );
    }
}

#[test]
fn test_dark_oak_heights_seed_42() {
    let mut rng = JavaRandom::new(42);
    let actual: Vec<i32> = (0..10)
        .map(|_| compute_height(&mut rng, DARK_OAK_BASE_HEIGHT))
        .collect();
    assert_eq!(first_divergence(&[8, 6, 7, 9, 7, 8, 6, 9, 7, 8], &actual), None);
}

#[test]
fn test_height_range() {
    let mut rng = JavaRandom::new(12345);
    for _ in 0..1000 {
        let height = compute_height(&mut rng, DARK_OAK_BASE_HEIGHT);
        assert!((6..=9).contains(&height), "height out of range: {}", height);
    }
}

#[test]
fn test_compute_height_draws_twice() {
    for seed in [0, 1, 42, 12345, -7] {
        let mut rng = JavaRandom::new(seed);
        let mut reference = rng.clone();
        compute_height(&mut rng, 0);
        reference.next_bits(31);
        reference.next_bits(31);
        assert_eq!(rng.state(), reference.state(), "seed {}", seed);
    }
}

#[test]
fn test_draw_order_matters() {
    let mut rng = JavaRandom::new(12345);
    let height = compute_height(&mut rng, 0);

    let mut swapped = JavaRandom::new(12345);
    let b = swapped.next_int_bounded(2).unwrap();
    let a = swapped.next_int_bounded(3).unwrap();
    // Same engine state afterwards but a different sum for this seed
    assert_eq!(rng.state(), swapped.state());
    assert_eq!(height, 2);
    assert_eq!(a + b, 1);
}

#[test]
fn test_leaf_radius_truncates_toward_zero() {
    let radii: Vec<i32> = (-3..=0).map(leaf_radius).collect();
    assert_eq!(radii, [2, 2, 1, 1]);
    assert_eq!(leaf_radius(-5), 3);
    assert_eq!(leaf_radius(1), 1);
    assert_eq!(leaf_radius(2), 0);
}

#[test]
fn test_non_corner_cells_never_draw() {
    let mut rng = JavaRandom::new(12345);
    let before = rng.state();
    for i4 in -3..=0 {
        let j1 = leaf_radius(i4);
        for l1 in -j1..=j1 {
            for j2 in -j1..=j1 {
                if !is_true_corner(l1, j2, j1) {
                    assert!(should_place_corner(&mut rng, l1, j2, j1, i4));
                }
            }
        }
    }
    assert_eq!(rng.state(), before);
}

#[test]
fn test_true_corner_draws_once_even_in_middle_layer() {
    for i4 in -3..=0 {
        let j1 = leaf_radius(i4);
        let mut rng = JavaRandom::new(99);
        let mut reference = rng.clone();
        should_place_corner(&mut rng, j1, -j1, j1, i4);
        reference.next_bits(31);
        assert_eq!(rng.state(), reference.state(), "i4 {}", i4);
    }
}

#[test]
fn test_middle_layer_corners_always_skipped() {
    let mut placed_in_lower_layer = 0;
    let mut skipped_in_lower_layer = 0;

    for seed in 0..500 {
        let mut rng = JavaRandom::new(seed);
        for (l1, j2) in [(-1, -1), (-1, 1), (1, -1), (1, 1)] {
            assert!(!should_place_corner(&mut rng, l1, j2, 1, 0), "seed {}", seed);
            if should_place_corner(&mut rng, l1, j2, 1, -1) {
                placed_in_lower_layer += 1;
            } else {
                skipped_in_lower_layer += 1;
            }
        }
    }

    // Outside the middle layer the outcome follows the engine
    assert!(placed_in_lower_layer > 0);
    assert!(skipped_in_lower_layer > 0);
}

#[test]
fn test_canopy_seed_12345() {
    let mut rng = JavaRandom::new(12345);
    let canopy = Canopy::generate(&mut rng, 5);

    assert_eq!(canopy.tree_height(), 5);
    assert_eq!(canopy.cell_count(), 25 + 25 + 9 + 9);
    assert_eq!(canopy.placed(), 57);
    assert_eq!(canopy.draws(), 16);

    let skipped: Vec<(i32, i32, i32)> = canopy
        .skipped()
        .iter()
        .map(|cell| (cell.layer, cell.dx, cell.dz))
        .collect();
    assert_eq!(
        skipped,
        [
            (-3, -2, -2),
            (-2, -2, 2),
            (-2, 2, -2),
            (-2, 2, 2),
            (-1, -1, -1),
            (-1, -1, 1),
            (-1, 1, -1),
            (0, -1, -1),
            (0, -1, 1),
            (0, 1, -1),
            (0, 1, 1),
        ]
    );
    assert_eq!(
        canopy.skipped()[0],
        LeafCell {
            dx: -2,
            dy: 2,
            dz: -2,
            layer: -3
        }
    );

    // Sixteen draws consumed: the next value is the seventeenth of the plain sequence
    assert_eq!(rng.next_int(), 679749574);
}

#[test]
fn test_canopy_other_seeds() {
    for (seed, placed, next) in [(0, 59, -518907128), (42, 58, 1991376913)] {
        let mut rng = JavaRandom::new(seed);
        let canopy = Canopy::generate(&mut rng, 5);
        assert_eq!(canopy.placed(), placed, "seed {}", seed);
        assert_eq!(canopy.cell_count() - canopy.placed(), canopy.skipped().len());
        assert_eq!(rng.next_int(), next, "seed {}", seed);
    }
}

#[test]
fn test_canopy_shape_independent_of_height() {
    let mut a = JavaRandom::new(7);
    let mut b = JavaRandom::new(7);
    let low = Canopy::generate(&mut a, 5);
    let high = Canopy::generate(&mut b, 9);

    assert_eq!(low.placed(), high.placed());
    for (l, h) in low.skipped().iter().zip(high.skipped()) {
        assert_eq!((l.dx, l.dz, l.layer), (h.dx, h.dz, h.layer));
        assert_eq!(h.dy - l.dy, 4);
    }
}

#[test]
fn test_canopy_extreme_heights_wrap() {
    for height in [i32::MIN, i32::MIN + 1, i32::MAX] {
        let mut rng = JavaRandom::new(1);
        let mut reference = JavaRandom::new(1);
        let canopy = Canopy::generate(&mut rng, height);
        let plain = Canopy::generate(&mut reference, 5);

        assert_eq!(canopy.placed(), plain.placed(), "height {}", height);
        for cell in canopy.skipped() {
            assert_eq!(cell.dy, height.wrapping_add(cell.layer));
        }
    }
}

#[test]
fn test_canopy_draws_match_engine_advance() {
    for seed in [0, 7, 12345] {
        let mut rng = JavaRandom::new(seed);
        let mut reference = rng.clone();
        let canopy = Canopy::generate(&mut rng, 5);
        for _ in 0..canopy.draws() {
            reference.next_bits(31);
        }
        assert_eq!(rng.state(), reference.state(), "seed {}", seed);
    }
}
