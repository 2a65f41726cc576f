use proptest::prelude::*;
use rain_trap::utils::naive_trapped_water;
use rain_trap::Strategy as Trap;
use rain_trap::{compute_trapped_water, TrapStrategy};

fn terrain(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..99_999, 0..max_len)
}

fn signed_terrain(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..1_000, 0..max_len)
}

proptest! {
    #[test]
    fn all_strategies_match_naive(t in terrain(64)) {
        let expected = naive_trapped_water(&t);
        for s in Trap::ALL {
            prop_assert_eq!(s.trapped_water(&t), expected, "strategy {}", s);
        }
    }

    #[test]
    fn all_strategies_agree_on_long_terrains(t in terrain(2_000)) {
        let expected = compute_trapped_water(&t);
        for s in Trap::ALL {
            prop_assert_eq!(s.trapped_water(&t), expected, "strategy {}", s);
        }
    }

    #[test]
    fn negative_heights_match_naive(t in signed_terrain(64)) {
        let expected = naive_trapped_water(&t);
        for s in Trap::ALL {
            prop_assert_eq!(s.trapped_water(&t), expected, "strategy {}", s);
        }
    }

    #[test]
    fn input_is_left_untouched(t in terrain(128)) {
        let before = t.clone();
        for s in Trap::ALL {
            let _ = s.trapped_water(&t);
            prop_assert_eq!(&t, &before);
        }
    }

    #[test]
    fn mirror_image_traps_the_same(t in terrain(128)) {
        let mut mirrored = t.clone();
        mirrored.reverse();
        for s in Trap::ALL {
            prop_assert_eq!(s.trapped_water(&t), s.trapped_water(&mirrored));
        }
    }

    #[test]
    fn uniform_shift_traps_the_same(t in signed_terrain(128), shift in -10_000i64..10_000) {
        let shifted: Vec<i64> = t.iter().map(|h| h + shift).collect();
        for s in Trap::ALL {
            prop_assert_eq!(s.trapped_water(&t), s.trapped_water(&shifted));
        }
    }
}

#[test]
fn tiny_terrains_trap_nothing() {
    for s in Trap::ALL {
        assert_eq!(s.trapped_water(&[]), 0);
        for a in -3i64..=3 {
            assert_eq!(s.trapped_water(&[a]), 0);
            for b in -3i64..=3 {
                assert_eq!(s.trapped_water(&[a, b]), 0, "{s} on [{a}, {b}]");
            }
        }
    }
}
