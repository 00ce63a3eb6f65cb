use midsnake::myers::{diff, diff_from, distance, tally, Edit};
use midsnake::patch::apply;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_round_trip_vec(
        old in prop::collection::vec(any::<i32>(), 0..40),
        new in prop::collection::vec(any::<i32>(), 0..40),
    ) {
        let script = diff(&old, &new);
        let result = apply(&old, &new, &script).unwrap();
        prop_assert_eq!(result, new);
    }

    #[test]
    fn test_round_trip_strings(
        old in prop::collection::vec(".*", 0..20),
        new in prop::collection::vec(".*", 0..20),
    ) {
        let script = diff(&old, &new);
        let result = apply(&old, &new, &script).unwrap();
        prop_assert_eq!(result, new);
    }

    #[test]
    fn test_script_length_is_the_distance(
        old in prop::collection::vec(0u8..6, 0..30),
        new in prop::collection::vec(0u8..6, 0..30),
    ) {
        let script = diff(&old, &new);
        prop_assert_eq!(script.len(), distance(&old, &new));
    }

    #[test]
    fn test_tally_matches_length_change(
        old in prop::collection::vec(any::<u8>(), 0..30),
        new in prop::collection::vec(any::<u8>(), 0..30),
    ) {
        let (inserts, deletes) = tally(&diff(&old, &new));
        prop_assert_eq!(
            new.len() as isize - old.len() as isize,
            inserts as isize - deletes as isize
        );
    }

    #[test]
    fn test_anchors_are_nondecreasing(
        old in prop::collection::vec(0u8..4, 0..30),
        new in prop::collection::vec(0u8..4, 0..30),
    ) {
        let script = diff(&old, &new);
        for pair in script.windows(2) {
            prop_assert!(pair[0].position_old() <= pair[1].position_old());
        }
    }

    #[test]
    fn test_offsets_only_shift_positions(
        old in prop::collection::vec(0u8..4, 0..20),
        new in prop::collection::vec(0u8..4, 0..20),
        left_offset in 0usize..100,
        right_offset in 0usize..100,
    ) {
        let base = diff(&old, &new);
        let shifted = diff_from(&old, &new, left_offset, right_offset);
        prop_assert_eq!(base.len(), shifted.len());

        for (plain, moved) in base.iter().zip(&shifted) {
            match (plain, moved) {
                (
                    Edit::Delete { position_old: p },
                    Edit::Delete { position_old: q },
                ) => prop_assert_eq!(p + left_offset, *q),
                (
                    Edit::Insert { position_old: p, position_new: r },
                    Edit::Insert { position_old: q, position_new: s },
                ) => {
                    prop_assert_eq!(p + left_offset, *q);
                    prop_assert_eq!(r + right_offset, *s);
                }
                _ => prop_assert!(false, "operation kinds diverged under offsets"),
            }
        }
    }

    #[test]
    fn test_rediff_of_applied_script_is_empty(
        old in prop::collection::vec(0u8..4, 0..30),
        new in prop::collection::vec(0u8..4, 0..30),
    ) {
        let script = diff(&old, &new);
        let patched = apply(&old, &new, &script).unwrap();
        prop_assert_eq!(diff(&patched, &new), vec![]);
    }
}

#[test]
fn test_line_oriented_round_trip() {
    let old = "one\ntwo\nthree\nfour";
    let new = "one\ntwo\n2.5\nthree\nfive";

    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();

    let script = midsnake::diff_lines(old, new);
    assert_eq!(apply(&old_lines, &new_lines, &script).unwrap(), new_lines);
    assert_eq!(script.len(), distance(&old_lines, &new_lines));
}
