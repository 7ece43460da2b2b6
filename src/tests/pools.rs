use super::*;

#[test]
fn default_classes_are_pairwise_disjoint() {
    let classes = [LOWERCASE, UPPERCASE, NUMERIC, DEFAULT_SPECIAL];

    for (i, a) in classes.iter().enumerate() {
        for b in classes.iter().skip(i + 1) {
            for c in a.chars() {
                assert!(!b.contains(c), "{:?} appears in two classes", c);
            }
        }
    }
}

#[test]
fn ambiguous_glyphs_are_left_out() {
    for ambiguous in ['I', 'l', '1', 'O', '0'] {
        assert!(!LOWERCASE.contains(ambiguous));
        assert!(!UPPERCASE.contains(ambiguous));
        assert!(!NUMERIC.contains(ambiguous));
    }
}

#[test]
fn the_last_pool_is_the_special_pool() {
    let set = PoolSet::with_special("*$");

    assert!(set.is_special('*'));
    assert!(set.is_special('$'));
    assert!(!set.is_special('a'));

    let reordered = PoolSet::from_classes(&["*$", "abc"]);

    assert!(reordered.is_special('a'));
    assert!(!reordered.is_special('*'));
}

#[test]
fn alphanumeric_set_has_three_active_pools() {
    let set = PoolSet::alphanumeric();

    assert_eq!(set.non_empty_pools(), 3);
    assert!(!set.is_special('*'));
}

#[test]
fn empty_classes_sit_out_the_draw() {
    let set = PoolSet::from_classes(&["ab", "", "x"]);

    assert_eq!(set.non_empty_pools(), 2);
}

#[test]
fn contains_covers_the_whole_union() {
    let set = PoolSet::default();

    for class in [LOWERCASE, UPPERCASE, NUMERIC, DEFAULT_SPECIAL] {
        for c in class.chars() {
            assert!(set.contains(c));
        }
    }

    assert!(!set.contains('l'));
    assert!(!set.contains('0'));
    assert!(!set.contains(' '));
}
