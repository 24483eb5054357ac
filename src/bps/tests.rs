use super::*;

fn bp_from_str(s: &str) -> BitVector {
    let mut bv = BitVector::zeroed(s.len());
    for (i, c) in s.chars().enumerate() {
        bv.set(i, c == '(');
    }
    bv
}

#[test]
fn find_close_matches_hand_traced_tree() {
    let bp = bp_from_str("(()())");
    let sup = BpSupport::new(&bp);
    assert_eq!(sup.find_close(0), 5);
    assert_eq!(sup.find_close(1), 2);
    assert_eq!(sup.find_close(3), 4);
}

#[test]
fn enclose_walks_up_to_the_root() {
    let bp = bp_from_str("(()())");
    let sup = BpSupport::new(&bp);
    assert_eq!(sup.enclose(1), Some(0));
    assert_eq!(sup.enclose(3), Some(0));
    assert_eq!(sup.enclose(0), None);
}

#[test]
fn select_open_enumerates_in_order() {
    let bp = bp_from_str("(()())");
    let sup = BpSupport::new(&bp);
    assert_eq!(sup.select_open(0), 0);
    assert_eq!(sup.select_open(1), 1);
    assert_eq!(sup.select_open(2), 3);
}

#[test]
fn subtree_size_counts_nodes() {
    let bp = bp_from_str("(()())");
    let sup = BpSupport::new(&bp);
    assert_eq!(sup.subtree_size(0), 3);
    assert_eq!(sup.subtree_size(1), 1);
    assert_eq!(sup.subtree_size(3), 1);
}

#[test]
fn parent_distance_matches_enclose() {
    let bp = bp_from_str("((()))()");
    let sup = BpSupport::new(&bp);
    assert_eq!(sup.parent_distance(1), Some(1));
    assert_eq!(sup.parent_distance(2), Some(1));
    assert_eq!(sup.parent_distance(0), None);
}

#[test]
fn previous_and_next_value_bracket_a_known_level() {
    // "(()(()))" -> excess-before: 0 1 2 1 2 3 2 1 0
    let bp = bp_from_str("(()(()))");
    let sup = BpSupport::new(&bp);
    assert_eq!(sup.next_value(2, 1), Some(3));
    assert_eq!(sup.previous_value(3, 1), Some(1));
    assert_eq!(sup.next_value(7, 0), Some(8));
}

#[test]
fn deeply_nested_tree_round_trips() {
    let bp = bp_from_str("((((()))))");
    let sup = BpSupport::new(&bp);
    assert_eq!(sup.find_close(0), 9);
    for depth in 0..5 {
        assert_eq!(sup.subtree_size(depth), 5 - depth);
    }
}
