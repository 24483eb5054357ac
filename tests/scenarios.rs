//! End-to-end scenarios, run against both the direct construction and the
//! independent suffix-array oracle, plus the BP round trip.

use nss_tree::construct::construct;
use nss_tree::lce::NaiveLce;
use nss_tree::oracle;
use nss_tree::tree::{bp_to_pss_nss, pss_nss_to_bp};

fn check(text: &[u8]) -> nss_tree::XssResult {
    let lce = NaiveLce::new(text);
    let result = construct(text, &lce, 0);
    let (oracle_pss, oracle_nss) = oracle::psv_nsv(text);
    assert_eq!(result.pss, oracle_pss, "pss vs oracle mismatch for {text:?}");
    assert_eq!(result.nss, oracle_nss, "nss vs oracle mismatch for {text:?}");

    let bp = pss_nss_to_bp(&result.nss);
    assert_eq!(bp.len(), 2 * text.len() + 2);
    let mut excess = 0i64;
    for i in 0..bp.len() {
        excess += if bp.get(i) { 1 } else { -1 };
        assert!(excess >= 0, "bp not prefix-balanced at bit {i}");
    }
    assert_eq!(excess, 0, "bp not balanced");

    let (round_pss, round_nss) = bp_to_pss_nss(&bp);
    assert_eq!(round_pss, result.pss);
    assert_eq!(round_nss, result.nss);

    result
}

#[test]
fn scenario_ababc() {
    let result = check(b"\x00ABABC\x00");
    assert_eq!(result.pss, vec![7, 0, 1, 1, 3, 4, 7]);
    assert_eq!(result.nss, vec![6, 6, 3, 6, 6, 6, 7]);
}

#[test]
fn scenario_aaaaa() {
    let result = check(b"\x00AAAAA\x00");
    assert_eq!(result.pss, vec![7, 0, 0, 0, 0, 0, 7]);
    assert_eq!(result.nss, vec![6, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn scenario_cba() {
    let result = check(b"\x00CBA\x00");
    assert_eq!(result.pss, vec![5, 0, 0, 0, 5]);
    assert_eq!(result.nss, vec![4, 2, 3, 4, 5]);
}

#[test]
fn scenario_abc() {
    let result = check(b"\x00ABC\x00");
    assert_eq!(result.pss, vec![5, 0, 1, 2, 5]);
    assert_eq!(result.nss, vec![4, 4, 4, 4, 5]);
}

/// Fibonacci word built by the standard substitution a -> ab, b -> a,
/// starting from "a", iterated until well past the 128-byte acceleration
/// threshold so both the run-extension and Lyndon-run paths get a chance to
/// trigger. Remapped to bytes {1, 2} so 0x00 stays a free sentinel.
fn fibonacci_word(iterations: usize) -> Vec<u8> {
    let mut word = vec![1u8];
    for _ in 0..iterations {
        let mut next = Vec::with_capacity(word.len() * 2);
        for &b in &word {
            if b == 1 {
                next.push(1);
                next.push(2);
            } else {
                next.push(1);
            }
        }
        word = next;
    }
    word
}

#[test]
fn scenario_fibonacci_word_matches_oracle_and_exercises_acceleration() {
    let mut text = vec![0u8];
    text.extend(fibonacci_word(14));
    text.push(0u8);
    // Fibonacci words are dense with the self-similar runs the run-extension
    // skip targets, but whether it actually fires depends on where the
    // stack's nearest surviving ancestor lands relative to the current
    // position, not just on text structure — so this only asserts the
    // result stays correct, the same way it would whether or not the skip
    // happened to trigger on this particular word.
    let _ = check(&text);
}

/// `0 a (ab)(ab)(ab) (abc)(abc)(abc) ... 0`, built up to roughly 1024 bytes
/// by repeating successively longer alphabets.
fn run_of_runs(target_len: usize) -> Vec<u8> {
    let mut body = vec![1u8]; // leading lone "a"
    let mut alphabet_size = 2u8;
    while body.len() < target_len {
        let block: Vec<u8> = (1..=alphabet_size).collect();
        for _ in 0..8 {
            if body.len() >= target_len {
                break;
            }
            body.extend_from_slice(&block);
        }
        alphabet_size += 1;
    }
    body.truncate(target_len);

    let mut text = vec![0u8];
    text.extend(body);
    text.push(0u8);
    text
}

#[test]
fn scenario_run_of_runs_at_length_1024() {
    let text = run_of_runs(1024);
    let result = check(&text);
    let n = result.nss.len();
    assert_eq!(
        result.nss[1] as usize,
        n - 1,
        "the lone leading 'a' should have its next smaller suffix at the trailing sentinel"
    );
}
