//! Tests for deterministic RNG
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence.

use quincunx_core::PegRng;

#[test]
fn test_rng_new_with_seed() {
    let rng = PegRng::new(12345);
    assert_eq!(rng.state(), 12345);
}

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = PegRng::new(12345);
    let mut rng2 = PegRng::new(12345);

    // Same seed should produce same sequence
    for _ in 0..100 {
        let val1 = rng1.next_u64();
        let val2 = rng2.next_u64();
        assert_eq!(val1, val2, "RNG not deterministic!");
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = PegRng::new(12345);
    let mut rng2 = PegRng::new(54321);

    let val1 = rng1.next_u64();
    let val2 = rng2.next_u64();

    assert_ne!(
        val1, val2,
        "Different seeds should produce different values"
    );
}

#[test]
fn test_rng_bit_deterministic() {
    let mut rng1 = PegRng::new(99999);
    let mut rng2 = PegRng::new(99999);

    for _ in 0..200 {
        assert_eq!(rng1.next_bit(), rng2.next_bit(), "next_bit() not deterministic!");
    }
}

#[test]
fn test_rng_bit_produces_both_outcomes() {
    let mut rng = PegRng::new(12345);

    let mut seen_true = false;
    let mut seen_false = false;
    for _ in 0..64 {
        if rng.next_bit() {
            seen_true = true;
        } else {
            seen_false = true;
        }
    }
    assert!(seen_true && seen_false, "64 draws never produced both bits");
}

#[test]
fn test_rng_state_advances() {
    let mut rng = PegRng::new(12345);
    let initial_state = rng.state();

    rng.next_u64();
    let new_state = rng.state();

    assert_ne!(initial_state, new_state, "RNG state should advance");
}

#[test]
fn test_rng_reseed_from_state_continues_sequence() {
    let mut rng = PegRng::new(777);
    rng.next_u64();

    let mut forked = PegRng::new(rng.state());
    assert_eq!(rng.next_u64(), forked.next_u64());
}
