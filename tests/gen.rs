use triad_eval::eval::evaluate;
use triad_eval::gen::generate;

#[test]
fn generates_requested_size() {
    let (a, b, c) = generate(5, 1, 10, 42).unwrap();
    assert_eq!(a.len(), 5);
    assert_eq!(b.len(), 5);
    assert_eq!(c.len(), 5);
}

#[test]
fn values_stay_in_range() {
    let (a, b, c) = generate(100, 1, 10, 7).unwrap();
    assert!(a.iter().all(|&v| (1..=10).contains(&v)));
    assert!(b.iter().all(|&v| (1..=10).contains(&v)));
    // Third array is either a sum of in-range values or a widened draw.
    assert!(c.iter().all(|&v| (2..=20).contains(&v)));
}

#[test]
fn same_seed_same_triple() {
    let first = generate(20, 1, 10, 99).unwrap();
    let second = generate(20, 1, 10, 99).unwrap();
    assert_eq!(first, second);
}

#[test]
fn generated_triple_evaluates_cleanly() {
    let (a, b, c) = generate(50, 1, 10, 3).unwrap();
    let outcomes = evaluate(&a, &b, &c).unwrap();
    assert_eq!(outcomes.len(), 50);
}

#[test]
fn zero_size_is_rejected() {
    assert!(generate(0, 1, 10, 42).is_err());
}

#[test]
fn inverted_range_is_rejected() {
    assert!(generate(5, 10, 1, 42).is_err());
}
