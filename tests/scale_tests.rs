use rand::Rng;
use sortlab::harness::{checksum, validate};
use sortlab::prelude::*;
use std::time::Instant;

#[test]
fn test_fast_algorithms_250k() {
    let count = 250_000;
    println!("Generating {} random keys...", count);

    let mut rng = rand::rng();
    let input: Vec<i64> = (0..count).map(|_| rng.random_range(0..1_000_000)).collect();
    let mut expected = input.clone();
    expected.sort_unstable();
    let expected_checksum = checksum(&expected);

    for algorithm in Algorithm::FAST {
        let mut data = input.clone();
        let start = Instant::now();
        algorithm.sort(&mut data).unwrap();
        println!("{:>14}: sorted {} keys in {:?}", algorithm, count, start.elapsed());

        assert_eq!(checksum(&data), expected_checksum, "{algorithm}");
    }
}

#[test]
fn test_quick_sorts_deep_recursion() {
    // Quadratic time for a last-element pivot, but stack depth stays logarithmic.
    let count = 10_000;
    let input: Vec<i64> = (0..count).collect();

    for algorithm in [Algorithm::Quick, Algorithm::QuickMedian3, Algorithm::Quick3Way] {
        let mut data: Vec<i64> = input.iter().rev().copied().collect();
        algorithm.sort(&mut data).unwrap();
        assert_eq!(data, input, "{algorithm}");
    }
}

#[test]
#[ignore]
fn test_harness_10m() {
    // WARNING: each dataset is 80MB, and every algorithm gets its own copy.
    let size = 10_000_000;
    println!("Benchmarking {} keys per dataset...", size);

    let harness = Harness::new(HarnessConfig::default().with_key_range(1 << 24));
    let start = Instant::now();
    let results = harness
        .run(&Algorithm::FAST, &DatasetSpec::every_kind(size, 1))
        .unwrap();
    println!("Sweep finished in {:?}", start.elapsed());

    for result in &results {
        println!(
            "#{:<3} {:>14} {:<28} {:?}",
            result.rank.unwrap_or(0),
            result.algorithm,
            result.dataset.to_string(),
            result.elapsed
        );
    }
    assert!(results.iter().all(|r| r.is_valid()));

    // Spot-check one output end to end.
    let mut data = DatasetSpec::new(DatasetKind::Random, size, 1).generate(harness.config());
    let input = data.clone();
    Algorithm::Radix.sort(&mut data).unwrap();
    assert_eq!(validate(&input, &data), Ok(()));
}
