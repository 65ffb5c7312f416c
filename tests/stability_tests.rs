use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortlab::algo::distribution::{bucket_sort_by_key, counting_sort_by_key, radix_sort_by_key};
use sortlab::algo::elementary::*;
use sortlab::algo::merge::merge_sort_by;
use sortlab::object;
use sortlab::prelude::*;
use std::cmp::Ordering;

/// A key tagged with its position in the input.
type Tagged = (i64, usize);

fn by_key(a: &Tagged, b: &Tagged) -> Ordering {
    a.0.cmp(&b.0)
}

fn tagged(keys: &[i64]) -> Vec<Tagged> {
    keys.iter().copied().zip(0..).collect()
}

/// Sorted by key, and tags ascending within every run of equal keys.
fn assert_stable(name: &str, output: &[Tagged]) {
    for w in output.windows(2) {
        assert!(w[0].0 <= w[1].0, "{name}: not sorted: {output:?}");
        if w[0].0 == w[1].0 {
            assert!(w[0].1 < w[1].1, "{name}: equal keys reordered: {output:?}");
        }
    }
}

type SortFn = fn(&mut [Tagged]);

fn stable_sorts() -> [(&'static str, SortFn); 10] {
    [
        ("bubble", |d| bubble_sort_by(d, &by_key, &mut Tracer::new())),
        ("bubble_optimized", |d| {
            bubble_sort_optimized_by(d, &by_key, &mut Tracer::new())
        }),
        ("stable_selection", |d| {
            stable_selection_sort_by(d, &by_key, &mut Tracer::new())
        }),
        ("insertion", |d| insertion_sort_by(d, &by_key, &mut Tracer::new())),
        ("binary_insertion", |d| {
            binary_insertion_sort_by(d, &by_key, &mut Tracer::new())
        }),
        ("merge", |d| merge_sort_by(d, &by_key, &mut Tracer::new())),
        ("object", |d| object::sort_by_key(d, |r| r.0)),
        ("counting", |d| {
            counting_sort_by_key(d, |r| r.0, &mut Tracer::new()).unwrap()
        }),
        ("radix", |d| {
            radix_sort_by_key(d, |r| r.0, &mut Tracer::new()).unwrap()
        }),
        ("bucket", |d| {
            bucket_sort_by_key(d, |r| r.0, &mut Tracer::new()).unwrap()
        }),
    ]
}

#[test]
fn test_counting_keeps_duplicate_order() {
    let mut data = tagged(&[4, 2, 2, 8, 3, 3, 1]);
    counting_sort_by_key(&mut data, |r| r.0, &mut Tracer::new()).unwrap();
    assert_eq!(
        data,
        vec![(1, 6), (2, 1), (2, 2), (3, 4), (3, 5), (4, 0), (8, 3)]
    );
}

#[test]
fn test_stable_sorts_on_duplicate_heavy_input() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..50 {
        let len = rng.random_range(0..120);
        let keys: Vec<i64> = (0..len).map(|_| rng.random_range(0..8)).collect();
        for (name, sort) in stable_sorts() {
            let mut data = tagged(&keys);
            sort(&mut data);
            assert_stable(name, &data);
        }
    }
}

#[test]
fn test_stable_sorts_on_wide_keys() {
    let mut rng = StdRng::seed_from_u64(8);
    let keys: Vec<i64> = (0..2000)
        .map(|i| if i % 5 == 0 { 123_456 } else { rng.random_range(0..200_000) })
        .collect();

    for (name, sort) in stable_sorts() {
        let mut data = tagged(&keys);
        sort(&mut data);
        assert_stable(name, &data);
    }
}

#[test]
fn test_stable_on_already_sorted_is_identity() {
    let keys = [1, 1, 2, 3, 3, 3, 9, 9];
    for (name, sort) in stable_sorts() {
        let mut data = tagged(&keys);
        sort(&mut data);
        assert_eq!(data, tagged(&keys), "{name}");
    }
}

#[test]
fn test_registry_stability_flags_hold() {
    // The registry sorts bare keys, so check stability through the same
    // algorithms' keyed forms listed above.
    let stable_names: Vec<&str> = stable_sorts()
        .into_iter()
        .map(|(name, _)| name)
        .filter(|&name| name != "object")
        .collect();
    for algorithm in Algorithm::ALL {
        assert_eq!(
            algorithm.is_stable(),
            stable_names.contains(&algorithm.name()),
            "{algorithm}"
        );
    }
}

#[test]
fn test_composite_comparator() {
    #[derive(Clone, Debug, PartialEq)]
    struct Person {
        last: &'static str,
        first: &'static str,
        age: u32,
    }

    let mut people = vec![
        Person { last: "Lovelace", first: "Ada", age: 36 },
        Person { last: "Hopper", first: "Grace", age: 85 },
        Person { last: "Lovelace", first: "Byron", age: 36 },
        Person { last: "Hopper", first: "Alan", age: 41 },
        Person { last: "Lovelace", first: "Ada", age: 12 },
    ];

    let order = comparing(|p: &Person| p.last)
        .then(comparing(|p: &Person| p.first))
        .then(comparing(|p: &Person| p.age).reversed());
    object::sort_by(&mut people, &order);

    let summary: Vec<_> = people.iter().map(|p| (p.last, p.first, p.age)).collect();
    assert_eq!(
        summary,
        vec![
            ("Hopper", "Alan", 41),
            ("Hopper", "Grace", 85),
            ("Lovelace", "Ada", 36),
            ("Lovelace", "Ada", 12),
            ("Lovelace", "Byron", 36),
        ]
    );
}

#[test]
fn test_object_sort_keeps_order_of_ties() {
    let mut words = vec!["delta", "ox", "alpha", "be", "gamma", "at"];
    object::sort_by(&mut words, &|a: &&str, b: &&str| a.len().cmp(&b.len()));
    assert_eq!(words, vec!["ox", "be", "at", "delta", "alpha", "gamma"]);
}
