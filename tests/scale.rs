use rand::{rngs::StdRng, Rng, SeedableRng};
use range_tree::{range, IntervalTree, Range};
use std::collections::HashSet;
use std::time::{Duration, Instant};

const SAMPLE_SIZE: usize = 100_000;
const DOMAIN: u32 = 1_000_000;
const MAX_RANGE_LEN: u32 = 1_000;

fn random_ranges(rng: &mut StdRng) -> HashSet<Range<u32>> {
    (0..SAMPLE_SIZE)
        .map(|_| {
            let start = rng.gen_range(0..DOMAIN);
            let len = rng.gen_range(0..MAX_RANGE_LEN);
            range(start, start + len)
        })
        .collect()
}

#[test]
fn every_inserted_range_is_covered() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let ranges = random_ranges(&mut rng);
    let started = Instant::now();

    let mut tree = IntervalTree::new();
    for r in &ranges {
        assert_eq!(tree.insert(*r), Ok(true));
    }
    assert_eq!(tree.len(), ranges.len());

    for r in &ranges {
        assert_eq!(tree.covers(r), Ok(true), "{r} not covered");
    }

    let elapsed = started.elapsed();
    assert!(
        elapsed < Duration::from_secs(10),
        "took {elapsed:?} for {} ranges",
        ranges.len()
    );
}

#[test]
fn removing_half_keeps_the_rest_queryable() {
    let mut rng = StdRng::seed_from_u64(42);
    let ranges: Vec<_> = random_ranges(&mut rng).into_iter().collect();

    let mut tree = IntervalTree::new();
    for r in &ranges {
        tree.insert(*r).unwrap();
    }

    let (removed, kept) = ranges.split_at(ranges.len() / 2);
    for r in removed {
        assert_eq!(tree.remove(r), Ok(true));
    }
    assert_eq!(tree.len(), kept.len());

    for r in removed {
        assert_eq!(tree.contains(r), Ok(false));
    }
    for r in kept {
        assert_eq!(tree.contains(r), Ok(true));
        assert_eq!(tree.covers(r), Ok(true));
    }
}
