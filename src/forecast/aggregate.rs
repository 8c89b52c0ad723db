use std::cmp::Ordering;
use std::collections::HashMap;

use crate::forecast::types::{EnrichedPoint, TimeBucket};

/// Folds points into one bucket per timestamp.
///
/// Timestamps are compared as raw strings. Buckets come out in first-seen
/// order and keep the input order of their points, independent of how the
/// lookup is done.
pub fn group_by_time(points: Vec<EnrichedPoint>) -> Vec<TimeBucket> {
    let mut buckets: Vec<TimeBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for point in points {
        match index.get(point.time()) {
            Some(&i) => buckets[i].forecast.push(point),
            None => {
                index.insert(point.time().to_string(), buckets.len());
                buckets.push(TimeBucket {
                    time: point.time().to_string(),
                    forecast: vec![point],
                });
            }
        }
    }

    buckets
}

/// Sorts every bucket by rating, highest first. Equal ratings keep their
/// relative order, and NaN ratings go last.
pub fn rank_by_rating(buckets: &mut [TimeBucket]) {
    for bucket in buckets {
        bucket
            .forecast
            .sort_by(|a, b| by_rating_desc(a.rating, b.rating));
    }
}

fn by_rating_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}
