use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Point;
use crate::model::Stop;


/// Three stops used throughout the docs: only `c` is in the first quadrant, `a` and `b` are within
/// 4 miles of the origin and only `b` is within 3.
pub(crate) fn example_stops() -> Vec<Stop> {
    vec![
        Stop::new("a", Point::new(-2., 3.), true),
        Stop::new("b", Point::new(1., -1.), false),
        Stop::new("c", Point::new(5., 5.), true),
    ]
}

/// `n` stops scattered over a 40 x 40 mile square. Every other stop is snapped to a whole-mile
/// grid so that ties on both axes are common.
pub(crate) fn random_stops(n: usize, seed: u64) -> Vec<Stop> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let mut x: f64 = rng.gen_range(-20.0..20.0);
            let mut y: f64 = rng.gen_range(-20.0..20.0);
            if i % 2 == 0 {
                x = x.round();
                y = y.round();
            }
            Stop::new(format!("{i:05}"), Point::new(x, y), rng.gen_bool(0.5))
        })
        .collect()
}

pub(crate) fn sorted_ids<'a>(stops: impl IntoIterator<Item = &'a Stop>) -> Vec<&'a str> {
    let mut ids: Vec<&str> = stops.into_iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids
}
