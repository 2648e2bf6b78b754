//! Period normalization.
//!
//! A film's period is the greatest common divisor of its finite cel
//! durations. Cels are then repeated so that each entry of the film is exposed
//! for exactly one period, which lets playback map time to an index with a
//! single division regardless of how durations vary:
//!
//! ```text
//! Duration  Active        Entries
//! 100 ms      0 -  99 ms  0
//! 400 ms    100 - 499 ms  1 2 3 4
//! 200 ms    500 - 699 ms  5 6
//! ```

use std::sync::Arc;

use crate::schema::{Cel, Millis};

/// Greatest common divisor by iterative Euclid. `gcd(a, 0) == a`.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Compute the uniform period for a film's cels.
///
/// A lone cel is its own period, infinite or not. Otherwise infinite cels are
/// skipped and the finite durations reduced by [`gcd`]. Durations must already
/// be validated as positive.
pub fn compute_period(cels: &[Arc<Cel>]) -> Millis {
    match cels {
        [] => Millis::ZERO,
        [cel] => cel.duration,
        _ => cels
            .iter()
            .map(|cel| cel.duration)
            .filter(|duration| duration.is_finite())
            .map(Millis::get)
            .reduce(gcd)
            .map_or(Millis::INFINITE, Millis::new),
    }
}

/// Repeat each finite cel `duration / period` times. Infinite cels keep a
/// single entry.
pub fn normalize(cels: &[Arc<Cel>], period: Millis) -> Vec<Arc<Cel>> {
    let mut normalized = Vec::with_capacity(cels.len());
    for cel in cels {
        let copies = copies(cel.duration, period);
        normalized.extend(std::iter::repeat_n(cel, copies).cloned());
    }
    log::trace!(
        "normalized {} cels to {} entries at period {}",
        cels.len(),
        normalized.len(),
        period
    );
    normalized
}

fn copies(duration: Millis, period: Millis) -> usize {
    if duration.is_infinite() || period.is_infinite() || period.get() == 0 {
        1
    } else {
        (duration.get() / period.get()) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CelId, Rect};

    fn cel(id: u32, duration: Millis) -> Arc<Cel> {
        Arc::new(Cel {
            id: CelId(id),
            bounds: Rect::new(0, 0, 4, 4),
            duration,
            slice_bounds: Rect::EMPTY,
            slices: vec![],
        })
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 0), 12);
        assert_eq!(gcd(0, 12), 12);
        assert_eq!(gcd(100, 400), 100);
        assert_eq!(gcd(400, 100), 100);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(u32::MAX - 1, 2), 2);
    }

    #[test]
    fn test_single_cel_is_its_own_period() {
        assert_eq!(compute_period(&[cel(0, Millis::new(250))]), Millis::new(250));
        assert_eq!(compute_period(&[cel(0, Millis::INFINITE)]), Millis::INFINITE);
    }

    #[test]
    fn test_period_skips_infinite() {
        let cels = [
            cel(0, Millis::new(100)),
            cel(1, Millis::new(400)),
            cel(2, Millis::new(200)),
            cel(3, Millis::INFINITE),
        ];
        assert_eq!(compute_period(&cels), Millis::new(100));
    }

    #[test]
    fn test_normalize_repeats_by_reference() {
        let cels = [
            cel(0, Millis::new(100)),
            cel(1, Millis::new(400)),
            cel(2, Millis::new(200)),
        ];
        let period = compute_period(&cels);
        let normalized = normalize(&cels, period);
        let ids: Vec<_> = normalized.iter().map(|cel| cel.id.0).collect();
        assert_eq!(ids, vec![0, 1, 1, 1, 1, 2, 2]);
        assert!(Arc::ptr_eq(&normalized[1], &normalized[4]));
    }

    #[test]
    fn test_normalize_infinite_single_entry() {
        let cels = [cel(0, Millis::new(30)), cel(1, Millis::INFINITE)];
        let period = compute_period(&cels);
        assert_eq!(period, Millis::new(30));
        let normalized = normalize(&cels, period);
        assert_eq!(normalized.len(), 2);
        assert!(normalized[1].duration.is_infinite());
    }
}
