//! Time to cel index mapping.
//!
//! Every entry of a film's cels is exposed for exactly one period, so the
//! elapsed time reduces to an integer step (`time_index`) that each playback
//! direction folds into `[0, len)`:
//!
//! - Forward `[0, +∞)`: start at the first entry, advance, roll over.
//! - Reverse `(-∞, len)`: start at the last entry, retreat, roll over.
//! - Ping-pong: start at the first entry and double back at each end without
//!   repeating the end cels.
//! - Ping-pong reverse: like ping-pong but start from the last entry.
//!
//! Nothing here validates; films are trusted to come from the builder.

use crate::schema::{Cel, Film, Playback};

/// Wrap `value` to `[min, max)`. Negative inputs wrap like positive ones.
/// An empty range yields `min`.
///
/// Any `i64` is accepted, including saturated time indices far from the
/// window.
#[inline]
pub fn wrap(value: i64, min: i64, max: i64) -> i64 {
    if min == max {
        return min;
    }
    debug_assert!(max > min, "max={max} < min={min}");
    let (value, min, max) = (i128::from(value), i128::from(min), i128::from(max));
    // The result lies in [min, max), which always fits back in i64.
    ((value - min).rem_euclid(max - min) + min) as i64
}

/// The active cel index of `film` after `elapsed` milliseconds.
///
/// Once a film with finitely many loops has played them all, or a film with
/// an infinite cel reaches it, the index stays on the direction's final cel.
pub fn index(film: &Film, elapsed: f64) -> usize {
    let len = film.cels.len();
    let time_index = time_index(film, elapsed);

    if is_finished(film, elapsed, time_index) {
        return terminal_index(film);
    }

    let len = len as i64;
    let index = match film.direction {
        Playback::Forward => wrap(time_index, 0, len),
        Playback::Reverse => (len - 1) - wrap(time_index, 0, len),
        Playback::PingPong => ping_pong(film, time_index),
        Playback::PingPongReverse => ping_pong(film, (len - 1).saturating_sub(time_index)),
    };
    index as usize
}

/// The active cel of `film` after `elapsed` milliseconds.
#[inline]
pub fn cel(film: &Film, elapsed: f64) -> &Cel {
    &film.cels[index(film, elapsed)]
}

/// Whole periods elapsed. An infinite period never advances.
#[inline]
fn time_index(film: &Film, elapsed: f64) -> i64 {
    // Float to int casts saturate and map NaN to zero.
    (elapsed / film.period.as_f64()).floor() as i64
}

fn is_finished(film: &Film, elapsed: f64, time_index: i64) -> bool {
    if let Some(loops) = film.loops {
        if elapsed / film.duration.as_f64() >= loops as f64 {
            return true;
        }
    }
    film.duration.is_infinite() && time_index >= film.cels.len() as i64
}

/// The last entry shown by a complete pass in the film's direction.
pub fn terminal_index(film: &Film) -> usize {
    let len = film.cels.len();
    match film.direction {
        Playback::Forward => len - 1,
        Playback::Reverse => 0,
        Playback::PingPong => film.start_copies().min(len - 1),
        Playback::PingPongReverse => (len - 1).saturating_sub(film.end_copies()),
    }
}

/// Ping-pong fold. The window spans the forward pass `[0, len)` plus the
/// return pass as negative steps, which skip every copy of the first and last
/// cel so that the ends are not shown twice.
fn ping_pong(film: &Film, time_index: i64) -> i64 {
    let len = film.cels.len() as i64;
    let start = film.start_copies() as i64;
    let end = film.end_copies() as i64;
    if start >= len {
        // A single distinct cel.
        return 0;
    }
    let value = wrap(time_index, start + end - len, len);
    if value >= 0 {
        value
    } else {
        value.abs() + start - 1
    }
}
