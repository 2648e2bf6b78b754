//! Parsed film types.
//!
//! "Film" is used over "animation" for one named, directed sequence of cels.
//! Films are built once by [`crate::build::parse_atlas`] and never mutated.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Rect, Wh};

/// Milliseconds, or the reserved [`Millis::INFINITE`] pause sentinel.
///
/// Cel durations come from Aseprite as 16-bit values while film durations
/// aggregate them, so 32 bits are used throughout. Infinity is the maximum
/// value; finite sums never reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millis(u32);

impl Millis {
    pub const ZERO: Millis = Millis(0);
    pub const INFINITE: Millis = Millis(u32::MAX);

    #[inline]
    pub const fn new(millis: u32) -> Self {
        Self(millis)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        !self.is_infinite()
    }

    /// Milliseconds as a float, with the sentinel mapped to `f64::INFINITY`.
    #[inline]
    pub fn as_f64(self) -> f64 {
        if self.is_infinite() {
            f64::INFINITY
        } else {
            self.0 as f64
        }
    }

    /// Sum of two finite values. `None` if either is infinite or the sum
    /// would reach the infinite sentinel.
    #[inline]
    pub fn checked_add(self, rhs: Millis) -> Option<Millis> {
        if self.is_infinite() || rhs.is_infinite() {
            return None;
        }
        self.0
            .checked_add(rhs.0)
            .filter(|sum| *sum != Self::INFINITE.0)
            .map(Millis)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "∞ ms")
        } else {
            write!(f, "{} ms", self.0)
        }
    }
}

/// Atlas-wide unique cel identifier, contiguous and starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CelId(pub u32);

impl CelId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Playback oscillation pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Playback {
    /// Start to end; when looping, return to start.
    Forward,
    /// End to start; when looping, return to end.
    Reverse,
    /// Start to end then back, excluding the endpoints on the way back. A
    /// traversal out and back is one loop.
    PingPong,
    /// Like `PingPong` but starting from the end.
    PingPongReverse,
}

impl Playback {
    pub const ALL: [Playback; 4] = [
        Playback::Forward,
        Playback::Reverse,
        Playback::PingPong,
        Playback::PingPongReverse,
    ];

    /// Map an Aseprite direction string. Returns `None` for anything else.
    pub fn from_aseprite(direction: &str) -> Option<Self> {
        match direction {
            "forward" => Some(Playback::Forward),
            "reverse" => Some(Playback::Reverse),
            "pingpong" => Some(Playback::PingPong),
            "pingpong_reverse" => Some(Playback::PingPongReverse),
            _ => None,
        }
    }

    /// The Aseprite direction string for this playback.
    pub fn as_aseprite(self) -> &'static str {
        match self {
            Playback::Forward => "forward",
            Playback::Reverse => "reverse",
            Playback::PingPong => "pingpong",
            Playback::PingPongReverse => "pingpong_reverse",
        }
    }

    #[inline]
    pub fn is_ping_pong(self) -> bool {
        matches!(self, Playback::PingPong | Playback::PingPongReverse)
    }
}

impl fmt::Display for Playback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_aseprite())
    }
}

/// A single displayed frame of a film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cel {
    pub id: CelId,
    /// Location within the atlas image, padding excluded. The size always
    /// matches the owning film's `wh`.
    pub bounds: Rect,
    /// Positive exposure, possibly infinite.
    pub duration: Millis,
    /// Union of `slices`, or [`Rect::EMPTY`] when there are none.
    pub slice_bounds: Rect,
    /// Slices active for this cel in local pixels.
    pub slices: Vec<Rect>,
}

/// A sequence of cels with uniform frequency.
///
/// Cels are repeated by reference so that every entry of `cels` is exposed for
/// exactly one `period`. An infinite cel occupies a single entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    /// The Aseprite tag, e.g. `frog--idle`.
    pub id: String,
    /// Cel width and height. Identical for every cel.
    pub wh: Wh,
    /// Never empty.
    pub cels: Vec<Arc<Cel>>,
    /// Union of every cel's slice bounds.
    pub slice_bounds: Rect,
    /// Time before the cel may change: the greatest common divisor of finite
    /// cel durations.
    pub period: Millis,
    /// One full cycle. Ping-pong films count the way back excluding the first
    /// and last cel.
    pub duration: Millis,
    pub direction: Playback,
    /// Number of cycles to play. `None` loops forever.
    pub loops: Option<u32>,
}

impl Film {
    /// Number of leading entries that repeat the first cel.
    pub fn start_copies(&self) -> usize {
        match self.cels.first() {
            Some(first) => self.cels.iter().take_while(|cel| cel.id == first.id).count(),
            None => 0,
        }
    }

    /// Number of trailing entries that repeat the last cel.
    pub fn end_copies(&self) -> usize {
        match self.cels.last() {
            Some(last) => self.cels.iter().rev().take_while(|cel| cel.id == last.id).count(),
            None => 0,
        }
    }

    /// Distinct cels in playback order, duplicates removed.
    pub fn distinct_cels(&self) -> impl Iterator<Item = &Arc<Cel>> {
        self.cels
            .iter()
            .enumerate()
            .filter(|(i, cel)| *i == 0 || self.cels[i - 1].id != cel.id)
            .map(|(_, cel)| cel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cel(id: u32, duration: u32) -> Arc<Cel> {
        Arc::new(Cel {
            id: CelId(id),
            bounds: Rect::new(0, 0, 1, 1),
            duration: Millis::new(duration),
            slice_bounds: Rect::EMPTY,
            slices: vec![],
        })
    }

    #[test]
    fn test_millis_checked_add() {
        assert_eq!(Millis::new(2).checked_add(Millis::new(3)), Some(Millis::new(5)));
        assert_eq!(Millis::INFINITE.checked_add(Millis::new(1)), None);
        assert_eq!(Millis::new(1).checked_add(Millis::INFINITE), None);
        assert_eq!(Millis::new(u32::MAX - 1).checked_add(Millis::new(1)), None);
        assert_eq!(
            Millis::new(u32::MAX - 2).checked_add(Millis::new(1)),
            Some(Millis::new(u32::MAX - 1))
        );
        assert_eq!(Millis::INFINITE.as_f64(), f64::INFINITY);
    }

    #[test]
    fn test_playback_aseprite_mapping() {
        for playback in Playback::ALL {
            assert_eq!(Playback::from_aseprite(playback.as_aseprite()), Some(playback));
        }
        assert_eq!(Playback::from_aseprite("Forward"), None);
        assert_eq!(Playback::from_aseprite("sideways"), None);
    }

    #[test]
    fn test_copies_and_distinct() {
        let a = cel(0, 1);
        let b = cel(1, 1);
        let c = cel(2, 2);
        let film = Film {
            id: "abc".into(),
            wh: Wh::new(1, 1),
            cels: vec![a.clone(), b.clone(), c.clone(), c.clone()],
            slice_bounds: Rect::EMPTY,
            period: Millis::new(1),
            duration: Millis::new(5),
            direction: Playback::PingPong,
            loops: None,
        };
        assert_eq!(film.start_copies(), 1);
        assert_eq!(film.end_copies(), 2);
        let ids: Vec<_> = film.distinct_cels().map(|cel| cel.id).collect();
        assert_eq!(ids, vec![CelId(0), CelId(1), CelId(2)]);
    }

    #[test]
    fn test_playback_serializes_by_variant_name() {
        let json = serde_json::to_string(&Playback::PingPongReverse).unwrap();
        assert_eq!(json, "\"PingPongReverse\"");
    }
}
