//! Film playback handle.

use super::playback;
use crate::schema::{Cel, CelId, Film};

/// Film playback state: a film and the time it started.
///
/// The animator holds no clock. Callers pass the current time to every query,
/// which keeps playback deterministic and free of accumulated error. Times are
/// in milliseconds on whatever timeline the caller uses.
///
/// Usage:
/// ```ignore
/// let mut animator = Animator::new(atlas.film("frog--idle").unwrap(), now);
/// // Every frame:
/// let bounds = animator.cel(now).bounds;
/// // Switch films:
/// animator.reset(now, atlas.film("frog--walk"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Animator<'a> {
    film: &'a Film,
    start: f64,
}

impl<'a> Animator<'a> {
    pub fn new(film: &'a Film, start: f64) -> Self {
        Self { film, start }
    }

    pub fn film(&self) -> &'a Film {
        self.film
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// The active cel index at `time`.
    pub fn index(&self, time: f64) -> usize {
        playback::index(self.film, time - self.start)
    }

    /// The active cel at `time`.
    pub fn cel(&self, time: f64) -> &'a Cel {
        playback::cel(self.film, time - self.start)
    }

    pub fn cel_id(&self, time: f64) -> CelId {
        self.cel(time).id
    }

    /// Restart playback at `start`, optionally switching films.
    pub fn reset(&mut self, start: f64, film: Option<&'a Film>) {
        if let Some(film) = film {
            self.film = film;
        }
        self.start = start;
    }
}
