//! Film playback.
//!
//! Playback is a pure function of a film and the time elapsed since it
//! started. There is no clock, no accumulated exposure, and no mutation, so
//! any number of readers may query the same film concurrently.
//!
//! # Oscillation
//!
//! ```text
//! cels:             0 1 2 3
//! Forward:          0 1 2 3 0 1 2 3 ...
//! Reverse:          3 2 1 0 3 2 1 0 ...
//! PingPong:         0 1 2 3 2 1 0 1 ...
//! PingPongReverse:  3 2 1 0 1 2 3 2 ...
//! ```

mod animator;
mod playback;

pub use animator::Animator;
pub use playback::{cel, index, terminal_index, wrap};
