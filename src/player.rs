//! Player module: the transport state machine and the audio backend.
//!
//! `Player` owns playback state (current track, play/pause, volume,
//! position) and drives exactly one audio output through the `AudioOutput`
//! seam. The rodio-backed output lives on its own thread and reports back
//! through `AudioEvent`s.

mod rodio;
mod state;
mod types;

pub use rodio::RodioOutput;
pub use state::{Player, SkipDirection};
pub use types::{AudioCmd, AudioEvent, AudioOutput};

#[cfg(test)]
mod tests;
