//! Commands sent to the audio output and events it reports back.

use std::time::Duration;

/// Commands the state machine issues to its audio output.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCmd {
    /// Replace the loaded media with `url`, starting from position zero.
    Load { url: String, autoplay: bool },
    /// Resume the loaded media.
    Play,
    /// Pause the loaded media.
    Pause,
    /// Set output volume, already mapped into `[0.0, 1.0]`.
    SetVolume(f32),
    /// Jump to an absolute position in the loaded media.
    SeekTo(Duration),
    /// Shut the output down.
    Quit,
}

/// Asynchronous notifications from the audio output.
///
/// Progress events may arrive at any rate; `Metadata` arrives at most once
/// per load; `Ended` at most once per playthrough.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioEvent {
    /// Elapsed playback time of the current media.
    Progress(Duration),
    /// Total duration, once known.
    Metadata(Duration),
    /// The current media played to its natural end.
    Ended,
    /// Playback could not start (fetch/decode failure). Non-fatal.
    Rejected(String),
}

/// The seam between the state machine and the single audio resource it
/// owns. Send errors are not surfaced; a dead output simply stops
/// reacting, mirroring how the runtime treats a closed channel.
pub trait AudioOutput {
    fn send(&self, cmd: AudioCmd);
}
