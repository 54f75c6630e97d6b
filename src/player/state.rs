//! The transport state machine.
//!
//! Three effective states: loaded-paused, loaded-playing, and (only before
//! `load_current` has run) idle. A default track is preselected at startup
//! so the idle state is not reachable afterwards.

use std::time::Duration;

use crate::catalogue::Track;

use super::types::{AudioCmd, AudioEvent, AudioOutput};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipDirection {
    Next,
    Prev,
}

/// Playback state machine. Owns its audio output exclusively; every
/// transition that changes the playing flag or the current track issues
/// the corresponding command.
pub struct Player<O: AudioOutput> {
    tracks: Vec<Track>,
    out: O,
    current: usize,
    playing: bool,
    volume: u8,
    /// Elapsed seconds into the current track.
    position: f64,
    /// Total seconds of the current track; 0.0 until metadata arrives.
    duration: f64,
    /// Last playback rejection, for the status line. Cleared on load.
    rejection: Option<String>,
}

impl<O: AudioOutput> Player<O> {
    pub fn new(tracks: Vec<Track>, out: O, volume: u8) -> Self {
        Self {
            tracks,
            out,
            current: 0,
            playing: false,
            volume: volume.min(100),
            position: 0.0,
            duration: 0.0,
            rejection: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn position(&self) -> Duration {
        Duration::from_secs_f64(self.position.max(0.0))
    }

    /// Total duration, `None` until metadata has arrived.
    pub fn duration(&self) -> Option<Duration> {
        if self.duration > 0.0 {
            Some(Duration::from_secs_f64(self.duration))
        } else {
            None
        }
    }

    /// Completed fraction in `[0, 1]`, 0 while the duration is unknown.
    pub fn progress_fraction(&self) -> f64 {
        if self.duration > 0.0 {
            (self.position / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn rejection(&self) -> Option<&str> {
        self.rejection.as_deref()
    }

    /// Push current volume and the preselected track to the output without
    /// starting playback. Called once at startup.
    pub fn attach(&mut self) {
        self.out
            .send(AudioCmd::SetVolume(f32::from(self.volume) / 100.0));
        self.load_current(false);
    }

    /// User clicked a track. The already-current track toggles play/pause
    /// instead of reloading; any other track replaces it and autoplays.
    pub fn select(&mut self, index: usize) {
        if index >= self.tracks.len() {
            return;
        }
        if index == self.current {
            self.toggle();
        } else {
            self.current = index;
            self.load_current(true);
        }
    }

    /// Flip play/pause. Does not touch the current track or position.
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
        self.out.send(if self.playing {
            AudioCmd::Play
        } else {
            AudioCmd::Pause
        });
    }

    /// Move to the neighbouring track in catalogue order, wrapping at both
    /// ends, with autoplay forced on.
    pub fn skip(&mut self, direction: SkipDirection) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }
        self.current = match direction {
            SkipDirection::Next => (self.current + 1) % len,
            SkipDirection::Prev => (self.current + len - 1) % len,
        };
        self.load_current(true);
    }

    /// Seek to `fraction` of the total duration. A no-op (not an error)
    /// while the duration is still unknown.
    pub fn seek(&mut self, fraction: f64) {
        if self.duration <= 0.0 {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        self.position = fraction * self.duration;
        self.out
            .send(AudioCmd::SeekTo(Duration::from_secs_f64(self.position)));
    }

    /// Seek relative to the current position by a signed fraction of the
    /// total duration (keyboard scrubbing).
    pub fn seek_by_fraction(&mut self, delta: f64) {
        if self.duration <= 0.0 {
            return;
        }
        self.seek((self.position / self.duration) + delta);
    }

    /// Clamp into `[0, 100]` and apply immediately.
    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(0, 100) as u8;
        self.out
            .send(AudioCmd::SetVolume(f32::from(self.volume) / 100.0));
    }

    pub fn change_volume(&mut self, delta: i32) {
        self.set_volume(i32::from(self.volume) + delta);
    }

    /// Feed one asynchronous notification from the audio output.
    pub fn handle_event(&mut self, event: AudioEvent) {
        match event {
            AudioEvent::Progress(elapsed) => {
                self.position = elapsed.as_secs_f64();
                if self.duration > 0.0 && self.position > self.duration {
                    self.position = self.duration;
                }
            }
            AudioEvent::Metadata(total) => {
                self.duration = total.as_secs_f64();
                if self.duration > 0.0 && self.position > self.duration {
                    self.position = self.duration;
                }
            }
            // Natural end of track: continuous playback across the whole
            // catalogue, wrapping at the end.
            AudioEvent::Ended => self.skip(SkipDirection::Next),
            // Playback refused to start: downgrade the intent silently and
            // keep a note for the status line.
            AudioEvent::Rejected(reason) => {
                self.playing = false;
                self.rejection = Some(reason);
            }
        }
    }

    pub fn shutdown(&self) {
        self.out.send(AudioCmd::Quit);
    }

    fn load_current(&mut self, autoplay: bool) {
        let Some(track) = self.tracks.get(self.current) else {
            return;
        };
        self.position = 0.0;
        self.duration = 0.0;
        self.playing = autoplay;
        self.rejection = None;
        self.out.send(AudioCmd::Load {
            url: track.audio_url.to_string(),
            autoplay,
        });
    }
}
