use crate::player::{AudioOutput, Player};

/// Prime the audio thread before the first frame: push the configured
/// volume and preload the first track paused, so Enter or space starts
/// playback immediately.
pub fn apply_playback_defaults<O: AudioOutput>(player: &mut Player<O>) {
    player.attach();
}
