use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::*;
use crate::catalogue::{self, Track};

#[derive(Clone, Default)]
struct RecordingOutput {
    sent: Rc<RefCell<Vec<AudioCmd>>>,
}

impl AudioOutput for RecordingOutput {
    fn send(&self, cmd: AudioCmd) {
        self.sent.borrow_mut().push(cmd);
    }
}

impl RecordingOutput {
    fn take(&self) -> Vec<AudioCmd> {
        std::mem::take(&mut *self.sent.borrow_mut())
    }
}

fn three_tracks() -> Vec<Track> {
    catalogue::load().into_iter().take(3).collect()
}

fn player() -> (Player<RecordingOutput>, RecordingOutput) {
    let out = RecordingOutput::default();
    (Player::new(three_tracks(), out.clone(), 70), out)
}

#[test]
fn attach_preloads_first_track_paused() {
    let (mut p, out) = player();
    p.attach();

    let sent = out.take();
    assert_eq!(sent[0], AudioCmd::SetVolume(0.7));
    assert!(matches!(
        &sent[1],
        AudioCmd::Load { autoplay: false, .. }
    ));
    assert_eq!(p.current_index(), 0);
    assert!(!p.is_playing());
}

#[test]
fn selecting_the_same_track_twice_toggles_back() {
    let (mut p, _out) = player();
    p.attach();
    let before = p.is_playing();

    p.select(0);
    assert_eq!(p.is_playing(), !before);
    p.select(0);
    assert_eq!(p.is_playing(), before);
    assert_eq!(p.current_index(), 0);
}

#[test]
fn selecting_a_different_track_loads_it_with_autoplay() {
    let (mut p, out) = player();
    p.attach();
    p.handle_event(AudioEvent::Metadata(Duration::from_secs(100)));
    out.take();

    p.select(2);
    assert_eq!(p.current_index(), 2);
    assert!(p.is_playing());
    // Duration resets to unknown for the new load.
    assert_eq!(p.duration(), None);
    assert_eq!(p.position(), Duration::ZERO);

    let sent = out.take();
    assert_eq!(sent.len(), 1);
    match &sent[0] {
        AudioCmd::Load { url, autoplay } => {
            assert!(*autoplay);
            assert_eq!(*url, three_tracks()[2].audio_url.to_string());
        }
        other => panic!("expected Load, got {other:?}"),
    }
}

#[test]
fn toggle_flips_playing_and_sends_play_pause() {
    let (mut p, out) = player();
    p.attach();
    out.take();

    p.toggle();
    assert!(p.is_playing());
    assert_eq!(out.take(), vec![AudioCmd::Play]);

    p.toggle();
    assert!(!p.is_playing());
    assert_eq!(out.take(), vec![AudioCmd::Pause]);
}

#[test]
fn skip_wraps_at_both_ends() {
    let (mut p, _out) = player();
    p.attach();

    p.skip(SkipDirection::Prev);
    assert_eq!(p.current_index(), 2);
    assert!(p.is_playing());

    p.skip(SkipDirection::Next);
    assert_eq!(p.current_index(), 0);
    assert!(p.is_playing());
}

#[test]
fn volume_is_clamped_into_0_100() {
    let (mut p, out) = player();
    p.attach();
    out.take();

    p.set_volume(-5);
    assert_eq!(p.volume(), 0);
    assert_eq!(out.take(), vec![AudioCmd::SetVolume(0.0)]);

    p.set_volume(500);
    assert_eq!(p.volume(), 100);
    assert_eq!(out.take(), vec![AudioCmd::SetVolume(1.0)]);
}

#[test]
fn seek_is_a_no_op_while_duration_is_unknown() {
    let (mut p, out) = player();
    p.attach();
    out.take();

    p.seek(0.5);
    assert_eq!(p.position(), Duration::ZERO);
    assert!(out.take().is_empty());
}

#[test]
fn seek_targets_a_fraction_of_the_known_duration() {
    let (mut p, out) = player();
    p.attach();
    p.handle_event(AudioEvent::Metadata(Duration::from_secs(200)));
    out.take();

    p.seek(0.25);
    assert_eq!(p.position(), Duration::from_secs(50));
    assert_eq!(out.take(), vec![AudioCmd::SeekTo(Duration::from_secs(50))]);

    // Out-of-range fractions are clamped, not rejected.
    p.seek(1.5);
    assert_eq!(p.position(), Duration::from_secs(200));
}

#[test]
fn progress_is_clamped_to_the_known_duration() {
    let (mut p, _out) = player();
    p.attach();
    p.handle_event(AudioEvent::Metadata(Duration::from_secs(10)));
    p.handle_event(AudioEvent::Progress(Duration::from_secs(14)));
    assert_eq!(p.position(), Duration::from_secs(10));
    assert_eq!(p.progress_fraction(), 1.0);
}

#[test]
fn end_of_media_auto_advances_with_wraparound() {
    let (mut p, _out) = player();
    p.attach();

    // Catalogue [A, B, C]: skip to B, let B end, then skip past C wraps to A.
    p.skip(SkipDirection::Next);
    assert_eq!(p.current_index(), 1);
    assert!(p.is_playing());

    p.handle_event(AudioEvent::Ended);
    assert_eq!(p.current_index(), 2);
    assert!(p.is_playing());

    p.skip(SkipDirection::Next);
    assert_eq!(p.current_index(), 0);
    assert!(p.is_playing());
}

#[test]
fn rejection_downgrades_to_paused_without_error() {
    let (mut p, _out) = player();
    p.attach();
    p.select(1);
    assert!(p.is_playing());

    p.handle_event(AudioEvent::Rejected("autoplay refused".into()));
    assert!(!p.is_playing());
    assert_eq!(p.current_index(), 1);
    assert_eq!(p.rejection(), Some("autoplay refused"));

    // The notice clears on the next load.
    p.select(2);
    assert_eq!(p.rejection(), None);
}
