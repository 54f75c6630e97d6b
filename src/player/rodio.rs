//! Rodio-backed audio output.
//!
//! A dedicated thread owns the output stream and the current sink. Tracks
//! are fetched fully into memory before decoding; seeking rebuilds the
//! sink from the cached bytes with `skip_duration`.

use std::io::{Cursor, Read};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::types::{AudioCmd, AudioEvent, AudioOutput};

const TICK: Duration = Duration::from_millis(200);

/// Command-sending half of the audio thread.
pub struct RodioOutput {
    tx: Sender<AudioCmd>,
}

impl AudioOutput for RodioOutput {
    fn send(&self, cmd: AudioCmd) {
        let _ = self.tx.send(cmd);
    }
}

impl RodioOutput {
    /// Spawn the audio thread. Events for the state machine arrive on the
    /// returned receiver.
    pub fn spawn(agent: ureq::Agent, max_download_bytes: u64) -> (Self, Receiver<AudioEvent>) {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<AudioEvent>();

        thread::spawn(move || run_audio_thread(rx, event_tx, agent, max_download_bytes));

        (Self { tx }, event_rx)
    }
}

fn run_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<AudioEvent>,
    agent: ureq::Agent,
    max_download_bytes: u64,
) {
    let stream = match OutputStreamBuilder::open_default_stream() {
        Ok(stream) => {
            // rodio logs to stderr when OutputStream is dropped. That's useful in
            // debugging, but noisy for a TUI app.
            let mut stream = stream;
            stream.log_on_drop(false);
            stream
        }
        Err(e) => {
            let _ = events.send(AudioEvent::Rejected(format!("no audio output device: {e}")));
            return;
        }
    };

    let mut sink: Option<Sink> = None;
    // Bytes of the currently loaded track, kept around for seek rebuilds.
    let mut bytes: Option<Vec<u8>> = None;
    let mut paused = true;
    let mut volume: f32 = 1.0;

    // Track start time and accumulated elapsed when paused.
    let mut started_at: Option<Instant> = None;
    let mut accumulated = Duration::ZERO;

    loop {
        match rx.recv_timeout(TICK) {
            Ok(AudioCmd::Load { url, autoplay }) => {
                if let Some(s) = sink.take() {
                    s.stop();
                }
                bytes = None;
                started_at = None;
                accumulated = Duration::ZERO;
                paused = true;

                let body = match fetch(&agent, &url, max_download_bytes) {
                    Ok(body) => body,
                    Err(reason) => {
                        let _ = events.send(AudioEvent::Rejected(reason));
                        continue;
                    }
                };

                match build_sink(&stream, body.clone(), Duration::ZERO, volume) {
                    Ok((new_sink, total)) => {
                        if let Some(total) = total {
                            let _ = events.send(AudioEvent::Metadata(total));
                        }
                        if autoplay {
                            new_sink.play();
                            paused = false;
                            started_at = Some(Instant::now());
                        }
                        sink = Some(new_sink);
                        bytes = Some(body);
                        let _ = events.send(AudioEvent::Progress(Duration::ZERO));
                    }
                    Err(reason) => {
                        let _ = events.send(AudioEvent::Rejected(reason));
                    }
                }
            }
            Ok(AudioCmd::Play) => {
                if let Some(ref s) = sink {
                    if paused {
                        s.play();
                        paused = false;
                        started_at = Some(Instant::now());
                    }
                }
            }
            Ok(AudioCmd::Pause) => {
                if let Some(ref s) = sink {
                    if !paused {
                        s.pause();
                        paused = true;
                        if let Some(st) = started_at.take() {
                            accumulated += st.elapsed();
                        }
                    }
                }
            }
            Ok(AudioCmd::SetVolume(v)) => {
                volume = v.clamp(0.0, 1.0);
                if let Some(ref s) = sink {
                    s.set_volume(volume);
                }
            }
            Ok(AudioCmd::SeekTo(pos)) => {
                let Some(body) = bytes.clone() else {
                    continue;
                };
                if let Some(s) = sink.take() {
                    s.stop();
                }
                match build_sink(&stream, body, pos, volume) {
                    Ok((new_sink, _)) => {
                        if paused {
                            started_at = None;
                        } else {
                            new_sink.play();
                            started_at = Some(Instant::now());
                        }
                        accumulated = pos;
                        sink = Some(new_sink);
                        let _ = events.send(AudioEvent::Progress(pos));
                    }
                    Err(reason) => {
                        paused = true;
                        let _ = events.send(AudioEvent::Rejected(reason));
                    }
                }
            }
            Ok(AudioCmd::Quit) => {
                if let Some(ref s) = sink {
                    s.stop();
                }
                break;
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Some(ref s) = sink {
                    if !paused {
                        if s.empty() {
                            // Natural end of the track; the state machine
                            // decides what plays next.
                            sink = None;
                            bytes = None;
                            paused = true;
                            started_at = None;
                            accumulated = Duration::ZERO;
                            let _ = events.send(AudioEvent::Ended);
                        } else {
                            let elapsed = accumulated
                                + started_at.map_or(Duration::ZERO, |st| st.elapsed());
                            let _ = events.send(AudioEvent::Progress(elapsed));
                        }
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Download the whole media body, bounded by `max_bytes`.
fn fetch(agent: &ureq::Agent, url: &str, max_bytes: u64) -> Result<Vec<u8>, String> {
    let response = agent
        .get(url)
        .call()
        .map_err(|e| format!("fetch {url}: {e}"))?;

    let mut body = Vec::new();
    response
        .into_reader()
        .take(max_bytes)
        .read_to_end(&mut body)
        .map_err(|e| format!("read {url}: {e}"))?;

    if body.is_empty() {
        return Err(format!("empty media body from {url}"));
    }
    Ok(body)
}

/// Decode `body` and prepare a paused sink starting at `start_at`.
fn build_sink(
    stream: &OutputStream,
    body: Vec<u8>,
    start_at: Duration,
    volume: f32,
) -> Result<(Sink, Option<Duration>), String> {
    let decoder = Decoder::new(Cursor::new(body)).map_err(|e| format!("decode failed: {e}"))?;
    let total = decoder.total_duration();
    let source = decoder.skip_duration(start_at);

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok((sink, total))
}
