use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Screen};
use crate::config;
use crate::player::{AudioEvent, Player, RodioOutput, SkipDirection};
use crate::recommend::{GeminiClient, RecommendError, Recommendation, recommend};
use crate::ui;

type MoodOutcome = Result<Vec<Recommendation>, RecommendError>;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// Receiver for the in-flight mood request, if any. At most one
    /// request runs at a time; further submissions are ignored until the
    /// worker replies.
    mood_rx: Option<Receiver<MoodOutcome>>,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self {
            pending_gg: false,
            mood_rx: None,
        }
    }
}

/// Main terminal event loop: handles input, UI drawing, and sync with the
/// audio and mood worker threads. Returns `Ok(())` when shutdown is
/// requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &mut Player<RodioOutput>,
    audio_rx: &Receiver<AudioEvent>,
    gemini: Option<&Arc<GeminiClient>>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Drain playback progress, metadata, end-of-track and rejection
        // events from the audio thread.
        while let Ok(ev) = audio_rx.try_recv() {
            player.handle_event(ev);
        }

        // Collect the mood worker's reply, if one is pending.
        if let Some(rx) = state.mood_rx.as_ref() {
            match rx.try_recv() {
                Ok(outcome) => {
                    app.finish_mood_request(outcome);
                    state.mood_rx = None;
                }
                Err(TryRecvError::Disconnected) => {
                    app.finish_mood_request(Err(RecommendError::Http(
                        "recommendation worker exited".to_string(),
                    )));
                    state.mood_rx = None;
                }
                Err(TryRecvError::Empty) => {}
            }
        }

        terminal.draw(|f| ui::draw(f, app, player, &settings.ui, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, player, gemini, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Handle one key press. Returns `true` when the app should quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &mut Player<RodioOutput>,
    gemini: Option<&Arc<GeminiClient>>,
    state: &mut EventLoopState,
) -> bool {
    if app.search_mode {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc => app.exit_search_mode(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Enter => {
                // Keep the query applied and go select from the results.
                app.exit_search_mode();
            }
            KeyCode::Char(c) if !c.is_control() => app.push_search_char(c),
            _ => {}
        }
        return false;
    }

    if app.prompt_mode {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc => app.exit_prompt_mode(),
            KeyCode::Backspace => app.pop_prompt_char(),
            KeyCode::Enter => {
                app.exit_prompt_mode();
                submit_mood(app, gemini, state);
            }
            KeyCode::Char(c) if !c.is_control() => app.push_prompt_char(c),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => {
            state.pending_gg = false;
            player.shutdown();
            return true;
        }
        KeyCode::Tab => {
            state.pending_gg = false;
            app.toggle_screen();
        }
        _ => match app.screen {
            Screen::Browse => handle_browse_key(key, settings, app, player, state),
            Screen::Mood => handle_mood_key(key, app, gemini, state),
        },
    }

    false
}

fn handle_browse_key(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &mut Player<RodioOutput>,
    state: &mut EventLoopState,
) {
    match key.code {
        KeyCode::Char('/') => {
            state.pending_gg = false;
            app.enter_search_mode();
        }
        KeyCode::Char('c') => {
            state.pending_gg = false;
            app.cycle_category();
        }
        KeyCode::Esc => {
            state.pending_gg = false;
            app.clear_filters();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            app.select_next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            app.select_prev();
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.select_first_visible();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            app.select_last_visible();
        }
        KeyCode::Enter => {
            state.pending_gg = false;
            if app.has_tracks() {
                player.select(app.selected);
            }
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            state.pending_gg = false;
            player.toggle();
        }
        KeyCode::Char('l') => {
            state.pending_gg = false;
            player.skip(SkipDirection::Next);
            app.set_selected(player.current_index());
        }
        KeyCode::Char('h') => {
            state.pending_gg = false;
            player.skip(SkipDirection::Prev);
            app.set_selected(player.current_index());
        }
        KeyCode::Char('.') => {
            state.pending_gg = false;
            player.seek_by_fraction(f64::from(settings.controls.seek_percent) / 100.0);
        }
        KeyCode::Char(',') => {
            state.pending_gg = false;
            player.seek_by_fraction(-f64::from(settings.controls.seek_percent) / 100.0);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            state.pending_gg = false;
            player.change_volume(i32::from(settings.controls.volume_step));
        }
        KeyCode::Char('-') => {
            state.pending_gg = false;
            player.change_volume(-i32::from(settings.controls.volume_step));
        }
        KeyCode::Char(_) => {
            // g pending should clear on any other printable char
            state.pending_gg = false;
        }
        _ => {}
    }
}

fn handle_mood_key(
    key: KeyEvent,
    app: &mut App,
    gemini: Option<&Arc<GeminiClient>>,
    state: &mut EventLoopState,
) {
    match key.code {
        KeyCode::Char('i') | KeyCode::Char('/') => app.enter_prompt_mode(),
        KeyCode::Enter => submit_mood(app, gemini, state),
        _ => {}
    }
}

/// Kick off a mood request on a worker thread. Empty prompts and
/// resubmissions while a request is in flight are ignored; a missing
/// credential surfaces as a notice without any network call.
fn submit_mood(app: &mut App, gemini: Option<&Arc<GeminiClient>>, state: &mut EventLoopState) {
    if app.mood_loading || app.mood_prompt.trim().is_empty() {
        return;
    }
    let Some(client) = gemini else {
        app.finish_mood_request(Err(RecommendError::MissingKey));
        return;
    };

    let client = Arc::clone(client);
    let prompt = app.mood_prompt.clone();
    let (tx, rx) = mpsc::channel::<MoodOutcome>();
    thread::spawn(move || {
        let _ = tx.send(recommend(client.as_ref(), &prompt));
    });

    state.mood_rx = Some(rx);
    app.begin_mood_request();
}
