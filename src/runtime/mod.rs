use std::sync::Arc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::catalogue;
use crate::player::{Player, RodioOutput};
use crate::recommend::GeminiClient;

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let tracks = catalogue::load();

    let agent = ureq::AgentBuilder::new()
        .timeout_connect(Duration::from_secs(settings.network.connect_timeout_secs))
        .timeout_read(Duration::from_secs(settings.network.read_timeout_secs))
        .build();
    let max_download_bytes = settings.network.max_download_mb * 1024 * 1024;
    let (output, audio_rx) = RodioOutput::spawn(agent, max_download_bytes);

    let mut player = Player::new(tracks.clone(), output, settings.playback.volume);
    let mut app = App::new(tracks);

    let gemini = GeminiClient::from_settings(&settings.recommend).map(Arc::new);

    startup::apply_playback_defaults(&mut player);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new();

        event_loop::run(
            &mut terminal,
            &settings,
            &mut app,
            &mut player,
            &audio_rx,
            gemini.as_ref(),
            &mut state,
        )
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
