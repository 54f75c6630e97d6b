//! UI rendering helpers for the terminal user interface.
//!
//! `draw` is a pure function from the current `App` + `Player` snapshot to
//! a rendered frame; the runtime calls it on every loop iteration.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, BrowseView, Screen};
use crate::catalogue::Section;
use crate::config::{ControlsSettings, UiSettings};
use crate::player::{AudioOutput, Player};

/// One renderable line of the browse list: a section heading or a track
/// row carrying its catalogue index.
enum Row {
    Heading(&'static str),
    Track(usize),
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn controls_text(app: &App, controls: &ControlsSettings) -> String {
    if app.search_mode {
        return "[type] search | [esc] close search | [enter] keep & browse".to_string();
    }
    if app.prompt_mode {
        return "[type] describe a mood | [enter] ask | [esc] back".to_string();
    }
    match app.screen {
        Screen::Browse => format!(
            "[j/k] move | [enter] play/pause | [h/l] prev/next | [,/.] scrub {}% | \
             [-/+] volume {} | [/] search | [c] category | [esc] clear | [tab] mood finder | [q] quit",
            controls.seek_percent, controls.volume_step
        ),
        Screen::Mood => {
            "[i] edit prompt | [enter] ask again | [tab] browse | [q] quit".to_string()
        }
    }
}

/// Compose the browse rows: sectioned when unfiltered, a flat grid once a
/// query or category is active.
fn browse_rows(app: &App) -> Vec<Row> {
    match app.browse_view() {
        BrowseView::Sections => {
            let mut rows = Vec::new();
            for section in Section::DISPLAY_ORDER {
                let indices = crate::catalogue::section_indices(&app.tracks, section);
                if indices.is_empty() {
                    continue;
                }
                rows.push(Row::Heading(section.title()));
                rows.extend(indices.into_iter().map(Row::Track));
            }
            rows
        }
        BrowseView::Grid => app.visible().into_iter().map(Row::Track).collect(),
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw<O: AudioOutput>(
    frame: &mut Frame,
    app: &App,
    player: &Player<O>,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" isaitamil ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    match app.screen {
        Screen::Browse => draw_browse(frame, app, player, chunks[1]),
        Screen::Mood => draw_mood(frame, app, chunks[1]),
    }

    draw_player_bar(frame, app, player, ui_settings, chunks[2]);

    let footer = Paragraph::new(controls_text(app, controls_settings))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

fn track_line(app: &App, idx: usize, now_playing: bool) -> String {
    let t = &app.tracks[idx];
    let marker = if now_playing { "♪ " } else { "  " };
    format!(
        "{marker}{} — {} ({}) [{}] {}",
        t.title, t.movie, t.year, t.category, t.duration
    )
}

fn draw_browse<O: AudioOutput>(frame: &mut Frame, app: &App, player: &Player<O>, area: Rect) {
    let rows = browse_rows(app);
    let playing_idx = player.current_index();

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match row {
            Row::Heading(title) => ListItem::new(format!("━ {title}"))
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Row::Track(i) => ListItem::new(track_line(app, *i, *i == playing_idx)),
        })
        .collect();

    let title = match app.browse_view() {
        BrowseView::Sections => " home ".to_string(),
        BrowseView::Grid => format!(
            " results: \"{}\" in {} ",
            app.search_query.trim(),
            app.category
        ),
    };

    let selected_pos = rows.iter().position(|row| match row {
        Row::Track(i) => *i == app.selected,
        Row::Heading(_) => false,
    });

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    state.select(selected_pos);
    frame.render_stateful_widget(list, area, &mut state);

    if app.search_mode {
        let hint = Paragraph::new(format!("search: {}_", app.search_query)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" search songs, movies, or artists "),
        );
        let input_area = bottom_line(area);
        frame.render_widget(Clear, input_area);
        frame.render_widget(hint, input_area);
    }
}

fn draw_mood(frame: &mut Frame, app: &App, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let prompt_text = if app.prompt_mode {
        format!("{}_", app.mood_prompt)
    } else if app.mood_prompt.is_empty() {
        "e.g. 'I'm traveling at night through a rainy highway'".to_string()
    } else {
        app.mood_prompt.clone()
    };
    let prompt = Paragraph::new(prompt_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" tell us your mood "),
    );
    frame.render_widget(prompt, parts[0]);

    let body: Vec<ListItem> = if app.mood_loading {
        vec![ListItem::new("Thinking...")]
    } else if app.mood_results.is_empty() {
        vec![ListItem::new(
            "No suggestions yet. Describe a mood, a situation, or a feeling.",
        )]
    } else {
        app.mood_results
            .iter()
            .enumerate()
            .flat_map(|(n, rec)| {
                [
                    ListItem::new(format!("{}. {} — {}", n + 1, rec.song, rec.movie))
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    ListItem::new(format!("   \"{}\"", rec.reason)),
                ]
            })
            .collect()
    };

    let results = List::new(body).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" ai mood finder "),
    );
    frame.render_widget(results, parts[1]);
}

fn draw_player_bar<O: AudioOutput>(
    frame: &mut Frame,
    app: &App,
    player: &Player<O>,
    ui_settings: &UiSettings,
    area: Rect,
) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3)])
        .split(area);

    let mut line = match player.current_track() {
        Some(t) => {
            let state = if player.is_playing() {
                "Playing"
            } else {
                "Paused"
            };
            let total = player
                .duration()
                .map(format_mmss)
                .unwrap_or_else(|| t.duration.to_string());
            format!(
                " {state}: {} — {} [{}{}{}] vol {}%",
                t.title,
                t.movie,
                format_mmss(player.position()),
                ui_settings.time_separator,
                total,
                player.volume()
            )
        }
        None => " Nothing loaded".to_string(),
    };
    if let Some(notice) = app.notice.as_deref().or(player.rejection()) {
        line.push_str(" • ");
        line.push_str(notice);
    }
    frame.render_widget(Paragraph::new(line), parts[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" now playing "))
        .ratio(player.progress_fraction())
        .label(format_mmss(player.position()));
    frame.render_widget(gauge, parts[1]);
}

/// A one-row input strip pinned to the bottom of `area`.
fn bottom_line(area: Rect) -> Rect {
    let height = 3.min(area.height);
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height),
        width: area.width,
        height,
    }
}
