//! Application model types: `App`, `Screen` and `BrowseView`.

use crate::catalogue::{CategoryFilter, Track, filter_indices};
use crate::recommend::{Recommendation, RecommendError};

/// Which screen the UI is on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Browse,
    Mood,
}

/// How the browse screen renders: sectioned home view while no filter is
/// active, flat grid once a query or category narrows the list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BrowseView {
    Sections,
    Grid,
}

/// The main application model. Owned by the runtime and passed by
/// reference to the renderer; there is no global state.
pub struct App {
    pub tracks: Vec<Track>,
    pub screen: Screen,
    /// Cursor position as a catalogue index.
    pub selected: usize,

    pub search_mode: bool,
    pub search_query: String,
    pub category: CategoryFilter,

    pub prompt_mode: bool,
    pub mood_prompt: String,
    pub mood_loading: bool,
    pub mood_results: Vec<Recommendation>,

    /// One-line diagnostic surfaced in the status bar.
    pub notice: Option<String>,
}

impl App {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            screen: Screen::Browse,
            selected: 0,
            search_mode: false,
            search_query: String::new(),
            category: CategoryFilter::All,
            prompt_mode: false,
            mood_prompt: String::new(),
            mood_loading: false,
            mood_results: Vec::new(),
            notice: None,
        }
    }

    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Catalogue indices currently visible on the browse screen, in
    /// catalogue order.
    pub fn visible(&self) -> Vec<usize> {
        filter_indices(&self.tracks, &self.search_query, self.category)
    }

    /// True once a query or category narrows the list.
    pub fn is_filtered(&self) -> bool {
        !self.search_query.trim().is_empty() || self.category != CategoryFilter::All
    }

    pub fn browse_view(&self) -> BrowseView {
        if self.is_filtered() {
            BrowseView::Grid
        } else {
            BrowseView::Sections
        }
    }

    pub fn toggle_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Browse => Screen::Mood,
            Screen::Mood => Screen::Browse,
        };
        self.search_mode = false;
        self.prompt_mode = false;
    }

    // --- browse filter editing ---

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.ensure_selected_visible();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.ensure_selected_visible();
    }

    /// Drop both the query and the category constraint.
    pub fn clear_filters(&mut self) {
        self.search_query.clear();
        self.search_mode = false;
        self.category = CategoryFilter::All;
        self.ensure_selected_visible();
    }

    pub fn cycle_category(&mut self) {
        self.category = self.category.cycled();
        self.ensure_selected_visible();
    }

    // --- selection movement ---

    pub fn set_selected(&mut self, idx: usize) {
        if idx < self.tracks.len() {
            self.selected = idx;
        }
        self.ensure_selected_visible();
    }

    /// Move the cursor to the next visible track, wrapping at the end.
    pub fn select_next(&mut self) {
        let visible = self.visible();
        if visible.is_empty() {
            return;
        }
        self.selected = match visible.iter().position(|&i| i == self.selected) {
            Some(p) => visible[(p + 1) % visible.len()],
            None => visible[0],
        };
    }

    /// Move the cursor to the previous visible track, wrapping at the top.
    pub fn select_prev(&mut self) {
        let visible = self.visible();
        if visible.is_empty() {
            return;
        }
        self.selected = match visible.iter().position(|&i| i == self.selected) {
            Some(0) | None => visible[visible.len() - 1],
            Some(p) => visible[p - 1],
        };
    }

    pub fn select_first_visible(&mut self) {
        if let Some(&first) = self.visible().first() {
            self.selected = first;
        }
    }

    pub fn select_last_visible(&mut self) {
        if let Some(&last) = self.visible().last() {
            self.selected = last;
        }
    }

    /// Keep the cursor on a visible track after the filter changed.
    fn ensure_selected_visible(&mut self) {
        let visible = self.visible();
        if visible.is_empty() {
            self.selected = 0;
            return;
        }
        if !visible.contains(&self.selected) {
            self.selected = visible[0];
        }
    }

    // --- mood panel ---

    pub fn enter_prompt_mode(&mut self) {
        self.prompt_mode = true;
    }

    pub fn exit_prompt_mode(&mut self) {
        self.prompt_mode = false;
    }

    pub fn push_prompt_char(&mut self, c: char) {
        self.mood_prompt.push(c);
    }

    pub fn pop_prompt_char(&mut self) {
        self.mood_prompt.pop();
    }

    /// Mark a request as in flight; further submissions are ignored until
    /// `finish_mood_request` runs.
    pub fn begin_mood_request(&mut self) {
        self.mood_loading = true;
        self.notice = None;
    }

    /// Apply the outcome of a recommendation request. Failures surface as
    /// an empty result set plus a status notice, never as a crash.
    pub fn finish_mood_request(&mut self, outcome: Result<Vec<Recommendation>, RecommendError>) {
        self.mood_loading = false;
        match outcome {
            Ok(results) => {
                self.mood_results = results;
            }
            Err(e) => {
                self.mood_results = Vec::new();
                self.notice = Some(format!("mood search: {e}"));
            }
        }
    }
}
