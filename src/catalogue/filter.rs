//! Pure filtering over the catalogue.
//!
//! Both functions return track indices in catalogue order (stable filter,
//! no re-sorting) and have no side effects, so they are safe to call on
//! every redraw.

use super::model::{CategoryFilter, Section, Track};

/// Indices of tracks matching `query` and `category`.
///
/// The trimmed query matches case-insensitively as a substring against
/// title, movie or artist; an empty query matches everything. The category
/// constraint must hold as well.
pub fn filter_indices(tracks: &[Track], query: &str, category: CategoryFilter) -> Vec<usize> {
    let query = query.trim().to_lowercase();
    tracks
        .iter()
        .enumerate()
        .filter(|(_, t)| category.matches(t.category))
        .filter(|(_, t)| {
            query.is_empty()
                || t.title.to_lowercase().contains(&query)
                || t.movie.to_lowercase().contains(&query)
                || t.artist.to_lowercase().contains(&query)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Indices of tracks belonging to `section`, in catalogue order.
pub fn section_indices(tracks: &[Track], section: Section) -> Vec<usize> {
    tracks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.section == section)
        .map(|(i, _)| i)
        .collect()
}
