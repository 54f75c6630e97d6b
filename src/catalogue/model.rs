//! Track record and the category/section enums.

use std::fmt;

/// A single song's metadata and media reference. Immutable for the whole
/// session; identified by a stable `id`.
#[derive(Clone, Debug)]
pub struct Track {
    pub id: &'static str,
    pub title: &'static str,
    pub movie: &'static str,
    pub artist: &'static str,
    pub music_director: &'static str,
    pub year: u16,
    pub category: Category,
    pub section: Section,
    pub image_url: &'static str,
    pub audio_url: &'static str,
    /// Display duration as tagged on the record, `MM:SS`.
    pub duration: &'static str,
}

/// Musical mood/genre tag used for filtering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Category {
    Melody,
    Mass,
    Love,
    Folk,
    Devotional,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Melody,
        Category::Mass,
        Category::Love,
        Category::Folk,
        Category::Devotional,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Melody => "Melody",
            Category::Mass => "Mass",
            Category::Love => "Love",
            Category::Folk => "Folk",
            Category::Devotional => "Devotional",
        };
        f.write_str(s)
    }
}

/// The category constraint applied by the filter engine. View-selection
/// state only, never persisted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Cycle `All -> Melody -> ... -> Devotional -> All`, the order the
    /// category chips are shown in.
    pub fn cycled(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[0]),
            CategoryFilter::Only(c) => {
                let pos = Category::ALL.iter().position(|&x| x == c).unwrap_or(0);
                match Category::ALL.get(pos + 1) {
                    Some(&next) => CategoryFilter::Only(next),
                    None => CategoryFilter::All,
                }
            }
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(c) => c.fmt(f),
        }
    }
}

/// Editorial grouping used by the home screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Latest,
    Trending,
    Classic,
    MovieWise,
}

impl Section {
    /// Fixed display order of the home-screen sections.
    pub const DISPLAY_ORDER: [Section; 4] = [
        Section::Latest,
        Section::Trending,
        Section::Classic,
        Section::MovieWise,
    ];

    /// Heading shown above the section on the home screen.
    pub fn title(self) -> &'static str {
        match self {
            Section::Latest => "Latest Hits",
            Section::Trending => "Trending Now",
            Section::Classic => "Evergreen Classics",
            Section::MovieWise => "Movie Specials",
        }
    }
}
