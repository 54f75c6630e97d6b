//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the catalogue, the
//! current screen, filter state and the mood-search panel state.

mod model;

pub use model::*;
