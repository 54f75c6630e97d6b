//! Catalogue module: the fixed song list and the filter engine.
//!
//! The catalogue is built once at startup from static literals and is
//! never mutated afterwards; everything else in the app refers to tracks
//! by their index into this list.

mod data;
mod filter;
mod model;

pub use data::load;
pub use filter::{filter_indices, section_indices};
pub use model::*;
