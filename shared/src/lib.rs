//! Domain model and view-state logic for the ema admin console.
//!
//! Everything here is plain Rust with no browser dependency, so the record
//! model, view derivation, and selection semantics are testable natively
//! while the `frontend` crate stays a thin Yew layer on top.

pub mod ema;
pub mod error;
pub mod selection;
pub mod view;

pub use ema::{CharacterRef, EmaRecord};
pub use error::AdminError;
pub use selection::Selection;
pub use view::{filter_and_sort, parse_likes, BoardStats, EmaDraft, EmaSort};
