// Reusable components live here.

pub mod confirm_dialog;
pub mod error_banner;
pub mod loading_spinner;
pub mod pagination;
pub mod stats_card;
