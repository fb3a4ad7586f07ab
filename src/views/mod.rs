pub mod filters;
pub mod ui_helpers;
