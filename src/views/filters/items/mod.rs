pub mod date_input;
pub mod label_section;
pub mod languages_menu;
pub mod range_slider;
pub mod segmented_panel;
