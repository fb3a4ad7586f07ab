// UI constants shared across the filter widgets.

/// Upper widget bound of the issues count slider.
pub const ISSUES_SLIDER_MAX: u32 = 1000;

/// Upper widget bound of the pull request count slider.
pub const PULL_REQUESTS_SLIDER_MAX: u32 = 1000;

/// Upper widget bound of the stars slider.
pub const STARS_SLIDER_MAX: u32 = 10_000;

/// Upper widget bound of the label count slider.
pub const LABEL_COUNT_SLIDER_MAX: u32 = 100;

/// Default `max` of every numeric range piece of state. Deliberately larger
/// than any slider's widget bound: the default means "unbounded" and only
/// collapses into the widget bounds once the user drags a handle.
pub const RANGE_DEFAULT_MAX: u32 = 1_000_000;

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;
}

/// Shared widget geometry
pub mod widget {
    /// Border radius of widget containers
    pub const ROUNDING: f32 = 6.0;

    /// Height of a slider track
    pub const TRACK_HEIGHT: f32 = 8.0;

    /// Horizontal margin between a container edge and its slider track
    pub const TRACK_MARGIN_H: f32 = 16.0;

    /// Maximum height of a dropdown popup before it scrolls
    pub const POPUP_MAX_HEIGHT: f32 = 240.0;
}
