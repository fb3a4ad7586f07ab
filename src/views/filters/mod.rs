pub mod items;
pub mod render;
pub use render::FilterPanel;

/// Short uppercase caption a segmented selector shows for an enum variant.
pub trait SegmentLabel {
    fn segment_label(&self) -> &'static str;
}
