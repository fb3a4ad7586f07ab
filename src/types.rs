use serde::Serialize;

use crate::views::filters::SegmentLabel;

/// How a date filter constrains its field: a single anchor date ("in",
/// "before", "after") or a closed interval ("between").
#[derive(
    strum::EnumCount, strum::EnumIter, PartialEq, Eq, Clone, Copy, Default, Debug, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DateMode {
    #[default]
    In,
    Before,
    After,
    Between,
}

impl SegmentLabel for DateMode {
    fn segment_label(&self) -> &'static str {
        use DateMode::*;
        match self {
            In => "IN",
            Before => "BEFORE",
            After => "AFTER",
            Between => "BETWEEN",
        }
    }
}

/// Closed enumeration of languages the multi-select can offer.
/// The picker cannot produce values outside this list.
#[derive(
    strum::EnumCount,
    strum::EnumIter,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
    Serialize,
)]
pub enum Language {
    JavaScript,
    Python,
    Java,
    #[serde(rename = "C++")]
    Cpp,
    Ruby,
    Go,
    TypeScript,
    #[serde(rename = "PHP")]
    Php,
    #[serde(rename = "C#")]
    CSharp,
    Swift,
    Rust,
    Kotlin,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        use Language::*;
        match self {
            JavaScript => "JavaScript",
            Python => "Python",
            Java => "Java",
            Cpp => "C++",
            Ruby => "Ruby",
            Go => "Go",
            TypeScript => "TypeScript",
            Php => "PHP",
            CSharp => "C#",
            Swift => "Swift",
            Rust => "Rust",
            Kotlin => "Kotlin",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn language_enumeration_is_closed() {
        assert_eq!(Language::COUNT, 12);
        let names: Vec<&str> = Language::iter().map(|l| l.display_name()).collect();
        assert!(names.contains(&"C++"));
        assert!(names.contains(&"C#"));
        assert!(names.contains(&"Rust"));
    }

    #[test]
    fn date_mode_defaults_to_in() {
        assert_eq!(DateMode::default(), DateMode::In);
        assert_eq!(DateMode::default().segment_label(), "IN");
    }

    #[test]
    fn serde_names_match_wire_format() {
        assert_eq!(serde_json::to_string(&DateMode::Between).unwrap(), "\"between\"");
        assert_eq!(serde_json::to_string(&Language::Cpp).unwrap(), "\"C++\"");
        assert_eq!(serde_json::to_string(&Language::CSharp).unwrap(), "\"C#\"");
    }
}
