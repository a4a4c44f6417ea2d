//! Document-level attributes that follow the active language.
//!
//! A language change touches three surfaces: the root `dir` attribute, the
//! root `lang` attribute and the `ltr`/`rtl` body class pair. They are
//! computed together as a [`DocumentAttributes`] snapshot and handed to the
//! surface in one call, so a surface never holds a mix of old and new values.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::language::Direction;

/// Everything a surface needs to reflect one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentAttributes {
    pub dir: Direction,
    pub lang: String,
}

impl DocumentAttributes {
    pub fn new(lang: impl Into<String>, dir: Direction) -> Self {
        Self {
            dir,
            lang: lang.into(),
        }
    }

    /// Body class that must be present.
    pub fn body_class(&self) -> &'static str {
        self.dir.as_str()
    }

    /// Body class that must be absent.
    pub fn stale_body_class(&self) -> &'static str {
        self.dir.flipped().as_str()
    }
}

/// Something that mirrors language attributes, e.g. an HTML document.
pub trait DocumentSurface {
    fn apply(&mut self, attrs: &DocumentAttributes);
}

/// In-memory document used by the CLI and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    dir: Option<String>,
    lang: Option<String>,
    body_classes: BTreeSet<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The root `dir` attribute.
    pub fn dir(&self) -> Option<&str> {
        self.dir.as_deref()
    }

    /// The root `lang` attribute.
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    pub fn body_classes(&self) -> impl Iterator<Item = &str> {
        self.body_classes.iter().map(String::as_str)
    }

    /// Whether `dir`, `lang` and the body classes agree with each other.
    pub fn is_consistent(&self) -> bool {
        let Some(dir) = self.dir.as_deref() else {
            return self.lang.is_none()
                && !self.has_body_class("ltr")
                && !self.has_body_class("rtl");
        };
        let other = if dir == "rtl" { "ltr" } else { "rtl" };
        self.lang.is_some() && self.has_body_class(dir) && !self.has_body_class(other)
    }
}

impl DocumentSurface for Document {
    fn apply(&mut self, attrs: &DocumentAttributes) {
        self.dir = Some(attrs.dir.as_str().to_string());
        self.lang = Some(attrs.lang.clone());
        self.body_classes.remove(attrs.stale_body_class());
        self.body_classes.insert(attrs.body_class().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_document_is_consistent() {
        assert!(Document::new().is_consistent());
    }

    #[test]
    fn apply_sets_all_three_surfaces() {
        let mut doc = Document::new();
        doc.apply(&DocumentAttributes::new("ar", Direction::Rtl));

        assert_eq!(doc.dir(), Some("rtl"));
        assert_eq!(doc.lang(), Some("ar"));
        assert!(doc.has_body_class("rtl"));
        assert!(!doc.has_body_class("ltr"));
        assert!(doc.is_consistent());
    }

    #[test]
    fn switching_direction_swaps_body_class() {
        let mut doc = Document::new();
        doc.apply(&DocumentAttributes::new("ar", Direction::Rtl));
        doc.apply(&DocumentAttributes::new("en", Direction::Ltr));

        assert_eq!(doc.body_classes().collect::<Vec<_>>(), vec!["ltr"]);
        assert!(doc.is_consistent());
    }

    #[test]
    fn stray_class_is_inconsistent() {
        let mut doc = Document::new();
        doc.apply(&DocumentAttributes::new("en", Direction::Ltr));
        doc.body_classes.insert("rtl".to_string());
        assert!(!doc.is_consistent());
    }
}
