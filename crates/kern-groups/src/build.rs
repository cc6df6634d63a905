//! Build font model: named, ordered glyph groups of one build source.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::glyph_name::GlyphName;

/// Group name to ordered member list.
pub type Groups = IndexMap<String, Vec<GlyphName>>;

/// One build font instance produced from a design font.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildFont {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_name: Option<String>,
    #[serde(default)]
    pub groups: Groups,
}

impl BuildFont {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_style_name(mut self, name: &str) -> Self {
        self.style_name = Some(name.to_string());
        self
    }

    /// Add a group from any iterable of glyph names.
    pub fn with_group(
        mut self,
        name: &str,
        glyphs: impl IntoIterator<Item = impl Into<GlyphName>>,
    ) -> Self {
        self.groups.insert(name.to_string(), glyphs.into_iter().map(Into::into).collect());
        self
    }

    /// Identify this font in log messages: file name, then style name.
    pub fn logging_ref(&self) -> String {
        self.path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .or_else(|| self.style_name.clone())
            .unwrap_or_else(|| "<unnamed>".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_ref_prefers_file_name() {
        let font = BuildFont::new().with_path("/tmp/masters/Font-Bold.ufo").with_style_name("Bold");
        assert_eq!(font.logging_ref(), "Font-Bold.ufo");
    }

    #[test]
    fn test_logging_ref_falls_back_to_style_name() {
        assert_eq!(BuildFont::new().with_style_name("Light").logging_ref(), "Light");
        assert_eq!(BuildFont::new().logging_ref(), "<unnamed>");
    }

    #[test]
    fn test_groups_keep_insertion_order() {
        let font = BuildFont::new()
            .with_group("public.kern1.O", ["O", "D"])
            .with_group("public.kern1.H", ["H"]);
        let names: Vec<&str> = font.groups.keys().map(String::as_str).collect();
        assert_eq!(names, ["public.kern1.O", "public.kern1.H"]);
        assert_eq!(font.groups["public.kern1.O"], ["O", "D"]);
    }
}
