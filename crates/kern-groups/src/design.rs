//! Design font model: the subset of an editable font source that carries
//! kerning group assignments.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{glyph_name::GlyphName, side::KerningAttr};

/// Kerning pairs keyed by kerning context id, then left key, then right key.
///
/// Only key identities are read here; values are carried along untouched.
pub type KerningTable = IndexMap<String, IndexMap<String, IndexMap<String, f64>>>;

/// Kerning group labels of a single glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_kerning_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_kerning_group: Option<String>,
}

impl Glyph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_left(mut self, label: &str) -> Self {
        self.left_kerning_group = Some(label.to_string());
        self
    }

    pub fn with_right(mut self, label: &str) -> Self {
        self.right_kerning_group = Some(label.to_string());
        self
    }

    /// Non-empty label stored in `attr`.
    pub fn kerning_group(&self, attr: KerningAttr) -> Option<&str> {
        let label = match attr {
            KerningAttr::LeftKerningGroup => self.left_kerning_group.as_deref(),
            KerningAttr::RightKerningGroup => self.right_kerning_group.as_deref(),
        };
        label.filter(|label| !label.is_empty())
    }

    pub fn set_kerning_group(&mut self, attr: KerningAttr, label: impl Into<String>) {
        let slot = match attr {
            KerningAttr::LeftKerningGroup => &mut self.left_kerning_group,
            KerningAttr::RightKerningGroup => &mut self.right_kerning_group,
        };
        *slot = Some(label.into());
    }
}

/// A master, possibly borrowing its kerning from another master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Master {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics_source: Option<String>,
}

impl Master {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), metrics_source: None }
    }

    pub fn with_metrics_source(mut self, id: &str) -> Self {
        self.metrics_source = Some(id.to_string());
        self
    }
}

/// A feature-code class; its members are the whitespace separated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphClass {
    pub name: String,
    #[serde(default)]
    pub code: String,
}

impl GlyphClass {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self { name: name.into(), code: code.into() }
    }

    /// Members listed in the code; an empty code yields no members.
    pub fn members(&self) -> Vec<GlyphName> {
        self.code.split_whitespace().map(GlyphName::from).collect()
    }
}

/// Ordered, opaque key-value store attached to the design font.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserData(IndexMap<String, Value>);

impl UserData {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The design font as seen by the group conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignFont {
    #[serde(default)]
    pub glyphs: IndexMap<GlyphName, Glyph>,
    #[serde(default)]
    pub masters: Vec<Master>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub kerning_rtl: KerningTable,
    #[serde(default)]
    pub classes: Vec<GlyphClass>,
    #[serde(default, skip_serializing_if = "UserData::is_empty")]
    pub user_data: UserData,
}

impl DesignFont {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glyph(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.get(name)
    }

    pub fn glyph_mut(&mut self, name: &str) -> Option<&mut Glyph> {
        self.glyphs.get_mut(name)
    }

    pub fn add_glyph(&mut self, name: impl Into<GlyphName>, glyph: Glyph) {
        self.glyphs.insert(name.into(), glyph);
    }

    /// Kerning context id of `master`: its metrics source when that master
    /// exists, its own id otherwise.
    pub fn kerning_id<'a>(&'a self, master: &'a Master) -> &'a str {
        master
            .metrics_source
            .as_deref()
            .filter(|source| self.masters.iter().any(|m| m.id == *source))
            .unwrap_or(&master.id)
    }
}
