//! Glyphs taking part in right-to-left kerning.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::{
    constants::{RTL_GROUP_MARKER, RTL_LEFT_MARKER, RTL_RIGHT_MARKER},
    design::DesignFont,
    error::{GroupsError, Result},
    glyph_name::GlyphName,
    side::KerningAttr,
};

/// Group labels referenced from the RTL table, split by the glyph attribute
/// they are matched against.
#[derive(Debug, Default)]
struct RtlGroupLabels {
    left: HashSet<String>,
    right: HashSet<String>,
}

impl RtlGroupLabels {
    fn labels(&self, attr: KerningAttr) -> &HashSet<String> {
        match attr {
            KerningAttr::LeftKerningGroup => &self.left,
            KerningAttr::RightKerningGroup => &self.right,
        }
    }

    fn labels_mut(&mut self, attr: KerningAttr) -> &mut HashSet<String> {
        match attr {
            KerningAttr::LeftKerningGroup => &mut self.left,
            KerningAttr::RightKerningGroup => &mut self.right,
        }
    }
}

/// Record one RTL kerning key.
///
/// Left keys reference groups with `@MMK_R_` and are matched against the
/// glyph's left kerning group; right keys use `@MMK_L_` and the right
/// kerning group.
fn mark_as_rtl(
    key: &str,
    attr: KerningAttr,
    glyphs: &mut HashSet<GlyphName>,
    groups: &mut RtlGroupLabels,
) -> Result<()> {
    let marker = match attr {
        KerningAttr::LeftKerningGroup => RTL_RIGHT_MARKER,
        KerningAttr::RightKerningGroup => RTL_LEFT_MARKER,
    };
    if let Some(label) = key.strip_prefix(marker) {
        groups.labels_mut(attr).insert(label.to_string());
    } else if key.starts_with(RTL_GROUP_MARKER) {
        return Err(GroupsError::MalformedRtlKey(key.to_string()));
    } else {
        glyphs.insert(GlyphName::new(key));
    }
    Ok(())
}

/// Names of all glyphs referenced from the font's RTL kerning, directly or
/// through one of their kerning groups.
///
/// Fails on a key that carries the group marker with the wrong side.
pub fn rtl_glyphs(font: &DesignFont) -> Result<HashSet<GlyphName>> {
    let mut glyphs = HashSet::new();
    if font.kerning_rtl.is_empty() {
        return Ok(glyphs);
    }

    let mut groups = RtlGroupLabels::default();
    let kerning_ids: IndexSet<&str> = font.masters.iter().map(|m| font.kerning_id(m)).collect();
    for kerning_id in kerning_ids {
        let Some(pairs) = font.kerning_rtl.get(kerning_id) else {
            continue;
        };
        for (first, subtable) in pairs {
            mark_as_rtl(first, KerningAttr::LeftKerningGroup, &mut glyphs, &mut groups)?;
            for second in subtable.keys() {
                mark_as_rtl(second, KerningAttr::RightKerningGroup, &mut glyphs, &mut groups)?;
            }
        }
    }

    for (name, glyph) in &font.glyphs {
        if glyphs.contains(name) {
            continue;
        }
        let in_rtl_group = [KerningAttr::LeftKerningGroup, KerningAttr::RightKerningGroup]
            .into_iter()
            .any(|attr| {
                glyph.kerning_group(attr).is_some_and(|label| groups.labels(attr).contains(label))
            });
        if in_rtl_group {
            glyphs.insert(name.clone());
        }
    }

    Ok(glyphs)
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::design::{Glyph, Master};

    fn font_with_rtl(pairs: &[(&str, &str)]) -> DesignFont {
        let mut font = DesignFont::new();
        font.masters = vec![Master::new("m01")];
        for (name, glyph) in [
            ("alef-ar", Glyph::new().with_left("alef").with_right("alef")),
            ("alef-ar.fina", Glyph::new().with_left("alef.fina").with_right("alef")),
            ("beh-ar", Glyph::new().with_left("beh").with_right("beh")),
            ("reh-ar", Glyph::new().with_left("reh").with_right("reh")),
            ("A", Glyph::new().with_left("A").with_right("A")),
        ] {
            font.add_glyph(name, glyph);
        }
        let mut table: IndexMap<String, IndexMap<String, f64>> = IndexMap::new();
        for (first, second) in pairs {
            table.entry(first.to_string()).or_default().insert(second.to_string(), -20.0);
        }
        font.kerning_rtl.insert("m01".to_string(), table);
        font
    }

    fn sorted(glyphs: HashSet<GlyphName>) -> Vec<String> {
        let mut names: Vec<String> = glyphs.into_iter().map(|g| g.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_no_rtl_kerning() {
        let mut font = font_with_rtl(&[]);
        font.kerning_rtl.clear();
        assert!(rtl_glyphs(&font).unwrap().is_empty());
    }

    #[test]
    fn test_direct_glyph_keys() {
        let font = font_with_rtl(&[("reh-ar", "beh-ar")]);
        assert_eq!(sorted(rtl_glyphs(&font).unwrap()), ["beh-ar", "reh-ar"]);
    }

    #[test]
    fn test_group_keys_expand_to_members() {
        // left key matches left groups, right key matches right groups
        let font = font_with_rtl(&[("@MMK_R_alef.fina", "@MMK_L_beh")]);
        assert_eq!(sorted(rtl_glyphs(&font).unwrap()), ["alef-ar.fina", "beh-ar"]);

        let font = font_with_rtl(&[("@MMK_R_reh", "@MMK_L_alef")]);
        assert_eq!(sorted(rtl_glyphs(&font).unwrap()), ["alef-ar", "alef-ar.fina", "reh-ar"]);
    }

    #[test]
    fn test_metrics_source_context() {
        let mut font = font_with_rtl(&[("reh-ar", "beh-ar")]);
        font.masters = vec![Master::new("m02").with_metrics_source("m01"), Master::new("m01")];
        assert_eq!(sorted(rtl_glyphs(&font).unwrap()), ["beh-ar", "reh-ar"]);

        font.masters = vec![Master::new("m02")];
        assert!(rtl_glyphs(&font).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_key_fails() {
        let font = font_with_rtl(&[("@MMK_L_alef", "beh-ar")]);
        let expected = GroupsError::MalformedRtlKey("@MMK_L_alef".to_string());
        assert_eq!(rtl_glyphs(&font), Err(expected));

        let font = font_with_rtl(&[("reh-ar", "@MMK_R_beh")]);
        assert!(rtl_glyphs(&font).is_err());
    }
}
