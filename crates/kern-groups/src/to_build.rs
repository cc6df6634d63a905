//! Design font to build font: assemble one group table from glyph
//! attributes, RTL kerning and stored round-trip metadata.

use std::collections::HashSet;

use log::debug;
use serde_json::Value;

use crate::{
    build::{BuildFont, Groups},
    constants::{GROUPS_NOT_IN_FEATURE_KEY, ORIGINAL_KERNING_GROUPS_KEY},
    design::DesignFont,
    error::Result,
    glyph_name::GlyphName,
    rtl::rtl_glyphs,
    side::{KerningAttr, KerningSide, parse_kerning_group},
};

/// Build the group table shared by every build font of `font`.
///
/// Stored round-trip groups come first in their recorded order, then
/// memberships read from glyph attributes. RTL glyphs read the opposite
/// attribute for each side.
pub fn build_groups(font: &DesignFont) -> Result<Groups> {
    let rtl = rtl_glyphs(font)?;

    let mut groups = Groups::new();
    seed_plain_classes(font, &mut groups);
    let recovered = replay_original_groups(font, &mut groups);

    for (name, glyph) in &font.glyphs {
        let is_rtl = rtl.contains(name);
        for side in KerningSide::BOTH {
            if recovered.contains(&(name.as_str(), side)) {
                continue;
            }
            if let Some(label) = glyph.kerning_group(KerningAttr::resolve(side, is_rtl)) {
                groups.entry(side.group_name(label)).or_default().push(name.clone());
            }
        }
    }

    Ok(groups)
}

/// Classes flagged as plain groups become groups with the class members.
fn seed_plain_classes(font: &DesignFont, groups: &mut Groups) {
    let Some(Value::Array(names)) = font.user_data.get(GROUPS_NOT_IN_FEATURE_KEY) else {
        return;
    };
    let names: HashSet<&str> = names.iter().filter_map(Value::as_str).collect();
    for class in font.classes.iter().filter(|class| names.contains(class.name.as_str())) {
        groups.insert(class.name.clone(), class.members());
    }
}

/// Replay stored kerning groups, keeping entries that still agree with the
/// glyph attributes (or whose glyph is gone). Returns the recovered
/// (glyph, side) pairs.
fn replay_original_groups<'a>(
    font: &'a DesignFont,
    groups: &mut Groups,
) -> HashSet<(&'a str, KerningSide)> {
    let mut recovered = HashSet::new();
    let Some(Value::Object(original)) = font.user_data.get(ORIGINAL_KERNING_GROUPS_KEY) else {
        return recovered;
    };

    for (group, members) in original {
        let Some(members) = members.as_array() else {
            debug!("Ignoring stored group `{group}`: members are not a list");
            continue;
        };
        if members.is_empty() {
            groups.insert(group.clone(), Vec::new());
            continue;
        }
        let Some((side, label)) = parse_kerning_group(group) else {
            debug!("Ignoring stored group `{group}`: not a kerning group");
            continue;
        };
        let attr = KerningAttr::resolve(side, false);

        for glyph_name in members.iter().filter_map(Value::as_str) {
            let still_valid = font
                .glyph(glyph_name)
                .is_none_or(|glyph| glyph.kerning_group(attr) == Some(label));
            if !still_valid {
                debug!("Dropping stale entry `{glyph_name}` from stored group `{group}`");
                continue;
            }
            let list = groups.entry(group.clone()).or_default();
            if !list.iter().any(|member| member == glyph_name) {
                list.push(GlyphName::new(glyph_name));
            }
            recovered.insert((glyph_name, side));
        }
    }

    recovered
}

/// Give every build font its own copy of `groups`.
pub fn apply_groups(groups: &Groups, build_fonts: &mut [BuildFont]) {
    for build_font in build_fonts {
        for (name, glyphs) in groups {
            build_font.groups.insert(name.clone(), glyphs.clone());
        }
    }
}
