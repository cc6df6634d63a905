//! Naming constants shared by both conversion directions.

/// Prefix of side 1 kerning groups in a build font.
pub const KERN1_PREFIX: &str = "public.kern1.";

/// Prefix of side 2 kerning groups in a build font.
pub const KERN2_PREFIX: &str = "public.kern2.";

/// Prefix every RTL kerning group reference starts with.
pub const RTL_GROUP_MARKER: &str = "@MMK_";

/// Marker of RTL right keys that reference a group.
pub const RTL_LEFT_MARKER: &str = "@MMK_L_";

/// Marker of RTL left keys that reference a group.
pub const RTL_RIGHT_MARKER: &str = "@MMK_R_";

/// Infix of synthesized bracket glyph variants, e.g. `a.BRACKET.varAlt01`.
pub const BRACKET_INFIX: &str = ".BRACKET.";

/// User-data key holding the kerning groups as they were last written back.
pub const ORIGINAL_KERNING_GROUPS_KEY: &str =
    "com.github.googlei18n.glyphsLib.originalKerningGroups";

/// User-data key listing classes that are plain groups rather than feature classes.
pub const GROUPS_NOT_IN_FEATURE_KEY: &str = "com.github.googlei18n.glyphsLib.groupsNotInFeature";

/// Whether `name` is a bracket glyph variant generated downstream.
pub fn is_bracket_glyph(name: &str) -> bool {
    name.find(BRACKET_INFIX).is_some_and(|pos| pos > 0)
}
