mod build;
mod consistency;
mod constants;
mod converter;
mod design;
mod error;
mod glyph_name;
mod options;
mod rtl;
mod side;
mod sink;
mod to_build;
mod to_design;

pub use build::{BuildFont, Groups};
pub use consistency::{GroupDiscrepancy, compare_groups, warn_group_discrepancies};
pub use constants::{
    GROUPS_NOT_IN_FEATURE_KEY, ORIGINAL_KERNING_GROUPS_KEY, RTL_LEFT_MARKER, RTL_RIGHT_MARKER,
    is_bracket_glyph,
};
pub use converter::GroupConverter;
pub use design::{DesignFont, Glyph, GlyphClass, KerningTable, Master, UserData};
pub use error::{GroupsError, Result};
pub use glyph_name::GlyphName;
pub use options::Options;
pub use rtl::rtl_glyphs;
pub use side::{KerningAttr, KerningSide, is_kerning_group, parse_kerning_group, resolve_kerning_attr};
pub use sink::{LogSink, WarningSink};
pub use to_build::{apply_groups, build_groups};
pub use to_design::write_back_groups;

/// Build the group table of `design` and apply it to `build_fonts` using
/// default options.
///
/// # Example
///
/// ```
/// use kern_groups::{BuildFont, DesignFont, Glyph, to_build_groups};
///
/// let mut design = DesignFont::new();
/// design.add_glyph("O", Glyph::new().with_left("O").with_right("O"));
/// let mut masters = vec![BuildFont::new(), BuildFont::new()];
/// to_build_groups(&design, &mut masters).unwrap();
/// assert_eq!(masters[1].groups["public.kern2.O"], ["O"]);
/// ```
pub fn to_build_groups(design: &DesignFont, build_fonts: &mut [BuildFont]) -> Result<Groups> {
    GroupConverter::default().to_build(design, build_fonts)
}

/// Write the groups of the first build font back into `design` using
/// default options, logging discrepancies of the others.
pub fn to_design_groups(design: &mut DesignFont, build_fonts: &[BuildFont]) -> usize {
    GroupConverter::default().to_design(design, build_fonts)
}
