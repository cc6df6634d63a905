//! Kerning sides and the glyph attribute each side is stored in.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{
    constants::{KERN1_PREFIX, KERN2_PREFIX},
    error::{GroupsError, Result},
};

/// One of the two kerning group slots of a glyph.
///
/// Side 1 is the glyph's right edge (first glyph of a pair), side 2 its
/// left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KerningSide {
    First,
    Second,
}

impl KerningSide {
    pub const BOTH: [KerningSide; 2] = [KerningSide::First, KerningSide::Second];

    pub fn index(self) -> u8 {
        match self {
            KerningSide::First => 1,
            KerningSide::Second => 2,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            KerningSide::First => KerningSide::Second,
            KerningSide::Second => KerningSide::First,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            KerningSide::First => KERN1_PREFIX,
            KerningSide::Second => KERN2_PREFIX,
        }
    }

    /// Full build font group name for `label` on this side.
    pub fn group_name(self, label: &str) -> String {
        format!("{}{label}", self.prefix())
    }
}

impl TryFrom<u8> for KerningSide {
    type Error = GroupsError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(KerningSide::First),
            2 => Ok(KerningSide::Second),
            other => Err(GroupsError::InvalidSide(other)),
        }
    }
}

impl Display for KerningSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.index())
    }
}

/// The per-glyph attribute holding a kerning group label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KerningAttr {
    LeftKerningGroup,
    RightKerningGroup,
}

impl KerningAttr {
    /// Attribute that stores `side`, flipping the side for RTL glyphs.
    pub fn resolve(side: KerningSide, is_rtl: bool) -> Self {
        let side = if is_rtl { side.flipped() } else { side };
        match side {
            KerningSide::First => KerningAttr::RightKerningGroup,
            KerningSide::Second => KerningAttr::LeftKerningGroup,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KerningAttr::LeftKerningGroup => "leftKerningGroup",
            KerningAttr::RightKerningGroup => "rightKerningGroup",
        }
    }
}

/// Resolve a numeric side, failing on anything but 1 or 2.
pub fn resolve_kerning_attr(side: u8, is_rtl: bool) -> Result<KerningAttr> {
    Ok(KerningAttr::resolve(KerningSide::try_from(side)?, is_rtl))
}

/// Split `public.kern{1|2}.<label>` into its side and label.
pub fn parse_kerning_group(name: &str) -> Option<(KerningSide, &str)> {
    KerningSide::BOTH
        .into_iter()
        .find_map(|side| name.strip_prefix(side.prefix()).map(|label| (side, label)))
}

pub fn is_kerning_group(name: &str) -> bool {
    parse_kerning_group(name).is_some()
}
