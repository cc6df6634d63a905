use log::{debug, info};

use crate::{
    build::{BuildFont, Groups},
    consistency::warn_group_discrepancies,
    design::DesignFont,
    error::Result,
    options::Options,
    sink::{LogSink, WarningSink},
    to_build::{apply_groups, build_groups},
    to_design::write_back_groups,
};

/// Converts kerning groups between a design font and its build fonts
#[derive(Debug, Clone, Default)]
pub struct GroupConverter {
    options: Options,
}

impl GroupConverter {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Build the group table of `design` and copy it into every build font.
    ///
    /// Returns the table that was applied.
    pub fn to_build(&self, design: &DesignFont, build_fonts: &mut [BuildFont]) -> Result<Groups> {
        let groups = build_groups(design)?;
        apply_groups(&groups, build_fonts);
        info!("Applied {} groups to {} build fonts", groups.len(), build_fonts.len());
        Ok(groups)
    }

    /// Write the first build font's groups into `design` and warn through
    /// the `log` facade about build fonts that disagree with it.
    pub fn to_design(&self, design: &mut DesignFont, build_fonts: &[BuildFont]) -> usize {
        self.to_design_with_sink(design, build_fonts, &mut LogSink)
    }

    /// Like [`GroupConverter::to_design`], reporting warnings to `sink`.
    ///
    /// Returns the number of discrepancies found across all build fonts.
    pub fn to_design_with_sink(
        &self,
        design: &mut DesignFont,
        build_fonts: &[BuildFont],
        sink: &mut dyn WarningSink,
    ) -> usize {
        let Some((reference, others)) = build_fonts.split_first() else {
            debug!("No build fonts, nothing to write back");
            return 0;
        };

        write_back_groups(design, reference, &self.options);
        info!("Wrote back {} groups from `{}`", reference.groups.len(), reference.logging_ref());

        others
            .iter()
            .map(|candidate| warn_group_discrepancies(reference, candidate, sink))
            .sum()
    }
}
