//! Cross-checks groups of build fonts that should all be identical.

use std::collections::HashSet;

use crate::{build::BuildFont, glyph_name::GlyphName, sink::WarningSink};

/// A way in which a candidate's groups differ from the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupDiscrepancy {
    /// The candidate has a group the reference lacks.
    Missing { group: String },
    /// Both have the group but with different members; lists are sorted.
    Different { group: String, reference: Vec<GlyphName>, current: Vec<GlyphName> },
}

/// Compare the candidate's groups against the reference, ignoring member order.
pub fn compare_groups(reference: &BuildFont, candidate: &BuildFont) -> Vec<GroupDiscrepancy> {
    let mut discrepancies = Vec::new();
    for (group, glyphs) in &candidate.groups {
        let Some(reference_glyphs) = reference.groups.get(group) else {
            discrepancies.push(GroupDiscrepancy::Missing { group: group.clone() });
            continue;
        };
        let current: HashSet<&GlyphName> = glyphs.iter().collect();
        let expected: HashSet<&GlyphName> = reference_glyphs.iter().collect();
        if current != expected {
            discrepancies.push(GroupDiscrepancy::Different {
                group: group.clone(),
                reference: sorted(reference_glyphs),
                current: sorted(glyphs),
            });
        }
    }
    discrepancies
}

fn sorted(glyphs: &[GlyphName]) -> Vec<GlyphName> {
    let mut glyphs = glyphs.to_vec();
    glyphs.sort();
    glyphs
}

fn join(glyphs: &[GlyphName]) -> String {
    glyphs.iter().map(GlyphName::as_str).collect::<Vec<_>>().join(" ")
}

/// Forwards indented messages, emitting the reference header before the first.
struct Reporter<'a> {
    sink: &'a mut dyn WarningSink,
    reference: String,
    header_logged: bool,
}

impl Reporter<'_> {
    fn warn(&mut self, message: &str) {
        if !self.header_logged {
            let header = format!("Using build font `{}` as a reference for groups:", self.reference);
            self.sink.warn(&header);
            self.header_logged = true;
        }
        self.sink.warn(&format!("   {message}"));
    }
}

/// Report every discrepancy between `reference` and `candidate` to `sink`.
///
/// Never fails; returns the number of discrepancies found.
pub fn warn_group_discrepancies(
    reference: &BuildFont,
    candidate: &BuildFont,
    sink: &mut dyn WarningSink,
) -> usize {
    let discrepancies = compare_groups(reference, candidate);
    let candidate_ref = candidate.logging_ref();
    let mut reporter = Reporter { sink, reference: reference.logging_ref(), header_logged: false };

    for discrepancy in &discrepancies {
        match discrepancy {
            GroupDiscrepancy::Missing { group } => reporter.warn(&format!(
                "group `{group}` from `{candidate_ref}` will be lost because it's not defined in \
                 the reference build font"
            )),
            GroupDiscrepancy::Different { group, reference, current } => {
                reporter.warn(&format!(
                    "group `{group}` from `{candidate_ref}` will not be stored accurately because \
                     it is different from the reference build font"
                ));
                reporter.warn(&format!("    reference = {}", join(reference)));
                reporter.warn(&format!("    current   = {}", join(current)));
            }
        }
    }

    discrepancies.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> BuildFont {
        BuildFont::new()
            .with_path("masters/Font-Regular.ufo")
            .with_group("public.kern1.O", ["O", "D", "Q"])
            .with_group("public.kern2.H", ["H", "I"])
    }

    #[test]
    fn test_identical_groups_are_silent() {
        let candidate = reference().with_group("public.kern2.H", ["I", "H"]);
        let mut warnings: Vec<String> = Vec::new();
        assert_eq!(warn_group_discrepancies(&reference(), &candidate, &mut warnings), 0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_different_members() {
        let candidate = BuildFont::new()
            .with_style_name("Bold")
            .with_group("public.kern1.O", ["O", "C"])
            .with_group("public.kern2.H", ["H", "I"]);
        let mut warnings: Vec<String> = Vec::new();
        assert_eq!(warn_group_discrepancies(&reference(), &candidate, &mut warnings), 1);

        assert_eq!(warnings, [
            "Using build font `Font-Regular.ufo` as a reference for groups:",
            "   group `public.kern1.O` from `Bold` will not be stored accurately because it is \
             different from the reference build font",
            "       reference = D O Q",
            "       current   = C O",
        ]);
    }

    #[test]
    fn test_missing_group() {
        let candidate = reference().with_group("public.kern1.extra", ["x"]);
        let discrepancies = compare_groups(&reference(), &candidate);
        assert_eq!(discrepancies, [GroupDiscrepancy::Missing {
            group: "public.kern1.extra".to_string()
        }]);

        let mut warnings: Vec<String> = Vec::new();
        warn_group_discrepancies(&reference(), &candidate, &mut warnings);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[1].contains("will be lost"));
    }

    #[test]
    fn test_groups_missing_from_candidate_are_ignored() {
        let candidate = BuildFont::new().with_group("public.kern1.O", ["Q", "O", "D"]);
        assert!(compare_groups(&reference(), &candidate).is_empty());
    }
}
