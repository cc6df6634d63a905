//! Build font to design font: write groups back onto glyph attributes and
//! classes.

use serde_json::{Map, Value};

use crate::{
    build::BuildFont,
    constants::{GROUPS_NOT_IN_FEATURE_KEY, ORIGINAL_KERNING_GROUPS_KEY},
    design::{DesignFont, GlyphClass, UserData},
    glyph_name::GlyphName,
    options::Options,
    side::{KerningAttr, KerningSide, parse_kerning_group},
};

/// Write the groups of `reference` into `font`.
///
/// Kerning groups set the left or right kerning group of each member glyph
/// that exists in the font; RTL kerning is not taken into account here.
/// Other groups are appended as classes. Glyphs not mentioned keep their
/// current labels.
pub fn write_back_groups(font: &mut DesignFont, reference: &BuildFont, options: &Options) {
    let mut plain_classes = Vec::new();

    for (name, glyphs) in &reference.groups {
        let glyphs: Vec<GlyphName> =
            glyphs.iter().filter(|glyph| !glyph.is_bracket_variant()).cloned().collect();

        match parse_kerning_group(name) {
            Some((side, label)) => {
                if options.preserve_round_trip {
                    record_original_group(&mut font.user_data, name, &glyphs);
                }
                assign_kerning_group(font, side, label, &glyphs);
            }
            None => {
                let code = glyphs.iter().map(GlyphName::as_str).collect::<Vec<_>>().join(" ");
                font.classes.push(GlyphClass::new(name.clone(), code));
                plain_classes.push(name.clone());
            }
        }
    }

    if options.preserve_round_trip {
        font.user_data.set(GROUPS_NOT_IN_FEATURE_KEY, plain_classes);
    }
}

fn assign_kerning_group(font: &mut DesignFont, side: KerningSide, label: &str, glyphs: &[GlyphName]) {
    let attr = KerningAttr::resolve(side, false);
    for glyph_name in glyphs {
        if let Some(glyph) = font.glyph_mut(glyph_name) {
            glyph.set_kerning_group(attr, label);
        }
    }
}

fn record_original_group(user_data: &mut UserData, name: &str, glyphs: &[GlyphName]) {
    let members: Value = glyphs.iter().map(|glyph| Value::from(glyph.as_str())).collect();
    if let Some(Value::Object(original)) = user_data.get_mut(ORIGINAL_KERNING_GROUPS_KEY) {
        original.insert(name.to_string(), members);
        return;
    }
    let mut original = Map::new();
    original.insert(name.to_string(), members);
    user_data.set(ORIGINAL_KERNING_GROUPS_KEY, Value::Object(original));
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::design::Glyph;

    fn font() -> DesignFont {
        let mut font = DesignFont::new();
        font.add_glyph("A", Glyph::new());
        font.add_glyph("O", Glyph::new().with_left("round"));
        font.add_glyph("D", Glyph::new());
        font.add_glyph("Z", Glyph::new().with_left("Z").with_right("Z"));
        font
    }

    fn reference() -> BuildFont {
        BuildFont::new()
            .with_group("public.kern1.O", ["O", "D", "D.BRACKET.varAlt01", "gone"])
            .with_group("public.kern2.O", ["O"])
            .with_group("caps", ["A", "A.BRACKET.300", "O"])
            .with_group("empty", Vec::<&str>::new())
    }

    #[test]
    fn test_kerning_groups_set_attributes() {
        let mut font = font();
        write_back_groups(&mut font, &reference(), &Options::new());

        let o = font.glyph("O").unwrap();
        assert_eq!(o.kerning_group(KerningAttr::RightKerningGroup), Some("O"));
        assert_eq!(o.kerning_group(KerningAttr::LeftKerningGroup), Some("O"));
        assert_eq!(font.glyph("D").unwrap().kerning_group(KerningAttr::RightKerningGroup), Some("O"));
        assert_eq!(font.glyph("Z").unwrap(), &Glyph::new().with_left("Z").with_right("Z"));
        assert!(font.glyph("gone").is_none());
    }

    #[test]
    fn test_other_groups_become_classes() {
        let mut font = font();
        write_back_groups(&mut font, &reference(), &Options::new());

        assert_eq!(font.classes, [GlyphClass::new("caps", "A O"), GlyphClass::new("empty", "")]);
        assert!(font.user_data.is_empty());
    }

    #[test]
    fn test_preserve_round_trip_records_metadata() {
        let mut font = font();
        write_back_groups(&mut font, &reference(), &Options::new().preserve_round_trip(true));

        assert_eq!(
            font.user_data.get(ORIGINAL_KERNING_GROUPS_KEY),
            Some(&json!({"public.kern1.O": ["O", "D", "gone"], "public.kern2.O": ["O"]}))
        );
        assert_eq!(font.user_data.get(GROUPS_NOT_IN_FEATURE_KEY), Some(&json!(["caps", "empty"])));
    }

    #[test]
    fn test_existing_metadata_is_extended() {
        let mut font = font();
        font.user_data.set(ORIGINAL_KERNING_GROUPS_KEY, json!({"public.kern1.Z": ["Z"]}));
        let reference = BuildFont::new().with_group("public.kern2.A", ["A"]);
        write_back_groups(&mut font, &reference, &Options::new().preserve_round_trip(true));

        assert_eq!(
            font.user_data.get(ORIGINAL_KERNING_GROUPS_KEY),
            Some(&json!({"public.kern1.Z": ["Z"], "public.kern2.A": ["A"]}))
        );
        assert_eq!(font.user_data.get(GROUPS_NOT_IN_FEATURE_KEY), Some(&json!([])));
    }
}
