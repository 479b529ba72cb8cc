//! `:shortcode:` icon expansion.
//!
//! Glyphs are single code points without variation selectors so that their
//! display width is what `unicode-width` reports.

use std::borrow::Cow;

const ICONS: &[(&str, &str)] = &[
    ("anchor", "\u{2693}"),
    ("beach_with_umbrella", "\u{1F3D6}"),
    ("biohazard", "\u{2623}"),
    ("blue_circle", "\u{1F535}"),
    ("cloud_with_rain", "\u{1F327}"),
    ("cloud_with_tornado", "\u{1F32A}"),
    ("cold_face", "\u{1F976}"),
    ("cyclone", "\u{1F300}"),
    ("dashing_away", "\u{1F4A8}"),
    ("double_exclamation_mark", "\u{203C}"),
    ("droplet", "\u{1F4A7}"),
    ("exclamation_mark", "\u{2757}"),
    ("eyes", "\u{1F440}"),
    ("fire", "\u{1F525}"),
    ("fish", "\u{1F41F}"),
    ("fog", "\u{1F32B}"),
    ("hamburger", "\u{1F354}"),
    ("high_voltage", "\u{26A1}"),
    ("hot_face", "\u{1F975}"),
    ("house", "\u{1F3E0}"),
    ("ice", "\u{1F9CA}"),
    ("loudly_crying_face", "\u{1F62D}"),
    ("man_police_officer", "\u{1F46E}"),
    ("mask", "\u{1F637}"),
    ("megaphone", "\u{1F4E3}"),
    ("memo", "\u{1F4DD}"),
    ("pen", "\u{1F58A}"),
    ("person_running", "\u{1F3C3}"),
    ("person_surfing", "\u{1F3C4}"),
    ("police_car_light", "\u{1F6A8}"),
    ("radioactive", "\u{2622}"),
    ("sailboat", "\u{26F5}"),
    ("ship", "\u{1F6A2}"),
    ("snow_capped_mountain", "\u{1F3D4}"),
    ("snowflake", "\u{2744}"),
    ("sun_behind_rain_cloud", "\u{1F326}"),
    ("telephone_receiver", "\u{1F4DE}"),
    ("test_tube", "\u{1F9EA}"),
    ("thermometer", "\u{1F321}"),
    ("tornado", "\u{1F32A}"),
    ("triangular_flag", "\u{1F6A9}"),
    ("volcano", "\u{1F30B}"),
    ("warning", "\u{26A0}"),
    ("water_wave", "\u{1F30A}"),
    ("wind_blowing_face", "\u{1F32C}"),
    ("zap", "\u{26A1}"),
];

/// The glyph for a shortcode name (without colons).
pub fn glyph(name: &str) -> Option<&'static str> {
    ICONS
        .binary_search_by(|(known, _)| known.cmp(&name))
        .ok()
        .map(|index| ICONS[index].1)
}

/// Known shortcode names, sorted.
pub fn names() -> impl Iterator<Item = &'static str> {
    ICONS.iter().map(|(name, _)| *name)
}

/// Replaces every known `:shortcode:` with its glyph.
///
/// Unknown shortcodes, and colons that don't delimit a shortcode (clock
/// times, `Sender: NWS`), are left alone.
///
/// ```rust
/// use richwx_render::expand_icons;
///
/// assert_eq!(expand_icons(":tornado: at 4:30"), "\u{1F32A} at 4:30");
/// assert_eq!(expand_icons(":not_an_icon:"), ":not_an_icon:");
/// ```
pub fn expand_icons(input: &str) -> Cow<'_, str> {
    if !input.contains(':') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    let mut replaced = false;

    while let Some(start) = rest.find(':') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());

        if after[name_len..].starts_with(':') {
            if let Some(glyph) = glyph(&after[..name_len]) {
                out.push_str(glyph);
                rest = &after[name_len + 1..];
                replaced = true;
                continue;
            }
        }
        out.push(':');
        rest = after;
    }
    out.push_str(rest);

    if replaced {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        let names: Vec<&str> = names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_expand_sequence() {
        assert_eq!(
            expand_icons("[red]Tornado Warning[/]:exclamation_mark: :tornado: "),
            "[red]Tornado Warning[/]\u{2757} \u{1F32A} "
        );
    }

    #[test]
    fn test_adjacent_shortcodes() {
        assert_eq!(expand_icons(":high_voltage::snowflake:"), "\u{26A1}\u{2744}");
    }

    #[test]
    fn test_unknown_shortcode_kept() {
        assert_eq!(expand_icons("a :nope: b"), "a :nope: b");
    }

    #[test]
    fn test_unknown_then_known() {
        // the closing colon of an unknown code can open a real one
        assert_eq!(expand_icons(":x:fire:"), ":x\u{1F525}");
    }

    #[test]
    fn test_times_untouched() {
        let text = "1/1/2021 11:19AM EST";
        assert!(matches!(expand_icons(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(glyph("water_wave"), Some("\u{1F30A}"));
        assert_eq!(glyph("water wave"), None);
    }
}
