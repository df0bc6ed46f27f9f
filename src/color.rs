//! Color string parsing: CSS names, hex codes, and `R,G,B` tuples.

use ::color::Srgb;
use image::Rgb;

use crate::error::ColorError;

/// Parses a color specification into an opaque RGB triple.
///
/// Strings containing a comma are read as `R,G,B` integer tuples; everything
/// else goes through the CSS color parser (`red`, `#0f0`, `#336699`, ...).
/// Any alpha component is dropped.
///
/// # Examples
/// ```
/// # use hex_tessellator::color::parse_color;
/// assert_eq!(parse_color("255, 128, 0").unwrap().0, [255, 128, 0]);
/// assert_eq!(parse_color("#00ff00").unwrap().0, [0, 255, 0]);
/// assert!(parse_color("not_a_color_xyz").is_err());
/// ```
pub fn parse_color(input: &str) -> Result<Rgb<u8>, ColorError> {
    let s = input.trim();
    if s.contains(',') {
        return parse_rgb_tuple(s);
    }
    let parsed = ::color::parse_color(s).map_err(|_| ColorError::Invalid(input.to_string()))?;
    let rgba = parsed.to_alpha_color::<Srgb>().to_rgba8();
    Ok(Rgb([rgba.r, rgba.g, rgba.b]))
}

fn parse_rgb_tuple(s: &str) -> Result<Rgb<u8>, ColorError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts[..] else {
        return Err(ColorError::ComponentCount {
            count: parts.len(),
            input: s.to_string(),
        });
    };
    let component = |p: &str| -> Result<u8, ColorError> {
        let value: i64 = p.parse().map_err(|_| ColorError::NotInteger(s.to_string()))?;
        u8::try_from(value).map_err(|_| ColorError::OutOfRange {
            value,
            input: s.to_string(),
        })
    };
    Ok(Rgb([component(r)?, component(g)?, component(b)?]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(s: &str) -> [u8; 3] {
        parse_color(s).unwrap().0
    }

    // ── CSS names and hex ───────────────────────────────────────────

    #[test]
    fn named_colors() {
        assert_eq!(rgb("red"), [255, 0, 0]);
        assert_eq!(rgb("cornflowerblue"), [100, 149, 237]);
        assert_eq!(rgb("grey"), [128, 128, 128]);
        assert_eq!(rgb("darkgrey"), [169, 169, 169]);
    }

    #[test]
    fn hex_codes() {
        assert_eq!(rgb("#FF8000"), [255, 128, 0]);
        assert_eq!(rgb("#ff8000"), [255, 128, 0]);
        assert_eq!(rgb("#f80"), [255, 136, 0]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(rgb("  black "), [0, 0, 0]);
    }

    #[test]
    fn unknown_name_is_invalid() {
        assert_eq!(
            parse_color("not_a_color_xyz"),
            Err(ColorError::Invalid("not_a_color_xyz".into()))
        );
    }

    // ── R,G,B tuples ────────────────────────────────────────────────

    #[test]
    fn tuples_parse_with_and_without_spaces() {
        assert_eq!(rgb("255,128,0"), [255, 128, 0]);
        assert_eq!(rgb(" 255 , 128 , 0 "), [255, 128, 0]);
        assert_eq!(rgb("0,0,0"), [0, 0, 0]);
        assert_eq!(rgb("255,255,255"), [255, 255, 255]);
    }

    #[test]
    fn tuple_component_count_is_checked() {
        assert!(matches!(
            parse_color("1,2"),
            Err(ColorError::ComponentCount { count: 2, .. })
        ));
        assert!(matches!(
            parse_color("1,2,3,4"),
            Err(ColorError::ComponentCount { count: 4, .. })
        ));
    }

    #[test]
    fn tuple_range_is_checked() {
        assert!(matches!(
            parse_color("256,0,0"),
            Err(ColorError::OutOfRange { value: 256, .. })
        ));
        assert!(matches!(
            parse_color("0,-1,0"),
            Err(ColorError::OutOfRange { value: -1, .. })
        ));
    }

    #[test]
    fn tuple_components_must_be_integers() {
        assert!(matches!(parse_color("1.5,0,0"), Err(ColorError::NotInteger(_))));
        assert!(matches!(parse_color("a,b,c"), Err(ColorError::NotInteger(_))));
    }
}
