//! Low-level nom parser functions for style values, plus the inline
//! declaration parser (`bold: true; border: thin red; align: right`).

use crate::attrs::{CombinedStyle, StyleAttrs};
use crate::border::{Border, BorderWeight};
use crate::dimension::Dimension;
use crate::error::StyleError;
use crate::font::FontFamily;
use crate::layout::{FillPattern, HorizontalAlign, LayoutStyle, VerticalAlign};
use crate::text::TextStyle;
use folio_types::Color;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::{alpha1, char, digit1, space0};
use nom::combinator::{map, map_opt, map_res, opt, recognize, value};
use nom::error::Error as NomError;
use nom::sequence::{delimited, preceded, terminated};
use nom::{IResult, Parser};

// --- Helper Parsers ---

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = NomError<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = NomError<&'a str>>,
{
    delimited(space0, inner, space0)
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn parse_bool(input: &str) -> IResult<&str, bool> {
    alt((
        value(true, tag_no_case("true")),
        value(true, tag_no_case("yes")),
        value(false, tag_no_case("false")),
        value(false, tag_no_case("no")),
    ))
    .parse(input)
}

// --- Unit & Dimension Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(1.0, tag_no_case("px")), // Treat px as pt
        value(72.0, tag_no_case("in")),
        value(28.35, tag_no_case("cm")),
        value(2.835, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, value) = parse_f32(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, value * unit_multiplier.unwrap_or(1.0)))
}

/// Parses a dimension value (length, percentage, or "auto").
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    alt((
        value(Dimension::Auto, tag_no_case("auto")),
        map(terminated(parse_f32, char('%')), Dimension::Percent),
        map(parse_length, Dimension::Pt),
    ))
    .parse(input)
}

/// Parses an angle in degrees with an optional `deg` suffix.
pub fn parse_angle(input: &str) -> IResult<&str, f32> {
    terminated(parse_f32, opt(tag_no_case("deg"))).parse(input)
}

// --- Color & Border Parsers ---

fn from_hex(input: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(input, 16)
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), from_hex).parse(input)
}

fn hex_short(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, is_hex_digit), |digit: &str| {
        from_hex(&digit.repeat(2))
    })
    .parse(input)
}

fn hex_color_6(input: &str) -> IResult<&str, Color> {
    map((hex_primary, hex_primary, hex_primary), |(r, g, b)| {
        Color::rgb(r, g, b)
    })
    .parse(input)
}

fn hex_color_3(input: &str) -> IResult<&str, Color> {
    map((hex_short, hex_short, hex_short), |(r, g, b)| Color::rgb(r, g, b)).parse(input)
}

/// Parses a hex color (e.g., "#FF0000" or "#F00") or a palette name ("red").
pub fn parse_color(input: &str) -> IResult<&str, Color> {
    alt((
        preceded(char('#'), alt((hex_color_6, hex_color_3))),
        map_opt(alpha1, Color::named),
    ))
    .parse(input)
}

/// Parses a border weight keyword.
pub fn parse_border_weight(input: &str) -> IResult<&str, BorderWeight> {
    alt((
        value(BorderWeight::None, tag_no_case("none")),
        value(BorderWeight::Hair, tag_no_case("hair")),
        value(BorderWeight::Thin, tag_no_case("thin")),
        value(BorderWeight::Medium, tag_no_case("medium")),
        value(BorderWeight::Thick, tag_no_case("thick")),
        value(BorderWeight::Dashed, tag_no_case("dashed")),
        value(BorderWeight::Dotted, tag_no_case("dotted")),
        value(BorderWeight::Double, tag_no_case("double")),
    ))
    .parse(input)
}

/// Parses a border shorthand: a weight followed by an optional color
/// (e.g., "thin #ff0000", "medium red", "none").
pub fn parse_border(input: &str) -> IResult<&str, Border> {
    map(
        (ws(parse_border_weight), opt(ws(parse_color))),
        |(weight, color)| Border { weight, color },
    )
    .parse(input)
}

fn parse_fill_pattern(input: &str) -> IResult<&str, FillPattern> {
    alt((
        value(FillPattern::None, tag_no_case("none")),
        value(FillPattern::Solid, tag_no_case("solid")),
        value(FillPattern::LightGray, tag_no_case("light-gray")),
        value(FillPattern::DarkGray, tag_no_case("dark-gray")),
        value(FillPattern::Dotted, tag_no_case("dotted")),
        value(FillPattern::Striped, tag_no_case("striped")),
    ))
    .parse(input)
}

fn parse_horizontal_align(input: &str) -> IResult<&str, HorizontalAlign> {
    alt((
        value(HorizontalAlign::Left, tag_no_case("left")),
        value(HorizontalAlign::Center, tag_no_case("center")),
        value(HorizontalAlign::Right, tag_no_case("right")),
        value(HorizontalAlign::Justify, tag_no_case("justify")),
        value(HorizontalAlign::Fill, tag_no_case("fill")),
    ))
    .parse(input)
}

fn parse_vertical_align(input: &str) -> IResult<&str, VerticalAlign> {
    alt((
        value(VerticalAlign::Top, tag_no_case("top")),
        value(VerticalAlign::Middle, tag_no_case("middle")),
        value(VerticalAlign::Middle, tag_no_case("center")),
        value(VerticalAlign::Bottom, tag_no_case("bottom")),
    ))
    .parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleError>`.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleError>
where
    F: Parser<&'a str, Output = T, Error = NomError<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleError::Parse(e.to_string())),
    }
}

/// Like `run_parser`, but reports failures against the property being set.
fn property<'a, T, F>(name: &str, parser: F, value: &'a str) -> Result<T, StyleError>
where
    F: Parser<&'a str, Output = T, Error = NomError<&'a str>>,
{
    run_parser(parser, value).map_err(|_| StyleError::InvalidValue {
        property: name.to_string(),
        value: value.to_string(),
    })
}

// --- Declaration Application ---

/// Applies a single `name: value` declaration to the text or layout half.
///
/// Unknown property names are an error: a typo in a stylesheet must surface
/// rather than silently produce an unstyled node.
pub fn apply_declaration(
    text: &mut TextStyle,
    layout: &mut LayoutStyle,
    name: &str,
    value: &str,
) -> Result<(), StyleError> {
    match name {
        "font-family" => text.font_family = Some(FontFamily::parse(value)),
        "font-size" => text.font_size = Some(property(name, parse_length, value)?),
        "bold" => text.bold = Some(property(name, parse_bool, value)?),
        "italic" => text.italic = Some(property(name, parse_bool, value)?),
        "underline" => text.underline = Some(property(name, parse_bool, value)?),
        "color" => text.color = Some(property(name, parse_color, value)?),
        "number-format" => text.number_format = Some(value.trim().to_string()),
        "locale" => text.locale = Some(value.trim().to_string()),
        "border" => {
            let border = property(name, parse_border, value)?;
            *layout = std::mem::take(layout).border(border);
        }
        "border-top" => layout.border_top = Some(property(name, parse_border, value)?),
        "border-left" => layout.border_left = Some(property(name, parse_border, value)?),
        "border-right" => layout.border_right = Some(property(name, parse_border, value)?),
        "border-bottom" => layout.border_bottom = Some(property(name, parse_border, value)?),
        "fill-pattern" => layout.fill_pattern = Some(property(name, parse_fill_pattern, value)?),
        "background" => layout.background = Some(property(name, parse_color, value)?),
        "foreground" => layout.foreground = Some(property(name, parse_color, value)?),
        "align" => layout.horizontal_align = Some(property(name, parse_horizontal_align, value)?),
        "valign" => layout.vertical_align = Some(property(name, parse_vertical_align, value)?),
        "auto-size" => layout.auto_size = Some(property(name, parse_bool, value)?),
        "shrink-to-fit" => layout.shrink_to_fit = Some(property(name, parse_bool, value)?),
        "width" => layout.width = Some(property(name, parse_dimension, value)?),
        "height" => layout.height = Some(property(name, parse_dimension, value)?),
        "rotation" => layout.rotation = Some(property(name, parse_angle, value)?),
        "scale" => layout.scale = Some(property(name, parse_f32, value)?),
        _ => {
            return Err(StyleError::InvalidValue {
                property: name.to_string(),
                value: value.to_string(),
            });
        }
    };
    Ok(())
}

/// Parses an inline declaration list into a style payload.
///
/// The variant follows from the properties present: text-only declarations
/// yield `Text`, layout-only yield `Layout`, a mix (or nothing) yields
/// `Combined`. A bare flag name (`bold`) is shorthand for `bold: true`.
pub fn parse_declarations(css: &str) -> Result<StyleAttrs, StyleError> {
    let mut text = TextStyle::default();
    let mut layout = LayoutStyle::default();

    for declaration in css.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        match declaration.split_once(':') {
            Some((key, value)) => {
                apply_declaration(&mut text, &mut layout, key.trim(), value.trim())?
            }
            None => apply_declaration(&mut text, &mut layout, declaration, "true")?,
        }
    }

    Ok(match (text.is_empty(), layout.is_empty()) {
        (false, true) => StyleAttrs::Text(text),
        (true, false) => StyleAttrs::Layout(layout),
        _ => StyleAttrs::Combined(CombinedStyle::new(text, layout)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(run_parser(parse_length, "12pt").unwrap(), 12.0);
        assert_eq!(run_parser(parse_length, " 1in ").unwrap(), 72.0);
        assert_eq!(run_parser(parse_length, "10mm").unwrap(), 28.35);
        assert_eq!(run_parser(parse_length, "10").unwrap(), 10.0);
        assert!(run_parser(parse_length, "abc").is_err());
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(
            run_parser(parse_dimension, "12pt").unwrap(),
            Dimension::Pt(12.0)
        );
        assert_eq!(
            run_parser(parse_dimension, "50%").unwrap(),
            Dimension::Percent(50.0)
        );
        assert_eq!(
            run_parser(parse_dimension, "auto").unwrap(),
            Dimension::Auto
        );
        assert!(run_parser(parse_dimension, "50p").is_err());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(run_parser(parse_color, "#ff0000").unwrap(), Color::RED);
        assert_eq!(run_parser(parse_color, "#0f0").unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(run_parser(parse_color, "blue").unwrap(), Color::BLUE);
        assert!(run_parser(parse_color, "#ffff").is_err());
        assert!(run_parser(parse_color, "mauve").is_err());
    }

    #[test]
    fn test_parse_border() {
        assert_eq!(
            run_parser(parse_border, "thin red").unwrap(),
            Border::thin(Color::RED)
        );
        assert_eq!(run_parser(parse_border, "none").unwrap(), Border::none());
        assert_eq!(
            run_parser(parse_border, "  thick   #000 ").unwrap(),
            Border::new(BorderWeight::Thick, Color::BLACK)
        );
    }

    #[test]
    fn test_vertical_align_keywords_ignore_case() {
        assert_eq!(run_parser(parse_vertical_align, "Center").unwrap(), VerticalAlign::Middle);
        assert_eq!(run_parser(parse_vertical_align, "MIDDLE").unwrap(), VerticalAlign::Middle);
        assert_eq!(run_parser(parse_vertical_align, "top").unwrap(), VerticalAlign::Top);
    }

    #[test]
    fn test_declarations_pick_variant() {
        let attrs = parse_declarations("bold: true; color: #00f").unwrap();
        assert_eq!(
            attrs,
            StyleAttrs::Text(TextStyle::new().bold(true).color(Color::BLUE))
        );

        let attrs = parse_declarations("align: right; border: none").unwrap();
        assert_eq!(
            attrs,
            StyleAttrs::Layout(
                LayoutStyle::new()
                    .align(HorizontalAlign::Right)
                    .border(Border::none())
            )
        );

        let attrs = parse_declarations("italic; width: 50%").unwrap();
        let StyleAttrs::Combined(combined) = attrs else {
            panic!("expected combined style");
        };
        assert_eq!(combined.text.italic, Some(true));
        assert_eq!(combined.layout.width, Some(Dimension::Percent(50.0)));
    }

    #[test]
    fn test_declarations_reject_unknown_and_bad_values() {
        assert!(matches!(
            parse_declarations("boldness: true"),
            Err(StyleError::InvalidValue { property, .. }) if property == "boldness"
        ));
        assert!(matches!(
            parse_declarations("font-size: huge"),
            Err(StyleError::InvalidValue { property, .. }) if property == "font-size"
        ));
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        let original = parse_declarations(
            "bold: false; font-size: 9pt; border-top: medium #112233; valign: bottom; rotation: 90deg",
        )
        .unwrap();
        let reparsed = parse_declarations(&original.to_string()).unwrap();
        assert_eq!(original, reparsed);
    }
}
