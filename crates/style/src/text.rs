use crate::font::FontFamily;
use folio_types::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text attributes of a style descriptor. Every slot is optional; an unset
/// slot is what the join algorithm fills from a donor.
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Number/decimal formatting hint, e.g. `#,##0.00`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
    /// Locale hint, e.g. `de-DE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self, value: bool) -> Self {
        self.bold = Some(value);
        self
    }

    pub fn italic(mut self, value: bool) -> Self {
        self.italic = Some(value);
        self
    }

    pub fn underline(mut self, value: bool) -> Self {
        self.underline = Some(value);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_family(mut self, family: FontFamily) -> Self {
        self.font_family = Some(family);
        self
    }

    /// True when no slot is set.
    pub fn is_empty(&self) -> bool {
        *self == TextStyle::default()
    }
}

/// Writes the set slots in declaration syntax (`bold: true; color: #ff0000`),
/// the same syntax `parse_declarations` reads.
impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut decls: Vec<String> = Vec::new();
        if let Some(v) = &self.font_family {
            decls.push(format!("font-family: {}", v));
        }
        if let Some(v) = self.font_size {
            decls.push(format!("font-size: {}pt", v));
        }
        if let Some(v) = self.bold {
            decls.push(format!("bold: {}", v));
        }
        if let Some(v) = self.italic {
            decls.push(format!("italic: {}", v));
        }
        if let Some(v) = self.underline {
            decls.push(format!("underline: {}", v));
        }
        if let Some(v) = &self.color {
            decls.push(format!("color: {}", v));
        }
        if let Some(v) = &self.number_format {
            decls.push(format!("number-format: {}", v));
        }
        if let Some(v) = &self.locale {
            decls.push(format!("locale: {}", v));
        }
        f.write_str(&decls.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_only_named_slots() {
        let style = TextStyle::new().bold(true).color(Color::RED);
        assert_eq!(style.bold, Some(true));
        assert_eq!(style.color, Some(Color::RED));
        assert_eq!(style.italic, None);
        assert!(!style.is_empty());
        assert!(TextStyle::new().is_empty());
    }

    #[test]
    fn test_display_uses_declaration_syntax() {
        let style = TextStyle::new().bold(true).font_size(12.0);
        assert_eq!(style.to_string(), "font-size: 12pt; bold: true");
    }

    #[test]
    fn test_serde_skips_unset_slots() {
        let json = serde_json::to_string(&TextStyle::new().italic(false)).unwrap();
        assert_eq!(json, r#"{"italic":false}"#);

        let parsed: TextStyle = serde_json::from_str(r#"{"fontSize": 9.5, "bold": true}"#).unwrap();
        assert_eq!(parsed.font_size, Some(9.5));
        assert_eq!(parsed.bold, Some(true));
    }
}
