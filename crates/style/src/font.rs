use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The family class of a font. Concrete family names are resolved per render
/// through the render context, so a style only names a class or a family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Serif,
    SansSerif,
    Monospace,
    Named(String),
}

impl FontFamily {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "serif" => FontFamily::Serif,
            "sans-serif" | "sans" => FontFamily::SansSerif,
            "monospace" | "mono" => FontFamily::Monospace,
            _ => FontFamily::Named(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FontFamily::Serif => "serif",
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Monospace => "monospace",
            FontFamily::Named(name) => name,
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FontFamily {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(FontFamily::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_classes() {
        assert_eq!(FontFamily::parse("Serif"), FontFamily::Serif);
        assert_eq!(FontFamily::parse("sans"), FontFamily::SansSerif);
        assert_eq!(FontFamily::parse(" mono "), FontFamily::Monospace);
        assert_eq!(
            FontFamily::parse("Fira Sans"),
            FontFamily::Named("Fira Sans".to_string())
        );
    }
}
