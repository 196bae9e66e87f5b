use folio_types::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Line weight of a single border edge.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BorderWeight {
    #[default]
    None,
    Hair,
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
}

impl BorderWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderWeight::None => "none",
            BorderWeight::Hair => "hair",
            BorderWeight::Thin => "thin",
            BorderWeight::Medium => "medium",
            BorderWeight::Thick => "thick",
            BorderWeight::Dashed => "dashed",
            BorderWeight::Dotted => "dotted",
            BorderWeight::Double => "double",
        }
    }

    /// Nominal stroke width in points.
    pub fn width_pt(&self) -> f32 {
        match self {
            BorderWeight::None => 0.0,
            BorderWeight::Hair => 0.25,
            BorderWeight::Thin | BorderWeight::Dashed | BorderWeight::Dotted => 0.5,
            BorderWeight::Medium => 1.0,
            BorderWeight::Thick => 2.0,
            BorderWeight::Double => 1.5,
        }
    }
}

/// One border edge: a weight and an optional color.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Border {
    pub weight: BorderWeight,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<Color>,
}

impl Border {
    pub fn new(weight: BorderWeight, color: Color) -> Self {
        Self {
            weight,
            color: Some(color),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn thin(color: Color) -> Self {
        Self::new(BorderWeight::Thin, color)
    }

    pub fn is_none(&self) -> bool {
        self.weight == BorderWeight::None
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.weight.as_str())?;
        if let Some(color) = &self.color {
            write!(f, " {}", color)?;
        }
        Ok(())
    }
}
