use crate::border::Border;
use crate::dimension::Dimension;
use folio_types::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FillPattern {
    #[default]
    None,
    Solid,
    LightGray,
    DarkGray,
    Dotted,
    Striped,
}

impl FillPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            FillPattern::None => "none",
            FillPattern::Solid => "solid",
            FillPattern::LightGray => "light-gray",
            FillPattern::DarkGray => "dark-gray",
            FillPattern::Dotted => "dotted",
            FillPattern::Striped => "striped",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
    Fill,
}

impl HorizontalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
            HorizontalAlign::Justify => "justify",
            HorizontalAlign::Fill => "fill",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        }
    }
}

/// Box/layout attributes of a style descriptor.
///
/// The four border edges are independent slots so a donor can fill the left
/// edge of a target that only set its top edge.
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_right: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_pattern: Option<FillPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_align: Option<HorizontalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_size: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shrink_to_fit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Rotation in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

impl LayoutStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all four border edges to the same border.
    pub fn border(mut self, border: Border) -> Self {
        self.border_top = Some(border.clone());
        self.border_left = Some(border.clone());
        self.border_right = Some(border.clone());
        self.border_bottom = Some(border);
        self
    }

    pub fn align(mut self, align: HorizontalAlign) -> Self {
        self.horizontal_align = Some(align);
        self
    }

    pub fn valign(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn fill(mut self, pattern: FillPattern) -> Self {
        self.fill_pattern = Some(pattern);
        self
    }

    pub fn width(mut self, width: Dimension) -> Self {
        self.width = Some(width);
        self
    }

    /// Iterates over the border edges in top, right, bottom, left order.
    pub fn borders(&self) -> [(&'static str, Option<&Border>); 4] {
        [
            ("top", self.border_top.as_ref()),
            ("right", self.border_right.as_ref()),
            ("bottom", self.border_bottom.as_ref()),
            ("left", self.border_left.as_ref()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        *self == LayoutStyle::default()
    }
}

impl fmt::Display for LayoutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut decls: Vec<String> = Vec::new();
        for (edge, border) in self.borders() {
            if let Some(border) = border {
                decls.push(format!("border-{}: {}", edge, border));
            }
        }
        if let Some(v) = &self.fill_pattern {
            decls.push(format!("fill-pattern: {}", v.as_str()));
        }
        if let Some(v) = &self.background {
            decls.push(format!("background: {}", v));
        }
        if let Some(v) = &self.foreground {
            decls.push(format!("foreground: {}", v));
        }
        if let Some(v) = &self.horizontal_align {
            decls.push(format!("align: {}", v.as_str()));
        }
        if let Some(v) = &self.vertical_align {
            decls.push(format!("valign: {}", v.as_str()));
        }
        if let Some(v) = self.auto_size {
            decls.push(format!("auto-size: {}", v));
        }
        if let Some(v) = self.shrink_to_fit {
            decls.push(format!("shrink-to-fit: {}", v));
        }
        if let Some(v) = &self.width {
            decls.push(format!("width: {}", v));
        }
        if let Some(v) = &self.height {
            decls.push(format!("height: {}", v));
        }
        if let Some(v) = self.rotation {
            decls.push(format!("rotation: {}", v));
        }
        if let Some(v) = self.scale {
            decls.push(format!("scale: {}", v));
        }
        f.write_str(&decls.join("; "))
    }
}
