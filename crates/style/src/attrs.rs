use crate::error::StyleError;
use crate::extension::StyleExtension;
use crate::join::Join;
use crate::layout::LayoutStyle;
use crate::text::TextStyle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exactly one text half and one layout half. Joins recurse into both halves
/// independently.
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
pub struct CombinedStyle {
    #[serde(default)]
    pub text: TextStyle,
    #[serde(default)]
    pub layout: LayoutStyle,
}

impl CombinedStyle {
    pub fn new(text: TextStyle, layout: LayoutStyle) -> Self {
        Self { text, layout }
    }
}

impl Join for CombinedStyle {
    fn join_from(&mut self, donor: &Self) {
        self.text.join_from(&donor.text);
        self.layout.join_from(&donor.layout);
    }
}

/// The attribute payload of a style descriptor.
#[derive(Debug)]
pub enum StyleAttrs {
    Text(TextStyle),
    Layout(LayoutStyle),
    Combined(CombinedStyle),
    Extension(Box<dyn StyleExtension>),
}

impl StyleAttrs {
    pub fn variant_name(&self) -> &'static str {
        match self {
            StyleAttrs::Text(_) => "text",
            StyleAttrs::Layout(_) => "layout",
            StyleAttrs::Combined(_) => "combined",
            StyleAttrs::Extension(ext) => ext.name(),
        }
    }

    /// The text half, if this variant has one.
    pub fn text(&self) -> Option<&TextStyle> {
        match self {
            StyleAttrs::Text(text) => Some(text),
            StyleAttrs::Combined(combined) => Some(&combined.text),
            _ => None,
        }
    }

    /// The layout half, if this variant has one.
    pub fn layout(&self) -> Option<&LayoutStyle> {
        match self {
            StyleAttrs::Layout(layout) => Some(layout),
            StyleAttrs::Combined(combined) => Some(&combined.layout),
            _ => None,
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut TextStyle> {
        match self {
            StyleAttrs::Text(text) => Some(text),
            StyleAttrs::Combined(combined) => Some(&mut combined.text),
            _ => None,
        }
    }

    pub fn layout_mut(&mut self) -> Option<&mut LayoutStyle> {
        match self {
            StyleAttrs::Layout(layout) => Some(layout),
            StyleAttrs::Combined(combined) => Some(&mut combined.layout),
            _ => None,
        }
    }

    pub fn extension(&self) -> Option<&dyn StyleExtension> {
        match self {
            StyleAttrs::Extension(ext) => Some(ext.as_ref()),
            _ => None,
        }
    }

    /// Deep copy. Fails only for extensions that refuse to be copied.
    pub fn try_clone(&self) -> Result<Self, StyleError> {
        Ok(match self {
            StyleAttrs::Text(text) => StyleAttrs::Text(text.clone()),
            StyleAttrs::Layout(layout) => StyleAttrs::Layout(layout.clone()),
            StyleAttrs::Combined(combined) => StyleAttrs::Combined(combined.clone()),
            StyleAttrs::Extension(ext) => StyleAttrs::Extension(ext.try_clone()?),
        })
    }

    /// Fills unset slots of `self` from `donor`.
    ///
    /// A combined target takes the matching half from a bare text or layout
    /// donor; a bare target takes its half from a combined donor. Returns
    /// `false` when the variants share no half and nothing was joined.
    pub fn join_from(&mut self, donor: &StyleAttrs) -> bool {
        match (self, donor) {
            (StyleAttrs::Text(target), StyleAttrs::Text(donor)) => target.join_from(donor),
            (StyleAttrs::Text(target), StyleAttrs::Combined(donor)) => {
                target.join_from(&donor.text)
            }
            (StyleAttrs::Layout(target), StyleAttrs::Layout(donor)) => target.join_from(donor),
            (StyleAttrs::Layout(target), StyleAttrs::Combined(donor)) => {
                target.join_from(&donor.layout)
            }
            (StyleAttrs::Combined(target), StyleAttrs::Combined(donor)) => {
                target.join_from(donor)
            }
            (StyleAttrs::Combined(target), StyleAttrs::Text(donor)) => {
                target.text.join_from(donor)
            }
            (StyleAttrs::Combined(target), StyleAttrs::Layout(donor)) => {
                target.layout.join_from(donor)
            }
            (StyleAttrs::Extension(target), StyleAttrs::Extension(donor)) => {
                return target.join_from(donor.as_ref());
            }
            _ => return false,
        }
        true
    }
}

impl PartialEq for StyleAttrs {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StyleAttrs::Text(a), StyleAttrs::Text(b)) => a == b,
            (StyleAttrs::Layout(a), StyleAttrs::Layout(b)) => a == b,
            (StyleAttrs::Combined(a), StyleAttrs::Combined(b)) => a == b,
            (StyleAttrs::Extension(a), StyleAttrs::Extension(b)) => a.eq_extension(b.as_ref()),
            _ => false,
        }
    }
}

impl From<TextStyle> for StyleAttrs {
    fn from(text: TextStyle) -> Self {
        StyleAttrs::Text(text)
    }
}

impl From<LayoutStyle> for StyleAttrs {
    fn from(layout: LayoutStyle) -> Self {
        StyleAttrs::Layout(layout)
    }
}

impl From<CombinedStyle> for StyleAttrs {
    fn from(combined: CombinedStyle) -> Self {
        StyleAttrs::Combined(combined)
    }
}

impl fmt::Display for StyleAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleAttrs::Text(text) => write!(f, "{}", text),
            StyleAttrs::Layout(layout) => write!(f, "{}", layout),
            StyleAttrs::Combined(combined) => {
                let text = combined.text.to_string();
                let layout = combined.layout.to_string();
                match (text.is_empty(), layout.is_empty()) {
                    (false, false) => write!(f, "{}; {}", text, layout),
                    (false, true) => f.write_str(&text),
                    _ => f.write_str(&layout),
                }
            }
            StyleAttrs::Extension(ext) => write!(f, "<{}>", ext.name()),
        }
    }
}
