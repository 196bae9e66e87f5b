use crate::condition::Condition;
use crate::error::IdfError;
use crate::kind::NodeKind;
use crate::node::Node;
use folio_style::{CombinedStyle, LayoutStyle, StyleAttrs, StyleError, TextStyle};
use std::fmt;

/// A partial set of visual attributes, optionally guarded by a condition.
///
/// Descriptors are never resolved in place: resolution works on copies made
/// with [`StyleDescriptor::try_clone`], which duplicates the attributes and
/// shares the condition.
#[derive(Debug, PartialEq)]
pub struct StyleDescriptor {
    attrs: StyleAttrs,
    condition: Option<Condition>,
}

impl StyleDescriptor {
    pub fn new(attrs: impl Into<StyleAttrs>) -> Self {
        Self {
            attrs: attrs.into(),
            condition: None,
        }
    }

    pub fn text(text: TextStyle) -> Self {
        Self::new(text)
    }

    pub fn layout(layout: LayoutStyle) -> Self {
        Self::new(layout)
    }

    pub fn combined(text: TextStyle, layout: LayoutStyle) -> Self {
        Self::new(CombinedStyle::new(text, layout))
    }

    /// Guards this descriptor with `condition`.
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn attrs(&self) -> &StyleAttrs {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut StyleAttrs {
        &mut self.attrs
    }

    pub fn into_attrs(self) -> StyleAttrs {
        self.attrs
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Deep copy: attributes are duplicated, the condition is shared.
    pub fn try_clone(&self) -> Result<Self, StyleError> {
        Ok(Self {
            attrs: self.attrs.try_clone()?,
            condition: self.condition.clone(),
        })
    }

    /// Registry eligibility: an unconditional descriptor applies everywhere.
    pub fn is_eligible_for(&self, node: &Node) -> Result<bool, IdfError> {
        match &self.condition {
            Some(condition) => condition.matches(node),
            None => Ok(true),
        }
    }

    /// Cascade eligibility: only the type half of the condition is consulted.
    pub fn accepts_kind(&self, kind: NodeKind) -> bool {
        self.condition
            .as_ref()
            .is_none_or(|condition| condition.admits(kind))
    }

    /// Fills unset slots from `donor`'s attributes. The condition of `self`
    /// is kept. Returns `false` for incompatible variants.
    pub fn join_from(&mut self, donor: &StyleDescriptor) -> bool {
        self.attrs.join_from(&donor.attrs)
    }
}

impl From<TextStyle> for StyleDescriptor {
    fn from(text: TextStyle) -> Self {
        Self::new(text)
    }
}

impl From<LayoutStyle> for StyleDescriptor {
    fn from(layout: LayoutStyle) -> Self {
        Self::new(layout)
    }
}

impl From<CombinedStyle> for StyleDescriptor {
    fn from(combined: CombinedStyle) -> Self {
        Self::new(combined)
    }
}

impl From<StyleAttrs> for StyleDescriptor {
    fn from(attrs: StyleAttrs) -> Self {
        Self::new(attrs)
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.attrs)?;
        if let Some(condition) = &self.condition {
            write!(f, " when {}", condition.target())?;
            if let Some(label) = condition.label() {
                write!(f, " ({})", label)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::{Border, HorizontalAlign};
    use folio_types::Color;

    #[test]
    fn test_clone_shares_condition_and_copies_attrs() {
        let original = StyleDescriptor::layout(LayoutStyle::new().border(Border::thin(Color::RED)))
            .when(Condition::for_kind(NodeKind::TableCell));
        let mut copy = original.try_clone().unwrap();
        assert_eq!(original, copy);

        copy.attrs_mut().layout_mut().unwrap().border_left = Some(Border::none());
        assert_ne!(original, copy);
        assert_eq!(original.condition(), copy.condition());
    }

    #[test]
    fn test_unconditional_descriptor_is_universal() {
        let style = StyleDescriptor::text(TextStyle::new().bold(true));
        assert!(style.is_eligible_for(&Node::footer("f")).unwrap());
        assert!(style.accepts_kind(NodeKind::Picture));
    }

    #[test]
    fn test_accepts_kind_ignores_predicate() {
        let style = StyleDescriptor::text(TextStyle::new())
            .when(Condition::new(NodeKind::TableCell, |_| false));
        assert!(style.accepts_kind(NodeKind::HeaderCell));
        assert!(!style.accepts_kind(NodeKind::Paragraph));
        assert!(!style.is_eligible_for(&Node::cell("c")).unwrap());
    }

    #[test]
    fn test_join_keeps_target_condition() {
        let condition = Condition::for_kind(NodeKind::Heading);
        let mut target = StyleDescriptor::layout(LayoutStyle::new().align(HorizontalAlign::Right))
            .when(condition.clone());
        let donor = StyleDescriptor::layout(LayoutStyle::new().align(HorizontalAlign::Left));

        assert!(target.join_from(&donor));
        assert_eq!(target.condition(), Some(&condition));
        assert_eq!(
            target.attrs().layout().unwrap().horizontal_align,
            Some(HorizontalAlign::Right)
        );
    }
}
