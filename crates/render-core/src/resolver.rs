use crate::context::RenderContext;
use crate::error::RenderError;
use crate::registry::StyleRegistry;
use folio_idf::{Node, StyleDescriptor};
use std::ops::Deref;

/// The style a backend receives for a node.
///
/// Borrowed variants point at the node's own style or at a registry entry;
/// only a merge of the two produces a new descriptor.
#[derive(Debug)]
pub enum EffectiveStyle<'a> {
    Own(&'a StyleDescriptor),
    Registry(&'a StyleDescriptor),
    Merged(StyleDescriptor),
}

impl EffectiveStyle<'_> {
    /// An owned copy, e.g. for a backend that caches resolved styles.
    pub fn to_owned_style(&self) -> Result<StyleDescriptor, RenderError> {
        Ok(self.deref().try_clone()?)
    }
}

impl Deref for EffectiveStyle<'_> {
    type Target = StyleDescriptor;

    fn deref(&self) -> &StyleDescriptor {
        match self {
            EffectiveStyle::Own(style) | EffectiveStyle::Registry(style) => style,
            EffectiveStyle::Merged(style) => style,
        }
    }
}

/// Fills the unset slots of `target` from `donor` and returns it.
///
/// Joining incompatible variants leaves `target` unchanged.
pub fn join(donor: &StyleDescriptor, mut target: StyleDescriptor) -> StyleDescriptor {
    if !target.join_from(donor) {
        log::trace!(
            "Skipped join of {} into {}",
            donor.attrs().variant_name(),
            target.attrs().variant_name()
        );
    }
    target
}

/// Resolves effective styles against one registry and context.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a StyleRegistry,
    context: &'a RenderContext,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a StyleRegistry, context: &'a RenderContext) -> Self {
        Self { registry, context }
    }

    pub fn registry(&self) -> &'a StyleRegistry {
        self.registry
    }

    pub fn context(&self) -> &'a RenderContext {
        self.context
    }

    pub fn extract_style_for(
        &self,
        node: &Node,
    ) -> Result<Option<&'a StyleDescriptor>, RenderError> {
        Ok(self.registry.extract_style_for(node)?)
    }

    /// The node's own style with registry attributes filling its unset slots.
    ///
    /// Neither the registry entry nor the node's style is modified; the
    /// merge happens on a copy of the own style.
    pub fn prepare_style_from<'n>(
        &self,
        node: &'n Node,
    ) -> Result<Option<EffectiveStyle<'n>>, RenderError>
    where
        'a: 'n,
    {
        let registered = self.extract_style_for(node)?;
        Ok(match (node.own_style(), registered) {
            (None, None) => None,
            (Some(own), None) => Some(EffectiveStyle::Own(own)),
            (None, Some(registered)) => Some(EffectiveStyle::Registry(registered)),
            (Some(own), Some(registered)) => {
                Some(EffectiveStyle::Merged(join(registered, own.try_clone()?)))
            }
        })
    }

    pub fn join(&self, donor: &StyleDescriptor, target: StyleDescriptor) -> StyleDescriptor {
        join(donor, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_idf::{Condition, NodeKind};
    use folio_style::{Border, HorizontalAlign, Join, LayoutStyle, TextStyle};
    use folio_types::Color;

    #[test]
    fn test_heading_scenario() {
        let registry = StyleRegistry::with_styles([StyleDescriptor::text(
            TextStyle::new().bold(true),
        )
        .when(Condition::for_kind(NodeKind::Heading))]);
        let ctx = RenderContext::new();
        let resolver = Resolver::new(&registry, &ctx);

        let doc = Node::document()
            .with_children([Node::heading(1, "h1"), Node::paragraph("p1")])
            .unwrap();

        let heading = resolver.prepare_style_from(&doc.children()[0]).unwrap().unwrap();
        assert!(matches!(heading, EffectiveStyle::Registry(_)));
        assert_eq!(heading.attrs().text(), Some(&TextStyle::new().bold(true)));
        assert!(resolver.prepare_style_from(&doc.children()[1]).unwrap().is_none());
    }

    #[test]
    fn test_own_style_takes_precedence() {
        let registry = StyleRegistry::with_styles([StyleDescriptor::layout(
            LayoutStyle::new()
                .align(HorizontalAlign::Left)
                .border(Border::thin(Color::RED)),
        )]);
        let ctx = RenderContext::new();
        let resolver = Resolver::new(&registry, &ctx);

        let own = LayoutStyle::new().align(HorizontalAlign::Right);
        let cell = Node::cell("x").with_style(own.clone());
        let effective = resolver.prepare_style_from(&cell).unwrap().unwrap();

        let layout = effective.attrs().layout().unwrap();
        assert_eq!(layout.horizontal_align, Some(HorizontalAlign::Right));
        assert_eq!(layout.border_left, Some(Border::thin(Color::RED)));

        // Equal to join(R, copy(O)).
        let expected = join(&registry.styles()[0], StyleDescriptor::layout(own.clone()));
        assert_eq!(*effective, expected);

        // Nothing was modified in place.
        assert_eq!(cell.own_style(), Some(&StyleDescriptor::layout(own)));
        assert_eq!(
            registry.styles()[0].attrs().layout().unwrap().horizontal_align,
            Some(HorizontalAlign::Left)
        );
    }

    #[test]
    fn test_own_style_alone_is_borrowed() {
        let registry = StyleRegistry::new();
        let ctx = RenderContext::new();
        let resolver = Resolver::new(&registry, &ctx);
        let node = Node::footer("f").with_style(TextStyle::new().italic(true));
        assert!(matches!(
            resolver.prepare_style_from(&node).unwrap(),
            Some(EffectiveStyle::Own(_))
        ));
    }

    #[test]
    fn test_join_scenario_preserves_target() {
        let donor = StyleDescriptor::layout(LayoutStyle::new().align(HorizontalAlign::Left));
        let target = StyleDescriptor::layout(
            LayoutStyle::new()
                .align(HorizontalAlign::Right)
                .border(Border::none()),
        );
        let joined = join(&donor, target);
        let layout = joined.attrs().layout().unwrap();
        assert_eq!(layout.horizontal_align, Some(HorizontalAlign::Right));
        assert_eq!(layout.border_top, Some(Border::none()));
    }

    #[test]
    fn test_join_is_idempotent() {
        let donor = StyleDescriptor::combined(
            TextStyle::new().bold(true).color(Color::BLUE),
            LayoutStyle::new().background(Color::GRAY),
        );
        let target = StyleDescriptor::text(TextStyle::new().bold(false));

        let once = join(&donor, target);
        let twice = join(&donor, once.try_clone().unwrap());
        assert_eq!(once, twice);
        assert_eq!(once.attrs().text().unwrap().bold, Some(false));
        assert_eq!(once.attrs().text().unwrap().color, Some(Color::BLUE));
    }

    #[test]
    fn test_incompatible_join_keeps_target() {
        let donor = StyleDescriptor::layout(LayoutStyle::new().align(HorizontalAlign::Center));
        let target = StyleDescriptor::text(TextStyle::new().bold(true));
        let joined = join(&donor, target);
        assert_eq!(joined, StyleDescriptor::text(TextStyle::new().bold(true)));

        let mut text = TextStyle::new();
        text.join_from(&TextStyle::new().underline(true));
        assert_eq!(text.underline, Some(true));
    }
}
