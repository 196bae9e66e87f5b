use folio_style::{FontFamily, TextStyle};
use std::collections::HashMap;

/// Lookup tables consulted while rendering one document.
///
/// Created per render and passed by reference to every backend hook, so two
/// renders never observe each other's aliases or locale.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    locale: Option<String>,
    font_aliases: HashMap<FontFamily, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Maps a family class (or a named family) onto a concrete family name.
    pub fn with_font_alias(mut self, family: FontFamily, name: impl Into<String>) -> Self {
        self.font_aliases.insert(family, name.into());
        self
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn font_name<'a>(&'a self, family: &'a FontFamily) -> &'a str {
        if let Some(alias) = self.font_aliases.get(family) {
            return alias;
        }
        match family {
            FontFamily::Serif => "Times New Roman",
            FontFamily::SansSerif => "Helvetica",
            FontFamily::Monospace => "Courier",
            FontFamily::Named(name) => name,
        }
    }

    /// The style's own locale hint, falling back to the render's locale.
    pub fn locale_for<'a>(&'a self, style: &'a TextStyle) -> Option<&'a str> {
        style.locale.as_deref().or(self.locale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_defaults_and_aliases() {
        let ctx = RenderContext::new().with_font_alias(FontFamily::Serif, "Georgia");
        assert_eq!(ctx.font_name(&FontFamily::Serif), "Georgia");
        assert_eq!(ctx.font_name(&FontFamily::Monospace), "Courier");
        assert_eq!(ctx.font_name(&FontFamily::Named("Inter".into())), "Inter");
    }

    #[test]
    fn test_locale_fallback() {
        let ctx = RenderContext::new().with_locale("en-GB");
        let mut style = TextStyle::new();
        assert_eq!(ctx.locale_for(&style), Some("en-GB"));
        style.locale = Some("de-DE".into());
        assert_eq!(ctx.locale_for(&style), Some("de-DE"));
        assert_eq!(RenderContext::new().locale_for(&TextStyle::new()), None);
    }
}
