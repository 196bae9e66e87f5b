use folio_idf::{IdfError, Node, StyleDescriptor};
use std::fmt;

/// An ordered collection of style descriptors owned by one render.
///
/// Lookup scans in insertion order and returns the first eligible entry, so
/// registration order is the precedence between overlapping styles. Entries
/// are never deduplicated and never mutated by resolution.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: Vec<StyleDescriptor>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles<I>(styles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StyleDescriptor>,
    {
        let mut registry = Self::new();
        registry.extend(styles);
        registry
    }

    pub fn add(&mut self, style: impl Into<StyleDescriptor>) -> &mut Self {
        let style = style.into();
        log::trace!("Registering style #{}: {}", self.styles.len(), style);
        self.styles.push(style);
        self
    }

    /// Removes the first entry equal to `style`. Returns whether one was found.
    pub fn remove(&mut self, style: &StyleDescriptor) -> bool {
        match self.styles.iter().position(|s| s == style) {
            Some(index) => {
                self.styles.remove(index);
                log::trace!("Removed style #{}", index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, style: &StyleDescriptor) -> bool {
        self.styles.iter().any(|s| s == style)
    }

    pub fn styles(&self) -> &[StyleDescriptor] {
        &self.styles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyleDescriptor> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn clear(&mut self) {
        self.styles.clear();
    }

    /// The first registered descriptor eligible for `node`, if any.
    ///
    /// An unconditional descriptor is eligible for every node.
    pub fn extract_style_for(&self, node: &Node) -> Result<Option<&StyleDescriptor>, IdfError> {
        for style in &self.styles {
            if style.is_eligible_for(node)? {
                return Ok(Some(style));
            }
        }
        Ok(None)
    }

    /// Every descriptor eligible for `node`, in registration order.
    pub fn matches_for(&self, node: &Node) -> Result<Vec<&StyleDescriptor>, IdfError> {
        let mut matches = Vec::new();
        for style in &self.styles {
            if style.is_eligible_for(node)? {
                matches.push(style);
            }
        }
        Ok(matches)
    }
}

impl<S: Into<StyleDescriptor>> Extend<S> for StyleRegistry {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for style in iter {
            self.add(style);
        }
    }
}

impl<'a> IntoIterator for &'a StyleRegistry {
    type Item = &'a StyleDescriptor;
    type IntoIter = std::slice::Iter<'a, StyleDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for StyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, style) in self.styles.iter().enumerate() {
            writeln!(f, "{:>3}: {}", i, style)?;
        }
        Ok(())
    }
}
