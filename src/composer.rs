use crate::config::RenderConfig;
use crate::error::PipelineError;
use crate::loader::LoadedDocument;
use crate::render::{CsvRenderer, HtmlRenderer, OutlineRenderer};
use folio_idf::{CascadeReport, Depth, Node, StyleDescriptor};
use folio_render_core::{Backend, Dispatcher, Resolver, StyleRegistry, WalkStats};
use std::str::FromStr;

/// The built-in output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Outline,
    Html,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('-').to_ascii_lowercase().as_str() {
            "outline" => Ok(OutputFormat::Outline),
            "html" => Ok(OutputFormat::Html),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(PipelineError::Config(format!("Unknown output format '{}'", other))),
        }
    }
}

/// One rendering session: a style registry plus the settings every render
/// in the session uses.
///
/// Each render gets its own [`RenderContext`](folio_render_core::RenderContext);
/// the registry is only read while rendering.
#[derive(Debug, Default)]
pub struct Composer {
    registry: StyleRegistry,
    config: RenderConfig,
}

impl Composer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            registry: StyleRegistry::new(),
            config,
        }
    }

    pub fn with_registry(registry: StyleRegistry, config: RenderConfig) -> Self {
        Self { registry, config }
    }

    /// Splits a loaded file into a session over its styles and its tree.
    pub fn from_loaded(loaded: LoadedDocument, config: RenderConfig) -> (Self, Node) {
        (Self::with_registry(loaded.registry, config), loaded.root)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut StyleRegistry {
        &mut self.registry
    }

    pub fn add_style(&mut self, style: impl Into<StyleDescriptor>) -> &mut Self {
        self.registry.add(style);
        self
    }

    /// The effective style of `node` as an owned descriptor.
    pub fn effective_style(&self, node: &Node) -> Result<Option<StyleDescriptor>, PipelineError> {
        let ctx = self.config.context();
        let resolver = Resolver::new(&self.registry, &ctx);
        match resolver.prepare_style_from(node)? {
            Some(style) => Ok(Some(style.to_owned_style()?)),
            None => Ok(None),
        }
    }

    pub fn cascade(
        &self,
        node: &mut Node,
        style: &StyleDescriptor,
        depth: Depth,
    ) -> Result<CascadeReport, PipelineError> {
        Ok(node.cascade(style, depth)?)
    }

    /// Cascades with the configured default depth.
    pub fn cascade_default(
        &self,
        node: &mut Node,
        style: &StyleDescriptor,
    ) -> Result<CascadeReport, PipelineError> {
        self.cascade(node, style, self.config.cascade_depth())
    }

    /// Walks `root` into `backend` with a fresh context.
    pub fn render<B: Backend>(
        &self,
        root: &Node,
        backend: &mut B,
    ) -> Result<WalkStats, PipelineError> {
        let ctx = self.config.context();
        let resolver = Resolver::new(&self.registry, &ctx);
        let stats = Dispatcher::new(self.config.dispatch).walk(root, &resolver, backend)?;
        Ok(stats)
    }

    pub fn render_html(&self, root: &Node) -> Result<String, PipelineError> {
        let mut html = HtmlRenderer::new(self.config.indent, self.config.glue_row_styles);
        self.render(root, &mut html)?;
        Ok(html.finish())
    }

    pub fn render_csv(&self, root: &Node) -> Result<String, PipelineError> {
        let mut csv = CsvRenderer::new();
        self.render(root, &mut csv)?;
        Ok(csv.finish())
    }

    pub fn render_outline(&self, root: &Node) -> Result<String, PipelineError> {
        let mut outline = OutlineRenderer::new(self.config.indent);
        self.render(root, &mut outline)?;
        Ok(outline.finish())
    }

    pub fn render_as(&self, format: OutputFormat, root: &Node) -> Result<String, PipelineError> {
        match format {
            OutputFormat::Outline => self.render_outline(root),
            OutputFormat::Html => self.render_html(root),
            OutputFormat::Csv => self.render_csv(root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_idf::{Condition, NodeKind};
    use folio_render_core::{DispatchPolicy, HookTable, RenderError};
    use folio_style::{LayoutStyle, TextStyle};
    use folio_types::Color;

    #[test]
    fn test_format_names() {
        assert_eq!("--html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_effective_style_merges_on_a_copy() {
        let mut composer = Composer::default();
        composer.add_style(
            StyleDescriptor::text(TextStyle::new().bold(true).color(Color::RED))
                .when(Condition::for_kind(NodeKind::Paragraph)),
        );
        let node = Node::paragraph("p").with_style(TextStyle::new().bold(false));

        let effective = composer.effective_style(&node).unwrap().unwrap();
        assert_eq!(
            effective.attrs().text(),
            Some(&TextStyle::new().bold(false).color(Color::RED))
        );
        assert_eq!(
            node.own_style().unwrap().attrs().text(),
            Some(&TextStyle::new().bold(false))
        );
    }

    #[test]
    fn test_default_depth_from_config() {
        let composer = Composer::new(RenderConfig {
            default_cascade_depth: 1,
            ..RenderConfig::default()
        });
        let mut table = Node::table()
            .with_children([Node::row().with_children([Node::cell("a")]).unwrap()])
            .unwrap();
        let report = composer
            .cascade_default(&mut table, &StyleDescriptor::layout(LayoutStyle::new()))
            .unwrap();
        assert_eq!(report.applied, 1);
        assert!(!table.children()[0].children()[0].has_own_style());
    }

    struct Silent;

    impl Backend for Silent {
        fn name(&self) -> &'static str {
            "silent"
        }

        fn hooks() -> HookTable<Self> {
            HookTable::new()
        }
    }

    #[test]
    fn test_dispatch_policy_from_config() {
        let doc = Node::document().with_children([Node::separator()]).unwrap();

        let lenient = Composer::default();
        assert_eq!(lenient.render(&doc, &mut Silent).unwrap().gaps, 1);

        let strict = Composer::new(RenderConfig {
            dispatch: DispatchPolicy::Strict,
            ..RenderConfig::default()
        });
        assert!(matches!(
            strict.render(&doc, &mut Silent),
            Err(PipelineError::Render(RenderError::MissingHook {
                kind: NodeKind::Separator,
                ..
            }))
        ));
    }
}
