use folio_idf::{Content, Node, NodeKind, StyleDescriptor};
use folio_render_core::{Backend, HookTable, RenderError, Resolver};
use std::fmt::Write;

/// An indented, human-readable dump of the tree and each node's resolved
/// style. Every node kind is handled.
#[derive(Debug, Default)]
pub struct OutlineRenderer {
    out: String,
    indent: usize,
    depth: usize,
}

impl OutlineRenderer {
    pub fn new(indent: usize) -> Self {
        Self {
            out: String::new(),
            indent,
            depth: 0,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, node: &Node, style: Option<&StyleDescriptor>) -> Result<(), RenderError> {
        let pad = self.depth * self.indent;
        write!(self.out, "{:pad$}{}", "", node.kind(), pad = pad)?;
        if let Some(style) = style {
            write!(self.out, " [{}]", style.attrs())?;
        }
        match node.content() {
            Some(Content::Heading { level, text }) => write!(self.out, " h{} {:?}", level, text)?,
            Some(Content::Text(text)) => write!(self.out, " {:?}", text)?,
            Some(Content::Picture { source, caption }) => {
                write!(self.out, " <{}>", source)?;
                if let Some(caption) = caption {
                    write!(self.out, " {:?}", caption)?;
                }
            }
            Some(Content::Empty) | None => {}
        }
        self.out.push('\n');
        Ok(())
    }

    fn leaf(
        &mut self,
        node: &Node,
        style: Option<&StyleDescriptor>,
        _resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        self.line(node, style)
    }
}

impl Backend for OutlineRenderer {
    fn name(&self) -> &'static str {
        "outline"
    }

    fn hooks() -> HookTable<Self> {
        let leaves: Vec<NodeKind> = NodeKind::ALL
            .into_iter()
            .filter(|kind| *kind != NodeKind::Element && !kind.is_composite())
            .collect();
        HookTable::new().on_each(&leaves, OutlineRenderer::leaf)
    }

    fn begin_composite(&mut self, node: &Node, resolver: &Resolver<'_>) -> Result<(), RenderError> {
        let style = resolver.prepare_style_from(node)?;
        self.line(node, style.as_deref())?;
        self.depth += 1;
        Ok(())
    }

    fn end_composite(&mut self, _node: &Node, _resolver: &Resolver<'_>) -> Result<(), RenderError> {
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }
}
