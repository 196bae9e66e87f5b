use folio_idf::{Node, NodeKind, StyleDescriptor};
use folio_render_core::{Backend, HookTable, RenderError, Resolver};
use itertools::Itertools;

/// Writes every table row as a CSV record; tables are separated by a blank
/// line.
///
/// Prose kinds are skipped on purpose. Any other kind without a hook
/// (pictures) cannot be represented and fails the render.
#[derive(Debug, Default)]
pub struct CsvRenderer {
    out: String,
    record: Option<Vec<String>>,
    tables: usize,
}

impl CsvRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn cell(
        &mut self,
        node: &Node,
        _style: Option<&StyleDescriptor>,
        _resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        let record = self.record.as_mut().ok_or_else(|| {
            RenderError::Backend(format!("{} outside of a table row", node.kind()))
        })?;
        record.push(quote(node.text().unwrap_or_default()));
        Ok(())
    }

    fn skip(
        &mut self,
        node: &Node,
        _style: Option<&StyleDescriptor>,
        _resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        log::trace!("CSV output skips {} nodes", node.kind());
        Ok(())
    }
}

impl Backend for CsvRenderer {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn hooks() -> HookTable<Self> {
        HookTable::new()
            .on_each(&[NodeKind::TableCell, NodeKind::HeaderCell], CsvRenderer::cell)
            .on_each(
                &[
                    NodeKind::Title,
                    NodeKind::Heading,
                    NodeKind::Paragraph,
                    NodeKind::Separator,
                    NodeKind::Footer,
                ],
                CsvRenderer::skip,
            )
    }

    fn begin_composite(
        &mut self,
        node: &Node,
        _resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        match node.kind() {
            NodeKind::Table => {
                if self.tables > 0 {
                    self.out.push('\n');
                }
                self.tables += 1;
            }
            NodeKind::TableRow | NodeKind::HeaderRow => self.record = Some(Vec::new()),
            _ => {}
        }
        Ok(())
    }

    fn end_composite(&mut self, node: &Node, _resolver: &Resolver<'_>) -> Result<(), RenderError> {
        if matches!(node.kind(), NodeKind::TableRow | NodeKind::HeaderRow)
            && let Some(record) = self.record.take()
        {
            self.out.push_str(&record.iter().join(","));
            self.out.push('\n');
        }
        Ok(())
    }

    fn on_missing_hook(&mut self, node: &Node) -> Result<(), RenderError> {
        Err(RenderError::MissingHook {
            backend: self.name(),
            kind: node.kind(),
        })
    }
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render_core::{Dispatcher, RenderContext, StyleRegistry};

    fn render(root: &Node) -> Result<String, RenderError> {
        let registry = StyleRegistry::new();
        let ctx = RenderContext::new();
        let resolver = Resolver::new(&registry, &ctx);
        let mut csv = CsvRenderer::new();
        Dispatcher::default().walk(root, &resolver, &mut csv)?;
        Ok(csv.finish())
    }

    fn table(rows: &[&[&str]]) -> Node {
        Node::table()
            .with_children(rows.iter().map(|cells| {
                Node::row()
                    .with_children(cells.iter().map(|text| Node::cell(*text)))
                    .unwrap()
            }))
            .unwrap()
    }

    #[test]
    fn test_tables_become_records() {
        let doc = Node::document()
            .with_children([
                Node::title("ignored"),
                table(&[&["a", "b,c"], &["say \"hi\"", ""]]),
                Node::paragraph("also ignored"),
                table(&[&["x"]]),
            ])
            .unwrap();
        assert_eq!(render(&doc).unwrap(), "a,\"b,c\"\n\"say \"\"hi\"\"\",\n\nx\n");
    }

    #[test]
    fn test_picture_is_rejected() {
        let doc = Node::document()
            .with_children([table(&[&["a"]]), Node::picture("chart.png")])
            .unwrap();
        assert!(matches!(
            render(&doc),
            Err(RenderError::MissingHook {
                backend: "csv",
                kind: NodeKind::Picture
            })
        ));
    }
}
