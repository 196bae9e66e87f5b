//! Loads a composition tree and its style registry from JSON.
//!
//! ```json
//! {
//!   "_styles": [
//!     { "target": "TableCell", "when": { "column": 0 }, "style": "bold" }
//!   ],
//!   "_document": { "type": "Document", "children": [ ... ] }
//! }
//! ```

pub mod ast;

use self::ast::{
    JsonCascade, JsonContainer, JsonDocument, JsonNode, JsonRowSelector, JsonStyleRule, JsonWhen,
    Parity,
};
use crate::error::PipelineError;
use crate::render::CssClasses;
use folio_idf::{Condition, Content, Depth, IdfError, Node, NodeKind, StyleDescriptor};
use folio_render_core::StyleRegistry;
use folio_style::parse_declarations;
use serde_json::Value;
use std::path::Path;

/// A parsed input file, ready to render.
#[derive(Debug)]
pub struct LoadedDocument {
    pub registry: StyleRegistry,
    pub root: Node,
}

pub fn load_str(json: &str) -> Result<LoadedDocument, PipelineError> {
    let document: JsonDocument = serde_json::from_str(json)?;
    build_document(&document)
}

pub fn load_value(value: Value) -> Result<LoadedDocument, PipelineError> {
    let document: JsonDocument = serde_json::from_value(value)?;
    build_document(&document)
}

pub fn load_file(path: impl AsRef<Path>) -> Result<LoadedDocument, PipelineError> {
    let path = path.as_ref();
    log::info!("Loading document from {}", path.display());
    load_str(&std::fs::read_to_string(path)?)
}

pub fn build_document(document: &JsonDocument) -> Result<LoadedDocument, PipelineError> {
    let mut registry = StyleRegistry::new();
    for (index, rule) in document.styles.iter().enumerate() {
        let style = build_style_rule(rule).map_err(|e| {
            PipelineError::Stylesheet(format!("style rule #{}: {}", index, e))
        })?;
        registry.add(style);
    }
    let root = build_node(&document.document)?;
    log::debug!(
        "Loaded {} nodes and {} registered styles",
        root.descendants().count(),
        registry.len()
    );
    Ok(LoadedDocument { registry, root })
}

pub fn build_style_rule(rule: &JsonStyleRule) -> Result<StyleDescriptor, PipelineError> {
    let target = rule.target.as_deref().map(parse_kind).transpose()?;
    let style = parse_style(&rule.style)?;
    Ok(match build_condition(target, rule.when.as_ref()) {
        Some(condition) => style.when(condition),
        None => style,
    })
}

/// Builds a node and its subtree. Children are appended in file order, so
/// table positions follow the document.
pub fn build_node(json: &JsonNode) -> Result<Node, PipelineError> {
    let (node, style) = match json {
        JsonNode::Document(c) => return build_container(Node::document(), c),
        JsonNode::Table(c) => return build_container(Node::table(), c),
        JsonNode::TableRow(c) => return build_container(Node::row(), c),
        JsonNode::HeaderRow(c) => return build_container(Node::header_row(), c),
        JsonNode::Title(t) => (Node::title(&t.text), &t.style),
        JsonNode::Heading(h) => (Node::heading(h.level, &h.text), &h.style),
        JsonNode::Paragraph(t) => (Node::paragraph(&t.text), &t.style),
        JsonNode::TableCell(t) => (Node::cell(&t.text), &t.style),
        JsonNode::HeaderCell(t) => (Node::header_cell(&t.text), &t.style),
        JsonNode::Footer(t) => (Node::footer(&t.text), &t.style),
        JsonNode::Separator(l) => (Node::separator(), &l.style),
        JsonNode::Picture(p) => (
            Node::new(NodeKind::Picture).with_content(Content::Picture {
                source: p.src.as_str().into(),
                caption: p.caption.clone(),
            }),
            &p.style,
        ),
    };
    with_inline_style(node, style.as_deref())
}

fn build_container(node: Node, json: &JsonContainer) -> Result<Node, PipelineError> {
    let mut node = with_inline_style(node, json.style.as_deref())?;
    for child in &json.children {
        node.append(build_node(child)?)?;
    }
    if let Some(cascade) = &json.cascade {
        apply_cascade(&mut node, cascade)?;
    }
    Ok(node)
}

fn apply_cascade(node: &mut Node, cascade: &JsonCascade) -> Result<(), PipelineError> {
    let mut style = parse_style(&cascade.style)?;
    if let Some(target) = cascade.target.as_deref() {
        style = style.when(Condition::for_kind(parse_kind(target)?));
    }
    let depth = cascade.depth.map(Depth::from_signed).unwrap_or_default();
    node.cascade(&style, depth)?;
    Ok(())
}

fn with_inline_style(node: Node, style: Option<&str>) -> Result<Node, PipelineError> {
    Ok(match style {
        Some(declarations) => node.with_style(parse_style(declarations)?),
        None => node,
    })
}

/// Declarations (`bold; align: right`) or, with a leading dot, HTML classes
/// (`.total .wide`).
fn parse_style(declarations: &str) -> Result<StyleDescriptor, PipelineError> {
    let trimmed = declarations.trim();
    if trimmed.starts_with('.') {
        return Ok(StyleDescriptor::new(CssClasses::parse(trimmed).into_attrs()));
    }
    Ok(StyleDescriptor::new(parse_declarations(trimmed)?))
}

fn parse_kind(name: &str) -> Result<NodeKind, PipelineError> {
    name.parse().map_err(PipelineError::Stylesheet)
}

/// Turns a rule's target and `when` clauses into a condition. A rule with
/// neither applies to every node.
fn build_condition(target: Option<NodeKind>, when: Option<&JsonWhen>) -> Option<Condition> {
    let target_kind = target.unwrap_or(NodeKind::Element);
    let Some(when) = when else {
        return target.map(Condition::for_kind);
    };

    let label = serde_json::to_string(when).unwrap_or_default();
    let when = when.clone();
    let condition = Condition::try_new(target_kind, move |node| {
        if let Some(column) = when.column
            && node.column_index()? != column
        {
            return Ok(false);
        }
        if let Some(selector) = when.row {
            let row = node.row_index()?;
            let selected = match selector {
                JsonRowSelector::Index(index) => row == index,
                JsonRowSelector::Parity(Parity::Even) => row % 2 == 0,
                JsonRowSelector::Parity(Parity::Odd) => row % 2 == 1,
            };
            if !selected {
                return Ok(false);
            }
        }
        if let Some(level) = when.level {
            let actual = node.heading_level().ok_or(IdfError::MissingField {
                kind: node.kind(),
                field: "heading level",
            })?;
            if actual != level {
                return Ok(false);
            }
        }
        if let Some(needle) = &when.text_contains
            && !node.text().is_some_and(|text| text.contains(needle.as_str()))
        {
            return Ok(false);
        }
        Ok(true)
    });
    Some(condition.labeled(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::{Border, BorderWeight, HorizontalAlign};
    use folio_types::Color;
    use serde_json::json;

    #[test]
    fn test_builds_tree_with_positions() {
        let loaded = load_value(json!({
            "_document": {
                "type": "Document",
                "children": [
                    { "type": "Heading", "level": 2, "text": "Report" },
                    { "type": "Table", "children": [
                        { "type": "HeaderRow", "children": [
                            { "type": "HeaderCell", "text": "Name" },
                            { "type": "HeaderCell", "text": "Qty" }
                        ]},
                        { "type": "TableRow", "children": [
                            { "type": "TableCell", "text": "Apples" },
                            { "type": "TableCell", "text": "3", "style": "align: right" }
                        ]}
                    ]},
                    { "type": "Separator" },
                    { "type": "Picture", "src": "logo.png", "caption": "Logo" }
                ]
            }
        }))
        .unwrap();

        assert!(loaded.registry.is_empty());
        let root = &loaded.root;
        assert_eq!(root.children()[0].heading_level(), Some(2));
        let qty = &root.children()[1].children()[1].children()[1];
        assert_eq!(qty.row_index().unwrap(), 1);
        assert_eq!(qty.column_index().unwrap(), 1);
        assert_eq!(
            qty.own_style().unwrap().attrs().layout().unwrap().horizontal_align,
            Some(HorizontalAlign::Right)
        );
        assert_eq!(root.children()[3].text(), Some("Logo"));
    }

    #[test]
    fn test_rules_keep_file_order_and_conditions() {
        let loaded = load_value(json!({
            "_styles": [
                { "target": "TableCell", "when": { "column": 0 }, "style": "bold" },
                { "target": "TableCell", "when": { "row": "odd" }, "style": "italic" },
                { "style": "font-size: 10pt" }
            ],
            "_document": { "type": "Table", "children": [
                { "type": "TableRow", "children": [
                    { "type": "TableCell", "text": "a" },
                    { "type": "TableCell", "text": "b" }
                ]},
                { "type": "TableRow", "children": [
                    { "type": "TableCell", "text": "c" },
                    { "type": "TableCell", "text": "d" }
                ]}
            ]}
        }))
        .unwrap();

        let registry = &loaded.registry;
        assert_eq!(registry.len(), 3);
        let table = &loaded.root;
        let text_of = |row: usize, col: usize| {
            let cell = &table.children()[row].children()[col];
            registry
                .extract_style_for(cell)
                .unwrap()
                .unwrap()
                .attrs()
                .text()
                .cloned()
                .unwrap()
        };
        assert_eq!(text_of(0, 0).bold, Some(true));
        assert_eq!(text_of(1, 0).bold, Some(true));
        assert_eq!(text_of(1, 1).italic, Some(true));
        assert_eq!(text_of(0, 1).font_size, Some(10.0));
        // The catch-all also reaches the table itself.
        assert!(registry.extract_style_for(table).unwrap().is_some());
    }

    #[test]
    fn test_container_cascade() {
        let loaded = load_value(json!({
            "_document": { "type": "Table",
                "cascade": { "style": "border: thin red", "target": "TableCell" },
                "children": [
                    { "type": "TableRow", "children": [
                        { "type": "TableCell", "text": "a", "style": "border: thick blue" },
                        { "type": "TableCell", "text": "b" }
                    ]}
                ]
            }
        }))
        .unwrap();

        let row = &loaded.root.children()[0];
        assert!(!row.has_own_style());
        let border_of = |i: usize| {
            row.children()[i]
                .own_style()
                .unwrap()
                .attrs()
                .layout()
                .unwrap()
                .border_top
                .clone()
        };
        assert_eq!(border_of(0), Some(Border::new(BorderWeight::Thick, Color::BLUE)));
        assert_eq!(border_of(1), Some(Border::thin(Color::RED)));
    }

    #[test]
    fn test_class_styles() {
        let loaded = load_value(json!({
            "_document": { "type": "Paragraph", "text": "p", "style": ".note .small" }
        }))
        .unwrap();
        let attrs = loaded.root.own_style().unwrap().attrs();
        let classes = attrs
            .extension()
            .and_then(|ext| ext.as_any().downcast_ref::<CssClasses>())
            .unwrap();
        assert_eq!(classes.0, vec!["note", "small"]);
    }

    #[test]
    fn test_invalid_inputs() {
        let bad_child = load_value(json!({
            "_document": { "type": "Document", "children": [ { "type": "TableCell", "text": "x" } ] }
        }));
        assert!(matches!(
            bad_child,
            Err(PipelineError::Idf(IdfError::InvalidChild { .. }))
        ));

        let bad_target = load_value(json!({
            "_styles": [ { "target": "Spreadsheet", "style": "bold" } ],
            "_document": { "type": "Document" }
        }));
        assert!(matches!(bad_target, Err(PipelineError::Stylesheet(_))));

        let bad_property = load_value(json!({
            "_document": { "type": "Paragraph", "text": "p", "style": "sparkle: yes" }
        }));
        assert!(matches!(bad_property, Err(PipelineError::Style(_))));
    }

    #[test]
    fn test_misused_clause_is_a_lazy_fault() {
        let loaded = load_value(json!({
            "_styles": [ { "target": "Paragraph", "when": { "column": 1 }, "style": "bold" } ],
            "_document": { "type": "Document", "children": [ { "type": "Paragraph", "text": "p" } ] }
        }))
        .unwrap();

        let paragraph = &loaded.root.children()[0];
        assert!(matches!(
            loaded.registry.extract_style_for(paragraph),
            Err(IdfError::Predicate { target: NodeKind::Paragraph, .. })
        ));
    }
}
