#![allow(dead_code)]

use serde_json::{json, Value};

/// Create a document with registered styles and top-level children
pub fn document(styles: Vec<Value>, children: Vec<Value>) -> Value {
    json!({
        "_styles": styles,
        "_document": {
            "type": "Document",
            "children": children
        }
    })
}

/// Create a registry rule
pub fn rule(target: &str, when: Option<Value>, style: &str) -> Value {
    match when {
        Some(when) => json!({ "target": target, "when": when, "style": style }),
        None => json!({ "target": target, "style": style }),
    }
}

pub fn title(text: &str) -> Value {
    json!({ "type": "Title", "text": text })
}

pub fn heading(level: u8, text: &str) -> Value {
    json!({ "type": "Heading", "level": level, "text": text })
}

pub fn paragraph(text: &str) -> Value {
    json!({ "type": "Paragraph", "text": text })
}

pub fn separator() -> Value {
    json!({ "type": "Separator" })
}

pub fn footer(text: &str) -> Value {
    json!({ "type": "Footer", "text": text })
}

pub fn picture(src: &str, caption: &str) -> Value {
    json!({ "type": "Picture", "src": src, "caption": caption })
}

pub fn table(rows: Vec<Value>) -> Value {
    json!({ "type": "Table", "children": rows })
}

pub fn header_row(cells: &[&str]) -> Value {
    json!({
        "type": "HeaderRow",
        "children": cells.iter().map(|c| header_cell(c)).collect::<Vec<_>>()
    })
}

pub fn table_row(cells: Vec<Value>) -> Value {
    json!({ "type": "TableRow", "children": cells })
}

/// A data row of plain cells
pub fn data_row(cells: &[&str]) -> Value {
    table_row(cells.iter().map(|c| table_cell(c)).collect())
}

pub fn table_cell(text: &str) -> Value {
    json!({ "type": "TableCell", "text": text })
}

pub fn header_cell(text: &str) -> Value {
    json!({ "type": "HeaderCell", "text": text })
}

/// Attach an inline style to any node fixture
pub fn styled(mut node: Value, style: &str) -> Value {
    node["style"] = json!(style);
    node
}

/// Attach a cascade to a container fixture
pub fn with_cascade(
    mut node: Value,
    style: &str,
    target: Option<&str>,
    depth: Option<i64>,
) -> Value {
    let mut cascade = json!({ "style": style });
    if let Some(target) = target {
        cascade["target"] = json!(target);
    }
    if let Some(depth) = depth {
        cascade["depth"] = json!(depth);
    }
    node["cascade"] = cascade;
    node
}
