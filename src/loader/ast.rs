//! The JSON document format as parsed by serde. This is the **input**
//! representation; [`super::build_node`] turns it into a composition tree.

use serde::{Deserialize, Serialize};

/// A whole input file: registered styles plus the document tree.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct JsonDocument {
    #[serde(rename = "_styles", default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<JsonStyleRule>,
    #[serde(rename = "_document")]
    pub document: JsonNode,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "type")]
#[serde(rename_all = "PascalCase")]
pub enum JsonNode {
    // Composites
    Document(JsonContainer),
    Table(JsonContainer),
    TableRow(JsonContainer),
    HeaderRow(JsonContainer),
    // Leaves
    Title(JsonText),
    Heading(JsonHeading),
    Paragraph(JsonText),
    TableCell(JsonText),
    HeaderCell(JsonText),
    Footer(JsonText),
    Separator(JsonLeaf),
    Picture(JsonPicture),
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JsonContainer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// A style pushed onto descendants that have none of their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cascade: Option<JsonCascade>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonNode>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JsonCascade {
    pub style: String,
    /// Restricts the cascade to one node kind and its subtypes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Negative or absent means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JsonText {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JsonHeading {
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

fn default_level() -> u8 {
    1
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JsonLeaf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JsonPicture {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// One registry entry. Entries are registered in file order.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JsonStyleRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<JsonWhen>,
    pub style: String,
}

/// Predicate clauses; every clause present must hold.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JsonWhen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<JsonRowSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_contains: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum JsonRowSelector {
    Index(usize),
    Parity(Parity),
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}
