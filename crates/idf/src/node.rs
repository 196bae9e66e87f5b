use crate::cascade::{self, CascadeReport, Depth};
use crate::descriptor::StyleDescriptor;
use crate::error::IdfError;
use crate::kind::NodeKind;
use folio_types::ResourceUri;

/// What a leaf node carries.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Heading { level: u8, text: String },
    Picture {
        source: ResourceUri,
        caption: Option<String>,
    },
}

/// Position of a row or cell inside its table. Stamped by the container on
/// append; rows carry no column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TablePosition {
    pub row: usize,
    pub column: Option<usize>,
}

#[derive(Debug)]
enum NodeBody {
    Leaf(Content),
    Composite(Vec<Node>),
}

/// A node of the composition tree.
///
/// The shape (leaf or composite) follows from the kind. Children are only
/// ever added through [`Node::append`], which keeps the positional stamps of
/// rows and cells consistent with their place in the table.
#[derive(Debug)]
pub struct Node {
    kind: NodeKind,
    style: Option<StyleDescriptor>,
    position: Option<TablePosition>,
    body: NodeBody,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        let body = if kind.is_composite() {
            NodeBody::Composite(Vec::new())
        } else {
            NodeBody::Leaf(Content::Empty)
        };
        Self {
            kind,
            style: None,
            position: None,
            body,
        }
    }

    fn leaf(kind: NodeKind, content: Content) -> Self {
        Self {
            body: NodeBody::Leaf(content),
            ..Self::new(kind)
        }
    }

    pub fn document() -> Self {
        Self::new(NodeKind::Document)
    }

    pub fn table() -> Self {
        Self::new(NodeKind::Table)
    }

    pub fn row() -> Self {
        Self::new(NodeKind::TableRow)
    }

    pub fn header_row() -> Self {
        Self::new(NodeKind::HeaderRow)
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Title, Content::Text(text.into()))
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::leaf(
            NodeKind::Heading,
            Content::Heading {
                level,
                text: text.into(),
            },
        )
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Paragraph, Content::Text(text.into()))
    }

    pub fn cell(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::TableCell, Content::Text(text.into()))
    }

    pub fn header_cell(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::HeaderCell, Content::Text(text.into()))
    }

    pub fn separator() -> Self {
        Self::new(NodeKind::Separator)
    }

    pub fn footer(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Footer, Content::Text(text.into()))
    }

    pub fn picture(source: impl Into<ResourceUri>) -> Self {
        Self::leaf(
            NodeKind::Picture,
            Content::Picture {
                source: source.into(),
                caption: None,
            },
        )
    }

    /// Replaces the content of a leaf. Composites are returned unchanged.
    pub fn with_content(mut self, content: Content) -> Self {
        if let NodeBody::Leaf(current) = &mut self.body {
            *current = content;
        }
        self
    }

    pub fn with_style(mut self, style: impl Into<StyleDescriptor>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Appends every child in order, failing on the first one rejected.
    pub fn with_children<I>(mut self, children: I) -> Result<Self, IdfError>
    where
        I: IntoIterator<Item = Node>,
    {
        self.append_all(children)?;
        Ok(self)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn own_style(&self) -> Option<&StyleDescriptor> {
        self.style.as_ref()
    }

    pub fn own_style_mut(&mut self) -> Option<&mut StyleDescriptor> {
        self.style.as_mut()
    }

    pub fn has_own_style(&self) -> bool {
        self.style.is_some()
    }

    /// Sets (or clears) the node's own style, returning the previous one.
    pub fn set_own_style(&mut self, style: Option<StyleDescriptor>) -> Option<StyleDescriptor> {
        std::mem::replace(&mut self.style, style)
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.body, NodeBody::Composite(_))
    }

    pub fn content(&self) -> Option<&Content> {
        match &self.body {
            NodeBody::Leaf(content) => Some(content),
            NodeBody::Composite(_) => None,
        }
    }

    /// The text of a text-bearing leaf (headings included, pictures use their caption).
    pub fn text(&self) -> Option<&str> {
        match self.content()? {
            Content::Text(text) | Content::Heading { text, .. } => Some(text),
            Content::Picture { caption, .. } => caption.as_deref(),
            Content::Empty => None,
        }
    }

    pub fn heading_level(&self) -> Option<u8> {
        match self.content()? {
            Content::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match &self.body {
            NodeBody::Composite(children) => children,
            NodeBody::Leaf(_) => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        match &mut self.body {
            NodeBody::Composite(children) => children,
            NodeBody::Leaf(_) => &mut [],
        }
    }

    /// Mutable access to one child, e.g. to set its own style after assembly.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children_mut().get_mut(index)
    }

    /// Appends `child`, stamping rows and cells with their table position.
    pub fn append(&mut self, mut child: Node) -> Result<&mut Node, IdfError> {
        let parent = self.kind;
        let row_index = self.position.map(|p| p.row).unwrap_or(0);
        let NodeBody::Composite(children) = &mut self.body else {
            return Err(IdfError::NotAppendable { kind: parent });
        };
        if !parent.accepts_child(child.kind) {
            return Err(IdfError::InvalidChild {
                parent,
                child: child.kind,
            });
        }

        match parent {
            NodeKind::Table => child.place_row(children.len()),
            NodeKind::TableRow | NodeKind::HeaderRow => {
                child.position = Some(TablePosition {
                    row: row_index,
                    column: Some(children.len()),
                });
            }
            _ => {}
        }

        children.push(child);
        let last = children.len() - 1;
        Ok(&mut children[last])
    }

    pub fn append_all<I>(&mut self, children: I) -> Result<(), IdfError>
    where
        I: IntoIterator<Item = Node>,
    {
        for child in children {
            self.append(child)?;
        }
        Ok(())
    }

    fn place_row(&mut self, row: usize) {
        self.position = Some(TablePosition { row, column: None });
        for cell in self.children_mut() {
            if let Some(position) = &mut cell.position {
                position.row = row;
            }
        }
    }

    pub fn position(&self) -> Option<TablePosition> {
        self.position
    }

    pub fn row_index(&self) -> Result<usize, IdfError> {
        self.position.map(|p| p.row).ok_or(IdfError::MissingField {
            kind: self.kind,
            field: "row index",
        })
    }

    pub fn column_index(&self) -> Result<usize, IdfError> {
        self.position
            .and_then(|p| p.column)
            .ok_or(IdfError::MissingField {
                kind: self.kind,
                field: "column index",
            })
    }

    /// Number of rows of a table.
    pub fn row_count(&self) -> Result<usize, IdfError> {
        match self.kind {
            NodeKind::Table => Ok(self.children().len()),
            kind => Err(IdfError::MissingField {
                kind,
                field: "row count",
            }),
        }
    }

    /// Number of cells of a row, or the widest row of a table.
    pub fn column_count(&self) -> Result<usize, IdfError> {
        match self.kind {
            NodeKind::TableRow | NodeKind::HeaderRow => Ok(self.children().len()),
            NodeKind::Table => Ok(self
                .children()
                .iter()
                .map(|row| row.children().len())
                .max()
                .unwrap_or(0)),
            kind => Err(IdfError::MissingField {
                kind,
                field: "column count",
            }),
        }
    }

    /// Pushes `style` onto descendants lacking their own style.
    pub fn cascade(
        &mut self,
        style: &StyleDescriptor,
        depth: Depth,
    ) -> Result<CascadeReport, IdfError> {
        cascade::cascade(self, style, depth)
    }

    /// Pre-order iterator over this node and all of its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
