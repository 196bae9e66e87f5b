use std::fmt;
use std::str::FromStr;

/// The closed set of node types.
///
/// Type compatibility is a walk up `parent()`: a kind is assignable to itself
/// and to every ancestor. `Element` is the abstract root every kind derives
/// from, so a condition targeting `Element` admits any node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Document,
    Title,
    Heading,
    Paragraph,
    Table,
    TableRow,
    HeaderRow,
    TableCell,
    HeaderCell,
    Separator,
    Footer,
    Picture,
}

impl NodeKind {
    pub const ALL: [NodeKind; 13] = [
        NodeKind::Element,
        NodeKind::Document,
        NodeKind::Title,
        NodeKind::Heading,
        NodeKind::Paragraph,
        NodeKind::Table,
        NodeKind::TableRow,
        NodeKind::HeaderRow,
        NodeKind::TableCell,
        NodeKind::HeaderCell,
        NodeKind::Separator,
        NodeKind::Footer,
        NodeKind::Picture,
    ];

    /// The direct supertype of this kind.
    pub fn parent(self) -> Option<NodeKind> {
        match self {
            NodeKind::Element => None,
            NodeKind::HeaderRow => Some(NodeKind::TableRow),
            NodeKind::HeaderCell => Some(NodeKind::TableCell),
            _ => Some(NodeKind::Element),
        }
    }

    /// True when `self` equals `target` or derives from it.
    pub fn is_assignable_to(self, target: NodeKind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == target {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Kinds whose nodes hold children rather than content.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            NodeKind::Document | NodeKind::Table | NodeKind::TableRow | NodeKind::HeaderRow
        )
    }

    /// Whether a node of kind `child` may be appended under `self`.
    pub fn accepts_child(self, child: NodeKind) -> bool {
        match self {
            NodeKind::Document => matches!(
                child,
                NodeKind::Title
                    | NodeKind::Heading
                    | NodeKind::Paragraph
                    | NodeKind::Table
                    | NodeKind::Separator
                    | NodeKind::Footer
                    | NodeKind::Picture
            ),
            NodeKind::Table => child.is_assignable_to(NodeKind::TableRow),
            NodeKind::TableRow | NodeKind::HeaderRow => child.is_assignable_to(NodeKind::TableCell),
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Element => "Element",
            NodeKind::Document => "Document",
            NodeKind::Title => "Title",
            NodeKind::Heading => "Heading",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Table => "Table",
            NodeKind::TableRow => "TableRow",
            NodeKind::HeaderRow => "HeaderRow",
            NodeKind::TableCell => "TableCell",
            NodeKind::HeaderCell => "HeaderCell",
            NodeKind::Separator => "Separator",
            NodeKind::Footer => "Footer",
            NodeKind::Picture => "Picture",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown node type: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignability_walks_ancestry() {
        assert!(NodeKind::HeaderCell.is_assignable_to(NodeKind::HeaderCell));
        assert!(NodeKind::HeaderCell.is_assignable_to(NodeKind::TableCell));
        assert!(NodeKind::HeaderCell.is_assignable_to(NodeKind::Element));
        assert!(!NodeKind::TableCell.is_assignable_to(NodeKind::HeaderCell));
        assert!(!NodeKind::Paragraph.is_assignable_to(NodeKind::Heading));
    }

    #[test]
    fn test_every_kind_reaches_element() {
        for kind in NodeKind::ALL {
            assert!(kind.is_assignable_to(NodeKind::Element), "{kind}");
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in NodeKind::ALL {
            assert_eq!(kind.as_str().parse::<NodeKind>().unwrap(), kind);
        }
        assert_eq!("tablecell".parse::<NodeKind>().unwrap(), NodeKind::TableCell);
        assert!("Spreadsheet".parse::<NodeKind>().is_err());
    }

    #[test]
    fn test_child_rules() {
        assert!(NodeKind::Table.accepts_child(NodeKind::HeaderRow));
        assert!(NodeKind::HeaderRow.accepts_child(NodeKind::TableCell));
        assert!(!NodeKind::Document.accepts_child(NodeKind::TableCell));
        assert!(!NodeKind::Paragraph.accepts_child(NodeKind::Paragraph));
    }
}
