//! Intermediate Document Format (IDF)
//!
//! The composition tree handed to a render: composite nodes hold ordered
//! children, leaf nodes hold content, and every node may carry its own
//! style descriptor. Conditions and the cascade live here because both
//! inspect nodes directly.

pub mod cascade;
pub mod condition;
pub mod descriptor;
pub mod error;
pub mod kind;
pub mod node;

pub use cascade::{cascade, CascadeReport, Depth};
pub use condition::Condition;
pub use descriptor::StyleDescriptor;
pub use error::IdfError;
pub use kind::NodeKind;
pub use node::{Content, Descendants, Node, TablePosition};
