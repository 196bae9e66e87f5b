pub mod attrs;
pub mod border;
pub mod dimension;
pub mod error;
pub mod extension;
pub mod font;
pub mod join;
pub mod layout;
pub mod parsers;
pub mod text;

pub use attrs::{CombinedStyle, StyleAttrs};
pub use border::{Border, BorderWeight};
pub use dimension::Dimension;
pub use error::StyleError;
pub use extension::StyleExtension;
pub use font::FontFamily;
pub use join::Join;
pub use layout::{FillPattern, HorizontalAlign, LayoutStyle, VerticalAlign};
pub use parsers::parse_declarations;
pub use text::TextStyle;
