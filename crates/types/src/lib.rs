pub mod color;
pub mod ids;

pub use color::{Color, ColorParseError};
pub use ids::ResourceUri;
