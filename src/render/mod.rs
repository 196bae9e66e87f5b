//! Built-in backends. Each accumulates its output in memory and hands it back
//! from `finish`.

pub mod csv;
pub mod html;
pub mod outline;

pub use csv::CsvRenderer;
pub use html::{CssClasses, HtmlRenderer};
pub use outline::OutlineRenderer;
