pub mod fixtures;

use folio::loader::{self, LoadedDocument};
use folio::{Composer, Node, OutputFormat, PipelineError, RenderConfig};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Load a JSON document fixture
pub fn load(document: &Value) -> Result<LoadedDocument, PipelineError> {
    loader::load_value(document.clone())
}

/// Load a fixture into a composer session with the given config
pub fn session(document: &Value, config: RenderConfig) -> Result<(Composer, Node), PipelineError> {
    Ok(Composer::from_loaded(load(document)?, config))
}

/// Render a fixture with the default config
pub fn render(document: &Value, format: OutputFormat) -> Result<String, PipelineError> {
    let (composer, root) = session(document, RenderConfig::default())?;
    composer.render_as(format, &root)
}

/// Assert that `haystack` contains every needle, in order
#[macro_export]
macro_rules! assert_contains_in_order {
    ($haystack:expr, $($needle:expr),+ $(,)?) => {{
        let haystack: &str = &$haystack;
        let mut from = 0usize;
        $(
            match haystack[from..].find($needle) {
                Some(pos) => from += pos + $needle.len(),
                None => panic!("expected {:?} after byte {} in:\n{}", $needle, from, haystack),
            }
        )+
    }};
}
