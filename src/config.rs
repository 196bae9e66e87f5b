use crate::error::PipelineError;
use folio_idf::Depth;
use folio_render_core::{DispatchPolicy, RenderContext};
use serde::{Deserialize, Serialize};

/// Settings for a [`Composer`](crate::Composer) session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// How the dispatcher treats a node kind the backend has no hook for.
    pub dispatch: DispatchPolicy,
    /// Depth used by `Composer::cascade_default`. Negative means unbounded.
    pub default_cascade_depth: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Let row styles flow into cells in the HTML backend.
    pub glue_row_styles: bool,
    /// Indentation width of the outline and HTML backends.
    pub indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dispatch: DispatchPolicy::default(),
            default_cascade_depth: -1,
            locale: None,
            glue_row_styles: true,
            indent: 2,
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        if config.indent > 16 {
            return Err(PipelineError::Config(format!(
                "indent must be at most 16, got {}",
                config.indent
            )));
        }
        Ok(config)
    }

    pub fn cascade_depth(&self) -> Depth {
        Depth::from_signed(self.default_cascade_depth)
    }

    /// A fresh context for one render.
    pub fn context(&self) -> RenderContext {
        match &self.locale {
            Some(locale) => RenderContext::new().with_locale(locale.clone()),
            None => RenderContext::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = RenderConfig::from_json(r#"{ "dispatch": "strict" }"#).unwrap();
        assert_eq!(config.dispatch, DispatchPolicy::Strict);
        assert_eq!(config.cascade_depth(), Depth::Unbounded);
        assert!(config.glue_row_styles);
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn test_camel_case_fields() {
        let config = RenderConfig::from_json(
            r#"{ "defaultCascadeDepth": 1, "locale": "fr-FR", "glueRowStyles": false }"#,
        )
        .unwrap();
        assert_eq!(config.cascade_depth(), Depth::Levels(1));
        assert!(!config.glue_row_styles);
        assert_eq!(config.context().locale(), Some("fr-FR"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            RenderConfig::from_json(r#"{ "indent": 40 }"#),
            Err(PipelineError::Config(_))
        ));
        assert!(matches!(
            RenderConfig::from_json(r#"{ "dispatch": "sometimes" }"#),
            Err(PipelineError::Json(_))
        ));
    }
}
