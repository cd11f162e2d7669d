//! CLI output formats
//!
//! Each format is a pipeline stage plus a way of printing its result, e.g. `ast-json` is the
//! typed AST as JSON and `source` is the lowered declarations rendered as text.

use sl_config::SlConfig;
use sl_parser::sl::formats::{render, to_json_string, to_treeviz_str, tokens_to_json};
use sl_parser::sl::loader::{DocumentLoader, LoaderError};
use sl_parser::sl::transforms::TransformError;

/// All available CLI formats, with a one-line description
pub const AVAILABLE_FORMATS: &[(&str, &str)] = &[
    ("source", "generated signatures and postcondition checks as source text"),
    ("decls-json", "generated declarations as JSON"),
    ("ast-json", "typed AST as JSON"),
    ("ast-treeviz", "typed AST as a tree"),
    ("sexpr-treeviz", "generic S-expression tree, keywords unchecked"),
    ("sexpr-json", "generic S-expression tree as JSON"),
    ("token-json", "token stream as JSON"),
];

pub fn format_names() -> Vec<&'static str> {
    AVAILABLE_FORMATS.iter().map(|(name, _)| *name).collect()
}

fn json_failed(err: serde_json::Error) -> LoaderError {
    LoaderError::Transform(TransformError::StageFailed {
        stage: "json".to_string(),
        message: err.to_string(),
    })
}

/// Run the named format over a loaded source
pub fn execute_format(
    loader: &DocumentLoader,
    format: &str,
    config: &SlConfig,
) -> Result<String, LoaderError> {
    match format {
        "source" => {
            let decls = loader.lower(&config.lowering_options())?;
            Ok(render(&decls, &config.render_options()))
        }
        "decls-json" => {
            let decls = loader.lower(&config.lowering_options())?;
            to_json_string(&decls).map_err(json_failed)
        }
        "ast-json" => to_json_string(&loader.parse()?).map_err(json_failed),
        "ast-treeviz" => Ok(to_treeviz_str(&loader.parse()?)),
        "sexpr-treeviz" => Ok(to_treeviz_str(&loader.sexpr()?)),
        "sexpr-json" => to_json_string(&loader.sexpr()?).map_err(json_failed),
        "token-json" => to_json_string(&tokens_to_json(&loader.tokenize()?)).map_err(json_failed),
        other => Err(LoaderError::Transform(TransformError::StageFailed {
            stage: "format".to_string(),
            message: format!("unknown format '{}'", other),
        })),
    }
}
