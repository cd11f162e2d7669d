//! Output formats
//!
//!     Everything that turns pipeline values into text lives here, outside the core stages:
//!         - [source]: the generated declarations as source text.
//!         - [treeviz]: a one-line-per-node tree of the AST or of an S-expression.
//!         - [json]: JSON dumps of tokens, trees and declarations.

pub mod json;
pub mod source;
pub mod treeviz;

pub use json::{to_json_string, tokens_to_json};
pub use source::{render, RenderOptions};
pub use treeviz::to_treeviz_str;
