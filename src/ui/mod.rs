//! Terminal presentation helpers.

mod markdown;

pub use markdown::{MarkdownFormat, SyntaxHighlighter, display_section};
