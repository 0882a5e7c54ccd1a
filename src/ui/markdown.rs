//! Markdown rendering for analysis output.
//!
//! Renders the constrained markdown subset the analysis service produces
//! (headers, lists, fenced code, bold/italic) into decorated terminal text
//! using termimad, with syntect handling code-block highlighting.

use colored::Colorize;
use once_cell::sync::Lazy;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::as_24_bit_terminal_escaped;
use termimad::crossterm::style::{Attribute, Color};
use termimad::{CompoundStyle, LineStyle, MadSkin};

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Code highlighter over the bundled syntect defaults
#[derive(Clone, Copy, Default)]
pub struct SyntaxHighlighter;

impl SyntaxHighlighter {
    /// Highlight code with the given language token, falling back to plain
    /// text for unknown languages.
    pub fn highlight(&self, code: &str, lang: &str) -> String {
        let syntax = SYNTAX_SET
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
        let theme = &THEME_SET.themes["base16-ocean.dark"];
        let mut hl = HighlightLines::new(syntax, theme);

        code.lines()
            .filter_map(|line| hl.highlight_line(line, &SYNTAX_SET).ok())
            .map(|ranges| format!("{}\x1b[0m", as_24_bit_terminal_escaped(&ranges, false)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A code block lifted out of the markdown body
#[derive(Clone, Debug)]
struct CodeBlock {
    code: String,
    lang: String,
}

/// Splits fenced code blocks from markdown so they can be highlighted
/// separately and spliced back after the termimad pass.
struct CodeBlockParser {
    markdown: String,
    blocks: Vec<CodeBlock>,
}

impl CodeBlockParser {
    fn parse(content: &str) -> Self {
        let mut blocks = Vec::new();
        let mut result = String::new();
        let mut in_code_block = false;
        let mut code_lines: Vec<&str> = Vec::new();
        let mut current_lang = String::new();

        for line in content.lines() {
            if line.trim_start().starts_with("```") {
                if in_code_block {
                    result.push_str(&format!("\x00{}\x00\n", blocks.len()));
                    blocks.push(CodeBlock {
                        code: code_lines.join("\n"),
                        lang: current_lang.clone(),
                    });
                    code_lines.clear();
                    current_lang.clear();
                    in_code_block = false;
                } else {
                    current_lang = line
                        .trim_start()
                        .strip_prefix("```")
                        .unwrap_or("")
                        .to_string();
                    in_code_block = true;
                }
            } else if in_code_block {
                code_lines.push(line);
            } else {
                result.push_str(line);
                result.push('\n');
            }
        }

        // Unclosed fence at end of input
        if in_code_block && !code_lines.is_empty() {
            result.push_str(&format!("\x00{}\x00\n", blocks.len()));
            blocks.push(CodeBlock {
                code: code_lines.join("\n"),
                lang: current_lang,
            });
        }

        Self {
            markdown: result,
            blocks,
        }
    }

    fn markdown(&self) -> &str {
        &self.markdown
    }

    fn restore(&self, highlighter: &SyntaxHighlighter, mut rendered: String) -> String {
        for (i, block) in self.blocks.iter().enumerate() {
            let highlighted = highlighter.highlight(&block.code, &block.lang);
            rendered = rendered.replace(&format!("\x00{i}\x00"), &format!("\n{}\n", highlighted));
        }
        rendered
    }
}

/// Markdown formatter for analysis text
pub struct MarkdownFormat {
    skin: MadSkin,
    highlighter: SyntaxHighlighter,
}

impl Default for MarkdownFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownFormat {
    #[allow(clippy::field_reassign_with_default)]
    pub fn new() -> Self {
        let mut skin = MadSkin::default();

        skin.inline_code = CompoundStyle::new(Some(Color::Cyan), None, Default::default());

        // Code blocks are replaced by the syntect-highlighted version
        skin.code_block = LineStyle::new(
            CompoundStyle::new(None, None, Default::default()),
            Default::default(),
        );

        let mut h1_style = CompoundStyle::new(Some(Color::Green), None, Default::default());
        h1_style.add_attr(Attribute::Bold);
        skin.headers[0] = LineStyle::new(h1_style.clone(), Default::default());
        skin.headers[1] = LineStyle::new(h1_style, Default::default());

        let h3_style = CompoundStyle::new(Some(Color::Green), None, Default::default());
        skin.headers[2] = LineStyle::new(h3_style, Default::default());

        let mut bold_style = CompoundStyle::new(Some(Color::Cyan), None, Default::default());
        bold_style.add_attr(Attribute::Bold);
        skin.bold = bold_style;

        skin.italic = CompoundStyle::with_attr(Attribute::Italic);

        Self {
            skin,
            highlighter: SyntaxHighlighter,
        }
    }

    /// Render markdown content to a styled string for terminal display
    pub fn render(&self, content: impl Into<String>) -> String {
        let content = content.into();
        let content = content.trim();

        if content.is_empty() {
            return String::new();
        }

        let parsed = CodeBlockParser::parse(content);
        let rendered = self.skin.term_text(parsed.markdown()).to_string();

        parsed
            .restore(&self.highlighter, rendered)
            .trim()
            .to_string()
    }
}

/// Display a titled section with the body rendered as markdown.
pub fn display_section(title: &str, content: &str) {
    let width = term_size::dimensions().map(|(w, _)| w).unwrap_or(80).min(78);

    println!();
    println!("{}", format!("┌{}┐", "─".repeat(width)).cyan());
    println!(
        "{}",
        format!("│ {:<pad$} │", title, pad = width.saturating_sub(2)).cyan()
    );
    println!("{}", format!("└{}┘", "─".repeat(width)).cyan());
    println!();

    let formatter = MarkdownFormat::new();
    for line in formatter.render(content).lines() {
        println!("  {}", line);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_render_empty() {
        let formatter = MarkdownFormat::new();
        assert!(formatter.render("").is_empty());
    }

    #[test]
    fn test_markdown_render_keeps_text_content() {
        let formatter = MarkdownFormat::new();
        let rendered = formatter.render("# Data Models\n\n- **User** with email");
        let plain = strip_ansi_escapes::strip_str(&rendered);
        assert!(plain.contains("Data Models"));
        assert!(plain.contains("User"));
    }

    #[test]
    fn test_code_block_extraction() {
        let parsed = CodeBlockParser::parse("Hello\n```rust\nfn main() {}\n```\nWorld");
        assert_eq!(parsed.blocks.len(), 1);
        assert_eq!(parsed.blocks[0].lang, "rust");
        assert_eq!(parsed.blocks[0].code, "fn main() {}");
        assert!(parsed.markdown().contains("Hello"));
        assert!(parsed.markdown().contains("World"));
    }

    #[test]
    fn test_unclosed_code_block_is_kept() {
        let parsed = CodeBlockParser::parse("intro\n```sql\nSELECT 1;");
        assert_eq!(parsed.blocks.len(), 1);
        assert_eq!(parsed.blocks[0].code, "SELECT 1;");
    }

    #[test]
    fn test_syntax_highlighter_emits_ansi() {
        let hl = SyntaxHighlighter;
        let result = hl.highlight("fn main() {}", "rust");
        assert!(result.contains("\x1b["));
    }
}
