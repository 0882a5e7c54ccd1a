//! Shared rendering utilities for setup prompts

use colored::Colorize;
use inquire::ui::{Color, IndexPrefix, RenderConfig, StyleSheet, Styled};

/// Get the standard render config for setup prompts
pub fn setup_render_config() -> RenderConfig<'static> {
    RenderConfig::default()
        .with_highlighted_option_prefix(Styled::new("▸ ").with_fg(Color::LightGreen))
        .with_option_index_prefix(IndexPrefix::Simple)
        .with_selected_option(Some(StyleSheet::new().with_fg(Color::LightGreen)))
        .with_scroll_up_prefix(Styled::new("▲ "))
        .with_scroll_down_prefix(Styled::new("▼ "))
}

/// Display a setup step header with a short description
pub fn step_header(step: u8, title: &str, description: &str) {
    let width = term_size::dimensions().map(|(w, _)| w).unwrap_or(80).min(70);
    let label = format!("── Step {} · {} ", step, title);

    println!();
    println!(
        "{}{}",
        label.bright_green(),
        "─".repeat(width.saturating_sub(label.chars().count()))
            .bright_green()
    );
    for line in textwrap::wrap(description, width.saturating_sub(2)) {
        println!("  {}", line.dimmed());
    }
    println!();
}
