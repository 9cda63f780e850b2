//! UI helpers for CLI display.

use console::style;

use mathlab_store::{Topic, TopicStatus};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Plain-text status badge.
#[must_use]
pub fn badge(status: &TopicStatus) -> String {
    match status {
        TopicStatus::NotStarted => "[ ]".to_string(),
        TopicStatus::InProgress { done, total } => format!("[~] {done}/{total}"),
        TopicStatus::Completed => "[x]".to_string(),
    }
}

/// Width of the badge column in the topic grid.
const BADGE_WIDTH: usize = 10;

/// Badge padded to [`BADGE_WIDTH`], then styled; padding is applied first
/// because escape codes would otherwise count toward the width.
fn styled_badge(status: &TopicStatus) -> String {
    let text = format!("{:<BADGE_WIDTH$}", badge(status));
    if is_color_disabled() {
        return text;
    }
    match status {
        TopicStatus::NotStarted => style(text).dim().to_string(),
        TopicStatus::InProgress { .. } => style(text).yellow().to_string(),
        TopicStatus::Completed => style(text).green().bold().to_string(),
    }
}

/// One line per topic: badge, id, title.
#[must_use]
pub fn render_topic_grid(statuses: &[(Topic, TopicStatus)]) -> String {
    statuses
        .iter()
        .map(|(topic, status)| {
            format!("  {} {:<12} {}", styled_badge(status), topic.id, topic.title)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
