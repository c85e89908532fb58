/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in an ANSI style when color is enabled
pub fn paint(text: &str, style: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", style, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Shorten `text` to at most `width` characters, marking the cut with "..."
pub fn truncate(text: &str, width: usize) -> String {
    let text = text.replace('\n', " ");
    if text.chars().count() <= width {
        return text;
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Pad `text` to `width` characters on the right
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
