//! Visual theme and styling.

use console::Style;

/// Terminal theme for check output.
///
/// Styles only add color; the text of every line is left untouched so that
/// output stays identical with and without a TTY.
#[derive(Debug, Clone)]
pub struct SnipTheme {
    /// Style for success lines (green).
    pub success: Style,
    /// Style for error lines (red bold).
    pub error: Style,
    /// Style for folder banners (bold).
    pub header: Style,
}

impl Default for SnipTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SnipTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(msg))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
