use anstream::println as styled_println;
use anstyle::{AnsiColor, Reset, Style};

/// Style presets for consistent UI theming
pub struct Styles;

impl Styles {
    /// Error message style (red)
    pub fn error() -> Style {
        Style::new().fg_color(Some(AnsiColor::Red.into()))
    }

    /// Warning message style (yellow)
    pub fn warning() -> Style {
        Style::new().fg_color(Some(AnsiColor::Yellow.into()))
    }

    /// Success message style (green)
    pub fn success() -> Style {
        Style::new().fg_color(Some(AnsiColor::Green.into()))
    }

    /// Info message style (blue)
    pub fn info() -> Style {
        Style::new().fg_color(Some(AnsiColor::Blue.into()))
    }

    /// Label in front of the user's input line
    pub fn prompt() -> Style {
        Style::new().fg_color(Some(AnsiColor::Cyan.into())).bold()
    }

    /// Label in front of the model's reply
    pub fn reply_label() -> Style {
        Self::success().bold()
    }

    pub fn bold_error() -> Style {
        Self::error().bold()
    }

    pub fn bold_success() -> Style {
        Self::success().bold()
    }

    pub fn bold_warning() -> Style {
        Self::warning().bold()
    }

    /// Header style for command banners
    pub fn header() -> Style {
        Self::info().bold()
    }

    /// Render style to ANSI string
    pub fn render(style: &Style) -> String {
        format!("{style}")
    }

    /// Render reset ANSI string
    pub fn render_reset() -> String {
        format!("{Reset}")
    }
}

/// Wrap `message` in `style`
pub fn paint(style: &Style, message: &str) -> String {
    format!(
        "{}{}{}",
        Styles::render(style),
        message,
        Styles::render_reset()
    )
}

/// Print a styled error message
pub fn error(message: &str) {
    styled_println!("{}", paint(&Styles::bold_error(), message));
}

/// Print a styled warning message
pub fn warning(message: &str) {
    styled_println!("{}", paint(&Styles::bold_warning(), message));
}

/// Print a styled success message
pub fn success(message: &str) {
    styled_println!("{}", paint(&Styles::bold_success(), message));
}

/// Print a command banner followed by a blank line
pub fn header(message: &str) {
    styled_println!("{}\n", paint(&Styles::header(), message));
}
