//! Markdown rendering for model replies

use termimad::MadSkin;

/// Terminal skin used for replies
pub fn reply_skin(color: bool) -> MadSkin {
    if color {
        MadSkin::default()
    } else {
        MadSkin::no_style()
    }
}

/// Print markdown to stdout
pub fn render_markdown(skin: &MadSkin, text: &str) {
    skin.print_text(text);
}
