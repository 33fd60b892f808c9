//! Presentation context handed to every command handler

use anstream::println as styled_println;
use anyhow::{Context, Result};
use bearcode_core::BearAgent;
use bearcode_core::ui::{Spinner, Styles, paint, render_markdown, reply_skin, styled};
use console::Term;
use termimad::MadSkin;

pub struct CommandContext {
    interactive: bool,
    skin: MadSkin,
}

impl CommandContext {
    pub fn new(color: bool) -> Self {
        Self {
            interactive: Term::stdout().is_term(),
            skin: reply_skin(color),
        }
    }

    /// Resolve configuration and build an agent; `model` overrides `BEAR_MODEL`
    pub fn create_agent(&self, model: Option<String>) -> Result<BearAgent> {
        let agent = BearAgent::from_env(model).context("Failed to initialize agent")?;
        tracing::info!(
            model = agent.model(),
            base_url = %agent.config().base_url,
            "agent configured"
        );
        Ok(agent)
    }

    pub fn header(&self, message: &str) {
        styled::header(message);
    }

    pub fn line(&self, message: &str) {
        println!("{message}");
    }

    pub fn success(&self, message: &str) {
        styled::success(message);
    }

    pub fn warning(&self, message: &str) {
        styled::warning(message);
    }

    pub fn error(&self, message: &str) {
        styled::error(message);
    }

    /// Print a labelled block whose body is rendered as markdown
    pub fn markdown_panel(&self, title: &str, body: &str) {
        self.rule(Some(title));
        render_markdown(&self.skin, body);
        self.rule(None);
    }

    /// Print a labelled block whose body is shown verbatim
    pub fn plain_panel(&self, title: &str, body: &str) {
        self.rule(Some(title));
        styled_println!("{}", body.trim_end());
        self.rule(None);
    }

    pub fn markdown(&self, body: &str) {
        render_markdown(&self.skin, body);
    }

    /// Spinner for a pending remote call; hidden when stdout is not a terminal
    pub fn spinner(&self, message: &str) -> Spinner {
        if self.interactive {
            Spinner::new(message)
        } else {
            Spinner::hidden()
        }
    }

    fn rule(&self, title: Option<&str>) {
        let width = Term::stdout()
            .size_checked()
            .map(|(_, cols)| usize::from(cols))
            .unwrap_or(80)
            .min(100);
        let line = match title {
            Some(title) => {
                let label = format!("── {title} ");
                let fill = width.saturating_sub(console::measure_text_width(&label));
                format!("{label}{}", "─".repeat(fill))
            }
            None => "─".repeat(width),
        };
        styled_println!("{}", paint(&Styles::success(), &line));
    }
}
