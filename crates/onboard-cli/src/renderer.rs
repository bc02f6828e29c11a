//! Terminal rendering for markdown listings
//!
//! Uses termimad for styled output with a plain text fallback.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    /// Render markdown text to any writer
    pub fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks, just colored
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(out, "\x1b[34m{line}\x1b[0m")?;
                } else {
                    writeln!(out, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "# Onboarding steps for companies/acme\n\nProgress: 1/3 done (33%)\n";

    fn rendered(renderer: &TerminalRenderer) -> String {
        let mut out = Vec::new();
        renderer
            .render_to(&mut out, LISTING)
            .expect("render into a buffer");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn test_plain_renderer_writes_markdown_verbatim() {
        let renderer = TerminalRenderer::new(false);
        assert_eq!(rendered(&renderer), LISTING);
    }

    #[test]
    fn test_rich_renderer_colors_headers() {
        let output = rendered(&TerminalRenderer::new(true));

        assert!(output.starts_with("\x1b[34m# Onboarding steps for companies/acme\x1b[0m\n"));
        assert!(output.contains("Progress: 1/3 done (33%)"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_default_is_rich() {
        let output = rendered(&TerminalRenderer::default());
        assert!(output.contains("\x1b[34m"));
    }
}
