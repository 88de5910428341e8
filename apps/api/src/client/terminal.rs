//! Terminal backings for the client seams: a clipboard that pipes into the
//! platform copy command, alerts on stderr, and plain-text cards.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::client::{ClientError, Clipboard, Notifier};
use crate::transform::generator::Variation;

/// Pipes copied text into an external program such as `pbcopy` or `wl-copy`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parses a whitespace-separated command line, e.g. `xclip -selection clipboard`.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self::new(program, words.collect()))
    }

    /// Picks the usual copy command for this platform.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::new())
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", Vec::new())
        } else {
            Self::new("xclip", vec!["-selection".into(), "clipboard".into()])
        }
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClientError> {
        let unavailable = |e: std::io::Error| ClientError::Clipboard(format!("{}: {e}", self.program));

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(unavailable)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(unavailable)?;
        }

        let status = child.wait().map_err(unavailable)?;
        if !status.success() {
            return Err(ClientError::Clipboard(format!(
                "{} exited with {status}",
                self.program
            )));
        }
        Ok(())
    }
}

/// Alerts go to stderr so stdout carries only the cards.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

/// Renders numbered cards; the copied card gets a check mark.
pub fn render_cards(variations: &[Variation], copied_index: Option<usize>) -> String {
    let mut out = String::new();
    for (i, v) in variations.iter().enumerate() {
        let marker = if copied_index == Some(i) { "  ✓ copied" } else { "" };
        out.push_str(&format!("── {}. {}{marker}\n\n{}\n\n", i + 1, v.kind, v.content));
    }
    out
}
