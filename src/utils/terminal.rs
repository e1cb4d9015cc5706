//! Terminal output utilities
//!
//! Color support is decided once at startup from [`TerminalSignals`] and
//! carried in a [`Console`] value that is handed to everything that prints.

use std::fmt::Display;

use console::{style, Color, Term};

/// Width of the `=` rule around section headers
const RULE_WIDTH: usize = 50;

/// The facts color support is decided from
#[derive(Debug, Clone, Default)]
pub struct TerminalSignals {
    /// Whether stdout is an interactive terminal
    pub is_tty: bool,
    /// Whether we are running on Windows
    pub windows: bool,
    /// Value of `TERM`
    pub term: Option<String>,
    /// Value of `WT_SESSION` (set by Windows Terminal)
    pub wt_session: Option<String>,
}

impl TerminalSignals {
    /// Read the signals from the current process
    pub fn detect() -> Self {
        Self {
            is_tty: Term::stdout().is_term(),
            windows: cfg!(windows),
            term: std::env::var("TERM").ok(),
            wt_session: std::env::var("WT_SESSION").ok(),
        }
    }

    /// Whether ANSI color escapes should be emitted
    ///
    /// Non-interactive stdout never gets color. On Windows a modern terminal
    /// host must also be evident from either `TERM` or `WT_SESSION`.
    pub fn supports_color(&self) -> bool {
        if !self.is_tty {
            return false;
        }
        if self.windows {
            return is_set(&self.term) || is_set(&self.wt_session);
        }
        true
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Probe the current process for color support
pub fn terminal_supports_color() -> bool {
    TerminalSignals::detect().supports_color()
}

/// Output sink for one invocation
#[derive(Debug, Clone, Copy)]
pub struct Console {
    colors: bool,
    verbose: bool,
}

impl Console {
    pub fn new(colors: bool, verbose: bool) -> Self {
        Self { colors, verbose }
    }

    /// Apply a color, or return the text untouched when colors are off
    pub fn paint(&self, color: Color, text: impl Display) -> String {
        style(text).fg(color).force_styling(self.colors).to_string()
    }

    /// Render the three-line section header
    pub fn header_block(&self, title: &str) -> String {
        let line = "=".repeat(RULE_WIDTH);
        format!(
            "\n{}\n{}\n{}",
            self.paint(Color::Cyan, &line),
            self.paint(Color::Cyan, format!(" {}", title)),
            self.paint(Color::Cyan, &line)
        )
    }

    /// Print a section header
    pub fn header(&self, title: &str) {
        println!("{}", self.header_block(title));
    }

    /// Echo a command line before it runs
    pub fn step(&self, command_line: &str) {
        println!("{}", self.paint(Color::Yellow, format!("  {}...", command_line)));
    }

    /// Print a success line, preceded by a blank line
    pub fn success(&self, message: &str) {
        println!("\n{}", self.paint(Color::Green, format!("  {}", message)));
    }

    /// Print an informational line such as an artifact location
    pub fn info(&self, message: &str) {
        println!("{}", self.paint(Color::Cyan, format!("  {}", message)));
    }

    /// Print a label line followed by an indented suggestion
    pub fn suggest(&self, label: &str, suggestion: &str) {
        println!("\n{}", self.paint(Color::White, format!("  {}", label)));
        println!("{}", self.paint(Color::Yellow, format!("    {}", suggestion)));
    }

    /// Print a non-fatal warning
    pub fn warning(&self, message: &str) {
        println!("{}", self.paint(Color::Yellow, format!("  {}", message)));
    }

    /// Print an error line to stderr
    pub fn error(&self, message: &str) {
        eprintln!("\n{}", self.paint(Color::Red, format!("  {}", message)));
    }

    /// Print supporting detail for an error to stderr
    pub fn detail(&self, message: &str) {
        eprintln!("{}", self.paint(Color::White, format!("  {}", message)));
    }

    /// Print a remediation hint to stderr
    pub fn hint(&self, message: &str) {
        for line in message.lines() {
            eprintln!("{}", self.paint(Color::Yellow, format!("  {}", line)));
        }
    }

    /// Print a diagnostic line when running with --verbose
    pub fn debug(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", self.paint(Color::Blue, "[debug]"), message);
        }
    }

    /// Print a blank line
    pub fn blank(&self) {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(is_tty: bool, windows: bool, term: Option<&str>, wt: Option<&str>) -> TerminalSignals {
        TerminalSignals {
            is_tty,
            windows,
            term: term.map(String::from),
            wt_session: wt.map(String::from),
        }
    }

    #[test]
    fn test_no_color_without_tty() {
        assert!(!signals(false, false, Some("xterm"), None).supports_color());
        assert!(!signals(false, true, Some("xterm"), Some("1")).supports_color());
    }

    #[test]
    fn test_unix_tty_always_colors() {
        assert!(signals(true, false, None, None).supports_color());
    }

    #[test]
    fn test_windows_needs_terminal_signal() {
        assert!(!signals(true, true, None, None).supports_color());
        assert!(!signals(true, true, Some(""), None).supports_color());
        assert!(signals(true, true, Some("xterm-256color"), None).supports_color());
        assert!(signals(true, true, None, Some("c0ffee")).supports_color());
    }

    #[test]
    fn test_paint_without_colors_is_plain() {
        let console = Console::new(false, false);
        assert_eq!(console.paint(Color::Red, "boom"), "boom");
    }

    #[test]
    fn test_paint_with_colors_emits_escapes() {
        let console = Console::new(true, false);
        let painted = console.paint(Color::Green, "ok");
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains("ok"));
    }

    #[test]
    fn test_header_block_layout() {
        let console = Console::new(false, false);
        let block = console.header_block("BUILD (release)");
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[2], " BUILD (release)");
        assert_eq!(lines[3], "=".repeat(50));
    }
}
