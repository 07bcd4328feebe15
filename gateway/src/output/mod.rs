//! Terminal output formatting.

pub mod json;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, is_tty }
    }

    /// Print a success message prefixed with `✓`.
    pub fn success(&self, msg: &str) {
        println!("  {} {msg}", "✓".style(self.styles.success));
    }

    /// Print an info message prefixed with `ℹ`.
    pub fn info(&self, msg: &str) {
        println!("  {} {msg}", "ℹ".style(self.styles.info));
    }

    /// Print a section header.
    pub fn header(&self, msg: &str) {
        println!("  {}", msg.style(self.styles.header));
    }

    /// Print a `label: value` line with the label dimmed.
    pub fn kv(&self, label: &str, value: &str) {
        println!("    {:<10} {value}", label.style(self.styles.dim));
    }

    /// Print a record line: bold name followed by a dimmed id.
    pub fn item(&self, name: &str, id: &str, detail: &str) {
        if detail.is_empty() {
            println!("  {}  {}", name.style(self.styles.bold), id.style(self.styles.dim));
        } else {
            println!(
                "  {}  {}  {detail}",
                name.style(self.styles.bold),
                id.style(self.styles.dim)
            );
        }
    }
}
