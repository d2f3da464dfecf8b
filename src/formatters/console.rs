use std::io::IsTerminal;
use std::path::Path;

use crate::descriptor::ProjectConfig;
use crate::languages::supported_display_list;

pub const BOLD: &str = "1";
pub const DIM: &str = "2";
pub const ITALIC: &str = "3";
pub const RED: &str = "31";
pub const GREEN: &str = "32";
pub const YELLOW: &str = "33";
pub const BLUE: &str = "34";
pub const MAGENTA: &str = "35";
pub const CYAN: &str = "36";
pub const GRAY: &str = "90";

pub const TOOL_NAME: &str = "proKit";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn stdout() -> Self {
        Self::detect(std::io::stdout().is_terminal())
    }

    pub fn stderr() -> Self {
        Self::detect(std::io::stderr().is_terminal())
    }

    pub fn plain() -> Self {
        Colors { enabled: false }
    }

    fn detect(term: bool) -> Self {
        let force = std::env::var("CLICOLOR_FORCE")
            .ok()
            .filter(|v| v != "0")
            .is_some();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let clicolor_zero = std::env::var("CLICOLOR")
            .ok()
            .map(|v| v == "0")
            .unwrap_or(false);
        let enabled = if force {
            true
        } else if no_color || clicolor_zero {
            false
        } else {
            term
        };
        Colors { enabled }
    }

    /// Wraps `s` in an SGR sequence; `codes` may combine attributes, e.g. `"1;32"`.
    pub fn paint(&self, s: &str, codes: &str) -> String {
        if self.enabled {
            format!("\x1b[{codes}m{s}\x1b[0m")
        } else {
            s.to_string()
        }
    }

    fn bold_with(&self, s: &str, color: &str) -> String {
        self.paint(s, &format!("{BOLD};{color}"))
    }
}

pub fn error(c: &Colors, msg: &str) -> String {
    c.bold_with(&format!("✘ Error: {msg}"), RED)
}

pub fn success(c: &Colors, msg: &str) -> String {
    c.bold_with(&format!("✓ {msg}"), GREEN)
}

pub fn info(c: &Colors, msg: &str) -> String {
    c.bold_with(&format!("⚡ {msg}"), BLUE)
}

pub fn section(c: &Colors, title: &str) -> String {
    c.paint(title, BLUE)
}

pub fn created_entry(c: &Colors, entry: &str) -> String {
    format!("  {} {entry}", c.paint("✓", &format!("{DIM};{GREEN}")))
}

pub fn location(c: &Colors, path: &Path) -> String {
    c.paint(&format!("  Location: {}", path.display()), GRAY)
}

pub fn version_banner(c: &Colors) -> String {
    format!(
        "{} {}\n{}",
        c.bold_with(TOOL_NAME, MAGENTA),
        c.paint(&format!("v{VERSION}"), ITALIC),
        c.paint("A minimal project scaffolding tool", GRAY)
    )
}

/// Dependencies and scripts from the descriptor, or `None` when it lists neither.
pub fn next_steps(c: &Colors, config: &ProjectConfig) -> Option<String> {
    if config.dependencies.is_empty() && config.scripts.is_empty() {
        return None;
    }
    let mut lines = Vec::new();
    if !config.dependencies.is_empty() {
        lines.push(c.bold_with("Dependencies:", YELLOW));
        for dep in &config.dependencies {
            lines.push(format!("  {} {}", dep.name, c.paint(&dep.version, GRAY)));
        }
    }
    if !config.scripts.is_empty() {
        lines.push(c.bold_with("Scripts:", YELLOW));
        let w = config.scripts.keys().map(String::len).max().unwrap_or(0);
        for (name, cmd) in &config.scripts {
            lines.push(format!("  {}  {}", c.paint(&format!("{name:<w$}"), CYAN), cmd));
        }
    }
    Some(lines.join("\n"))
}

/// Examples and language list appended to `--help`. Plain text; clap styles the rest.
pub fn help_footer() -> String {
    format!(
        "Examples:\n  \
         prokit -lang=go -name=myproject\n  \
         prokit -lang=ts -name=mylibrary -type=library\n  \
         prokit -lang=python -name=myapp -output=./projects\n\n\
         Languages: {}",
        supported_display_list()
    )
}
