use std::io::{self, IsTerminal};

/// ANSI color codes for terminal output, collapsing to empty strings when
/// coloring is disabled.
#[derive(Clone, Copy)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn code(&self, code: &'static str) -> &'static str {
        if self.enabled {
            code
        } else {
            ""
        }
    }

    pub fn error(&self) -> &'static str {
        self.code("\x1b[31m")
    }

    pub fn warning(&self) -> &'static str {
        self.code("\x1b[33m")
    }

    pub fn success(&self) -> &'static str {
        self.code("\x1b[32m")
    }

    pub fn info(&self) -> &'static str {
        self.code("\x1b[36m")
    }

    pub fn reset(&self) -> &'static str {
        self.code("\x1b[0m")
    }
}

pub fn should_use_colors(force_color: bool, no_color: bool) -> bool {
    // Priority: --no-color > --color > NO_COLOR env > TTY detection
    if no_color {
        return false;
    }
    if force_color {
        return true;
    }
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    io::stdout().is_terminal()
}
