//! Icon set for the TUI.
//!
//! `IconSet` resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: Nerd Font glyphs (requires a Nerd Font)

use shelf_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Prompt in front of the search text
    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    pub fn checkbox_on(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f14a}", // nf-fa-check_square
            IconMode::Unicode => "[x]",
        }
    }

    pub fn checkbox_off(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f096}", // nf-fa-square_o
            IconMode::Unicode => "[ ]",
        }
    }

    pub fn checkbox(&self, checked: bool) -> &'static str {
        if checked {
            self.checkbox_on()
        } else {
            self.checkbox_off()
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }
}
