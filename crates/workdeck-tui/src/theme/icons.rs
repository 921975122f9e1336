//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use workdeck_app::config::IconMode;
use workdeck_app::services::ToastKind;
use workdeck_app::ContextMenuItem;

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn terminal(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f120}", // nf-fa-terminal
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    /// Context menu trigger on the card
    pub fn ellipsis(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f141}", // nf-fa-ellipsis_h
            IconMode::Unicode => "\u{22ef}",   // ⋯
        }
    }

    pub fn github(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f09b}", // nf-fa-github
            IconMode::Unicode => "\u{25c9}",   // ◉
        }
    }

    pub fn commit(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f417}", // nf-oct-git_commit
            IconMode::Unicode => "\u{25cb}",   // ○
        }
    }

    pub fn user(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f007}", // nf-fa-user
            IconMode::Unicode => "@",
        }
    }

    pub fn link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c1}", // nf-fa-link
            IconMode::Unicode => "\u{21c4}",   // ⇄
        }
    }

    pub fn upload(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f093}", // nf-fa-upload
            IconMode::Unicode => "\u{2191}",   // ↑
        }
    }

    pub fn download(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f019}", // nf-fa-download
            IconMode::Unicode => "\u{2193}",   // ↓
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "\u{2139}",   // ℹ
        }
    }

    pub fn lock(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f023}", // nf-fa-lock
            IconMode::Unicode => "\u{26bf}",   // ⚿
        }
    }

    pub fn menu_item(&self, item: ContextMenuItem) -> &'static str {
        match item {
            ContextMenuItem::ConnectToGitHub => self.link(),
            ContextMenuItem::PushToGitHub => self.upload(),
            ContextMenuItem::DownloadWorkspace => self.download(),
        }
    }

    pub fn toast(&self, kind: ToastKind) -> &'static str {
        match kind {
            ToastKind::Error => self.alert(),
            ToastKind::Success => self.check(),
            ToastKind::Info => self.info(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_icons_are_single_width() {
        use unicode_width::UnicodeWidthStr;

        let icons = IconSet::new(IconMode::Unicode);
        for icon in [
            icons.ellipsis(),
            icons.github(),
            icons.upload(),
            icons.download(),
            icons.check(),
        ] {
            assert_eq!(icon.width(), 1, "icon {:?} should be one cell", icon);
        }
    }

    #[test]
    fn test_nerd_font_icons_differ_from_unicode() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.ellipsis(), nerd.ellipsis());
        assert_ne!(unicode.github(), nerd.github());
    }

    #[test]
    fn test_menu_item_icons() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(
            icons.menu_item(ContextMenuItem::DownloadWorkspace),
            icons.download()
        );
        assert_eq!(icons.toast(ToastKind::Error), icons.alert());
    }
}
