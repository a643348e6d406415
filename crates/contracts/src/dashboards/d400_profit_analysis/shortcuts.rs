/// Keyboard actions of the profit analysis dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ExportExcel,
    ExportPdf,
    FocusSearch,
    Refresh,
    CloseModal,
}

impl Shortcut {
    /// Maps a `keydown` (key plus Ctrl/Cmd state) to an action.
    pub fn from_key(key: &str, ctrl_or_meta: bool) -> Option<Self> {
        if key == "Escape" {
            return Some(Shortcut::CloseModal);
        }
        if !ctrl_or_meta {
            return None;
        }
        match key {
            "e" | "E" => Some(Shortcut::ExportExcel),
            "p" | "P" => Some(Shortcut::ExportPdf),
            "f" | "F" => Some(Shortcut::FocusSearch),
            "r" | "R" => Some(Shortcut::Refresh),
            _ => None,
        }
    }

    /// Browser default action must be suppressed (print dialog, find bar, reload)
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Shortcut::CloseModal)
    }
}

pub const SHORTCUTS_HELP: &str = "Keyboard Shortcuts:\n\
Ctrl+E: Export Excel\n\
Ctrl+P: Export PDF\n\
Ctrl+F: Focus Search\n\
Ctrl+R: Refresh Data\n\
Esc: Close Modals";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(Shortcut::from_key("e", true), Some(Shortcut::ExportExcel));
        assert_eq!(Shortcut::from_key("p", true), Some(Shortcut::ExportPdf));
        assert_eq!(Shortcut::from_key("f", true), Some(Shortcut::FocusSearch));
        assert_eq!(Shortcut::from_key("r", true), Some(Shortcut::Refresh));
        assert_eq!(Shortcut::from_key("x", true), None);
    }

    #[test]
    fn test_plain_keys_are_ignored_except_escape() {
        assert_eq!(Shortcut::from_key("e", false), None);
        assert_eq!(Shortcut::from_key("Escape", false), Some(Shortcut::CloseModal));
        assert!(!Shortcut::CloseModal.prevents_default());
        assert!(Shortcut::Refresh.prevents_default());
    }
}
