use crate::constants::{NOTIFICATION_MS, SUCCESS_POPUP_MS};

pub const SUCCESS_MESSAGE: &str = "Wow, your message just landed in Anelia Design's inbox with a splash! 🎉 Thanks for connecting—we'll dive in and get back to you in a flash!";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    /// Unknown names fall back to `Info`.
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#28a745",
            Self::Error => "#dc3545",
            Self::Warning => "#ffc107",
            Self::Info => "#007bff",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Error => "❌",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }

    pub fn css_class(self) -> String {
        format!("notification notification--{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Notification,
}

impl PopupKind {
    pub fn auto_dismiss_ms(self) -> u32 {
        match self {
            PopupKind::Success => SUCCESS_POPUP_MS,
            PopupKind::Notification => NOTIFICATION_MS,
        }
    }
}

/// Escape text for interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// Tracks the single visible popup of one kind. Opening replaces whatever
/// was showing; a dismissal timer belonging to a replaced popup is refused.
#[derive(Clone, Debug, Default)]
pub struct PopupSlot {
    current: Option<u64>,
    next_id: u64,
}

impl PopupSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `(new_id, replaced_id)`.
    pub fn open(&mut self) -> (u64, Option<u64>) {
        self.next_id += 1;
        let replaced = self.current.replace(self.next_id);
        (self.next_id, replaced)
    }

    pub fn current(&self) -> Option<u64> {
        self.current
    }

    /// `true` when `id` was the visible popup and is now closed.
    pub fn close(&mut self, id: u64) -> bool {
        if self.current == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b onclick='x'>"&"</b>"#),
            "&lt;b onclick=&#39;x&#39;&gt;&quot;&amp;&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn unknown_kind_is_info() {
        assert_eq!(NotificationKind::parse("fatal"), NotificationKind::Info);
        assert_eq!(NotificationKind::Error.css_class(), "notification notification--error");
    }

    #[test]
    fn at_most_one_popup_per_slot() {
        let mut slot = PopupSlot::new();
        let (first, none) = slot.open();
        assert!(none.is_none());
        let (second, replaced) = slot.open();
        assert_eq!(replaced, Some(first));
        // the first popup's timer fires late and must not close the second
        assert!(!slot.close(first));
        assert_eq!(slot.current(), Some(second));
        assert!(slot.close(second));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn dismiss_timeouts() {
        assert_eq!(PopupKind::Success.auto_dismiss_ms(), 8500);
        assert_eq!(PopupKind::Notification.auto_dismiss_ms(), 6000);
    }
}
