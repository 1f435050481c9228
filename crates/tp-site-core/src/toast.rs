//! Transient notification banner.
//!
//! Each `show` hands out a ticket. A scheduled dismissal only hides the
//! toast if its ticket is still current, so a newer toast never disappears
//! early because of an older timer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
        }
    }

    /// The class that must be removed when this kind is applied.
    pub fn opposite_class(self) -> &'static str {
        match self {
            ToastKind::Success => ToastKind::Error.css_class(),
            ToastKind::Error => ToastKind::Success.css_class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct ToastState {
    visible: Option<Toast>,
    generation: u64,
}

impl ToastState {
    pub fn visible(&self) -> Option<&Toast> {
        self.visible.as_ref()
    }

    /// Replace whatever is showing with `toast`.
    pub fn show(&mut self, toast: Toast) -> ToastTicket {
        self.generation += 1;
        self.visible = Some(toast);
        ToastTicket(self.generation)
    }

    /// Hide the toast if `ticket` belongs to the one currently shown.
    pub fn dismiss(&mut self, ticket: ToastTicket) -> bool {
        if ticket.0 != self.generation || self.visible.is_none() {
            return false;
        }
        self.visible = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_hides_current_toast() {
        let mut toasts = ToastState::default();
        let ticket = toasts.show(Toast::success("ok"));
        assert_eq!(toasts.visible().map(|t| t.kind), Some(ToastKind::Success));
        assert!(toasts.dismiss(ticket));
        assert!(toasts.visible().is_none());
        assert!(!toasts.dismiss(ticket));
    }

    #[test]
    fn superseded_ticket_leaves_newer_toast_visible() {
        let mut toasts = ToastState::default();
        let first = toasts.show(Toast::error("uno"));
        let second = toasts.show(Toast::success("dos"));

        assert!(!toasts.dismiss(first));
        assert_eq!(toasts.visible().unwrap().message, "dos");
        assert!(toasts.dismiss(second));
    }

    #[test]
    fn kind_classes_are_exclusive() {
        assert_eq!(ToastKind::Success.css_class(), "alert-success");
        assert_eq!(ToastKind::Success.opposite_class(), "alert-error");
        assert_eq!(ToastKind::Error.opposite_class(), "alert-success");
    }
}
