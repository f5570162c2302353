use serde::Serialize;

use super::style::{StyleOverride, Wrapper};

/// Which list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyStateKind {
    Transactions,
    PaymentGoals,
    Attachments,
}

/// Empty-list message: one icon and one or two lines of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    kind: EmptyStateKind,
    wrapper: Wrapper,
    style: StyleOverride,
}

impl EmptyState {
    pub fn new(kind: EmptyStateKind) -> Self {
        Self {
            kind,
            wrapper: Wrapper::Card,
            style: StyleOverride::default(),
        }
    }

    pub fn without_card(mut self, without_card: bool) -> Self {
        self.wrapper = Wrapper::from_without_card(without_card);
        self
    }

    pub fn with_style(mut self, style: StyleOverride) -> Self {
        self.style = style;
        self
    }

    pub fn kind(&self) -> EmptyStateKind {
        self.kind
    }

    pub fn wrapper(&self) -> Wrapper {
        self.wrapper
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            EmptyStateKind::Transactions => "receipt-outline",
            EmptyStateKind::PaymentGoals => "flag-outline",
            EmptyStateKind::Attachments => "images-outline",
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            EmptyStateKind::Transactions => "Belum ada transaksi",
            EmptyStateKind::PaymentGoals => "Belum ada target pembayaran",
            EmptyStateKind::Attachments => "Belum ada lampiran",
        }
    }

    pub fn subtitle(&self) -> Option<&'static str> {
        match self.kind {
            EmptyStateKind::Transactions => Some("Transaksi kamu akan muncul di sini"),
            EmptyStateKind::PaymentGoals => Some("Buat target pertamamu untuk mulai menabung"),
            EmptyStateKind::Attachments => None,
        }
    }

    /// Icon and text, without the wrapper.
    pub fn content(&self) -> Vec<String> {
        let mut lines = vec![format!("[{}]", self.icon()), self.title().to_string()];
        if let Some(subtitle) = self.subtitle() {
            lines.push(subtitle.to_string());
        }
        lines
    }

    pub fn render(&self) -> Vec<String> {
        self.style.apply(self.wrapper.wrap(self.content()))
    }
}
