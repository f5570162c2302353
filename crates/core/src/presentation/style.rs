use serde::{Deserialize, Serialize};

/// Optional layout overrides for a view. Absent fields keep the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl StyleOverride {
    pub(crate) fn apply(&self, lines: Vec<String>) -> Vec<String> {
        let indent = " ".repeat(usize::from(self.padding.unwrap_or(0)));
        let top = usize::from(self.margin_top.unwrap_or(0));
        let mut out = vec![String::new(); top];
        out.extend(lines.into_iter().map(|line| format!("{}{}", indent, line)));
        out
    }
}

/// Outer wrapper around a view's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wrapper {
    #[default]
    Card,
    Plain,
}

impl Wrapper {
    pub fn from_without_card(without_card: bool) -> Self {
        if without_card {
            Wrapper::Plain
        } else {
            Wrapper::Card
        }
    }

    pub(crate) fn wrap(&self, inner: Vec<String>) -> Vec<String> {
        match self {
            Wrapper::Plain => inner,
            Wrapper::Card => {
                let width = inner.iter().map(|l| l.chars().count()).max().unwrap_or(0);
                let border = "─".repeat(width + 2);
                let mut lines = Vec::with_capacity(inner.len() + 2);
                lines.push(format!("┌{}┐", border));
                for line in inner {
                    let pad = width - line.chars().count();
                    lines.push(format!("│ {}{} │", line, " ".repeat(pad)));
                }
                lines.push(format!("└{}┘", border));
                lines
            }
        }
    }
}
