use super::style::StyleOverride;

const PLACEHOLDER: &str = "░";
const TITLE_WIDTHS: [usize; 3] = [18, 14, 22];

/// One placeholder row of a loading list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonRow {
    pub index: usize,
    pub title_width: usize,
    pub amount_width: usize,
}

/// Loading placeholder for a list of `count` rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkeletonList {
    count: usize,
    style: StyleOverride,
}

impl SkeletonList {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            style: StyleOverride::default(),
        }
    }

    pub fn with_style(mut self, style: StyleOverride) -> Self {
        self.style = style;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn rows(&self) -> Vec<SkeletonRow> {
        (0..self.count)
            .map(|index| SkeletonRow {
                index,
                title_width: TITLE_WIDTHS[index % TITLE_WIDTHS.len()],
                amount_width: 10,
            })
            .collect()
    }

    pub fn render(&self) -> Vec<String> {
        let lines = self
            .rows()
            .into_iter()
            .map(|row| {
                format!(
                    "{}  {}  {}",
                    bar(3),
                    bar(row.title_width),
                    bar(row.amount_width)
                )
            })
            .collect();
        self.style.apply(lines)
    }
}

fn bar(width: usize) -> String {
    PLACEHOLDER.repeat(width)
}
