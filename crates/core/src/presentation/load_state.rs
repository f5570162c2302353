/// Display state of a screen section.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Empty,
    Error(String),
    Ready(T),
}

impl<T> LoadState<Vec<T>> {
    /// `Empty` for an empty list, `Ready` otherwise.
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Ready(items)
        }
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}
