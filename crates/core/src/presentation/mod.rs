//! State-free view models: loading skeletons and empty states.
//!
//! Views only render from their parameters; they never fetch.

mod empty_state;
mod load_state;
mod skeleton;
mod style;

pub use empty_state::{EmptyState, EmptyStateKind};
pub use load_state::LoadState;
pub use skeleton::{SkeletonList, SkeletonRow};
pub use style::{StyleOverride, Wrapper};
