//! Reelcut Core - Cut-list data model
//!
//! Provides the fundamental types for describing which parts of a media
//! timeline survive an edit:
//! - Frame-range sections and their overlap-aware ordering
//! - The cut list with its sorted, non-overlapping invariant
//! - Transition styles and shared error types

pub mod cuts;
pub mod error;
pub mod section;

pub use cuts::{CutList, TransitionStyle};
pub use error::{CutError, Result};
pub use section::{CutSection, SectionOrder};
