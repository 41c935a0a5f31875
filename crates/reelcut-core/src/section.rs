//! Retained frame intervals and their ordering.

use serde::{Deserialize, Serialize};

/// Where one section sits relative to another on the timeline.
///
/// `Overlaps` is not an ordering: sections that share a start frame or
/// whose ranges collide are incomparable, and [`crate::CutList`] uses that
/// result to reject a conflicting insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOrder {
    Before,
    After,
    Overlaps,
}

/// One retained interval of the source timeline, from `start_frame` up to
/// `end_frame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CutSection {
    /// First retained frame
    pub start_frame: u64,
    /// Frame at which the section ends
    pub end_frame: u64,
}

impl CutSection {
    /// Create a new section. `end_frame` must not precede `start_frame`.
    pub fn new(start_frame: u64, end_frame: u64) -> Self {
        debug_assert!(end_frame >= start_frame);
        Self {
            start_frame,
            end_frame,
        }
    }

    /// Number of frames this section retains.
    #[inline]
    pub fn frames(self) -> u64 {
        self.end_frame - self.start_frame
    }

    /// Position of `self` relative to `other`.
    ///
    /// Two sections are ordered only when the earlier one ends strictly
    /// before the later one starts. AviSynth `trim` end frames are
    /// inclusive, so sections that merely touch (one ends where the other
    /// starts) still collide and yield [`SectionOrder::Overlaps`], as do
    /// sections sharing a start frame.
    pub fn relative_order(self, other: Self) -> SectionOrder {
        if self.start_frame == other.start_frame {
            return SectionOrder::Overlaps;
        }
        let (first, second) = if self.start_frame < other.start_frame {
            (self, other)
        } else {
            (other, self)
        };
        if first.end_frame >= second.start_frame {
            SectionOrder::Overlaps
        } else if self.start_frame < other.start_frame {
            SectionOrder::Before
        } else {
            SectionOrder::After
        }
    }
}
