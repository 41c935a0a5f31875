//! The cut list: an ordered, non-overlapping collection of retained
//! sections plus the framerate and transition style they belong to.

use serde::{Deserialize, Serialize};

use crate::error::{CutError, Result};
use crate::section::{CutSection, SectionOrder};

/// How consecutive retained sections are joined in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionStyle {
    /// Fade each section out/in over roughly one second.
    #[default]
    Fade,
    /// Hard cuts: sections spliced end-to-end.
    NoTransition,
    /// Each section dissolves into the remainder.
    Dissolve,
}

/// An ordered collection of non-overlapping [`CutSection`]s.
///
/// The section sequence is sorted by start frame at every observable
/// point; an insertion that would break that is rejected, not applied.
/// Cloning yields a fully independent copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutList {
    sections: Vec<CutSection>,
    framerate: Option<f64>,
    style: TransitionStyle,
}

impl CutList {
    /// Create an empty list with the default (fade) transition style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list with the given transition style.
    pub fn with_style(style: TransitionStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// The retained sections, sorted ascending by start frame.
    pub fn sections(&self) -> &[CutSection] {
        &self.sections
    }

    /// Number of sections in the list.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the list holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The framerate the frame numbers are relative to, if one is set.
    pub fn framerate(&self) -> Option<f64> {
        self.framerate
    }

    /// Set the framerate without touching any frame numbers.
    pub fn set_framerate(&mut self, fps: f64) -> Result<()> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(CutError::InvalidFramerate);
        }
        self.framerate = Some(fps);
        Ok(())
    }

    /// The transition style used when the list is compiled.
    pub fn style(&self) -> TransitionStyle {
        self.style
    }

    /// Change the transition style.
    pub fn set_style(&mut self, style: TransitionStyle) {
        self.style = style;
    }

    /// Try to insert `section`, keeping the list sorted and overlap-free.
    ///
    /// The section is appended to a scratch copy which is then re-sorted
    /// with [`CutSection::relative_order`]; if any comparison reports
    /// [`SectionOrder::Overlaps`] the list is left exactly as it was and
    /// `false` is returned. A single ordering relation both keeps the list
    /// sorted and detects collisions, which is plenty for lists of dozens
    /// of cuts.
    pub fn add_section(&mut self, section: CutSection) -> bool {
        let mut candidate = self.sections.clone();
        candidate.push(section);
        match try_sort(candidate) {
            Some(sorted) => {
                self.sections = sorted;
                true
            }
            None => false,
        }
    }

    /// Remove a section by value. Absent sections are ignored.
    pub fn remove(&mut self, section: &CutSection) {
        if let Some(pos) = self.sections.iter().position(|s| s == section) {
            self.sections.remove(pos);
        }
    }

    /// Drop every section. Framerate and style are untouched.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Rescale every frame boundary to a new framerate.
    ///
    /// Boundaries are multiplied by `new_fps / framerate` and truncated
    /// toward zero, so rescaling up and back down may shift a boundary by
    /// one frame. Fails with [`CutError::InvalidFramerate`] when no
    /// framerate has been established yet: scaling by an undefined ratio
    /// would silently corrupt every frame number.
    pub fn rescale(&mut self, new_fps: f64) -> Result<()> {
        let current = self
            .framerate
            .filter(|fps| fps.is_finite() && *fps > 0.0)
            .ok_or(CutError::InvalidFramerate)?;
        if !(new_fps.is_finite() && new_fps > 0.0) {
            return Err(CutError::InvalidFramerate);
        }
        let ratio = new_fps / current;
        for section in &mut self.sections {
            section.start_frame = (section.start_frame as f64 * ratio) as u64;
            section.end_frame = (section.end_frame as f64 * ratio) as u64;
        }
        self.framerate = Some(new_fps);
        Ok(())
    }

    /// Total number of retained frames across all sections. Zero for an
    /// empty list.
    pub fn total_frames(&self) -> u64 {
        self.sections.iter().map(|s| s.frames()).sum()
    }

    /// End frame of the last section: the shortest source length that
    /// contains every cut. Sizes the blank clip in audio-only compilation,
    /// so an empty list is an error here.
    pub fn min_length(&self) -> Result<u64> {
        self.sections
            .last()
            .map(|s| s.end_frame)
            .ok_or(CutError::Empty)
    }

    /// Whether the sections are sorted and mutually non-overlapping and
    /// the framerate, if set, is positive. Used to re-validate lists that
    /// arrive from deserialization rather than through [`Self::add_section`].
    pub fn is_well_formed(&self) -> bool {
        self.sections
            .iter()
            .all(|s| s.end_frame >= s.start_frame)
            && self
                .sections
                .windows(2)
                .all(|w| w[0].relative_order(w[1]) == SectionOrder::Before)
            && self
                .framerate
                .map_or(true, |fps| fps.is_finite() && fps > 0.0)
    }
}

/// Insertion sort driven by the tri-state section ordering. Returns `None`
/// as soon as any comparison reports an overlap, leaving the caller's own
/// storage untouched.
fn try_sort(mut sections: Vec<CutSection>) -> Option<Vec<CutSection>> {
    for i in 1..sections.len() {
        let mut j = i;
        while j > 0 {
            match sections[j - 1].relative_order(sections[j]) {
                SectionOrder::Before => break,
                SectionOrder::After => {
                    sections.swap(j - 1, j);
                    j -= 1;
                }
                SectionOrder::Overlaps => return None,
            }
        }
    }
    Some(sections)
}
