//! Reelcut Script - turning cut lists into something runnable
//!
//! Stateless algorithms over a [`reelcut_core::CutList`]:
//! - AviSynth compilation: emit the statements that trim the source down
//!   to the retained sections and join them with the chosen transition
//! - Versioned persistence of the cut list itself

pub mod avisynth;
pub mod serialization;

pub use avisynth::{append_to_script, cuts_script};
pub use serialization::{CutListFile, CURRENT_VERSION};
