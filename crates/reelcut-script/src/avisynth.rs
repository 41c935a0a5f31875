//! AviSynth script generation for cut lists.
//!
//! The emitted fragment assumes `last` is already bound to the loaded
//! source clip, as it is in the scripts the fragment gets appended to.
//! Statement forms are a contract with the AviSynth engine; only the
//! `__t{i}` naming scheme is our own and it follows section order, since
//! the join line references the sub-clips positionally.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use reelcut_core::{CutError, CutList, Result, TransitionStyle};

/// Fixed dissolve blend length, in frames.
const DISSOLVE_LENGTH: u64 = 60;

/// Compile `cuts` into an AviSynth fragment that trims the source down to
/// the retained sections and joins them according to the list's style.
///
/// `trim` and the transition filters are defined over a combined
/// audio+video signal, so with `audio_only` set the fragment first dubs
/// the audio onto a synthesized blank clip sized by
/// [`CutList::min_length`], then strips the placeholder off again at the
/// end: `AudioDubEx` takes the (missing) video from `__just_audio` and so
/// carries only the processed audio forward.
///
/// Fails only when a needed ingredient is missing: `audio_only` on an
/// empty list, or a fade/blank clip without a framerate set. Everything
/// else, including an empty list in video mode, compiles.
pub fn cuts_script(cuts: &CutList, audio_only: bool) -> Result<String> {
    let mut script = String::from("\n__film = last\n");

    if audio_only {
        let length = cuts.min_length()?;
        let fps = framerate_of(cuts)?;
        script.push_str("__just_audio = __film\n");
        script.push_str(&format!("__blank = BlankClip(length={length}, fps={fps})\n"));
        script.push_str("__film = AudioDub(__blank, __film)\n");
    }

    for (i, section) in cuts.sections().iter().enumerate() {
        script.push_str(&format!(
            "__t{i} = __film.trim({}, {})\n",
            section.start_frame, section.end_frame
        ));
    }

    let count = cuts.len();
    match cuts.style() {
        TransitionStyle::NoTransition => {
            for i in 0..count {
                script.push_str(&format!("__t{i} "));
                if i < count - 1 {
                    script.push_str("++ ");
                }
            }
            script.push('\n');
        }
        TransitionStyle::Fade => {
            for i in 0..count {
                let first = i == 0;
                let last = i == count - 1;
                let clip = format!("__t{i}");
                if first && last {
                    // a sole section has nothing to fade into
                    script.push_str(&clip);
                } else {
                    let duration = framerate_of(cuts)? as u64;
                    script.push_str(&fade(&clip, first, last, audio_only, duration));
                }
                if !last {
                    script.push_str(" ++ ");
                }
            }
            script.push('\n');
        }
        TransitionStyle::Dissolve if count != 0 => {
            let mut joined = format!("__t{}", count - 1);
            for i in (0..count - 1).rev() {
                joined = format!("__t{i}.Dissolve({joined}, {DISSOLVE_LENGTH})");
            }
            script.push_str(&joined);
            script.push('\n');
        }
        TransitionStyle::Dissolve => {}
    }

    if audio_only {
        script.push_str("AudioDubEx(__just_audio, last)\n");
    }

    Ok(script)
}

/// Append the compiled fragment to a script file, creating it if needed.
pub fn append_to_script(path: &Path, cuts: &CutList, audio_only: bool) -> Result<()> {
    let fragment = cuts_script(cuts, audio_only)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(fragment.as_bytes())?;
    file.write_all(b"\n")?;
    tracing::debug!(path = %path.display(), sections = cuts.len(), "appended cut script");
    Ok(())
}

fn framerate_of(cuts: &CutList) -> Result<f64> {
    cuts.framerate().ok_or(CutError::InvalidFramerate)
}

/// Wrap a sub-clip expression in the fade filters its position calls for:
/// the first clip fades out into its successor, the last fades in, and
/// interior clips do both. `duration` is the framerate truncated to an
/// integer, i.e. roughly one second of fade. Audio mode layers the
/// zero-suffixed audio fade variants inside the plain ones.
fn fade(clip: &str, first: bool, last: bool, audio_only: bool, duration: u64) -> String {
    debug_assert!(!(first && last));
    if audio_only {
        if first {
            format!("FadeOut(FadeOut0({clip}, {duration}), {duration})")
        } else if last {
            format!("FadeIn(FadeIn0({clip}, {duration}), {duration})")
        } else {
            format!("FadeIO(FadeIO0({clip}, {duration}), {duration})")
        }
    } else if first {
        format!("FadeOut({clip}, {duration})")
    } else if last {
        format!("FadeIn({clip}, {duration})")
    } else {
        format!("FadeIO({clip}, {duration})")
    }
}
