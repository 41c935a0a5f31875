//! Integration tests for the cut-list pipeline.
//!
//! Exercises the flow a real edit goes through: build a list with some
//! rejected insertions, persist and restore it, rescale it for a new
//! source, and compile it to a script.

use reelcut_core::{CutList, CutSection, TransitionStyle};
use reelcut_script::{append_to_script, cuts_script, CutListFile};

// ── Helpers ────────────────────────────────────────────────────

fn build_edit() -> CutList {
    let mut cuts = CutList::with_style(TransitionStyle::Fade);
    cuts.set_framerate(25.0).unwrap();

    // intentionally out of order, with one conflicting range
    assert!(cuts.add_section(CutSection::new(5000, 6000)));
    assert!(cuts.add_section(CutSection::new(0, 1200)));
    assert!(!cuts.add_section(CutSection::new(800, 2000)));
    assert!(cuts.add_section(CutSection::new(2500, 3600)));

    cuts
}

// ── List construction ──────────────────────────────────────────

#[test]
fn rejected_ranges_leave_a_clean_edit() {
    let cuts = build_edit();
    assert_eq!(
        cuts.sections(),
        &[
            CutSection::new(0, 1200),
            CutSection::new(2500, 3600),
            CutSection::new(5000, 6000),
        ]
    );
    assert_eq!(cuts.total_frames(), 3300);
    assert_eq!(cuts.min_length().unwrap(), 6000);
}

// ── Persistence round trip ─────────────────────────────────────

#[test]
fn save_load_preserves_the_edit_exactly() {
    let cuts = build_edit();
    let json = CutListFile::new(cuts.clone()).unwrap().to_json().unwrap();
    let restored = CutListFile::from_json(&json).unwrap().cuts;

    assert_eq!(restored, cuts);
    assert_eq!(restored.style(), TransitionStyle::Fade);
    assert_eq!(restored.framerate(), Some(25.0));
}

#[test]
fn restored_list_compiles_identically() {
    let cuts = build_edit();
    let json = CutListFile::new(cuts.clone()).unwrap().to_json().unwrap();
    let restored = CutListFile::from_json(&json).unwrap().cuts;

    assert_eq!(
        cuts_script(&cuts, false).unwrap(),
        cuts_script(&restored, false).unwrap()
    );
}

#[test]
fn file_roundtrip_through_disk() {
    let dir = std::env::temp_dir().join(format!("reelcut-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("edit.cuts.json");

    let cuts = build_edit();
    CutListFile::new(cuts.clone())
        .unwrap()
        .save_to_file(&path)
        .unwrap();
    let loaded = CutListFile::load_from_file(&path).unwrap();
    assert_eq!(loaded.cuts, cuts);

    std::fs::remove_dir_all(&dir).unwrap();
}

// ── Rescale then compile ───────────────────────────────────────

#[test]
fn rescaled_edit_compiles_with_new_boundaries() {
    let mut cuts = build_edit();
    cuts.rescale(50.0).unwrap();

    let script = cuts_script(&cuts, false).unwrap();
    assert!(script.contains("__t0 = __film.trim(0, 2400)"));
    assert!(script.contains("__t2 = __film.trim(10000, 12000)"));
    // fade duration follows the new framerate
    assert!(script.contains("FadeOut(__t0, 50)"));
}

// ── Audio-only split job ───────────────────────────────────────

#[test]
fn audio_script_scaffolds_and_recombines() {
    let cuts = build_edit();
    let script = cuts_script(&cuts, true).unwrap();

    let lines: Vec<&str> = script.lines().collect();
    assert_eq!(lines[1], "__film = last");
    assert_eq!(lines[2], "__just_audio = __film");
    assert_eq!(lines[3], "__blank = BlankClip(length=6000, fps=25)");
    assert_eq!(lines[4], "__film = AudioDub(__blank, __film)");
    assert_eq!(lines.last().unwrap(), &"AudioDubEx(__just_audio, last)");
}

#[test]
fn append_extends_an_existing_script() {
    let dir = std::env::temp_dir().join(format!("reelcut-append-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("job.avs");
    std::fs::write(&path, "AviSource(\"source.avi\")\n").unwrap();

    let cuts = build_edit();
    append_to_script(&path, &cuts, false).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("AviSource(\"source.avi\")\n"));
    assert!(contents.contains("__film = last"));
    assert!(contents.ends_with("\n\n"));

    std::fs::remove_dir_all(&dir).unwrap();
}
