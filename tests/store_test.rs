//! End-to-end tests: write a profile store on disk, load it, identify.
//!
//! Each test gets its own temp directory so stores never interfere.

use langscout::identify::{identify_language, rank_languages};
use langscout::models::Text;
use langscout::profile::build_trigram_profile;
use langscout::store::ProfileStore;
use tempfile::TempDir;

fn lines(text: &str) -> Text {
    text.lines().map(str::to_string).collect()
}

/// Build a store with small hand-picked profiles for three languages.
fn seeded_store() -> (TempDir, ProfileStore) {
    let dir = tempfile::tempdir().expect("create temp dir");

    std::fs::write(
        dir.path().join("languages.csv"),
        "en,English\nes,Spanish\nfr,French\n",
    )
    .expect("write index");
    std::fs::write(
        dir.path().join("en.csv"),
        "the,69\nhe ,40\n th,35\nand,28\ning,25\nng ,18\n",
    )
    .expect("write en");
    std::fs::write(
        dir.path().join("es.csv"),
        "de ,60\nla ,42\nos ,35\n la,30\nent,22\nque,20\n",
    )
    .expect("write es");
    std::fs::write(
        dir.path().join("fr.csv"),
        "es ,55\nle ,45\nde ,40\nnt ,30\nque,28\neur,20\n",
    )
    .expect("write fr");

    let store = ProfileStore::new(dir.path());
    (dir, store)
}

#[test]
fn identifies_english_text() {
    let (_dir, store) = seeded_store();
    let profiles = store.load(None).expect("load profiles");

    let text = lines("the thing and the swing in the morning");
    assert_eq!(identify_language(&text, &profiles), "en");
}

#[test]
fn identifies_spanish_text() {
    let (_dir, store) = seeded_store();
    let profiles = store.load(None).expect("load profiles");

    let text = lines("la casa de los perros de la ciudad");
    assert_eq!(identify_language(&text, &profiles), "es");
}

#[test]
fn crlf_input_matches_plain_input() {
    let (_dir, store) = seeded_store();
    let profiles = store.load(None).expect("load profiles");

    let plain = lines("the thing and the swing");
    let crlf: Text = plain.iter().map(|l| format!("{l}\r")).collect();

    assert_eq!(
        identify_language(&plain, &profiles),
        identify_language(&crlf, &profiles)
    );
}

#[test]
fn allow_list_mismatch_leaves_no_candidates() {
    let (_dir, store) = seeded_store();
    let allow = vec!["zz".to_string()];
    let profiles = store.load(Some(&allow)).expect("load profiles");

    assert!(profiles.is_empty());
    assert_eq!(identify_language(&lines("the thing"), &profiles), "");
}

#[test]
fn ranking_covers_all_candidates_and_agrees_with_identify() {
    let (_dir, store) = seeded_store();
    let profiles = store.load(None).expect("load profiles");

    let text = lines("the thing and the swing in the morning");
    let ranked = rank_languages(&text, &profiles);

    assert_eq!(ranked.len(), 3);
    assert!(ranked[0].score >= ranked[1].score);
    assert!(ranked[1].score >= ranked[2].score);
    assert_eq!(ranked[0].code, identify_language(&text, &profiles));
    assert_eq!(ranked[0].name, "English");
}

#[test]
fn profiled_corpus_becomes_identifiable() {
    let (_dir, store) = seeded_store();

    // Profile a toy corpus and register it as a fourth language.
    let corpus = lines("zulu zebra zigzag\nzulu zebra zone\nzigzag zulu zest");
    let profile = build_trigram_profile(&corpus);
    store
        .save_profile("zz", "Zedish", &profile)
        .expect("save profile");

    let profiles = store.load(None).expect("reload profiles");
    assert_eq!(profiles.len(), 4);
    // Index order keeps the seeded languages first.
    assert_eq!(profiles[3].code, "zz");

    let text = lines("zebra zulu zigzag");
    assert_eq!(identify_language(&text, &profiles), "zz");
}

#[test]
fn degenerate_text_selects_first_candidate() {
    let (_dir, store) = seeded_store();
    let profiles = store.load(None).expect("load profiles");

    // Two-character input produces an empty text profile; every score
    // ties at zero and index order decides.
    let text = lines("ab");
    assert_eq!(identify_language(&text, &profiles), "en");
}
