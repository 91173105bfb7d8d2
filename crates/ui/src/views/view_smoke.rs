use sprich_core::model::VocabEntry;

use super::test_harness::setup_drill_harness;

#[tokio::test(flavor = "current_thread")]
async fn drill_view_smoke_renders_word_pair_and_controls() {
    let mut harness = setup_drill_harness(
        vec![
            VocabEntry::new("Hallo", "Hello"),
            VocabEntry::new("Danke", "Thanks"),
        ],
        false,
    );
    harness.rebuild();
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Hallo"), "missing word in {html}");
    assert!(html.contains("Hello"), "missing translation in {html}");
    assert!(
        html.contains("Start Recording"),
        "missing record control in {html}"
    );
    assert!(html.contains("Next Word"), "missing next control in {html}");
    assert!(html.contains("1 / 2"), "missing position label in {html}");
    assert!(html.contains("<audio"), "missing playback control in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_smoke_degrades_failed_synthesis_to_no_playback() {
    let mut harness =
        setup_drill_harness(vec![VocabEntry::new("Hallo", "Hello")], true);
    harness.rebuild();
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Hallo"), "missing word in {html}");
    assert!(
        !html.contains("<audio"),
        "playback control should be absent in {html}"
    );
    assert!(
        html.contains("Start Recording"),
        "record control should survive in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_smoke_renders_empty_deck_hint() {
    let mut harness = setup_drill_harness(Vec::new(), false);
    harness.rebuild();
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(
        html.contains("No words available"),
        "missing empty hint in {html}"
    );
    assert!(!html.contains("Next Word"), "unexpected controls in {html}");
}
