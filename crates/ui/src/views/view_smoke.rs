use super::test_harness::{
    ViewKind, drive_dom, setup_view_harness, setup_view_harness_with_progress,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_overall_progress() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("0 of 99 questions completed"), "missing totals in {html}");
    assert!(html.contains("Browse topics"), "missing cta in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_renders_every_topic() {
    let mut harness = setup_view_harness(ViewKind::Topics).await;
    harness.rebuild();
    let html = harness.render();
    for name in ["React Hooks", "Performance", "Design Patterns"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
    assert!(html.contains("0%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_renders_question_cards() {
    let mut harness = setup_view_harness(ViewKind::Topic("react-hooks".into())).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Questions (35)"), "missing heading in {html}");
    assert!(html.contains("Missing useEffect Dependencies"), "missing title in {html}");
    assert!(html.contains("Mark Done"), "missing completion button in {html}");
    assert!(html.contains("Reveal Mistakes"), "missing mistake toggle in {html}");
    assert!(html.contains("EASY"), "missing badge in {html}");
    assert!(html.contains(r#"data-lang="tsx""#), "missing highlighted code in {html}");
    assert!(!html.contains("mistake__tooltip"), "markers should start hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_topic_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Topic("react-hookz".into())).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Topic not found"), "missing not found in {html}");
    assert!(!html.contains("Questions ("), "unexpected list in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn not_found_view_smoke_renders_path() {
    let mut harness =
        setup_view_harness(ViewKind::NotFound(vec!["nope".into(), "here".into()])).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Page not found"), "missing title in {html}");
    assert!(html.contains("/nope/here"), "missing path in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn saved_progress_appears_after_hydration() {
    let mut harness = setup_view_harness_with_progress(
        ViewKind::Topic("react-hooks".into()),
        Some(r#"{"completed":["h1"],"saved":[]}"#),
    )
    .await;
    harness.rebuild_first_frame();
    let first_frame = harness.render();
    assert!(first_frame.contains("Mark Done"), "missing button in {first_frame}");
    assert!(
        !first_frame.contains("Completed"),
        "first frame must render before progress loads: {first_frame}"
    );
    assert!(!first_frame.contains("btn-done--completed"), "{first_frame}");

    harness.drive_async().await;
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Completed"), "missing completed state in {html}");
    assert!(html.contains("btn-done--completed"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_grid_reflects_hydrated_progress() {
    let mut harness = setup_view_harness_with_progress(
        ViewKind::Topics,
        Some(r#"{"completed":["h1"]}"#),
    )
    .await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("3%"), "missing hooks percentage in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn corrupted_progress_renders_as_untouched() {
    let mut harness =
        setup_view_harness_with_progress(ViewKind::Home, Some("not json")).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("0 of 99 questions completed"), "missing totals in {html}");
}
