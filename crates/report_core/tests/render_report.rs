use pretty_assertions::assert_eq;
use report_core::{
    render, update, Cell, Element, Msg, ReportState, ReportViewModel, SessionResult, Summary, Tone,
    UrlResult, COLUMN_HEADERS, FAILURE_MARKER, PAGE_TITLE, SUCCESS_MARKER,
};

fn url_result(url: &str, ok: bool) -> UrlResult {
    UrlResult {
        url: url.to_string(),
        ok,
        strategy: "http".to_string(),
        title: None,
        text_len: None,
        error: None,
    }
}

fn session(id: &str, ok: bool, results: Vec<UrlResult>) -> SessionResult {
    SessionResult {
        session_id: id.to_string(),
        ok,
        strategy: "headless".to_string(),
        results,
    }
}

fn summary(sessions: Vec<SessionResult>) -> Summary {
    Summary {
        ok: true,
        concurrent_sessions: sessions.len() as u32,
        sessions,
        output_dir: "artifacts/run-20240101".to_string(),
    }
}

/// Drives the state machine the way the binary does and renders the result.
fn render_outcome(result: Result<Summary, String>) -> report_core::Document {
    let (state, _) = update(ReportState::new(), Msg::Mounted);
    let mount_id = state.mount().expect("mounted");
    let (state, _) = update(state, Msg::SummaryLoaded { mount_id, result });
    render(&state.view())
}

fn cell_texts(cells: &[Cell]) -> Vec<&str> {
    cells.iter().map(|cell| cell.text.as_str()).collect()
}

#[test]
fn loading_renders_single_indicator() {
    let doc = render(&ReportViewModel::Loading);

    assert_eq!(doc.title, PAGE_TITLE);
    assert_eq!(doc.body.len(), 1);
    assert!(doc.is_loading());
    assert_eq!(doc.error_text(), None);
}

#[test]
fn network_failure_shows_error_and_no_table() {
    let doc = render_outcome(Err("transport error: network down".to_string()));

    assert!(doc.error_text().unwrap().contains("network down"));
    assert_eq!(doc.session_blocks().count(), 0);
    assert!(!doc.is_loading());
    assert_eq!(doc.body.len(), 1);
}

#[test]
fn empty_summary_shows_header_only() {
    let doc = render_outcome(Ok(Summary {
        ok: true,
        concurrent_sessions: 2,
        sessions: Vec::new(),
        output_dir: "/tmp/out".to_string(),
    }));

    assert_eq!(
        doc.body,
        vec![
            Element::Field {
                label: "Overall success".to_string(),
                value: "succeeded".to_string(),
                tone: Tone::Success,
            },
            Element::Field {
                label: "Concurrent sessions".to_string(),
                value: "2".to_string(),
                tone: Tone::Normal,
            },
            Element::Field {
                label: "Artifacts".to_string(),
                value: "/tmp/out".to_string(),
                tone: Tone::Normal,
            },
        ]
    );
    assert_eq!(doc.session_blocks().count(), 0);
}

#[test]
fn blocked_job_is_labelled_blocked() {
    let mut blocked = summary(Vec::new());
    blocked.ok = false;
    let doc = render_outcome(Ok(blocked));

    assert!(matches!(
        &doc.body[0],
        Element::Field { value, tone: Tone::Error, .. } if value == "blocked"
    ));
}

#[test]
fn failed_session_with_sparse_result_uses_fallbacks() {
    let mut result = url_result("http://x", false);
    result.strategy = "headless".to_string();
    result.error = Some("timeout".to_string());
    let doc = render_outcome(Ok(summary(vec![session("s1", false, vec![result])])));

    let blocks: Vec<_> = doc.session_blocks().collect();
    assert_eq!(blocks.len(), 1);
    let block = blocks[0];
    assert_eq!(block.key, "s1");
    assert_eq!(block.label, "s1 (headless)");
    assert_eq!(block.marker, FAILURE_MARKER);
    assert_eq!(block.tone, Tone::Error);
    assert_eq!(block.headers, COLUMN_HEADERS.to_vec());

    assert_eq!(block.rows.len(), 1);
    let row = &block.rows[0];
    assert_eq!(row.key, 1);
    assert_eq!(
        cell_texts(&row.cells),
        vec!["1", "http://x", "", "0", FAILURE_MARKER, "timeout"]
    );
    assert_eq!(row.cells[1].title.as_deref(), Some("http://x"));
    assert!(row.cells[1].truncate);
    assert_eq!(row.cells[5].tone, Tone::Error);
}

#[test]
fn present_optional_fields_are_shown_and_html_is_not() {
    let input: Summary = serde_json::from_str(
        r#"{"ok": true, "concurrent_sessions": 1, "output_dir": "out", "sessions": [
            {"session_id": "s1", "ok": true, "strategy": "uc", "results": [
                {"url": "https://example.com/a", "ok": true, "strategy": "uc",
                 "title": "Listing A", "text_len": 5120,
                 "html": "<html>secret markup</html>"}]}]}"#,
    )
    .unwrap();
    let doc = render_outcome(Ok(input));

    let row = &doc.session_block("s1").unwrap().rows[0];
    assert_eq!(
        cell_texts(&row.cells),
        vec!["1", "https://example.com/a", "Listing A", "5120", SUCCESS_MARKER, ""]
    );
    assert_eq!(row.cells[5].tone, Tone::Normal);
    assert!(row
        .cells
        .iter()
        .all(|cell| !cell.text.contains("secret markup")));
}

#[test]
fn blocks_and_rows_follow_input_order_with_one_based_indices() {
    let sessions = vec![
        session(
            "s2-zzz",
            true,
            vec![
                url_result("https://c.example", true),
                url_result("https://a.example", false),
                url_result("https://b.example", true),
            ],
        ),
        session("s1-aaa", false, Vec::new()),
        session("s3-mmm", true, vec![url_result("https://d.example", true)]),
    ];
    let input = summary(sessions);
    let doc = render_outcome(Ok(input.clone()));

    let keys: Vec<_> = doc.session_blocks().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, vec!["s2-zzz", "s1-aaa", "s3-mmm"]);

    for (block, source) in doc.session_blocks().zip(&input.sessions) {
        assert_eq!(block.rows.len(), source.results.len());
        let indices: Vec<_> = block.rows.iter().map(|r| r.key).collect();
        assert_eq!(indices, (1..=source.results.len()).collect::<Vec<_>>());
        let urls: Vec<_> = block.rows.iter().map(|r| r.cells[1].text.as_str()).collect();
        let expected: Vec<_> = source.results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, expected);
    }
}

#[test]
fn repeated_urls_get_distinct_row_keys() {
    let results = vec![
        url_result("https://same.example", false),
        url_result("https://same.example", true),
    ];
    let doc = render_outcome(Ok(summary(vec![session("s1", true, results)])));

    let keys: Vec<_> = doc.session_block("s1").unwrap().rows.iter().map(|r| r.key).collect();
    assert_eq!(keys, vec![1, 2]);
}

#[test]
fn duplicate_session_ids_render_all_blocks_and_lookup_takes_last() {
    let sessions = vec![
        session("dup", true, vec![url_result("https://first.example", true)]),
        session("dup", false, vec![url_result("https://second.example", false)]),
    ];
    let doc = render_outcome(Ok(summary(sessions)));

    assert_eq!(doc.session_blocks().count(), 2);
    let last = doc.session_block("dup").unwrap();
    assert_eq!(last.marker, FAILURE_MARKER);
    assert_eq!(last.rows[0].cells[1].text, "https://second.example");
}

#[test]
fn rendering_is_idempotent() {
    let mut titled = url_result("https://a.example", true);
    titled.title = Some("A".to_string());
    let input = summary(vec![
        session("s1", true, vec![titled, url_result("https://b.example", false)]),
        session("s2", false, Vec::new()),
    ]);
    let view = ReportViewModel::from_summary(&input);

    assert_eq!(render(&view), render(&view));
}
