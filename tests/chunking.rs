use butler_bot::util::split_message;

#[test]
fn short_text_is_a_single_chunk() {
    let chunks = split_message("short text", 2000);
    assert_eq!(chunks, vec!["short text".to_string()]);
}

#[test]
fn join_reproduces_input_exactly() {
    let text = "first line\n\nthird line\nfourth line\n";
    let chunks = split_message(text, 15);
    assert!(chunks.len() > 1);
    assert_eq!(chunks.join("\n"), text);
}

#[test]
fn blank_lines_survive_chunk_boundaries() {
    let text = "\n\naaaa\n\nbbbb\n\n";
    for max in [4, 5, 8, 100] {
        assert_eq!(split_message(text, max).join("\n"), text, "max={max}");
    }
}

#[test]
fn chunks_respect_the_limit() {
    let lines: Vec<String> = (0..50).map(|i| format!("line number {i}")).collect();
    let text = lines.join("\n");
    let chunks = split_message(&text, 60);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 60, "oversized chunk: {chunk:?}");
    }
    assert_eq!(chunks.join("\n"), text);
}

#[test]
fn oversized_single_line_stays_whole() {
    let long_line = "x".repeat(5000);
    let text = format!("intro\n{long_line}\noutro");
    let chunks = split_message(&text, 2000);
    assert!(chunks.iter().any(|c| c == &long_line));
    assert_eq!(chunks.join("\n"), text);
}

#[test]
fn long_guide_splits_into_three_ordered_chunks() {
    // 45 lines of 99 chars: 20 lines fit per 2000-char chunk, so 20/20/5.
    let line = "x".repeat(99);
    let text = vec![line; 45].join("\n");
    let chunks = split_message(&text, 2000);
    assert_eq!(chunks.len(), 3);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 2000);
    }
    assert_eq!(chunks.join("\n"), text);
}

#[test]
fn empty_text_yields_no_chunks() {
    assert!(split_message("", 2000).is_empty());
}
