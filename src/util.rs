//! Misc small utilities shared across modules.

/// Splits long text into chunks that each stay under `max_len` characters,
/// breaking only on line boundaries.
///
/// Joining the returned chunks with `\n` reproduces the input exactly. A
/// single line longer than `max_len` is kept whole as its own oversized
/// chunk rather than split mid-line.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    if text.is_empty() {
        return chunks;
    }

    let mut current = String::new();
    let mut current_len = 0usize;
    let mut has_lines = false;

    for line in text.split('\n') {
        let line_len = line.chars().count();
        if has_lines && current_len + 1 + line_len > max_len {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
            has_lines = false;
        }
        if has_lines {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(line);
        current_len += line_len;
        has_lines = true;
    }

    chunks.push(current);
    chunks
}
