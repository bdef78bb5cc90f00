//! Approximate text metrics shared by all hosts.
//!
//! Layout happens in the core, before any renderer has a font loaded, so
//! glyph widths are estimated from the font size. The estimate matches a
//! proportional sans-serif closely enough for line breaking; renderers draw
//! each line as given.

const CHAR_WIDTH_FACTOR: f64 = 0.55;
const LINE_HEIGHT_FACTOR: f64 = 1.5;

pub fn char_width(font_size: f64) -> f64 {
    font_size * CHAR_WIDTH_FACTOR
}

pub fn line_height(font_size: f64) -> f64 {
    font_size * LINE_HEIGHT_FACTOR
}

pub fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * char_width(font_size)
}

/// Greedy word wrap to `max_width`. Words longer than a line are split.
pub fn wrap(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    let max_chars = ((max_width / char_width(font_size)).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }
        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if word_len <= max_chars {
            current.push_str(word);
            current_len = word_len;
        } else {
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(max_chars).peekable();
            while let Some(chunk) = chunks.next() {
                if chunks.peek().is_some() {
                    lines.push(chunk.iter().collect());
                } else {
                    current = chunk.iter().collect();
                    current_len = chunk.len();
                }
            }
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Wrap and keep at most `max_lines`, ending the last kept line with an
/// ellipsis when text was dropped.
pub fn clamp_lines(text: &str, max_width: f64, font_size: f64, max_lines: usize) -> Vec<String> {
    let mut lines = wrap(text, max_width, font_size);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let max_chars = ((max_width / char_width(font_size)).floor() as usize).max(2);
            let mut kept: String = last.chars().take(max_chars - 1).collect();
            kept = kept.trim_end().to_owned();
            kept.push('…');
            *last = kept;
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        // 11px per char at 20px font: 5 chars fit in 55px.
        let lines = wrap("ab cd efg hi", 55.0, 20.0);
        assert_eq!(lines, ["ab cd", "efg", "hi"]);
    }

    #[test]
    fn splits_long_words() {
        let lines = wrap("abcdefghijk", 55.0, 20.0);
        assert_eq!(lines, ["abcde", "fghij", "k"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap("   ", 100.0, 16.0).is_empty());
    }

    #[test]
    fn clamp_adds_ellipsis() {
        let lines = clamp_lines("aa bb cc dd ee ff", 55.0, 20.0, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'));
    }
}
