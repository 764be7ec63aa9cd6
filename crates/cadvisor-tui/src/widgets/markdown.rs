//! Markdown-lite rendering for chat bubbles
//!
//! The advisory model answers with light markdown: `**bold**` emphasis
//! and `*`/`-` list markers. Reply text becomes styled spans directly,
//! so untrusted text is only ever treated as text content, never parsed
//! as markup.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Parse one logical line into spans: `**bold**` runs become bold,
/// a leading `* ` or `- ` list marker becomes a bullet.
pub fn markdown_spans(line: &str, base: Style) -> Vec<Span<'static>> {
    let trimmed = line.trim_start();
    let indent = line.len() - trimmed.len();
    let (prefix, rest) = if trimmed.starts_with("* ") || trimmed.starts_with("- ") {
        (
            format!("{}\u{2022} ", " ".repeat(indent)),
            &trimmed[2..],
        )
    } else {
        (String::new(), line)
    };

    let mut spans = Vec::new();
    if !prefix.is_empty() {
        spans.push(Span::styled(prefix, base));
    }

    let mut bold = false;
    for (i, chunk) in rest.split("**").enumerate() {
        if i > 0 {
            bold = !bold;
        }
        if chunk.is_empty() {
            continue;
        }
        let style = if bold {
            base.add_modifier(Modifier::BOLD)
        } else {
            base
        };
        spans.push(Span::styled(chunk.to_string(), style));
    }

    // Unbalanced ** markers: the trailing run already rendered bold,
    // which is the forgiving choice for model output.
    spans
}

/// Greedy word wrap over styled spans.
///
/// Splits at spaces, keeps each word's style, and hard-splits words wider
/// than the line. Zero width yields nothing rather than looping.
pub fn wrap_spans(spans: Vec<Span<'static>>, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    if width == 0 {
        return Vec::new();
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<Span> = Vec::new();
    let mut current_width = 0usize;

    let mut flush = |current: &mut Vec<Span<'static>>, current_width: &mut usize| {
        lines.push(Line::from(std::mem::take(current)));
        *current_width = 0;
    };

    for span in spans {
        let style = span.style;
        let content = span.content.into_owned();

        for piece in content.split_inclusive(' ') {
            let mut piece = piece;
            loop {
                let piece_width = piece.width();
                if current_width + piece_width <= width {
                    if !piece.is_empty() {
                        current.push(Span::styled(piece.to_string(), style));
                        current_width += piece_width;
                    }
                    break;
                }

                // Piece does not fit. Wrap first if the line has content,
                // otherwise hard-split the oversized word.
                if current_width > 0 {
                    flush(&mut current, &mut current_width);
                    piece = piece.trim_start_matches(' ');
                    continue;
                }

                let mut take = 0;
                let mut taken_width = 0;
                for (idx, c) in piece.char_indices() {
                    let w = c.to_string().width();
                    if taken_width + w > width {
                        break;
                    }
                    take = idx + c.len_utf8();
                    taken_width += w;
                }
                if take == 0 {
                    // Single glyph wider than the line; drop it.
                    piece = "";
                    continue;
                }
                current.push(Span::styled(piece[..take].to_string(), style));
                current_width += taken_width;
                flush(&mut current, &mut current_width);
                piece = &piece[take..];
            }
        }
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Render one bubble's text: markdown-lite per logical line, wrapped.
pub fn bubble_lines(text: &str, width: u16, base: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for logical in text.split('\n') {
        if logical.is_empty() {
            lines.push(Line::default());
            continue;
        }
        let spans = markdown_spans(logical, base);
        let wrapped = wrap_spans(spans, width);
        if wrapped.is_empty() {
            lines.push(Line::default());
        } else {
            lines.extend(wrapped);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_bold_run_becomes_bold_span() {
        let spans = markdown_spans("learn **SQL** first", Style::default());
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content.as_ref(), "SQL");
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_list_marker_normalized_to_bullet() {
        let spans = markdown_spans("* first step", Style::default());
        assert_eq!(spans[0].content.as_ref(), "\u{2022} ");
        assert_eq!(spans[1].content.as_ref(), "first step");

        let spans = markdown_spans("- second", Style::default());
        assert_eq!(spans[0].content.as_ref(), "\u{2022} ");
    }

    #[test]
    fn test_plain_text_untouched() {
        let spans = markdown_spans("a * b is not a list", Style::default());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content.as_ref(), "a * b is not a list");
    }

    #[test]
    fn test_wrap_keeps_words_whole() {
        let spans = vec![Span::raw("alpha beta gamma")];
        let lines = wrap_spans(spans, 10);
        assert_eq!(lines.len(), 2);
        assert_eq!(text_of(&lines[0]), "alpha ");
        assert_eq!(text_of(&lines[1]), "beta gamma");
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        let spans = vec![Span::raw("abcdefghij")];
        let lines = wrap_spans(spans, 4);
        assert_eq!(lines.len(), 3);
        assert_eq!(text_of(&lines[0]), "abcd");
        assert_eq!(text_of(&lines[2]), "ij");
    }

    #[test]
    fn test_wrap_zero_width_is_empty() {
        assert!(wrap_spans(vec![Span::raw("x")], 0).is_empty());
    }

    #[test]
    fn test_bubble_lines_preserve_newlines() {
        let lines = bubble_lines("one\n\ntwo", 20, Style::default());
        assert_eq!(lines.len(), 3);
        assert_eq!(text_of(&lines[0]), "one");
        assert_eq!(text_of(&lines[1]), "");
        assert_eq!(text_of(&lines[2]), "two");
    }
}
