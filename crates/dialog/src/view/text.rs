use unicode_width::UnicodeWidthChar;

const ESC: char = '\x1b';
const BEL: char = '\x07';
const TAB_WIDTH: usize = 4;

fn cell_width(ch: char) -> usize {
    ch.width().unwrap_or(0).max(1)
}

pub fn visual_width(text: &str) -> usize {
    text.chars().map(cell_width).sum()
}

/// Splits a word wider than `width` into chunks that each fit.
fn break_word(word: &str, width: usize) -> Vec<String> {
    let mut chunks = vec![String::new()];
    let mut used = 0;
    for ch in word.chars() {
        let w = cell_width(ch);
        if used + w > width && used > 0 {
            chunks.push(String::new());
            used = 0;
        }
        if let Some(chunk) = chunks.last_mut() {
            chunk.push(ch);
        }
        used += w;
    }
    chunks
}

/// Wraps at spaces where possible. Words that don't fit on a line of their
/// own are broken mid-word.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut rows: Vec<String> = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;
    for word in line.split(' ') {
        let word_width = visual_width(word);
        let needed = if row.is_empty() { word_width } else { row_width + 1 + word_width };
        if needed <= width {
            if !row.is_empty() {
                row.push(' ');
            }
            row.push_str(word);
            row_width = needed;
            continue;
        }
        if !row.is_empty() {
            rows.push(std::mem::take(&mut row));
        }
        let mut chunks = break_word(word, width);
        row = chunks.pop().unwrap_or_default();
        row_width = visual_width(&row);
        rows.extend(chunks);
    }
    rows.push(row);
    rows
}

/// Cuts `text` to `width` cells, ending in `…` when something was dropped.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if visual_width(text) <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = cell_width(ch);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}

fn skip_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    match chars.next() {
        // CSI runs until a final byte in 0x40..=0x7e.
        Some('[') => {
            for ch in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&ch) {
                    break;
                }
            }
        }
        // OSC ends with BEL or ESC \.
        Some(']') => {
            while let Some(ch) = chars.next() {
                if ch == BEL {
                    break;
                }
                if ch == ESC && chars.peek() == Some(&'\\') {
                    chars.next();
                    break;
                }
            }
        }
        _ => {}
    }
}

/// Drops escape sequences and control characters from a body line so they
/// can't move the terminal cursor. Tabs expand to the next tab stop.
pub fn sanitize_for_tui(value: &str) -> String {
    let mut out = String::new();
    let mut column = 0;
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            ESC => skip_escape(&mut chars),
            '\t' => {
                let pad = TAB_WIDTH - column % TAB_WIDTH;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\r' => {}
            c if c.is_control() => {
                out.push(' ');
                column += 1;
            }
            c => {
                out.push(c);
                column += cell_width(c);
            }
        }
    }
    out
}
