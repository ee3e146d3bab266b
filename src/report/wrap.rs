//! Greedy word wrapping with indents.
//!
//! Text is split into alternating word and whitespace chunks, and lines are
//! filled greedily. Whitespace at the end of a line, and at the start of
//! every line but the first, is dropped. Words longer than a whole line are
//! broken. Hyphenated words may be split after a hyphen that sits between
//! words.

const TAB_SIZE: usize = 8;

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Word wrapper for report text.
///
/// # Example
///
/// ```
/// use module_query::report::TextWrapper;
///
/// let wrapper = TextWrapper::new(16).initial_indent(2).subsequent_indent(4);
/// assert_eq!(
///     wrapper.wrap("the quick brown fox jumps"),
///     vec!["  the quick", "    brown fox", "    jumps"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TextWrapper {
    width: usize,
    initial_indent: String,
    subsequent_indent: String,
    replace_whitespace: bool,
}

impl TextWrapper {
    /// Create a wrapper producing lines of at most `width` columns,
    /// indents included.
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            initial_indent: String::new(),
            subsequent_indent: String::new(),
            replace_whitespace: true,
        }
    }

    /// Indent the first line by `columns` spaces.
    pub fn initial_indent(mut self, columns: usize) -> Self {
        self.initial_indent = " ".repeat(columns);
        self
    }

    /// Indent every line after the first by `columns` spaces.
    pub fn subsequent_indent(mut self, columns: usize) -> Self {
        self.subsequent_indent = " ".repeat(columns);
        self
    }

    /// Keep newlines and other whitespace characters instead of turning
    /// each into a space.
    pub fn preserve_whitespace(mut self) -> Self {
        self.replace_whitespace = false;
        self
    }

    /// Wrap `text` into lines.
    pub fn wrap(&self, text: &str) -> Vec<String> {
        let text = self.munge_whitespace(text);
        let mut chunks = split_chunks(&text);
        chunks.reverse();
        self.wrap_chunks(chunks)
    }

    /// Wrap `text` and join the lines with newlines.
    pub fn fill(&self, text: &str) -> String {
        self.wrap(text).join("\n")
    }

    fn munge_whitespace(&self, text: &str) -> String {
        let expanded = expand_tabs(text);
        if self.replace_whitespace {
            expanded
                .chars()
                .map(|c| if is_space(c) { ' ' } else { c })
                .collect()
        } else {
            expanded
        }
    }

    // `chunks` is reversed so the next chunk is at the end.
    fn wrap_chunks(&self, mut chunks: Vec<String>) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        while !chunks.is_empty() {
            let indent = if lines.is_empty() {
                &self.initial_indent
            } else {
                &self.subsequent_indent
            };
            let width = self.width as isize - indent.chars().count() as isize;

            if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
                chunks.pop();
            }

            let mut line: Vec<String> = Vec::new();
            let mut line_len: isize = 0;

            while let Some(chunk) = chunks.last() {
                let len = chunk.chars().count() as isize;
                if line_len + len <= width {
                    line_len += len;
                    if let Some(chunk) = chunks.pop() {
                        line.push(chunk);
                    }
                } else {
                    break;
                }
            }

            if chunks
                .last()
                .is_some_and(|c| c.chars().count() as isize > width)
            {
                let space_left = if width < 1 {
                    1
                } else {
                    (width - line_len).max(1) as usize
                };
                if let Some(chunk) = chunks.pop() {
                    let head: String = chunk.chars().take(space_left).collect();
                    let tail: String = chunk.chars().skip(space_left).collect();
                    line.push(head);
                    if !tail.is_empty() {
                        chunks.push(tail);
                    }
                }
            }

            if line.last().is_some_and(|c| is_blank(c)) {
                line.pop();
            }

            if !line.is_empty() {
                lines.push(format!("{}{}", indent, line.concat()));
            }
        }

        lines
    }
}

fn is_blank(chunk: &str) -> bool {
    chunk.chars().all(is_space)
}

fn expand_tabs(text: &str) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.push_str(&" ".repeat(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Split text into whitespace runs and words.
///
/// A word is split after a hyphen when a letter precedes the hyphen with
/// at least one word character before it, and the hyphen is followed by
/// two or more word characters, one after the first being a letter. Runs of
/// two or more hyphens between words are split off as dashes.
fn split_chunks(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut at = 0;

    while at < chars.len() {
        match separator_end(&chars, at) {
            Some(end) => {
                if at > start {
                    chunks.push(chars[start..at].iter().collect());
                }
                chunks.push(chars[at..end].iter().collect());
                start = end;
                at = end;
            }
            None => at += 1,
        }
    }
    if start < chars.len() {
        chunks.push(chars[start..].iter().collect());
    }

    chunks
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_word_letter(c: char) -> bool {
    is_word(c) && !c.is_ascii_digit()
}

// End of a whitespace run, hyphenated word head or dash starting at `at`.
fn separator_end(chars: &[char], at: usize) -> Option<usize> {
    if is_space(chars[at]) {
        let len = chars[at..].iter().take_while(|c| is_space(**c)).count();
        return Some(at + len);
    }
    hyphenated_end(chars, at).or_else(|| dash_end(chars, at))
}

fn hyphenated_end(chars: &[char], at: usize) -> Option<usize> {
    let word_start = at
        + chars[at..]
            .iter()
            .take_while(|c| !is_space(**c) && !is_word(**c))
            .count();
    let word_len = chars[word_start..]
        .iter()
        .take_while(|c| is_word(**c))
        .count();
    let hyphen = word_start + word_len;

    if word_len < 2 || chars.get(hyphen) != Some(&'-') || !is_word_letter(chars[hyphen - 1]) {
        return None;
    }

    let tail: Vec<char> = chars[hyphen + 1..]
        .iter()
        .copied()
        .take_while(|c| is_word(*c))
        .collect();
    if tail.len() >= 2 && tail[1..].iter().any(|c| is_word_letter(*c)) {
        Some(hyphen + 1)
    } else {
        None
    }
}

fn dash_end(chars: &[char], at: usize) -> Option<usize> {
    let follows_word = at > 0 && (is_word(chars[at - 1]) || "!\"'&.,?".contains(chars[at - 1]));
    let dashes = chars[at..].iter().take_while(|c| **c == '-').count();
    let end = at + dashes;
    if follows_word && dashes >= 2 && chars.get(end).is_some_and(|c| is_word(*c)) {
        Some(end)
    } else {
        None
    }
}
