//! Zero-copy sentence segmenter
//!
//! Splits text on runs of `.`, `!` and `?`. Units that are empty or only
//! whitespace are skipped.

/// Sentence terminator characters
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

fn is_terminator(c: char) -> bool {
    TERMINATORS.contains(&c)
}

/// One sentence-level unit borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Trimmed text without terminators
    pub text: &'a str,
    /// First character of the terminator run, `None` at end of input
    pub terminator: Option<char>,
    /// Byte offset of `text` in the source
    pub offset: usize,
}

/// Iterator over the sentences of a text
pub struct Segmenter<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Segmenter<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }
}

impl<'a> Iterator for Segmenter<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.input.len() {
            let start = self.position;
            let rest = self.remaining();

            let (body_len, terminator) = match rest.find(is_terminator) {
                Some(idx) => (idx, rest[idx..].chars().next()),
                None => (rest.len(), None),
            };
            let body = &rest[..body_len];

            // Consume the body plus the whole terminator run
            self.position += body_len;
            let run: usize = self
                .remaining()
                .chars()
                .take_while(|c| is_terminator(*c))
                .map(char::len_utf8)
                .sum();
            self.position += run;

            let trimmed = body.trim();
            if trimmed.is_empty() {
                continue;
            }

            let lead = body.len() - body.trim_start().len();
            return Some(Sentence {
                text: trimmed,
                terminator,
                offset: start + lead,
            });
        }
        None
    }
}

/// Split `text` into sentences
pub fn sentences(text: &str) -> Segmenter<'_> {
    Segmenter::new(text)
}
