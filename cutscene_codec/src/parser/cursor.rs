/// Left-to-right reader over a string slice.
///
/// Every method either consumes input or leaves the cursor untouched, so a
/// failed lookup never loses the caller's place.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub(crate) fn next_char(&mut self) -> Option<char> {
        let ch = self.rest().chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub(crate) fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consume the text before `delim` and the delimiter itself.
    ///
    /// Returns `None` and does not move when `delim` does not occur.
    pub(crate) fn take_until(&mut self, delim: char) -> Option<&'a str> {
        let rest = self.rest();
        let idx = rest.find(delim)?;
        self.pos += idx + delim.len_utf8();
        Some(&rest[..idx])
    }

    pub(crate) fn take_rest(&mut self) -> &'a str {
        let rest = self.rest();
        self.pos = self.src.len();
        rest
    }
}
