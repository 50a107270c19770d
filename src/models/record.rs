/// One `<index>\t<payload>` line of an index file, borrowed from the line buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRecord<'a> {
    pub index: &'a str,
    pub payload: &'a str,
}

impl<'a> IndexRecord<'a> {
    /// Split a line (terminator already stripped) on its first tab
    ///
    /// Returns `None` when the line has no tab. Tabs after the first belong to the payload.
    pub fn from_line(line: &'a str) -> Option<Self> {
        let (index, payload) = line.split_once('\t')?;
        Some(Self { index, payload })
    }

    /// Exact textual comparison, `"07"` does not match `"7"`
    pub fn matches(&self, key: &str) -> bool {
        self.index == key
    }
}
