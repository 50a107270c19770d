use std::fmt;

/// Index key extracted from a fuzzy-finder selection line such as `"12. git status"`
///
/// Only the text before the first `.` is significant. It is trimmed and must consist
/// entirely of ASCII decimal digits, otherwise the selection is not an indexable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionKey(String);

impl SelectionKey {
    /// Parse the key portion of a selection string
    ///
    /// # Examples
    ///
    /// ```
    /// use fzf_preview::models::SelectionKey;
    ///
    /// let key = SelectionKey::parse(" 7. something").unwrap();
    /// assert_eq!(key.as_str(), "7");
    ///
    /// assert!(SelectionKey::parse("abc. label").is_none());
    /// ```
    pub fn parse(selection: &str) -> Option<Self> {
        let head = selection.split_once('.').map_or(selection, |(head, _)| head).trim();

        if head.is_empty() || !head.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self(head.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
