//! Documentation comments.

/// A `/** ... */` block with a header, body lines and `@name value` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    header: String,
    lines: Vec<String>,
    metadata: Vec<(String, String)>,
}

impl Comment {
    /// Create a comment with only a header.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }

    /// Create a comment from all of its parts.
    pub fn with_parts<L, M, K, V>(header: impl Into<String>, lines: L, metadata: M) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut comment = Self::new(header);
        for line in lines {
            comment.push_line(line);
        }
        for (name, value) in metadata {
            comment.set_metadata(name, value);
        }
        comment
    }

    /// Add a body line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.push_line(line);
        self
    }

    /// Add a metadata tag.
    pub fn metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_metadata(name, value);
        self
    }

    /// Append a body line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Set a metadata tag, replacing any earlier value for the same name.
    pub fn set_metadata(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.metadata.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.metadata.push((name, value)),
        }
    }

    /// The header line.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The body lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Look up a metadata tag.
    pub fn get_metadata(&self, name: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over metadata tags.
    pub fn metadata_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.metadata.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Render the comment block.
    pub fn render(&self) -> String {
        if self.lines.is_empty() && self.metadata.is_empty() {
            return format!("/**\n * {}\n */", self.header);
        }

        let mut sections = Vec::with_capacity(3);
        if !self.header.is_empty() {
            sections.push(format!(" * {}", self.header));
        }
        if !self.lines.is_empty() {
            sections.push(
                self.lines
                    .iter()
                    .map(|line| format!(" * {line}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
        if !self.metadata.is_empty() {
            sections.push(
                self.metadata
                    .iter()
                    .map(|(name, value)| format!(" * @{name} {value}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        format!("/**\n{}\n */", sections.join("\n *\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only() {
        assert_eq!(Comment::new("Layout").render(), "/**\n * Layout\n */");
    }

    #[test]
    fn full_comment() {
        let comment = Comment::new("Comment header")
            .line("First line.")
            .line("Second line.")
            .metadata("author", "Some Body")
            .metadata("version", "1.0");

        assert_eq!(
            comment.render(),
            "/**\n * Comment header\n *\n * First line.\n * Second line.\n *\n * @author Some Body\n * @version 1.0\n */"
        );
    }

    #[test]
    fn metadata_without_lines() {
        let comment = Comment::with_parts("Header", Vec::<String>::new(), [("author", "Some Body")]);
        assert_eq!(comment.render(), "/**\n * Header\n *\n * @author Some Body\n */");
        assert_eq!(comment.get_metadata("author"), Some("Some Body"));
    }

    #[test]
    fn metadata_replaces_same_name() {
        let comment = Comment::new("h").metadata("a", "1").metadata("a", "2");
        assert_eq!(comment.metadata_iter().collect::<Vec<_>>(), [("a", "2")]);
    }
}
