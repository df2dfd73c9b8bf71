/// Pure position information in Java source files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Position with context information in source code files.
///
/// Carries the source line so the reporter can render a caret under the
/// offending message key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    /// The source code line content for display.
    pub source_line: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// Byte offsets where each line of a text starts.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
/// Lookups are O(log n) via binary search.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Returns the 1-based line containing `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Returns 1-based `(line, col)` for a byte offset; columns count characters.
    pub fn line_col(&self, text: &str, offset: usize) -> (usize, usize) {
        let offset = offset.min(text.len());
        let line = self.line_of(offset);
        let line_start = self.line_starts[line - 1];
        let col = text
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0)
            + 1;
        (line, col)
    }

    /// Inverse of [`line_col`](Self::line_col). Columns past the end of the
    /// line clamp to its end; lines past the end of the text yield `None`.
    pub fn offset_of(&self, text: &str, line: usize, col: usize) -> Option<usize> {
        let line_text = self.line_text(text, line);
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let within = line_text
            .char_indices()
            .nth(col.saturating_sub(1))
            .map(|(i, _)| i)
            .unwrap_or(line_text.len());
        Some(start + within)
    }

    /// Returns the text of a 1-based line without its line terminator.
    pub fn line_text<'t>(&self, text: &'t str, line: usize) -> &'t str {
        let Some(&start) = self.line_starts.get(line.saturating_sub(1)) else {
            return "";
        };
        let end = self.line_starts.get(line).copied().unwrap_or(text.len());
        text.get(start..end)
            .unwrap_or("")
            .trim_end_matches(['\n', '\r'])
    }

    /// Builds a [`SourceContext`] for the byte offset within `text`.
    pub fn context_at(&self, file_path: &str, text: &str, offset: usize) -> SourceContext {
        let (line, col) = self.line_col(text, offset);
        SourceContext::new(
            SourceLocation::new(file_path, line, col),
            self.line_text(text, line),
        )
    }
}
