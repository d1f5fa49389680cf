/// Index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first `\n`, etc.
#[derive(Debug, Clone)]
pub struct LineIndex {
    offsets: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let mut offsets = vec![0];
        for (i, b) in content.bytes().enumerate() {
            if b == b'\n' {
                offsets.push(i + 1);
            }
        }
        Self { offsets }
    }

    /// 1-based line number containing `offset`.
    pub fn line(&self, offset: usize) -> usize {
        match self.offsets.binary_search(&offset) {
            Ok(line) => line + 1, // Exact match at line start
            Err(line) => line,    // Falls within this line
        }
    }

    /// 1-based character column of `offset` within its line.
    pub fn col(&self, content: &str, offset: usize) -> usize {
        let start = self.line_start(self.line(offset));
        content[start..offset].chars().count() + 1
    }

    /// Text of a 1-based line, without the trailing line ending.
    pub fn line_text<'a>(&self, content: &'a str, line: usize) -> &'a str {
        let start = self.line_start(line);
        let end = self
            .offsets
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(content.len());
        content[start..end].trim_end_matches('\r')
    }

    fn line_start(&self, line: usize) -> usize {
        self.offsets[line.saturating_sub(1).min(self.offsets.len() - 1)]
    }
}
