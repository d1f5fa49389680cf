//! Translator comments (`xgettext --add-comments=TAG`).
//!
//! The extractor feeds every comment it skips into a [`CommentTracker`]. A
//! record picks up the current block when the block ends on the record's line
//! or the line right above it and contains a line starting with the tag.

#[derive(Debug)]
struct CommentBlock {
    lines: Vec<String>,
    end_line: usize,
}

#[derive(Debug)]
pub struct CommentTracker<'a> {
    tag: Option<&'a str>,
    block: Option<CommentBlock>,
}

impl<'a> CommentTracker<'a> {
    pub fn new(tag: Option<&'a str>) -> Self {
        Self {
            tag: tag.filter(|t| !t.is_empty()),
            block: None,
        }
    }

    /// Register a comment body (without its `//` or `/* */` delimiters).
    pub fn push(&mut self, body: &str, start_line: usize, end_line: usize) {
        if self.tag.is_none() {
            return;
        }
        let lines = normalize_comment(body);
        match &mut self.block {
            Some(block) if start_line <= block.end_line + 1 => {
                block.lines.extend(lines);
                block.end_line = end_line;
            }
            _ => {
                self.block = Some(CommentBlock { lines, end_line });
            }
        }
    }

    /// Tagged comment lines that apply to a marker on `line`.
    ///
    /// A block that yields comments is consumed, so later markers on the same
    /// line get none.
    pub fn take_comments_for(&mut self, line: usize) -> Vec<String> {
        let (Some(tag), Some(block)) = (self.tag, &self.block) else {
            return Vec::new();
        };
        if block.end_line != line && block.end_line + 1 != line {
            return Vec::new();
        }
        let comments = block
            .lines
            .iter()
            .position(|l| l.starts_with(tag))
            .map(|start| block.lines[start..].to_vec())
            .unwrap_or_default();
        if !comments.is_empty() {
            self.block = None;
        }
        comments
    }
}

/// Split a comment body into trimmed lines, dropping `*` gutters and blanks.
fn normalize_comment(body: &str) -> Vec<String> {
    body.lines()
        .map(|l| {
            let l = l.trim();
            l.strip_prefix('*').map(str::trim_start).unwrap_or(l)
        })
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
