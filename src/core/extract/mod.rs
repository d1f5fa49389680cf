//! Marker-based literal extraction.
//!
//! [`LiteralExtractor`] walks source text once, left to right, and harvests the
//! string literal of every `marker("...")` call. The walk understands just
//! enough C-family syntax to stay out of comments, string literals and
//! character literals, so markers mentioned there are never mistaken for
//! calls. C++ raw string literals are skipped whole.
//!
//! An unterminated literal after a marker is reported as a
//! [`MalformedLiteralIssue`] and the walk resumes at the next newline.

mod comments;
mod lexer;


use comments::CommentTracker;
use lexer::{
    LiteralScan, RawScan, block_comment_end, char_literal_end, ident_end, is_ident_start,
    is_raw_prefix, line_comment_end, read_literal, read_raw_literal, skip_whitespace,
};

use crate::{
    core::{
        ExtractionRecord, FileExtraction, SourceContext, SourceLocation,
        utils::{LineIndex, unescape},
    },
    issues::MalformedLiteralIssue,
};

/// Marker used when nothing else is configured, as in `#define _(s) gettext(s)`.
pub const DEFAULT_MARKER: &str = "_";

/// Identifiers that wrap translatable literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerConfig {
    pub symbols: Vec<String>,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl MarkerConfig {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbols: vec![symbol.into()],
        }
    }

    pub fn with_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_marker(&self, ident: &str) -> bool {
        self.symbols.iter().any(|s| s == ident)
    }
}

/// Scans source text for marker calls.
///
/// The extractor holds configuration only; every call to [`extract`] is
/// independent, so one instance can be shared across threads.
///
/// [`extract`]: LiteralExtractor::extract
#[derive(Debug, Clone, Default)]
pub struct LiteralExtractor {
    markers: MarkerConfig,
    comment_tag: Option<String>,
}

impl LiteralExtractor {
    pub fn new(markers: MarkerConfig) -> Self {
        Self {
            markers,
            comment_tag: None,
        }
    }

    /// Attach comments starting with `tag` to the records that follow them.
    pub fn with_comment_tag(mut self, tag: Option<String>) -> Self {
        self.comment_tag = tag;
        self
    }

    /// Extract every marker call from `source`.
    ///
    /// `file_path` is copied into each record and issue as-is.
    pub fn extract(&self, file_path: &str, source: &str) -> FileExtraction {
        Scanner {
            markers: &self.markers,
            file_path,
            source,
            bytes: source.as_bytes(),
            lines: LineIndex::new(source),
            comments: CommentTracker::new(self.comment_tag.as_deref()),
            out: FileExtraction::default(),
        }
        .run()
    }
}

/// Extract with a single marker symbol.
pub fn extract(file_path: &str, source: &str, marker: &str) -> FileExtraction {
    LiteralExtractor::new(MarkerConfig::new(marker)).extract(file_path, source)
}

struct Scanner<'a> {
    markers: &'a MarkerConfig,
    file_path: &'a str,
    source: &'a str,
    bytes: &'a [u8],
    lines: LineIndex,
    comments: CommentTracker<'a>,
    out: FileExtraction,
}

impl Scanner<'_> {
    fn run(mut self) -> FileExtraction {
        let mut i = 0;
        while i < self.bytes.len() {
            i = match self.bytes[i] {
                b'/' if self.bytes.get(i + 1) == Some(&b'/') => {
                    let end = line_comment_end(self.bytes, i);
                    self.comment(i, i + 2, end, end);
                    end
                }
                b'/' if self.bytes.get(i + 1) == Some(&b'*') => {
                    let end = block_comment_end(self.bytes, i);
                    let closed = end >= i + 4 && &self.bytes[end - 2..end] == b"*/";
                    let body_end = if closed { end - 2 } else { end };
                    self.comment(i, i + 2, body_end, end);
                    end
                }
                b'"' => match read_literal(self.source, i) {
                    LiteralScan::Closed { end, .. } => end,
                    LiteralScan::Unterminated { resume } => resume,
                },
                b'\'' => char_literal_end(self.source, i).unwrap_or(i + 1),
                b if is_ident_start(b) => {
                    let end = ident_end(self.bytes, i);
                    self.identifier(i, end)
                }
                // Numbers such as `1_000` must not expose a `_` marker.
                b if b.is_ascii_digit() => ident_end(self.bytes, i),
                _ => i + 1,
            };
        }
        self.out
    }

    fn comment(&mut self, start: usize, body_start: usize, body_end: usize, end: usize) {
        let start_line = self.lines.line(start);
        let end_line = self.lines.line(end.max(start + 1) - 1);
        let source = self.source;
        let body = &source[body_start..body_end.max(body_start)];
        self.comments.push(body, start_line, end_line);
    }

    /// Handle the identifier at `start..end`; returns where scanning resumes.
    fn identifier(&mut self, start: usize, end: usize) -> usize {
        let source = self.source;
        let ident = &source[start..end];
        if is_raw_prefix(ident) && self.bytes.get(end) == Some(&b'"') {
            return match read_raw_literal(source, end) {
                Some(RawScan::Closed { end, .. }) => end,
                Some(RawScan::Unterminated) => self.bytes.len(),
                None => end,
            };
        }
        if !self.markers.is_marker(ident) || self.bytes.get(end) != Some(&b'(') {
            return end;
        }

        let quote = skip_whitespace(self.bytes, end + 1);
        if self.bytes.get(quote) == Some(&b'R') && self.bytes.get(quote + 1) == Some(&b'"') {
            return match read_raw_literal(source, quote + 1) {
                Some(RawScan::Closed {
                    body,
                    end: literal_end,
                }) => self.call(start, end, body.to_string(), literal_end),
                Some(RawScan::Unterminated) => {
                    self.malformed(start, ident, line_comment_end(self.bytes, quote))
                }
                None => end,
            };
        }
        if self.bytes.get(quote) != Some(&b'"') {
            // `_(STRING)` in a macro definition, `_(name)`, `_()`
            return end;
        }

        match read_literal(source, quote) {
            LiteralScan::Closed {
                raw,
                end: literal_end,
            } => self.call(start, end, unescape(&raw), literal_end),
            LiteralScan::Unterminated { resume } => self.malformed(start, ident, resume),
        }
    }

    /// Record `literal` if the call closes right after it.
    fn call(&mut self, start: usize, marker_end: usize, literal: String, literal_end: usize) -> usize {
        let close = skip_whitespace(self.bytes, literal_end);
        if self.bytes.get(close) != Some(&b')') {
            return marker_end;
        }
        let source = self.source;
        let line = self.lines.line(start);
        self.out.records.push(ExtractionRecord {
            source_file: self.file_path.to_string(),
            line,
            col: self.lines.col(source, start),
            literal,
            comments: self.comments.take_comments_for(line),
        });
        close + 1
    }

    fn malformed(&mut self, start: usize, marker: &str, resume: usize) -> usize {
        let source = self.source;
        let line = self.lines.line(start);
        let location = SourceLocation::new(self.file_path, line, self.lines.col(source, start));
        self.out.malformed.push(MalformedLiteralIssue {
            context: SourceContext::new(location, self.lines.line_text(source, line)),
            marker: marker.to_string(),
        });
        resume
    }
}
