//! Source line and caret rendering for token-anchored errors.
//!
//! ```text
//! with {
//!   3 | x :: 2
//!       ^ redefinition of identifier 'x'
//! }
//! ```

use std::fmt::Write;

use bee_ir::Span;

/// Byte offset of every line start, for 1-based line/column lookup.
#[derive(Clone, Debug, Default)]
pub struct LineTable {
    starts: Vec<usize>,
}

impl LineTable {
    pub fn build(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        LineTable { starts }
    }

    /// 1-based line containing `offset`.
    pub fn line(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(exact) => exact + 1,
            Err(insert) => insert.max(1),
        }
    }

    /// 1-based (line, column); the column counts characters.
    pub fn line_col(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.line(offset);
        let start = self.starts[line - 1];
        let offset = offset.min(source.len());
        let column = source.get(start..offset).map_or(0, |s| s.chars().count());
        (line, column + 1)
    }

    /// Text of a 1-based line without its terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: usize) -> &'s str {
        let Some(&start) = self.starts.get(line.wrapping_sub(1)) else {
            return "";
        };
        let end = self
            .starts
            .get(line)
            .map_or(source.len(), |next| next.saturating_sub(1));
        source
            .get(start..end)
            .unwrap_or("")
            .trim_end_matches('\r')
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}

/// Render `description` under the source line containing `span`.
pub fn render(source: &str, span: Span, description: &str) -> String {
    let table = LineTable::build(source);
    let (line, column) = table.line_col(source, span.start as usize);
    let text = table.line_text(source, line);

    let width = source
        .get(span.to_range())
        .map_or(1, |token| token.chars().count().max(1));
    let gutter = line.to_string().len() + 5;

    let mut out = String::new();
    let _ = write!(
        out,
        "with {{\n  {line} | {text}\n{pad}{carets} {description}\n}}",
        pad = " ".repeat(gutter + column - 1),
        carets = "^".repeat(width),
    );
    out
}

#[cfg(test)]
mod tests;
