//! Output helpers shared by the backends.

use std::fmt;

/// A `fmt::Write` adapter that indents every line written through it.
///
/// Indentation is written lazily at the first character of a line, so blank
/// lines stay empty.
pub struct IndentingWriter<'a> {
    target: &'a mut dyn fmt::Write,
    indent: &'a str,
    level: usize,
    at_line_start: bool,
}

impl<'a> IndentingWriter<'a> {
    pub fn new(target: &'a mut dyn fmt::Write, indent: &'a str) -> Self {
        IndentingWriter {
            target,
            indent,
            level: 0,
            at_line_start: true,
        }
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn unindent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }
}

impl fmt::Write for IndentingWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for line in s.split_inclusive('\n') {
            if self.at_line_start && line != "\n" {
                for _ in 0..self.level {
                    self.target.write_str(self.indent)?;
                }
            }
            self.target.write_str(line)?;
            self.at_line_start = line.ends_with('\n');
        }
        Ok(())
    }
}

/// Format every item and join the results with `separator`.
pub fn join<TCollection, TItem, TFunc>(iter: TCollection, separator: &str, fmt: TFunc) -> String
where
    TCollection: IntoIterator<Item = TItem>,
    TFunc: Fn(TItem) -> String,
{
    iter.into_iter().map(fmt).collect::<Vec<_>>().join(separator)
}
