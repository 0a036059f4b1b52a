//! Functionality for looking up the source line that contains a byte offset.
use crate::span::{Bytes, Span};

/// Finds the line containing `target_position`. Positions past the end of the source
/// (such as the zero-length end-of-input token) resolve to the last line.
pub fn find_line(source: &str, target_position: Bytes) -> LineContext<'_> {
    let lines = split_lines_inclusive(source);
    let last = lines.len() - 1;

    let mut position = Bytes::new(0);
    for (line_idx, line) in lines.into_iter().enumerate() {
        let end_position = position + line.len();
        if target_position < end_position || line_idx == last {
            return LineContext {
                source: line,
                range: Span::new(position, end_position),
                line_no: line_idx + 1,
            };
        }
        position = end_position;
    }

    unreachable!("split_lines_inclusive always yields at least one line")
}

fn split_lines_inclusive(source: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = source.split_inclusive('\n').collect();
    if lines.is_empty() || source.ends_with('\n') {
        lines.push(&source[source.len()..]);
    }
    lines
}

/// A single line of the program, together with its line number and byte range.
pub struct LineContext<'a> {
    source: &'a str,
    range: Span,
    line_no: usize,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(['\r', '\n'], "")
    }

    pub fn range(&self) -> Span {
        self.range
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// The number of characters between the start of the line and `position`.
    pub fn column_of(&self, position: Bytes) -> usize {
        let offset = usize::from(position - self.range().start()).min(self.source.len());
        self.source[..offset].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_line_in_empty_source() {
        let context = find_line("", Bytes::new(0));

        assert_eq!(context.line_no(), 1);
        assert_eq!(context.range(), Span::new(Bytes::new(0), Bytes::new(0)));
        assert_eq!(context.for_display(), "");
    }

    #[test]
    fn find_line_first_character_of_single_line() {
        let context = find_line("a = 1;", Bytes::new(0));

        assert_eq!(context.line_no(), 1);
        assert_eq!(context.range(), Span::new(Bytes::new(0), Bytes::new(6)));
    }

    #[test]
    fn find_line_first_character_of_next_line() {
        let context = find_line("a = 1;\nb = 2;", Bytes::new(8));

        assert_eq!(context.line_no(), 2);
        assert_eq!(context.for_display(), "b = 2;");
        assert_eq!(context.column_of(Bytes::new(8)), 1);
    }

    #[test]
    fn end_of_input_belongs_to_last_line() {
        let context = find_line("a = 1;\n", Bytes::new(7));

        assert_eq!(context.line_no(), 2);
        assert_eq!(context.for_display(), "");
    }

    #[test]
    fn crlf_is_stripped_for_display() {
        let context = find_line("a = 1;\r\nb = 2;", Bytes::new(2));

        assert_eq!(context.for_display(), "a = 1;");
    }
}
