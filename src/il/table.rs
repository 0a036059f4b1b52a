//! Plain-text tables for the quadruple and triple listings.

/// Renders rows under a header, left-aligning every column to its widest cell.
pub fn render<const N: usize>(header: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = header.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_row(header.iter().copied(), &widths));
    for row in rows {
        lines.push(render_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn render_row<'a, I: Iterator<Item = &'a str>>(cells: I, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_aligned() {
        let rows = [
            ["+".to_string(), "b".to_string(), "c".to_string()],
            ["=".to_string(), "t10".to_string(), "-".to_string()],
        ];

        assert_eq!(
            render(["op", "arg1", "arg2"], &rows),
            "op  arg1  arg2\n+   b     c\n=   t10   -"
        );
    }

    #[test]
    fn empty_table_is_just_the_header() {
        assert_eq!(render(["index", "op"], &[]), "index  op");
    }
}
