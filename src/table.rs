//! Column padding for plain-text tables.

/// IRC bold toggle; takes no space when rendered.
const BOLD: char = '\u{2}';

fn visible_len(cell: &str) -> usize {
    cell.chars().filter(|&c| c != BOLD).count()
}

/// Pad every cell with spaces to the widest cell's visible length plus one.
pub fn pad_column<S: AsRef<str>>(cells: &[S]) -> Vec<String> {
    let width = cells
        .iter()
        .map(|c| visible_len(c.as_ref()))
        .max()
        .unwrap_or(0);

    cells
        .iter()
        .map(|c| {
            let c = c.as_ref();
            let pad = width - visible_len(c) + 1;
            format!("{}{}", c, " ".repeat(pad))
        })
        .collect()
}

/// Pad a table (rows of columns) so each column lines up.
///
/// Rows shorter than the widest row only have their existing cells padded.
pub fn pad_table<S: AsRef<str>>(rows: &[Vec<S>]) -> Vec<Vec<String>> {
    let mut out: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.iter().map(|c| c.as_ref().to_string()).collect())
        .collect();
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);

    for col in 0..columns {
        let present: Vec<usize> = (0..out.len()).filter(|&r| col < out[r].len()).collect();
        let cells: Vec<&str> = present.iter().map(|&r| out[r][col].as_str()).collect();
        let padded = pad_column(&cells);
        for (&r, cell) in present.iter().zip(padded) {
            out[r][col] = cell;
        }
    }

    out
}
