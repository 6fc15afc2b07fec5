// render.rs - Plain-text rendering of the D matrix and alignment paths
//
// Presented items run along the top, transcribed items down the left.
// Multi-character items (words) are written vertically in the header,
// bottom-aligned.

use std::collections::HashMap;
use crate::core::{Alignment, Msd};

/// Column width needed for the largest value in the matrix
fn value_width(msd: &Msd) -> usize {
    match msd.msd() {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}

fn longest_item(len: usize, item: impl Fn(usize) -> String) -> usize {
    (0..len).map(|i| item(i).chars().count()).max().unwrap_or(0)
}

/// Header lines spelling the presented items vertically.
/// `prefix` is the width before the first presented column; each letter is
/// right-aligned in `letter_width` and followed by `trailer`.
fn header_lines(msd: &Msd, prefix: usize, letter_width: usize, trailer: &str) -> Vec<String> {
    let longest = longest_item(msd.presented_len(), |i| msd.presented_item(i));
    let mut lines = Vec::with_capacity(longest + 1);

    for row in 0..longest {
        let mut line = " ".repeat(prefix);
        for i in 0..msd.presented_len() {
            let item: Vec<char> = msd.presented_item(i).chars().collect();
            let letter = if item.len() + row >= longest {
                item[row + item.len() - longest].to_string()
            } else {
                " ".to_string()
            };
            line.push_str(&format!("{:>width$}{}", letter, trailer, width = letter_width));
        }
        lines.push(line.trim_end().to_string());
    }

    if longest > 1 {
        lines.push(String::new());
    }
    lines
}

fn transcribed_label(msd: &Msd, j: usize, width: usize) -> String {
    let label = if j == 0 {
        String::new()
    } else {
        msd.transcribed_item(j - 1)
    };
    format!("{:<width$}  ", label, width = width)
}

/// Render the distance matrix
pub fn matrix_table(msd: &Msd) -> String {
    let spacing = value_width(msd);
    let longest_trans = longest_item(msd.transcribed_len(), |j| msd.transcribed_item(j));
    let matrix = msd.matrix();

    let mut lines = header_lines(msd, longest_trans + 2 + spacing + 1, spacing + 1, "");

    for j in 0..matrix.cols() {
        let mut line = transcribed_label(msd, j, longest_trans);
        for i in 0..matrix.rows() {
            line.push_str(&format!("{:>width$}", matrix.get(i, j), width = spacing + 1));
        }
        lines.push(line);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render the distance matrix with one alignment's path marked; each cell
/// on the path carries the explanation character of the step that reached it
pub fn alignment_table(msd: &Msd, alignment: &Alignment) -> String {
    let spacing = value_width(msd);
    let longest_trans = longest_item(msd.transcribed_len(), |j| msd.transcribed_item(j));
    let matrix = msd.matrix();

    let labels: HashMap<(usize, usize), char> = alignment
        .path_cells()
        .iter()
        .skip(1)
        .enumerate()
        .map(|(step, cell)| (*cell, alignment.explanation_at(step)))
        .collect();

    let cell_width = spacing + 4;
    let mut lines = header_lines(msd, longest_trans + 2 + cell_width, spacing + 1, "   ");

    for j in 0..matrix.cols() {
        let mut line = transcribed_label(msd, j, longest_trans);
        for i in 0..matrix.rows() {
            let value = format!("{:>width$}", matrix.get(i, j), width = spacing);
            match labels.get(&(i, j)) {
                Some(symbol) => line.push_str(&format!(" {}({})", value, symbol)),
                None => line.push_str(&format!(" {}   ", value)),
            }
        }
        lines.push(line.trim_end().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Legend for the explanation alphabet
pub fn legend(transpositions: bool) -> String {
    let mut out = String::from("  Legend\n    c = correct\n    i = insertion\n    d = deletion\n    x = substitution\n");
    if transpositions {
        out.push_str("    t = transposition\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_table() {
        let m = Msd::from_strings("cat", "cot", false).unwrap();
        let expected = "      c a t\n    0 1 2 3\nc   1 0 1 2\no   2 1 1 2\nt   3 2 2 1\n";
        assert_eq!(matrix_table(&m), expected);
    }

    #[test]
    fn test_alignment_table() {
        let m = Msd::from_strings("cat", "cot", false).unwrap();
        let table = alignment_table(&m, m.alignment(0));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "         c    a    t");
        assert_eq!(lines[1], "    0    1    2    3");
        assert_eq!(lines[2], "c   1    0(c) 1    2");
        assert_eq!(lines[3], "o   2    1    1(x) 2");
        assert_eq!(lines[4], "t   3    2    2    1(c)");
    }

    #[test]
    fn test_word_header() {
        let m = Msd::from_words(&["to", "be"], &["to", "bee"], false).unwrap();
        let table = matrix_table(&m);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "        t b");
        assert_eq!(lines[1], "        o e");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "      0 1 2");
        assert_eq!(lines[4], "to    1 0 1");
        assert_eq!(lines[5], "bee   2 1 1");
    }

    #[test]
    fn test_legend() {
        assert!(!legend(false).contains("transposition"));
        assert!(legend(true).contains("t = transposition"));
    }
}
