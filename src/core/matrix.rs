// matrix.rs - Minimum String Distance 'D' matrix

use crate::data::SequencePair;

/// The dynamic-programming distance matrix.
///
/// `get(i, j)` is the minimum edit cost turning the first `i` presented
/// elements into the first `j` transcribed elements. Rows follow the
/// presented text, columns the transcribed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    cells: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl DistanceMatrix {
    /// Fill the matrix for one presented/transcribed pair.
    ///
    /// Recurrence (Kruskal 1983, extended with transpositions):
    ///
    /// ```text
    /// D[i][j] = min(D[i-1][j] + 1,
    ///               D[i][j-1] + 1,
    ///               D[i-1][j-1] + item_distance(i-1, j-1),
    ///               D[i-2][j-2] + transposed_distance(i-1, j-1))   // i, j >= 2
    /// ```
    pub fn build(pair: &dyn SequencePair) -> Self {
        let rows = pair.presented_len() + 1;
        let cols = pair.transcribed_len() + 1;
        let mut cells = vec![0u32; rows * cols];

        for i in 0..rows {
            cells[i * cols] = i as u32;
        }
        for j in 0..cols {
            cells[j] = j as u32;
        }

        for i in 1..rows {
            for j in 1..cols {
                let deletion = cells[(i - 1) * cols + j] + 1;
                let insertion = cells[i * cols + j - 1] + 1;
                let diagonal = cells[(i - 1) * cols + j - 1] + pair.item_distance(i - 1, j - 1);

                let mut best = deletion.min(insertion).min(diagonal);

                if i >= 2 && j >= 2 {
                    let transposed =
                        cells[(i - 2) * cols + j - 2] + pair.transposed_distance(i - 1, j - 1);
                    best = best.min(transposed);
                }

                cells[i * cols + j] = best;
            }
        }

        Self { cells, rows, cols }
    }

    /// Number of rows (`|P| + 1`)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`|T| + 1`)
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }

    pub fn row(&self, i: usize) -> &[u32] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// The minimum string distance, read from the bottom-right cell
    pub fn msd(&self) -> u32 {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Copy of the matrix as nested rows
    pub fn as_rows(&self) -> Vec<Vec<u32>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }
}
