//! The triangular Romberg table.

use serde::Serialize;

use super::richardson;

/// Lower-triangular table `R[i][j]`, `0 <= j <= i`, grown one row at a time.
///
/// Row `i` is derived entirely from row `i - 1` and the trapezoid estimate
/// with `2^i` subintervals. Finalized rows are never modified.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtrapolationTable {
    rows: Vec<Vec<f64>>,
}

impl ExtrapolationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with room for `rows` rows.
    #[must_use]
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            rows: Vec::with_capacity(rows),
        }
    }

    /// Appends the row built from the next trapezoid estimate and returns its diagonal.
    pub fn push_trapezoid(&mut self, trapezoid: f64) -> f64 {
        let mut row = Vec::with_capacity(self.rows.len() + 1);
        row.push(trapezoid);

        if let Some(previous) = self.rows.last() {
            for (j, &coarser) in previous.iter().enumerate() {
                let finer = row[j];
                row.push(richardson(finer, coarser, j + 1));
            }
        }

        let diagonal = row[row.len() - 1];
        self.rows.push(row);
        diagonal
    }

    /// Entry `R[i][j]`, if it exists.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Row `i`, if built.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// All rows, oldest first.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of rows built.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no row has been built.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Diagonal entry `R[i][i]`.
    pub fn diagonal(&self, i: usize) -> Option<f64> {
        self.get(i, i)
    }

    /// Diagonal entry of the last row: the best estimate held by the table.
    pub fn last_diagonal(&self) -> Option<f64> {
        self.rows.last().and_then(|row| row.last()).copied()
    }

    /// Diagonal entries in row order.
    pub fn diagonals(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(|row| row.last().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_table() {
        let table = ExtrapolationTable::new();
        assert!(table.is_empty());
        assert_eq!(table.last_diagonal(), None);
        assert_eq!(table.get(0, 0), None);
    }

    #[test]
    fn test_rows_are_triangular() {
        let mut table = ExtrapolationTable::with_capacity(4);
        for t in [1.0, 0.8, 0.75, 0.74] {
            table.push_trapezoid(t);
        }

        assert_eq!(table.len(), 4);
        for (i, row) in table.rows().iter().enumerate() {
            assert_eq!(row.len(), i + 1);
        }
        assert_eq!(table.get(1, 2), None);
    }

    #[test]
    fn test_push_returns_diagonal() {
        let mut table = ExtrapolationTable::new();
        assert_relative_eq!(table.push_trapezoid(2.0), 2.0);

        let d1 = table.push_trapezoid(1.5);
        assert_relative_eq!(d1, 1.5 + (1.5 - 2.0) / 3.0);
        assert_eq!(table.diagonal(1), Some(d1));
        assert_eq!(table.last_diagonal(), Some(d1));
        assert_eq!(table.diagonals().collect::<Vec<_>>(), vec![2.0, d1]);
    }

    #[test]
    fn test_earlier_rows_unchanged() {
        let mut table = ExtrapolationTable::new();
        table.push_trapezoid(1.0);
        table.push_trapezoid(0.9);
        let snapshot = table.row(1).unwrap().to_vec();

        table.push_trapezoid(0.875);
        assert_eq!(table.row(1).unwrap(), snapshot.as_slice());
    }
}
