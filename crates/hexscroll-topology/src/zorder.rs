//! Draw ordering for overlapping hex tiles.
//!
//! Hex sprites overlap their neighbours, so the draw order decides which
//! edge ends up on top. Cells further left draw before cells to their right,
//! and within a single row the order depends on `col` alone, so sliding a
//! tile along its row never reshuffles its neighbours.

/// Compute the z-order of the cell at `(col, row)`.
///
/// `floor((col - row) + (col + row) / (1 + |col| + |row|))`
///
/// The fractional term lies strictly inside `(-1, 1)` and grows with `col`,
/// which breaks ties between cells sharing the same `col - row` diagonal.
pub fn z_order(col: i64, row: i64) -> i64 {
    let diagonal = (col - row) as f64;
    let spread = 1.0 + col.unsigned_abs() as f64 + row.unsigned_abs() as f64;
    let tie_break = (col + row) as f64 / spread;
    (diagonal + tie_break).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_values() {
        assert_eq!(z_order(0, 0), 0);
        // 1 + 1/2
        assert_eq!(z_order(1, 0), 1);
        // -1 + 1/2
        assert_eq!(z_order(0, 1), -1);
        // 0 + 2/3
        assert_eq!(z_order(1, 1), 0);
        // 0 - 2/3
        assert_eq!(z_order(-1, -1), -1);
        // -1 - 1/2
        assert_eq!(z_order(-1, 0), -2);
    }

    #[test]
    fn same_diagonal_is_ordered_by_col() {
        // Cells on col - row = 0 spread out by the tie breaker.
        let a = z_order(-5, -5);
        let b = z_order(0, 0);
        let c = z_order(5, 5);
        assert!(a < b);
        assert!(b <= c);
    }

    #[test]
    fn row_of_tiles_is_strictly_increasing() {
        for row in [-3, 0, 7] {
            let zs: Vec<_> = (-20..20).map(|col| z_order(col, row)).collect();
            for pair in zs.windows(2) {
                assert!(pair[0] < pair[1], "row {}: {:?}", row, pair);
            }
        }
    }

    proptest! {
        #[test]
        fn monotonic_within_row(
            col in -10_000i64..10_000,
            row in -10_000i64..10_000,
            step in 1i64..50,
        ) {
            prop_assert!(z_order(col, row) < z_order(col + step, row));
        }
    }
}
