//! Focus advancement between exercise input fields.
//!
//! The exercise list is rendered as a row-major grid whose column count
//! depends on the viewport; the caller supplies that count so the rule
//! itself stays layout-agnostic. Focus walks visually column by column:
//! down the current on-screen column, then to the top of the next one.

/// Index of the input field that should receive focus after `index`.
///
/// Returns `None` when `index` is the last field in walk order, or when
/// `column_count` is 0, or `index` is out of bounds.
#[must_use]
pub fn next_exercise(index: usize, column_count: usize, total: usize) -> Option<usize> {
    if column_count == 0 || index >= total {
        return None;
    }

    let below = index.checked_add(column_count)?;
    if below < total {
        return Some(below);
    }

    let next_column = index % column_count + 1;
    if next_column < column_count && next_column < total {
        Some(next_column)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_down_columns_then_across() {
        // 6 exercises in 2 columns:
        //   0 1
        //   2 3
        //   4 5
        let mut order = Vec::new();
        let mut index = Some(0);
        while let Some(i) = index {
            order.push(i);
            index = next_exercise(i, 2, 6);
        }
        assert_eq!(order, vec![0, 2, 4, 1, 3, 5]);
    }

    #[test]
    fn ragged_last_row_is_skipped_cleanly() {
        // 5 exercises in 2 columns: second column holds 1 and 3.
        assert_eq!(next_exercise(4, 2, 5), Some(1));
        assert_eq!(next_exercise(3, 2, 5), None);
    }

    #[test]
    fn single_column_advances_linearly() {
        assert_eq!(next_exercise(0, 1, 3), Some(1));
        assert_eq!(next_exercise(2, 1, 3), None);
    }

    #[test]
    fn degenerate_inputs_yield_none() {
        assert_eq!(next_exercise(0, 0, 5), None);
        assert_eq!(next_exercise(5, 2, 5), None);
        assert_eq!(next_exercise(0, 4, 0), None);
    }
}
