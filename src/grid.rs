use crate::{ConvertError, PatternDescriptor, RunToken, FIELD};

/// Empty margins that center a `width x height` pattern in the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Padding {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl Padding {
    /// Returns `None` if the pattern is wider or taller than the field.
    pub fn new(width: usize, height: usize) -> Option<Self> {
        let (free_x, free_y) = (FIELD.checked_sub(width)?, FIELD.checked_sub(height)?);
        let (left, top) = (free_x / 2, free_y / 2);
        Some(Self {
            left,
            right: free_x - left,
            top,
            bottom: free_y - top,
        })
    }
}

/// Fixed `FIELD x FIELD` square of cells, indexed as `rows[y][x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<[bool; FIELD]>,
}

impl Grid {
    pub fn blank() -> Self {
        Self {
            rows: vec![[false; FIELD]; FIELD],
        }
    }

    /// Expands the run tokens of `pattern` into a grid with the pattern centered.
    ///
    /// Alive runs are allowed to overshoot the declared width as long as they
    /// stay inside the field; an alive cell or a row outside it is
    /// [`ConvertError::GridOverflow`]. Dead runs only move the cursor, so a
    /// trailing dead run past the edge is harmless.
    pub fn from_pattern(pattern: &PatternDescriptor) -> Result<Self, ConvertError> {
        let (width, height) = (pattern.width(), pattern.height());
        let pad =
            Padding::new(width, height).ok_or(ConvertError::SizeExceeded { width, height })?;
        let mut rows = Vec::with_capacity(FIELD);
        rows.resize(pad.top, [false; FIELD]);
        let mut row = [false; FIELD];
        let mut x = pad.left;

        for &token in pattern.tokens() {
            match token {
                RunToken::Dead(n) => x = x.saturating_add(n),
                RunToken::Alive(n) => {
                    let end = x.saturating_add(n);
                    if end > FIELD {
                        return Err(ConvertError::GridOverflow {
                            row: rows.len(),
                            column: FIELD,
                        });
                    }
                    row[x..end].fill(true);
                    x = end;
                }
                RunToken::RowEnd => {
                    push_row(&mut rows, std::mem::replace(&mut row, [false; FIELD]))?;
                    x = pad.left;
                }
                RunToken::End => {
                    push_row(&mut rows, row)?;
                    rows.resize(FIELD, [false; FIELD]);
                    return Ok(Self { rows });
                }
            }
        }
        Err(ConvertError::IncompleteDescriptor)
    }

    /// Grid with exactly the given cells alive; coordinates are `(x, y)`.
    pub fn from_alive_cells(
        cells: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, ConvertError> {
        let mut grid = Self::blank();
        for (x, y) in cells {
            if x >= FIELD || y >= FIELD {
                return Err(ConvertError::GridOverflow { row: y, column: x });
            }
            grid.rows[y][x] = true;
        }
        Ok(grid)
    }

    /// # Panics
    ///
    /// Panics if `x` or `y` is not below `FIELD`.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.rows[y][x]
    }

    /// Alive cells as `(x, y)`, x-major: all of column 0 top to bottom, then column 1...
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..FIELD)
            .flat_map(|x| (0..FIELD).map(move |y| (x, y)))
            .filter(|&(x, y)| self.get(x, y))
    }

    pub fn population(&self) -> usize {
        self.rows.iter().flatten().filter(|&&c| c).count()
    }
}

fn push_row(rows: &mut Vec<[bool; FIELD]>, row: [bool; FIELD]) -> Result<(), ConvertError> {
    if rows.len() == FIELD {
        return Err(ConvertError::GridOverflow {
            row: FIELD,
            column: 0,
        });
    }
    rows.push(row);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Result<Grid, ConvertError> {
        Grid::from_pattern(&PatternDescriptor::from_rle(text)?)
    }

    #[test]
    fn padding_is_balanced() {
        for width in 0..=FIELD {
            let pad = Padding::new(width, FIELD - width).unwrap();
            assert_eq!(pad.left + width + pad.right, FIELD);
            assert_eq!(pad.top + FIELD - width + pad.bottom, FIELD);
            assert_eq!(pad.left, (FIELD - width) / 2);
        }
    }

    #[test]
    fn oversized_padding_is_none() {
        assert_eq!(Padding::new(FIELD + 1, 1), None);
        assert_eq!(Padding::new(1, usize::MAX), None);
    }

    #[test]
    fn centered_row() {
        let g = grid("x = 3, y = 1\n3o!").unwrap();
        assert_eq!(g.alive_cells().collect::<Vec<_>>(), [(23, 24), (24, 24), (25, 24)]);
    }

    #[test]
    fn two_rows() {
        let g = grid("x = 3, y = 2\n2b1o$1b2o!").unwrap();
        let (left, top) = (23, 24);
        assert_eq!(g.population(), 3);
        assert!(g.get(left + 2, top));
        assert!(g.get(left + 1, top + 1));
        assert!(g.get(left + 2, top + 1));
    }

    #[test]
    fn overshooting_the_declared_width_is_allowed() {
        let g = grid("x = 2, y = 1\n5o!").unwrap();
        assert_eq!(g.population(), 5);
        assert!(g.get(24 + 4, 24));
    }

    #[test]
    fn writing_past_the_field_fails() {
        assert_eq!(
            grid("x = 2, y = 1\n27o!").unwrap_err(),
            ConvertError::GridOverflow { row: 24, column: 50 }
        );
        assert!(grid("x = 2, y = 1\n26o!").is_ok());
        assert_eq!(
            grid("x = 1, y = 1\n30$o!").unwrap_err(),
            ConvertError::GridOverflow { row: 50, column: 0 }
        );
    }

    #[test]
    fn trailing_dead_run_past_the_edge_is_harmless() {
        let g = grid("x = 50, y = 1\no60b!").unwrap();
        assert_eq!(g.alive_cells().collect::<Vec<_>>(), [(0, 24)]);
        let g = grid("x = 50, y = 2\no60b$50o!").unwrap();
        assert_eq!(g.population(), 51);
        assert_eq!(
            grid("x = 50, y = 1\n60bo!").unwrap_err(),
            ConvertError::GridOverflow { row: 24, column: 50 }
        );
    }

    #[test]
    fn full_field() {
        let body = "50o$".repeat(49) + "50o!";
        let g = grid(&format!("x = 50, y = 50\n{body}")).unwrap();
        assert_eq!(g.population(), FIELD * FIELD);
    }

    #[test]
    fn tokens_without_end_are_incomplete() {
        let p = PatternDescriptor::new(1, 1, vec![RunToken::Alive(1)]).unwrap();
        assert_eq!(
            Grid::from_pattern(&p).unwrap_err(),
            ConvertError::IncompleteDescriptor
        );
    }

    #[test]
    fn blank_rows_are_independent() {
        let g = grid("x = 1, y = 3\no2$o!").unwrap();
        assert_eq!(g.alive_cells().collect::<Vec<_>>(), [(24, 23), (24, 25)]);
    }
}
