use crate::{ConvertError, PatternDescriptor, RunToken};

/// Parses a plaintext (`.cells`) pattern: `!` starts a comment line, every other
/// line is one row where `O` or `*` is alive and `.` is dead.
///
/// Rows may be ragged; the width is the longest row. The result carries the
/// same run tokens an equivalent RLE document would produce.
pub fn parse_plaintext<I, S>(lines: I) -> Result<PatternDescriptor, ConvertError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rows = Vec::new();
    for (i, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.starts_with('!') {
            continue;
        }
        let row = line
            .chars()
            .enumerate()
            .map(|(j, c)| match c {
                'O' | '*' => Ok(true),
                '.' => Ok(false),
                _ => Err(ConvertError::MalformedToken {
                    symbol: c,
                    line: i + 1,
                    column: j + 1,
                }),
            })
            .collect::<Result<Vec<bool>, _>>()?;
        rows.push(row);
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let height = rows.len();
    let mut tokens = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        if y > 0 {
            tokens.push(RunToken::RowEnd);
        }
        encode_row(row, &mut tokens);
    }
    tokens.push(RunToken::End);
    PatternDescriptor::new(width, height, tokens)
}

/// Appends the runs of one row; a trailing dead run is implied by the row end.
fn encode_row(row: &[bool], tokens: &mut Vec<RunToken>) {
    let mut x = 0;
    while x < row.len() {
        let alive = row[x];
        let len = row[x..].iter().take_while(|&&c| c == alive).count();
        if alive {
            tokens.push(RunToken::Alive(len));
        } else if x + len < row.len() {
            tokens.push(RunToken::Dead(len));
        }
        x += len;
    }
}

#[cfg(test)]
mod tests {
    use super::parse_plaintext;
    use crate::{ConvertError, RunToken::*};

    #[test]
    fn glider() {
        let p = parse_plaintext("!Name: Glider\n.O\n..O\nOOO".lines()).unwrap();
        assert_eq!((p.width(), p.height()), (3, 3));
        assert_eq!(
            p.tokens(),
            &[
                Dead(1),
                Alive(1),
                RowEnd,
                Dead(2),
                Alive(1),
                RowEnd,
                Alive(3),
                End
            ]
        );
    }

    #[test]
    fn blank_rows_and_trailing_dead_cells() {
        let p = parse_plaintext("O...\n\n*".lines()).unwrap();
        assert_eq!((p.width(), p.height()), (4, 3));
        assert_eq!(p.tokens(), &[Alive(1), RowEnd, RowEnd, Alive(1), End]);
    }

    #[test]
    fn rejects_unknown_cells() {
        assert_eq!(
            parse_plaintext("OO\nOx".lines()).unwrap_err(),
            ConvertError::MalformedToken {
                symbol: 'x',
                line: 2,
                column: 2
            }
        );
    }

    #[test]
    fn rejects_oversized() {
        let row = "O".repeat(51);
        assert_eq!(
            parse_plaintext([row.as_str()]).unwrap_err(),
            ConvertError::SizeExceeded {
                width: 51,
                height: 1
            }
        );
    }
}
