use crate::{ConvertError, PatternDescriptor, RunToken, FIELD};

/// Parses the lines of an RLE document into a pattern descriptor.
///
/// Blank lines and `#` comments are skipped, a line starting with `x` is the
/// `x = <width>, y = <height>` header, and every other line continues a single
/// token stream. Line breaks never end a row, only `$` does. Scanning stops at
/// the first `!`; anything after it is ignored.
///
/// A counted row end `n$` is accepted and yields `n` [`RunToken::RowEnd`]s,
/// leaving `n - 1` blank rows; a bare `$` yields one.
pub fn parse_rle<I, S>(lines: I) -> Result<PatternDescriptor, ConvertError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (mut width, mut height) = (None, None);
    let mut tokens = Vec::new();
    // pending run length, 0 means "no digits seen"
    let mut cnt = 0usize;
    let mut terminated = false;

    'lines: for (i, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('x') {
            parse_header(line, &mut width, &mut height)?;
            continue;
        }
        for (j, c) in line.chars().enumerate() {
            match c {
                '0'..='9' => {
                    let digit = c as usize - '0' as usize;
                    cnt = cnt.saturating_mul(10).saturating_add(digit);
                }
                'b' => {
                    tokens.push(RunToken::Dead(cnt.max(1)));
                    cnt = 0;
                }
                'o' => {
                    tokens.push(RunToken::Alive(cnt.max(1)));
                    cnt = 0;
                }
                '$' => {
                    // more row ends than the field has rows overflow the grid anyway
                    let rows = cnt.clamp(1, FIELD + 1);
                    tokens.extend(std::iter::repeat(RunToken::RowEnd).take(rows));
                    cnt = 0;
                }
                '!' => {
                    tokens.push(RunToken::End);
                    terminated = true;
                    break 'lines;
                }
                _ => {
                    return Err(ConvertError::MalformedToken {
                        symbol: c,
                        line: i + 1,
                        column: j + 1,
                    })
                }
            }
        }
    }

    let (Some(width), Some(height)) = (width, height) else {
        return Err(ConvertError::MissingHeader);
    };
    if !terminated {
        return Err(ConvertError::IncompleteDescriptor);
    }
    PatternDescriptor::new(width, height, tokens)
}

/// Reads `key = value` pairs of the header; only `x` and `y` matter.
fn parse_header(
    line: &str,
    width: &mut Option<usize>,
    height: &mut Option<usize>,
) -> Result<(), ConvertError> {
    for pair in line.split(',') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        let slot = match key {
            "x" => &mut *width,
            "y" => &mut *height,
            _ => continue,
        };
        let n = value
            .parse::<usize>()
            .map_err(|_| ConvertError::MalformedHeader {
                key: key.to_owned(),
                value: value.to_owned(),
            })?;
        *slot = Some(n);
    }
    let (w, h) = (width.unwrap_or(0), height.unwrap_or(0));
    if w > FIELD || h > FIELD {
        return Err(ConvertError::SizeExceeded {
            width: w,
            height: h,
        });
    }
    Ok(())
}
