use crate::{parse_plaintext, parse_rle, ConvertError, FIELD};

/// One unit of the run-length grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunToken {
    /// `n` dead cells.
    Dead(usize),
    /// `n` alive cells.
    Alive(usize),
    /// Closes the current row.
    RowEnd,
    /// Terminates the pattern.
    End,
}

/// Input formats understood by [`PatternDescriptor::parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Rle,
    Plaintext,
}

impl SourceFormat {
    /// Picks the format from a file extension (`rle`, `cells` or `txt`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "rle" => Some(Self::Rle),
            "cells" | "txt" => Some(Self::Plaintext),
            _ => None,
        }
    }
}

/// Declared dimensions of a pattern plus its run tokens in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternDescriptor {
    width: usize,
    height: usize,
    tokens: Vec<RunToken>,
}

impl PatternDescriptor {
    /// Fails with [`ConvertError::SizeExceeded`] if the pattern does not fit into the field.
    pub fn new(width: usize, height: usize, tokens: Vec<RunToken>) -> Result<Self, ConvertError> {
        if width > FIELD || height > FIELD {
            return Err(ConvertError::SizeExceeded { width, height });
        }
        Ok(Self {
            width,
            height,
            tokens,
        })
    }

    pub fn from_rle(text: &str) -> Result<Self, ConvertError> {
        parse_rle(text.lines())
    }

    pub fn from_plaintext(text: &str) -> Result<Self, ConvertError> {
        parse_plaintext(text.lines())
    }

    pub fn parse(format: SourceFormat, text: &str) -> Result<Self, ConvertError> {
        match format {
            SourceFormat::Rle => Self::from_rle(text),
            SourceFormat::Plaintext => Self::from_plaintext(text),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tokens(&self) -> &[RunToken] {
        &self.tokens
    }
}
