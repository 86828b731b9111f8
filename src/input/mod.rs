// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Input parsing for the challenge binary.
//!
//! The challenge supplies three whitespace-separated non-negative integers
//! on standard input: n4, n5, n6. Anything else is a fatal input error; no
//! partial output is produced.

use std::io::Read;
use thiserror::Error;

/// Errors produced while reading the input triple.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Fewer than three tokens on the input stream.
    #[error("expected three whitespace-separated counts (n4 n5 n6), found {found}")]
    MissingCounts { found: usize },

    /// A token that is not a non-negative integer, or exceeds u32.
    #[error("count #{position} ({token:?}) is not a non-negative integer")]
    InvalidCount {
        position: usize,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Read the (n4, n5, n6) triple from a reader.
///
/// Reads the whole stream and parses the first three whitespace-separated
/// tokens; trailing content is ignored.
pub fn read_counts<R: Read>(mut reader: R) -> Result<(u32, u32, u32), InputError> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;

    let tokens: Vec<&str> = buffer.split_whitespace().take(3).collect();
    if tokens.len() < 3 {
        return Err(InputError::MissingCounts {
            found: tokens.len(),
        });
    }

    let mut counts = [0u32; 3];
    for (position, token) in tokens.iter().enumerate() {
        counts[position] = token.parse().map_err(|source| InputError::InvalidCount {
            position: position + 1,
            token: (*token).to_string(),
            source,
        })?;
    }
    Ok((counts[0], counts[1], counts[2]))
}
