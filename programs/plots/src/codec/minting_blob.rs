//! `{tokenId}:{blueprint}` text blobs carried by cross-chain mint messages.
//!
//! Parsing never fails outright: malformed input still yields whatever digits
//! were found, with `well_formed` cleared so the caller can refuse it.

use anchor_lang::prelude::*;

use crate::errors::PlotError;
use crate::generator::U256;

pub const DELIMITERS: [u8; 2] = [b':', b'/'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintingBlob {
    pub token_id: U256,
    /// Packed blueprint
    pub metadata: U256,
    pub well_formed: bool,
}

impl MintingBlob {
    pub fn require_well_formed(&self) -> Result<()> {
        require!(self.well_formed, PlotError::MalformedMintingBlob);
        Ok(())
    }
}

struct DigitRun {
    value: U256,
    end: usize,
    overflowed: bool,
}

fn scan_digits(input: &[u8], start: usize) -> DigitRun {
    let ten = U256::from(10u8);
    let mut value = U256::zero();
    let mut overflowed = false;
    let mut end = start;

    while let Some(&byte) = input.get(end) {
        if !byte.is_ascii_digit() {
            break;
        }
        let (shifted, mul_overflow) = value.overflowing_mul(ten);
        let (next, add_overflow) = shifted.overflowing_add(U256::from(byte - b'0'));
        value = next;
        overflowed |= mul_overflow || add_overflow;
        end += 1;
    }

    DigitRun {
        value,
        end,
        overflowed,
    }
}

/// Leading decimal digits of `input` and the index of the first byte that is
/// not a digit (`input.len()` if there is none). Wraps past 2^256.
pub fn atoi(input: &[u8]) -> (U256, usize) {
    let run = scan_digits(input, 0);
    (run.value, run.end)
}

pub fn parse_minting_blob(input: &[u8]) -> MintingBlob {
    let token = scan_digits(input, 0);
    let delimiter = input.get(token.end).copied();

    // The byte after the token id is skipped whatever it is
    let start = (token.end + 1).min(input.len());
    let metadata = scan_digits(input, start);

    let well_formed = token.end > 0
        && delimiter.is_some_and(|byte| DELIMITERS.contains(&byte))
        && metadata.end > start
        && metadata.end == input.len()
        && !token.overflowed
        && !metadata.overflowed;

    MintingBlob {
        token_id: token.value,
        metadata: metadata.value,
        well_formed,
    }
}

pub fn format_minting_blob(token_id: U256, metadata: U256) -> String {
    format!("{}:{}", token_id, metadata)
}
