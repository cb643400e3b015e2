/*
 * Copyright 2019-2021 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Conversion between UUIDs and their short string form.
//!
//! The short form of a UUID is its 16 raw bytes (most-significant half first, big-endian
//! within each half) base64-encoded with a URL-safe alphabet and no padding: exactly 22
//! characters, safe for direct use in a URL path segment.

use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::{Error, Result};

/// The URL-safe base64 alphabet, using `-` and `_` in place of `+` and `/`.
const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// The length of the short form: 16 bytes encode to 22 base64 symbols.
const SHORT_LEN: usize = 22;

/// The inverse of [`ALPHABET`], mapping a symbol back to its 6-bit value.
static DECODE_TABLE: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut table = [-1i8; 256];
    for (value, &symbol) in ALPHABET.iter().enumerate() {
        table[symbol as usize] = value as i8;
    }
    table
});

/// Encode the given `uuid` in its 22-character short form.
///
/// The output never carries padding, and the unused low bits of the final symbol are
/// always zero.
pub fn encode(uuid: &Uuid) -> String {
    let bytes = uuid.as_bytes();
    let mut output = String::with_capacity(SHORT_LEN);

    let mut chunks = bytes.chunks_exact(3);
    for chunk in &mut chunks {
        let group =
            (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        output.push(ALPHABET[((group >> 18) & 0x3f) as usize] as char);
        output.push(ALPHABET[((group >> 12) & 0x3f) as usize] as char);
        output.push(ALPHABET[((group >> 6) & 0x3f) as usize] as char);
        output.push(ALPHABET[(group & 0x3f) as usize] as char);
    }

    // 16 bytes is five 3-byte groups plus one trailing byte, which encodes to two
    // symbols with the low four bits of the second left at zero.
    let last = chunks.remainder()[0];
    output.push(ALPHABET[usize::from(last >> 2)] as char);
    output.push(ALPHABET[usize::from((last & 0x03) << 4)] as char);

    output
}

/// Decode a UUID from either its short form or its standard hyphenated form.
///
/// Trailing `=` padding on the short form is accepted for compatibility with standard
/// base64 encoders. After stripping padding, input longer than 22 characters is parsed
/// as a standard hyphenated UUID; anything else must be a well-formed 22-character short
/// form. Nonzero trailing bits in the final symbol are tolerated and ignored.
///
/// # Errors
/// - `Error::InvalidId`: The input was empty, the wrong length for either form, or
///   contained a symbol outside the alphabet.
pub fn decode(input: &str) -> Result<Uuid> {
    let trimmed = input.trim_end_matches('=');
    if trimmed.is_empty() {
        return Err(Error::InvalidId);
    }
    if trimmed.len() > SHORT_LEN {
        return Uuid::parse_str(trimmed).map_err(|_| Error::InvalidId);
    }
    if trimmed.len() != SHORT_LEN {
        return Err(Error::InvalidId);
    }

    let symbols = trimmed.as_bytes();
    let mut bytes = [0u8; 16];

    for (index, chunk) in symbols[..SHORT_LEN - 2].chunks_exact(4).enumerate() {
        let group = (symbol_value(chunk[0])? << 18)
            | (symbol_value(chunk[1])? << 12)
            | (symbol_value(chunk[2])? << 6)
            | symbol_value(chunk[3])?;
        bytes[index * 3] = (group >> 16) as u8;
        bytes[index * 3 + 1] = (group >> 8) as u8;
        bytes[index * 3 + 2] = group as u8;
    }

    // The final two symbols carry one byte; the low four bits of the last symbol are
    // padding.
    let high = symbol_value(symbols[SHORT_LEN - 2])?;
    let low = symbol_value(symbols[SHORT_LEN - 1])?;
    bytes[15] = ((high << 2) | (low >> 4)) as u8;

    Ok(Uuid::from_bytes(bytes))
}

/// Map a base64 symbol to its 6-bit value.
fn symbol_value(symbol: u8) -> Result<u32> {
    let value = DECODE_TABLE[usize::from(symbol)];
    if value < 0 {
        return Err(Error::InvalidId);
    }
    Ok(value as u32)
}
