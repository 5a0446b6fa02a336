// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Wide (UTF-16) strings for the platform boundary
//!
//! Platform font APIs take and return NUL-terminated UTF-16 text. Conversion
//! follows the native two-pass protocol: query the required length (including
//! the terminator), allocate exactly that, then fill.

use smallvec::SmallVec;
use std::fmt;

/// A NUL-terminated UTF-16 string
///
/// Interior NUL characters are replaced by `?` since the platform would
/// otherwise truncate the string there.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WideString {
    buffer: SmallVec<[u16; 32]>,
}

impl WideString {
    /// Encode a UTF-8 string
    pub fn new(s: &str) -> Self {
        let len = required_wide_len(s);
        let mut buffer = SmallVec::with_capacity(len);
        buffer.extend(s.encode_utf16().map(|c| if c == 0 { b'?' as u16 } else { c }));
        buffer.push(0);
        debug_assert_eq!(buffer.len(), len);
        WideString { buffer }
    }

    /// Number of code units, excluding the terminator
    pub fn len(&self) -> usize {
        self.buffer.len() - 1
    }

    /// True if there are no code units before the terminator
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Code units, excluding the terminator
    pub fn as_slice(&self) -> &[u16] {
        &self.buffer[..self.len()]
    }

    /// Code units, including the terminator
    pub fn as_slice_with_nul(&self) -> &[u16] {
        &self.buffer
    }

    /// Decode back to UTF-8
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.as_slice())
    }
}

impl Default for WideString {
    fn default() -> Self {
        WideString::new("")
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self {
        WideString::new(s)
    }
}

impl fmt::Debug for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideString({:?})", self.to_string_lossy())
    }
}

/// Length pass: code units needed to hold `s`, including the terminator
pub fn required_wide_len(s: &str) -> usize {
    s.encode_utf16().count() + 1
}

/// Encode UTF-8 to a terminated wide buffer
#[inline]
pub fn encode_wide(s: &str) -> WideString {
    WideString::new(s)
}

/// Decode a wide buffer to UTF-8
///
/// Decoding stops at the first NUL, if any. A zero-length or malformed input
/// (e.g. an unpaired surrogate) yields an empty string.
pub fn decode_wide(wide: &[u16]) -> String {
    let len = wide.iter().position(|c| *c == 0).unwrap_or(wide.len());
    if len == 0 {
        return String::new();
    }
    String::from_utf16(&wide[..len]).unwrap_or_default()
}

/// Decode big-endian UTF-16 bytes, as stored in OpenType `name` records
pub fn decode_wide_be(bytes: &[u8]) -> String {
    if bytes.len() % 2 != 0 {
        return String::new();
    }
    let units: SmallVec<[u16; 64]> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    decode_wide(&units)
}
