// Copyright 2016 Brian Smith.
// Copyright 2025 The sha2sum Authors.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

//! Bit manipulation on words of an arbitrary width of up to 64 bits.
//!
//! These are the reference definitions of the word operations used by SHA-2.
//! The digest engine itself uses the native operations of `Wrapping<u32>` and
//! `Wrapping<u64>`, which agree with these for widths 32 and 64.

/// The widest word these functions operate on.
pub const MAX_WIDTH: u32 = u64::BITS;

/// Returns a value with the low `width` bits set.
///
/// `mask(0)` is zero; any `width` of 64 or more sets every bit.
#[inline]
pub const fn mask(width: u32) -> u64 {
    if width == 0 {
        0
    } else if width >= MAX_WIDTH {
        u64::MAX
    } else {
        (1 << width) - 1
    }
}

/// Rotates the low `width` bits of `value` right by `n` positions.
///
/// Bits of `value` above `width` are discarded first. `n` is taken modulo
/// `width`, so every rotation count is valid.
#[inline]
pub const fn rotate_right(value: u64, n: u32, width: u32) -> u64 {
    let width = clamp_width(width);
    let value = value & mask(width);
    if width == 0 {
        return 0;
    }
    let n = n % width;
    if n == 0 {
        return value;
    }
    (value >> n) | ((value << (width - n)) & mask(width))
}

/// Rotates the low `width` bits of `value` left by `n` positions.
///
/// See [`rotate_right`] for the treatment of `value` and `n`.
#[inline]
pub const fn rotate_left(value: u64, n: u32, width: u32) -> u64 {
    let width = clamp_width(width);
    let value = value & mask(width);
    if width == 0 {
        return 0;
    }
    let n = n % width;
    if n == 0 {
        return value;
    }
    ((value << n) & mask(width)) | (value >> (width - n))
}

/// Adds `operands` modulo 2^`width`.
///
/// Overflow wraps silently; it is never reported.
pub fn add_mod<I>(width: u32, operands: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    operands
        .into_iter()
        .fold(0u64, |sum, operand| sum.wrapping_add(operand))
        & mask(width)
}

#[inline(always)]
const fn clamp_width(width: u32) -> u32 {
    if width > MAX_WIDTH {
        MAX_WIDTH
    } else {
        width
    }
}

/// The length of a message in bits.
///
/// Held in a `u128` so that the bit length of any byte count that fits in a
/// `usize` is exact, including the 128-bit length field of SHA-512.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd)]
pub struct BitLength(u128);

impl BitLength {
    /// The bit length of `bytes` bytes.
    #[inline]
    pub fn from_byte_len(bytes: usize) -> Self {
        // A `usize` is at most 64 bits wide, so this can't overflow.
        Self((bytes as u128) << 3)
    }

    /// The length in bits.
    #[inline]
    pub fn as_bits(self) -> u128 {
        self.0
    }

    /// The big-endian encoding of the length, reduced modulo 2^(8 × `N`).
    #[inline]
    pub fn to_be_bytes<const N: usize>(self) -> [u8; N] {
        let all = self.0.to_be_bytes();
        let mut out = [0u8; N];
        let n = core::cmp::min(N, all.len());
        out[N - n..].copy_from_slice(&all[all.len() - n..]);
        out
    }
}
