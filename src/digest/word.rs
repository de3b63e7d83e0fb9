// Copyright 2019-2025 Brian Smith.
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

use core::ops::{Add, AddAssign, BitAnd, BitXor, Not, Shr};

/// A fixed-width word with modular arithmetic.
///
/// Implemented for `Wrapping<u32>` and `Wrapping<u64>`, so `+` wraps and `!`
/// stays within the word's width.
pub(super) trait Word:
    'static
    + Sized
    + Copy
    + Add<Output = Self>
    + AddAssign
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<usize, Output = Self>
{
    const ZERO: Self;

    /// The big-endian encoding of a word.
    type InputBytes: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    fn from_be_bytes(input: Self::InputBytes) -> Self;
    fn to_be_bytes(self) -> Self::InputBytes;

    fn rotr(self, count: u32) -> Self;
}
