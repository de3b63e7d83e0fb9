// Copyright 2015-2025 Brian Smith.
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

use super::word::Word;
use core::num::Wrapping;

pub type W64 = Wrapping<u64>;

impl Word for W64 {
    const ZERO: Self = Self(0);
    type InputBytes = [u8; 8];

    #[inline(always)]
    fn from_be_bytes(input: Self::InputBytes) -> Self {
        Self(u64::from_be_bytes(input))
    }

    #[inline(always)]
    fn to_be_bytes(self) -> Self::InputBytes {
        self.0.to_be_bytes()
    }

    #[inline(always)]
    fn rotr(self, count: u32) -> Self {
        Self(self.0.rotate_right(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits;

    #[test]
    fn rotr_matches_reference() {
        for x in [0u64, 1, 0x8000_0000, 0x0123_4567_89ab_cdef, u64::MAX] {
            for n in 0..64 {
                assert_eq!(Wrapping(x).rotr(n).0, bits::rotate_right(x, n, 64));
            }
        }
    }

    #[test]
    fn shift_is_logical() {
        let x: W64 = Wrapping(0x8000_0000_0000_0001);
        assert_eq!((x >> 7).0, 0x0100_0000_0000_0000);
        assert_eq!(x.rotr(7).0, 0x0300_0000_0000_0000);
    }
}
