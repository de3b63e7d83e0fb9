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

use super::word::Word;
use core::num::Wrapping;

pub type W32 = Wrapping<u32>;

impl Word for W32 {
    const ZERO: Self = Self(0);
    type InputBytes = [u8; 4];

    #[inline(always)]
    fn from_be_bytes(input: Self::InputBytes) -> Self {
        Self(u32::from_be_bytes(input))
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
        for x in [0u32, 1, 0b1111, 0x8000_0000, 0xdead_beef, u32::MAX] {
            for n in 0..32 {
                assert_eq!(
                    u64::from(Wrapping(x).rotr(n).0),
                    bits::rotate_right(u64::from(x), n, 32)
                );
            }
        }
    }

    #[test]
    fn arithmetic_wraps() {
        let x: W32 = Wrapping(u32::MAX);
        assert_eq!((x + Wrapping(2)).0, 1);
        assert_eq!((!Wrapping(0u32)).0, u32::MAX);
        assert_eq!(
            u64::from((x + x + Wrapping(7)).0),
            bits::add_mod(32, [u64::from(u32::MAX), u64::from(u32::MAX), 7])
        );
    }

    #[test]
    fn be_bytes() {
        assert_eq!(W32::from_be_bytes([0x80, 0, 0, 0]).0, 0x8000_0000);
        assert_eq!(Wrapping(0x0102_0304u32).to_be_bytes(), [1, 2, 3, 4]);
    }
}
