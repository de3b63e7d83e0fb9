// Copyright 2015-2016 Brian Smith.
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

//! Message padding, FIPS 180-4 {5.1.1, 5.1.2}.

use crate::bits::BitLength;
use alloc::vec::Vec;

/// The padding marker: a single `1` bit followed by seven `0` bits.
const MARKER: u8 = 0x80;

/// The largest length field used by any supported algorithm.
const MAX_LEN_LEN: usize = 128 / 8;

/// Returns `message` followed by its padding.
///
/// The padding is the `1` bit, the fewest `0` bits that leave `len_len`
/// bytes before the end of a block, and the message's bit length as a
/// big-endian integer of `len_len` bytes. The result is always a non-zero
/// multiple of `block_len` bytes long.
///
/// The bit length is reduced modulo 2^(8 × `len_len`); no supported message
/// length comes close to that limit.
pub(super) fn pad(message: &[u8], block_len: usize, len_len: usize) -> Vec<u8> {
    debug_assert!(len_len <= MAX_LEN_LEN);
    debug_assert!(len_len < block_len);

    let total = padded_len(message.len(), block_len, len_len);
    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(message);
    padded.push(MARKER);
    padded.resize(total - len_len, 0);

    let len: [u8; MAX_LEN_LEN] = BitLength::from_byte_len(message.len()).to_be_bytes();
    padded.extend_from_slice(&len[(MAX_LEN_LEN - len_len)..]);

    debug_assert_eq!(padded.len(), total);
    padded
}

/// The length of a `message_len`-byte message once padded.
pub(super) fn padded_len(message_len: usize, block_len: usize, len_len: usize) -> usize {
    // The marker byte and the length field always fit in the padding.
    let unpadded = message_len + 1 + len_len;
    let remainder = unpadded % block_len;
    if remainder == 0 {
        unpadded
    } else {
        unpadded + (block_len - remainder)
    }
}
