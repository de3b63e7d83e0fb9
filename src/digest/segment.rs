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

//! Splitting a padded message into blocks of words.

use super::{sha2::BLOCK_WORDS, word::Word};
use core::mem::size_of;

/// Returns the blocks of `padded`, in order, each as `BLOCK_WORDS` big-endian
/// words of type `W`.
///
/// `padded.len()` must be a multiple of the block length; `padding::pad`
/// guarantees this.
pub(super) fn blocks<W: Word>(padded: &[u8]) -> impl Iterator<Item = [W; BLOCK_WORDS]> + '_ {
    let word_len = size_of::<W::InputBytes>();
    let block_len = word_len * BLOCK_WORDS;
    debug_assert_eq!(padded.len() % block_len, 0);

    padded.chunks_exact(block_len).map(move |block| {
        let mut words = [W::ZERO; BLOCK_WORDS];
        words
            .iter_mut()
            .zip(block.chunks_exact(word_len))
            .for_each(|(word, bytes)| *word = from_be_slice(bytes));
        words
    })
}

#[inline(always)]
fn from_be_slice<W: Word>(bytes: &[u8]) -> W {
    let mut input = W::InputBytes::default();
    input.as_mut().copy_from_slice(bytes);
    W::from_be_bytes(input)
}
