// Copyright 2019-2024 Brian Smith.
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

//! The SHA-2 compression function, written once and instantiated for 32-bit
//! words (SHA-224) and 64-bit words (SHA-512).

pub(super) use self::{
    compress::block_data_order,
    sha2_32::{State32, SHA224_BLOCK_LEN, SHA224_INITIAL_STATE},
    sha2_64::{State64, SHA512_BLOCK_LEN, SHA512_INITIAL_STATE},
};

pub(super) const CHAINING_WORDS: usize = 8;

/// The number of words in a block, for both word widths.
pub(super) const BLOCK_WORDS: usize = 16;

mod compress;
mod sha2_32;
mod sha2_64;
