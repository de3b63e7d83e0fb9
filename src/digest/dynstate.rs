// Copyright 2015-2019 Brian Smith.
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

use super::{sha2, word::Word, Output, MAX_OUTPUT_LEN};

// Invariant: When constructed with `new32` (resp. `new64`), `As32` (resp.
// `As64`) is the active variant.
// Invariant: The active variant never changes after initialization.
#[derive(Clone, Copy)]
pub(super) enum DynState {
    As64(sha2::State64),
    As32(sha2::State32),
}

impl DynState {
    pub const fn new32(initial_state: sha2::State32) -> Self {
        Self::As32(initial_state)
    }

    pub const fn new64(initial_state: sha2::State64) -> Self {
        Self::As64(initial_state)
    }

    /// Runs the compression function over every block of `padded`.
    pub fn absorb(self, padded: &[u8]) -> Self {
        match self {
            Self::As64(state) => Self::As64(sha2::block_data_order(state, padded)),
            Self::As32(state) => Self::As32(sha2::block_data_order(state, padded)),
        }
    }

    /// Renders the state words big-endian, `h0` first.
    pub fn format_output(self) -> Output {
        match self {
            Self::As64(state) => format_output(state),
            Self::As32(state) => format_output(state),
        }
    }
}

fn format_output<W: Word, const N: usize>(state: [W; N]) -> Output {
    let mut output = [0u8; MAX_OUTPUT_LEN];
    output
        .chunks_exact_mut(core::mem::size_of::<W::InputBytes>())
        .zip(state)
        .for_each(|(out, word)| out.copy_from_slice(word.to_be_bytes().as_ref()));
    output
}
