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

use super::{
    super::{segment, word::Word},
    BLOCK_WORDS, CHAINING_WORDS,
};

/// Runs the compression function over every block of `padded`, starting from
/// `H`, and returns the resulting state.
///
/// `padded` must already be padded to a whole number of blocks.
#[allow(non_snake_case)]
pub(in super::super) fn block_data_order<S: Sha2>(
    H: [S; CHAINING_WORDS],
    padded: &[u8],
) -> [S; CHAINING_WORDS] {
    segment::blocks::<S>(padded).fold(H, |H, M| compress(H, &M))
}

/// Processes a single block.
#[allow(non_snake_case)]
pub(in super::super) fn compress<S: Sha2>(
    mut H: [S; CHAINING_WORDS],
    M: &[S; BLOCK_WORDS],
) -> [S; CHAINING_WORDS] {
    // FIPS 180-4 {6.2.2, 6.4.2} Step 1
    let W = schedule(M);

    // FIPS 180-4 {6.2.2, 6.4.2} Step 2
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = H;

    // FIPS 180-4 {6.2.2, 6.4.2} Step 3
    for (Kt, Wt) in S::k_table().iter().zip(W.as_ref()) {
        let T1 = h + SIGMA_1(e) + ch(e, f, g) + *Kt + *Wt;
        let T2 = SIGMA_0(a) + maj(a, b, c);
        h = g;
        g = f;
        f = e;
        e = d + T1;
        d = c;
        c = b;
        b = a;
        a = T1 + T2;
    }

    // FIPS 180-4 {6.2.2, 6.4.2} Step 4
    H[0] += a;
    H[1] += b;
    H[2] += c;
    H[3] += d;
    H[4] += e;
    H[5] += f;
    H[6] += g;
    H[7] += h;

    H
}

/// Expands a block into the message schedule.
#[allow(non_snake_case)]
pub(in super::super) fn schedule<S: Sha2>(M: &[S; BLOCK_WORDS]) -> S::W {
    let mut W = S::zero_w();
    let W_ref = W.as_mut();
    W_ref[..BLOCK_WORDS].copy_from_slice(M);
    for t in BLOCK_WORDS..S::ROUNDS {
        W_ref[t] = sigma_1(W_ref[t - 2]) + W_ref[t - 7] + sigma_0(W_ref[t - 15]) + W_ref[t - 16];
    }
    W
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn ch<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn maj<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[allow(non_snake_case)]
#[inline(always)]
fn SIGMA_0<S: Sha2>(x: S) -> S {
    x.rotr(S::BIG_SIGMA_0.0) ^ x.rotr(S::BIG_SIGMA_0.1) ^ x.rotr(S::BIG_SIGMA_0.2)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[allow(non_snake_case)]
#[inline(always)]
fn SIGMA_1<S: Sha2>(x: S) -> S {
    x.rotr(S::BIG_SIGMA_1.0) ^ x.rotr(S::BIG_SIGMA_1.1) ^ x.rotr(S::BIG_SIGMA_1.2)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn sigma_0<S: Sha2>(x: S) -> S {
    x.rotr(S::SMALL_SIGMA_0.0) ^ x.rotr(S::SMALL_SIGMA_0.1) ^ (x >> S::SMALL_SIGMA_0.2)
}

// FIPS 180-4 {4.1.2, 4.1.3}
#[inline(always)]
fn sigma_1<S: Sha2>(x: S) -> S {
    x.rotr(S::SMALL_SIGMA_1.0) ^ x.rotr(S::SMALL_SIGMA_1.1) ^ (x >> S::SMALL_SIGMA_1.2)
}

/// A SHA-2 word: the parameters that differ between the 32-bit and 64-bit
/// variants of the compression function.
pub(in super::super) trait Sha2: Word {
    const BIG_SIGMA_0: (u32, u32, u32);
    const BIG_SIGMA_1: (u32, u32, u32);
    const SMALL_SIGMA_0: (u32, u32, usize);
    const SMALL_SIGMA_1: (u32, u32, usize);

    const ROUNDS: usize;

    /// The message schedule, `ROUNDS` words long.
    type W: AsRef<[Self]> + AsMut<[Self]>;
    fn zero_w() -> Self::W;

    fn k_table() -> &'static [Self];
}

#[cfg(test)]
mod tests {
    use super::{
        super::{State32, SHA224_INITIAL_STATE},
        *,
    };
    use crate::digest::{padding, w32::W32, w64::W64, SHA224};
    use core::num::Wrapping;

    fn words32(values: [u32; BLOCK_WORDS]) -> [W32; BLOCK_WORDS] {
        values.map(Wrapping)
    }

    // The padded empty message: a single 1 bit and a zero length.
    #[test]
    fn schedule_32_empty_message() {
        let mut block = [0u32; BLOCK_WORDS];
        block[0] = 0x8000_0000;
        let expected: [u32; 64] = [
            2147483648, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2147483648, 0, 2117632, 0,
            570427392, 0, 84448578, 2147483648, 1476919296, 4235264, 1451269, 1711282176,
            3592562048, 337794312, 3594910044, 3374850048, 3287351444, 676112230, 109604294,
            2742808854, 1904000662, 4274181962, 2813755136, 2165675682, 2561075048, 62000258,
            1562224585, 2975250741, 3286092305, 614207615, 3297584367, 1575308336, 3741240933,
            748767245, 1008022316, 30329261, 369937616, 195877528, 907775968, 3526495142,
            43741191, 1967544444, 133517113, 4161330627, 3704256008, 1581412744, 1153231965,
            996066459,
        ];
        assert_eq!(schedule(&words32(block)), expected.map(Wrapping));
    }

    // "ABC" padded: 24 message bits, the 1 bit, and a length of 24.
    #[test]
    fn schedule_32_abc_upper() {
        let mut block = [0u32; BLOCK_WORDS];
        block[0] = 0x4142_4380;
        block[15] = 24;
        let expected: [u32; 64] = [
            1094861696, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 24, 1094861696, 983040,
            1772124185, 1610613702, 857076218, 25426944, 1187945132, 3267535758, 2652968984,
            1864794538, 254335064, 3289490897, 2024327239, 758282639, 1878924548, 2859021432,
            1034160308, 3987916839, 858236621, 2756660483, 2268060095, 3079286356, 3057658158,
            3090293436, 2529363232, 2137209215, 1745384904, 4207320789, 3927577153, 40024766,
            478833927, 3105315289, 412113274, 325510091, 369381143, 3582318330, 1812658626,
            1738216777, 2045971039, 1268037967, 3455161973, 3785832060, 1248694331, 4272040619,
            2661585251, 1669237636, 3036669893, 4247847033,
        ];
        assert_eq!(schedule(&words32(block)), expected.map(Wrapping));
    }

    #[test]
    fn schedule_64_copies_block() {
        let block: [W64; BLOCK_WORDS] =
            core::array::from_fn(|i| Wrapping(0x0101_0101_0101_0101 * (i as u64)));
        let w = schedule(&block);
        assert_eq!(w.as_ref().len(), 80);
        assert_eq!(&w.as_ref()[..BLOCK_WORDS], &block[..]);
    }

    #[test]
    fn k_tables() {
        assert_eq!(W32::k_table().len(), W32::ROUNDS);
        assert_eq!(W64::k_table().len(), W64::ROUNDS);
        assert_eq!(W32::k_table()[0].0, 0x428a2f98);
        assert_eq!(W32::k_table()[63].0, 0xc67178f2);
        assert_eq!(W64::k_table()[0].0, 0x428a2f98d728ae22);
        assert_eq!(W64::k_table()[79].0, 0x6c44198c4a475817);
        // The 32-bit constants are the high halves of the first 64 64-bit ones.
        for (k32, k64) in W32::k_table().iter().zip(W64::k_table()) {
            assert_eq!(u64::from(k32.0), k64.0 >> 32);
        }
    }

    // A single block is processed exactly like a multi-block run of one.
    #[test]
    fn block_data_order_is_compress_per_block() {
        let padded = padding::pad(b"abc", SHA224.block_len(), SHA224.len_len);
        let mut block = [Wrapping(0u32); BLOCK_WORDS];
        for (w, bytes) in block.iter_mut().zip(padded.chunks_exact(4)) {
            *w = Wrapping(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]));
        }
        let state: State32 = SHA224_INITIAL_STATE;
        assert_eq!(
            block_data_order(state, &padded),
            compress(state, &block)
        );
    }

    #[test]
    fn no_blocks_leaves_state_unchanged() {
        let state: State32 = SHA224_INITIAL_STATE;
        assert_eq!(block_data_order(state, &[]), state);
    }
}
