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

//! SHA-224 and SHA-512.
//!
//! The whole message must be available as a single slice; [`digest`] pads
//! it, splits it into blocks, runs the compression function over each block,
//! and assembles the output.
//!
//! ```
//! use sha2sum::digest;
//!
//! let d = digest::digest(&digest::SHA224, b"abc");
//! assert_eq!(
//!     d.to_string(),
//!     "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
//! );
//! ```

use self::dynstate::DynState;
use core::fmt;

mod dynstate;
mod padding;
mod segment;
mod sha2;
mod w32;
mod w64;
mod word;

/// Returns the digest of `data` using the given digest algorithm.
///
/// Every input, including the empty one, has a digest.
pub fn digest(algorithm: &'static Algorithm, data: &[u8]) -> Digest {
    let padded = padding::pad(data, algorithm.block_len(), algorithm.len_len);
    let state = algorithm.initial_state.absorb(&padded);
    Digest {
        value: state.format_output(),
        algorithm,
    }
}

/// A calculated digest value.
///
/// Use [`Self::as_ref`] to get the value as a `&[u8]`, or format it with
/// `{}` to get lowercase hex.
#[derive(Clone, Copy)]
pub struct Digest {
    value: Output,
    algorithm: &'static Algorithm,
}

impl Digest {
    /// The algorithm that was used to calculate the digest value.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.algorithm
    }
}

impl AsRef<[u8]> for Digest {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.value[..self.algorithm.output_len]
    }
}

/// Lowercase hex, two digits per byte, `h0` first.
impl fmt::Display for Digest {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.as_ref()
            .iter()
            .try_for_each(|byte| write!(fmt, "{:02x}", byte))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{:?}:{}", self.algorithm, self)
    }
}

/// A digest algorithm.
pub struct Algorithm {
    output_len: usize,
    chaining_len: usize,
    block_len: BlockLen,

    /// The length of the length in the padding.
    len_len: usize,

    initial_state: DynState,

    id: AlgorithmID,
}

#[derive(Debug, Eq, PartialEq)]
enum AlgorithmID {
    SHA224,
    SHA512,
}

impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Algorithm {}

impl fmt::Debug for Algorithm {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.id, fmt)
    }
}

impl Algorithm {
    /// The internal block length.
    pub fn block_len(&self) -> usize {
        self.block_len.into()
    }

    /// The size of the chaining value of the digest function, in bytes.
    ///
    /// For SHA-512 this is equal to [`Self::output_len()`]. For SHA-224,
    /// which truncates its output, it is the length before truncation.
    pub fn chaining_len(&self) -> usize {
        self.chaining_len
    }

    /// The length of a finalized digest.
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// The length of the hex rendering of a finalized digest.
    pub fn hex_len(&self) -> usize {
        self.output_len * 2
    }
}

/// SHA-224 as specified in [FIPS 180-4].
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA224: Algorithm = Algorithm {
    output_len: 224 / 8,
    chaining_len: 256 / 8,
    block_len: sha2::SHA224_BLOCK_LEN,
    len_len: 64 / 8,
    initial_state: DynState::new32(sha2::SHA224_INITIAL_STATE),
    id: AlgorithmID::SHA224,
};

/// SHA-512 as specified in [FIPS 180-4].
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA512: Algorithm = Algorithm {
    output_len: 512 / 8,
    chaining_len: 512 / 8,
    block_len: sha2::SHA512_BLOCK_LEN,
    len_len: 128 / 8,
    initial_state: DynState::new64(sha2::SHA512_INITIAL_STATE),
    id: AlgorithmID::SHA512,
};

/// The maximum block length ([`Algorithm::block_len()`]) of all the algorithms
/// in this module.
pub const MAX_BLOCK_LEN: usize = BlockLen::MAX.into();

/// The maximum output length ([`Algorithm::output_len()`]) of all the
/// algorithms in this module.
pub const MAX_OUTPUT_LEN: usize = 512 / 8;

/// The maximum chaining length ([`Algorithm::chaining_len()`]) of all the
/// algorithms in this module.
pub const MAX_CHAINING_LEN: usize = MAX_OUTPUT_LEN;

type Output = [u8; MAX_OUTPUT_LEN];

#[derive(Clone, Copy)]
#[repr(usize)]
enum BlockLen {
    _512 = 512 / 8,
    _1024 = 1024 / 8, // MAX
}

impl BlockLen {
    const MAX: Self = Self::_1024;

    #[inline(always)]
    const fn into(self) -> usize {
        self as usize
    }
}
