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

//! SHA-224 and SHA-512, written from the FIPS 180-4 description using only
//! fixed-width integer operations.
//!
//! The whole message is hashed at once with [`digest::digest`]; there is no
//! incremental interface. The `sha224sum` and `sha512sum` binaries wrap the
//! [`sum`] module.
//!
//! # Feature Flags
//!
//! <table>
//! <tr><th>Feature
//!     <th>Description
//! <tr><td><code>std</code>
//!     <td>Enable features that use libstd: the <code>sum</code> module,
//!         the command-line tools, and <code>std::error::Error</code>
//!         implementations. Enabled by default.
//! <tr><td><code>test_logging</code>
//!     <td>Echo every line of the test vector files as they are parsed.
//! </table>

#![deny(missing_docs, unsafe_code, unused_results)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bits;
pub mod digest;
pub mod error;

#[cfg(feature = "std")]
pub mod sum;
