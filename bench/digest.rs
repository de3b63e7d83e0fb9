// Copyright 2023 Brian Smith.
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
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sha2sum::digest;

static ALGORITHMS: &[(&str, &digest::Algorithm)] = &[
    ("sha224", &digest::SHA224),
    ("sha512", &digest::SHA512),
];

/// The lengths on either side of the point where the length field no longer
/// fits after the `0x80` marker, so the padding needs another block.
fn spill_lens(algorithm: &digest::Algorithm) -> [usize; 2] {
    let block_len = algorithm.block_len();
    let last_fitting = block_len - block_len / 8 - 1;
    [last_fitting, last_fitting + 1]
}

const BLOCK_COUNTS: &[usize] = &[1, 4, 16, 64, 1024];

// Two messages that differ by one byte but by one whole compression.
fn padding_spill(c: &mut Criterion) {
    for &(alg_name, algorithm) in ALGORITHMS {
        let mut group = c.benchmark_group(format!("digest::spill::{alg_name}"));
        for input_len in spill_lens(algorithm) {
            let input = vec![0x61u8; input_len];
            group.bench_with_input(BenchmarkId::from_parameter(input_len), &input, |b, input| {
                b.iter(|| digest::digest(algorithm, black_box(input)))
            });
        }
        group.finish();
    }
}

// Whole blocks of message, so throughput is dominated by the compression
// function rather than by padding and output formatting.
fn blocks(c: &mut Criterion) {
    for &(alg_name, algorithm) in ALGORITHMS {
        let mut group = c.benchmark_group(format!("digest::blocks::{alg_name}"));
        for &count in BLOCK_COUNTS {
            let input = vec![0u8; count * algorithm.block_len()];
            let _ = group.throughput(Throughput::Bytes(input.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
                b.iter(|| digest::digest(algorithm, black_box(input)))
            });
        }
        group.finish();
    }
}

fn hex(c: &mut Criterion) {
    for &(alg_name, algorithm) in ALGORITHMS {
        let d = digest::digest(algorithm, b"abc");
        c.bench_function(&format!("digest::hex::{alg_name}"), |b| {
            b.iter(|| black_box(&d).to_string())
        });
    }
}

criterion_group!(digest, padding_spill, blocks, hex);
criterion_main!(digest);
