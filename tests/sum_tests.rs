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
#![cfg(not(target_arch = "wasm32"))]

use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

const ABC_224: &str = "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7";
const ABC_512: &str = "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                       2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f";

fn run_with_stdin(exe: &str, args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The child may exit without reading stdin (e.g. when given a file), so
    // a broken pipe here is expected and not a test failure.
    match child.stdin.take().unwrap().write_all(stdin) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
        Err(e) => panic!("{}", e),
    }
    child.wait_with_output().unwrap()
}

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sha2sum-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn sha224sum_stdin() {
    let out = run_with_stdin(env!("CARGO_BIN_EXE_sha224sum"), &[], b"abc");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), format!("{}  -\n", ABC_224));
    assert!(out.stderr.is_empty());
}

#[test]
fn sha512sum_stdin() {
    let out = run_with_stdin(env!("CARGO_BIN_EXE_sha512sum"), &[], b"abc");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), format!("{}  -\n", ABC_512));
}

#[test]
fn sha512sum_empty_stdin() {
    let out = run_with_stdin(env!("CARGO_BIN_EXE_sha512sum"), &[], b"");
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e  -\n"
    );
}

#[test]
fn sha224sum_file_ignores_stdin_and_extra_args() {
    let path = temp_file("abc-224", b"abc");
    let path_str = path.to_str().unwrap();
    let out = run_with_stdin(
        env!("CARGO_BIN_EXE_sha224sum"),
        &[path_str, "ignored"],
        b"not the message",
    );
    std::fs::remove_file(&path).unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        format!("{}  {}\n", ABC_224, path_str)
    );
}

#[test]
fn sha512sum_missing_file() {
    let path = std::env::temp_dir().join("sha2sum-this-file-does-not-exist");
    let path_str = path.to_str().unwrap();
    let out = run_with_stdin(env!("CARGO_BIN_EXE_sha512sum"), &[path_str], b"");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains(path_str), "{}", stderr);
}
