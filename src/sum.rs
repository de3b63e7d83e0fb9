// Copyright 2015 Brian Smith.
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

//! The `sha224sum` and `sha512sum` command-line tools.
//!
//! ```text
//! sha224sum [FILE]
//! sha512sum [FILE]
//! ```
//!
//! The message is the whole content of `FILE`, or of standard input when no
//! file is named. The output is one line, `<hex digest>  <label>`, where the
//! label is `FILE` or `-`. Arguments after the first are ignored.

use crate::{
    digest::{self, Algorithm, Digest},
    error::{ReadInputError, RunError},
};
use std::{
    ffi::OsString,
    format, fs,
    io::{self, Read, Write},
    path::PathBuf,
    string::{String, ToString},
    vec::Vec,
};

/// Where the message comes from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    /// Standard input, labelled `-`.
    Stdin,

    /// A named file, labelled with the path as given.
    File(PathBuf),
}

impl Input {
    /// Selects the input from the process arguments, program name first.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        match args.into_iter().nth(1) {
            Some(path) => Self::File(PathBuf::from(path.into())),
            None => Self::Stdin,
        }
    }

    /// The label printed after the digest, for messages.
    ///
    /// A path that isn't valid UTF-8 is rendered lossily; use
    /// [`Self::write_label`] to reproduce it exactly.
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => String::from("-"),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Writes the label to `out`. On Unix a path is written as its raw
    /// bytes; elsewhere it is written as [`Self::label`] renders it.
    pub fn write_label(&self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Self::Stdin => out.write_all(b"-"),
            #[cfg(unix)]
            Self::File(path) => {
                use std::os::unix::ffi::OsStrExt;
                out.write_all(path.as_os_str().as_bytes())
            }
            #[cfg(not(unix))]
            Self::File(_) => out.write_all(self.label().as_bytes()),
        }
    }

    /// Reads the whole message. `stdin` is only read for [`Input::Stdin`].
    pub fn read(&self, stdin: &mut dyn Read) -> Result<Vec<u8>, ReadInputError> {
        let mut message = Vec::new();
        let read = match self {
            Self::Stdin => stdin.read_to_end(&mut message),
            Self::File(path) => fs::File::open(path).and_then(|mut f| f.read_to_end(&mut message)),
        };
        match read {
            Ok(_) => Ok(message),
            Err(e) => Err(ReadInputError::new(self.label(), e)),
        }
    }
}

/// Writes `<hex>  <label>` and a newline to `out`.
pub fn write_line(out: &mut dyn Write, digest: &Digest, input: &Input) -> io::Result<()> {
    write!(out, "{}  ", digest)?;
    input.write_label(out)?;
    out.write_all(b"\n")
}

/// Hashes the input selected by `args` and writes the digest line, with a
/// trailing newline, to `stdout`.
///
/// Nothing is written if the input can't be read.
pub fn run<I>(
    algorithm: &'static Algorithm,
    args: I,
    stdin: &mut dyn Read,
    stdout: &mut dyn Write,
) -> Result<(), RunError>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let input = Input::from_args(args);
    let message = input.read(stdin)?;
    let digest = digest::digest(algorithm, &message);
    write_line(stdout, &digest, &input)?;
    stdout.flush()?;
    Ok(())
}

/// The body of the `main` function of each tool: runs [`run`] on the process
/// arguments and standard streams, and exits with status 1 after reporting
/// any error on standard error.
pub fn main(algorithm: &'static Algorithm) {
    let args: Vec<OsString> = std::env::args_os().collect();
    let program = args
        .first()
        .and_then(|arg0| PathBuf::from(arg0).file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| format!("{:?}sum", algorithm).to_lowercase());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(algorithm, args, &mut stdin.lock(), &mut stdout.lock()) {
        let _ = writeln!(&mut io::stderr(), "{}: {}", program, e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::{SHA224, SHA512};
    use std::{io::Cursor, path::Path, vec};

    fn run_to_string(
        algorithm: &'static Algorithm,
        args: &[&str],
        stdin: &[u8],
    ) -> Result<String, RunError> {
        let mut stdin = Cursor::new(stdin.to_vec());
        let mut stdout = Vec::new();
        run(algorithm, args.iter().copied(), &mut stdin, &mut stdout)?;
        Ok(String::from_utf8(stdout).expect("output is ASCII"))
    }

    #[test]
    fn input_from_args() {
        assert_eq!(Input::from_args(["sha224sum"]), Input::Stdin);
        assert_eq!(Input::from_args(Vec::<OsString>::new()), Input::Stdin);
        assert_eq!(
            Input::from_args(["sha224sum", "a.txt", "b.txt"]),
            Input::File(PathBuf::from("a.txt"))
        );
    }

    #[test]
    fn labels() {
        assert_eq!(Input::Stdin.label(), "-");
        assert_eq!(Input::File(PathBuf::from("dir/x.bin")).label(), "dir/x.bin");
    }

    #[test]
    fn stdin_sha224() {
        assert_eq!(
            run_to_string(&SHA224, &["sha224sum"], b"abc").unwrap(),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7  -\n"
        );
    }

    #[test]
    fn stdin_sha512_empty() {
        assert_eq!(
            run_to_string(&SHA512, &["sha512sum"], b"").unwrap(),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e  -\n"
        );
    }

    #[test]
    fn file_input() {
        let path = std::env::temp_dir().join(format!("sha2sum-file-input-{}", std::process::id()));
        fs::write(&path, b"abc").unwrap();
        let label = path.display().to_string();
        let out = run_to_string(&SHA512, &["sha512sum", label.as_str()], b"ignored").unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            out,
            format!(
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                 2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f  {}\n",
                label
            )
        );
    }

    #[test]
    fn binary_input_is_not_decoded() {
        let message = vec![0xff, 0xfe, 0x00, 0x80];
        let mut stdin = Cursor::new(message.clone());
        let read = Input::Stdin.read(&mut stdin).unwrap();
        assert_eq!(read, message);
    }

    #[test]
    fn missing_file() {
        let missing = Path::new("this/path/does/not/exist.bin");
        let err = Input::File(missing.to_path_buf())
            .read(&mut io::empty())
            .unwrap_err();
        assert_eq!(err.label(), "this/path/does/not/exist.bin");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().starts_with("this/path/does/not/exist.bin: "));
    }

    #[test]
    fn missing_file_writes_nothing() {
        let mut stdout = Vec::new();
        let result = run(
            &SHA224,
            ["sha224sum", "this/path/does/not/exist.bin"],
            &mut io::empty(),
            &mut stdout,
        );
        assert!(matches!(result, Err(RunError::Input(_))));
        assert!(stdout.is_empty());
    }

    #[test]
    fn line_format() {
        let d = digest::digest(&SHA224, b"");
        let mut out = Vec::new();
        write_line(&mut out, &d, &Input::Stdin).unwrap();
        assert_eq!(
            out,
            b"d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f  -\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_label_is_written_exactly() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let input = Input::File(PathBuf::from(OsStr::from_bytes(b"dir/bad\xffname")));
        let d = digest::digest(&SHA224, b"abc");
        let mut out = Vec::new();
        write_line(&mut out, &d, &input).unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(b"23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7  ");
        expected.extend_from_slice(b"dir/bad\xffname\n");
        assert_eq!(out, expected);

        assert_eq!(input.label(), "dir/bad\u{fffd}name");
    }
}
