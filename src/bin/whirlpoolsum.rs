use anyhow::{Context, anyhow};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use whirlpool_rs::hash::format::{digests_equal, to_hex};
use whirlpool_rs::hash::whirlpool::{ALGORITHM_NAME, DIGEST_SIZE, Output, hash_reader};

#[derive(Parser)]
#[command(name = "whirlpoolsum")]
#[command(about = "Print or check WHIRLPOOL (512-bit) checksums", long_about = None)]
struct Cli {
    /// Read checksums from the FILEs and check them
    #[arg(short = 'c', long)]
    check: bool,

    /// Create a BSD-style checksum
    #[arg(long, conflicts_with = "check")]
    tag: bool,

    /// Don't print OK for each successfully verified file
    #[arg(short = 'q', long, requires = "check")]
    quiet: bool,

    /// Files to read; none or "-" reads standard input
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let mut files = cli.files;
    if files.is_empty() {
        files.push(PathBuf::from("-"));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ok = if cli.check {
        check_files(&files, cli.quiet, &mut out)?
    } else {
        print_sums(&files, cli.tag, &mut out)?
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn open_input(path: &Path) -> io::Result<Box<dyn Read>> {
    if path == Path::new("-") {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(File::open(path)?))
    }
}

fn digest_path(path: &Path) -> io::Result<Output> {
    debug!(path = %path.display(), "hashing");
    hash_reader(open_input(path)?)
}

fn print_sums(files: &[PathBuf], tag: bool, out: &mut impl Write) -> anyhow::Result<bool> {
    let mut ok = true;
    for path in files {
        match digest_path(path) {
            Ok(digest) => {
                let name = path.display();
                if tag {
                    writeln!(out, "{} ({}) = {}", ALGORITHM_NAME, name, to_hex(&digest))?;
                } else {
                    writeln!(out, "{}  {}", to_hex(&digest), name)?;
                }
            }
            Err(e) => {
                eprintln!("whirlpoolsum: {}: {}", path.display(), e);
                ok = false;
            }
        }
    }
    Ok(ok)
}

/// One parsed line of a checksum list.
#[derive(Debug, PartialEq, Eq)]
struct SumLine {
    expected: Vec<u8>,
    path: PathBuf,
}

fn parse_sum_line(line: &str) -> anyhow::Result<SumLine> {
    let tag_prefix = format!("{} (", ALGORITHM_NAME);
    let (hex_digest, name) = if let Some(rest) = line.strip_prefix(&tag_prefix) {
        let (name, hex_digest) = rest
            .rsplit_once(") = ")
            .ok_or_else(|| anyhow!("malformed tagged line"))?;
        (hex_digest, name)
    } else {
        let (hex_digest, name) = line
            .split_once(' ')
            .ok_or_else(|| anyhow!("missing file name"))?;
        // Second separator character is ' ' for text mode or '*' for binary.
        let name = name
            .strip_prefix(' ')
            .or_else(|| name.strip_prefix('*'))
            .unwrap_or(name);
        (hex_digest, name)
    };

    let expected = hex::decode(hex_digest.trim()).context("digest is not valid hex")?;
    if expected.len() != DIGEST_SIZE {
        return Err(anyhow!(
            "digest has {} bytes, expected {}",
            expected.len(),
            DIGEST_SIZE
        ));
    }

    Ok(SumLine {
        expected,
        path: PathBuf::from(name),
    })
}

fn check_files(lists: &[PathBuf], quiet: bool, out: &mut impl Write) -> anyhow::Result<bool> {
    let mut mismatched = 0usize;
    let mut unreadable = 0usize;
    let mut malformed = 0usize;

    for list in lists {
        let reader = match open_input(list) {
            Ok(input) => BufReader::new(input),
            Err(e) => {
                eprintln!("whirlpoolsum: {}: {}", list.display(), e);
                unreadable += 1;
                continue;
            }
        };

        for (lineno, line) in reader.split(b'\n').enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("whirlpoolsum: {}: {}", list.display(), e);
                    unreadable += 1;
                    break;
                }
            };
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let parsed = std::str::from_utf8(&line)
                .context("line is not valid UTF-8")
                .and_then(|text| parse_sum_line(text.trim_end_matches('\r')));
            let entry = match parsed {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(list = %list.display(), line = lineno + 1, error = %e, "skipping line");
                    malformed += 1;
                    continue;
                }
            };

            match digest_path(&entry.path) {
                Ok(actual) if digests_equal(&entry.expected, &actual) => {
                    if !quiet {
                        writeln!(out, "{}: OK", entry.path.display())?;
                    }
                }
                Ok(_) => {
                    debug!(path = %entry.path.display(), "checksum mismatch");
                    writeln!(out, "{}: FAILED", entry.path.display())?;
                    mismatched += 1;
                }
                Err(e) => {
                    eprintln!("whirlpoolsum: {}: {}", entry.path.display(), e);
                    writeln!(out, "{}: FAILED open or read", entry.path.display())?;
                    unreadable += 1;
                }
            }
        }
    }

    if malformed > 0 {
        eprintln!("whirlpoolsum: WARNING: {} line(s) are improperly formatted", malformed);
    }
    if unreadable > 0 {
        eprintln!("whirlpoolsum: WARNING: {} file(s) could not be read", unreadable);
    }
    if mismatched > 0 {
        eprintln!("whirlpoolsum: WARNING: {} computed checksum(s) did NOT match", mismatched);
    }

    Ok(mismatched == 0 && unreadable == 0 && malformed == 0)
}
