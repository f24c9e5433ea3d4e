//! RNG test binary - streams random output to stdout for statistical testing.
//!
//! Usage:
//!   ./rng_test                  # default generator (cycle counter mix)
//!   ./rng_test --urandom        # /dev/urandom
//!   ./rng_test --seed 42        # deterministic SplitMix64
//!   ./rng_test --indices 95     # one byte per draw of index(95)
//!
//! Pipe to test suites:
//!   ./rng_test | dieharder -a -g 200
//!   ./rng_test | RNG_test stdin -tlmax 1TB

use std::io::{self, Write};

use passwidget::rand::{IndexSource, SourceKind};

fn usage() {
    eprintln!("Usage: rng_test [OPTIONS]");
    eprintln!();
    eprintln!("Streams random output to stdout for statistical testing.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -u, --urandom      Use /dev/urandom instead of the default generator");
    eprintln!("      --seed <N>     Use the deterministic generator with seed N");
    eprintln!("      --indices <N>  Emit index(N) draws as bytes (1 <= N <= 256)");
    eprintln!("  -h, --help         Show this help");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut kind = SourceKind::Hardware;
    let mut indices: Option<usize> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                usage();
                std::process::exit(0);
            }
            "-u" | "--urandom" => kind = SourceKind::Urandom,
            "--seed" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(seed) => kind = SourceKind::Seeded(seed),
                    None => {
                        usage();
                        std::process::exit(2);
                    }
                }
            }
            "--indices" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(n @ 1..=256) => indices = Some(n),
                    _ => {
                        usage();
                        std::process::exit(2);
                    }
                }
            }
            _ => {
                usage();
                std::process::exit(2);
            }
        }
        i += 1;
    }

    let mut rng = match kind.open() {
        Ok(rng) => rng,
        Err(e) => {
            eprintln!("Failed to open {kind}: {e}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut buf = [0u8; 8192];

    loop {
        match indices {
            Some(bound) => {
                for b in buf.iter_mut() {
                    *b = rng.index(bound) as u8;
                }
            }
            None => {
                for chunk in buf.chunks_exact_mut(8) {
                    chunk.copy_from_slice(&rng.next_u64().to_le_bytes());
                }
            }
        }

        if out.write_all(&buf).is_err() {
            break;
        }
    }
}
