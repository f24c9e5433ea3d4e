//! `/dev/urandom` backed index source.

use std::fs::File;
use std::io::{self, Read};

use zeroize::Zeroize;

use super::{IndexSource, Rand};
use crate::cli::prompts;

const BUF_SIZE: usize = 4096;

/// Buffered reader over `/dev/urandom`.
///
/// A read failure switches the rest of the run to [`Rand`] and warns once.
pub struct OsRand {
    file: File,
    buf: [u8; BUF_SIZE],
    pos: usize,
    fell_back: bool,
}

impl OsRand {
    pub fn open() -> io::Result<Self> {
        File::open("/dev/urandom").map(Self::from_file)
    }

    fn from_file(file: File) -> Self {
        Self {
            file,
            buf: [0; BUF_SIZE],
            pos: BUF_SIZE,
            fell_back: false,
        }
    }

    /// Whether a failed read moved this source onto the default generator.
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }

    fn refill(&mut self) -> io::Result<()> {
        self.file.read_exact(&mut self.buf)?;
        self.pos = 0;
        Ok(())
    }
}

impl IndexSource for OsRand {
    fn next_u64(&mut self) -> u64 {
        if self.fell_back {
            return Rand::get();
        }
        if self.pos + 8 > BUF_SIZE {
            if let Err(e) = self.refill() {
                prompts::urandom_unavailable(&e.to_string());
                self.fell_back = true;
                return Rand::get();
            }
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.buf[self.pos..self.pos + 8]);
        self.buf[self.pos..self.pos + 8].zeroize();
        self.pos += 8;
        u64::from_le_bytes(bytes)
    }
}

impl Drop for OsRand {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}
