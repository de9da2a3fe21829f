//! Wordlist file writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use crate::error::Result;

/// Write candidates sorted, one per line, then append an external wordlist.
///
/// Non-blank lines of `external` are copied as they are. A missing external
/// file only logs a warning. Returns the number of candidates written.
pub fn write_wordlist<P, S>(path: P, candidates: &[S], external: Option<&Path>) -> Result<usize>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let mut sorted: Vec<&str> = candidates.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();

    let mut writer = BufWriter::new(File::create(path)?);
    for candidate in &sorted {
        writeln!(writer, "{candidate}")?;
    }

    if let Some(external) = external {
        match fs::read(external) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                let mut appended = 0usize;
                for line in text.lines().filter(|l| !l.trim().is_empty()) {
                    writeln!(writer, "{line}")?;
                    appended += 1;
                }
                info!("Appended {appended} lines from {}", external.display());
            }
            Err(e) => warn!("External wordlist '{}' not readable: {e}", external.display()),
        }
    }

    writer.flush()?;
    Ok(sorted.len())
}
