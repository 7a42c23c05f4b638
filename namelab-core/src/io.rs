use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads a corpus file and returns its usable lines as a `Vec<String>`.
///
/// - Line terminators (`\n` / `\r\n`) are chomped
/// - Blank lines are skipped (a blank line is not a syllable)
pub(crate) fn read_corpus_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	read_corpus_lines(BufReader::new(File::open(filename)?))
}

/// Reads corpus lines from any buffered reader.
///
/// Same chomping and blank-line policy as `read_corpus_file`; the reader
/// is consumed, matching the one-shot ingest of the store build.
pub(crate) fn read_corpus_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
	let mut lines = Vec::new();
	for line in reader.lines() {
		let line = line?;
		if !line.trim().is_empty() {
			lines.push(line);
		}
	}
	Ok(lines)
}
