use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Fill byte appended to each record up to the record width.
pub(crate) const PAD: u8 = b' ';

/// Fixed-width record file backing a `SyllableStore`.
///
/// The file is an anonymous temp file: the OS unlinks it at creation and
/// the handle closes on drop, so the storage is reclaimed on every exit
/// path, including abnormal termination.
///
/// # Invariants
/// - File length is always exactly `count * width` bytes
/// - Record `i` occupies the byte range `[i * width, (i + 1) * width)`
/// - Each record is its line left-justified and padded with `PAD`
#[derive(Debug)]
pub(crate) struct BackingStore {
	file: File,
	width: usize,
	count: usize,
}

impl BackingStore {
	/// Writes every line as a padded `width`-byte record, in line order.
	///
	/// # Parameters
	/// - `lines`: the chomped corpus lines; none may exceed `width` bytes.
	/// - `width`: the fixed record width in bytes.
	pub(crate) fn create(lines: &[String], width: usize) -> io::Result<Self> {
		let file = tempfile::tempfile()?;
		let pad = vec![PAD; width];

		let mut writer = BufWriter::new(&file);
		for line in lines {
			writer.write_all(line.as_bytes())?;
			writer.write_all(&pad[line.len()..])?;
		}
		writer.flush()?;
		drop(writer);

		Ok(Self { file, width, count: lines.len() })
	}

	/// Record width in bytes.
	pub(crate) fn width(&self) -> usize {
		self.width
	}

	/// Number of records.
	pub(crate) fn count(&self) -> usize {
		self.count
	}

	/// Reads record `index` into a fresh `width`-byte buffer.
	///
	/// The read is positioned, not seek-based, so concurrent readers do
	/// not disturb each other. An incomplete read is an error.
	pub(crate) fn read_record(&self, index: usize) -> io::Result<Vec<u8>> {
		let mut buffer = vec![0u8; self.width];
		let offset = (index * self.width) as u64;
		read_exact_at(&self.file, &mut buffer, offset)?;
		Ok(buffer)
	}

	/// Current backing file length in bytes.
	#[cfg(test)]
	pub(crate) fn byte_len(&self) -> io::Result<u64> {
		Ok(self.file.metadata()?.len())
	}
}

#[cfg(unix)]
fn read_exact_at(file: &File, buffer: &mut [u8], offset: u64) -> io::Result<()> {
	use std::os::unix::fs::FileExt;
	file.read_exact_at(buffer, offset)
}

#[cfg(windows)]
fn read_exact_at(file: &File, buffer: &mut [u8], offset: u64) -> io::Result<()> {
	use std::os::windows::fs::FileExt;
	let mut done = 0;
	while done < buffer.len() {
		match file.seek_read(&mut buffer[done..], offset + done as u64)? {
			0 => {
				return Err(io::Error::new(
					io::ErrorKind::UnexpectedEof,
					"Read past end of backing store",
				));
			}
			n => done += n,
		}
	}
	Ok(())
}
