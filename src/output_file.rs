use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// A file that only appears at its destination once [`commit`] succeeded.
///
/// Data is written to a hidden sibling of the destination. Committing
/// flushes and syncs it, then renames it over the destination. Dropping an
/// uncommitted file removes the sibling and leaves the destination as it was.
///
/// [`commit`]: AtomicOutputFile::commit
pub struct AtomicOutputFile {
    destination: PathBuf,
    partial_path: PathBuf,
    writer: BufWriter<File>,
    committed: bool,
}

fn partial_path_for(destination: &Path) -> PathBuf {
    let mut file_name = OsString::from(".");
    file_name.push(destination.file_name().unwrap_or(destination.as_os_str()));
    file_name.push(".partial");
    destination.with_file_name(file_name)
}

impl AtomicOutputFile {
    pub fn create(destination: &Path) -> io::Result<Self> {
        let partial_path = partial_path_for(destination);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&partial_path)?;
        Ok(Self {
            destination: destination.to_owned(),
            partial_path,
            writer: BufWriter::new(file),
            committed: false,
        })
    }

    pub fn commit(mut self) -> io::Result<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()?;
        fs::rename(&self.partial_path, &self.destination)?;
        self.committed = true;
        Ok(())
    }
}

impl Write for AtomicOutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Drop for AtomicOutputFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(e) = fs::remove_file(&self.partial_path) {
            log::warn!(
                "Unable to remove partial output file '{}': {}",
                self.partial_path.display(),
                e
            );
        }
    }
}
