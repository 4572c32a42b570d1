use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use super::HistoryError;

pub struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Reads the newest `max_entries` non-blank lines, oldest first.
    /// A missing file is an empty history; bytes that are not UTF-8 are
    /// replaced rather than failing the load.
    pub fn load_entries(&self, max_entries: usize) -> Result<VecDeque<String>, HistoryError> {
        let mut entries = VecDeque::new();

        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(entries),
            Err(e) => return Err(HistoryError::Read(self.file_path.clone(), e)),
        };

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| HistoryError::Read(self.file_path.clone(), e))?;
            if read == 0 {
                break;
            }

            // A line that is not UTF-8 only damages itself.
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }
            entries.push_back(line.to_owned());
            if entries.len() > max_entries {
                entries.pop_front();
            }
        }

        Ok(entries)
    }

    /// Rewrites the whole file, one entry per line.
    pub fn write_entries<'a, I>(&self, entries: I) -> Result<(), HistoryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let write_err = |e: std::io::Error| HistoryError::Write(self.file_path.clone(), e);

        let file = File::create(&self.file_path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        for entry in entries {
            writeln!(writer, "{}", entry).map_err(write_err)?;
        }
        writer.flush().map_err(write_err)
    }
}
