//! Set discovery and interactive selection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flashdrill_core::{CardSet, SetSource};

use crate::storage::{self, LoadedSet};
use crate::terminal::Terminal;

/// One studyable entry in the library listing.
#[derive(Debug)]
pub struct SetEntry {
    pub name: String,
    pub path: PathBuf,
    pub cards: usize,
    pub malformed: usize,
    pub last_score: Option<u8>,
}

/// A directory of `.txt` card set files.
#[derive(Debug)]
pub struct SetLibrary {
    dir: PathBuf,
}

impl SetLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Sorted `.txt` paths in the library directory. A missing directory
    /// lists as empty rather than failing, so the picker can say so.
    pub fn set_paths(&self) -> io::Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        let dir = match fs::read_dir(&self.dir) {
            Ok(dir) => dir,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(paths),
            Err(err) => return Err(err),
        };
        for entry in dir {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("txt") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Loadable sets in the directory, sorted by name. Files that refuse
    /// to load are logged and left out of the listing.
    pub fn entries(&self) -> io::Result<Vec<SetEntry>> {
        let mut entries = Vec::new();
        for path in self.set_paths()? {
            match storage::load_set(&path) {
                Ok(loaded) => entries.push(SetEntry {
                    name: loaded.set.name.clone(),
                    cards: loaded.set.len(),
                    malformed: loaded.malformed,
                    last_score: loaded.last_score,
                    path,
                }),
                Err(err) => tracing::warn!("Not listing {}: {}", path.display(), err),
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Path a set name refers to: an existing file as given, or
    /// `<dir>/<name>.txt`.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let direct = Path::new(name);
        if direct.is_file() {
            direct.to_path_buf()
        } else {
            self.dir.join(format!("{name}.txt"))
        }
    }

    pub fn load_named(&self, name: &str) -> storage::Result<LoadedSet> {
        storage::load_set(&self.resolve(name))
    }
}

/// Menu line for one listed set.
fn describe(number: usize, entry: &SetEntry) -> String {
    let mut line = format!("{number}. {} ({} cards", entry.name, entry.cards);
    if entry.malformed > 0 {
        line.push_str(&format!(", {} malformed lines", entry.malformed));
    }
    line.push(')');
    if let Some(score) = entry.last_score {
        line.push_str(&format!(" last score {score}%"));
    }
    line
}

/// Interactive queue replenishment over a [`SetLibrary`].
///
/// Asks whether to add a set, renders a numbered listing and loads the
/// chosen file; load trouble warns and re-lists. Owns its own [`Terminal`]
/// since the terminal itself carries no state.
pub struct SetPicker {
    library: SetLibrary,
    term: Terminal,
}

impl SetPicker {
    pub fn new(library: SetLibrary) -> Self {
        Self {
            library,
            term: Terminal::new(),
        }
    }

    fn choose(&mut self) -> io::Result<Option<CardSet>> {
        loop {
            let entries = self.library.entries()?;
            if entries.is_empty() {
                self.term.print_warning(&format!(
                    "No sets found in {}.",
                    self.library.dir().display()
                ))?;
                return Ok(None);
            }

            self.term.print_line("")?;
            for (i, entry) in entries.iter().enumerate() {
                self.term.print_line(&describe(i + 1, entry))?;
            }
            let index =
                self.term
                    .read_index("Choose a set to study, 0 to cancel.", 0, entries.len() + 1)?;
            if index == 0 {
                return Ok(None);
            }

            match storage::load_set(&entries[index - 1].path) {
                Ok(loaded) => return Ok(Some(loaded.set)),
                Err(err) => self.term.print_warning(&err.to_string())?,
            }
        }
    }
}

impl SetSource for SetPicker {
    fn request_sets(&mut self) -> io::Result<Vec<CardSet>> {
        let mut sets = Vec::new();
        let mut question = "Add a set to the queue?";
        while self.term.ask_yes_no(question)? {
            match self.choose()? {
                Some(set) => sets.push(set),
                None => break,
            }
            question = "Add another set?";
        }
        Ok(sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn library_with(files: &[(&str, &str)]) -> (TempDir, SetLibrary) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let library = SetLibrary::new(dir.path());
        (dir, library)
    }

    #[test]
    fn entries_list_txt_files_sorted_by_name() {
        let (_dir, library) = library_with(&[
            ("verb.txt", "springa: run\n"),
            ("djur.txt", "# Score: 90\nhund: dog\nkatt: cat\n"),
            ("anteckningar.md", "inte ett set\n"),
        ]);

        let entries = library.entries().unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["djur", "verb"]);
        assert_eq!(entries[0].cards, 2);
        assert_eq!(entries[0].last_score, Some(90));
        assert_eq!(entries[1].last_score, None);
    }

    #[test]
    fn entries_skip_sets_that_refuse_to_load() {
        let (_dir, library) = library_with(&[
            ("bra.txt", "hund: dog\n"),
            ("tom.txt", "# bara en kommentar\n"),
        ]);

        let entries = library.entries().unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["bra"]);
    }

    #[test]
    fn missing_directory_lists_as_empty() {
        let dir = TempDir::new().unwrap();
        let library = SetLibrary::new(dir.path().join("finns-inte"));
        assert!(library.entries().unwrap().is_empty());
    }

    #[test]
    fn resolve_appends_extension_under_the_library_dir() {
        let (dir, library) = library_with(&[("djur.txt", "hund: dog\n")]);
        assert_eq!(library.resolve("djur"), dir.path().join("djur.txt"));
    }

    #[test]
    fn resolve_keeps_an_existing_path_as_given() {
        let (dir, library) = library_with(&[("djur.txt", "hund: dog\n")]);
        let direct = dir.path().join("djur.txt");
        assert_eq!(library.resolve(&direct.to_string_lossy()), direct);
    }

    #[test]
    fn load_named_reads_by_stem() {
        let (_dir, library) = library_with(&[("djur.txt", "hund: dog\n")]);
        let loaded = library.load_named("djur").unwrap();
        assert_eq!(loaded.set.name, "djur");
        assert_eq!(loaded.set.len(), 1);
    }

    #[test]
    fn describe_mentions_diagnostics_and_score() {
        let entry = SetEntry {
            name: "djur".to_string(),
            path: PathBuf::from("djur.txt"),
            cards: 4,
            malformed: 1,
            last_score: Some(75),
        };
        assert_eq!(
            describe(2, &entry),
            "2. djur (4 cards, 1 malformed lines) last score 75%"
        );

        let clean = SetEntry {
            malformed: 0,
            last_score: None,
            ..entry
        };
        assert_eq!(describe(1, &clean), "1. djur (4 cards)");
    }
}
