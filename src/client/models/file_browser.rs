use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// In-window file picker: the current directory, its visible entries and the
/// free-text path field.
#[derive(Debug, Clone, Default)]
pub struct FileBrowser {
    pub current_dir: PathBuf,
    pub entries: Vec<BrowserEntry>,
    pub path_input: String,
}

impl FileBrowser {
    pub fn new(start_dir: &Path) -> std::io::Result<Self> {
        let mut browser = Self::default();
        browser.open(start_dir)?;
        Ok(browser)
    }

    /// Lists `dir`: directories first, then files, each sorted case-insensitively.
    /// Hidden entries are skipped. On error the browser is left untouched.
    pub fn open(&mut self, dir: &Path) -> std::io::Result<()> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            // Segue i link simbolici
            let is_dir = entry.path().is_dir();
            entries.push(BrowserEntry {
                name,
                path: entry.path(),
                is_dir,
            });
        }
        entries.sort_by(|a, b| {
            b.is_dir
                .cmp(&a.is_dir)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        self.current_dir = dir.to_path_buf();
        self.path_input = dir.display().to_string();
        self.entries = entries;
        Ok(())
    }

    pub fn parent(&mut self) -> std::io::Result<()> {
        match self.current_dir.parent().map(Path::to_path_buf) {
            Some(parent) => self.open(&parent),
            None => Ok(()),
        }
    }

    pub fn has_parent(&self) -> bool {
        self.current_dir.parent().is_some()
    }

    pub fn files(&self) -> impl Iterator<Item = &BrowserEntry> {
        self.entries.iter().filter(|e| !e.is_dir)
    }
}
