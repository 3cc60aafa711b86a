//! Test helpers for writing population files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;
use tempfile::TempDir;

pub(super) const POPULATION_JSON: &str = r#"[
  {"Name": "Ada", "Age": 30, "Years at office": 2, "Gender": "F", "Race": "Asian", "Interests": ["chess"], "Skillsets": ["roadmaps"], "PM_Type": "Junior PM"},
  {"Name": "Grace", "Age": 30, "Years at office": 2, "Gender": "F", "Race": "Asian", "Interests": ["chess"], "Skillsets": ["roadmaps"], "PM_Type": "Senior PM"},
  {"Name": "Edsger", "Age": 60, "Years at office": 0, "Gender": "M", "Race": "White", "Interests": [], "Skillsets": ["sql"], "PM_Type": "Senior PM"},
  {"Name": "Linus", "Age": 45, "Years at office": 4, "Gender": "M", "Race": "Black", "Interests": ["sailing"], "Skillsets": [], "PM_Type": "Junior PM"}
]"#;

/// Temporary directory with a UTF-8 root path.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn population(&self) -> Utf8PathBuf {
        let path = self.path("population.json");
        write_utf8(&path, POPULATION_JSON.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    let mut file = mentor_fs::create_utf8_file(path).expect("create file");
    file.write_all(contents).expect("write file");
}

pub(super) fn read_utf8(path: &Utf8Path) -> String {
    std::fs::read_to_string(path.as_std_path()).expect("read file")
}
