//! Saved form defaults.

mod file;

use crate::pass::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub selection: Selection,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 8,
            selection: Selection::default(),
        }
    }
}
