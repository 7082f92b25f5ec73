#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub board: bool,
    pub saved: bool,
    pub classic: bool,
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}

impl CliFlags {
    /// True if any character class was picked explicitly on the command
    /// line; otherwise the saved/default selection applies.
    pub fn has_class_flags(&self) -> bool {
        self.lower || self.upper || self.digits || self.symbols
    }
}
