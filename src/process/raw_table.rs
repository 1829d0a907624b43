#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Column names exactly as pasted, from the first line of the input.
    pub headers: Vec<String>,
    /// Each data line, padded with empty cells up to the header width.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
