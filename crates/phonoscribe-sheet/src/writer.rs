use anyhow::{Context, Result};
use phonoscribe_model::WordPhonetics;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Accumulates result rows and persists them to an `.xlsx` file.
///
/// `save` rebuilds the workbook from the accumulated rows each time, so a
/// checkpoint save and a later save of the same rows write identical cell
/// contents. The output file is overwritten on every save.
#[derive(Debug, Default)]
pub struct ResultSheet {
    rows: Vec<WordPhonetics>,
}

impl ResultSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one result row: word in column A, transcriptions in B, C, …
    /// A miss writes an empty cell.
    pub fn append(&mut self, result: WordPhonetics) {
        self.rows.push(result);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write all accumulated rows to `path`, replacing prior contents.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        for (row, result) in self.rows.iter().enumerate() {
            let row = row as u32;
            sheet.write_string(row, 0, &result.word)?;
            for (col, transcription) in result.transcriptions.iter().enumerate() {
                sheet.write_string(row, (col + 1) as u16, transcription.as_cell_text())?;
            }
        }

        workbook
            .save(path)
            .with_context(|| format!("Failed to save output spreadsheet {}", path.display()))?;
        tracing::debug!(rows = self.rows.len(), path = %path.display(), "Saved output sheet");
        Ok(())
    }
}
