use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// Worksheet holding the word list.
pub const INPUT_SHEET: &str = "Sheet1";

/// Read the word list from column A of `Sheet1`, starting at row 1.
///
/// Each non-empty cell contributes its lowercased text; reading stops at
/// the first empty or missing cell. Row order and duplicates are kept.
/// A missing or unreadable file, or a non-text cell in the list, is a
/// hard error.
pub fn read_words(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open input spreadsheet {}", path.display()))?;
    let range = workbook
        .worksheet_range(INPUT_SHEET)
        .with_context(|| format!("No '{INPUT_SHEET}' sheet in {}", path.display()))?;

    // calamine trims the range to the first used cell; anything other
    // than A1 means the list starts with a blank cell.
    if range.start() != Some((0, 0)) {
        return Ok(Vec::new());
    }

    let mut words = Vec::new();
    for row in range.rows() {
        match row.first() {
            Some(Data::String(s)) if !s.is_empty() => words.push(s.to_lowercase()),
            Some(Data::Empty) | Some(Data::String(_)) | None => break,
            Some(other) => anyhow::bail!(
                "Cell A{} of {} holds a non-text value ({other:?}); the word list must be text",
                words.len() + 1,
                path.display()
            ),
        }
    }

    tracing::debug!(words = words.len(), path = %path.display(), "Read word list");
    Ok(words)
}
