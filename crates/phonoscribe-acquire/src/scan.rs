use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan start offset {offset} is out of bounds for a document of {len} bytes")]
    StartOutOfBounds { offset: usize, len: usize },

    #[error("scan start offset {0} is not on a character boundary")]
    NotCharBoundary(usize),

    #[error("markup never balances before end of document (scan started at offset {0})")]
    UnbalancedMarkup(usize),
}

/// Recover the visible text of one balanced markup structure.
///
/// `start` is the byte offset of an opening `<` located by a marker
/// pattern. The scan walks forward one character at a time, tracking tag
/// depth: every `<x` counts +1 and every `</x` counts −1, with no
/// tag-name matching. Characters between tags are recorded; the scan
/// stops once depth returns to zero. The recorded text has `"` characters
/// stripped and is wrapped in the `/…/` phonetic-notation delimiters.
///
/// The depth counter is deliberately naive. Longman pronunciation spans
/// nest only paired tags, and the sites this was written for never emit
/// self-closing tags inside the marker, so a void tag like `<br>` would
/// desynchronize the count. When depth never returns to zero the scan
/// stops at end of document with `ScanError::UnbalancedMarkup` rather
/// than running out of bounds.
pub fn scan_fragment(doc: &str, start: usize) -> Result<String, ScanError> {
    if start >= doc.len() {
        return Err(ScanError::StartOutOfBounds {
            offset: start,
            len: doc.len(),
        });
    }
    if !doc.is_char_boundary(start) {
        return Err(ScanError::NotCharBoundary(start));
    }

    let mut chars = doc[start..].chars().peekable();
    // The "previous character" seen by the scan; seeded from the document
    // so a start offset mid-text behaves the same as a contiguous scan.
    let mut prev = doc[..start].chars().next_back();
    let mut depth: i32 = 0;
    let mut started = false;
    let mut recording = false;
    let mut text = String::new();

    loop {
        // Termination is checked before consuming, so the characters of
        // the final closing tag past its `<` are never visited.
        if started && depth == 0 {
            break;
        }
        let Some(ch) = chars.next() else {
            return Err(ScanError::UnbalancedMarkup(start));
        };
        started = true;

        if ch == '<' {
            recording = false;
            match chars.peek() {
                Some(&'/') => depth -= 1,
                Some(_) => depth += 1,
                None => return Err(ScanError::UnbalancedMarkup(start)),
            }
        } else if prev == Some('>') {
            recording = true;
        }

        if recording {
            text.push(ch);
        }
        prev = Some(ch);
    }

    Ok(format!("/{}/", text.replace('"', "")))
}
