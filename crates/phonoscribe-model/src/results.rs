use serde::{Deserialize, Serialize};

/// Outcome of one dictionary lookup for one word.
///
/// `NotFound` covers every non-fatal miss: unknown word, bot-blocked
/// request, error page. It is counted, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transcription {
    Found(String),
    NotFound,
}

impl Transcription {
    /// Text for the output cell; a miss writes an empty cell.
    pub fn as_cell_text(&self) -> &str {
        match self {
            Transcription::Found(text) => text,
            Transcription::NotFound => "",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Transcription::Found(_))
    }
}

/// One word with its lookup outcomes, in configured site order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPhonetics {
    pub word: String,
    pub transcriptions: Vec<Transcription>,
}

impl WordPhonetics {
    /// True when every configured site produced a transcription.
    pub fn is_complete(&self) -> bool {
        self.transcriptions.iter().all(Transcription::is_found)
    }
}

/// Aggregate counts for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub matched: usize,
    pub failed: usize,
}

/// Pure aggregation over per-word results. A word counts as failed
/// when any site returned `NotFound`.
pub fn summarize(results: &[WordPhonetics]) -> RunSummary {
    let failed = results.iter().filter(|r| !r.is_complete()).count();
    RunSummary {
        total: results.len(),
        matched: results.len() - failed,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(s: &str) -> Transcription {
        Transcription::Found(s.to_string())
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(found("/rʌn/").as_cell_text(), "/rʌn/");
        assert_eq!(Transcription::NotFound.as_cell_text(), "");
    }

    #[test]
    fn test_complete_requires_all_sites() {
        let complete = WordPhonetics {
            word: "run".into(),
            transcriptions: vec![found("/rʌn/"), found("/rʌn/")],
        };
        let partial = WordPhonetics {
            word: "walk".into(),
            transcriptions: vec![Transcription::NotFound, found("/wɔːk/")],
        };
        assert!(complete.is_complete());
        assert!(!partial.is_complete());
    }

    #[test]
    fn test_summarize_counts_partial_as_failed() {
        let results = vec![
            WordPhonetics {
                word: "run".into(),
                transcriptions: vec![found("/rʌn/"), found("/rʌn/")],
            },
            WordPhonetics {
                word: "walk".into(),
                transcriptions: vec![Transcription::NotFound, found("/wɔːk/")],
            },
        ];
        let summary = summarize(&results);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.matched, 0);
        assert_eq!(summary.failed, 0);
    }
}
