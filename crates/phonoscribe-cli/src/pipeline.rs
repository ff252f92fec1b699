use anyhow::{Context, Result};
use phonoscribe_acquire::{build_client, Site};
use phonoscribe_model::{summarize, PipelineConfig, RunSummary, WordPhonetics};
use phonoscribe_sheet::{read_words, ResultSheet};

/// Run the full extract-and-write pipeline described by `config`.
///
/// Strictly sequential: all of a word's lookups finish before the next
/// word starts. The output sheet is saved after every
/// `checkpoint_interval` words and once more at the end, so a killed run
/// keeps everything up to its last checkpoint.
pub async fn run(config: &PipelineConfig) -> Result<RunSummary> {
    config.validate().context("Invalid pipeline configuration")?;

    let words = read_words(&config.input_path)?;
    tracing::info!(words = words.len(), path = %config.input_path, "Loaded word list");

    let sites = config
        .sites
        .iter()
        .map(Site::from_config)
        .collect::<Result<Vec<_>>>()?;
    let client = build_client()?;

    let mut sheet = ResultSheet::new();
    let mut results = Vec::with_capacity(words.len());

    for (index, word) in words.iter().enumerate() {
        let mut transcriptions = Vec::with_capacity(sites.len());
        for site in &sites {
            let transcription = site.lookup(&client, word).await?;
            if !transcription.is_found() {
                tracing::debug!(site = site.name(), word = %word, "No transcription found");
            }
            transcriptions.push(transcription);
        }

        let result = WordPhonetics {
            word: word.clone(),
            transcriptions,
        };
        sheet.append(result.clone());
        results.push(result);

        if (index + 1) % config.checkpoint_interval == 0 {
            sheet.save(&config.output_path)?;
            tracing::info!(processed = index + 1, total = words.len(), "Checkpoint saved");
        }
    }

    sheet.save(&config.output_path)?;
    tracing::info!(rows = sheet.len(), path = %config.output_path, "Final save complete");

    Ok(summarize(&results))
}
