use std::io::Write;

use somno_core::models::questionnaire::QuestionnaireRecord;
use somno_scoring::StrategyKind;

use crate::config::{OutputFormat, SomnoConfig};
use crate::output::{SCORE_UNAVAILABLE, render_report};

/// Effective settings for one `score` run: command-line overrides on top of
/// the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreOptions {
    pub strategy: StrategyKind,
    pub format: OutputFormat,
    pub include_breakdown: bool,
}

impl ScoreOptions {
    pub fn resolve(
        config: &SomnoConfig,
        strategy: Option<StrategyKind>,
        format: Option<OutputFormat>,
        breakdown: Option<bool>,
    ) -> Self {
        Self {
            strategy: strategy.unwrap_or(config.default_strategy),
            format: format.unwrap_or(config.output),
            include_breakdown: breakdown.unwrap_or(config.include_breakdown),
        }
    }
}

/// Collapse the `--breakdown` / `--no-breakdown` pair into an override.
pub fn breakdown_override(show: bool, hide: bool) -> Option<bool> {
    match (show, hide) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Score every record, writing reports to `out` and a failure line per
/// unscorable record to `err`. Keeps going after a failure; returns an error
/// when any record could not be scored.
pub fn score_records(
    records: &[QuestionnaireRecord],
    options: &ScoreOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> eyre::Result<()> {
    let strategy = options.strategy.strategy();
    let mut failed = 0usize;

    for (index, record) in records.iter().enumerate() {
        match strategy.score(record) {
            Ok(report) => {
                let rendered = render_report(&report, options.format, options.include_breakdown)?;
                writeln!(out, "{rendered}")?;
            }
            Err(e) => {
                failed += 1;
                tracing::warn!(index, record_id = ?record.id, error = %e, "scoring failed");
                writeln!(err, "{SCORE_UNAVAILABLE}: {e}")?;
            }
        }
    }

    if failed > 0 {
        return Err(eyre::eyre!(
            "{failed} of {} questionnaires could not be scored",
            records.len()
        ));
    }
    Ok(())
}
