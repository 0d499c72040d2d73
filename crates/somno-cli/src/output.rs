use clap::ValueEnum;
use somno_core::choice::{Choice, Difficulty, Frequency, PartnerPresence, Quality};
use somno_scoring::Strategy;
use somno_scoring::scoring::ScoreReport;

use crate::config::OutputFormat;

/// Shown instead of a score whenever scoring fails.
pub const SCORE_UNAVAILABLE: &str = "unable to compute score";

pub fn render_report(
    report: &ScoreReport,
    format: OutputFormat,
    include_breakdown: bool,
) -> eyre::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(report)?;
            if !include_breakdown && let Some(obj) = value.as_object_mut() {
                obj.remove("breakdown");
            }
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Text => {
            let mut output = report.summary();
            if include_breakdown {
                for component in &report.breakdown {
                    output.push_str(&format!(
                        "\n  {:<32} {} / {}",
                        component.name, component.value, component.range.max
                    ));
                }
            }
            Ok(output)
        }
    }
}

pub fn render_strategy(strategy: &dyn Strategy) -> String {
    format!(
        "{:<8} {} (total {})",
        strategy.id(),
        strategy.name(),
        strategy.total_range()
    )
}

/// Which answer scale to list with `somno labels`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChoiceKind {
    Frequency,
    Difficulty,
    Quality,
    Partner,
}

pub fn choice_table(kind: ChoiceKind) -> Vec<(u8, &'static str)> {
    fn table<C: Choice>() -> Vec<(u8, &'static str)> {
        C::ALL.iter().map(|c| (c.value(), c.label())).collect()
    }

    match kind {
        ChoiceKind::Frequency => table::<Frequency>(),
        ChoiceKind::Difficulty => table::<Difficulty>(),
        ChoiceKind::Quality => table::<Quality>(),
        ChoiceKind::Partner => table::<PartnerPresence>(),
    }
}
