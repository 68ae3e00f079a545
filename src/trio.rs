use log::info;

use crate::error::PhysioLogError;
use crate::header::HeaderMetadata;
use crate::logfile::LogFile;
use crate::markers::{filter_float_samples, TriggerMarkers};
use crate::parse::{ParsedPhysioLog, PhysioParser};
use crate::search::find_indices;
use crate::trace::PhysioTrace;

const MARKER_LOG_START: &str = "Physiolog_START";
const MARKER_LOG_STOP: &str = "Physiolog_STOP";
const MARKER_SAMPLE_RATE: &str = "Sampling_Rate";

/// Parser for the Trio generation's log format.
///
/// The sampling rate is declared directly in the header and the whole
/// sample block sits on the single line after it.
#[derive(Clone, Copy, Debug)]
pub struct TrioParser {
    markers: TriggerMarkers,
}

impl Default for TrioParser {
    fn default() -> Self {
        Self::new(TriggerMarkers::Classic)
    }
}

impl TrioParser {
    /// Early Trio logs use `TriggerMarkers::Classic`; later revisions add
    /// the footer marks and need `Extended`.
    pub fn new(markers: TriggerMarkers) -> Self {
        Self { markers }
    }

    fn rate_line_index(&self, file: &LogFile) -> Result<usize, PhysioLogError> {
        for label in [MARKER_LOG_START, MARKER_LOG_STOP] {
            if find_indices(label, file.lines()).is_empty() {
                return Err(missing(label));
            }
        }
        find_indices(MARKER_SAMPLE_RATE, file.lines())
            .first()
            .copied()
            .ok_or_else(|| missing(MARKER_SAMPLE_RATE))
    }

    fn parse_rate(&self, line: &str) -> Result<f64, PhysioLogError> {
        let rest = line
            .split_once(':')
            .map(|(_, rest)| rest)
            .ok_or_else(|| PhysioLogError::MalformedNumeric {
                token: line.to_string(),
                context: "sampling rate line",
            })?;
        // The writer emits "Sampling_Rate : 50.0", one space after the colon.
        let text = rest.strip_prefix(' ').unwrap_or(rest).trim_end();
        text.parse().map_err(|_| PhysioLogError::MalformedNumeric {
            token: text.to_string(),
            context: "sampling rate",
        })
    }

    fn parse_samples(&self, line: &str) -> Result<Vec<f64>, PhysioLogError> {
        line.split(' ')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse().map_err(|_| PhysioLogError::MalformedNumeric {
                    token: token.to_string(),
                    context: "sample value",
                })
            })
            .collect()
    }
}

impl PhysioParser for TrioParser {
    fn format_name(&self) -> &'static str {
        "trio"
    }

    fn parse(&self, file: &LogFile) -> Result<ParsedPhysioLog, PhysioLogError> {
        let rate_index = self.rate_line_index(file)?;
        let rate_line = file.line(rate_index).ok_or_else(|| missing(MARKER_SAMPLE_RATE))?;
        let sampling_rate_hz = self.parse_rate(rate_line)?;
        info!("sampling rate: {sampling_rate_hz:.2} Hz");

        let data_line = file
            .line(rate_index + 1)
            .ok_or_else(|| missing("sample block"))?;
        let raw = self.parse_samples(data_line)?;
        let samples = filter_float_samples(raw, self.markers);
        info!("trio log: {} samples after trigger filtering", samples.len());

        Ok(ParsedPhysioLog {
            trace: PhysioTrace::from_samples(samples, sampling_rate_hz),
            header: HeaderMetadata::Trio { sampling_rate_hz },
        })
    }
}

fn missing(label: &'static str) -> PhysioLogError {
    PhysioLogError::MissingMarker { label }
}
