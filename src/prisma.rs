use log::{info, warn};

use crate::error::PhysioLogError;
use crate::header::{ClockWindow, DeviceInfo, HeaderMetadata, LogKind, TimingPair};
use crate::logfile::LogFile;
use crate::markers::{filter_int_samples, TriggerMarkers};
use crate::parse::{ParsedPhysioLog, PhysioParser};
use crate::search::labeled_digit;
use crate::trace::PhysioTrace;

const LOGVERSION_PULS: &str = "LOGVERSION_PULS";
const LOGVERSION_RESP: &str = "LOGVERSION_RESP";

const LABEL_MDH_START: &str = "LogStartMDHTime";
const LABEL_MDH_STOP: &str = "LogStopMDHTime";
const LABEL_MPCU_START: &str = "LogStartMPCUTime";
const LABEL_MPCU_STOP: &str = "LogStopMPCUTime";

/// The five device-identification labels of the info segment, in the order
/// they appear. The last one anchors the sample block: data starts two
/// tokens after it.
const DEVICE_LABELS: [&str; 5] = [
    "uiHwRevisionPeru/ucHWRevLevel:",
    "uiPartNbrPeruPub:",
    "uiHwRevisionPpu/ucSWSubRevLevel:",
    "uiPartNbrPpuPub:",
    "uiSwVersionPdau/ucSWMainRevLevel:",
];

/// Parser for the Prisma generation's log format.
///
/// Unlike Trio logs there is no declared sampling rate; the rate is derived
/// empirically from the MDH clock's elapsed time over the filtered sample
/// count, with the MPCU clock logged as a cross-check.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrismaParser;

impl PrismaParser {
    fn detect_kind(&self, first_line: &str) -> Result<LogKind, PhysioLogError> {
        if first_line.contains(LOGVERSION_PULS) {
            Ok(LogKind::Puls)
        } else if first_line.contains(LOGVERSION_RESP) {
            Ok(LogKind::Resp)
        } else {
            Err(PhysioLogError::UnrecognizedFormat {
                first_line: first_line.chars().take(80).collect(),
            })
        }
    }

    fn parse_timing(&self, file: &LogFile) -> Result<TimingPair, PhysioLogError> {
        let mdh = ClockWindow {
            start_ms: self.timestamp_ms(file, LABEL_MDH_START)?,
            stop_ms: self.timestamp_ms(file, LABEL_MDH_STOP)?,
        };
        let mpcu = ClockWindow {
            start_ms: self.timestamp_ms(file, LABEL_MPCU_START)?,
            stop_ms: self.timestamp_ms(file, LABEL_MPCU_STOP)?,
        };
        Ok(TimingPair { mdh, mpcu })
    }

    fn timestamp_ms(&self, file: &LogFile, label: &'static str) -> Result<f64, PhysioLogError> {
        let line = file
            .lines()
            .iter()
            .find(|line| line.contains(label))
            .ok_or(PhysioLogError::MissingMarker { label })?;
        let rest = line
            .split_once(':')
            .map(|(_, rest)| rest)
            .ok_or(PhysioLogError::MissingMarker { label })?;
        // Some writers pad the value with spaces in the middle, not only at
        // the ends; every space goes.
        let text: String = rest.chars().filter(|c| *c != ' ').collect();
        text.trim()
            .parse()
            .map_err(|_| PhysioLogError::MalformedNumeric {
                token: text,
                context: "clock timestamp",
            })
    }

    fn parse_params(&self, tokens: &[&str]) -> Result<[i64; 5], PhysioLogError> {
        if tokens.len() < 5 {
            return Err(PhysioLogError::MissingMarker {
                label: "header parameter block",
            });
        }
        let mut params = [0i64; 5];
        for (slot, token) in params.iter_mut().zip(tokens) {
            *slot = token
                .parse()
                .map_err(|_| PhysioLogError::MalformedNumeric {
                    token: token.to_string(),
                    context: "header parameter",
                })?;
        }
        Ok(params)
    }

    /// Returns the device info plus the token index of the fifth label.
    fn parse_device_info(&self, tokens: &[&str]) -> Result<(DeviceInfo, usize), PhysioLogError> {
        let mut values = [None; 5];
        let mut anchor = None;
        for (slot, label) in values.iter_mut().zip(DEVICE_LABELS) {
            match labeled_digit(label, tokens) {
                Some((index, value)) => {
                    info!("{label} {value}");
                    *slot = Some(value);
                    anchor = Some(index);
                }
                None => warn!("{label} not found in info segment"),
            }
        }
        let anchor = anchor
            .filter(|_| values[4].is_some())
            .ok_or(PhysioLogError::MissingMarker {
                label: "uiSwVersionPdau/ucSWMainRevLevel:",
            })?;
        let device = DeviceInfo {
            hw_revision_peru: values[0],
            part_nbr_peru: values[1],
            hw_revision_ppu: values[2],
            part_nbr_ppu: values[3],
            sw_version_pdau: values[4].unwrap_or_default(),
        };
        Ok((device, anchor))
    }

    fn parse_samples(&self, tokens: &[&str]) -> Result<Vec<i64>, PhysioLogError> {
        tokens
            .iter()
            .map(|token| {
                token.parse().map_err(|_| PhysioLogError::MalformedNumeric {
                    token: token.to_string(),
                    context: "sample value",
                })
            })
            .collect()
    }
}

impl PhysioParser for PrismaParser {
    fn format_name(&self) -> &'static str {
        "prisma"
    }

    fn parse(&self, file: &LogFile) -> Result<ParsedPhysioLog, PhysioLogError> {
        let first_line = file.line(0).unwrap_or_default();
        let kind = self.detect_kind(first_line)?;
        info!("{} log recognized", kind.as_str());

        let timing = self.parse_timing(file)?;
        let t_mdh = timing.mdh.elapsed_ms();
        let t_mpcu = timing.mpcu.elapsed_ms();

        let tokens: Vec<&str> = first_line.split_whitespace().collect();
        let params = self.parse_params(&tokens)?;
        let (device, anchor) = self.parse_device_info(&tokens)?;

        let data_tokens = tokens.get(anchor + 2..).unwrap_or_default();
        let raw = self.parse_samples(data_tokens)?;
        let samples = filter_int_samples(raw, TriggerMarkers::Extended);

        let n = samples.len();
        if n < 2 {
            return Err(PhysioLogError::InsufficientSamples { count: n });
        }
        // MDH is the authoritative clock; MPCU only cross-checks it.
        let dt_ms = t_mdh / (n - 1) as f64;
        let fs = 1000.0 / dt_ms;
        info!("sampling interval: {dt_ms:.1} ms ({fs:.1} Hz)");
        info!("elapsed: MDH {t_mdh:.0} ms, MPCU {t_mpcu:.0} ms");
        info!(
            "total length of log: {n} samples, {:.2} sec",
            n as f64 / fs
        );

        let samples: Vec<f64> = samples.into_iter().map(|v| v as f64).collect();
        Ok(ParsedPhysioLog {
            trace: PhysioTrace::from_samples(samples, fs),
            header: HeaderMetadata::Prisma {
                kind,
                params,
                device,
                timing,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp_first_line() -> String {
        [
            "1 2 40 280 5002",
            "LOGVERSION_RESP",
            "uiHwRevisionPeru/ucHWRevLevel: 1",
            "uiPartNbrPeruPub: 4958",
            "uiHwRevisionPpu/ucSWSubRevLevel: 2",
            "uiPartNbrPpuPub: 7268",
            "uiSwVersionPdau/ucSWMainRevLevel: 3",
            "6002 1653 1593 5003 1545 1612 1632 6003",
        ]
        .join(" ")
    }

    fn prisma_file(first_line: &str) -> LogFile {
        LogFile::from_lines(
            "test.resp",
            vec![
                first_line.to_string(),
                "ECG  Freq Per: 0 0".to_string(),
                "LogStartMDHTime:  36632877".to_string(),
                "LogStopMDHTime:   36632957".to_string(),
                "LogStartMPCUTime: 36632047".to_string(),
                "LogStopMPCUTime:  36632128".to_string(),
                "6003".to_string(),
            ],
        )
    }

    #[test]
    fn parses_resp_log_with_empirical_rate() {
        let parsed = PrismaParser.parse(&prisma_file(&resp_first_line())).unwrap();
        // 6002/5003/6003 are markers; five signal samples remain.
        assert_eq!(
            parsed.trace.samples.to_vec(),
            vec![1653.0, 1593.0, 1545.0, 1612.0, 1632.0]
        );
        // T_mdh = 80 ms over 4 intervals -> 20 ms -> 50 Hz.
        assert!((parsed.trace.sample_rate_hz - 50.0).abs() < 1e-9);
        let t = parsed.trace.time.to_vec();
        assert_eq!(t[0], 0.0);
        assert!((t[4] - 0.08).abs() < 1e-12);

        match parsed.header {
            HeaderMetadata::Prisma {
                kind,
                params,
                device,
                timing,
            } => {
                assert_eq!(kind, LogKind::Resp);
                assert_eq!(params, [1, 2, 40, 280, 5002]);
                // Single-digit extraction: "4958" reads as 4, "7268" as 7.
                assert_eq!(device.hw_revision_peru, Some(1));
                assert_eq!(device.part_nbr_peru, Some(4));
                assert_eq!(device.hw_revision_ppu, Some(2));
                assert_eq!(device.part_nbr_ppu, Some(7));
                assert_eq!(device.sw_version_pdau, 3);
                assert_eq!(timing.mdh.elapsed_ms(), 80.0);
                assert_eq!(timing.mpcu.elapsed_ms(), 81.0);
            }
            other => panic!("expected Prisma header, got {other:?}"),
        }
    }

    #[test]
    fn puls_marker_detected() {
        let line = resp_first_line().replace("LOGVERSION_RESP", "LOGVERSION_PULS");
        let parsed = PrismaParser.parse(&prisma_file(&line)).unwrap();
        assert!(matches!(
            parsed.header,
            HeaderMetadata::Prisma {
                kind: LogKind::Puls,
                ..
            }
        ));
    }

    #[test]
    fn unknown_log_type_is_an_error_not_an_exit() {
        let line = resp_first_line().replace("LOGVERSION_RESP", "LOGVERSION_ECG1");
        let err = PrismaParser.parse(&prisma_file(&line)).unwrap_err();
        assert!(matches!(err, PhysioLogError::UnrecognizedFormat { .. }));
    }

    #[test]
    fn missing_clock_timestamp_is_fatal() {
        let mut file = prisma_file(&resp_first_line());
        let lines: Vec<String> = file
            .lines()
            .iter()
            .filter(|l| !l.contains("LogStopMPCUTime"))
            .cloned()
            .collect();
        file = LogFile::from_lines("test.resp", lines);
        let err = PrismaParser.parse(&file).unwrap_err();
        assert!(matches!(
            err,
            PhysioLogError::MissingMarker {
                label: "LogStopMPCUTime"
            }
        ));
    }

    #[test]
    fn single_surviving_sample_is_insufficient() {
        let line = [
            "1 2 40 280 5002",
            "LOGVERSION_RESP",
            "uiHwRevisionPeru/ucHWRevLevel: 1",
            "uiPartNbrPeruPub: 4",
            "uiHwRevisionPpu/ucSWSubRevLevel: 2",
            "uiPartNbrPpuPub: 7",
            "uiSwVersionPdau/ucSWMainRevLevel: 3",
            "6002 1653 5003 6003",
        ]
        .join(" ");
        let err = PrismaParser.parse(&prisma_file(&line)).unwrap_err();
        assert!(matches!(
            err,
            PhysioLogError::InsufficientSamples { count: 1 }
        ));
    }

    #[test]
    fn footer_marker_inside_sample_region_is_removed() {
        let parsed = PrismaParser.parse(&prisma_file(&resp_first_line())).unwrap();
        assert!(parsed.trace.samples.iter().all(|&v| v != 5003.0));
    }
}
