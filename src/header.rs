//! Header metadata extracted before the sample block.

/// Prisma log subtype, detected from the first line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogKind {
    Puls,
    Resp,
}

impl LogKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LogKind::Puls => "PULS",
            LogKind::Resp => "RESP",
        }
    }
}

/// One onboard clock's recording window, millisecond timestamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockWindow {
    pub start_ms: f64,
    pub stop_ms: f64,
}

impl ClockWindow {
    pub fn elapsed_ms(&self) -> f64 {
        self.stop_ms - self.start_ms
    }
}

/// The two independent timing sources of a Prisma log.
///
/// MDH is the authoritative clock for rate derivation; MPCU is kept for
/// cross-checking. The two elapsed times agree closely in well-formed
/// files but are not required to be equal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingPair {
    pub mdh: ClockWindow,
    pub mpcu: ClockWindow,
}

/// Device-identification values from the Prisma info segment.
///
/// Values come from the single-digit token extractor, so each is one digit.
/// The first four are diagnostic only; the fifth is mandatory because its
/// token position anchors the start of the sample block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    pub hw_revision_peru: Option<u32>,
    pub part_nbr_peru: Option<u32>,
    pub hw_revision_ppu: Option<u32>,
    pub part_nbr_ppu: Option<u32>,
    pub sw_version_pdau: u32,
}

/// Per-format header metadata, derived once and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub enum HeaderMetadata {
    Trio {
        sampling_rate_hz: f64,
    },
    Prisma {
        kind: LogKind,
        params: [i64; 5],
        device: DeviceInfo,
        timing: TimingPair,
    },
}
