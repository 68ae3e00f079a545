//! Reader for the physiological monitoring logs written by Siemens Trio and
//! Prisma scanners. Parses a log file into a marker-filtered signal trace
//! with a uniform time axis, optionally rendered as a PNG.

pub mod error;
pub mod header;
pub mod logfile;
pub mod markers;
pub mod parse;
pub mod plot;
pub mod prisma;
pub mod search;
pub mod trace;
pub mod trio;

pub use error::PhysioLogError;
pub use header::{ClockWindow, DeviceInfo, HeaderMetadata, LogKind, TimingPair};
pub use logfile::LogFile;
pub use markers::TriggerMarkers;
pub use parse::{ParsedPhysioLog, PhysioParser};
pub use plot::{render_trace_png, save_trace_png, PlotStyle};
pub use prisma::PrismaParser;
pub use trace::PhysioTrace;
pub use trio::TrioParser;
