use std::path::Path;

use crate::error::PhysioLogError;
use crate::header::HeaderMetadata;
use crate::logfile::LogFile;
use crate::trace::PhysioTrace;

/// Everything a parse yields: the reconstructed trace plus the header
/// metadata reported alongside it.
#[derive(Clone, Debug)]
pub struct ParsedPhysioLog {
    pub trace: PhysioTrace,
    pub header: HeaderMetadata,
}

/// Format strategy shared by the Trio and Prisma pipelines.
///
/// Each implementation runs the same sequential stages (detect format,
/// parse header, parse samples, derive rate, build time axis); the rate
/// derivation is where the formats genuinely differ. Any stage failure
/// aborts the call and surfaces to the caller; parses are independent of
/// each other.
pub trait PhysioParser {
    fn format_name(&self) -> &'static str;

    fn parse(&self, file: &LogFile) -> Result<ParsedPhysioLog, PhysioLogError>;

    fn parse_path(&self, path: impl AsRef<Path>) -> Result<ParsedPhysioLog, PhysioLogError>
    where
        Self: Sized,
    {
        let file = LogFile::read(path)?;
        self.parse(&file)
    }
}
