use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhysioLogError {
    #[error("failed to read log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("required marker {label:?} not found in log")]
    MissingMarker { label: &'static str },
    #[error("cannot parse {token:?} as a number ({context})")]
    MalformedNumeric { token: String, context: &'static str },
    #[error("first line carries neither LOGVERSION_PULS nor LOGVERSION_RESP: {first_line:?}")]
    UnrecognizedFormat { first_line: String },
    #[error("{count} sample(s) left after trigger filtering; need at least 2 to derive a rate")]
    InsufficientSamples { count: usize },
    #[error("failed to render plot: {0}")]
    Plot(String),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for PhysioLogError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        PhysioLogError::Plot(format!("{value:?}"))
    }
}

impl From<image::ImageError> for PhysioLogError {
    fn from(value: image::ImageError) -> Self {
        PhysioLogError::Plot(value.to_string())
    }
}
