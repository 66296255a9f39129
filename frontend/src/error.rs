use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MotionError {
    #[error("visibility threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
}

/// Reasons a section could not get a viewport observer. All of them end in
/// the section being shown immediately.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    #[error("no window object available")]
    NoWindow,
    #[error("IntersectionObserver is not supported in this environment")]
    Unsupported,
    #[error("failed to construct IntersectionObserver: {0}")]
    Construct(String),
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("embedded site content is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
