use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShowcaseError {
    #[error("phase index {index} out of range (timeline has {len} phases)")]
    PhaseOutOfRange { index: usize, len: usize },
}
