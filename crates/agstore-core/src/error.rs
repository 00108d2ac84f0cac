use thiserror::Error;

pub type Result<T> = std::result::Result<T, CarouselError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide {index} is out of range ({len} slides)")]
    OutOfRange { index: usize, len: usize },
}
