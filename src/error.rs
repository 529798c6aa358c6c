use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors reported by the layout engine.
///
/// Every variant is a deterministic validation failure: the same input always
/// produces the same error, so nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("house cusps must contain exactly 12 entries, got {len}")]
    InvalidCuspCount { len: usize },

    #[error("house number must be in 1..=12, got {house}")]
    HouseOutOfRange { house: u8 },

    #[error("sign index must be in 0..=11, got {index}")]
    SignIndexOutOfRange { index: u8 },

    #[error("sign number must be in 1..=12, got {number}")]
    SignNumberOutOfRange { number: u8 },

    #[error("chart cell must be in 1..=12, got {cell}")]
    CellOutOfRange { cell: u8 },

    #[error("invalid longitude for `{field}`: {value} (expected finite degrees in [0, 360])")]
    InvalidLongitude { field: String, value: f64 },

    #[error("body `{name}` is missing {needed}")]
    MissingPosition { name: String, needed: &'static str },

    #[error("body `{name}` is tagged {found} but was supplied in the {expected} list")]
    OriginMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl LayoutError {
    /// All engine failures are validation failures.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCuspCount { .. }
                | Self::HouseOutOfRange { .. }
                | Self::SignIndexOutOfRange { .. }
                | Self::SignNumberOutOfRange { .. }
                | Self::CellOutOfRange { .. }
                | Self::InvalidLongitude { .. }
                | Self::MissingPosition { .. }
                | Self::OriginMismatch { .. }
                | Self::InvalidData(_)
        )
    }
}
