use std::fmt::{Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Input
    EmptyData,
    CapacityExceeded,

    // Overrides
    InvalidVersion,
    InvalidECLevel,
    InvalidMaskingPattern,

    // Rendering
    InvalidOutputFormat,
}

impl QRError {
    /// Whether the error comes from an out of range level, version or mask override.
    pub fn is_invalid_override(&self) -> bool {
        matches!(self, Self::InvalidVersion | Self::InvalidECLevel | Self::InvalidMaskingPattern)
    }
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            Self::EmptyData => "Empty data",
            Self::CapacityExceeded => "Data too long to fit in the QR symbol",
            Self::InvalidVersion => "Invalid version, expected a number from 1 to 40",
            Self::InvalidECLevel => {
                "Invalid error correction level, expected a number from 0 (Low) to 3 (High)"
            }
            Self::InvalidMaskingPattern => "Invalid masking pattern, expected a number from 0 to 7",
            Self::InvalidOutputFormat => {
                "Invalid output format, expected one of: ANSI, ASCII, UTF8, UTF8Q"
            }
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;

#[cfg(test)]
mod error_tests {
    use super::QRError;

    #[test]
    fn test_invalid_override() {
        assert!(QRError::InvalidVersion.is_invalid_override());
        assert!(QRError::InvalidECLevel.is_invalid_override());
        assert!(QRError::InvalidMaskingPattern.is_invalid_override());
        assert!(!QRError::CapacityExceeded.is_invalid_override());
        assert!(!QRError::EmptyData.is_invalid_override());
    }

    #[test]
    fn test_display() {
        assert_eq!(QRError::EmptyData.to_string(), "Empty data");
        assert_eq!(
            QRError::CapacityExceeded.to_string(),
            "Data too long to fit in the QR symbol"
        );
    }
}
