// Mode
//------------------------------------------------------------------------------

/// Data encoding mode. The discriminant is the 4 bit mode indicator.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
}

impl Mode {
    pub const fn index(self) -> usize {
        match self {
            Self::Numeric => 0,
            Self::Alphanumeric => 1,
            Self::Byte => 2,
        }
    }

    pub const fn indicator(self) -> u16 {
        self as u16
    }

    #[inline]
    fn numeric_digit(char: u8) -> u16 {
        assert!(Mode::Numeric.contains(char), "Invalid numeric data: {char}");
        (char - b'0') as u16
    }

    #[inline]
    fn alphanumeric_digit(char: u8) -> u16 {
        assert!(Mode::Alphanumeric.contains(char), "Invalid alphanumeric data: {char}");
        match char {
            b'0'..=b'9' => (char - b'0') as u16,
            b'A'..=b'Z' => (char - b'A' + 10) as u16,
            b' ' => 36,
            b'$' => 37,
            b'%' => 38,
            b'*' => 39,
            b'+' => 40,
            b'-' => 41,
            b'.' => 42,
            b'/' => 43,
            b':' => 44,
            _ => unreachable!("Invalid alphanumeric {char}"),
        }
    }

    /// Number of characters packed together.
    pub const fn chunk_size(self) -> usize {
        match self {
            Self::Numeric => 3,
            Self::Alphanumeric => 2,
            Self::Byte => 1,
        }
    }

    pub fn encode_chunk(&self, data: &[u8]) -> u16 {
        let len = data.len();
        match self {
            Self::Numeric => {
                assert!(len <= 3, "Data is too long for numeric conversion: {len}");
                data.iter().fold(0_u16, |n, b| n * 10 + Self::numeric_digit(*b))
            }
            Self::Alphanumeric => {
                assert!(len <= 2, "Data is too long for alphanumeric conversion: {len}");
                data.iter().fold(0_u16, |n, b| n * 45 + Self::alphanumeric_digit(*b))
            }
            Self::Byte => {
                assert!(len == 1, "Data is too long for byte conversion: {len}");
                data[0] as u16
            }
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        match self {
            Self::Numeric => byte.is_ascii_digit(),
            Self::Alphanumeric => {
                byte.is_ascii_digit() || byte.is_ascii_uppercase() || b" $%*+-./:".contains(&byte)
            }
            Self::Byte => true,
        }
    }

    /// Bit length of the payload for `len` characters, excluding header.
    pub fn encoded_len(&self, len: usize) -> usize {
        match *self {
            Self::Numeric => (len * 10).div_ceil(3),
            Self::Alphanumeric => (len * 11).div_ceil(2),
            Self::Byte => len * 8,
        }
    }
}
