use std::fmt::{Display, Formatter};
use std::ops::{Deref, Not};

use super::codec::Mode;
use super::error::{QRError, QRResult};
use super::mask::MaskPattern;
use super::tables::{
    ALIGNMENT_PATTERN_POSITIONS, CHAR_COUNT_BITS, CONTENT_MODULES, ECC_PER_BLOCK, EC_BLOCK_COUNT,
    MAX_CHAR_COUNT, VERSION_COUNT, VERSION_INFOS,
};

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<bool> for Color {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

// Version
//------------------------------------------------------------------------------

pub const MIN_VERSION: usize = 1;

pub const MAX_VERSION: usize = VERSION_COUNT;

/// Symbol size class, from 1 (21x21 modules) to 40 (177x177 modules).
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(usize);

impl Version {
    pub fn new(version: usize) -> QRResult<Self> {
        if !(MIN_VERSION..=MAX_VERSION).contains(&version) {
            return Err(QRError::InvalidVersion);
        }
        Ok(Self(version))
    }

    pub fn all() -> impl Iterator<Item = Version> {
        (MIN_VERSION..=MAX_VERSION).map(Self)
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    // Zero based position in the reference tables
    pub const fn index(self) -> usize {
        self.0 - 1
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS[self.index()]
    }

    pub fn info(self) -> u32 {
        assert!(self.0 >= 7, "Version info only exists from version 7: {}", self.0);
        VERSION_INFOS[self.index()]
    }

    pub fn has_version_info(self) -> bool {
        self.0 >= 7
    }

    pub fn total_codewords(self) -> usize {
        CONTENT_MODULES[self.index()] >> 3
    }

    pub fn remainder_bits(self) -> usize {
        CONTENT_MODULES[self.index()] & 7
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        CHAR_COUNT_BITS[mode.index()][self.index()]
    }

    pub fn max_char_count(self, mode: Mode, ecl: ECLevel) -> usize {
        MAX_CHAR_COUNT[mode.index()][ecl.index()][self.index()]
    }

    pub fn block_count(self, ecl: ECLevel) -> usize {
        EC_BLOCK_COUNT[ecl.index()][self.index()]
    }

    pub fn ecc_per_block(self, ecl: ECLevel) -> usize {
        ECC_PER_BLOCK[ecl.index()][self.index()]
    }

    pub fn data_codewords(self, ecl: ECLevel) -> usize {
        self.total_codewords() - self.block_count(ecl) * self.ecc_per_block(ecl)
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.data_codewords(ecl) << 3
    }

    /// Block split for the level: `(block_count, short_block_len, short_block_count, ecc_per_block)`.
    /// Blocks past the first `short_block_count` are one data codeword longer.
    pub fn block_layout(self, ecl: ECLevel) -> (usize, usize, usize, usize) {
        let total = self.total_codewords();
        let count = self.block_count(ecl);
        let short_count = count - total % count;
        (count, total / count, short_count, self.ecc_per_block(ecl))
    }
}

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Next stronger level, if any.
    pub fn raise(self) -> Option<Self> {
        match self {
            Self::L => Some(Self::M),
            Self::M => Some(Self::Q),
            Self::Q => Some(Self::H),
            Self::H => None,
        }
    }
}

impl TryFrom<u8> for ECLevel {
    type Error = QRError;
    fn try_from(level: u8) -> QRResult<Self> {
        match level {
            0 => Ok(Self::L),
            1 => Ok(Self::M),
            2 => Ok(Self::Q),
            3 => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel),
        }
    }
}

// Metadata
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Metadata {
    version: Version,
    ec_level: ECLevel,
    mode: Mode,
    mask: Option<MaskPattern>,
}

impl Metadata {
    pub fn new(version: Version, ec_level: ECLevel, mode: Mode, mask: Option<MaskPattern>) -> Self {
        Self { version, ec_level, mode, mask }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ Version: {}, Ec level: {:?}, Mode: {:?}, Mask: ",
            self.version, self.ec_level, self.mode
        )?;
        match self.mask {
            Some(m) => write!(f, "{} }}", *m),
            None => write!(f, "None }}"),
        }
    }
}

#[cfg(test)]
mod metadata_tests {
    use test_case::test_case;

    use super::{Color, ECLevel, Metadata, Version};
    use crate::common::codec::Mode;
    use crate::common::error::QRError;
    use crate::common::mask::MaskPattern;

    #[test]
    fn test_version_bounds() {
        assert_eq!(Version::new(0), Err(QRError::InvalidVersion));
        assert_eq!(Version::new(41), Err(QRError::InvalidVersion));
        assert_eq!(*Version::new(1).unwrap(), 1);
        assert_eq!(*Version::new(40).unwrap(), 40);
        assert_eq!(Version::all().count(), 40);
    }

    #[test_case(1, 21)]
    #[test_case(2, 25)]
    #[test_case(7, 45)]
    #[test_case(40, 177)]
    fn test_width(v: usize, w: usize) {
        let ver = Version::new(v).unwrap();
        assert_eq!(ver.width(), w);
        assert_eq!(ver.width(), 4 * ver.index() + 21);
    }

    #[test_case(1, ECLevel::L, 19)]
    #[test_case(1, ECLevel::M, 16)]
    #[test_case(1, ECLevel::H, 9)]
    #[test_case(5, ECLevel::Q, 62)]
    #[test_case(40, ECLevel::L, 2956)]
    #[test_case(40, ECLevel::H, 1276)]
    fn test_data_codewords(v: usize, ecl: ECLevel, exp: usize) {
        assert_eq!(Version::new(v).unwrap().data_codewords(ecl), exp);
    }

    #[test_case(1, 26, 0)]
    #[test_case(2, 44, 7)]
    #[test_case(14, 581, 3)]
    #[test_case(21, 1156, 4)]
    #[test_case(40, 3706, 0)]
    fn test_total_codewords(v: usize, total: usize, remainder: usize) {
        let ver = Version::new(v).unwrap();
        assert_eq!(ver.total_codewords(), total);
        assert_eq!(ver.remainder_bits(), remainder);
    }

    #[test]
    fn test_block_layout_covers_all_codewords() {
        for ver in Version::all() {
            for ecl in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
                let (count, short_len, short_count, ecc_len) = ver.block_layout(ecl);
                let long_count = count - short_count;
                let data =
                    short_count * (short_len - ecc_len) + long_count * (short_len + 1 - ecc_len);
                assert_eq!(data, ver.data_codewords(ecl), "Version {ver}, level {ecl:?}");
                assert_eq!(data + count * ecc_len, ver.total_codewords());
                assert!(short_len + 1 <= 153, "Block too long for version {ver}, level {ecl:?}");
            }
        }
    }

    #[test]
    fn test_block_layout() {
        let ver = Version::new(5).unwrap();
        assert_eq!(ver.block_layout(ECLevel::Q), (4, 33, 2, 18));
        let ver = Version::new(1).unwrap();
        assert_eq!(ver.block_layout(ECLevel::M), (1, 26, 1, 10));
    }

    #[test]
    fn test_char_cnt_bits() {
        let v9 = Version::new(9).unwrap();
        let v10 = Version::new(10).unwrap();
        let v27 = Version::new(27).unwrap();
        assert_eq!(v9.char_cnt_bits(Mode::Numeric), 10);
        assert_eq!(v10.char_cnt_bits(Mode::Numeric), 12);
        assert_eq!(v27.char_cnt_bits(Mode::Numeric), 14);
        assert_eq!(v9.char_cnt_bits(Mode::Alphanumeric), 9);
        assert_eq!(v27.char_cnt_bits(Mode::Alphanumeric), 13);
        assert_eq!(v9.char_cnt_bits(Mode::Byte), 8);
        assert_eq!(v10.char_cnt_bits(Mode::Byte), 16);
    }

    #[test]
    fn test_ec_level_from_u8() {
        assert_eq!(ECLevel::try_from(0), Ok(ECLevel::L));
        assert_eq!(ECLevel::try_from(3), Ok(ECLevel::H));
        assert_eq!(ECLevel::try_from(4), Err(QRError::InvalidECLevel));
    }

    #[test]
    fn test_ec_level_raise() {
        assert_eq!(ECLevel::L.raise(), Some(ECLevel::M));
        assert_eq!(ECLevel::Q.raise(), Some(ECLevel::H));
        assert_eq!(ECLevel::H.raise(), None);
    }

    #[test]
    fn test_color() {
        assert_eq!(!Color::Dark, Color::Light);
        assert_eq!(Color::from(true), Color::Dark);
        assert_eq!(Color::Light.select('.', '#'), '.');
    }

    #[test]
    fn test_metadata_display() {
        let ver = Version::new(3).unwrap();
        let meta = Metadata::new(ver, ECLevel::Q, Mode::Byte, None);
        assert_eq!(meta.to_string(), "{ Version: 3, Ec level: Q, Mode: Byte, Mask: None }");
        let mask = MaskPattern::new(5).unwrap();
        let meta = Metadata::new(ver, ECLevel::L, Mode::Numeric, Some(mask));
        assert_eq!(meta.to_string(), "{ Version: 3, Ec level: L, Mode: Numeric, Mask: 5 }");
    }
}
