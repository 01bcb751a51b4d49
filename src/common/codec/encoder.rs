pub use analyze::*;
pub use encode::*;

// Analyzer
//------------------------------------------------------------------------------

pub mod analyze {
    use tracing::debug;

    use crate::common::codec::Mode;
    use crate::common::error::{QRError, QRResult};
    use crate::common::metadata::{ECLevel, Version};

    /// Most restrictive mode whose charset covers every byte of the data.
    pub fn choose_mode(data: &[u8]) -> Mode {
        if data.iter().all(|&b| Mode::Numeric.contains(b)) {
            Mode::Numeric
        } else if data.iter().all(|&b| Mode::Alphanumeric.contains(b)) {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }

    fn fits(mode: Mode, ver: Version, ecl: ECLevel, len: usize) -> bool {
        len <= ver.max_char_count(mode, ecl)
    }

    /// Smallest version holding `len` characters of the mode at the level.
    pub fn choose_version(mode: Mode, ecl: ECLevel, len: usize) -> QRResult<Version> {
        Version::all().find(|&v| fits(mode, v, ecl, len)).ok_or(QRError::CapacityExceeded)
    }

    /// Strongest level reachable from `ecl` without outgrowing the version.
    pub fn raise_ec_level(mode: Mode, ver: Version, mut ecl: ECLevel, len: usize) -> ECLevel {
        while let Some(next) = ecl.raise() {
            if !fits(mode, ver, next, len) {
                break;
            }
            ecl = next;
        }
        ecl
    }

    /// Picks mode, version and level for the data. Forced values skip their own selection but
    /// must still hold the data.
    pub fn analyze(
        data: &[u8],
        ecl: Option<ECLevel>,
        ver: Option<Version>,
    ) -> QRResult<(Mode, Version, ECLevel)> {
        if data.is_empty() {
            return Err(QRError::EmptyData);
        }

        let mode = choose_mode(data);
        let len = data.len();

        let (ver, ecl) = match (ver, ecl) {
            (Some(v), Some(l)) => {
                if !fits(mode, v, l, len) {
                    return Err(QRError::CapacityExceeded);
                }
                (v, l)
            }
            (Some(v), None) => {
                if !fits(mode, v, ECLevel::L, len) {
                    return Err(QRError::CapacityExceeded);
                }
                (v, raise_ec_level(mode, v, ECLevel::L, len))
            }
            (None, Some(l)) => (choose_version(mode, l, len)?, l),
            (None, None) => {
                let v = choose_version(mode, ECLevel::L, len)?;
                (v, raise_ec_level(mode, v, ECLevel::L, len))
            }
        };

        debug!("Analyzed {len} bytes: mode {mode:?}, version {ver}, ec level {ecl:?}");
        Ok((mode, ver, ecl))
    }

}

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use tracing::debug;

    use crate::common::bitstream::BitStream;
    use crate::common::codec::Mode;
    use crate::common::metadata::{ECLevel, Version};

    use super::writer::{pad_remaining_capacity, push_data, push_header, push_terminator};

    /// Serializes the data into exactly the data codeword capacity of the version and level.
    /// The caller is expected to have checked the fit with the analyzer.
    pub fn encode(data: &[u8], mode: Mode, ver: Version, ecl: ECLevel) -> BitStream {
        let bcap = ver.data_bit_capacity(ecl);
        let mut bs = BitStream::new(bcap);

        push_header(mode, data.len(), ver.char_cnt_bits(mode), &mut bs);
        push_data(mode, data, &mut bs);
        let payload_len = bs.len();

        push_terminator(&mut bs);
        pad_remaining_capacity(&mut bs);

        assert_eq!(
            bs.len(),
            bcap,
            "Bit budget mismatch after padding: Version {ver}, Ec level {ecl:?}"
        );
        debug!("Encoded {payload_len} payload bits into {bcap} bit data region");
        bs
    }

    #[cfg(test)]
    mod encode_tests {
        use proptest::prelude::*;
        use test_case::test_case;

        use super::encode;
        use crate::common::codec::{analyze, Mode};
        use crate::common::metadata::{ECLevel, Version};

        #[test]
        fn test_encode_alphanumeric() {
            let ver = Version::new(1).unwrap();
            let bs = encode(b"HELLO WORLD", Mode::Alphanumeric, ver, ECLevel::M);
            assert_eq!(bs.data(), b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11");
        }

        #[test]
        fn test_encode_numeric() {
            let ver = Version::new(1).unwrap();
            let bs = encode(b"01234567", Mode::Numeric, ver, ECLevel::M);
            let mut exp =
                vec![0b00010000, 0b00100000, 0b00001100, 0b01010110, 0b01100001, 0b10000000];
            exp.extend([0xEC, 0x11].iter().cycle().take(10));
            assert_eq!(bs.data(), exp);
        }

        #[test]
        fn test_encode_numeric_mode_indicator() {
            let ver = Version::new(1).unwrap();
            let bs = encode(b"12345678", Mode::Numeric, ver, ECLevel::H);
            let head = bs.bits().take(4).collect::<Vec<_>>();
            assert_eq!(head, [false, false, false, true]);
        }

        #[test_case("a".repeat(17), 1, ECLevel::L)]
        #[test_case("ABC".repeat(3), 1, ECLevel::H)]
        #[test_case("1".repeat(41), 1, ECLevel::L)]
        #[test_case("a".repeat(2953), 40, ECLevel::L)]
        #[test_case("1234567890".repeat(305), 40, ECLevel::H)]
        fn test_encode_full_capacity(data: String, ver: usize, ecl: ECLevel) {
            let ver = Version::new(ver).unwrap();
            let (mode, _, _) = analyze(data.as_bytes(), Some(ecl), Some(ver)).unwrap();
            let bs = encode(data.as_bytes(), mode, ver, ecl);
            assert_eq!(bs.len(), ver.data_bit_capacity(ecl));
        }

        proptest! {
            #[test]
            fn proptest_bit_budget(data in prop::collection::vec(any::<u8>(), 1..400)) {
                let (mode, ver, ecl) = analyze(&data, None, None).unwrap();
                let bs = encode(&data, mode, ver, ecl);
                prop_assert_eq!(bs.len(), ver.data_codewords(ecl) * 8);
            }

            #[test]
            fn proptest_numeric_bit_budget(data in "[0-9]{1,1000}") {
                let (mode, ver, ecl) = analyze(data.as_bytes(), None, None).unwrap();
                prop_assert_eq!(mode, Mode::Numeric);
                let bs = encode(data.as_bytes(), mode, ver, ecl);
                prop_assert_eq!(bs.len(), ver.data_codewords(ecl) * 8);
            }
        }
    }
}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::common::bitstream::BitStream;
    use crate::common::codec::Mode;

    pub const PADDING_CODEWORDS: [u16; 2] = [0xEC, 0x11];

    pub fn push_header(mode: Mode, char_cnt: usize, len_bits: usize, out: &mut BitStream) {
        out.push_bits(mode.indicator(), 4);
        assert!(
            char_cnt < (1 << len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {len_bits}"
        );
        out.push_bits(char_cnt as u16, len_bits);
    }

    pub fn push_data(mode: Mode, data: &[u8], out: &mut BitStream) {
        match mode {
            Mode::Numeric => push_numeric_data(data, out),
            Mode::Alphanumeric => push_alphanumeric_data(data, out),
            Mode::Byte => push_byte_data(data, out),
        }
    }

    fn push_chunks(mode: Mode, data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(mode.chunk_size()) {
            out.push_bits(mode.encode_chunk(chunk), mode.encoded_len(chunk.len()));
        }
    }

    fn push_numeric_data(data: &[u8], out: &mut BitStream) {
        push_chunks(Mode::Numeric, data, out);
    }

    fn push_alphanumeric_data(data: &[u8], out: &mut BitStream) {
        push_chunks(Mode::Alphanumeric, data, out);
    }

    fn push_byte_data(data: &[u8], out: &mut BitStream) {
        push_chunks(Mode::Byte, data, out);
    }

    pub fn push_terminator(out: &mut BitStream) {
        let bit_len = out.len();
        let bit_capacity = out.capacity();
        if bit_len < bit_capacity {
            let term_len = std::cmp::min(4, bit_capacity - bit_len);
            out.push_bits(0, term_len);
        }
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        push_padding_bits(out);
        push_padding_codewords(out);
    }

    fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0, padding_bits_len);
        }
    }

    fn push_padding_codewords(out: &mut BitStream) {
        let offset = out.len() & 7;
        assert!(
            offset == 0,
            "Bit offset should be zero before padding codewords: {}",
            offset
        );

        let remain_byte_capacity = (out.capacity() - out.len()) >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

}
