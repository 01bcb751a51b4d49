use std::ops::Deref;

use tracing::debug;

use crate::common::codec::Mode;
use crate::common::iter::EncRegionIter;
use crate::common::mask::MaskPattern;
use crate::common::metadata::{Color, ECLevel, Metadata, Version};
use crate::common::tables::FORMAT_INFOS;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Version(Color),
    Format(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Version(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

impl Module {
    /// Fixed by the symbol layout and never touched by masking.
    pub fn is_functional(&self) -> bool {
        matches!(self, Module::Func(_) | Module::Version(_) | Module::Format(_))
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Module::Data(_))
    }
}

// Construction phases, each entered once and in this order
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Phase {
    Empty,
    FunctionalPatternsPlaced,
    ModulesReserved,
    DataPlaced,
    Masked,
    FormatVersionWritten,
}

/// A QR Code symbol: a square grid of modules together with the parameters it was built with.
#[derive(Debug, Clone)]
pub struct QR {
    grid: Box<[Module]>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mode: Mode,
    mask: Option<MaskPattern>,
    phase: Phase,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn new(ver: Version, ecl: ECLevel, mode: Mode) -> Self {
        let w = ver.width();
        let grid = vec![Module::Empty; w * w].into_boxed_slice();
        Self { grid, w, ver, ecl, mode, mask: None, phase: Phase::Empty }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn metadata(&self) -> Metadata {
        Metadata::new(self.ver, self.ecl, self.mode, self.mask)
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    #[cfg(test)]
    pub(crate) fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Version(Color::Dark) => 'v',
                    Module::Version(Color::Light) => 'V',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    // Negative coordinates count back from the far edge
    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        assert!(-w <= r && r < w, "Row out of bounds: {r}");
        assert!(-w <= c && c < w, "Column out of bounds: {c}");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn color(&self, r: i16, c: i16) -> Color {
        *self.get(r, c)
    }

    pub fn is_dark(&self, r: i16, c: i16) -> bool {
        self.color(r, c) == Color::Dark
    }

    fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }

    fn advance(&mut self, from: Phase, to: Phase) {
        assert_eq!(self.phase, from, "Out of order symbol construction, expected {from:?}");
        debug!("Symbol phase {:?} -> {:?}", from, to);
        self.phase = to;
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Includes the light separator on the inner sides
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Func(Color::Light),
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod finder_pattern_tests {
    use crate::builder::QR;
    use crate::common::codec::Mode;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_finder_pattern_qr() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L, Mode::Byte);
        qr.draw_finder_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.....Ffffffff\n\
             fFFFFFfF.....FfFFFFFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFFFFFfF.....FfFFFFFf\n\
             fffffffF.....Ffffffff\n\
             FFFFFFFF.....FFFFFFFF\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             FFFFFFFF.............\n\
             fffffffF.............\n\
             fFFFFFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFFFFFfF.............\n\
             fffffffF.............\n"
        );
    }
}

// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let w = self.w as i16;
        self.draw_line(6, 8, 6, w - 9);
        self.draw_line(8, 6, w - 9, 6);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                self.set(r1, j, Module::Func(Color::from(j & 1 == 0)));
            }
        } else {
            for i in r1..=r2 {
                self.set(i, c1, Module::Func(Color::from(i & 1 == 0)));
            }
        }
    }
}

#[cfg(test)]
mod timing_pattern_tests {
    use crate::builder::QR;
    use crate::common::codec::Mode;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_timing_pattern_1() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L, Mode::Byte);
        qr.draw_timing_pattern();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........fFfFf........\n\
             .....................\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n"
        );
    }
}

// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)
            }
        }
    }

    // Skipped where any corner is taken, i.e. over the finder patterns
    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        let corners = [(r - 2, c - 2), (r - 2, c + 2), (r + 2, c - 2), (r + 2, c + 2)];
        if corners.iter().any(|&(i, j)| self.get(i, j) != Module::Empty) {
            return;
        }
        for i in -2..=2 {
            for j in -2..=2 {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (-2 | 2, _) | (_, -2 | 2) | (0, 0) => Module::Func(Color::Dark),
                        _ => Module::Func(Color::Light),
                    },
                )
            }
        }
    }
}

#[cfg(test)]
mod alignment_pattern_tests {
    use crate::builder::QR;
    use crate::common::codec::Mode;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_alignment_pattern_1() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L, Mode::Byte);
        qr.draw_finder_patterns();
        let before = qr.to_debug_str();
        qr.draw_alignment_patterns();
        assert_eq!(qr.to_debug_str(), before);
    }

    #[test]
    fn test_alignment_pattern_3() {
        let mut qr = QR::new(Version::new(3).unwrap(), ECLevel::L, Mode::Byte);
        qr.draw_finder_patterns();
        qr.draw_alignment_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.............Ffffffff\n\
             fFFFFFfF.............FfFFFFFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFFFFFfF.............FfFFFFFf\n\
             fffffffF.............Ffffffff\n\
             FFFFFFFF.............FFFFFFFF\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             ....................fffff....\n\
             FFFFFFFF............fFFFf....\n\
             fffffffF............fFfFf....\n\
             fFFFFFfF............fFFFf....\n\
             fFfffFfF............fffff....\n\
             fFfffFfF.....................\n\
             fFfffFfF.....................\n\
             fFFFFFfF.....................\n\
             fffffffF.....................\n"
        );
    }

    #[test]
    fn test_alignment_pattern_7() {
        let mut qr = QR::new(Version::new(7).unwrap(), ECLevel::L, Mode::Byte);
        qr.draw_finder_patterns();
        qr.draw_alignment_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.............................Ffffffff\n\
             fFFFFFfF.............................FfFFFFFf\n\
             fFfffFfF.............................FfFfffFf\n\
             fFfffFfF.............................FfFfffFf\n\
             fFfffFfF............fffff............FfFfffFf\n\
             fFFFFFfF............fFFFf............FfFFFFFf\n\
             fffffffF............fFfFf............Ffffffff\n\
             FFFFFFFF............fFFFf............FFFFFFFF\n\
             ....................fffff....................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             ....fffff...........fffff...........fffff....\n\
             ....fFFFf...........fFFFf...........fFFFf....\n\
             ....fFfFf...........fFfFf...........fFfFf....\n\
             ....fFFFf...........fFFFf...........fFFFf....\n\
             ....fffff...........fffff...........fffff....\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             ....................fffff...........fffff....\n\
             FFFFFFFF............fFFFf...........fFFFf....\n\
             fffffffF............fFfFf...........fFfFf....\n\
             fFFFFFfF............fFFFf...........fFFFf....\n\
             fFfffFfF............fffff...........fffff....\n\
             fFfffFfF.....................................\n\
             fFfffFfF.....................................\n\
             fFFFFFfF.....................................\n\
             fffffffF.....................................\n"
        );
    }
}

// All function patterns
//------------------------------------------------------------------------------

impl QR {
    /// Finder patterns with separators, alignment patterns, timing patterns and the dark module.
    pub(crate) fn draw_function_patterns(&mut self) {
        self.advance(Phase::Empty, Phase::FunctionalPatternsPlaced);
        self.draw_finder_patterns();
        self.draw_alignment_patterns();
        self.draw_timing_pattern();
        self.draw_dark_module();
    }

    // Sits at row 4 * version + 9, right above the bottom left separator
    fn draw_dark_module(&mut self) {
        self.set(-8, 8, Module::Func(Color::Dark));
    }
}

#[cfg(test)]
mod all_function_patterns_test {
    use crate::builder::{Module, QR};
    use crate::common::codec::Mode;
    use crate::common::metadata::{Color, ECLevel, Version};

    #[test]
    fn test_all_function_patterns() {
        let mut qr = QR::new(Version::new(3).unwrap(), ECLevel::L, Mode::Byte);
        qr.draw_function_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.............Ffffffff\n\
             fFFFFFfF.............FfFFFFFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFFFFFfF.............FfFFFFFf\n\
             fffffffFfFfFfFfFfFfFfFfffffff\n\
             FFFFFFFF.............FFFFFFFF\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f.............fffff....\n\
             FFFFFFFFf...........fFFFf....\n\
             fffffffF............fFfFf....\n\
             fFFFFFfF............fFFFf....\n\
             fFfffFfF............fffff....\n\
             fFfffFfF.....................\n\
             fFfffFfF.....................\n\
             fFFFFFfF.....................\n\
             fffffffF.....................\n"
        );
    }

    #[test]
    fn test_dark_module_position() {
        for ver in Version::all() {
            let mut qr = QR::new(ver, ECLevel::L, Mode::Byte);
            qr.draw_function_patterns();
            let r = 4 * ver.index() as i16 + 13;
            assert_eq!(qr.get(r, 8), Module::Func(Color::Dark), "Version {ver}");
        }
    }
}

// Format & version info
//------------------------------------------------------------------------------

// Bit i of the format info, least significant first, goes to the i-th coordinate of each list
static FORMAT_INFO_COORDS_MAIN: [(i16, i16); 15] = [
    (0, 8),
    (1, 8),
    (2, 8),
    (3, 8),
    (4, 8),
    (5, 8),
    (7, 8),
    (8, 8),
    (8, 7),
    (8, 5),
    (8, 4),
    (8, 3),
    (8, 2),
    (8, 1),
    (8, 0),
];

static FORMAT_INFO_COORDS_SIDE: [(i16, i16); 15] = [
    (8, -1),
    (8, -2),
    (8, -3),
    (8, -4),
    (8, -5),
    (8, -6),
    (8, -7),
    (8, -8),
    (-7, 8),
    (-6, 8),
    (-5, 8),
    (-4, 8),
    (-3, 8),
    (-2, 8),
    (-1, 8),
];

const FORMAT_INFO_BIT_LEN: usize = 15;

const VERSION_INFO_BIT_LEN: usize = 18;

impl QR {
    /// Marks the format strips and, from version 7, the version blocks so data placement skips
    /// them. Both are overwritten with real bits once the mask is known.
    pub(crate) fn reserve_info_areas(&mut self) {
        self.advance(Phase::FunctionalPatternsPlaced, Phase::ModulesReserved);
        for &(r, c) in FORMAT_INFO_COORDS_MAIN.iter().chain(FORMAT_INFO_COORDS_SIDE.iter()) {
            self.set(r, c, Module::Format(Color::Dark));
        }
        if self.ver.has_version_info() {
            self.draw_version_number((1 << VERSION_INFO_BIT_LEN) - 1);
        }
    }

    pub(crate) fn draw_format_info(&mut self, mask: MaskPattern) {
        assert!(
            matches!(self.phase, Phase::DataPlaced | Phase::Masked),
            "Format info is written after data placement"
        );
        let format_info = FORMAT_INFOS[self.ecl.index()][*mask as usize];
        for coords in [&FORMAT_INFO_COORDS_MAIN, &FORMAT_INFO_COORDS_SIDE] {
            self.draw_number(
                format_info,
                FORMAT_INFO_BIT_LEN,
                Module::Format(Color::Light),
                Module::Format(Color::Dark),
                coords,
            );
        }
    }

    fn draw_version_info(&mut self) {
        if self.ver.has_version_info() {
            self.draw_version_number(self.ver.info());
        }
    }

    // Bit k sits in the 6x3 block above the bottom left finder and its transpose
    fn draw_version_number(&mut self, ver_info: u32) {
        let w = self.w as i16;
        for k in 0..VERSION_INFO_BIT_LEN as i16 {
            let module = Module::Version(Color::from(ver_info >> k & 1 == 1));
            let (a, b) = (k / 3, w - 11 + k % 3);
            self.set(a, b, module);
            self.set(b, a, module);
        }
    }

    fn draw_number(
        &mut self,
        number: u32,
        bit_len: usize,
        off_clr: Module,
        on_clr: Module,
        coords: &[(i16, i16)],
    ) {
        assert_eq!(bit_len, coords.len(), "Coordinate count doesn't match bit length");
        for (i, &(r, c)) in coords.iter().enumerate() {
            let module = if number >> i & 1 == 0 { off_clr } else { on_clr };
            self.set(r, c, module);
        }
    }

    /// Writes the final format info for the committed mask and the version info.
    pub(crate) fn draw_format_and_version_info(&mut self) {
        let Some(mask) = self.mask else {
            unreachable!("Masked symbol without a mask");
        };
        self.draw_format_info(mask);
        self.draw_version_info();
        self.advance(Phase::Masked, Phase::FormatVersionWritten);
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    /// Places the codewords, most significant bit first, along the zig-zag path. Modules left
    /// after the last codeword become light remainder bits.
    pub(crate) fn draw_payload(&mut self, codewords: &[u8]) {
        self.advance(Phase::ModulesReserved, Phase::DataPlaced);

        let mut bits = codewords.iter().flat_map(|&b| (0..8).rev().map(move |i| b >> i & 1 == 1));
        let mut placed = 0;
        for (r, c) in EncRegionIter::new(self.ver) {
            if self.get(r, c) != Module::Empty {
                continue;
            }
            let clr = match bits.next() {
                Some(bit) => {
                    placed += 1;
                    Color::from(bit)
                }
                None => Color::Light,
            };
            self.set(r, c, Module::Data(clr));
        }

        assert_eq!(placed, codewords.len() * 8, "Codewords overflow the encoding region");
        assert!(!self.grid.contains(&Module::Empty), "Empty module left after data placement");
    }

    /// Flips every data module selected by the mask. Applying the same mask twice restores the
    /// symbol.
    pub(crate) fn apply_mask(&mut self, pattern: MaskPattern) {
        assert!(
            matches!(self.phase, Phase::DataPlaced),
            "Masks only apply to a placed but unmasked symbol"
        );
        let mask_fn = pattern.mask_functions();
        let w = self.w as i16;
        for r in 0..w {
            for c in 0..w {
                if mask_fn(r, c) {
                    if let Module::Data(clr) = self.get(r, c) {
                        self.set(r, c, Module::Data(!clr))
                    }
                }
            }
        }
    }

    /// Commits the mask. Later masking is rejected.
    pub(crate) fn commit_mask(&mut self, pattern: MaskPattern) {
        self.apply_mask(pattern);
        self.mask = Some(pattern);
        self.advance(Phase::DataPlaced, Phase::Masked);
    }
}

#[cfg(test)]
mod encoding_region_tests {
    use super::{Phase, FORMAT_INFO_COORDS_MAIN, FORMAT_INFO_COORDS_SIDE};
    use crate::builder::{Module, QR};
    use crate::common::codec::Mode;
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::{Color, ECLevel, Version};
    use crate::common::tables::FORMAT_INFOS;

    fn placed_qr(ver: usize, ecl: ECLevel) -> QR {
        let ver = Version::new(ver).unwrap();
        let mut qr = QR::new(ver, ecl, Mode::Byte);
        qr.draw_function_patterns();
        qr.reserve_info_areas();
        let cws = (0..ver.total_codewords()).map(|i| (i * 37) as u8).collect::<Vec<_>>();
        qr.draw_payload(&cws);
        qr
    }

    #[test]
    fn test_data_module_count() {
        for ver in Version::all() {
            let qr = placed_qr(*ver, ECLevel::L);
            let data_cnt = qr.grid().iter().filter(|m| m.is_data()).count();
            assert_eq!(data_cnt / 8, ver.total_codewords(), "Version {ver}");
            assert_eq!(data_cnt % 8, ver.remainder_bits(), "Version {ver}");
            assert!(!qr.grid().contains(&Module::Empty));
        }
    }

    #[test]
    fn test_payload_start() {
        let ver = Version::new(1).unwrap();
        let mut qr = QR::new(ver, ECLevel::M, Mode::Byte);
        qr.draw_function_patterns();
        qr.reserve_info_areas();
        let mut cws = vec![0; 26];
        cws[0] = 0b1011_0001;
        qr.draw_payload(&cws);
        let head = [(20, 20), (20, 19), (19, 20), (19, 19), (18, 20), (18, 19), (17, 20), (17, 19)];
        let bits = head.iter().map(|&(r, c)| qr.is_dark(r, c)).collect::<Vec<_>>();
        assert_eq!(bits, [true, false, true, true, false, false, false, true]);
    }

    #[test]
    fn test_apply_mask_involution() {
        for m in MaskPattern::all() {
            let qr = placed_qr(7, ECLevel::Q);
            let mut masked = qr.clone();
            masked.apply_mask(m);
            assert_ne!(masked.grid(), qr.grid(), "Mask {}", *m);
            masked.apply_mask(m);
            assert_eq!(masked.grid(), qr.grid(), "Mask {}", *m);
        }
    }

    #[test]
    fn test_mask_keeps_functional_modules() {
        let qr = placed_qr(7, ECLevel::Q);
        let mut masked = qr.clone();
        masked.commit_mask(MaskPattern::new(3).unwrap());
        for (a, b) in qr.grid().iter().zip(masked.grid()) {
            if a.is_functional() {
                assert_eq!(a, b);
            }
        }
        assert_eq!(masked.mask(), Some(MaskPattern::new(3).unwrap()));
    }

    #[test]
    fn test_finish_after_commit() {
        let mut qr = placed_qr(7, ECLevel::M);
        let mask = MaskPattern::new(2).unwrap();
        qr.commit_mask(mask);
        qr.draw_format_and_version_info();
        assert_eq!(qr.phase, Phase::FormatVersionWritten);

        let format_info = FORMAT_INFOS[ECLevel::M.index()][2];
        for coords in [&FORMAT_INFO_COORDS_MAIN, &FORMAT_INFO_COORDS_SIDE] {
            for (i, &(r, c)) in coords.iter().enumerate() {
                assert_eq!(qr.get(r, c), Module::Format(Color::from(format_info >> i & 1 == 1)));
            }
        }

        let (ver, w) = (Version::new(7).unwrap(), qr.width() as i16);
        for k in 0..18 {
            let exp = Module::Version(Color::from(ver.info() >> k & 1 == 1));
            let (a, b) = (k / 3, w - 11 + k % 3);
            assert_eq!(qr.get(a, b), exp, "Bit {k}");
            assert_eq!(qr.get(b, a), exp, "Bit {k}");
        }
    }

    #[test]
    #[should_panic]
    fn test_finish_before_commit() {
        let mut qr = placed_qr(1, ECLevel::L);
        qr.draw_format_and_version_info();
    }

    #[test]
    #[should_panic]
    fn test_mask_twice() {
        let mut qr = placed_qr(1, ECLevel::L);
        qr.commit_mask(MaskPattern::new(0).unwrap());
        qr.commit_mask(MaskPattern::new(1).unwrap());
    }
}
