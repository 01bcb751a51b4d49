use std::ops::Deref;

use rayon::prelude::*;
use tracing::{debug, trace};

use super::error::{QRError, QRResult};
use super::metadata::Color;
use super::tables::MASK_COUNT;
use crate::builder::QR;

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> QRResult<Self> {
        if pattern as usize >= MASK_COUNT {
            return Err(QRError::InvalidMaskingPattern);
        }
        Ok(Self(pattern))
    }

    pub fn all() -> impl Iterator<Item = MaskPattern> {
        (0..MASK_COUNT as u8).map(Self)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    // Products reach 176 * 176, past i16
    pub fn fields(r: i16, c: i16) -> bool {
        let p = r as i32 * c as i32;
        (p & 1) + (p % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        let p = r as i32 * c as i32;
        ((p & 1) + (p % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        let p = r as i32 * c as i32;
        (((r + c) as i32 & 1) + (p % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_functions(self) -> fn(i16, i16) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Invalid pattern"),
        }
    }
}

/// Scores all 8 masks on scratch copies of the unmasked symbol and returns the one with the
/// lowest penalty. Ties go to the lowest mask index.
pub fn find_best_mask(qr: &QR) -> MaskPattern {
    let (penalty, best) = (0..MASK_COUNT as u8)
        .into_par_iter()
        .map(|m| {
            let mask = MaskPattern(m);
            let mut scratch = qr.clone();
            scratch.apply_mask(mask);
            scratch.draw_format_info(mask);
            let penalty = compute_total_penalty(&scratch);
            trace!("Mask {m}: penalty {penalty}");
            (penalty, m)
        })
        .min()
        .unwrap_or((0, 0));
    debug!("Selected mask {best} with penalty {penalty}");
    MaskPattern(best)
}

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let adj_pen = compute_adjacent_penalty(qr);
    let blk_pen = compute_block_penalty(qr);
    let fp_pen_h = compute_finder_pattern_penalty(qr, true);
    let fp_pen_v = compute_finder_pattern_penalty(qr, false);
    let bal_pen = compute_balance_penalty(qr);
    trace!(
        "Penalties: adjacent {adj_pen}, block {blk_pen}, finder {fp_pen_h}+{fp_pen_v}, \
         balance {bal_pen}"
    );
    adj_pen + blk_pen + fp_pen_h + fp_pen_v + bal_pen
}

// Runs of 5 or more same colored modules in a row or column score 3, plus 1 per extra module
fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width();
    let mut cols = vec![(Color::Dark, 0u32); w];
    for r in 0..w {
        let mut last = Color::Dark;
        let mut consec_row_len = 0u32;
        for (c, col) in cols.iter_mut().enumerate() {
            let clr = *qr.get(r as i16, c as i16);
            if c == 0 || last != clr {
                last = clr;
                consec_row_len = 0;
            }
            consec_row_len += 1;
            pen += run_penalty(consec_row_len);

            if r == 0 || col.0 != clr {
                col.0 = clr;
                col.1 = 0;
            }
            col.1 += 1;
            pen += run_penalty(col.1);
        }
    }
    pen
}

#[inline]
fn run_penalty(run: u32) -> u32 {
    match run {
        5 => 3,
        6.. => 1,
        _ => 0,
    }
}

fn compute_block_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = *qr.get(r, c);
            if clr == *qr.get(r + 1, c) && clr == *qr.get(r, c + 1) && clr == *qr.get(r + 1, c + 1)
            {
                pen += 3;
            }
        }
    }
    pen
}

// Dark light dark dark dark light dark, with 4 light modules on either side. Each side scores
// on its own. Modules past the edge count as light.
fn compute_finder_pattern_penalty(qr: &QR, is_hor: bool) -> u32 {
    static PATTERN: [Color; 7] = [
        Color::Dark,
        Color::Light,
        Color::Dark,
        Color::Dark,
        Color::Dark,
        Color::Light,
        Color::Dark,
    ];

    let mut pen = 0;
    let w = qr.width() as i16;
    for i in 0..w {
        let get = |x: i16| if is_hor { *qr.get(i, x) } else { *qr.get(x, i) };
        let is_light = |x: i16| x < 0 || x >= w || get(x) == Color::Light;
        for j in 0..=w - 7 {
            if (j..j + 7).map(get).ne(PATTERN.iter().copied()) {
                continue;
            }
            if (j - 4..j).all(is_light) {
                pen += 40;
            }
            if (j + 7..j + 11).all(is_light) {
                pen += 40;
            }
        }
    }
    pen
}

// 10 points per full 5% step the dark ratio strays from one half
fn compute_balance_penalty(qr: &QR) -> u32 {
    let dark_cnt = qr.count_dark_modules();
    let w = qr.width();
    let tot = w * w;
    ((dark_cnt * 20).abs_diff(tot * 10) / tot * 10) as u32
}
