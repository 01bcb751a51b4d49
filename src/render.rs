use std::str::FromStr;

use image::{GrayImage, Luma};

use crate::builder::QR;
use crate::common::error::QRError;
use crate::common::metadata::Color;

// Light modules around the symbol on every side
const QUIET_ZONE: usize = 4;

const ANSI_LIGHT: &str = "\x1b[47m  \x1b[0m";
const ANSI_DARK: &str = "\x1b[40m  \x1b[0m";

// Indexed by the light modules of a 2x2 cell: top left, top right, bottom left, bottom right
const QUADRANTS: [char; 16] =
    [' ', '▗', '▖', '▄', '▝', '▐', '▞', '▟', '▘', '▚', '▌', '▙', '▀', '▜', '▛', '█'];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutputFormat {
    /// Terminal background colors, two spaces per module.
    Ansi,
    Ascii,
    /// Half blocks, two module rows per line.
    Utf8,
    /// Quadrant blocks, 2x2 modules per character.
    Utf8Q,
}

impl FromStr for OutputFormat {
    type Err = QRError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANSI" => Ok(Self::Ansi),
            "ASCII" => Ok(Self::Ascii),
            "UTF8" => Ok(Self::Utf8),
            "UTF8Q" => Ok(Self::Utf8Q),
            _ => Err(QRError::InvalidOutputFormat),
        }
    }
}

// Render
//------------------------------------------------------------------------------

impl QR {
    fn canvas_width(&self) -> usize {
        self.width() + 2 * QUIET_ZONE
    }

    // Canvas coordinates include the quiet zone. Cells past the canvas count as quiet zone too.
    fn is_light_at(&self, i: usize, j: usize) -> bool {
        let w = self.width();
        if i < QUIET_ZONE || i >= QUIET_ZONE + w || j < QUIET_ZONE || j >= QUIET_ZONE + w {
            return true;
        }
        let (r, c) = ((i - QUIET_ZONE) as i16, (j - QUIET_ZONE) as i16);
        self.color(r, c) == Color::Light
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Ansi => self.render_cells(ANSI_LIGHT, ANSI_DARK),
            OutputFormat::Ascii => self.render_cells("  ", "##"),
            OutputFormat::Utf8 => self.render_half_blocks(),
            OutputFormat::Utf8Q => self.render_quadrants(),
        }
    }

    fn render_cells(&self, light: &str, dark: &str) -> String {
        let cw = self.canvas_width();
        let mut res = String::with_capacity(cw * (cw * light.len() + 1));
        for i in 0..cw {
            for j in 0..cw {
                res.push_str(Color::from(!self.is_light_at(i, j)).select(light, dark));
            }
            res.push('\n');
        }
        res
    }

    fn render_half_blocks(&self) -> String {
        let cw = self.canvas_width();
        let mut res = String::new();
        for i in (0..cw).step_by(2) {
            for j in 0..cw {
                let glyph = match (self.is_light_at(i, j), self.is_light_at(i + 1, j)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                };
                res.push(glyph);
            }
            res.push('\n');
        }
        res
    }

    fn render_quadrants(&self) -> String {
        let cw = self.canvas_width();
        let mut res = String::new();
        for i in (0..cw).step_by(2) {
            for j in (0..cw).step_by(2) {
                let idx = [(i, j), (i, j + 1), (i + 1, j), (i + 1, j + 1)]
                    .iter()
                    .fold(0, |acc, &(a, b)| acc << 1 | self.is_light_at(a, b) as usize);
                res.push(QUADRANTS[idx]);
            }
            res.push('\n');
        }
        res
    }

    /// Grayscale raster with `module_sz` pixels per module, quiet zone included.
    pub fn to_image(&self, module_sz: u32) -> GrayImage {
        let qz_sz = QUIET_ZONE as u32 * module_sz;
        let qr_sz = self.width() as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = GrayImage::from_pixel(total_sz, total_sz, Luma([255]));
        for i in qz_sz..qz_sz + qr_sz {
            for j in qz_sz..qz_sz + qr_sz {
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;
                let pixel = self.color(r, c).select(Luma([255]), Luma([0]));
                canvas.put_pixel(j, i, pixel);
            }
        }
        canvas
    }
}
