use super::metadata::Version;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

/// Walks every module of the symbol in data placement order: two column strips from the right
/// edge, alternating upward and downward, stepping over the vertical timing column.
pub struct EncRegionIter {
    // Right column of the current strip
    right: i16,
    // Steps taken along the strip
    vert: i16,
    // Whether the next module is the left one of its pair
    left: bool,
    width: i16,
}

impl EncRegionIter {
    pub const fn new(version: Version) -> Self {
        let w = version.width() as i16;
        Self { right: w - 1, vert: 0, left: false, width: w }
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        if self.right < 1 {
            return None;
        }

        let upward = (self.right + 1) & 2 == 0;
        let r = if upward { self.width - 1 - self.vert } else { self.vert };
        let c = if self.left { self.right - 1 } else { self.right };

        if self.left {
            self.vert += 1;
            if self.vert == self.width {
                self.vert = 0;
                self.right -= 2;
                if self.right == 6 {
                    self.right = 5;
                }
            }
        }
        self.left = !self.left;

        Some((r, c))
    }
}
