use super::tables::MAX_PAYLOAD_SIZE;

// Bit stream
//------------------------------------------------------------------------------

/// Append only, most significant bit first bit buffer with a fixed bit capacity.
#[derive(Debug, Clone)]
pub struct BitStream {
    data: [u8; MAX_PAYLOAD_SIZE],
    // Bit length
    len: usize,
    // Max bit capacity
    capacity: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity <= MAX_PAYLOAD_SIZE << 3,
            "Capacity exceeds payload limit: Capacity {capacity}"
        );
        Self { data: [0; MAX_PAYLOAD_SIZE], len: 0, capacity }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes holding the bits pushed so far. A trailing partial byte is zero filled.
    pub fn data(&self) -> &[u8] {
        &self.data[..(self.len + 7) >> 3]
    }

    /// Appends the low `size` bits of `bits`, most significant first.
    pub fn push_bits(&mut self, bits: u16, size: usize) {
        assert!(size <= 16, "Bit count shouldn't exceed 16: Size {size}");
        assert!(
            size >= (16 - bits.leading_zeros()) as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );
        assert!(
            self.len + size <= self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + size
        );

        let mut rem = size;
        while rem > 0 {
            let offset = self.len & 7;
            let pos = self.len >> 3;
            let room = 8 - offset;
            let take = room.min(rem);
            let chunk = ((bits as u32 >> (rem - take)) & ((1 << take) - 1)) as u8;
            self.data[pos] |= chunk << (room - take);
            self.len += take;
            rem -= take;
        }
    }

    /// Test-only view of the pushed bits, most significant first.
    #[cfg(test)]
    pub(crate) fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| (self.data[i >> 3] >> (7 - (i & 7))) & 1 == 1)
    }
}
