//! A datapoint layout is a table of [`BitField`]s, one per record field.
//! Bits are numbered LSB = 0 within each octet, so a field at `offset: 5,
//! width: 3` occupies bits 7:5.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub byte: usize,
    pub offset: u8,
    pub width: u8,
}

impl BitField {
    pub const fn new(byte: usize, offset: u8, width: u8) -> Self {
        assert!(width >= 1 && offset + width <= 8);
        Self {
            byte,
            offset,
            width,
        }
    }

    /// Single-bit field at `bit` of `byte`.
    pub const fn flag(byte: usize, bit: u8) -> Self {
        Self::new(byte, bit, 1)
    }

    /// Value mask before shifting into place.
    pub const fn mask(&self) -> u8 {
        ((1u16 << self.width) - 1) as u8
    }

    /// Overwrites the field in `buf`, truncating `value` to the field width.
    ///
    /// Panics if `buf` is shorter than `self.byte + 1`.
    pub fn pack(&self, buf: &mut [u8], value: u8) {
        let mask = self.mask();
        let slot = &mut buf[self.byte];
        *slot = (*slot & !(mask << self.offset)) | ((value & mask) << self.offset);
    }

    pub fn unpack(&self, buf: &[u8]) -> u8 {
        (buf[self.byte] >> self.offset) & self.mask()
    }

    pub fn pack_flag(&self, buf: &mut [u8], set: bool) {
        self.pack(buf, u8::from(set));
    }

    pub fn unpack_flag(&self, buf: &[u8]) -> bool {
        self.unpack(buf) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::BitField;

    #[test]
    fn mask_covers_width() {
        assert_eq!(BitField::new(0, 0, 8).mask(), 0xFF);
        assert_eq!(BitField::new(0, 0, 5).mask(), 0x1F);
        assert_eq!(BitField::flag(0, 7).mask(), 0x01);
    }

    #[test]
    fn pack_preserves_neighbouring_bits() {
        let mut buf = [0u8; 2];
        let high = BitField::new(1, 5, 3);
        let low = BitField::new(1, 0, 5);
        high.pack(&mut buf, 0b101);
        low.pack(&mut buf, 0b1_0111);
        assert_eq!(buf, [0x00, 0b1011_0111]);

        high.pack(&mut buf, 0);
        assert_eq!(buf[1], 0b0001_0111);
        assert_eq!(low.unpack(&buf), 0b1_0111);
    }

    #[test]
    fn pack_truncates_to_width() {
        let mut buf = [0u8; 1];
        let month = BitField::new(0, 0, 4);
        month.pack(&mut buf, 0xF3);
        assert_eq!(buf[0], 0x03);
    }

    #[test]
    fn unpack_ignores_bits_outside_field() {
        let minutes = BitField::new(0, 0, 6);
        assert_eq!(minutes.unpack(&[0xFF]), 0x3F);
    }

    #[test]
    fn flags_round_trip() {
        let mut buf = [0u8; 1];
        let fault = BitField::flag(0, 7);
        fault.pack_flag(&mut buf, true);
        assert_eq!(buf[0], 0x80);
        assert!(fault.unpack_flag(&buf));
        fault.pack_flag(&mut buf, false);
        assert_eq!(buf[0], 0x00);
    }
}
