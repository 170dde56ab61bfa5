/// 16ビットフィールドの読み取りに使うバイトオーダー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian,
    Native,
}

impl ByteOrder {
    pub fn read_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
            ByteOrder::Native => u16::from_ne_bytes(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_read() {
        assert_eq!(ByteOrder::BigEndian.read_u16([0x12, 0x34]), 0x1234);
    }

    #[test]
    fn test_native_read_matches_host() {
        let expected = if cfg!(target_endian = "little") { 0x3412 } else { 0x1234 };
        assert_eq!(ByteOrder::Native.read_u16([0x12, 0x34]), expected);
    }
}
