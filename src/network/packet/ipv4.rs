use bytes::Bytes;
use pnet::packet::ip::IpNextHeaderProtocol;
use std::fmt;
use std::net::Ipv4Addr;

/// オプションを含まないIPv4ヘッダーの長さ
pub const HEADER_LEN: usize = 20;

/// Flagsフィールドの3ビット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeaderFlags(u8);

impl HeaderFlags {
    pub const MORE_FRAGMENTS: HeaderFlags = HeaderFlags(0b001);
    pub const DONT_FRAGMENT: HeaderFlags = HeaderFlags(0b010);

    pub fn from_bits(bits: u8) -> Self {
        HeaderFlags(bits & 0x7)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: HeaderFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl fmt::LowerHex for HeaderFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

// 0                   1                   2                   3
// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |Version|  IHL  |Type of Service|          Total Length         |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |         Identification        |Flags|      Fragment Offset    |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |  Time to Live |    Protocol   |         Header Checksum       |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                       Source Address                          |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                    Destination Address                        |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                    Options                    |    Padding    |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: u8,
    /// バイト単位のヘッダー長 (IHL * 4)
    pub header_length: u8,
    pub tos: u8,
    pub total_length: u16,
    pub identification: u16,
    pub flags: HeaderFlags,
    pub fragment_offset: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
    /// 入力バッファのコピー。オプションがなければ空
    pub options: Bytes,
}

impl Header {
    pub fn next_level_protocol(&self) -> IpNextHeaderProtocol {
        IpNextHeaderProtocol::new(self.protocol)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ver={} hdrlen={} tos={:#x} totallen={} id={:#x} flags={:#x} fragoff={:#x} ttl={} proto={} cksum={:#x} src={} dst={}",
            self.version,
            self.header_length,
            self.tos,
            self.total_length,
            self.identification,
            self.flags,
            self.fragment_offset,
            self.ttl,
            self.protocol,
            self.checksum,
            self.source,
            self.destination,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnet::packet::ip::IpNextHeaderProtocols;

    fn sample_header() -> Header {
        Header {
            version: 4,
            header_length: 20,
            tos: 0,
            total_length: 20,
            identification: 0x1234,
            flags: HeaderFlags::default(),
            fragment_offset: 0,
            ttl: 64,
            protocol: 1,
            checksum: 0xabcd,
            source: Ipv4Addr::new(192, 168, 1, 1),
            destination: Ipv4Addr::new(10, 0, 0, 1),
            options: Bytes::new(),
        }
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            sample_header().to_string(),
            "ver=4 hdrlen=20 tos=0x0 totallen=20 id=0x1234 flags=0x0 fragoff=0x0 ttl=64 proto=1 cksum=0xabcd src=192.168.1.1 dst=10.0.0.1"
        );
    }

    #[test]
    fn test_flags() {
        let flags = HeaderFlags::from_bits(0b011);
        assert!(flags.contains(HeaderFlags::DONT_FRAGMENT));
        assert!(flags.contains(HeaderFlags::MORE_FRAGMENTS));
        assert!(!HeaderFlags::from_bits(0b100).contains(HeaderFlags::DONT_FRAGMENT));
        // 3ビットを超える値は切り捨てる
        assert_eq!(HeaderFlags::from_bits(0xff).bits(), 0x7);
    }

    #[test]
    fn test_next_level_protocol() {
        assert_eq!(sample_header().next_level_protocol(), IpNextHeaderProtocols::Icmp);
    }
}
