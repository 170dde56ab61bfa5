use crate::core::config::ParserConfig;
use crate::core::error::{ParseError, ParseResult};
use crate::network::packet::byte_order::ByteOrder;
use crate::network::packet::ipv4::{Header, HeaderFlags, HEADER_LEN};
use bytes::Bytes;
use std::net::Ipv4Addr;

/// ICMPエラーメッセージに含まれる元パケットのIPv4ヘッダーを解析する
pub fn parse_ipv4_header(data: &[u8]) -> ParseResult<Header> {
    parse_ipv4_header_with(data, ParserConfig::global())
}

/// Total Lengthの読み取り方針はconfigで指定する
pub fn parse_ipv4_header_with(data: &[u8], config: &ParserConfig) -> ParseResult<Header> {
    if data.len() < HEADER_LEN {
        return Err(ParseError::HeaderTooShort { length: data.len() });
    }

    let header_length = (data[0] & 0x0f) as usize * 4;
    if header_length > data.len() {
        return Err(ParseError::BufferTooShort {
            declared: header_length,
            available: data.len(),
        });
    }

    // 一部のカーネルはTotal Lengthをホストバイトオーダーで返す
    let total_length = config
        .total_length_byte_order()
        .read_u16([data[2], data[3]]);
    let flags_fragment_offset = ByteOrder::BigEndian.read_u16([data[6], data[7]]);

    let options = if header_length > HEADER_LEN {
        Bytes::copy_from_slice(&data[HEADER_LEN..header_length])
    } else {
        Bytes::new()
    };

    Ok(Header {
        version: data[0] >> 4,
        header_length: header_length as u8,
        tos: data[1],
        total_length,
        identification: ByteOrder::BigEndian.read_u16([data[4], data[5]]),
        flags: HeaderFlags::from_bits((flags_fragment_offset >> 13) as u8),
        fragment_offset: flags_fragment_offset & 0x1fff,
        ttl: data[8],
        protocol: data[9],
        checksum: ByteOrder::BigEndian.read_u16([data[10], data[11]]),
        source: Ipv4Addr::new(data[12], data[13], data[14], data[15]),
        destination: Ipv4Addr::new(data[16], data[17], data[18], data[19]),
        options,
    })
}
