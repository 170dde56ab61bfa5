pub mod packet;
pub mod inner_header;

pub use inner_header::{parse_ipv4_header, parse_ipv4_header_with};
