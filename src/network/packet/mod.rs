pub mod byte_order;
pub mod ipv4;

pub use byte_order::ByteOrder;
pub use ipv4::{Header, HeaderFlags, HEADER_LEN};
