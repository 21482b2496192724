mod byte_order;
mod client;
pub mod consts;
mod decode;
mod error;
mod exception;
mod frame;

pub use byte_order::ByteOrder;
pub use client::{Client, TcpClient};
pub use decode::{check_response, decode_f32, decode_f64, decode_i16, decode_i32, decode_i64, decode_u16, decode_u32, decode_u64};
pub use error::ModbusError;
pub use exception::ExceptionCode;
pub use frame::build_read_request;
