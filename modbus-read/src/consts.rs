/// Function code for reading holding registers.
pub const READ_HOLDING_REGISTERS: u8 = 0x03;

/// Length of a read request frame: MBAP header plus the fixed-size PDU.
pub const REQUEST_LEN: usize = 12;

/// Length of the fixed response prefix: MBAP header, function code and
/// byte-count-or-exception-code byte.
pub const RESPONSE_HEADER_LEN: usize = 9;

/// Offset of the function/error code byte in a response.
pub const ERROR_CODE_INDEX: usize = 7;

/// Offset of the exception code byte in an exception response.
pub const EXCEPTION_CODE_INDEX: usize = 8;
