use crate::byte_order::ByteOrder;
use crate::consts::*;
use crate::error::ModbusError;

/// Classifies a received buffer before any payload extraction.
///
/// Fails with [`ModbusError::ShortResponse`] when the buffer cannot hold the
/// fixed 9 byte header, and with [`ModbusError::Device`] when the
/// function/error code byte differs from 0x03, in which case the byte after
/// it is the device's exception code. A well-formed data response passes.
pub fn check_response(buf: &[u8]) -> Result<(), ModbusError> {
    if buf.len() < RESPONSE_HEADER_LEN {
        return Err(ModbusError::ShortResponse);
    }

    let error_code = buf[ERROR_CODE_INDEX];
    if error_code != READ_HOLDING_REGISTERS {
        return Err(ModbusError::Device {
            error_code,
            exception_code: buf[EXCEPTION_CODE_INDEX],
        });
    }

    Ok(())
}

fn payload_span(buf: &[u8], offset: usize, width: usize) -> Result<&[u8], ModbusError> {
    let start = RESPONSE_HEADER_LEN.checked_add(offset).ok_or(ModbusError::ShortPayload)?;
    let end = start.checked_add(width).ok_or(ModbusError::ShortPayload)?;
    buf.get(start..end).ok_or(ModbusError::ShortPayload)
}

/// Decodes an unsigned 16-bit value at a payload-relative offset.
///
/// `offset` is 0-based past the 9 byte header, so offset 0 reads physical
/// bytes 9 and 10. The remaining extractors follow the same convention for
/// their width.
pub fn decode_u16(buf: &[u8], offset: usize, order: ByteOrder) -> Result<u16, ModbusError> {
    Ok(order.read_u16(payload_span(buf, offset, 2)?))
}

pub fn decode_i16(buf: &[u8], offset: usize, order: ByteOrder) -> Result<i16, ModbusError> {
    Ok(order.read_i16(payload_span(buf, offset, 2)?))
}

pub fn decode_u32(buf: &[u8], offset: usize, order: ByteOrder) -> Result<u32, ModbusError> {
    Ok(order.read_u32(payload_span(buf, offset, 4)?))
}

pub fn decode_i32(buf: &[u8], offset: usize, order: ByteOrder) -> Result<i32, ModbusError> {
    Ok(order.read_i32(payload_span(buf, offset, 4)?))
}

pub fn decode_f32(buf: &[u8], offset: usize, order: ByteOrder) -> Result<f32, ModbusError> {
    Ok(order.read_f32(payload_span(buf, offset, 4)?))
}

pub fn decode_u64(buf: &[u8], offset: usize, order: ByteOrder) -> Result<u64, ModbusError> {
    Ok(order.read_u64(payload_span(buf, offset, 8)?))
}

pub fn decode_i64(buf: &[u8], offset: usize, order: ByteOrder) -> Result<i64, ModbusError> {
    Ok(order.read_i64(payload_span(buf, offset, 8)?))
}

pub fn decode_f64(buf: &[u8], offset: usize, order: ByteOrder) -> Result<f64, ModbusError> {
    Ok(order.read_f64(payload_span(buf, offset, 8)?))
}
