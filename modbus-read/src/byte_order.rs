use bytes::Buf;

/// Byte order used to interpret multi-byte values in a response payload.
///
/// Fixed at client construction and applied to every decode. The request
/// frame itself is unaffected: its address and count fields are always
/// big-endian per the MBAP convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    pub(crate) fn read_u16(self, mut span: &[u8]) -> u16 {
        match self {
            ByteOrder::BigEndian => span.get_u16(),
            ByteOrder::LittleEndian => span.get_u16_le(),
        }
    }

    pub(crate) fn read_i16(self, mut span: &[u8]) -> i16 {
        match self {
            ByteOrder::BigEndian => span.get_i16(),
            ByteOrder::LittleEndian => span.get_i16_le(),
        }
    }

    pub(crate) fn read_u32(self, mut span: &[u8]) -> u32 {
        match self {
            ByteOrder::BigEndian => span.get_u32(),
            ByteOrder::LittleEndian => span.get_u32_le(),
        }
    }

    pub(crate) fn read_i32(self, mut span: &[u8]) -> i32 {
        match self {
            ByteOrder::BigEndian => span.get_i32(),
            ByteOrder::LittleEndian => span.get_i32_le(),
        }
    }

    pub(crate) fn read_f32(self, mut span: &[u8]) -> f32 {
        match self {
            ByteOrder::BigEndian => span.get_f32(),
            ByteOrder::LittleEndian => span.get_f32_le(),
        }
    }

    pub(crate) fn read_u64(self, mut span: &[u8]) -> u64 {
        match self {
            ByteOrder::BigEndian => span.get_u64(),
            ByteOrder::LittleEndian => span.get_u64_le(),
        }
    }

    pub(crate) fn read_i64(self, mut span: &[u8]) -> i64 {
        match self {
            ByteOrder::BigEndian => span.get_i64(),
            ByteOrder::LittleEndian => span.get_i64_le(),
        }
    }

    pub(crate) fn read_f64(self, mut span: &[u8]) -> f64 {
        match self {
            ByteOrder::BigEndian => span.get_f64(),
            ByteOrder::LittleEndian => span.get_f64_le(),
        }
    }
}
