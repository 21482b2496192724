use crate::consts::*;

/// Builds the 12 byte read-holding-registers request for one unit.
///
/// The transaction id and protocol id fields are always zero: responses are
/// matched to requests by the caller keeping at most one request in flight
/// per connection. Address and count are big-endian regardless of the
/// configured payload byte order.
pub fn build_read_request(unit_id: u8, address: u16, count: u16) -> [u8; REQUEST_LEN] {
    let address = address.to_be_bytes();
    let count = count.to_be_bytes();

    [
        0x00, // transaction id, high
        0x00, // transaction id, low
        0x00, // protocol id, high
        0x00, // protocol id, low
        0x00, // length, high
        0x06, // length, low: unit id + 5 PDU bytes
        unit_id,
        READ_HOLDING_REGISTERS,
        address[0], // address, high
        address[1], // address, low
        count[0], // register count, high
        count[1], // register count, low
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_layout() {
        let req = build_read_request(1, 2, 3);
        assert_eq!(req, [0, 0, 0, 0, 0, 6, 1, 3, 0, 2, 0, 3]);
    }

    #[test]
    fn header_fields_are_big_endian() {
        let req = build_read_request(0xFF, 0xABCD, 0x0102);

        assert_eq!(&req[0..6], &[0, 0, 0, 0, 0, 6]);
        assert_eq!(req[6], 0xFF);
        assert_eq!(req[7], READ_HOLDING_REGISTERS);
        assert_eq!(&req[8..10], &[0xAB, 0xCD]);
        assert_eq!(&req[10..12], &[0x01, 0x02]);
        assert_eq!(req.len(), REQUEST_LEN);
    }
}
