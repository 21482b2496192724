use thiserror::Error;

/// Errors returned by the client and the response decoder.
///
/// Callers are expected to branch on the variant, never on the rendered
/// message.
#[derive(Debug, Error)]
pub enum ModbusError {
    /// A connection-dependent operation was invoked before [`Client::connect`](crate::Client::connect)
    /// or after [`Client::close`](crate::Client::close).
    #[error("not connected")]
    NotConnected,

    /// The response buffer is shorter than the fixed 9 byte header.
    #[error("short response")]
    ShortResponse,

    /// The device answered with an exception reply instead of data.
    /// Carries the raw function/error code byte and the exception code byte.
    #[error("modbus error, 0x{error_code:02x}, 0x{exception_code:02x}")]
    Device { error_code: u8, exception_code: u8 },

    /// The payload does not hold enough bytes at the requested offset for
    /// the requested width. The header itself was complete.
    #[error("short payload")]
    ShortPayload,

    /// Transport failure. Deadline expiry surfaces here as
    /// [`std::io::ErrorKind::TimedOut`].
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_error_renders_hex_codes() {
        let err = ModbusError::Device {
            error_code: 0x83,
            exception_code: 0x01,
        };

        let text = err.to_string();
        assert!(text.contains("0x83"), "{text}");
        assert!(text.contains("0x01"), "{text}");
    }

    #[test]
    fn variants_are_matchable() {
        assert!(matches!(ModbusError::NotConnected, ModbusError::NotConnected));
        assert!(matches!(ModbusError::ShortResponse, ModbusError::ShortResponse));
        assert!(matches!(ModbusError::ShortPayload, ModbusError::ShortPayload));

        let err = ModbusError::Device {
            error_code: 0x83,
            exception_code: 0x02,
        };
        match err {
            ModbusError::Device {
                error_code,
                exception_code,
            } => {
                assert_eq!(error_code, 0x83);
                assert_eq!(exception_code, 0x02);
            }
            other => panic!("unexpected: {other}"),
        }
    }
}
