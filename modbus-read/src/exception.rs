/**
 * Exception codes a device may answer with, as defined by the
 * [MODBUS Application Protocol Specification](https://www.modbus.org/docs/Modbus_Application_Protocol_V1_1b3.pdf).
 *
 * Diagnostics only: [`ModbusError::Device`](crate::ModbusError::Device) keeps the raw bytes, this
 * type names them.
 */
#[repr(u8)]
#[derive(Debug, Clone, Copy)]
pub enum ExceptionCode {
    /// The requested function code is not supported by the device.
    IllegalFunction = 1,
    /// The requested data address is not available on the device.
    IllegalDataAddress = 2,
    /// A value in the request is outside the range the device accepts.
    IllegalDataValue = 3,
    /// The device failed while performing the requested action.
    ServerDeviceFailure = 4,
    /// The request was accepted but needs a long time to complete.
    Acknowledge = 5,
    /// The device is busy with a long-running command.
    ServerDeviceBusy = 6,
    /// The device detected a parity error reading its record file.
    MemoryParityError = 8,
    /// The gateway could not allocate a path to the target device.
    GatewayPathUnavailable = 10,
    /// The target device behind the gateway did not respond.
    GatewayTargetDeviceFailedToRespond = 11,
    /// A code outside the protocol specification.
    Unknown(u8),
}

impl From<u8> for ExceptionCode {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::IllegalFunction,
            2 => Self::IllegalDataAddress,
            3 => Self::IllegalDataValue,
            4 => Self::ServerDeviceFailure,
            5 => Self::Acknowledge,
            6 => Self::ServerDeviceBusy,
            8 => Self::MemoryParityError,
            10 => Self::GatewayPathUnavailable,
            11 => Self::GatewayTargetDeviceFailedToRespond,
            _ => Self::Unknown(value),
        }
    }
}

impl From<ExceptionCode> for u8 {
    fn from(value: ExceptionCode) -> Self {
        match value {
            ExceptionCode::IllegalFunction => 1,
            ExceptionCode::IllegalDataAddress => 2,
            ExceptionCode::IllegalDataValue => 3,
            ExceptionCode::ServerDeviceFailure => 4,
            ExceptionCode::Acknowledge => 5,
            ExceptionCode::ServerDeviceBusy => 6,
            ExceptionCode::MemoryParityError => 8,
            ExceptionCode::GatewayPathUnavailable => 10,
            ExceptionCode::GatewayTargetDeviceFailedToRespond => 11,
            ExceptionCode::Unknown(value) => value,
        }
    }
}

impl PartialEq for ExceptionCode {
    fn eq(&self, other: &Self) -> bool {
        u8::from(*self) == u8::from(*other)
    }
}

impl std::fmt::Display for ExceptionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExceptionCode::IllegalFunction => write!(f, "illegal function"),
            ExceptionCode::IllegalDataAddress => write!(f, "illegal data address"),
            ExceptionCode::IllegalDataValue => write!(f, "illegal data value"),
            ExceptionCode::ServerDeviceFailure => write!(f, "server device failure"),
            ExceptionCode::Acknowledge => write!(f, "acknowledge"),
            ExceptionCode::ServerDeviceBusy => write!(f, "server device busy"),
            ExceptionCode::MemoryParityError => write!(f, "memory parity error"),
            ExceptionCode::GatewayPathUnavailable => write!(f, "gateway path unavailable"),
            ExceptionCode::GatewayTargetDeviceFailedToRespond => write!(f, "gateway target device failed to respond"),
            ExceptionCode::Unknown(code) => write!(f, "unknown exception code 0x{code:02x}"),
        }
    }
}
