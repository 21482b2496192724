use std::{future::Future, time::Duration};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
    time::{timeout, timeout_at, Instant},
};

use crate::{byte_order::ByteOrder, decode, error::ModbusError, frame::build_read_request};

/**
 * Capability set of a read-only holding register client.
 *
 * The transport methods require `&mut self`: one connection, one request in
 * flight. The decode methods are provided and delegate to the free decoding
 * functions with the byte order from [`Client::byte_order`]; they never
 * touch the connection.
 */
pub trait Client {
    /// Byte order applied to every payload decode.
    fn byte_order(&self) -> ByteOrder;

    /// Establishes the TCP connection, bounded by the configured connect timeout.
    fn connect(&mut self) -> impl Future<Output = Result<(), ModbusError>> + Send;

    /// Sets an absolute deadline for every following transport operation.
    /// Fails with [`ModbusError::NotConnected`] before [`Client::connect`].
    fn set_deadline(&mut self, deadline: Instant) -> Result<(), ModbusError>;

    /// Sends a read-holding-registers request and receives the raw reply
    /// into `buf`. Returns the number of bytes received. The reply is not
    /// validated here; pass it to [`Client::check_response`].
    fn read(&mut self, buf: &mut [u8], unit_id: u8, address: u16, count: u16) -> impl Future<Output = Result<usize, ModbusError>> + Send;

    /// Shuts the connection down and releases it. Every later transport
    /// operation fails with [`ModbusError::NotConnected`].
    fn close(&mut self) -> impl Future<Output = Result<(), ModbusError>> + Send;

    fn check_response(&self, buf: &[u8]) -> Result<(), ModbusError> {
        decode::check_response(buf)
    }

    fn decode_u16(&self, buf: &[u8], offset: usize) -> Result<u16, ModbusError> {
        decode::decode_u16(buf, offset, self.byte_order())
    }

    fn decode_i16(&self, buf: &[u8], offset: usize) -> Result<i16, ModbusError> {
        decode::decode_i16(buf, offset, self.byte_order())
    }

    fn decode_u32(&self, buf: &[u8], offset: usize) -> Result<u32, ModbusError> {
        decode::decode_u32(buf, offset, self.byte_order())
    }

    fn decode_i32(&self, buf: &[u8], offset: usize) -> Result<i32, ModbusError> {
        decode::decode_i32(buf, offset, self.byte_order())
    }

    fn decode_f32(&self, buf: &[u8], offset: usize) -> Result<f32, ModbusError> {
        decode::decode_f32(buf, offset, self.byte_order())
    }

    fn decode_u64(&self, buf: &[u8], offset: usize) -> Result<u64, ModbusError> {
        decode::decode_u64(buf, offset, self.byte_order())
    }

    fn decode_i64(&self, buf: &[u8], offset: usize) -> Result<i64, ModbusError> {
        decode::decode_i64(buf, offset, self.byte_order())
    }

    fn decode_f64(&self, buf: &[u8], offset: usize) -> Result<f64, ModbusError> {
        decode::decode_f64(buf, offset, self.byte_order())
    }
}

/// Modbus TCP client reading holding registers over a single connection.
///
/// Construction only stores configuration; the socket is opened by
/// [`Client::connect`] and owned exclusively until [`Client::close`] takes
/// it back out. Dropping the client closes any open connection.
pub struct TcpClient {
    addr: String,
    connect_timeout: Duration,
    byte_order: ByteOrder,
    stream: Option<TcpStream>,
    deadline: Option<Instant>,
}

impl TcpClient {
    pub fn new(addr: String, connect_timeout: Duration, byte_order: ByteOrder) -> Self {
        Self {
            addr,
            connect_timeout,
            byte_order,
            stream: None,
            deadline: None,
        }
    }
}

impl Client for TcpClient {
    fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    async fn connect(&mut self) -> Result<(), ModbusError> {
        let stream = match timeout(self.connect_timeout, TcpStream::connect(&self.addr)).await {
            Ok(stream) => stream?,
            Err(elapsed) => return Err(ModbusError::Io(elapsed.into())),
        };

        tracing::debug!("connected to {}", self.addr);

        // A fresh connection carries no deadline, even if the previous one had.
        self.stream = Some(stream);
        self.deadline = None;

        Ok(())
    }

    fn set_deadline(&mut self, deadline: Instant) -> Result<(), ModbusError> {
        if self.stream.is_none() {
            return Err(ModbusError::NotConnected);
        }

        self.deadline = Some(deadline);
        Ok(())
    }

    async fn read(&mut self, buf: &mut [u8], unit_id: u8, address: u16, count: u16) -> Result<usize, ModbusError> {
        let deadline = self.deadline;
        let stream = self.stream.as_mut().ok_or(ModbusError::NotConnected)?;

        let request = build_read_request(unit_id, address, count);
        with_deadline(deadline, stream.write_all(&request)).await?;
        tracing::trace!("sent read request: unit {unit_id}, address {address}, count {count}");

        let received = with_deadline(deadline, stream.read(buf)).await?;
        tracing::trace!("received {received} bytes");

        Ok(received)
    }

    async fn close(&mut self) -> Result<(), ModbusError> {
        let mut stream = self.stream.take().ok_or(ModbusError::NotConnected)?;
        self.deadline = None;

        stream.shutdown().await?;
        tracing::debug!("connection to {} closed", self.addr);

        Ok(())
    }
}

async fn with_deadline<T>(deadline: Option<Instant>, op: impl Future<Output = std::io::Result<T>>) -> Result<T, ModbusError> {
    match deadline {
        Some(deadline) => match timeout_at(deadline, op).await {
            Ok(result) => Ok(result?),
            Err(elapsed) => Err(ModbusError::Io(elapsed.into())),
        },
        None => Ok(op.await?),
    }
}
