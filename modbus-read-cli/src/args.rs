use std::{num::ParseIntError, path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use modbus_read::ByteOrder;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Hostname or ip address
    pub host: String,

    /// First holding register address to read
    pub address: u16,

    /// Number of registers to read
    #[arg(default_value = "1")]
    pub count: u16,

    /// TCP port number
    #[arg(long, default_value = "502")]
    pub port: u16,

    /// Unit identifier
    #[arg(short, long, default_value = "1")]
    pub unit: u8,

    /// Network timeout in ms
    #[arg(short, long, default_value = "2000", value_parser = parse_duration)]
    pub timeout: Duration,

    /// Payload byte order
    #[arg(long, value_enum, default_value = "big")]
    pub order: Order,

    /// Show 64-bit data-types
    #[arg(long = "64", id = "64-bit")]
    pub show64bit: bool,

    /// Write the table to a csv file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Log the client internals
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, PartialEq, Clone, Copy, ValueEnum)]
pub enum Order {
    /// Highest byte first
    Big,

    /// Lowest byte first
    Little,
}

impl From<Order> for ByteOrder {
    fn from(value: Order) -> Self {
        match value {
            Order::Big => ByteOrder::BigEndian,
            Order::Little => ByteOrder::LittleEndian,
        }
    }
}

fn parse_duration(input: &str) -> Result<Duration, ParseIntError> {
    let ms = input.parse()?;
    Ok(Duration::from_millis(ms))
}
