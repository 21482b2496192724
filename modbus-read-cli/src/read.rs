use std::{error::Error, path::Path};

use comfy_table::{presets, CellAlignment, Table};
use modbus_read::{consts::RESPONSE_HEADER_LEN, Client, ExceptionCode, ModbusError, TcpClient};
use tokio::time::Instant;

use crate::args::Cli;

const EMPTY: &str = "-------";

pub async fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    let host_port = format!("{}:{}", args.host, args.port);

    let mut client = TcpClient::new(host_port, args.timeout, args.order.into());
    client.connect().await?;
    client.set_deadline(Instant::now() + args.timeout)?;

    let mut buf = vec![0u8; RESPONSE_HEADER_LEN + args.count as usize * 2];
    let received = client.read(&mut buf, args.unit, args.address, args.count).await?;
    let response = &buf[..received];

    if let Err(err) = client.check_response(response) {
        _ = client.close().await;
        if let ModbusError::Device { exception_code, .. } = err {
            return Err(format!("{err} ({})", ExceptionCode::from(exception_code)).into());
        }
        return Err(err.into());
    }

    let table = registers_table(&client, response, &args);
    println!("{table}");

    if let Some(filename) = &args.export {
        export_csv(&table, filename)?;
        println!("Exported to {}", filename.display());
    }

    client.close().await?;

    Ok(())
}

fn registers_table(client: &TcpClient, response: &[u8], args: &Cli) -> Table {
    let show64bit = args.show64bit;
    let show32bit = if show64bit { true } else { args.count > 1 };

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);

    let mut header = Vec::with_capacity(11);
    header.push("Address");
    header.push("U16");
    header.push("I16");
    if show32bit {
        header.push("U32");
        header.push("I32");
        header.push("F32");
    }
    if show64bit {
        header.push("U64");
        header.push("I64");
        header.push("F64");
    }
    header.push("Hex");
    header.push("Bin");

    let column_count = header.len();
    table.set_header(header);

    table.column_iter_mut().skip(1).for_each(|c| c.set_cell_alignment(CellAlignment::Right));
    table
        .column_iter_mut()
        .skip(column_count - 2)
        .for_each(|c| c.set_cell_alignment(CellAlignment::Left));

    for register in 0..args.count {
        let offset = register as usize * 2;
        let address = args.address as u32 + register as u32;

        let mut row: Vec<String> = Vec::with_capacity(column_count);

        row.push(format!("4{address:05}"));
        row.push(cell(client.decode_u16(response, offset)));
        row.push(cell(client.decode_i16(response, offset)));

        if show32bit {
            row.push(cell(client.decode_u32(response, offset)));
            row.push(cell(client.decode_i32(response, offset)));
            row.push(cell(client.decode_f32(response, offset)));
        }
        if show64bit {
            row.push(cell(client.decode_u64(response, offset)));
            row.push(cell(client.decode_i64(response, offset)));
            row.push(cell(client.decode_f64(response, offset)));
        }

        match client.decode_u16(response, offset) {
            Ok(value) => {
                row.push(format!("{value:04X}")); // Hex
                row.push(format!(
                    "{:04b} {:04b} {:04b} {:04b}",
                    value >> 12 & 0xF,
                    value >> 8 & 0xF,
                    value >> 4 & 0xF,
                    value & 0xF
                )); // Bin
            }
            Err(_) => {
                row.push(EMPTY.into());
                row.push(EMPTY.into());
            }
        }

        table.add_row(row);
    }

    table
}

fn cell<T: std::fmt::Display>(value: Result<T, ModbusError>) -> String {
    match value {
        Ok(value) => value.to_string(),
        Err(_) => EMPTY.into(),
    }
}

fn export_csv(table: &Table, filename: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(filename)?;

    let header = table.header().unwrap().cell_iter().map(|c| c.content()).collect::<Vec<String>>();
    writer.write_record(header)?;

    for row in table.row_iter() {
        let record = row.cell_iter().map(|c| c.content()).collect::<Vec<String>>();
        writer.write_record(record)?;
    }
    writer.flush()?;

    Ok(())
}
