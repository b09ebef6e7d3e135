//! Codes command implementation.
//!
//! Prints the Huffman frequency and code of every byte present in a file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use trizip_huffman::code_tables;

/// JSON serializable code table row.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeJson {
    pub symbol: u8,
    pub frequency: u32,
    pub length: u8,
    pub code: String,
}

/// JSON output for a file's code table.
#[derive(Debug, Serialize, Deserialize)]
pub struct CodeTableJson {
    pub file: String,
    pub size: u64,
    pub distinct_symbols: usize,
    pub payload_bits: u64,
    pub codes: Vec<CodeJson>,
}

/// Build the code table report for `data`.
pub fn code_report(file: &str, data: &[u8]) -> trizip_core::Result<CodeTableJson> {
    let (frequencies, table) = code_tables(data)?;

    let codes: Vec<CodeJson> = table
        .iter_assigned()
        .map(|(symbol, entry)| CodeJson {
            symbol,
            frequency: frequencies.get(symbol),
            length: entry.length,
            code: entry.to_bit_string(),
        })
        .collect();
    let payload_bits = codes
        .iter()
        .map(|c| c.frequency as u64 * c.length as u64)
        .sum();

    Ok(CodeTableJson {
        file: file.to_string(),
        size: data.len() as u64,
        distinct_symbols: codes.len(),
        payload_bits,
        codes,
    })
}

pub fn cmd_codes(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(file)?;
    let report = code_report(&file.display().to_string(), &data)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{}: {} bytes, {} symbols, {} payload bits",
        report.file, report.size, report.distinct_symbols, report.payload_bits
    );
    println!("{:>6} {:>5} {:>10} {:>4}  Code", "Byte", "Char", "Frequency", "Len");
    println!("{}", "-".repeat(50));
    for row in &report.codes {
        let printable = if row.symbol.is_ascii_graphic() {
            (row.symbol as char).to_string()
        } else {
            "".to_string()
        };
        println!(
            "{:>6} {:>5} {:>10} {:>4}  {}",
            format!("0x{:02X}", row.symbol),
            printable,
            row.frequency,
            row.length,
            row.code
        );
    }
    Ok(())
}
