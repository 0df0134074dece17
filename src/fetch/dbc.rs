//! DBC container handling.
//!
//! DataSUS distributes SIH files as `.dbc`: a 10-byte pre-header, the
//! uncompressed DBF header, a 4-byte CRC32, then the DBF records compressed
//! with PKWare implode. Decompression chains the pre-header, header and an
//! `ExplodeReader` over the rest back into a plain DBF stream.

use std::io::{Chain, Cursor, Read, Seek};

use dbase::FieldValue;
use explode::ExplodeReader;

use crate::errors::{ExtractError, ExtractResult};
use crate::models::batch::RecordBatch;

/// A DBF reader chaining pre-header, header, and decompressed content
type DbfReader<R> = Chain<Chain<Cursor<[u8; 10]>, Cursor<Vec<u8>>>, ExplodeReader<R>>;

/// dbase surfaces the record deletion flag as a synthetic first field;
/// it is not a provider column and must not reach the CSV header.
const DELETION_FLAG_FIELD: &str = "DeletionFlag";

/// Turn a DBC reader into a streaming DBF reader.
pub fn dbc_to_dbf_reader<R: Read>(mut dbc: R) -> ExtractResult<DbfReader<R>> {
    let mut pre_header: [u8; 10] = Default::default();
    dbc.read_exact(&mut pre_header)
        .map_err(|_| ExtractError::Dbc("missing or truncated DBC pre-header".to_string()))?;

    // Header size lives in bytes 8-9, little-endian, and counts the
    // pre-header itself.
    let header_size = usize::from(pre_header[8]) + (usize::from(pre_header[9]) << 8);
    if header_size < 10 {
        return Err(ExtractError::Dbc(format!(
            "invalid header size: {header_size} (must be >= 10)"
        )));
    }

    let mut header: Vec<u8> = vec![0; header_size - 10];
    dbc.read_exact(&mut header)
        .map_err(|_| ExtractError::Dbc("truncated DBC header".to_string()))?;

    // 4-byte CRC32 of the compressed payload; not validated.
    let mut _crc32: [u8; 4] = Default::default();
    dbc.read_exact(&mut _crc32)
        .map_err(|_| ExtractError::Dbc("missing CRC32 in DBC file".to_string()))?;

    let reader = Read::chain(
        Read::chain(Cursor::new(pre_header), Cursor::new(header)),
        ExplodeReader::new(dbc),
    );
    Ok(reader)
}

/// Fully decompress a DBC stream into DBF bytes.
pub fn decompress_dbc<R: Read>(dbc: R) -> ExtractResult<Vec<u8>> {
    let mut reader = dbc_to_dbf_reader(dbc)?;
    let mut dbf = Vec::new();
    reader.read_to_end(&mut dbf)?;
    Ok(dbf)
}

/// Read a whole DBF stream into a string-typed batch, preserving field
/// order and row order.
pub fn read_dbf_batch<R: Read + Seek>(source: R) -> ExtractResult<RecordBatch> {
    let mut reader = dbase::Reader::new(source)?;

    let columns: Vec<String> = reader
        .fields()
        .iter()
        .map(|field| field.name().to_string())
        .filter(|name| name != DELETION_FLAG_FIELD)
        .collect();

    let mut rows = Vec::new();
    for record in reader.iter_records() {
        let record = record?;
        let row = columns
            .iter()
            .map(|name| {
                record
                    .get(name)
                    .map(field_value_to_string)
                    .unwrap_or_default()
            })
            .collect();
        rows.push(row);
    }

    Ok(RecordBatch::new(columns, rows))
}

fn field_value_to_string(value: &FieldValue) -> String {
    match value {
        FieldValue::Character(opt) => opt.clone().unwrap_or_default(),
        FieldValue::Memo(text) => text.clone(),
        FieldValue::Numeric(opt) => opt.map(format_float).unwrap_or_default(),
        FieldValue::Float(opt) => opt.map(|v| format_float(f64::from(v))).unwrap_or_default(),
        FieldValue::Double(v) => format_float(*v),
        FieldValue::Currency(v) => format_float(*v),
        FieldValue::Integer(v) => v.to_string(),
        FieldValue::Logical(opt) => opt
            .map(|b| if b { "T" } else { "F" }.to_string())
            .unwrap_or_default(),
        FieldValue::Date(opt) => opt
            .as_ref()
            .map(|d| format!("{:04}-{:02}-{:02}", d.year(), d.month(), d.day()))
            .unwrap_or_default(),
        FieldValue::DateTime(dt) => {
            let date = dt.date();
            let time = dt.time();
            format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                date.year(),
                date.month(),
                date.day(),
                time.hours(),
                time.minutes(),
                time.seconds()
            )
        }
    }
}

/// Integral floats print without a trailing `.0` so numeric DBF fields
/// round-trip to CSV the way they look in the source file.
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
