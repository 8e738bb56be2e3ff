use crate::domain::model::{Record, MISSING_VALUE};
use crate::utils::error::{EtlError, Result};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const HEADER: [&str; 2] = ["Name", "Price"];

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// The two cells written for a record. An absent name renders empty.
fn row(record: &Record) -> [String; 2] {
    let name = record.name.clone().unwrap_or_default();
    let price = record
        .price()
        .map(|value| value.to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string());
    [name, price]
}

/// Plain `name,price` lines with no quoting or escaping.
pub fn write_plain<'a, W, I>(mut writer: W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    write!(writer, "{}{}", HEADER.join(","), LINE_ENDING)?;
    for record in records {
        let [name, price] = row(record);
        write!(writer, "{},{}{}", name, price, LINE_ENDING)?;
    }
    writer.flush()
}

/// RFC 4180 output: fields holding the delimiter, quotes or newlines are quoted.
pub fn write_quoted<'a, W, I>(writer: W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let terminator = if LINE_ENDING == "\r\n" {
        csv::Terminator::CRLF
    } else {
        csv::Terminator::Any(b'\n')
    };
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(terminator)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for record in records {
        csv_writer.write_record(row(record))?;
    }
    csv_writer.flush()
}

/// Replace `destination` with the header plus one row per record.
pub fn export(records: &[Record], destination: &Path, quote_fields: bool) -> Result<()> {
    tracing::debug!(
        "Writing {} rows to {} (quoted: {})",
        records.len(),
        destination.display(),
        quote_fields
    );

    write_atomically(destination, |writer| {
        if quote_fields {
            write_quoted(writer, records)
        } else {
            write_plain(writer, records)
        }
    })
}

/// Write into a temporary file beside `destination`, then rename it over
/// `destination`. If anything fails the destination keeps its old contents.
fn write_atomically<F>(destination: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let failed = |source: io::Error| EtlError::WriteFailed {
        path: destination.display().to_string(),
        source,
    };

    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(failed)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer as &mut dyn Write).map_err(failed)?;
        writer.flush().map_err(failed)?;
    }

    temp.persist(destination).map_err(|e| failed(e.error))?;
    Ok(())
}
