use crate::error::*;
use crate::util::*;
use std::io::prelude::*;

/// Write a 1D field as one `index, value` line per point.
/// `interval` gives the global index of each buffer entry.
pub fn write_csv_1d<P: AsRef<std::path::Path>>(
    buffer: &[f64],
    interval: &Interval,
    path: &P,
) -> Result<()> {
    tracing::info!(path = ?path.as_ref(), "writing csv");
    let output = std::fs::File::create(path)?;
    write_csv_1d_to(buffer, interval, std::io::BufWriter::new(output))
}

pub fn write_csv_1d_to<W: Write>(
    buffer: &[f64],
    interval: &Interval,
    mut output: W,
) -> Result<()> {
    if buffer.len() != interval.buffer_size() {
        return Err(HeatError::invalid_geometry(format!(
            "buffer holds {} values, interval {} covers {}",
            buffer.len(),
            interval,
            interval.buffer_size()
        )));
    }
    for (i, r) in buffer.iter().enumerate() {
        writeln!(output, "{}, {r}", interval.linear_to_coord(i))?;
    }
    output.flush()?;
    Ok(())
}
