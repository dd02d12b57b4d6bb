//! Readers for input point records
//!
//! Two formats are supported: JSON lines (`{"id":..,"lat":..,"lon":..}` per
//! line) and CSV with `id,lat,lon` columns and an optional header row.

use crate::cluster::{Point, PointList};
use crate::error::InputError;
use clap::ValueEnum;
use csv::ReaderBuilder;
use std::io::BufRead;
use std::num::ParseFloatError;

/// Input record format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One JSON object per line
    Jsonl,
    /// `id,lat,lon` rows, header optional
    Csv,
}

/// Reads all points from `reader` in the given format
pub fn read_points<R: BufRead>(reader: R, format: InputFormat) -> Result<PointList, InputError> {
    match format {
        InputFormat::Jsonl => read_json_lines(reader),
        InputFormat::Csv => read_csv(reader),
    }
}

/// Reads one JSON point per line until end of stream
///
/// Any line that does not parse, blank lines and invalid UTF-8 included, aborts
/// with its 1-based line number.
pub fn read_json_lines<R: BufRead>(reader: R) -> Result<PointList, InputError> {
    let mut points = PointList::new();
    for (i, line) in reader.split(b'\n').enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let point = serde_json::from_slice::<Point>(&line)
            .map_err(|source| InputError::Malformed { line: i + 1, source })?;
        points.push(point);
    }
    Ok(points)
}

/// Reads `id,lat,lon` CSV records
///
/// The first row is treated as a header when neither its `lat` nor its `lon`
/// column is a number. Coordinates must be finite. Row numbers in errors are
/// 1-based and count the header.
pub fn read_csv<R: BufRead>(reader: R) -> Result<PointList, InputError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut points = PointList::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;

        if record.len() < 3 {
            return Err(InputError::MalformedCsv {
                row,
                reason: format!("expected 3 fields (id,lat,lon), found {}", record.len()),
            });
        }

        let lat = record[1].trim().parse::<f64>();
        let lon = record[2].trim().parse::<f64>();
        if row == 1 && lat.is_err() && lon.is_err() && !record[1].trim().is_empty() {
            // Header row
            continue;
        }

        let lat = coordinate(lat, "lat", &record[1], row)?;
        let lon = coordinate(lon, "lon", &record[2], row)?;

        points.push(Point::new(&record[0], lat, lon));
    }

    Ok(points)
}

fn coordinate(
    parsed: Result<f64, ParseFloatError>,
    name: &str,
    raw: &str,
    row: usize,
) -> Result<f64, InputError> {
    match parsed {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(InputError::MalformedCsv {
            row,
            reason: format!("{} {:?} is not a finite number", name, raw),
        }),
        Err(e) => Err(InputError::MalformedCsv {
            row,
            reason: format!("invalid {} {:?}: {}", name, raw, e),
        }),
    }
}
