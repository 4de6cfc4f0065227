use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use crate::clusterer::Point;
use crate::dataset::DatasetError;

/// Parse the first two comma-separated fields of a row.
///
/// Anything after the second field (e.g. a stale cluster id) is ignored.
/// NaN and infinite coordinates are rejected.
pub fn parse_line(line: &str) -> Option<Point> {
    let mut fields = line.split(',').map(str::trim);
    let x = parse_coord(fields.next()?)?;
    let y = parse_coord(fields.next()?)?;
    Some(Point::new(x, y))
}

fn parse_coord(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Read up to `limit` points, one per line. Malformed rows are skipped.
pub fn read_points<R: BufRead>(
    reader: R,
    limit: Option<usize>,
) -> Result<Vec<Point>, DatasetError> {
    let limit = limit.unwrap_or(usize::MAX);
    let mut points = Vec::new();

    for (line_no, raw) in reader.split(b'\n').enumerate() {
        if points.len() >= limit {
            break;
        }

        let raw = raw?;
        let Ok(line) = std::str::from_utf8(&raw) else {
            warn!(line = line_no + 1, "skipping row that is not valid UTF-8");
            continue;
        };
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(point) => points.push(point),
            None => warn!(line = line_no + 1, "skipping malformed row: {:?}", line),
        }
    }

    Ok(points)
}

pub fn load_csv(path: impl AsRef<Path>, limit: Option<usize>) -> Result<Vec<Point>, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let points = read_points(BufReader::new(file), limit)?;
    if points.is_empty() {
        return Err(DatasetError::Empty(path.display().to_string()));
    }

    debug!(points = points.len(), path = %path.display(), "dataset loaded");
    Ok(points)
}
