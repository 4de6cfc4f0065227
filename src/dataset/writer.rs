use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::clusterer::Point;
use crate::dataset::DatasetError;

/// Emit `x,y,cluster_id` per point, one record per line
pub fn write_points<W: Write>(mut writer: W, points: &[Point]) -> Result<(), DatasetError> {
    for point in points {
        writeln!(writer, "{},{},{}", point.x, point.y, point.cluster_id)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_csv(path: impl AsRef<Path>, points: &[Point]) -> Result<(), DatasetError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| DatasetError::Create {
        path: path.display().to_string(),
        source,
    })?;

    write_points(BufWriter::new(file), points)
}
