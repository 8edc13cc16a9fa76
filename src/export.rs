//! Writers for decoded output.
//!
//! Two plain-text shapes: a `sensor,x,y,t` CSV of collated angles for
//! downstream tooling, and a one-line-per-group listing useful when eyeing
//! a decode by hand. Both write to any [`io::Write`]; the `_file` variants
//! add path context to failures.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{DecodeError, Result};
use crate::types::{LightGroup, SensorAngles};

/// Write per-sensor angle readings as `sensor,x,y,t` rows.
pub fn write_angles_csv<W: Write>(
    out: &mut W,
    readings: &BTreeMap<u8, SensorAngles>,
) -> io::Result<()> {
    for (sensor_id, angles) in readings {
        for i in 0..angles.len() {
            writeln!(out, "{},{},{},{}", sensor_id, angles.x[i], angles.y[i], angles.t[i])?;
        }
    }
    Ok(())
}

/// Write the angle CSV to a file path.
pub fn write_angles_csv_file<P: AsRef<Path>>(
    path: P,
    readings: &BTreeMap<u8, SensorAngles>,
) -> Result<()> {
    let path = path.as_ref();
    info!(path = %path.display(), sensors = readings.len(), "writing angle csv");

    let wrap = |e| DecodeError::file_error(path.to_path_buf(), e);
    let mut out = BufWriter::new(File::create(path).map_err(wrap)?);
    write_angles_csv(&mut out, readings).map_err(wrap)?;
    out.flush().map_err(wrap)
}

/// Write a one-line-per-group listing under a title.
pub fn write_groups<W: Write>(out: &mut W, title: &str, groups: &[LightGroup]) -> io::Result<()> {
    writeln!(out, "{} ({} groups)", title, groups.len())?;
    for group in groups {
        writeln!(out, "  {group}")?;
    }
    Ok(())
}

/// Write the group listing to a file path.
pub fn write_groups_file<P: AsRef<Path>>(
    path: P,
    title: &str,
    groups: &[LightGroup],
) -> Result<()> {
    let path = path.as_ref();
    info!(path = %path.display(), groups = groups.len(), "writing group listing");

    let wrap = |e| DecodeError::file_error(path.to_path_buf(), e);
    let mut out = BufWriter::new(File::create(path).map_err(wrap)?);
    write_groups(&mut out, title, groups).map_err(wrap)?;
    out.flush().map_err(wrap)
}
