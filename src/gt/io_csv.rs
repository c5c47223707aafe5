//! CSV reader and writer for ground-truth box files.
//!
//! One row per box with columns `left,top,right,bottom,score`, matching
//! the flat 5-values-per-box buffer layout used at setup time. A header
//! row is required on read and always written.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::GroundTruthSet;
use crate::error::BoxboundError;
use crate::geom::BBox;

/// A single row in the ground-truth CSV format.
#[derive(Debug, Serialize, Deserialize)]
struct GtRow {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    score: f64,
}

/// Reads a ground-truth set from a CSV file.
///
/// Coordinates are truncated to integers, matching the setup-buffer
/// decoding rules.
///
/// # Errors
/// Returns an error if the file cannot be read or a row fails to parse.
pub fn read_gt_csv(path: &Path) -> Result<GroundTruthSet, BoxboundError> {
    let file = File::open(path).map_err(BoxboundError::Io)?;
    let reader = BufReader::new(file);

    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut boxes = Vec::new();

    for result in csv_reader.deserialize() {
        let row: GtRow = result.map_err(|source| BoxboundError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        boxes.push(BBox {
            left: row.left as i32,
            top: row.top as i32,
            right: row.right as i32,
            bottom: row.bottom as i32,
            score: row.score,
        });
    }

    Ok(GroundTruthSet::from_boxes(boxes))
}

/// Writes a ground-truth set to a CSV file, one row per box in set order.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_gt_csv(path: &Path, set: &GroundTruthSet) -> Result<(), BoxboundError> {
    let file = File::create(path).map_err(BoxboundError::Io)?;
    let writer = BufWriter::new(file);

    let mut csv_writer = csv::Writer::from_writer(writer);
    for bbox in set.boxes() {
        let row = GtRow {
            left: f64::from(bbox.left),
            top: f64::from(bbox.top),
            right: f64::from(bbox.right),
            bottom: f64::from(bbox.bottom),
            score: bbox.score,
        };
        csv_writer
            .serialize(row)
            .map_err(|source| BoxboundError::CsvWrite {
                path: path.to_path_buf(),
                source,
            })?;
    }
    csv_writer.flush().map_err(BoxboundError::Io)?;

    Ok(())
}
