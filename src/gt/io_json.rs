//! JSON reader and writer for ground-truth box files.
//!
//! The format is a plain JSON array of box records
//! (`[{"left": .., "top": .., "right": .., "bottom": .., "score": ..}]`),
//! useful for fixtures and for exchanging annotations with the CLI.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::GroundTruthSet;
use crate::error::BoxboundError;
use crate::geom::BBox;

/// Reads a ground-truth set from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_gt_json(path: &Path) -> Result<GroundTruthSet, BoxboundError> {
    let file = File::open(path).map_err(BoxboundError::Io)?;
    let reader = BufReader::new(file);

    let boxes: Vec<BBox> =
        serde_json::from_reader(reader).map_err(|source| BoxboundError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(GroundTruthSet::from_boxes(boxes))
}

/// Writes a ground-truth set to a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_gt_json(path: &Path, set: &GroundTruthSet) -> Result<(), BoxboundError> {
    let file = File::create(path).map_err(BoxboundError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, set.boxes()).map_err(|source| {
        BoxboundError::JsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Reads a ground-truth set from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_json_str(json: &str) -> Result<GroundTruthSet, serde_json::Error> {
    let boxes: Vec<BBox> = serde_json::from_str(json)?;
    Ok(GroundTruthSet::from_boxes(boxes))
}

/// Writes a ground-truth set to a JSON string.
///
/// Useful for testing without file I/O.
pub fn to_json_string(set: &GroundTruthSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(set.boxes())
}
