//! Data point serialization for backend bulk loaders.

use crate::interval::{render_timestamp, Timestamp};
use std::io::{self, Write};

/// Field value types carried by a data point.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Float(f64),
    Integer(i64),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Integer(v) => write!(f, "{v}"),
        }
    }
}

/// A simulated data point: timestamp plus ordered tag and field
/// columns. Column order is load-bearing; the serialized form omits
/// keys entirely.
#[derive(Debug, Clone)]
pub struct Point {
    pub timestamp: Timestamp,
    pub tag_keys: Vec<String>,
    pub tag_values: Vec<String>,
    pub field_keys: Vec<String>,
    pub field_values: Vec<FieldValue>,
}

/// Writes a data point to a byte stream in a backend's bulk-load
/// format. Output must be byte-for-byte stable across runs.
pub trait PointSerializer {
    fn serialize(&self, point: &Point, w: &mut dyn Write) -> io::Result<()>;
}

/// CSV serializer for the KQL backend's ingestion pipeline.
///
/// Emits one CSV record per point in two writes: the UTC timestamp
/// followed by the tag values (no trailing newline), then the field
/// values each preceded by a comma and a final newline. The comma in
/// front of the first field is the placeholder for the elided
/// measurement column in the fixed-width ingestion schema.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvSerializer;

impl PointSerializer for CsvSerializer {
    fn serialize(&self, point: &Point, w: &mut dyn Write) -> io::Result<()> {
        let mut buf = Vec::with_capacity(256);
        buf.extend_from_slice(render_timestamp(point.timestamp).as_bytes());
        for value in &point.tag_values {
            buf.push(b',');
            buf.extend_from_slice(value.as_bytes());
        }
        w.write_all(&buf)?;

        buf.clear();
        for value in &point.field_values {
            buf.push(b',');
            buf.extend_from_slice(value.to_string().as_bytes());
        }
        buf.push(b'\n');
        w.write_all(&buf)
    }
}
