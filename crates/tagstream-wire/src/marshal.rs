//! Extension blob rendering for [`TileRecord`].
//!
//! The fixed wire schema covers only the declared fields; the extension blob
//! carries whatever else the producing side wants the reader to preserve.
//! The blob's byte format is owned by the marshal implementation, not by
//! this wire format — the record encoder only length-prefixes it.

use bytes::Bytes;

use crate::error::Result;
use crate::record::TileRecord;

/// Whole-record serialization capability injected into record encoders.
pub trait ExtensionMarshal: Send + Sync {
    /// Render the whole record into an opaque blob.
    fn marshal(&self, record: &TileRecord) -> Result<Bytes>;
}

/// Emits a zero-length blob, for readers that ignore extension data.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyMarshal;

impl ExtensionMarshal for EmptyMarshal {
    fn marshal(&self, _record: &TileRecord) -> Result<Bytes> {
        Ok(Bytes::new())
    }
}

/// Renders the record as JSON.
///
/// A stable, cross-language substitute for runtime-specific object-graph
/// serializers: any reader with a JSON parser can recover the extension
/// fields without sharing a runtime with the producer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMarshal;

impl ExtensionMarshal for JsonMarshal {
    fn marshal(&self, record: &TileRecord) -> Result<Bytes> {
        Ok(serde_json::to_vec(record)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_marshal_yields_no_bytes() {
        let blob = EmptyMarshal.marshal(&TileRecord::default()).unwrap();
        assert!(blob.is_empty());
    }

    #[test]
    fn json_marshal_round_trips_through_serde() {
        let record = TileRecord {
            acquisition_date: "2015-03-02".to_owned(),
            band: 4,
            path_row: "194/026".to_owned(),
            ..TileRecord::default()
        };
        let blob = JsonMarshal.marshal(&record).unwrap();
        let parsed: TileRecord = serde_json::from_slice(&blob).unwrap();
        assert_eq!(parsed, record);
    }
}
