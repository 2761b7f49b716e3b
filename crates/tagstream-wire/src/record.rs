//! The fixed-shape geospatial tile record.

use bytes::{Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::marshal::ExtensionMarshal;
use crate::scalar::{put_bytes, put_f64, put_i64, put_str};

/// A satellite image tile: fixed scalar metadata plus raw band content.
///
/// Field order is normative — the wire payload writes the fields in
/// declaration order, then a u32-length-prefixed extension blob covering the
/// whole record. Construction and validation of the business fields happen
/// upstream; this crate only moves them onto the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TileRecord {
    pub acquisition_date: String,
    pub band: i64,
    pub left_upper_lon: f64,
    pub left_upper_lat: f64,
    pub right_lower_lon: f64,
    pub right_lower_lat: f64,
    pub path_row: String,
    pub height: i64,
    pub width: i64,
    pub x_pixel_size: f64,
    pub y_pixel_size: f64,
    #[serde(default)]
    pub content: Bytes,
}

/// Encode the record payload: the fixed fields in order, then the extension
/// blob produced by `marshal` applied to the whole record.
///
/// No tag byte is written here; tagging is the dispatcher's job at the top
/// level.
pub fn encode_record(
    record: &TileRecord,
    marshal: &dyn ExtensionMarshal,
    dst: &mut BytesMut,
) -> Result<()> {
    put_str(dst, &record.acquisition_date)?;
    put_i64(dst, record.band);
    put_f64(dst, record.left_upper_lon);
    put_f64(dst, record.left_upper_lat);
    put_f64(dst, record.right_lower_lon);
    put_f64(dst, record.right_lower_lat);
    put_str(dst, &record.path_row)?;
    put_i64(dst, record.height);
    put_i64(dst, record.width);
    put_f64(dst, record.x_pixel_size);
    put_f64(dst, record.y_pixel_size);
    put_bytes(dst, &record.content)?;
    let blob = marshal.marshal(record)?;
    put_bytes(dst, &blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marshal::{EmptyMarshal, JsonMarshal};

    fn sample() -> TileRecord {
        TileRecord {
            acquisition_date: "2015-03-02".to_owned(),
            band: 4,
            left_upper_lon: 10.5,
            left_upper_lat: 48.25,
            right_lower_lon: 11.0,
            right_lower_lat: 47.75,
            path_row: "194/026".to_owned(),
            height: 2,
            width: 3,
            x_pixel_size: 30.0,
            y_pixel_size: 30.0,
            content: Bytes::from_static(&[1, 2, 3, 4, 5, 6]),
        }
    }

    #[test]
    fn fields_are_written_in_declared_order() {
        let record = sample();
        let mut dst = BytesMut::new();
        encode_record(&record, &EmptyMarshal, &mut dst).unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(&10u32.to_be_bytes());
        expected.extend_from_slice(b"2015-03-02");
        expected.extend_from_slice(&4i64.to_be_bytes());
        expected.extend_from_slice(&10.5f64.to_be_bytes());
        expected.extend_from_slice(&48.25f64.to_be_bytes());
        expected.extend_from_slice(&11.0f64.to_be_bytes());
        expected.extend_from_slice(&47.75f64.to_be_bytes());
        expected.extend_from_slice(&7u32.to_be_bytes());
        expected.extend_from_slice(b"194/026");
        expected.extend_from_slice(&2i64.to_be_bytes());
        expected.extend_from_slice(&3i64.to_be_bytes());
        expected.extend_from_slice(&30.0f64.to_be_bytes());
        expected.extend_from_slice(&30.0f64.to_be_bytes());
        expected.extend_from_slice(&6u32.to_be_bytes());
        expected.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        // EmptyMarshal: zero-length extension blob.
        expected.extend_from_slice(&0u32.to_be_bytes());

        assert_eq!(dst.as_ref(), expected.as_slice());
    }

    #[test]
    fn extension_blob_is_length_prefixed() {
        let record = sample();
        let mut dst = BytesMut::new();
        encode_record(&record, &JsonMarshal, &mut dst).unwrap();

        let blob = JsonMarshal.marshal(&record).unwrap();
        let tail = &dst[dst.len() - blob.len() - 4..];
        assert_eq!(&tail[..4], (blob.len() as u32).to_be_bytes());
        assert_eq!(&tail[4..], blob.as_ref());
    }
}
