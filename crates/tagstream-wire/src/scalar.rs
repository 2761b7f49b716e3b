//! Payload encoders for the scalar kinds.
//!
//! Each writes payload bytes only — fixed-width big-endian or u32
//! length-prefixed. The tag byte is the dispatcher's job, never the
//! encoder's.
//!
//! | kind | payload |
//! |---|---|
//! | boolean | 1 byte, 0/1 |
//! | int64 | 8 bytes BE signed |
//! | float64 | 8 bytes BE IEEE-754 |
//! | string | u32 BE length + UTF-8 bytes |
//! | bytes | u32 BE length + raw bytes |
//! | null | empty |

use bytes::{BufMut, BytesMut};

use crate::error::{Result, WireError};

pub fn put_bool(dst: &mut BytesMut, v: bool) {
    dst.put_u8(u8::from(v));
}

pub fn put_i64(dst: &mut BytesMut, v: i64) {
    dst.put_i64(v);
}

pub fn put_f64(dst: &mut BytesMut, v: f64) {
    dst.put_f64(v);
}

/// u32 BE length prefix (UTF-8 byte count) followed by the UTF-8 bytes.
pub fn put_str(dst: &mut BytesMut, v: &str) -> Result<()> {
    put_bytes(dst, v.as_bytes())
}

/// u32 BE length prefix followed by the raw bytes.
pub fn put_bytes(dst: &mut BytesMut, v: &[u8]) -> Result<()> {
    let len =
        u32::try_from(v.len()).map_err(|_| WireError::PayloadTooLarge { size: v.len() })?;
    dst.reserve(4 + v.len());
    dst.put_u32(len);
    dst.put_slice(v);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_is_one_byte() {
        let mut dst = BytesMut::new();
        put_bool(&mut dst, true);
        put_bool(&mut dst, false);
        assert_eq!(dst.as_ref(), &[0x01, 0x00]);
    }

    #[test]
    fn i64_is_big_endian() {
        let mut dst = BytesMut::new();
        put_i64(&mut dst, 42);
        assert_eq!(dst.as_ref(), &[0, 0, 0, 0, 0, 0, 0, 0x2A]);

        dst.clear();
        put_i64(&mut dst, -1);
        assert_eq!(dst.as_ref(), &[0xFF; 8]);
    }

    #[test]
    fn f64_is_big_endian_ieee754() {
        let mut dst = BytesMut::new();
        put_f64(&mut dst, 2.5);
        assert_eq!(dst.as_ref(), &2.5f64.to_be_bytes());
    }

    #[test]
    fn string_prefix_counts_utf8_bytes() {
        let mut dst = BytesMut::new();
        put_str(&mut dst, "hé").unwrap();
        // 'h' is 1 byte, 'é' is 2 bytes in UTF-8.
        assert_eq!(&dst[..4], &[0, 0, 0, 3]);
        assert_eq!(&dst[4..], "hé".as_bytes());
    }

    #[test]
    fn bytes_prefix_equals_payload_length() {
        let payload = vec![0xAB; 300];
        let mut dst = BytesMut::new();
        put_bytes(&mut dst, &payload).unwrap();
        assert_eq!(&dst[..4], &300u32.to_be_bytes());
        assert_eq!(&dst[4..], payload.as_slice());
    }

    #[test]
    fn empty_string_and_bytes() {
        let mut dst = BytesMut::new();
        put_str(&mut dst, "").unwrap();
        put_bytes(&mut dst, b"").unwrap();
        assert_eq!(dst.as_ref(), &[0u8; 8]);
    }
}
