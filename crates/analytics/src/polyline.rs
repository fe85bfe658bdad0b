use std::{error, fmt};

use model::{EncodedPolyline, GeoPoint};

/// Coordinates are stored as integers of 1e-5 degrees.
const PRECISION: f64 = 1e5;
const CHUNK_OFFSET: u8 = 63;
const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION: u64 = 0x20;
/// Twelve chunks already hold 60 bits, more can not be a coordinate delta.
const MAX_SHIFT: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolylineError {
    /// The input ended inside a value or between latitude and longitude.
    Truncated { offset: usize },
    /// A byte outside of `'?'..='~'`.
    InvalidCharacter { offset: usize, byte: u8 },
    /// A value or running coordinate does not fit into 64 bits.
    Overflow { offset: usize },
}

impl error::Error for PolylineError {}

impl fmt::Display for PolylineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PolylineError::Truncated { offset } => {
                write!(f, "polyline truncated in value starting at byte {}", offset)
            }
            PolylineError::InvalidCharacter { offset, byte } => {
                write!(f, "invalid polyline byte 0x{:02x} at {}", byte, offset)
            }
            PolylineError::Overflow { offset } => {
                write!(f, "polyline value starting at byte {} overflows", offset)
            }
        }
    }
}

struct Decoder<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Decoder<'a> {
    fn new(encoded: &'a str) -> Self {
        Self {
            bytes: encoded.as_bytes(),
            position: 0,
        }
    }

    /// Reads one zig-zag encoded value. `Ok(None)` means the input is
    /// exhausted exactly at a value boundary.
    fn next_value(&mut self) -> Result<Option<i64>, PolylineError> {
        if self.position >= self.bytes.len() {
            return Ok(None);
        }
        let start = self.position;
        let mut result: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let byte = *self
                .bytes
                .get(self.position)
                .ok_or(PolylineError::Truncated { offset: start })?;
            if !(CHUNK_OFFSET..=b'~').contains(&byte) {
                return Err(PolylineError::InvalidCharacter {
                    offset: self.position,
                    byte,
                });
            }
            if shift >= MAX_SHIFT {
                return Err(PolylineError::Overflow { offset: start });
            }
            let chunk = u64::from(byte - CHUNK_OFFSET);
            result |= (chunk & CHUNK_MASK) << shift;
            shift += CHUNK_BITS;
            self.position += 1;
            if chunk < CONTINUATION {
                break;
            }
        }
        let value = (result >> 1) as i64;
        Ok(Some(if result & 1 != 0 { !value } else { value }))
    }

    fn next_delta_pair(&mut self) -> Result<Option<(i64, i64)>, PolylineError> {
        let start = self.position;
        let Some(latitude) = self.next_value()? else {
            return Ok(None);
        };
        match self.next_value()? {
            Some(longitude) => Ok(Some((latitude, longitude))),
            None => Err(PolylineError::Truncated { offset: start }),
        }
    }
}

/// Decodes up to the first malformed pair. Returns every complete point
/// before it and the reason decoding stopped, if it did not reach the end.
fn decode_prefix(encoded: &str) -> (Vec<GeoPoint>, Option<PolylineError>) {
    let mut decoder = Decoder::new(encoded);
    let mut points = Vec::new();
    let (mut latitude, mut longitude) = (0i64, 0i64);
    loop {
        let offset = decoder.position;
        let (delta_latitude, delta_longitude) = match decoder.next_delta_pair() {
            Ok(Some(deltas)) => deltas,
            Ok(None) => return (points, None),
            Err(why) => return (points, Some(why)),
        };
        match (
            latitude.checked_add(delta_latitude),
            longitude.checked_add(delta_longitude),
        ) {
            (Some(lat), Some(lng)) => {
                latitude = lat;
                longitude = lng;
            }
            _ => return (points, Some(PolylineError::Overflow { offset })),
        }
        points.push(GeoPoint::new(
            latitude as f64 / PRECISION,
            longitude as f64 / PRECISION,
        ));
    }
}

/// Decodes an encoded polyline into its points.
///
/// Malformed input never fails: decoding stops after the last complete
/// latitude/longitude pair and the points decoded so far are returned. Use
/// [`decode_strict`] to reject such input instead.
pub fn decode(encoded: &EncodedPolyline) -> Vec<GeoPoint> {
    let (points, error) = decode_prefix(encoded.as_str());
    if let Some(why) = error {
        log::warn!(
            "stopped decoding polyline after {} points: {}",
            points.len(),
            why
        );
    }
    points
}

/// Like [`decode`], but fails on truncated or otherwise malformed input.
pub fn decode_strict(encoded: &EncodedPolyline) -> Result<Vec<GeoPoint>, PolylineError> {
    match decode_prefix(encoded.as_str()) {
        (points, None) => Ok(points),
        (_, Some(why)) => Err(why),
    }
}

fn to_fixed(degrees: f64) -> i64 {
    (degrees * PRECISION).round() as i64
}

fn encode_value(delta: i64, encoded: &mut String) {
    let mut value = ((delta << 1) ^ (delta >> 63)) as u64;
    while value >= CONTINUATION {
        let chunk = (CONTINUATION | (value & CHUNK_MASK)) as u8 + CHUNK_OFFSET;
        encoded.push(char::from(chunk));
        value >>= CHUNK_BITS;
    }
    encoded.push(char::from(value as u8 + CHUNK_OFFSET));
}

/// Encodes points, rounding each coordinate to 1e-5 degrees.
pub fn encode(points: &[GeoPoint]) -> EncodedPolyline {
    let mut encoded = String::with_capacity(points.len() * 8);
    let (mut previous_latitude, mut previous_longitude) = (0i64, 0i64);
    for point in points {
        let latitude = to_fixed(point.latitude);
        let longitude = to_fixed(point.longitude);
        encode_value(latitude.wrapping_sub(previous_latitude), &mut encoded);
        encode_value(longitude.wrapping_sub(previous_longitude), &mut encoded);
        previous_latitude = latitude;
        previous_longitude = longitude;
    }
    EncodedPolyline::new(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The reference example of the encoded polyline algorithm.
    const REFERENCE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    fn reference_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(38.5, -120.2),
            GeoPoint::new(40.7, -120.95),
            GeoPoint::new(43.252, -126.453),
        ]
    }

    fn assert_close(actual: &[GeoPoint], expected: &[GeoPoint]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a.latitude - e.latitude).abs() <= 1e-5, "{:?} vs {:?}", a, e);
            assert!((a.longitude - e.longitude).abs() <= 1e-5, "{:?} vs {:?}", a, e);
        }
    }

    #[test]
    fn decodes_reference_polyline() {
        let points = decode(&EncodedPolyline::from(REFERENCE));
        assert_close(&points, &reference_points());
    }

    #[test]
    fn encodes_reference_polyline() {
        assert_eq!(encode(&reference_points()).as_str(), REFERENCE);
    }

    #[test]
    fn empty_polyline_has_no_points() {
        assert!(decode(&EncodedPolyline::default()).is_empty());
        assert_eq!(decode_strict(&EncodedPolyline::default()), Ok(vec![]));
        assert!(encode(&[]).is_empty());
    }

    #[test]
    fn decoding_is_deterministic() {
        let encoded = EncodedPolyline::from(REFERENCE);
        assert_eq!(decode(&encoded), decode(&encoded));
    }

    #[test]
    fn missing_longitude_keeps_complete_points() {
        // first point complete, second one only has its latitude
        let encoded = EncodedPolyline::from("_p~iF~ps|U_ulL");
        let points = decode(&encoded);
        assert_close(&points, &reference_points()[..1]);
        assert_eq!(
            decode_strict(&encoded),
            Err(PolylineError::Truncated { offset: 10 })
        );
    }

    #[test]
    fn truncated_chunk_keeps_complete_points() {
        // the last byte of the first longitude is missing
        let encoded = EncodedPolyline::from("_p~iF~ps|");
        assert!(decode(&encoded).is_empty());
        assert!(matches!(
            decode_strict(&encoded),
            Err(PolylineError::Truncated { .. })
        ));
    }

    #[test]
    fn invalid_characters_stop_decoding() {
        let encoded = EncodedPolyline::from("_p~iF~ps|U _ulLnnqC");
        assert_eq!(decode(&encoded).len(), 1);
        assert_eq!(
            decode_strict(&encoded),
            Err(PolylineError::InvalidCharacter {
                offset: 10,
                byte: b' '
            })
        );
    }

    #[test]
    fn endless_continuation_overflows() {
        let encoded = EncodedPolyline::from("~".repeat(20));
        assert!(decode(&encoded).is_empty());
        assert_eq!(
            decode_strict(&encoded),
            Err(PolylineError::Overflow { offset: 0 })
        );
    }

    #[test]
    fn round_trip_stays_within_precision() {
        let points = (0..200)
            .map(|i| {
                let i = i as f64;
                GeoPoint::new(-89.9 + i * 0.8991237, 179.9 - i * 1.7993451)
            })
            .collect::<Vec<_>>();
        let decoded = decode(&encode(&points));
        assert_close(&decoded, &points);
    }

    #[test]
    fn round_trip_of_small_negative_steps() {
        let points = vec![
            GeoPoint::new(-23.55052, -46.63331),
            GeoPoint::new(-23.55053, -46.63331),
            GeoPoint::new(-23.55053, -46.63330),
            GeoPoint::new(0.0, 0.0),
        ];
        assert_close(&decode(&encode(&points)), &points);
    }

    #[test]
    fn re_encoding_preserves_points() {
        let original = EncodedPolyline::from(REFERENCE);
        let decoded = decode(&original);
        assert_eq!(decode(&encode(&decoded)), decoded);
    }
}
