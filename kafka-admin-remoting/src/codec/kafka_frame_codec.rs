// Copyright 2026 The Kafka Admin Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use bytes::Buf;
use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;
use kafka_admin_error::KafkaAdminError;
use kafka_admin_error::ProtocolError;
use tokio_util::codec::Decoder;
use tokio_util::codec::Encoder;

/// Same default as the broker's `socket.request.max.bytes`.
pub const DEFAULT_MAX_FRAME_SIZE: usize = 100 * 1024 * 1024;

const SIZE_PREFIX_LEN: usize = 4;

/// Splits a byte stream into Kafka frames.
///
/// Every Kafka request and response is prefixed with its length as a
/// big-endian `i32`. Decoding yields the frame payload without the prefix;
/// encoding writes the prefix in front of the given payload.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KafkaFrameCodec {
    max_frame_size: usize,
}

impl Default for KafkaFrameCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl KafkaFrameCodec {
    pub fn new() -> Self {
        Self::with_max_frame_size(DEFAULT_MAX_FRAME_SIZE)
    }

    pub fn with_max_frame_size(max_frame_size: usize) -> Self {
        KafkaFrameCodec { max_frame_size }
    }
}

impl Decoder for KafkaFrameCodec {
    type Error = KafkaAdminError;
    type Item = BytesMut;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < SIZE_PREFIX_LEN {
            return Ok(None);
        }

        let size = i32::from_be_bytes([src[0], src[1], src[2], src[3]]);
        if size < 0 || size as usize > self.max_frame_size {
            return Err(ProtocolError::InvalidFrameSize {
                size: i64::from(size),
                max: self.max_frame_size,
            }
            .into());
        }

        let frame_len = SIZE_PREFIX_LEN + size as usize;
        if src.len() < frame_len {
            src.reserve(frame_len - src.len());
            return Ok(None);
        }

        src.advance(SIZE_PREFIX_LEN);
        Ok(Some(src.split_to(size as usize)))
    }
}

impl Encoder<Bytes> for KafkaFrameCodec {
    type Error = KafkaAdminError;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<(), Self::Error> {
        if item.len() > self.max_frame_size {
            return Err(ProtocolError::InvalidFrameSize {
                size: item.len() as i64,
                max: self.max_frame_size,
            }
            .into());
        }
        dst.reserve(SIZE_PREFIX_LEN + item.len());
        dst.put_i32(item.len() as i32);
        dst.put(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_handles_insufficient_data() {
        let mut decoder = KafkaFrameCodec::new();
        let mut src = BytesMut::from(&[0, 0, 0][..]);
        assert!(matches!(decoder.decode(&mut src), Ok(None)));
    }

    #[test]
    fn decode_waits_for_full_frame() {
        let mut decoder = KafkaFrameCodec::new();
        let mut src = BytesMut::from(&[0, 0, 0, 3, 1, 2][..]);
        assert!(matches!(decoder.decode(&mut src), Ok(None)));

        src.extend_from_slice(&[3, 9]);
        let frame = decoder.decode(&mut src).unwrap().unwrap();
        assert_eq!(&frame[..], &[1, 2, 3]);
        assert_eq!(&src[..], &[9]);
    }

    #[test]
    fn decode_rejects_negative_size() {
        let mut decoder = KafkaFrameCodec::new();
        let mut src = BytesMut::from(&[0xff, 0xff, 0xff, 0xff][..]);
        assert!(matches!(
            decoder.decode(&mut src),
            Err(KafkaAdminError::Protocol(ProtocolError::InvalidFrameSize { size: -1, .. }))
        ));
    }

    #[test]
    fn decode_rejects_oversized_frame() {
        let mut decoder = KafkaFrameCodec::with_max_frame_size(8);
        let mut src = BytesMut::from(&[0, 0, 0, 9][..]);
        assert!(decoder.decode(&mut src).is_err());
    }

    #[test]
    fn encode_writes_size_prefix() {
        let mut encoder = KafkaFrameCodec::new();
        let mut dst = BytesMut::new();
        encoder.encode(Bytes::from_static(b"abc"), &mut dst).unwrap();
        assert_eq!(&dst[..], &[0, 0, 0, 3, b'a', b'b', b'c']);
    }

    #[test]
    fn encode_handles_empty_payload() {
        let mut encoder = KafkaFrameCodec::new();
        let mut dst = BytesMut::new();
        encoder.encode(Bytes::new(), &mut dst).unwrap();
        assert_eq!(&dst[..], &[0, 0, 0, 0]);

        let mut decoder = KafkaFrameCodec::new();
        let frame = decoder.decode(&mut dst).unwrap().unwrap();
        assert!(frame.is_empty());
    }
}
