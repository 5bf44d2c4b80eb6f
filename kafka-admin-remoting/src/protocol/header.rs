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

use bytes::BufMut;
use kafka_admin_error::ProtocolError;

use super::wire::WireBufMut;
use super::wire::WireReader;

/// Request header v2
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeader {
    pub api_key: i16,
    pub api_version: i16,
    pub correlation_id: i32,
    pub client_id: Option<String>,
}

impl RequestHeader {
    pub fn encode<B: BufMut>(&self, dst: &mut B) {
        dst.put_i16(self.api_key);
        dst.put_i16(self.api_version);
        dst.put_i32(self.correlation_id);
        // client_id stays a classic nullable string even in header v2
        dst.put_nullable_string(self.client_id.as_deref());
        dst.put_empty_tagged_fields();
    }
}

/// Response header v1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeader {
    pub correlation_id: i32,
}

impl ResponseHeader {
    pub fn decode(reader: &mut WireReader) -> Result<Self, ProtocolError> {
        let correlation_id = reader.get_i32("correlation_id")?;
        reader.skip_tagged_fields("response_header")?;
        Ok(Self { correlation_id })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use bytes::BytesMut;

    use super::*;

    #[test]
    fn request_header_layout() {
        let header = RequestHeader {
            api_key: 50,
            api_version: 0,
            correlation_id: 7,
            client_id: Some("cli".to_string()),
        };
        let mut dst = BytesMut::new();
        header.encode(&mut dst);
        assert_eq!(&dst[..], &[0, 50, 0, 0, 0, 0, 0, 7, 0, 3, b'c', b'l', b'i', 0]);
    }

    #[test]
    fn response_header_decode() {
        let mut reader = WireReader::new(Bytes::from_static(&[0, 0, 1, 0, 0, 42]));
        let header = ResponseHeader::decode(&mut reader).unwrap();
        assert_eq!(header.correlation_id, 256);
        assert_eq!(reader.remaining(), 1);
    }
}
