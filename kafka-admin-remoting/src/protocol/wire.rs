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

//! Primitive Kafka field encodings

use bytes::Buf;
use bytes::BufMut;
use bytes::Bytes;
use kafka_admin_error::ProtocolError;

const MAX_VARINT_BYTES: u32 = 5;

/// Writers for the Kafka primitive types used by flexible message versions.
pub trait WireBufMut: BufMut {
    fn put_unsigned_varint(&mut self, mut value: u32) {
        while value >= 0x80 {
            self.put_u8(((value & 0x7f) as u8) | 0x80);
            value >>= 7;
        }
        self.put_u8(value as u8);
    }

    /// `NULLABLE_STRING`: i16 length, -1 for null. Only used by the request header.
    fn put_nullable_string(&mut self, value: Option<&str>) {
        match value {
            Some(value) => {
                self.put_i16(value.len() as i16);
                self.put_slice(value.as_bytes());
            }
            None => self.put_i16(-1),
        }
    }

    fn put_compact_string(&mut self, value: &str) {
        self.put_compact_bytes(value.as_bytes());
    }

    fn put_compact_bytes(&mut self, value: &[u8]) {
        self.put_unsigned_varint(value.len() as u32 + 1);
        self.put_slice(value);
    }

    /// Compact array length prefix, `None` encodes a null array.
    fn put_compact_array_len(&mut self, len: Option<usize>) {
        match len {
            Some(len) => self.put_unsigned_varint(len as u32 + 1),
            None => self.put_unsigned_varint(0),
        }
    }

    fn put_empty_tagged_fields(&mut self) {
        self.put_unsigned_varint(0);
    }
}

impl<B: BufMut + ?Sized> WireBufMut for B {}

/// Bounds-checked reader over a response payload.
#[derive(Debug)]
pub struct WireReader {
    buf: Bytes,
}

impl WireReader {
    pub fn new(buf: Bytes) -> Self {
        Self { buf }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn ensure(&self, field: &'static str, needed: usize) -> Result<(), ProtocolError> {
        if self.buf.remaining() < needed {
            return Err(ProtocolError::truncated(field, needed, self.buf.remaining()));
        }
        Ok(())
    }

    pub fn get_i8(&mut self, field: &'static str) -> Result<i8, ProtocolError> {
        self.ensure(field, 1)?;
        Ok(self.buf.get_i8())
    }

    pub fn get_i16(&mut self, field: &'static str) -> Result<i16, ProtocolError> {
        self.ensure(field, 2)?;
        Ok(self.buf.get_i16())
    }

    pub fn get_i32(&mut self, field: &'static str) -> Result<i32, ProtocolError> {
        self.ensure(field, 4)?;
        Ok(self.buf.get_i32())
    }

    pub fn get_unsigned_varint(&mut self, field: &'static str) -> Result<u32, ProtocolError> {
        let mut value = 0u32;
        for shift in 0..MAX_VARINT_BYTES {
            self.ensure(field, 1)?;
            let byte = self.buf.get_u8();
            value |= u32::from(byte & 0x7f) << (7 * shift);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(ProtocolError::MalformedVarint { field })
    }

    pub fn get_compact_nullable_bytes(&mut self, field: &'static str) -> Result<Option<Bytes>, ProtocolError> {
        let len = self.get_unsigned_varint(field)? as usize;
        if len == 0 {
            return Ok(None);
        }
        self.ensure(field, len - 1)?;
        Ok(Some(self.buf.split_to(len - 1)))
    }

    pub fn get_compact_nullable_string(&mut self, field: &'static str) -> Result<Option<String>, ProtocolError> {
        match self.get_compact_nullable_bytes(field)? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|_| ProtocolError::InvalidString { field }),
            None => Ok(None),
        }
    }

    pub fn get_compact_string(&mut self, field: &'static str) -> Result<String, ProtocolError> {
        self.get_compact_nullable_string(field)?
            .ok_or(ProtocolError::UnexpectedNull { field })
    }

    /// Compact array length, `None` for a null array.
    pub fn get_compact_array_len(&mut self, field: &'static str) -> Result<Option<usize>, ProtocolError> {
        let len = self.get_unsigned_varint(field)? as usize;
        Ok(len.checked_sub(1))
    }

    /// Reads a compact array, treating null as empty.
    pub fn get_compact_array<T>(
        &mut self,
        field: &'static str,
        mut read_element: impl FnMut(&mut Self) -> Result<T, ProtocolError>,
    ) -> Result<Vec<T>, ProtocolError> {
        let Some(len) = self.get_compact_array_len(field)? else {
            return Ok(Vec::new());
        };
        // every element takes at least one byte
        self.ensure(field, len)?;
        let mut elements = Vec::with_capacity(len);
        for _ in 0..len {
            elements.push(read_element(self)?);
        }
        Ok(elements)
    }

    /// Skips the tagged field section; none of the tags are interpreted.
    pub fn skip_tagged_fields(&mut self, field: &'static str) -> Result<(), ProtocolError> {
        let count = self.get_unsigned_varint(field)?;
        for _ in 0..count {
            let _tag = self.get_unsigned_varint(field)?;
            let size = self.get_unsigned_varint(field)? as usize;
            self.ensure(field, size)?;
            self.buf.advance(size);
        }
        Ok(())
    }
}
