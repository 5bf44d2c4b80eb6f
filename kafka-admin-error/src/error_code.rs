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

//! Broker reported error codes

use std::fmt;

/// Error code reported by a broker, either for a whole response or for a
/// single record inside it.
///
/// The value is kept opaque: it is compared and displayed, never
/// re-interpreted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BrokerErrorCode(i16);

impl BrokerErrorCode {
    /// The code brokers use to signal success
    pub const NONE: BrokerErrorCode = BrokerErrorCode(0);

    #[inline]
    pub const fn new(code: i16) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn code(&self) -> i16 {
        self.0
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        self.0 != 0
    }
}

impl From<i16> for BrokerErrorCode {
    fn from(code: i16) -> Self {
        Self(code)
    }
}

impl fmt::Display for BrokerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_not_an_error() {
        assert!(!BrokerErrorCode::NONE.is_error());
        assert!(!BrokerErrorCode::default().is_error());
    }

    #[test]
    fn non_zero_is_an_error() {
        let code = BrokerErrorCode::from(91);
        assert!(code.is_error());
        assert_eq!(code.code(), 91);
        assert_eq!(code.to_string(), "91");
        assert_eq!(code, BrokerErrorCode::new(91));
    }
}
