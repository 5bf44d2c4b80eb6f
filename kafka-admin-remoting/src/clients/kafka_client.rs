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

use std::sync::atomic::AtomicI32;
use std::sync::atomic::Ordering;
use std::time::Duration;

use futures::SinkExt;
use futures::StreamExt;
use kafka_admin_error::KafkaAdminError;
use kafka_admin_error::KafkaAdminResult;
use kafka_admin_error::NetworkError;
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::debug;

use crate::codec::kafka_frame_codec::KafkaFrameCodec;
use crate::protocol::decode_response;
use crate::protocol::encode_request;
use crate::protocol::KafkaRequest;

/// Request/response client bound to a single broker.
///
/// Every [`invoke`](Self::invoke) opens a fresh connection, sends one
/// request and waits for its response. Admin commands issue one or two
/// requests per process, so there is no pooling.
#[derive(Debug)]
pub struct KafkaRemotingClient {
    broker_addr: String,
    client_id: String,
    timeout: Duration,
    correlation_id: AtomicI32,
}

impl KafkaRemotingClient {
    pub fn new(broker_addr: impl Into<String>, client_id: impl Into<String>, timeout: Duration) -> Self {
        Self {
            broker_addr: broker_addr.into(),
            client_id: client_id.into(),
            timeout,
            correlation_id: AtomicI32::new(0),
        }
    }

    #[inline]
    pub fn broker_addr(&self) -> &str {
        &self.broker_addr
    }

    #[inline]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    fn next_correlation_id(&self) -> i32 {
        self.correlation_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Sends `request` and decodes the matching response, bounded by the client timeout.
    pub async fn invoke<R: KafkaRequest>(&self, request: &R) -> KafkaAdminResult<R::Response> {
        let correlation_id = self.next_correlation_id();
        debug!(
            broker = %self.broker_addr,
            api = R::NAME,
            correlation_id,
            "sending request"
        );
        match tokio::time::timeout(self.timeout, self.exchange(request, correlation_id)).await {
            Ok(result) => result,
            Err(_) => Err(NetworkError::request_timeout(&self.broker_addr, self.timeout.as_millis() as u64).into()),
        }
    }

    async fn exchange<R: KafkaRequest>(&self, request: &R, correlation_id: i32) -> KafkaAdminResult<R::Response> {
        let stream = TcpStream::connect(self.broker_addr.as_str())
            .await
            .map_err(|e| NetworkError::connection_failed(&self.broker_addr, e.to_string()))?;
        let mut framed = Framed::new(stream, KafkaFrameCodec::new());

        let payload = encode_request(request, correlation_id, &self.client_id);
        framed.send(payload).await.map_err(|e| match e {
            KafkaAdminError::Io(e) => NetworkError::send_failed(&self.broker_addr, e.to_string()).into(),
            other => other,
        })?;

        let frame = match framed.next().await {
            Some(Ok(frame)) => frame,
            Some(Err(KafkaAdminError::Io(e))) => {
                return Err(NetworkError::receive_failed(&self.broker_addr, e.to_string()).into())
            }
            Some(Err(e)) => return Err(e),
            None => {
                return Err(NetworkError::ConnectionClosed {
                    addr: self.broker_addr.clone(),
                }
                .into())
            }
        };

        let response = decode_response::<R>(frame.freeze(), correlation_id)?;
        debug!(broker = %self.broker_addr, api = R::NAME, correlation_id, "received response");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use bytes::BufMut;
    use bytes::BytesMut;
    use kafka_admin_error::ProtocolError;
    use tokio::io::AsyncReadExt;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    use super::*;
    use crate::protocol::scram::AlterUserScramCredentialsRequest;
    use crate::protocol::wire::WireBufMut;

    /// Accepts one connection, reads one request and answers with an empty
    /// AlterUserScramCredentials response using `reply_correlation_id`, or the
    /// request's own id when `None`.
    async fn spawn_broker(reply_correlation_id: Option<i32>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let size = socket.read_i32().await.unwrap();
            let mut request = vec![0u8; size as usize];
            socket.read_exact(&mut request).await.unwrap();
            let api_key = i16::from_be_bytes([request[0], request[1]]);
            assert_eq!(api_key, 51);
            let correlation_id = i32::from_be_bytes([request[4], request[5], request[6], request[7]]);

            let mut body = BytesMut::new();
            body.put_i32(reply_correlation_id.unwrap_or(correlation_id));
            body.put_empty_tagged_fields();
            body.put_i32(0);
            body.put_compact_array_len(Some(0));
            body.put_empty_tagged_fields();

            socket.write_i32(body.len() as i32).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.flush().await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn invoke_round_trip_over_loopback() {
        let addr = spawn_broker(None).await;
        let client = KafkaRemotingClient::new(addr, "test-client", Duration::from_secs(5));
        let response = client.invoke(&AlterUserScramCredentialsRequest::default()).await.unwrap();
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn invoke_rejects_mismatched_correlation_id() {
        let addr = spawn_broker(Some(999)).await;
        let client = KafkaRemotingClient::new(addr, "test-client", Duration::from_secs(5));
        let result = client.invoke(&AlterUserScramCredentialsRequest::default()).await;
        assert!(matches!(
            result,
            Err(KafkaAdminError::Protocol(ProtocolError::CorrelationMismatch { actual: 999, .. }))
        ));
    }

    #[tokio::test]
    async fn invoke_reports_connection_failure() {
        // bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        let client = KafkaRemotingClient::new(addr, "test-client", Duration::from_secs(5));
        let result = client.invoke(&AlterUserScramCredentialsRequest::default()).await;
        assert!(matches!(
            result,
            Err(KafkaAdminError::Network(NetworkError::ConnectionFailed { .. }))
        ));
    }

    #[tokio::test]
    async fn invoke_times_out_on_silent_broker() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let client = KafkaRemotingClient::new(addr, "test-client", Duration::from_millis(100));
        let result = client.invoke(&AlterUserScramCredentialsRequest::default()).await;
        assert!(matches!(
            result,
            Err(KafkaAdminError::Network(NetworkError::RequestTimeout { timeout_ms: 100, .. }))
        ));
    }
}
