use std::borrow::Cow;

use bytes::Bytes;

use crate::error::TransportError;

/// How a response type is produced from the bytes of a successful response.
pub trait DecodeBody: Sized {
    fn decode(body: Bytes) -> Result<Self, TransportError>;
}

/// An opaque response body, handed back exactly as the server sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBody(pub Bytes);

impl RawBody {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The body as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl DecodeBody for RawBody {
    fn decode(body: Bytes) -> Result<Self, TransportError> {
        Ok(RawBody(body))
    }
}

/// Implements [`DecodeBody`] as JSON deserialization for the given types.
macro_rules! json_body {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::body::DecodeBody for $ty {
                fn decode(body: ::bytes::Bytes) -> Result<Self, $crate::error::TransportError> {
                    Ok(::serde_json::from_slice(&body)?)
                }
            }
        )+
    };
}

pub(crate) use json_body;
