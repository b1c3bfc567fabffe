//! Response Envelope
//!
//! Every endpoint answers `{ success, data?, error? }`.

use serde::{Deserialize, Serialize};

use crate::error::{CrmError, CrmResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Success with optional payload, or the server's rejection.
    pub fn into_result(self) -> CrmResult<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(CrmError::Rejected(self.error))
        }
    }

    /// Like `into_result`, but a payload is mandatory.
    pub fn into_data(self) -> CrmResult<T> {
        self.into_result()?
            .ok_or_else(|| CrmError::Decode("response has success:true but no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_envelope_keeps_message() {
        let env: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"error":"Name is required"}"#).unwrap();
        match env.into_data() {
            Err(CrmError::Rejected(Some(msg))) => assert_eq!(msg, "Name is required"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_success_without_data() {
        let env: ApiEnvelope<Vec<u32>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(env.clone().into_result(), Ok(None)));
        assert!(matches!(env.into_data(), Err(CrmError::Decode(_))));
    }

    #[test]
    fn test_success_with_data() {
        let env: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3]}"#).unwrap();
        assert_eq!(env.into_data().unwrap(), vec![1, 2, 3]);
    }
}
