//! E-filing DTOs
//!
//! The wire format uses camelCase field names. Identifiers travel as bare
//! UUID strings, without the display prefix.

use serde::{Deserialize, Serialize};

use core_kernel::{CaseId, FilingAccountId};

/// Request body for the e-filing endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfilingRequest {
    pub case_id: CaseId,
    pub account_id: FilingAccountId,
    /// Accepted for client compatibility; the filing runner does not read it
    #[serde(default)]
    pub package_uri: Option<String>,
}

/// Response body for a completed filing run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EfilingResponse {
    pub success: bool,
    pub receipt_number: String,
    pub confirmation_url: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_camel_case() {
        let case_id = CaseId::new();
        let account_id = FilingAccountId::new();
        let body = json!({
            "caseId": case_id.as_uuid(),
            "accountId": account_id.as_uuid(),
            "packageUri": "s3://packages/i-130.zip",
        });

        let request: EfilingRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.case_id, case_id);
        assert_eq!(request.account_id, account_id);
        assert_eq!(
            request.package_uri.as_deref(),
            Some("s3://packages/i-130.zip")
        );
    }

    #[test]
    fn test_request_package_uri_is_optional() {
        let body = json!({
            "caseId": CaseId::new().as_uuid(),
            "accountId": FilingAccountId::new().as_uuid(),
        });

        let request: EfilingRequest = serde_json::from_value(body).unwrap();
        assert!(request.package_uri.is_none());
    }

    #[test]
    fn test_request_rejects_missing_account() {
        let body = json!({ "caseId": CaseId::new().as_uuid() });

        let result: Result<EfilingRequest, _> = serde_json::from_value(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = EfilingResponse {
            success: true,
            receipt_number: "MSC2345678901".to_string(),
            confirmation_url: "uscis_receipts/x/confirmation_MSC2345678901.pdf".to_string(),
            message: "E-filing completed successfully".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["receiptNumber"], "MSC2345678901");
        assert!(value["confirmationUrl"]
            .as_str()
            .unwrap()
            .starts_with("uscis_receipts/"));
        assert_eq!(value["message"], "E-filing completed successfully");
    }
}
