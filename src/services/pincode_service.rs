use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::models::pincode::{PincodeLocation, PostalResponse};

/// Client for the public postal pincode API.
#[derive(Clone)]
pub struct PincodeService {
    base_url: String,
    client: Client,
}

impl PincodeService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Resolves state and district for `pincode`.
    ///
    /// `Ok(None)` covers every answer that is not a usable success: a non-2xx
    /// status, a `Status` other than `"Success"`, or an unreadable body.
    /// Only transport failures are errors.
    pub async fn lookup(&self, pincode: &str) -> Result<Option<PincodeLocation>> {
        let url = format!("{}/pincode/{}", self.base_url, pincode);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(%pincode, status = %response.status(), "pincode lookup returned error status");
            return Ok(None);
        }

        let body = response.bytes().await?;
        Ok(parse_lookup(&body))
    }
}

pub fn parse_lookup(body: &[u8]) -> Option<PincodeLocation> {
    let responses: Vec<PostalResponse> = match serde_json::from_slice(body) {
        Ok(r) => r,
        Err(e) => {
            debug!(error = %e, "malformed pincode lookup response");
            return None;
        }
    };

    let first = responses.into_iter().next()?;
    if first.Status != "Success" {
        return None;
    }

    let office = first.PostOffice?.into_iter().next()?;
    Some(PincodeLocation {
        state: office.State,
        district: office.District,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_takes_first_post_office() {
        let body = br#"[{"Message":"Number of pincode(s) found:2","Status":"Success","PostOffice":[
            {"Name":"Khairatabad","District":"Hyderabad","State":"Telangana"},
            {"Name":"Other","District":"Elsewhere","State":"Nowhere"}]}]"#;
        assert_eq!(
            parse_lookup(body),
            Some(PincodeLocation {
                state: "Telangana".into(),
                district: "Hyderabad".into(),
            })
        );
    }

    #[test]
    fn error_status_is_none() {
        let body = br#"[{"Message":"No records found","Status":"Error","PostOffice":null}]"#;
        assert_eq!(parse_lookup(body), None);
    }

    #[test]
    fn malformed_or_empty_is_none() {
        assert_eq!(parse_lookup(b"not json"), None);
        assert_eq!(parse_lookup(b"[]"), None);
        assert_eq!(parse_lookup(br#"{"Status":"Success"}"#), None);
        assert_eq!(parse_lookup(br#"[{"Status":"Success","PostOffice":[]}]"#), None);
    }
}
