use serde::{Deserialize, Serialize};

/// State and district resolved from a pincode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PincodeLocation {
    pub state: String,
    pub district: String,
}

/// One element of the postal API's top-level array.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct PostalResponse {
    pub Status: String,
    #[serde(default)]
    pub PostOffice: Option<Vec<PostOffice>>,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct PostOffice {
    pub State: String,
    pub District: String,
}
