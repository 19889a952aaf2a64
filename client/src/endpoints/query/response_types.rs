use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::BeaconAlleleRequest;
use crate::body::json_body;

/// Response of `GET query` and `POST query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconAlleleResponse {
    #[serde(default)]
    pub beacon_id: Option<String>,
    /// Whether the allele was observed. Unset when the query failed.
    #[serde(default)]
    pub exists: Option<bool>,
    #[serde(default)]
    pub error: Option<BeaconError>,
    /// The query the Beacon answered, echoed back.
    #[serde(default)]
    pub allele_request: Option<BeaconAlleleRequest>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub dataset_allele_responses: Vec<BeaconDatasetAlleleResponse>,
}

impl BeaconAlleleResponse {
    /// Per-dataset response for the given dataset id, if the Beacon sent one.
    pub fn dataset(&self, dataset_id: &str) -> Option<&BeaconDatasetAlleleResponse> {
        self.dataset_allele_responses
            .iter()
            .find(|response| response.dataset_id.as_deref() == Some(dataset_id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconDatasetAlleleResponse {
    #[serde(default)]
    pub dataset_id: Option<String>,
    #[serde(default)]
    pub exists: Option<bool>,
    #[serde(default)]
    pub error: Option<BeaconError>,
    /// Frequency of the variant in the dataset, between 0 and 1.
    #[serde(default, deserialize_with = "crate::de::option_f64")]
    pub frequency: Option<f64>,
    #[serde(default, deserialize_with = "crate::de::option_i64")]
    pub variant_count: Option<i64>,
    #[serde(default, deserialize_with = "crate::de::option_i64")]
    pub call_count: Option<i64>,
    #[serde(default, deserialize_with = "crate::de::option_i64")]
    pub sample_count: Option<i64>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub info: BTreeMap<String, String>,
}

/// An error reported by the Beacon inside an otherwise well-formed response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconError {
    #[serde(default, deserialize_with = "crate::de::option_i32")]
    pub error_code: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
}

json_body!(BeaconAlleleResponse);
