use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::body::json_body;
use crate::endpoints::query::BeaconAlleleRequest;

/// Descriptor of a Beacon, returned by `GET .`.
///
/// Every field is optional so that a partial descriptor still decodes.
/// Fields unknown to this client are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beacon {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Version of the Beacon API the service implements.
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub organization: Option<BeaconOrganization>,
    #[serde(default)]
    pub description: Option<String>,
    /// Version of the service itself.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub welcome_url: Option<String>,
    #[serde(default)]
    pub alternative_url: Option<String>,
    #[serde(default)]
    pub create_date_time: Option<String>,
    #[serde(default)]
    pub update_date_time: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub datasets: Vec<BeaconDataset>,
    /// Example queries the Beacon advertises.
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub sample_allele_requests: Vec<BeaconAlleleRequest>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub info: BTreeMap<String, String>,
}

impl Beacon {
    /// Reference assemblies served, from the datasets, without duplicates.
    pub fn assembly_ids(&self) -> Vec<&str> {
        let mut assemblies: Vec<&str> = Vec::new();
        for assembly in self
            .datasets
            .iter()
            .filter_map(|dataset| dataset.assembly_id.as_deref())
        {
            if !assemblies.contains(&assembly) {
                assemblies.push(assembly);
            }
        }
        assemblies
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconOrganization {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub welcome_url: Option<String>,
    #[serde(default)]
    pub contact_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub info: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconDataset {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assembly_id: Option<String>,
    #[serde(default)]
    pub create_date_time: Option<String>,
    #[serde(default)]
    pub update_date_time: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "crate::de::option_i64")]
    pub variant_count: Option<i64>,
    #[serde(default, deserialize_with = "crate::de::option_i64")]
    pub call_count: Option<i64>,
    #[serde(default, deserialize_with = "crate::de::option_i64")]
    pub sample_count: Option<i64>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default, deserialize_with = "crate::de::null_default")]
    pub info: BTreeMap<String, String>,
}

json_body!(Beacon);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beacon_deserialization() {
        let json = r#"{
            "id": "org.example.beacon",
            "name": "Example Beacon",
            "apiVersion": "0.3.0",
            "organization": {"id": "example", "name": "Example Org"},
            "datasets": [
                {"id": "d1", "assemblyId": "GRCh37", "variantCount": "1000"},
                {"id": "d2", "assemblyId": "GRCh38", "sampleCount": 12},
                {"id": "d3", "assemblyId": "GRCh37"}
            ],
            "sampleAlleleRequests": [
                {"referenceName": "1", "start": 100, "referenceBases": "A",
                 "alternateBases": "T", "assemblyId": "GRCh37"}
            ],
            "info": {"key": "value"}
        }"#;

        let beacon: Beacon = serde_json::from_str(json).unwrap();
        assert_eq!(beacon.id.as_deref(), Some("org.example.beacon"));
        assert_eq!(beacon.api_version.as_deref(), Some("0.3.0"));
        assert_eq!(
            beacon.organization.as_ref().and_then(|o| o.name.as_deref()),
            Some("Example Org")
        );
        assert_eq!(beacon.datasets.len(), 3);
        assert_eq!(beacon.datasets[0].variant_count, Some(1000));
        assert_eq!(beacon.datasets[1].sample_count, Some(12));
        assert_eq!(beacon.assembly_ids(), vec!["GRCh37", "GRCh38"]);
        assert_eq!(beacon.sample_allele_requests[0].start, Some(100));
        assert_eq!(beacon.info.get("key").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_null_lists_and_maps_decode_as_empty() {
        let json = r#"{
            "id": "b",
            "organization": {"id": "o", "info": null},
            "datasets": null,
            "sampleAlleleRequests": null,
            "info": null
        }"#;

        let beacon: Beacon = serde_json::from_str(json).unwrap();
        assert_eq!(beacon.id.as_deref(), Some("b"));
        assert!(beacon.datasets.is_empty());
        assert!(beacon.sample_allele_requests.is_empty());
        assert!(beacon.info.is_empty());
        assert!(beacon.organization.unwrap().info.is_empty());

        let dataset: BeaconDataset =
            serde_json::from_str(r#"{"id": "d1", "info": null, "callCount": null}"#).unwrap();
        assert!(dataset.info.is_empty());
        assert_eq!(dataset.call_count, None);
    }

    #[test]
    fn test_empty_descriptor_decodes() {
        let beacon: Beacon = serde_json::from_str("{}").unwrap();
        assert_eq!(beacon, Beacon::default());
    }
}
