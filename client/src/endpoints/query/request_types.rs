use serde::{Deserialize, Serialize};

/// An allele query: does any dataset of the Beacon hold this variant?
///
/// Every field may be left unset. The client does no validation, unset fields
/// are simply left out of the query string or the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconAlleleRequest {
    /// Chromosome, e.g. `1`, `X`, `MT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,
    /// 0-based position on the chromosome.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::option_i64"
    )]
    pub start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_bases: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_bases: Option<String>,
    /// Reference assembly, e.g. `GRCh37`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly_id: Option<String>,
    /// Datasets to restrict the query to. Empty means all of them.
    #[serde(
        default,
        deserialize_with = "crate::de::null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dataset_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_dataset_responses: Option<bool>,
}

impl BeaconAlleleRequest {
    /// Creates a new builder for constructing a BeaconAlleleRequest.
    pub fn builder() -> BeaconAlleleRequestBuilder {
        BeaconAlleleRequestBuilder::default()
    }

    /// The URL query pairs for a GET query.
    ///
    /// Unset fields produce no pair at all and every dataset id repeats the
    /// `datasetIds` key, keeping the order of the list.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(reference_name) = &self.reference_name {
            pairs.push(("referenceName", reference_name.clone()));
        }
        if let Some(start) = self.start {
            pairs.push(("start", start.to_string()));
        }
        if let Some(reference_bases) = &self.reference_bases {
            pairs.push(("referenceBases", reference_bases.clone()));
        }
        if let Some(alternate_bases) = &self.alternate_bases {
            pairs.push(("alternateBases", alternate_bases.clone()));
        }
        if let Some(assembly_id) = &self.assembly_id {
            pairs.push(("assemblyId", assembly_id.clone()));
        }
        for dataset_id in &self.dataset_ids {
            pairs.push(("datasetIds", dataset_id.clone()));
        }
        if let Some(include) = self.include_dataset_responses {
            pairs.push(("includeDatasetResponses", include.to_string()));
        }

        pairs
    }
}

/// Builder for constructing BeaconAlleleRequest instances.
///
/// Provides a fluent interface; nothing is required.
#[derive(Debug, Clone, Default)]
pub struct BeaconAlleleRequestBuilder {
    request: BeaconAlleleRequest,
}

impl BeaconAlleleRequestBuilder {
    pub fn reference_name<S: Into<String>>(mut self, reference_name: S) -> Self {
        self.request.reference_name = Some(reference_name.into());
        self
    }

    pub fn start(mut self, start: i64) -> Self {
        self.request.start = Some(start);
        self
    }

    pub fn reference_bases<S: Into<String>>(mut self, reference_bases: S) -> Self {
        self.request.reference_bases = Some(reference_bases.into());
        self
    }

    pub fn alternate_bases<S: Into<String>>(mut self, alternate_bases: S) -> Self {
        self.request.alternate_bases = Some(alternate_bases.into());
        self
    }

    pub fn assembly_id<S: Into<String>>(mut self, assembly_id: S) -> Self {
        self.request.assembly_id = Some(assembly_id.into());
        self
    }

    /// Adds one dataset id to the end of the list.
    pub fn dataset_id<S: Into<String>>(mut self, dataset_id: S) -> Self {
        self.request.dataset_ids.push(dataset_id.into());
        self
    }

    /// Adds several dataset ids, keeping their order.
    pub fn dataset_ids<I, S>(mut self, dataset_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request
            .dataset_ids
            .extend(dataset_ids.into_iter().map(Into::into));
        self
    }

    pub fn include_dataset_responses<T: Into<Option<bool>>>(mut self, include: T) -> Self {
        self.request.include_dataset_responses = include.into();
        self
    }

    /// Builds the request.
    pub fn build(self) -> BeaconAlleleRequest {
        self.request
    }
}
