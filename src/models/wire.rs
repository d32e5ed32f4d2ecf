//! Request/response shapes exchanged with the remote analysis service.
//!
//! This crate only produces and consumes these documents; the transport
//! itself lives in the (excluded) network layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::RatioContainer;

/// Outbound analysis request: the birth details the service reads the
/// element ratios from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub dob: NaiveDate,
    pub birth_time: String, // "HH:mm"
    pub gender: String,     // "male" | "female"
}

/// Outbound arrangement request: bead count, the full ratio document, and an
/// optional draft attachment (present only when the draft store's payload()
/// fits the size cap).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangeRequest {
    pub num_beads: usize,
    pub ratios: RatioContainer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<DraftAttachment>,
}

impl ArrangeRequest {
    /// `payload` is the (fingerprint, base64) pair from
    /// `DraftStore::payload()`; `None` simply omits the attachment.
    pub fn new(
        num_beads: usize,
        ratios: RatioContainer,
        payload: Option<(String, String)>,
    ) -> Self {
        Self {
            num_beads,
            ratios,
            attachment: payload.map(|(fingerprint, base64_content)| DraftAttachment {
                fingerprint,
                base64_content,
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftAttachment {
    /// Content digest used by the service for de-duplication only.
    pub fingerprint: String,
    pub base64_content: String,
}

/// Inbound analysis result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub analysis_text: String,
    pub ratios: RatioContainer,
}

/// Inbound arrangement result: an ordered "#RRGGBB" list.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrangeResponse {
    pub beads: Vec<String>,
}

/// One palette entry from the bead catalogue, used only to seed initial
/// bead colors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteBead {
    pub id: i64,
    pub color_hex: String,
}
