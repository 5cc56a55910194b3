use serde::{Deserialize, Serialize};

/// Metadata describing one mini app, as returned by the backend listing
/// endpoints. Produced only by the backend; immutable once parsed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniAppInfo {
    pub id: String,

    pub display_name: String,

    /// URL of the mini app's icon.
    pub icon: String,

    /// The published version this metadata describes.
    pub version: Version,
}

/// One published version of a mini app.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Human-readable tag, e.g. `"1.2.0"`.
    pub version_tag: String,

    pub version_id: String,
}
