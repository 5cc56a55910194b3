use serde::{Deserialize, Serialize};

/// The list of files constituting one version of a mini-app package.
/// Produced per (mini app id, version id) pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ManifestEntity {
    /// URLs of the files in the package.
    #[serde(rename = "manifest")]
    pub files: Vec<String>,
}
