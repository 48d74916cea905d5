use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyStatus {
    pub configured: bool,
    /// First characters of the key followed by `...`, or `Not set`.
    pub key_preview: String,
}
