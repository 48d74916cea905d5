use std::collections::BTreeMap;
use serde::Serialize;
use crate::structs::api::key_status::KeyStatus;

#[derive(Serialize, Debug, Clone)]
pub struct ApiStatusResponse {
    /// `configured` or `not_configured`.
    pub status: String,
    pub message: String,
    /// One entry per analysis kind plus `default`.
    pub keys: BTreeMap<String, KeyStatus>,
    pub recommendation: String,
}
