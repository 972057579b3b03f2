use serde::Deserialize;
use serde_json::Value;

/// a key record exactly as the source api returned it, shape unchecked
pub type RawKeyRecord = Value;

/// only `quota` and `used` are typed, everything else is passed through untouched
#[derive(Debug, Deserialize)]
pub struct SourceKeyRecord {
    pub code: Option<Value>,
    pub cipher: Option<Value>,
    pub secret: Option<Value>,
    pub name: Option<Value>,
    /// bytes
    pub quota: Option<KeyQuota>,
    pub created_at: Option<Value>,
    pub enabled: Option<Value>,
    /// bytes
    pub used: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum KeyQuota {
    Int(i64),
    UInt(u64),
    Float(f64),
}
