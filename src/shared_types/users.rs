use serde::Serialize;
use serde_json::Value;

/// body of `POST /v1/users` on the destination server. copied fields keep whatever
/// json type the source had and go out as `null` when it didn't have them.
#[derive(Debug, Serialize, PartialEq)]
pub struct DestinationUserPayload {
    pub id: u32,
    pub identity: Option<Value>,
    pub method: Option<Value>,
    pub password: Option<Value>,
    pub name: Option<Value>,
    pub quota: i64,
    pub created_at: Option<Value>,
    pub enabled: Option<Value>,
    pub used: f64,
    pub used_bytes: f64,
}
