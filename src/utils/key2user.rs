use crate::{
    constants,
    shared_types::{
        DestinationUserPayload, KeyQuota, RawKeyRecord, SourceKeyRecord, TransformError,
    },
};

/// builds the destination user for the record at 1-based position `id`
pub fn key2user(id: u32, raw: &RawKeyRecord) -> Result<DestinationUserPayload, TransformError> {
    let key: SourceKeyRecord = serde_json::from_value(raw.clone())?;

    let quota = key.quota.ok_or(TransformError::MissingField("quota"))?;
    let used = key.used.ok_or(TransformError::MissingField("used"))?;

    Ok(DestinationUserPayload {
        id,
        identity: key.code,
        method: key.cipher,
        password: key.secret,
        name: key.name,
        quota: convert_quota(quota),
        created_at: key.created_at,
        enabled: key.enabled,
        used: used / constants::USED_DIVISOR,
        used_bytes: used * constants::USED_BYTES_MULTIPLIER,
    })
}

/// truncates toward zero
fn convert_quota(quota: KeyQuota) -> i64 {
    match quota {
        KeyQuota::Int(n) => n / constants::QUOTA_DIVISOR,
        KeyQuota::UInt(n) => (n / constants::QUOTA_DIVISOR as u64) as i64,
        KeyQuota::Float(n) => (n / constants::QUOTA_DIVISOR as f64).trunc() as i64,
    }
}

/// best-effort display name, used in diagnostics even for malformed records
pub fn record_name(raw: &RawKeyRecord) -> Option<String> {
    match raw.get("name")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(name) => Some(name.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builds_the_documented_payload() {
        let raw = json!({
            "code": "a1",
            "cipher": "aes",
            "secret": "s1",
            "name": "Alice",
            "quota": 5000,
            "created_at": "2024-01-01",
            "enabled": true,
            "used": 2000
        });

        let payload = key2user(1, &raw).unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "id": 1,
                "identity": "a1",
                "method": "aes",
                "password": "s1",
                "name": "Alice",
                "quota": 5,
                "created_at": "2024-01-01",
                "enabled": true,
                "used": 2.0,
                "used_bytes": 2000000000.0
            })
        );
    }

    #[test]
    fn quota_is_truncated_toward_zero() {
        let quota = |q: serde_json::Value| {
            key2user(1, &json!({ "quota": q, "used": 0 }))
                .unwrap()
                .quota
        };

        assert_eq!(quota(json!(5999)), 5);
        assert_eq!(quota(json!(999)), 0);
        assert_eq!(quota(json!(0)), 0);
        assert_eq!(quota(json!(-1500)), -1);
        assert_eq!(quota(json!(5500.7)), 5);
        assert_eq!(quota(json!(u64::MAX)), (u64::MAX / 1000) as i64);
    }

    #[test]
    fn used_is_scaled_both_ways() {
        let payload = key2user(1, &json!({ "quota": 0, "used": 1234.5 })).unwrap();

        assert_eq!(payload.used, 1.2345);
        assert_eq!(payload.used_bytes, 1_234_500_000.0);
    }

    #[test]
    fn absent_copied_fields_become_null() {
        let payload = key2user(7, &json!({ "quota": 1000, "used": 0 })).unwrap();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["id"], json!(7));
        assert_eq!(value["identity"], json!(null));
        assert_eq!(value["name"], json!(null));
        assert_eq!(value["enabled"], json!(null));
    }

    #[test]
    fn copied_fields_keep_their_json_type() {
        let raw = json!({
            "code": 42,
            "cipher": "aes",
            "secret": ["s", 1],
            "name": "Alice",
            "quota": 1000,
            "created_at": 1704067200,
            "enabled": 1,
            "used": 0
        });

        let value = serde_json::to_value(key2user(1, &raw).unwrap()).unwrap();

        assert_eq!(value["identity"], json!(42));
        assert_eq!(value["password"], json!(["s", 1]));
        assert_eq!(value["created_at"], json!(1704067200));
        assert_eq!(value["enabled"], json!(1));
    }

    #[test]
    fn null_quota_is_missing() {
        let err = key2user(1, &json!({ "quota": null, "used": 1 })).unwrap_err();
        assert!(matches!(err, TransformError::MissingField("quota")));
    }

    #[test]
    fn non_numeric_quota_is_malformed() {
        let err = key2user(1, &json!({ "quota": "5GB", "used": 1 })).unwrap_err();
        assert!(matches!(err, TransformError::Shape(_)));
    }

    #[test]
    fn missing_quota_is_malformed() {
        let err = key2user(1, &json!({ "name": "x", "used": 10 })).unwrap_err();
        assert!(matches!(err, TransformError::MissingField("quota")));
    }

    #[test]
    fn missing_used_is_malformed() {
        let err = key2user(1, &json!({ "name": "x", "quota": 10 })).unwrap_err();
        assert!(matches!(err, TransformError::MissingField("used")));
    }

    #[test]
    fn non_numeric_used_is_malformed() {
        let err = key2user(1, &json!({ "quota": 10, "used": "lots" })).unwrap_err();
        assert!(matches!(err, TransformError::Shape(_)));
    }

    #[test]
    fn non_object_record_is_malformed() {
        let err = key2user(1, &json!("a1")).unwrap_err();
        assert!(matches!(err, TransformError::Shape(_)));
    }

    #[test]
    fn record_name_tolerates_anything() {
        assert_eq!(record_name(&json!({ "name": "Bob" })), Some("Bob".to_string()));
        assert_eq!(record_name(&json!({ "name": 3 })), Some("3".to_string()));
        assert_eq!(record_name(&json!({ "name": null })), None);
        assert_eq!(record_name(&json!([])), None);
    }
}
