use crate::{
    constants,
    shared_types::{ApiError, RawKeyRecord, ServerEndpoint},
};

use super::{check_status, get_bearer_builder};

pub async fn get_keys(
    client: &reqwest::Client,
    source: &ServerEndpoint,
) -> Result<Vec<RawKeyRecord>, ApiError> {
    let url = source.get_url(constants::SOURCE_KEYS_PATH);
    log::debug!("GET {url}");

    let res = get_bearer_builder(client, reqwest::Method::GET, url, source)
        .send()
        .await?;
    let res = check_status(res).await?;

    let res_text = res.text().await?;
    serde_json::from_str(&res_text).map_err(|err| ApiError::Decode(err.to_string()))
}
