use crate::{
    constants,
    shared_types::{ApiError, DestinationUserPayload, ServerEndpoint},
};

use super::{check_status, get_bearer_builder};

pub async fn create_user(
    client: &reqwest::Client,
    dest: &ServerEndpoint,
    payload: &DestinationUserPayload,
) -> Result<(), ApiError> {
    let url = dest.get_url(constants::DEST_USERS_PATH);
    log::debug!("POST {url} id={}", payload.id);

    // .json() sets content-type: application/json
    let res = get_bearer_builder(client, reqwest::Method::POST, url, dest)
        .json(payload)
        .send()
        .await?;
    let res = check_status(res).await?;

    if log::log_enabled!(log::Level::Debug) {
        let res_text = res.text().await.unwrap_or_default();
        log::debug!("response for id={}: {res_text}", payload.id);
    }

    Ok(())
}
