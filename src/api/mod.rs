use url::Url;

use crate::shared_types::{ApiError, ServerEndpoint};

pub mod keys;
pub mod users;

pub fn get_bearer_builder(
    client: &reqwest::Client,
    method: reqwest::Method,
    url: Url,
    endpoint: &ServerEndpoint,
) -> reqwest::RequestBuilder {
    client
        .request(method, url)
        .header("Authorization", format!("Bearer {}", endpoint.get_token()))
}

/// turns a non-2xx response into `ApiError::Status`, reading the body when it can
pub async fn check_status(res: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.ok().filter(|text| !text.is_empty());
    Err(ApiError::Status { status, body })
}
