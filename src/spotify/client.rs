use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, header::RETRY_AFTER};
use serde::{Serialize, de::DeserializeOwned};
use tokio::time::sleep;

use crate::warning;

const BAD_GATEWAY_DELAY: Duration = Duration::from_secs(10);
const DEFAULT_RETRY_AFTER_SECS: u64 = 1;

/// Sends a GET request with bearer auth and decodes the JSON body.
///
/// # Retry Logic
///
/// - `502 Bad Gateway` is retried after 10 seconds.
/// - `429 Too Many Requests` is retried after the `Retry-After` seconds the
///   API sent back (1 second when the header is missing).
///
/// Every other failure is returned to the caller.
pub async fn get_json<T: DeserializeOwned>(token: &str, url: &str) -> Result<T, reqwest::Error> {
    let client = Client::new();
    let response = send_with_retry(|| client.get(url).bearer_auth(token)).await?;
    response.json::<T>().await
}

/// Sends a POST request with a JSON body and decodes the JSON response.
///
/// Same retry rules as [`get_json`].
pub async fn post_json<B, T>(token: &str, url: &str, body: &B) -> Result<T, reqwest::Error>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let client = Client::new();
    let response = send_with_retry(|| client.post(url).bearer_auth(token).json(body)).await?;
    response.json::<T>().await
}

async fn send_with_retry<F>(build: F) -> Result<Response, reqwest::Error>
where
    F: Fn() -> RequestBuilder,
{
    loop {
        let response = build().send().await?;

        match response.status() {
            StatusCode::BAD_GATEWAY => {
                sleep(BAD_GATEWAY_DELAY).await;
                continue;
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let secs = retry_after_secs(&response);
                warning!("Rate limited by Spotify, retrying in {} seconds", secs);
                sleep(Duration::from_secs(secs)).await;
                continue;
            }
            _ => return response.error_for_status(),
        }
    }
}

fn retry_after_secs(response: &Response) -> u64 {
    parse_retry_after(
        response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok()),
    )
}

/// Seconds to wait according to a `Retry-After` header value.
///
/// Only the delay-seconds form is understood; a missing or unparsable value
/// waits 1 second.
pub fn parse_retry_after(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
