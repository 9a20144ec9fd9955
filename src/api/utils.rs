use anyhow::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub async fn make_request<T>(client: &Client, url: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let res = client.get(url).send().await?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<T>(&text)?;

    Ok(data)
}
