use chrono::Utc;

use crate::config::{Config, SheetSource};
use crate::error::FetchError;

/// Reads the latest published snapshot of the sheet as text.
pub async fn fetch_sheet(client: &reqwest::Client, config: &Config) -> Result<String, FetchError> {
    let bytes = match &config.sheet {
        SheetSource::Http(url) => {
            let url = if config.cache_bust {
                cache_busted(url, Utc::now().timestamp_millis())
            } else {
                url.clone()
            };
            fetch_http(client, &url, config.max_sheet_size).await?
        }
        SheetSource::File(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|err| FetchError::Io(format!("{}: {}", path.display(), err)))?;
            check_size(bytes.len(), config.max_sheet_size)?;
            bytes
        }
    };

    decode(bytes)
}

async fn fetch_http(client: &reqwest::Client, url: &str, limit: usize) -> Result<Vec<u8>, FetchError> {
    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|err| FetchError::Request(err.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    if let Some(length) = response.content_length() {
        check_size(usize::try_from(length).unwrap_or(usize::MAX), limit)?;
    }

    // Chunked responses carry no length, so the limit is enforced while reading.
    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|err| FetchError::Request(err.to_string()))?
    {
        check_size(body.len() + chunk.len(), limit)?;
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

/// Strict UTF-8 decode with a leading byte-order mark removed.
fn decode(bytes: Vec<u8>) -> Result<String, FetchError> {
    let mut text =
        String::from_utf8(bytes).map_err(|err| FetchError::Encoding(err.utf8_error().to_string()))?;
    if text.starts_with('\u{feff}') {
        text.replace_range(..'\u{feff}'.len_utf8(), "");
    }
    Ok(text)
}

fn check_size(size: usize, limit: usize) -> Result<(), FetchError> {
    if size > limit {
        return Err(FetchError::TooLarge { size, limit });
    }
    Ok(())
}

pub fn cache_busted(url: &str, stamp: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", url, separator, stamp)
}
