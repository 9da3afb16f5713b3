pub(crate) mod detail;
pub(crate) mod index;
pub(crate) mod label;

pub(crate) use ::scraper::Html;
use ::scraper::ElementRef;
use tracing::debug;

use crate::error::{Result, SurfError};

/// Fetch a URL and parse the response body as an HTML document.
///
/// Anything other than `200 OK` is an error. The body is dropped as soon
/// as it has been parsed.
pub(crate) async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| SurfError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(SurfError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| SurfError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    parse_body(url, &body)
}

/// html5ever recovers from any malformed markup, so the only body that
/// cannot be queried is one with nothing in it.
pub(crate) fn parse_body(url: &str, body: &str) -> Result<Html> {
    if body.trim().is_empty() {
        return Err(SurfError::Parse {
            url: url.to_owned(),
        });
    }
    Ok(Html::parse_document(body))
}

/// All text below `element`, concatenated and trimmed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_rejects_empty() {
        let err = parse_body("http://fixture/player/1", "  \n\t ").unwrap_err();
        assert!(matches!(err, SurfError::Parse { ref url } if url == "http://fixture/player/1"));
    }

    #[test]
    fn test_parse_body_tolerates_broken_markup() {
        assert!(parse_body("http://fixture/", "<table><tr><td>1 Tier").is_ok());
    }

    #[test]
    fn test_element_text_joins_nested_text() {
        let document = Html::parse_document(
            "<table><tr><td>\n  <b>42</b> Completions  \n</td></tr></table>",
        );
        let selector = ::scraper::Selector::parse("td").unwrap();
        let cell = document.select(&selector).next().unwrap();
        assert_eq!(element_text(&cell), "42 Completions");
    }
}
