//! Share URLs carrying an encoded canvas in a query parameter.

use super::types::{ShareError, ShareLink};
use url::Url;

/// Builds `<base_url>?<param>=<data_url>` with the value percent-encoded.
///
/// Existing query pairs on `base_url` other than `param` are preserved.
pub fn build_share_link(base_url: &str, param: &str, data_url: String) -> Result<ShareLink, ShareError> {
    let mut url = Url::parse(base_url)?;
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != param)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(param, &data_url);
    }

    Ok(ShareLink { url, data_url })
}

/// Extracts the encoded canvas from a share URL.
///
/// Accepts both percent-encoded links and links where the data URL was pasted
/// verbatim into the query.
pub fn source_from_share_url(share_url: &str, param: &str) -> Result<String, ShareError> {
    let url = Url::parse(share_url.trim())?;
    url.query_pairs()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ShareError::MissingSource(param.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::data_url;

    const DATA: &str = "data:image/png;base64,iVBORw0KGgr7/wA+";

    #[test]
    fn link_round_trips_data_url() {
        let link = build_share_link("http://localhost:4200/game", "source", DATA.to_string()).unwrap();
        assert!(link.as_str().starts_with("http://localhost:4200/game?source="));
        assert!(!link.as_str().contains('+'));
        assert_eq!(source_from_share_url(link.as_str(), "source").unwrap(), DATA);
    }

    #[test]
    fn existing_query_pairs_survive() {
        let link = build_share_link(
            "https://paint.example.org/game?lang=en&source=old",
            "source",
            DATA.to_string(),
        )
        .unwrap();
        let pairs: Vec<_> = link.url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(pairs, vec!["lang", "source"]);
    }

    #[test]
    fn verbatim_links_still_decode() {
        let raw = format!("http://localhost:4200/game?source={DATA}");
        let source = source_from_share_url(&raw, "source").unwrap();
        // The unescaped '+' arrives as a space; the decoder restores it.
        assert!(source.ends_with("wA "));
        assert_eq!(
            data_url::decode(&source).unwrap(),
            data_url::decode(DATA).unwrap()
        );
    }

    #[test]
    fn missing_parameter_is_reported() {
        assert!(matches!(
            source_from_share_url("http://localhost:4200/game?other=1", "source"),
            Err(ShareError::MissingSource(param)) if param == "source"
        ));
        assert!(matches!(
            source_from_share_url("not a url", "source"),
            Err(ShareError::Url(_))
        ));
    }
}
