use crate::domain::Mode;
use anyhow::{Context, Result};
use url::Url;

const MODE_PARAM: &str = "mode";

/// The page location the board is shown at.
///
/// The `mode` query parameter carries the board mode; it is rewritten in
/// place when the mode changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw).with_context(|| format!("Invalid page URL: {}", raw))?;
        Ok(Self { url })
    }

    /// Mode requested by the query string
    pub fn mode(&self) -> Mode {
        let value = self
            .url
            .query_pairs()
            .find(|(name, _)| name == MODE_PARAM)
            .map(|(_, value)| value.into_owned());
        Mode::from_query_value(value.as_deref())
    }

    /// Encode `mode` in the query: `mode=view` in View, no parameter in Edit
    pub fn set_mode(&mut self, mode: Mode) {
        let mut pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(name, _)| name != MODE_PARAM)
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();

        if let Some(value) = mode.query_value() {
            pairs.push((MODE_PARAM.to_string(), value.to_string()));
        }

        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(pairs);
        }
    }

    /// Cosmetic share link: the page without query, in view mode, with a
    /// cache-busting timestamp
    pub fn share_link(&self, timestamp_millis: i64) -> String {
        let mut base = self.url.clone();
        base.set_query(None);
        base.set_fragment(None);
        format!("{}?{}=view&v={}", base, MODE_PARAM, timestamp_millis)
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}
