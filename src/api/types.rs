use serde::{Deserialize, Serialize};

/// A single quotation as served by the quotes API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    #[serde(rename = "quote")]
    pub content: String,
    pub author: String,
}

impl Quote {
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
        }
    }

    /// Plain text handed to the system share mechanism.
    pub fn share_text(&self) -> String {
        format!("\"{}\"\n- {}", self.content.trim(), self.author.trim())
    }
}

/// The list every read operation produces.
pub type QuoteList = Vec<Quote>;

/// Response bodies the API is known to return.
///
/// The bare array is the primary shape. Some deployments wrap the list in a
/// `{"quotes": [...]}` envelope, and random endpoints may answer with a single
/// object. Variant order matters for `untagged`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum QuotesBody {
    List(QuoteList),
    Wrapped { quotes: QuoteList },
    Single(Quote),
}

impl QuotesBody {
    pub(crate) fn into_quotes(self) -> QuoteList {
        match self {
            QuotesBody::List(quotes) => quotes,
            QuotesBody::Wrapped { quotes } => quotes,
            QuotesBody::Single(quote) => vec![quote],
        }
    }
}

/// Decodes a response body. A `null` body yields an empty list.
pub(crate) fn decode_quotes(body: &str) -> Result<QuoteList, serde_json::Error> {
    let parsed: Option<QuotesBody> = serde_json::from_str(body)?;
    Ok(parsed.map(QuotesBody::into_quotes).unwrap_or_default())
}
