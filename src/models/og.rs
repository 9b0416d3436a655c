//! Open Graph metadata scraped by the backend.

use serde::{Deserialize, Serialize};

use super::product::ProductDraft;

/// OG tags of an external product page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgMetadata {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    /// `product:price:amount`, as text.
    #[serde(default)]
    pub price: Option<String>,
}

impl OgMetadata {
    /// Fill empty draft fields from the scraped metadata.
    ///
    /// Fields the user already typed are left alone.
    pub fn prefill(&self, draft: &mut ProductDraft) {
        if draft.name.trim().is_empty()
            && let Some(title) = &self.title
        {
            draft.name = title.trim().to_string();
        }
        if draft.description.is_none() {
            draft.description = self.description.clone();
        }
        if draft.image_url.is_none() {
            draft.image_url = self.image.clone();
        }
        if draft.price == 0
            && let Some(price) = self.price.as_deref()
            && let Ok(parsed) = parse_og_price(price)
        {
            draft.price = parsed;
        }
        draft.source_url = Some(self.url.clone());
    }
}

/// OG prices may carry decimals ("12000.00"); the fraction is dropped.
fn parse_og_price(raw: &str) -> Result<u64, std::num::ParseIntError> {
    let whole = raw.trim().split('.').next().unwrap_or_default();
    let digits: String = whole.chars().filter(|c| *c != ',').collect();
    digits.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> OgMetadata {
        OgMetadata {
            url: "https://shop.example/mug".to_string(),
            title: Some(" Blue Mug ".to_string()),
            description: Some("Stoneware".to_string()),
            image: Some("https://shop.example/mug.png".to_string()),
            site_name: Some("Shop".to_string()),
            price: Some("12,000.00".to_string()),
        }
    }

    #[test]
    fn test_prefill_empty_draft() {
        let mut draft = ProductDraft::default();
        meta().prefill(&mut draft);
        assert_eq!(draft.name, "Blue Mug");
        assert_eq!(draft.description.as_deref(), Some("Stoneware"));
        assert_eq!(draft.price, 12_000);
        assert_eq!(draft.source_url.as_deref(), Some("https://shop.example/mug"));
    }

    #[test]
    fn test_prefill_keeps_user_input() {
        let mut draft = ProductDraft {
            name: "My Mug".to_string(),
            price: 9_000,
            ..Default::default()
        };
        meta().prefill(&mut draft);
        assert_eq!(draft.name, "My Mug");
        assert_eq!(draft.price, 9_000);
    }

    #[test]
    fn test_unparseable_price_is_ignored() {
        let mut draft = ProductDraft::default();
        OgMetadata {
            price: Some("call us".to_string()),
            ..meta()
        }
        .prefill(&mut draft);
        assert_eq!(draft.price, 0);
    }
}
