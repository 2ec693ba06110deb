use serde::Deserialize;

pub const DETAILS_FIELDS: &str = "url,website,reviews";
pub const MAX_REVIEW_SNIPPETS: usize = 3;

#[derive(Clone, Deserialize, Debug)]
pub struct PlaceDetailsResponse {
    pub status: Option<String>,
    pub error_message: Option<String>,
    pub result: Option<PlaceDetails>,
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct PlaceDetails {
    pub url: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub reviews: Vec<PlaceReview>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct PlaceReview {
    pub text: Option<String>,
}

impl PlaceDetails {
    /// First few review texts, trimmed. Reviews without text yield an empty snippet.
    pub fn review_snippets(&self) -> Vec<String> {
        self.reviews
            .iter()
            .take(MAX_REVIEW_SNIPPETS)
            .map(|review| review.text.as_deref().unwrap_or("").trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_at_most_three_trimmed_snippets() {
        let details: PlaceDetails = serde_json::from_value(json!({
            "url": "https://maps.google.com/?cid=1",
            "reviews": [
                {"text": "  great laksa \n"},
                {"text": null},
                {"text": "slow service"},
                {"text": "never shown"}
            ]
        }))
        .unwrap();

        assert_eq!(
            details.review_snippets(),
            vec!["great laksa".to_string(), String::new(), "slow service".to_string()]
        );
        assert_eq!(details.website, None);
    }
}
