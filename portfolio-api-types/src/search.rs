use serde::{Deserialize, Serialize};

/// A single project row returned by `GET /api/search`.
///
/// `image_url` may be absent or `null`; the client renders a generic
/// placeholder icon in that case.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SearchResult {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl SearchResult {
    /// Path of the project detail page this result links to.
    pub fn detail_url(&self) -> String {
        format!("/project/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_is_optional() {
        let with_image: SearchResult = serde_json::from_str(
            r#"{"id":7,"title":"Foo","description":"Bar","image_url":"/static/uploads/foo.png"}"#,
        )
        .unwrap();
        assert_eq!(
            with_image.image_url.as_deref(),
            Some("/static/uploads/foo.png")
        );

        let null_image: SearchResult =
            serde_json::from_str(r#"{"id":7,"title":"Foo","description":"Bar","image_url":null}"#)
                .unwrap();
        assert_eq!(null_image.image_url, None);

        let missing_image: SearchResult =
            serde_json::from_str(r#"{"id":7,"title":"Foo","description":"Bar"}"#).unwrap();
        assert_eq!(missing_image.image_url, None);
    }

    #[test]
    fn detail_url_contains_id() {
        let result = SearchResult {
            id: 7,
            title: "Foo".to_string(),
            description: "Bar".to_string(),
            image_url: None,
        };
        assert_eq!(result.detail_url(), "/project/7");
    }
}
