use serde::{Deserialize, Serialize};

/// An image already attached to a project, deletable from the admin edit
/// form via `DELETE /admin/project/image/delete/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub id: i64,
    pub url: String,
}

impl ProjectImage {
    pub fn delete_url(&self) -> String {
        format!("/admin/project/image/delete/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_url_contains_id() {
        let image = ProjectImage {
            id: 42,
            url: "/static/uploads/42.png".to_string(),
        };
        assert_eq!(image.delete_url(), "/admin/project/image/delete/42");
    }
}
