use super::pagination::Pagination;
use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ImageRef {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// A published project record.
///
/// `description` is an HTML fragment authored in the content backend and is
/// passed through as-is. It is not sanitized here.
///
/// The content API omits unset fields, so everything but `id` defaults when
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "non_empty_id")]
    pub id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub revised_at: String,
    #[serde(default)]
    pub thumbnail: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageRef>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        default,
        rename(serialize = "projectUrl", deserialize = "project_url"),
        alias = "projectUrl"
    )]
    pub project_url: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

fn non_empty_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = String::deserialize(deserializer)?;
    if id.is_empty() {
        return Err(de::Error::custom("project id must not be empty"));
    }
    Ok(id)
}

/// Body of a content API list call.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsResponse {
    #[serde(default)]
    pub contents: Vec<Project>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u32,
}

/// One page of projects plus the metadata needed to render page links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    pub total_count: u64,
    pub current_page: u32,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl ProjectPage {
    /// A page with no projects, used when the listing could not be read.
    #[must_use]
    pub fn empty(page: u32) -> Self {
        Self {
            current_page: page,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn new(projects: Vec<Project>, pagination: &Pagination) -> Self {
        Self {
            projects,
            total_count: pagination.total_count,
            current_page: pagination.current_page,
            total_pages: pagination.total_pages,
            has_next_page: pagination.has_next_page,
            has_prev_page: pagination.has_prev_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project_json() -> serde_json::Value {
        json!({
            "id": "abc123",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-02T00:00:00.000Z",
            "publishedAt": "2024-01-01T00:00:00.000Z",
            "revisedAt": "2024-01-02T00:00:00.000Z",
            "thumbnail": null,
            "title": "Portfolio",
            "description": "<p>Personal site</p>",
            "project_url": "https://example.com",
            "skills": ["Rust", "Rust"]
        })
    }

    #[test]
    fn project_reads_backend_field_names() {
        let project: Project = serde_json::from_value(project_json()).expect("project parses");

        assert_eq!(project.project_url, "https://example.com");
        assert_eq!(project.thumbnail, None);
        assert_eq!(project.images, None);
        assert_eq!(project.skills, vec!["Rust", "Rust"]);

        let value = serde_json::to_value(&project).expect("project serializes");
        assert_eq!(value["projectUrl"], json!("https://example.com"));
        assert_eq!(value["description"], json!("<p>Personal site</p>"));
    }

    #[test]
    fn project_rejects_empty_id() {
        let mut value = project_json();
        value["id"] = json!("");

        let err = serde_json::from_value::<Project>(value).expect_err("empty id is invalid");
        assert!(err.to_string().contains("project id must not be empty"));
    }

    #[test]
    fn project_defaults_omitted_fields() {
        let mut value = project_json();
        let fields = value.as_object_mut().expect("project is an object");
        fields.remove("project_url");
        fields.remove("description");
        fields.remove("revisedAt");

        let project: Project = serde_json::from_value(value).expect("project parses");
        assert_eq!(project.id, "abc123");
        assert_eq!(project.project_url, "");
        assert_eq!(project.description, "");
        assert_eq!(project.revised_at, "");
    }

    #[test]
    fn empty_page_keeps_requested_page() {
        assert_eq!(
            ProjectPage::empty(4),
            ProjectPage {
                projects: vec![],
                total_count: 0,
                current_page: 4,
                total_pages: 0,
                has_next_page: false,
                has_prev_page: false,
            }
        );
    }
}
