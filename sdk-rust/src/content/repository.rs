use super::{
    client::{ContentClient, ContentRequest},
    pagination::{offset_for, PageQuery, Pagination},
    types::{Project, ProjectPage, ProjectsResponse},
};
use crate::{DataResult, Diagnostics, TracingDiagnostics};
use std::sync::Arc;

/// Content API endpoint holding project records.
pub const PROJECT_ENDPOINT: &str = "project";

/// Reads project records from a content API.
///
/// `list` and `get` never fail: content API errors become an empty page or
/// `None` and are reported to the configured `Diagnostics`. Use `try_list`
/// and `try_get` to observe the errors directly.
pub struct ProjectRepository {
    client: Arc<dyn ContentClient>,
    diagnostics: Arc<dyn Diagnostics>,
    endpoint: String,
}

impl ProjectRepository {
    #[must_use]
    pub fn new(client: Arc<dyn ContentClient>) -> Self {
        Self {
            client,
            diagnostics: Arc::new(TracingDiagnostics),
            endpoint: PROJECT_ENDPOINT.to_string(),
        }
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// One page of projects. `page` is 1-based and is echoed back unchanged;
    /// page 0 is reported as a failure and yields an empty page.
    pub async fn list(&self, page: u32, limit: u32) -> ProjectPage {
        match self.try_list(page, limit).await {
            Ok(projects) => projects,
            Err(error) => {
                self.diagnostics.report("list_projects", &error);
                ProjectPage::empty(page)
            }
        }
    }

    pub async fn list_page(&self, query: PageQuery) -> ProjectPage {
        self.list(query.page, query.limit).await
    }

    pub async fn try_list(&self, page: u32, limit: u32) -> DataResult<ProjectPage> {
        let offset = offset_for(page, limit)?;
        let body = self
            .client
            .get(ContentRequest::list(&self.endpoint, offset, limit))
            .await?;
        let response: ProjectsResponse = serde_json::from_value(body)?;

        let pagination = Pagination::new(page, limit, response.total_count)?;
        Ok(ProjectPage::new(response.contents, &pagination))
    }

    /// A single project, or `None` when it does not exist or cannot be read.
    pub async fn get(&self, id: &str) -> Option<Project> {
        match self.try_get(id).await {
            Ok(project) => Some(project),
            Err(error) => {
                self.diagnostics.report("get_project", &error);
                None
            }
        }
    }

    pub async fn try_get(&self, id: &str) -> DataResult<Project> {
        let body = self
            .client
            .get(ContentRequest::item(&self.endpoint, id))
            .await?;
        Ok(serde_json::from_value(body)?)
    }
}
