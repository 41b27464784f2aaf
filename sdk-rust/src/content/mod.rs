mod client;
mod http;
mod pagination;
mod repository;
mod types;

pub use client::{ContentClient, ContentRequest, ContentTarget};
pub use http::{HttpContentClient, HttpContentClientOptions};
pub use pagination::{offset_for, PageQuery, Pagination, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use repository::{ProjectRepository, PROJECT_ENDPOINT};
pub use types::*;
