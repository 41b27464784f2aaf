use dotenvy::dotenv;
use portfolio_sdk::{content::PageQuery, ProjectRepository};
use std::{env, error::Error, sync::Arc};

mod common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    common::init_tracing();

    // cargo run --example list-projects -- <page> <pageSize> [project id]
    let args: Vec<String> = env::args().skip(1).collect();
    let query = PageQuery::parse(
        args.first().map(String::as_str),
        args.get(1).map(String::as_str),
    );

    let repository = ProjectRepository::new(Arc::new(common::content_client()));

    let page = repository.list_page(query).await;
    println!(
        "Page {}/{} ({} projects in total)",
        page.current_page, page.total_pages, page.total_count
    );
    if page.projects.is_empty() {
        println!("No projects found");
    }
    for project in &page.projects {
        println!(
            "- [{}] {} ({})",
            project.id,
            project.title,
            project.skills.join(", ")
        );
    }

    if let Some(id) = args.get(2) {
        match repository.get(id).await {
            Some(project) => println!("{}", serde_json::to_string_pretty(&project)?),
            None => println!("Project {id} not found"),
        }
    }

    Ok(())
}
