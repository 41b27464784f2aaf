use serde_json::{json, Value};

pub fn grand_total(total_seconds: u64, text: &str) -> Value {
    json!({
        "decimal": format!("{:.2}", total_seconds as f64 / 3600.0),
        "digital": format!("{}:{:02}", total_seconds / 3600, (total_seconds % 3600) / 60),
        "hours": total_seconds / 3600,
        "minutes": (total_seconds % 3600) / 60,
        "text": text,
        "total_seconds": total_seconds
    })
}

pub fn coding_activity() -> Value {
    json!({
        "data": [
            {
                "grand_total": grand_total(5400, "1 hr 30 mins"),
                "range": {
                    "date": "2024-05-07",
                    "end": "2024-05-07T16:59:59Z",
                    "start": "2024-05-06T17:00:00Z",
                    "text": "Tue May 7th 2024",
                    "timezone": "Asia/Jakarta"
                }
            },
            {
                "grand_total": grand_total(3600, "1 hr"),
                "range": {
                    "date": "2024-05-06",
                    "end": "2024-05-06T16:59:59Z",
                    "start": "2024-05-05T17:00:00Z",
                    "text": "Mon May 6th 2024",
                    "timezone": "Asia/Jakarta"
                }
            }
        ]
    })
}

pub fn languages() -> Value {
    json!({
        "data": [
            { "name": "Rust", "percent": 61.2, "color": "#dea584" },
            { "name": "TypeScript", "percent": 38.8, "color": "#2b7489" }
        ]
    })
}

pub fn editors() -> Value {
    json!({
        "data": [
            { "name": "VS Code", "percent": 80.0 },
            { "name": "Neovim", "percent": 20.0 }
        ]
    })
}

pub fn operating_systems() -> Value {
    json!({ "data": [{ "name": "Linux", "percent": 100.0 }] })
}

pub fn project(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "createdAt": "2024-03-01T08:00:00.000Z",
        "updatedAt": "2024-03-02T08:00:00.000Z",
        "publishedAt": "2024-03-01T08:00:00.000Z",
        "revisedAt": "2024-03-02T08:00:00.000Z",
        "thumbnail": {
            "url": format!("https://images.example.com/{id}.png"),
            "width": 1200,
            "height": 630
        },
        "images": [],
        "title": title,
        "description": format!("<p>{title}</p>"),
        "project_url": format!("https://example.com/{id}"),
        "skills": ["Rust", "Next.js"]
    })
}

pub fn projects_response(ids: &[&str], total_count: u64, offset: u64, limit: u32) -> Value {
    json!({
        "contents": ids.iter().map(|id| project(id, &format!("Project {id}"))).collect::<Vec<_>>(),
        "totalCount": total_count,
        "offset": offset,
        "limit": limit
    })
}
