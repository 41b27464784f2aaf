use dotenvy::dotenv;
use portfolio_sdk::{activity::RangeSelector, AggregateActivityView};
use std::error::Error;

mod common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    common::init_tracing();

    let view = AggregateActivityView::new(common::activity_client());
    let snapshot = view.snapshot(RangeSelector::Last7Days).await?;

    println!("Latest day: {}", snapshot.total_coding_time.text);
    for language in &snapshot.top_languages {
        println!("{:>6.2}%  {}", language.percent, language.name);
    }
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
