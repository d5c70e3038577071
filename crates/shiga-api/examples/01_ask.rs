use anyhow::Result;
use shiga_api::{ApiConfig, ChatApi, QuestionBackend};

#[tokio::main]
async fn main() -> Result<()> {
    let base_url = std::env::var("SHIGACHAT_API_URL")?;
    let token = std::env::var("SHIGACHAT_TOKEN")?;

    let config = ApiConfig::builder()
        .base_url(base_url)
        .bearer_token(token)
        .language("en")
        .build()?;
    let api = ChatApi::new(config)?;

    let response = api
        .send_question(None, "How do I register a new address?")
        .await?;

    println!("Thread: {}", response.thread_id);
    println!("Answer: {}", response.answer);
    for reference in &response.references {
        println!("  related: {}", reference.question);
    }

    Ok(())
}
