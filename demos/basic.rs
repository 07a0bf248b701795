use fetch_api::{ApiClient, ApiError, Method};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new("http://localhost:8000/v0")?;

    // 1. Read a resource
    println!("Fetching user...");
    match client.fetch_api("/users/1", None, None).await {
        Ok(user) => println!("User: {}", user),
        Err(ApiError::UnexpectedStatus(code)) => eprintln!("Backend answered {}", code),
        Err(e) => eprintln!("Request failed: {}", e),
    }

    // 2. Create one
    println!("Creating user...");
    let body = json!({"username": "octocat", "name": "Mona"});
    let created = client
        .fetch_api("/users", Some(Method::Post), body.as_object().cloned())
        .await?;
    println!("Created: {}", created);

    Ok(())
}
