use std::io;

use tracing_subscriber::EnvFilter;
use websms::{Credentials, Proxy, RecipientAddress, TextMessage, WebsmsClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = required_env("WEBSMS_USERNAME")?;
    let password = required_env("WEBSMS_PASSWORD")?;
    let recipient = required_env("WEBSMS_RECIPIENT")?;
    let message = std::env::var("WEBSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the websms demo.".to_owned());
    // Anything but "0"/"false" keeps test mode on; no SMS is delivered in test mode.
    let test = !matches!(
        std::env::var("WEBSMS_TEST").as_deref(),
        Ok("0") | Ok("false")
    );

    let mut builder = WebsmsClient::builder(Credentials::new(username, password));
    if let Ok(base_url) = std::env::var("WEBSMS_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    if let Ok(proxy) = std::env::var("WEBSMS_PROXY") {
        builder = builder.proxy(Proxy::all(proxy)?);
    }
    let client = builder.build()?;

    let text = TextMessage::new(vec![RecipientAddress::parse(&recipient)?], message);
    let response = client.send_text(&text, 1, test).await?;
    println!(
        "status code: {}, status message: {}, transfer id: {:?}",
        response.status_code, response.status_message, response.transfer_id
    );

    Ok(())
}
