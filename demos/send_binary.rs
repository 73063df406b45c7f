use std::io;

use tracing_subscriber::EnvFilter;
use websms::{BinaryMessage, Credentials, RecipientAddress, WebsmsClient};

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
    let base_url = std::env::var("WEBSMS_BASE_URL")
        .unwrap_or_else(|_| "https://api.websms.com/json".to_owned());

    let client = WebsmsClient::new(Credentials::new(username, password), base_url)?;

    // Two segments; the gateway delivers each as one physical SMS.
    let message = BinaryMessage::new(
        vec![RecipientAddress::parse(&recipient)?],
        vec![b"binary part 1".to_vec(), b"binary part 2".to_vec()],
    );
    let response = client.send_binary(&message, true).await?;
    println!(
        "status: {:?}, status_code: {}, sms_count: {:?}",
        response.status_code.known(),
        response.status_code,
        response.sms_count
    );

    Ok(())
}
