use anyhow::Result;
use excerpt::config::ExtractConfig;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        eprintln!("usage: excerpt <url>...");
        std::process::exit(2);
    }

    let config = ExtractConfig::from_env();
    let items = excerpt::extract_all(&urls, &config).await;

    let mut any_ok = false;
    for item in &items {
        let line = match &item.outcome {
            Ok(doc) => {
                any_ok = true;
                json!({
                    "url": item.url,
                    "ok": true,
                    "title": doc.title,
                    "length": doc.text.chars().count(),
                })
            }
            Err(err) => json!({
                "url": item.url,
                "ok": false,
                "error": err.to_string(),
                "retriable": err.should_retry(),
            }),
        };
        println!("{line}");
    }

    if !any_ok {
        std::process::exit(1);
    }
    Ok(())
}
