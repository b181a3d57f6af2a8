//! polarity-cli - terminal client for the prediction API
//!
//! Sends text to /predict, prints the label with its confidence, and
//! optionally reports the user's correctness judgment to /feedback.

use anyhow::{Context, Result, bail};
use polarity::api::dto::feedback_dto::FeedbackRequest;
use polarity::client::ApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (text, judgment) = parse_args(&args)?;

    let client = ApiClient::from_env().context("failed to build API client")?;
    let response = client.predict(&text).await?;

    let confidence = if response.score >= 0.5 {
        response.score
    } else {
        1.0 - response.score
    };

    println!("{} ({:.1}% confidence)", response.sentiment, confidence * 100.0);
    println!(
        "model {} | latency {:.0} ms",
        response.model_version, response.latency_ms
    );

    if let Some(is_valid) = judgment {
        let sent = client
            .send_feedback(&FeedbackRequest {
                text,
                predicted: response.sentiment,
                score: response.score,
                is_valid,
                model_version: Some(response.model_version),
            })
            .await;
        println!("{}", if sent { "feedback sent" } else { "feedback failed" });
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<(String, Option<bool>)> {
    let mut text_parts = Vec::new();
    let mut judgment = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--feedback" => {
                judgment = match iter.next().map(String::as_str) {
                    Some("valid") => Some(true),
                    Some("invalid") => Some(false),
                    _ => bail!("--feedback takes 'valid' or 'invalid'"),
                };
            }
            _ => text_parts.push(arg.clone()),
        }
    }

    if text_parts.is_empty() {
        bail!("usage: polarity-cli <text to analyze> [--feedback valid|invalid]");
    }

    Ok((text_parts.join(" "), judgment))
}
