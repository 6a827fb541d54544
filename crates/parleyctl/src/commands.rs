//! Command implementations for parleyctl.

use crate::client::DaemonClient;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use parley_common::{AlarmStatus, SpeakerScoreSummary};
use serde_json::Value;
use std::io::Read;

pub async fn health(client: &DaemonClient) -> Result<()> {
    let health = client.health().await?;
    println!("{} parleyd v{}", "●".green(), health.version);
    println!("  status:            {}", health.status);
    println!("  uptime:            {}s", health.uptime_seconds);
    println!("  knowledge entries: {}", health.knowledge_entries);
    Ok(())
}

pub async fn chat(client: &DaemonClient, message: &str) -> Result<()> {
    let reply = client.chat(message).await?;
    println!("{}", reply);
    Ok(())
}

pub async fn rps(client: &DaemonClient, choice: &str) -> Result<()> {
    let reply = client.play_rps(choice).await?;
    println!("{}", reply);
    Ok(())
}

pub async fn detect(client: &DaemonClient, file: &str) -> Result<()> {
    let content = if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?
    };

    let messages: Value =
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", file))?;

    let body = client.detect(messages).await?;
    match body.get("response") {
        Some(Value::String(text)) => println!("{}", text),
        Some(Value::Object(speakers)) => {
            for (speaker, summary) in speakers {
                let summary: SpeakerScoreSummary = serde_json::from_value(summary.clone())
                    .context("Malformed speaker summary")?;
                println!(
                    "{}: {} (average {:.2})",
                    speaker.bold(),
                    summary.verdict,
                    summary.average_score
                );
            }
        }
        _ => anyhow::bail!("Malformed analysis reply"),
    }
    Ok(())
}

pub async fn search(client: &DaemonClient, topic: &str) -> Result<()> {
    let reply = client.search(topic).await?;
    println!("{}", reply);
    Ok(())
}

pub async fn alarm_set(client: &DaemonClient, minutes: i64, message: &str) -> Result<()> {
    let reply = client.set_alarm(minutes, message).await?;
    println!("{}", reply);
    Ok(())
}

pub async fn alarm_list(client: &DaemonClient) -> Result<()> {
    let alarms = client.alarms().await?;
    if alarms.response.is_empty() {
        println!("No alarms scheduled.");
        return Ok(());
    }

    for (message, record) in alarms.response {
        let status = match record.status {
            AlarmStatus::Pending => format!("{}", "pending".yellow()),
            AlarmStatus::Fired => format!("{}", "fired".green()),
        };
        println!(
            "{}  {} ({} min, set {})",
            status,
            message.bold(),
            record.minutes,
            record.scheduled_at.format("%H:%M:%S")
        );
    }
    Ok(())
}
