//! Aquareef CLI
//!
//! Command-line interface for Aquareef:
//! - Check API health
//! - Log in and fetch the profile
//! - Browse the mock dashboard (campaigns, content, notifications)
//! - Generate a config file

use clap::{Parser, Subcommand};
use aquareef::dashboard::{
    mock, CampaignBoard, CampaignStatus, ContentKind, ContentLibrary, ContentStatus,
    NotificationCenter, NotificationFilter, Platform, Trend,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aquareef-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Aquareef command-line client")]
#[command(long_about = "Aquareef automates social media marketing.\nTalk to the API server or browse the demo dashboard from your terminal.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:3001", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show API status
    Health,

    /// Log in and print an access token
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Show the profile for an access token
    Profile {
        /// Bearer token from `login`
        #[arg(short, long)]
        token: String,
    },

    /// List demo campaigns
    Campaigns {
        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,
        /// active, scheduled, paused, completed
        #[arg(long)]
        status: Option<CampaignStatus>,
    },

    /// List demo content items
    Content {
        /// Case-insensitive title/content search
        #[arg(short, long)]
        search: Option<String>,
        /// image, video, carousel, text
        #[arg(short, long)]
        kind: Option<ContentKind>,
        /// draft, scheduled, published
        #[arg(long)]
        status: Option<ContentStatus>,
    },

    /// List demo notifications
    Notifications {
        /// all, unread, engagement, alerts
        #[arg(long, default_value = "all")]
        filter: NotificationFilter,
        /// Mark these ids read before listing
        #[arg(long)]
        read: Vec<u32>,
        /// Delete these ids before listing
        #[arg(long)]
        delete: Vec<u32>,
        /// Mark everything read before listing
        #[arg(long)]
        read_all: bool,
    },

    /// Show the demo publishing schedule
    Schedule,

    /// Show the demo analytics overview
    Analytics,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let json_output = cli.format == "json";

    match cli.command {
        Commands::Health => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    if json_output {
                        println!("{}", serde_json::to_string_pretty(&health)?);
                    } else {
                        println!("Aquareef v{}", env!("CARGO_PKG_VERSION"));
                        println!();
                        println!(
                            "API Status: {}",
                            health["status"].as_str().unwrap_or("unknown")
                        );
                        println!(
                            "Environment: {}",
                            health["environment"].as_str().unwrap_or("unknown")
                        );
                        if let Some(uptime) = health["uptime_seconds"].as_u64() {
                            println!("Uptime: {}", format_duration(uptime));
                        }
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Aquareef API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the API server is running:");
                    eprintln!("  cargo run --bin aquareef");
                    std::process::exit(1);
                }
            }
        }

        Commands::Login { email, password } => {
            let body = serde_json::json!({
                "email": email,
                "password": password,
            });

            let response = client
                .post(format!("{}/api/v1/auth/login", cli.api_url))
                .json(&body)
                .send()
                .await?;

            let status = response.status();
            let data: serde_json::Value = response.json().await?;

            if !status.is_success() {
                eprintln!("Login failed ({}): {}", status, error_message(&data));
                std::process::exit(1);
            }

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!(
                    "Logged in as {}",
                    data["user"]["email"].as_str().unwrap_or("-")
                );
                println!(
                    "Token (expires in {}):",
                    format_duration(data["expires_in"].as_u64().unwrap_or(0))
                );
                println!("{}", data["token"].as_str().unwrap_or("-"));
            }
        }

        Commands::Profile { token } => {
            let response = client
                .get(format!("{}/api/v1/auth/profile", cli.api_url))
                .bearer_auth(token)
                .send()
                .await?;

            let status = response.status();
            let data: serde_json::Value = response.json().await?;

            if !status.is_success() {
                eprintln!("Profile request failed ({}): {}", status, error_message(&data));
                std::process::exit(1);
            }

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data["user"])?);
            } else {
                let user = &data["user"];
                for key in ["id", "name", "email", "company", "createdAt", "updatedAt"] {
                    println!("{:<10} {}", key, user[key].as_str().unwrap_or("-"));
                }
            }
        }

        Commands::Campaigns { search, status } => {
            let mut board = CampaignBoard::default();
            if let Some(term) = search {
                board.set_search(term);
            }
            board.set_status(status);

            let visible = board.visible();
            if json_output {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else if visible.is_empty() {
                println!("No campaigns match");
            } else {
                println!(
                    "{:<4} {:<24} {:<10} {:>10} {:>10} {:>8} {:>6}",
                    "ID", "Name", "Status", "Budget", "Spent", "Reach", "Posts"
                );
                println!("{}", "-".repeat(78));
                for c in &visible {
                    println!(
                        "{:<4} {:<24} {:<10} {:>10.2} {:>10.2} {:>8} {:>6}",
                        c.id, c.name, c.status, c.budget, c.spent, c.reach, c.posts
                    );
                }
                println!("{}", "-".repeat(78));
                println!(
                    "{:<40} {:>10.2} {:>10.2}",
                    format!("{} campaign(s)", visible.len()),
                    board.total_budget(),
                    board.total_spent()
                );
            }
        }

        Commands::Content {
            search,
            kind,
            status,
        } => {
            let mut library = ContentLibrary::default();
            if let Some(term) = search {
                library.set_search(term);
            }
            library.set_kind(kind);
            library.set_status(status);

            let visible = library.visible();
            if json_output {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else if visible.is_empty() {
                println!("No content matches");
            } else {
                println!("{:<4} {:<32} {:<9} {:<10} {}", "ID", "Title", "Type", "Status", "Platforms");
                println!("{}", "-".repeat(80));
                for item in visible {
                    println!(
                        "{:<4} {:<32} {:<9} {:<10} {}",
                        item.id,
                        item.title,
                        item.kind,
                        item.status,
                        platform_list(&item.platforms)
                    );
                }
            }
        }

        Commands::Notifications {
            filter,
            read,
            delete,
            read_all,
        } => {
            let mut center = NotificationCenter::default();
            for id in read {
                if !center.mark_read(id) {
                    eprintln!("No notification with id {}", id);
                }
            }
            for id in delete {
                if !center.delete(id) {
                    eprintln!("No notification with id {}", id);
                }
            }
            if read_all {
                center.mark_all_read();
            }

            let visible = center.visible(filter);

            if json_output {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                println!(
                    "{} total, {} unread, {} need action",
                    center.len(),
                    center.unread_count(),
                    center.alert_count()
                );
                println!();
                for n in visible {
                    let marker = if n.read { " " } else { "*" };
                    println!("{} [{}] {:<11} {}", marker, n.id, n.kind, n.title);
                    println!("      {}", n.description);
                }
            }
        }

        Commands::Schedule => {
            let posts = mock::scheduled_posts();

            if json_output {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                for post in &posts {
                    println!("{}  {}", post.scheduled_time, post.status);
                    println!("  {}", post.content);
                    println!("  {}", platform_list(&post.platforms));
                    println!();
                }
            }
        }

        Commands::Analytics => {
            let snapshot = mock::analytics();

            if json_output {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                for card in &snapshot.metrics {
                    let arrow = match card.trend {
                        Trend::Up => "+",
                        Trend::Down => "",
                    };
                    println!("{:<16} {:>8}  ({}{:.1}%)", card.label, card.value, arrow, card.change);
                }
                println!();
                println!("{:<12} {:>10} {:>8} {:>6}", "Platform", "Followers", "Eng", "Posts");
                println!("{}", "-".repeat(39));
                for p in &snapshot.platforms {
                    println!(
                        "{:<12} {:>10} {:>8} {:>6}",
                        p.platform, p.followers, p.engagement, p.posts
                    );
                }
                println!();
                println!("Top posts:");
                for post in &snapshot.top_posts {
                    println!(
                        "  {} {:<10} {:>6} eng {:>7} reach",
                        post.date, post.platform, post.engagement, post.reach
                    );
                }
            }
        }

        Commands::Config { output } => {
            let config = aquareef::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn platform_list(platforms: &[Platform]) -> String {
    platforms
        .iter()
        .map(|p| p.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Message from an error envelope, or the raw body
fn error_message(data: &serde_json::Value) -> String {
    data["error"]["message"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| data.to_string())
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_binary_name() {
        assert_eq!(Cli::command().get_name(), "aquareef-cli");
    }

    #[test]
    fn test_parse_notifications() {
        let cli = Cli::try_parse_from([
            "aquareef-cli",
            "notifications",
            "--filter",
            "unread",
            "--read",
            "1",
            "--read",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Notifications { filter, read, .. } => {
                assert_eq!(filter, NotificationFilter::Unread);
                assert_eq!(read, vec![1, 2]);
            }
            _ => panic!("expected notifications"),
        }
    }

    #[test]
    fn test_error_message_prefers_envelope() {
        let data = serde_json::json!({"error": {"message": "Invalid email or password"}});
        assert_eq!(error_message(&data), "Invalid email or password");
        assert_eq!(error_message(&serde_json::json!("oops")), "\"oops\"");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(59), "59s");
        assert_eq!(format_duration(3661), "1h 1m");
        assert_eq!(format_duration(90_000), "1d 1h");
    }
}
