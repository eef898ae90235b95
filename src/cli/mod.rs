//! Terminal client for the Hello backend.
//!
//! Every dashboard operation is available as a subcommand; `watch` is the
//! terminal rendition of the dashboard auto-refresh.

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::{DashboardConfig, DEFAULT_BACKEND_URL};
use crate::domain::models::{Document, User, UserDraft};
use crate::shared::errors::AppError;
use crate::shared::services::ApiService;
use crate::shared::state::{MessageFeed, SearchView};

#[derive(Parser, Debug)]
#[command(name = "hello")]
#[command(about = "Terminal client for the Hello backend: greeting, messages, indices and users")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "BACKEND_URL", default_value = DEFAULT_BACKEND_URL, global = true)]
    pub backend_url: String,

    /// Print raw JSON responses
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Show the backend greeting
    Greeting,
    /// Publish or list messages
    Messages {
        #[command(subcommand)]
        action: MessageCommands,
    },
    /// List search indices (system indices hidden)
    Indices,
    /// Show the latest documents of an index
    Search {
        /// Index name (defaults to DEFAULT_INDEX)
        index: Option<String>,
        /// Number of documents (defaults to SEARCH_SIZE, then 10)
        #[arg(long)]
        size: Option<u32>,
    },
    /// Index a JSON document
    IndexDoc {
        index: String,
        /// Document body, e.g. '{"level":"INFO","msg":"hi"}'
        document: String,
    },
    /// Manage user records
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Poll received messages and search results on a fixed interval
    Watch {
        /// Index name (defaults to DEFAULT_INDEX)
        index: Option<String>,
        /// Seconds between refreshes (defaults to REFRESH_INTERVAL_SECS, then 5)
        #[arg(long)]
        interval: Option<u64>,
        /// Number of documents (defaults to SEARCH_SIZE, then 10)
        #[arg(long)]
        size: Option<u32>,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum MessageCommands {
    /// Publish a message
    Send { text: String },
    /// List received messages
    List,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum UserCommands {
    List,
    Get { id: i64 },
    Create { name: String, email: String },
    Update { id: i64, name: String, email: String },
    Delete { id: i64 },
    Count,
    /// Seed sample users when the table is empty
    Init,
}

struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text(value));
        }
        Ok(())
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DashboardConfig::from_env().with_backend_url(&cli.backend_url);
    if config.backend_url.is_empty() {
        return Err(AppError::Config("--backend-url must be an absolute URL".to_string()).into());
    }
    let api = ApiService::from_config(&config);
    let out = Output { json: cli.json };

    match cli.command {
        Commands::Greeting => {
            let greeting = api.fetch_greeting().await?;
            out.emit(&greeting, |g| g.message.clone())?;
        }
        Commands::Messages { action } => match action {
            MessageCommands::Send { text } => {
                let resp = api.send_message(&text).await?;
                out.emit(&resp, |r| format!("{}: {}", r.status, r.message))?;
            }
            MessageCommands::List => {
                let messages = api.received_messages().await?;
                out.emit(&messages, |m| format_messages(m))?;
            }
        },
        Commands::Indices => {
            let indices = api.list_indices().await?;
            out.emit(&indices, |i| i.join("\n"))?;
        }
        Commands::Search { index, size } => {
            let index = index.unwrap_or_else(|| config.default_index.clone());
            let result = api.search_index(&index, search_size(size, &config)).await?;
            out.emit(&result, |r| {
                let mut text = format!("Total: {} documents", r.total);
                for doc in &r.documents {
                    text.push('\n');
                    text.push_str(&format_document(doc));
                }
                text
            })?;
        }
        Commands::IndexDoc { index, document } => {
            let body: serde_json::Value =
                serde_json::from_str(&document).context("document must be valid JSON")?;
            let indexed = api.index_document(&index, &body).await?;
            out.emit(&indexed, |d| format!("{} ({})", d.id, d.result))?;
        }
        Commands::Users { action } => run_users(&api, &out, action).await?,
        Commands::Watch { index, interval, size } => {
            let index = index.unwrap_or_else(|| config.default_index.clone());
            let period = refresh_interval(interval, &config);
            watch(&api, &index, search_size(size, &config), period).await?;
        }
    }

    Ok(())
}

/// `--size` wins over `SEARCH_SIZE`; zero counts as unset
fn search_size(flag: Option<u32>, config: &DashboardConfig) -> u32 {
    flag.filter(|size| *size > 0).unwrap_or(config.search_size)
}

/// `--interval` wins over `REFRESH_INTERVAL_SECS`; zero counts as unset
fn refresh_interval(flag: Option<u64>, config: &DashboardConfig) -> Duration {
    flag.filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(config.refresh_interval)
}

async fn run_users(api: &ApiService, out: &Output, action: UserCommands) -> anyhow::Result<()> {
    match action {
        UserCommands::List => {
            let users = api.list_users().await?;
            out.emit(&users, |u| {
                u.iter().map(format_user).collect::<Vec<_>>().join("\n")
            })?;
        }
        UserCommands::Get { id } => {
            let user = api.get_user(id).await?;
            out.emit(&user, format_user)?;
        }
        UserCommands::Create { name, email } => {
            let user = api.create_user(&UserDraft::new(name, email)).await?;
            out.emit(&user, format_user)?;
        }
        UserCommands::Update { id, name, email } => {
            let user = api.update_user(id, &UserDraft::new(name, email)).await?;
            out.emit(&user, format_user)?;
        }
        UserCommands::Delete { id } => {
            let resp = api.delete_user(id).await?;
            out.emit(&resp, |r| r.message.clone())?;
        }
        UserCommands::Count => {
            let count = api.count_users().await?;
            out.emit(&count, |c| c.to_string())?;
        }
        UserCommands::Init => {
            let resp = api.init_users().await?;
            out.emit(&resp, |r| format!("{} ({} users)", r.message, r.count))?;
        }
    }
    Ok(())
}

/// Re-read messages and search results every `period` until Ctrl-C,
/// printing each panel when its content changed.
async fn watch(api: &ApiService, index: &str, size: u32, period: Duration) -> anyhow::Result<()> {
    let mut feed = MessageFeed::default();
    let mut search = SearchView::new(index);
    let mut first = true;
    let mut ticker = tokio::time::interval(period);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => break,
        }

        let (messages, results) =
            futures::join!(api.received_messages(), api.search_index(index, size));

        match messages {
            Ok(messages) => {
                if first || messages != feed.messages {
                    feed.replace(messages);
                    println!("Messages reçus ({}):", feed.len());
                    println!("{}", format_messages(&feed.messages));
                }
            }
            Err(e) => tracing::warn!("Error fetching messages: {}", e),
        }

        let before = (search.total, search.documents.clone());
        match results {
            Ok(result) => search.apply_results(result),
            Err(e) => {
                tracing::warn!("Error searching {}: {}", index, e);
                search.clear_results();
            }
        }
        if first || before != (search.total, search.documents.clone()) {
            println!("[{}] Total: {} documents", index, search.total);
            for doc in &search.documents {
                println!("{}", format_document(doc));
            }
        }

        first = false;
    }

    Ok(())
}

/// Numbered list, highest number first
pub fn format_messages(messages: &[String]) -> String {
    if messages.is_empty() {
        return "Aucun message reçu pour le moment".to_string();
    }
    let mut feed = MessageFeed::default();
    feed.replace(messages.to_vec());
    feed.numbered()
        .into_iter()
        .map(|(number, text)| format!("#{} {}", number, text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_document(doc: &Document) -> String {
    format!("ID: {}\n{}", doc.id, doc.pretty_source())
}

pub fn format_user(user: &User) -> String {
    let created = user.created_label();
    if created.is_empty() {
        format!("#{} {} <{}>", user.id, user.name, user.email)
    } else {
        format!("#{} {} <{}> {}", user.id, user.name, user.email, created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_parse_search_defaults() {
        let cli = Cli::try_parse_from(["hello", "search"]).unwrap();
        assert_eq!(cli.command, Commands::Search { index: None, size: None });
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hello", "users", "create", "Alice", "alice@example.com",
            "--backend-url", "http://api:9000", "--json",
        ])
        .unwrap();

        assert_eq!(cli.backend_url, "http://api:9000");
        assert!(cli.json);
        assert_eq!(
            cli.command,
            Commands::Users {
                action: UserCommands::Create {
                    name: "Alice".to_string(),
                    email: "alice@example.com".to_string()
                }
            }
        );
    }

    #[test]
    fn test_parse_watch_interval() {
        let cli = Cli::try_parse_from(["hello", "watch", "users", "--interval", "2"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Watch {
                index: Some("users".to_string()),
                interval: Some(2),
                size: None
            }
        );
    }

    #[test]
    fn test_environment_values_apply_without_flags() {
        let config = DashboardConfig::from_lookup(|key| match key {
            "SEARCH_SIZE" => Some("3".to_string()),
            "REFRESH_INTERVAL_SECS" => Some("2".to_string()),
            _ => None,
        });

        let cli = Cli::try_parse_from(["hello", "watch"]).unwrap();
        let Commands::Watch { interval, size, .. } = cli.command else {
            panic!("expected watch");
        };
        assert_eq!(search_size(size, &config), 3);
        assert_eq!(refresh_interval(interval, &config), Duration::from_secs(2));

        let cli = Cli::try_parse_from(["hello", "search", "--size", "7"]).unwrap();
        let Commands::Search { size, .. } = cli.command else {
            panic!("expected search");
        };
        assert_eq!(search_size(size, &config), 7);

        assert_eq!(refresh_interval(Some(0), &config), Duration::from_secs(2));
        assert_eq!(search_size(None, &DashboardConfig::default()), 10);
    }

    #[test]
    fn test_parse_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["hello", "users", "delete", "abc"]).is_err());
    }

    #[test]
    fn test_format_messages() {
        let text = format_messages(&["second".to_string(), "first".to_string()]);
        assert_eq!(text, "#2 second\n#1 first");
        assert_eq!(format_messages(&[]), "Aucun message reçu pour le moment");
    }

    #[test]
    fn test_format_user() {
        let mut user = User {
            id: 1,
            name: "Alice Dupont".to_string(),
            email: "alice@example.com".to_string(),
            created_at: None,
        };
        assert_eq!(format_user(&user), "#1 Alice Dupont <alice@example.com>");

        user.created_at = NaiveDate::from_ymd_opt(2024, 12, 1)
            .unwrap()
            .and_hms_opt(14, 3, 0);
        assert_eq!(
            format_user(&user),
            "#1 Alice Dupont <alice@example.com> 12/1/24, 2:03 PM"
        );
    }

    #[test]
    fn test_format_document() {
        let doc = Document {
            id: "abc".to_string(),
            source: json!({ "level": "INFO" }),
        };
        assert_eq!(format_document(&doc), "ID: abc\n{\n  \"level\": \"INFO\"\n}");
    }
}
