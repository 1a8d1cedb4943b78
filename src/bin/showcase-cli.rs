use std::path::PathBuf;

use clap::{Parser, Subcommand};
use futures_util::{SinkExt, StreamExt};
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};
use tokio_tungstenite::{connect_async, tungstenite::Message};

#[derive(Parser)]
#[command(name = "showcase-cli")]
#[command(about = "Client for the routing showcase server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Greet a name through the path route
    Hello { name: String },
    /// Run a typed query against /search
    Search {
        query: String,
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
        #[arg(short, long)]
        exact: bool,
    },
    /// Send a person as JSON
    Json {
        name: String,
        age: u32,
        #[arg(long)]
        email: Option<String>,
    },
    /// Send names in the bracketed text format
    Text { names: Vec<String> },
    /// Upload files as a multipart form, one part per file
    Upload { files: Vec<PathBuf> },
    /// Send messages over the WebSocket echo and print the replies
    Ws { messages: Vec<String> },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Hello { name } => {
            let res = client
                .get(format!("{}/hello/{}", base, name))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Search {
            query,
            limit,
            exact,
        } => {
            let res = client
                .get(format!("{}/search", base))
                .query(&[
                    ("q", query),
                    ("limit", limit.to_string()),
                    ("exact", exact.to_string()),
                ])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Json { name, age, email } => {
            let res = client
                .post(format!("{}/json", base))
                .json(&json!({ "name": name, "age": age, "email": email }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Text { names } => {
            let body = names
                .iter()
                .map(|n| format!("[{}]", n))
                .collect::<Vec<_>>()
                .join(" ");
            let res = client
                .post(format!("{}/text", base))
                .header(CONTENT_TYPE, "text/plain")
                .body(body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Upload { files } => {
            let mut form = reqwest::multipart::Form::new();
            for (i, path) in files.iter().enumerate() {
                let bytes = tokio::fs::read(path).await?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| format!("file{}", i));
                let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                form = form.part(format!("file{}", i), part);
            }
            let res = client
                .post(format!("{}/upload", base))
                .multipart(form)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Ws { messages } => {
            let ws_url = format!("{}/ws", base.replacen("http", "ws", 1));
            let (mut socket, _) = connect_async(ws_url.as_str()).await?;
            for message in messages {
                socket.send(Message::text(message)).await?;
                match socket.next().await {
                    Some(Ok(Message::Text(reply))) => println!("{}", reply.as_str()),
                    Some(Ok(other)) => println!("{:?}", other),
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            socket.close(None).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
