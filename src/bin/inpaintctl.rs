use clap::{Parser, Subcommand};
use inpaint_proxy::api::handlers::handle;
use inpaint_proxy::{Config, InpaintClient};
use axum::http::{Method, StatusCode};
use serde_json::json;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "inpaintctl", about = "CLI for the Inpaint API Proxy", version)]
struct Cli {
    /// Override INPAINTING_API_URL
    #[arg(global = true, long)]
    api_url: Option<String>,

    /// Override TENSOR_ART_API_KEY
    #[arg(global = true, long)]
    api_key: Option<String>,

    /// Override INPAINTING_TIMEOUT_SECS
    #[arg(global = true, long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send one inpainting request upstream and print the JSON result
    Run {
        /// Original image (data URI or URL); `@path` reads it from a file
        #[arg(long, value_name = "IMAGE")]
        original: String,
        /// Mask image (data URI or URL); `@path` reads it from a file
        #[arg(long, value_name = "IMAGE")]
        mask: String,
        /// Optional product image (data URI or URL); `@path` reads it from a file
        #[arg(long, value_name = "IMAGE")]
        product: Option<String>,
        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },
    /// Show the effective configuration
    Env,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let mut conf = Config::new().expect("Failed to load config");
    if let Some(url) = cli.api_url.filter(|u| !u.is_empty()) {
        conf.inpainting_api_url = url;
    }
    if let Some(key) = cli.api_key {
        conf.api_key = Some(key).filter(|k| !k.is_empty());
    }
    if let Some(secs) = cli.timeout_secs {
        conf.timeout_secs = Some(secs).filter(|s| *s > 0);
    }

    match cli.command {
        Commands::Run { original, mask, product, pretty } => {
            let body = json!({
                "originalImage": load_image_arg(&original).await?,
                "productImage": match product {
                    Some(p) => Some(load_image_arg(&p).await?),
                    None => None,
                },
                "maskImage": load_image_arg(&mask).await?,
            });

            let client = InpaintClient::new(conf.upstream());
            let (status, result) = handle(&Method::POST, body.to_string().as_bytes(), &client).await;
            if pretty {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", serde_json::to_string(&result)?);
            }
            if status != StatusCode::OK {
                eprintln!("Error: inpainting failed with status {}", status.as_u16());
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Env => {
            let upstream = conf.upstream();
            println!("url: {}", upstream.url);
            println!("credential: {}", if upstream.credential.is_some() { "<set>" } else { "<unset>" });
            println!(
                "timeout: {}",
                upstream.timeout.map(|t: Duration| format!("{}s", t.as_secs())).unwrap_or_else(|| "<none>".to_string())
            );
            Ok(())
        }
    }
}

/// Values starting with `@` name a file holding the image string.
async fn load_image_arg(value: &str) -> Result<String, std::io::Error> {
    match value.strip_prefix('@') {
        Some(path) => Ok(tokio::fs::read_to_string(path).await?.trim().to_string()),
        None => Ok(value.to_string()),
    }
}
