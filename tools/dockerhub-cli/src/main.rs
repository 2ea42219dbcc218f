//! Docker Hub Command Line Tool
//!
//! Provides commands for working with the Docker Hub API:
//! - login: verify credentials and print the session token
//! - repo: inspect repositories
//! - tag: inspect and list image tags
//! - webhook: manage repository webhooks and their delivery URLs
//!
//! Credentials come from `--username`/`--password` or the
//! `DOCKERHUB_USERNAME`/`DOCKERHUB_PASSWORD` environment variables. When
//! both are present the tool logs in before running the command; read-only
//! commands also work anonymously.

use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use dockerhub_client::{DumpFn, HubClient};
use dockerhub_core::{BasicAuth, HookInput, RepoRef, WebhookInput};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dockerhub")]
#[command(version)]
#[command(about = "Docker Hub command line tool - inspect repositories and manage webhooks")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: Connection,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Connection {
    /// Base URL of the Docker Hub API
    #[arg(long, global = true, default_value = "https://hub.docker.com/")]
    hub_url: String,

    /// Docker Hub username
    #[arg(long, global = true, env = "DOCKERHUB_USERNAME")]
    username: Option<String>,

    /// Docker Hub password
    #[arg(long, global = true, env = "DOCKERHUB_PASSWORD")]
    password: Option<String>,

    /// Dump raw API responses to stderr
    #[arg(long, global = true)]
    dump: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify credentials against the login endpoint
    #[command(about = "Log in and print the session token")]
    Login,

    /// Inspect repositories
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },

    /// Inspect and list image tags
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },

    /// Manage repository webhooks
    Webhook {
        #[command(subcommand)]
        command: WebhookCommands,
    },
}

#[derive(Subcommand)]
enum RepoCommands {
    /// Fetch a repository and print it as JSON
    Inspect {
        /// Repository reference (NAME or NAMESPACE/NAME)
        #[arg(value_name = "REPOSITORY")]
        repository: String,
    },
}

#[derive(Subcommand)]
enum TagCommands {
    /// Fetch a single tag and print it as JSON
    Inspect {
        #[arg(value_name = "REPOSITORY")]
        repository: String,

        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// List the tags of a repository
    List {
        #[arg(value_name = "REPOSITORY")]
        repository: String,
    },
}

#[derive(Subcommand)]
enum WebhookCommands {
    /// List the webhooks of a repository
    List {
        #[arg(value_name = "REPOSITORY")]
        repository: String,
    },

    /// Fetch a single webhook and print it as JSON
    Inspect {
        #[arg(value_name = "REPOSITORY")]
        repository: String,

        #[arg(value_name = "ID")]
        id: i64,
    },

    /// Create a webhook
    Create {
        #[arg(value_name = "REPOSITORY")]
        repository: String,

        /// Name of the new webhook
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Rename a webhook
    Update {
        #[arg(value_name = "REPOSITORY")]
        repository: String,

        #[arg(value_name = "ID")]
        id: i64,

        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Delete a webhook
    Rm {
        #[arg(value_name = "REPOSITORY")]
        repository: String,

        #[arg(value_name = "ID")]
        id: i64,
    },

    /// Manage the delivery URLs of a webhook
    Hooks {
        #[command(subcommand)]
        command: HookCommands,
    },
}

#[derive(Subcommand)]
enum HookCommands {
    /// List the delivery URLs of a webhook
    List {
        #[arg(value_name = "REPOSITORY")]
        repository: String,

        #[arg(value_name = "ID")]
        id: i64,
    },

    /// Fetch a single delivery URL and print it as JSON
    Inspect {
        #[arg(value_name = "REPOSITORY")]
        repository: String,

        #[arg(value_name = "ID")]
        id: i64,

        #[arg(value_name = "HOOK_ID")]
        hook_id: i64,
    },

    /// Attach a delivery URL to a webhook
    Create {
        #[arg(value_name = "REPOSITORY")]
        repository: String,

        #[arg(value_name = "ID")]
        id: i64,

        #[arg(value_name = "URL")]
        url: String,
    },

    /// Point a delivery URL somewhere else
    Update {
        #[arg(value_name = "REPOSITORY")]
        repository: String,

        #[arg(value_name = "ID")]
        id: i64,

        #[arg(value_name = "HOOK_ID")]
        hook_id: i64,

        #[arg(value_name = "URL")]
        url: String,
    },

    /// Detach a delivery URL from a webhook
    Rm {
        #[arg(value_name = "REPOSITORY")]
        repository: String,

        #[arg(value_name = "ID")]
        id: i64,

        #[arg(value_name = "HOOK_ID")]
        hook_id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dockerhub=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli.connection)?;

    match cli.command {
        Commands::Login => handle_login(&client, &cli.connection).await,
        command => {
            let authenticated = maybe_login(&client, &cli.connection).await?;
            match command {
                Commands::Login => unreachable!("handled above"),
                Commands::Repo { command } => handle_repo(&client, command).await,
                Commands::Tag { command } => handle_tag(&client, command).await,
                Commands::Webhook { command } => {
                    handle_webhook(&client, command, authenticated).await
                }
            }
        }
    }
}

fn build_client(connection: &Connection) -> Result<HubClient> {
    let client = HubClient::new(&connection.hub_url)
        .with_context(|| format!("invalid hub URL: {}", connection.hub_url))?;

    if connection.dump {
        let dump: DumpFn = Arc::new(|res, body| {
            let mut err = std::io::stderr().lock();
            writeln!(err, "<- {}", res.status)?;
            err.write_all(body)?;
            writeln!(err)?;
            Ok(())
        });
        return Ok(client.with_dump_response(dump));
    }

    Ok(client)
}

fn credentials(connection: &Connection) -> Option<BasicAuth> {
    match (&connection.username, &connection.password) {
        (Some(username), Some(password)) => Some(BasicAuth {
            username: username.clone(),
            password: password.clone(),
        }),
        _ => None,
    }
}

async fn maybe_login(client: &HubClient, connection: &Connection) -> Result<bool> {
    let Some(credentials) = credentials(connection) else {
        return Ok(false);
    };

    let (_token, res) = client
        .auth()
        .login(&credentials)
        .await
        .context("logging in")?;
    tracing::debug!(status = %res.status, "authenticated");

    Ok(true)
}

fn require_auth(authenticated: bool) -> Result<()> {
    if !authenticated {
        bail!(
            "credentials required: pass --username/--password \
             or set DOCKERHUB_USERNAME/DOCKERHUB_PASSWORD"
        );
    }
    Ok(())
}

fn parse_repo(repository: &str) -> Result<RepoRef> {
    repository
        .parse()
        .with_context(|| format!("invalid repository reference '{repository}'"))
}

async fn handle_login(client: &HubClient, connection: &Connection) -> Result<()> {
    let Some(credentials) = credentials(connection) else {
        bail!(
            "credentials required: pass --username/--password \
             or set DOCKERHUB_USERNAME/DOCKERHUB_PASSWORD"
        );
    };

    let (token, _res) = client
        .auth()
        .login(&credentials)
        .await
        .context("logging in")?;
    println!("{}", token.token);

    Ok(())
}

async fn handle_repo(client: &HubClient, command: RepoCommands) -> Result<()> {
    match command {
        RepoCommands::Inspect { repository } => {
            let repo = parse_repo(&repository)?;
            let (repository, _res) = client.repos().get(&repo).await?;
            println!("{}", serde_json::to_string_pretty(&repository)?);
        }
    }
    Ok(())
}

async fn handle_tag(client: &HubClient, command: TagCommands) -> Result<()> {
    match command {
        TagCommands::Inspect { repository, tag } => {
            let repo = parse_repo(&repository)?;
            let (tag, _res) = client.repos().get_tag(&repo, &tag).await?;
            println!("{}", serde_json::to_string_pretty(&tag)?);
        }
        TagCommands::List { repository } => {
            let repo = parse_repo(&repository)?;
            let (tags, res) = client.repos().list_tags(&repo).await?;
            for tag in &tags {
                println!("{}\t{} images\t{} bytes", tag.name, tag.images.len(), tag.full_size);
            }
            println!("total: {}", res.page.count);
        }
    }
    Ok(())
}

async fn handle_webhook(
    client: &HubClient,
    command: WebhookCommands,
    authenticated: bool,
) -> Result<()> {
    match command {
        WebhookCommands::List { repository } => {
            let repo = parse_repo(&repository)?;
            let (webhooks, res) = client.webhooks().list(&repo).await?;
            for webhook in &webhooks {
                println!("{}\t{}\t{} hooks", webhook.id, webhook.name, webhook.hooks.len());
            }
            println!("total: {}", res.page.count);
        }
        WebhookCommands::Inspect { repository, id } => {
            let repo = parse_repo(&repository)?;
            let (webhook, _res) = client.webhooks().get(&repo, id).await?;
            println!("{}", serde_json::to_string_pretty(&webhook)?);
        }
        WebhookCommands::Create { repository, name } => {
            require_auth(authenticated)?;
            let repo = parse_repo(&repository)?;
            let input = WebhookInput { name };
            let (webhook, _res) = client.webhooks().create(&repo, &input).await?;
            println!("{}", serde_json::to_string_pretty(&webhook)?);
        }
        WebhookCommands::Update {
            repository,
            id,
            name,
        } => {
            require_auth(authenticated)?;
            let repo = parse_repo(&repository)?;
            let input = WebhookInput { name };
            let (webhook, _res) = client.webhooks().update(&repo, id, &input).await?;
            println!("{}", serde_json::to_string_pretty(&webhook)?);
        }
        WebhookCommands::Rm { repository, id } => {
            require_auth(authenticated)?;
            let repo = parse_repo(&repository)?;
            let res = client.webhooks().delete(&repo, id).await?;
            println!("deleted webhook {id} ({})", res.status);
        }
        WebhookCommands::Hooks { command } => {
            handle_hooks(client, command, authenticated).await?;
        }
    }
    Ok(())
}

async fn handle_hooks(
    client: &HubClient,
    command: HookCommands,
    authenticated: bool,
) -> Result<()> {
    match command {
        HookCommands::List { repository, id } => {
            let repo = parse_repo(&repository)?;
            let (hooks, res) = client.webhooks().list_hooks(&repo, id).await?;
            for hook in &hooks {
                println!("{}\t{}", hook.id, hook.hook_url);
            }
            println!("total: {}", res.page.count);
        }
        HookCommands::Inspect {
            repository,
            id,
            hook_id,
        } => {
            let repo = parse_repo(&repository)?;
            let (hook, _res) = client.webhooks().get_hook(&repo, id, hook_id).await?;
            println!("{}", serde_json::to_string_pretty(&hook)?);
        }
        HookCommands::Create {
            repository,
            id,
            url,
        } => {
            require_auth(authenticated)?;
            let repo = parse_repo(&repository)?;
            let input = HookInput { hook_url: url };
            let (hook, _res) = client.webhooks().create_hook(&repo, id, &input).await?;
            println!("{}", serde_json::to_string_pretty(&hook)?);
        }
        HookCommands::Update {
            repository,
            id,
            hook_id,
            url,
        } => {
            require_auth(authenticated)?;
            let repo = parse_repo(&repository)?;
            let input = HookInput { hook_url: url };
            let (hook, _res) = client
                .webhooks()
                .update_hook(&repo, id, hook_id, &input)
                .await?;
            println!("{}", serde_json::to_string_pretty(&hook)?);
        }
        HookCommands::Rm {
            repository,
            id,
            hook_id,
        } => {
            require_auth(authenticated)?;
            let repo = parse_repo(&repository)?;
            let res = client.webhooks().delete_hook(&repo, id, hook_id).await?;
            println!("deleted hook {hook_id} ({})", res.status);
        }
    }
    Ok(())
}
