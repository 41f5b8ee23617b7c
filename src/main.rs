//! CLI `clickup`: consultas rápidas à API usando o SDK
//!
//! A configuração vem de `ClientSettings::load_with_token`: `--token` (ou
//! `CLICKUP_API_TOKEN`) substitui só o token, URLs e timeouts seguem o
//! arquivo e as variáveis `CLICKUP_*`. Ctrl-C cancela a operação em curso.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures::StreamExt;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use clickup_sdk::models::{CustomTaskIdOptions, GetTaskQuery, GetTasksQuery, GetTimeEntriesQuery};
use clickup_sdk::{CancellationToken, ClickUpClient, ClientSettings};

#[derive(Parser)]
#[command(name = "clickup")]
#[command(about = "Cliente de linha de comando para a API do ClickUp", long_about = None)]
#[command(version)]
struct Cli {
    /// Token da API (pk_...) ou access token OAuth2
    #[arg(long, env = "CLICKUP_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Logs em nível debug
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Usuário autenticado
    Me,

    /// Workspaces acessíveis pelo token
    Workspaces,

    /// Spaces de um workspace
    Spaces {
        workspace_id: String,

        #[arg(long)]
        archived: bool,
    },

    /// Uma página de tasks da list
    Tasks {
        list_id: String,

        /// Página inicial (a API começa em 0)
        #[arg(long)]
        page: Option<i32>,

        /// Percorre todas as páginas
        #[arg(long)]
        all: bool,

        #[arg(long)]
        include_closed: bool,
    },

    /// Detalhes de uma task
    Task {
        task_id: String,

        /// Interpreta `task_id` como custom id do workspace informado
        #[arg(long)]
        team_id: Option<String>,
    },

    /// Todos os comentários da task (paginação automática)
    Comments {
        task_id: String,

        #[arg(long)]
        team_id: Option<String>,
    },

    /// Publica um comentário na task
    Comment {
        task_id: String,
        text: String,

        #[arg(long)]
        notify_all: bool,
    },

    /// Time entries do workspace (últimos 30 dias por padrão da API)
    TimeEntries {
        workspace_id: String,

        #[arg(long)]
        task_id: Option<String>,
    },

    /// Timer em andamento, se houver
    Running { workspace_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "clickup_sdk=debug,clickup=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = ClientSettings::load_with_token(cli.token)
        .context("Falha ao carregar configuração do ClickUp")?;
    let client = ClickUpClient::new(&settings)?;

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("⚠️ Ctrl-C recebido, cancelando...");
            on_ctrl_c.cancel();
        }
    });

    run(cli.command, &client, &cancel).await
}

async fn run(command: Commands, client: &ClickUpClient, cancel: &CancellationToken) -> Result<()> {
    match command {
        Commands::Me => print(&client.authorization().get_authorized_user(cancel).await?),
        Commands::Workspaces => print(&client.authorization().get_authorized_workspaces(cancel).await?),
        Commands::Spaces {
            workspace_id,
            archived,
        } => print(&client.spaces().get_spaces(&workspace_id, flag(archived), cancel).await?),
        Commands::Tasks {
            list_id,
            page,
            all,
            include_closed,
        } => {
            let query = tasks_query(page, include_closed);
            if all {
                let mut tasks = client.tasks().get_tasks_stream(&list_id, query, cancel);
                while let Some(task) = tasks.next().await {
                    print(&task?)?;
                }
                Ok(())
            } else {
                print(&client.tasks().get_tasks(&list_id, &query, cancel).await?.tasks)
            }
        }
        Commands::Task { task_id, team_id } => {
            let query = GetTaskQuery {
                custom_task_ids: team_id.as_ref().map(|_| true),
                team_id,
                ..Default::default()
            };
            print(&client.tasks().get_task(&task_id, &query, cancel).await?)
        }
        Commands::Comments { task_id, team_id } => {
            let mut comments =
                client
                    .comments()
                    .get_task_comments_stream(&task_id, &task_ids(team_id), None, cancel);
            let mut total = 0usize;
            while let Some(comment) = comments.next().await {
                print(&comment?)?;
                total += 1;
            }
            tracing::info!("💬 {} comentários lidos", total);
            Ok(())
        }
        Commands::Comment {
            task_id,
            text,
            notify_all,
        } => {
            let created = client
                .fluent()
                .add_task_comment(task_id)
                .with_text(text)
                .with_notify_all(notify_all)
                .add(cancel)
                .await?;
            print(&created)
        }
        Commands::TimeEntries {
            workspace_id,
            task_id,
        } => {
            let query = GetTimeEntriesQuery {
                task_id,
                ..Default::default()
            };
            print(&client.time_tracking().get_time_entries(&workspace_id, &query, cancel).await?)
        }
        Commands::Running { workspace_id } => {
            match client
                .time_tracking()
                .get_running_time_entry(&workspace_id, None, cancel)
                .await?
            {
                Some(entry) => print(&entry),
                None => {
                    println!("Nenhum timer em andamento");
                    Ok(())
                }
            }
        }
    }
}

/// Flags ausentes não viram `false` na query
fn flag(value: bool) -> Option<bool> {
    value.then_some(true)
}

fn tasks_query(page: Option<i32>, include_closed: bool) -> GetTasksQuery {
    GetTasksQuery {
        page,
        include_closed: flag(include_closed),
        ..Default::default()
    }
}

fn task_ids(team_id: Option<String>) -> CustomTaskIdOptions {
    team_id.map(CustomTaskIdOptions::custom).unwrap_or_default()
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
