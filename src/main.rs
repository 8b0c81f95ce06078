use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use recruitment_client::{
    config::{get_config, init_config},
    editor::StageDraft,
    models::stage::StageType,
    session::{FileSessionStore, TracingNavigator},
    ApiServices,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const USAGE: &str = "usage: recruitment-client <command>

commands:
  login <email> <senha>
  logout
  whoami
  stages <vagaId>
  add-stage <vagaId> <nome> [tipo]
  history <processoId>
  advance <processoId> [feedback]
  reject <processoId> <feedback>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    init_config()?;
    let config = get_config()?;

    let store = Arc::new(FileSessionStore::open(&config.session_file)?);
    let api = ApiServices::new(config, store, Arc::new(TracingNavigator))?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command: Vec<&str> = args.iter().map(String::as_str).collect();

    match command.as_slice() {
        ["login", email, password] => {
            let response = api.auth.login(email, password).await?;
            info!(
                "Logged in as {}",
                response.name.or(response.email).unwrap_or_else(|| email.to_string())
            );
        }
        ["logout"] => api.auth.logout(),
        ["whoami"] => {
            if !api.auth.is_authenticated() {
                bail!("not logged in");
            }
            println!("email:        {}", api.auth.email().unwrap_or_else(|| "-".into()));
            println!("name:         {}", api.auth.display_name().unwrap_or_else(|| "-".into()));
            println!(
                "organization: {}",
                api.auth.organization_name().unwrap_or_else(|| "-".into())
            );
            println!("roles:        {}", api.auth.roles().unwrap_or_default().join(", "));
        }
        ["stages", job_id] => {
            let mut editor = api.stage_editor(parse_id(job_id)?);
            editor.load().await;
            for stage in editor.stages() {
                println!("{:>2}. {} [{}]", stage.order, stage.name, stage.stage_type.label());
            }
        }
        ["add-stage", job_id, name, rest @ ..] => {
            let stage_type = match rest {
                [] => None,
                [raw] => Some(raw.parse::<StageType>().map_err(|e| {
                    let known: Vec<_> = StageType::ALL.iter().map(|t| t.label()).collect();
                    anyhow!("{} (known types: {})", e, known.join(", "))
                })?),
                _ => bail!(USAGE),
            };
            let mut editor = api.stage_editor(parse_id(job_id)?);
            editor.load().await;
            editor.add(StageDraft {
                name: name.to_string(),
                stage_type,
                description: None,
            })?;
            let report = editor.save_and_reload().await;
            if let Some(notice) = report.notice() {
                bail!(notice);
            }
            editor.finish();
        }
        ["history", process_id] => {
            for entry in api.selection_processes.history(parse_id(process_id)?).await? {
                println!(
                    "{}  {:?}  {}  {}",
                    entry.occurred_at.format("%Y-%m-%d %H:%M"),
                    entry.action,
                    entry.stage_name.unwrap_or(entry.stage_id),
                    entry.feedback.unwrap_or_default()
                );
            }
        }
        ["advance", process_id, feedback @ ..] => {
            let feedback = (!feedback.is_empty()).then(|| feedback.join(" "));
            let process = api
                .selection_processes
                .advance(parse_id(process_id)?, feedback)
                .await?;
            println!("current stage: {}", process.current_stage_id);
        }
        ["reject", process_id, feedback @ ..] if !feedback.is_empty() => {
            api.selection_processes
                .reject(parse_id(process_id)?, &feedback.join(" "))
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

fn parse_id(raw: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(raw).with_context(|| format!("invalid id: {}", raw))
}
