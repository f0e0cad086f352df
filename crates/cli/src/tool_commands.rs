use {
    anyhow::{Context, Result},
    projector_config::ProjectorConfig,
    projector_tools::{AgentTool, ProjectorContext, status::StatusTool, welcome_prompt},
    serde_json::{Value, json},
};

use crate::Commands;

pub async fn handle(command: Commands, config: &ProjectorConfig) -> Result<()> {
    match command {
        Commands::Status => {
            let out = StatusTool::new(&config.server.name)
                .execute(json!({}))
                .await?;
            print_json(&out)
        },
        Commands::Welcome => {
            println!("{}", welcome_prompt(&config.server.name));
            Ok(())
        },
        command => {
            let registry = ProjectorContext::from_config(config)?.registry();
            let (tool, params) = match command {
                Commands::Find { keywords } => ("find_projects".to_string(), json!({
                    "keywords": keywords
                })),
                Commands::NewFolder => ("create_new_project_folder".to_string(), json!({})),
                Commands::Readme {
                    folder,
                    title,
                    keywords,
                } => ("create_readme_in_folder".to_string(), json!({
                    "folder_path": folder.to_string_lossy(),
                    "title": title,
                    "keywords": keywords,
                })),
                Commands::Tools => return print_json(&Value::Array(registry.list_schemas())),
                Commands::Call { tool, params } => {
                    let params: Value = serde_json::from_str(&params)
                        .with_context(|| format!("invalid JSON for --params: {params}"))?;
                    (tool, params)
                },
                Commands::Status | Commands::Welcome | Commands::Config { .. } => {
                    anyhow::bail!("command does not dispatch to a tool")
                },
            };
            let out = registry.call(&tool, params).await?;
            print_json(&out)
        },
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
