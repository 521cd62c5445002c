use crate::prelude::{println, *};
use colored::Colorize;
use futures::future::try_join_all;
use minefort_core::files::CreateKind;

use super::resolve_server;

#[derive(Debug, clap::Parser)]
#[command(name = "files")]
#[command(about = "Browse and edit a server's files")]
pub struct App {
    /// Server id or name
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List a directory
    Ls {
        #[arg(default_value = "")]
        path: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one or more files
    Cat {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Replace a file's contents with the contents of a local file
    Write {
        path: String,

        /// Local file to upload
        #[arg(long)]
        from: std::path::PathBuf,
    },

    /// Create an empty file or a directory
    Create {
        path: String,

        /// file or directory
        #[arg(long = "type", default_value = "file")]
        kind: CreateKind,
    },

    /// Delete a file or directory
    Rm { path: String },

    /// Rename a file in place
    Mv { path: String, new_name: String },
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let client = global.login().await?;
    let server = resolve_server(&client, &app.server).await?;
    let files = server.files();

    match app.command {
        Commands::Ls { path, json } => {
            let entries = files
                .list(&path)
                .await
                .with_context(|| format!("failed to list {path:?}"))?;

            if json {
                return print_json(&entries);
            }

            let mut table = new_table();
            for entry in &entries {
                let name = if entry.is_dir() {
                    format!("{}/", entry.name).blue().bold()
                } else {
                    entry.name.normal()
                };
                let size = entry.size.map(|size| size.to_string()).unwrap_or_default();
                let modified = entry
                    .modified_at
                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                table.add_row(prettytable::row![name, size, modified]);
            }
            table.printstd();
        }
        Commands::Cat { paths } => {
            let contents = try_join_all(paths.iter().map(|path| files.read(path))).await?;

            for (path, content) in paths.iter().zip(contents) {
                if paths.len() > 1 {
                    println!("{}", format!("==> {path} <==").dimmed());
                }
                println!("{content}");
            }
        }
        Commands::Write { path, from } => {
            let content = std::fs::read_to_string(&from)
                .with_context(|| format!("failed to read {}", from.display()))?;
            files.write(&path, &content).await?;
            println!("Wrote {} bytes to {}", content.len(), path.bold());
        }
        Commands::Create { path, kind } => {
            files.create(&path, kind).await?;
            println!("Created {}", path.bold());
        }
        Commands::Rm { path } => {
            files.delete(&path).await?;
            println!("Deleted {}", path.bold());
        }
        Commands::Mv { path, new_name } => {
            files.rename(&path, &new_name).await?;
            println!("Renamed {} to {}", path.bold(), new_name.bold());
        }
    }

    Ok(())
}
