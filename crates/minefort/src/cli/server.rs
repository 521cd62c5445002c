use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use minefort::ManagedServer;
use minefort_core::server::{PropertyValue, ServerProperty, SubUserRole};

use super::resolve_server;
use super::servers::state_label;

#[derive(Debug, clap::Parser)]
#[command(name = "server")]
#[command(about = "Act on one of your servers")]
pub struct App {
    /// Server id or name
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show the server's details
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Wake the server from hibernation
    Wakeup,

    /// Start the server
    Start,

    /// Stop the server
    Stop,

    /// Stop the server without saving
    Kill,

    /// Put the server into hibernation
    Sleep,

    /// Repair the server
    Repair,

    /// Reset the server to its template
    Reset,

    /// Delete the server
    Delete {
        /// Account password, required by the API for deletion
        #[arg(long, env = "MINEFORT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Print console output
    Console {
        /// Only print the last N lines
        #[arg(short = 'n', long)]
        tail: Option<usize>,
    },

    /// Show server properties
    Properties {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a server property, e.g. `set difficulty hard`
    Set {
        property: ServerProperty,
        value: PropertyValue,
    },

    /// Set the message of the day
    Motd { message: String },

    /// Rename the server
    Rename { name: String },

    /// Change the server icon
    Icon { icon_id: String },

    /// Install a plugin by id
    Install { plugin_id: String },

    /// List sub-users
    Subusers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Invite a sub-user by email
    Invite {
        email: String,

        /// viewer, moderator, admin or owner
        #[arg(long, default_value = "viewer")]
        role: SubUserRole,
    },
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let client = global.login().await?;
    let server = resolve_server(&client, &app.server).await?;

    if global.verbose {
        eprintln!("Using server {} ({})", server.name, server.id);
    }

    match app.command {
        Commands::Info { json } => info(&server, json),
        Commands::Wakeup => done(server.wakeup().await, &server, "woken up"),
        Commands::Start => done(server.start().await, &server, "started"),
        Commands::Stop => done(server.stop().await, &server, "stopped"),
        Commands::Kill => done(server.kill().await, &server, "killed"),
        Commands::Sleep => done(server.sleep().await, &server, "put to sleep"),
        Commands::Repair => done(server.repair().await, &server, "repaired"),
        Commands::Reset => done(server.reset().await, &server, "reset"),
        Commands::Delete { password } => done(server.delete(&password).await, &server, "deleted"),
        Commands::Console { tail } => console(&server, tail).await,
        Commands::Properties { json } => properties(&server, json).await,
        Commands::Set { property, value } => done(
            server.set_property(property, value).await,
            &server,
            &format!("updated ({})", property.as_str()),
        ),
        Commands::Motd { message } => done(server.set_motd(&message).await, &server, "MOTD updated"),
        Commands::Rename { name } => done(server.set_name(&name).await, &server, "renamed"),
        Commands::Icon { icon_id } => done(server.set_icon(&icon_id).await, &server, "icon updated"),
        Commands::Install { plugin_id } => done(
            server.install_plugin(&plugin_id).await,
            &server,
            "plugin installed",
        ),
        Commands::Subusers { json } => sub_users(&server, json).await,
        Commands::Invite { email, role } => done(
            server.invite_sub_user(&email, role).await,
            &server,
            &format!("invited {email}"),
        ),
    }
}

fn done(result: minefort::Result<()>, server: &ManagedServer, what: &str) -> Result<()> {
    result.with_context(|| format!("{} failed", server.name))?;
    println!("{} {}", server.name.bold(), what.green());
    Ok(())
}

fn info(server: &ManagedServer, json: bool) -> Result<()> {
    if json {
        return print_json(server.info());
    }

    println!("\n{}\n", server.name.bright_cyan().bold());

    let mut table = new_table();
    table.add_row(prettytable::row!["ID", server.id]);
    table.add_row(prettytable::row!["State", state_label(server.state)]);
    table.add_row(prettytable::row!["Version", server.version]);
    table.add_row(prettytable::row![
        "Players",
        format!("{}/{}", server.players.count, server.players.max)
    ]);
    table.add_row(prettytable::row![
        "RAM",
        format!("{:.0} MB", server.usage.ram_usage)
    ]);
    table.add_row(prettytable::row![
        "Disk",
        format!("{:.0} MB", server.usage.disk_usage)
    ]);
    table.add_row(prettytable::row!["Icon", server.icon.name]);
    table.add_row(prettytable::row!["Backups", server.backups.len()]);
    table.add_row(prettytable::row!["Sub-users", server.sub_users.len()]);
    table.printstd();

    if !server.motd.is_empty() {
        println!("\nMOTD:\n{}", server.motd);
    }

    Ok(())
}

async fn console(server: &ManagedServer, tail: Option<usize>) -> Result<()> {
    let lines = server.console().await?;
    let start = tail.map_or(0, |n| lines.len().saturating_sub(n));

    for line in &lines[start..] {
        println!("{line}");
    }

    Ok(())
}

async fn properties(server: &ManagedServer, json: bool) -> Result<()> {
    let properties = server.properties().await?;

    if json {
        return print_json(&properties);
    }

    let mut table = new_table();
    for (key, value) in &properties {
        table.add_row(prettytable::row![key.bold(), value]);
    }
    table.printstd();

    Ok(())
}

async fn sub_users(server: &ManagedServer, json: bool) -> Result<()> {
    let sub_users = server.sub_users().await?;

    if json {
        return print_json(&sub_users);
    }

    if sub_users.is_empty() {
        println!("No sub-users.");
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["User ID", "Email", "Role", "Accepted"]);
    for sub_user in &sub_users {
        table.add_row(prettytable::row![
            sub_user.user_id,
            sub_user.email.as_deref().unwrap_or("-"),
            format!("{:?}", sub_user.role).to_lowercase(),
            sub_user.accepted
        ]);
    }
    table.printstd();

    Ok(())
}
