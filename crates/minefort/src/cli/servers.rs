use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use minefort::{ListOptions, SortOrder};
use minefort_core::server::ServerState;

#[derive(Debug, clap::Parser)]
#[command(name = "servers")]
#[command(about = "List, check, and create servers")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Public servers that are online
    Online(OnlineOptions),

    /// Servers you own or were invited to
    Mine {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a server name is free
    Available {
        name: String,
    },

    /// Create a server
    Create {
        name: String,

        /// Template to create the server from
        #[arg(long, default_value = minefort::servers::DEFAULT_TEMPLATE)]
        template: String,
    },
}

#[derive(Debug, clap::Args, Clone)]
pub struct OnlineOptions {
    /// Number of servers to skip
    #[arg(long, default_value = "0")]
    pub skip: u32,

    /// Maximum number of servers to return
    #[arg(short, long, default_value = "500")]
    pub limit: u32,

    /// Sort order on player count: asc or desc
    #[arg(long, default_value = "desc")]
    pub order: SortOrder,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Online(options) => online(options, global).await,
        Commands::Mine { json } => mine(json, global).await,
        Commands::Available { name } => available(name, global).await,
        Commands::Create { name, template } => create(name, template, global).await,
    }
}

pub fn state_label(state: ServerState) -> String {
    match state {
        ServerState::Online => state.to_string().green().to_string(),
        ServerState::Offline | ServerState::ServiceOffline => state.to_string().red().to_string(),
        _ => state.to_string().yellow().to_string(),
    }
}

async fn online(options: OnlineOptions, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let list = ListOptions {
        skip: options.skip,
        limit: options.limit,
        order: options.order,
    };
    let page = client.servers().online_servers_page(list).await?;

    if options.json {
        return print_json(&page);
    }

    if page.items.is_empty() {
        println!("{}", "No servers online.".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Name", "Players", "Version", "MOTD"]);

    for server in &page.items {
        table.add_row(prettytable::row![
            server.name.bold(),
            format!("{}/{}", server.players.count, server.players.max),
            server.version,
            server.motd.lines().next().unwrap_or_default()
        ]);
    }

    table.printstd();

    if let Some(total) = page.total {
        eprintln!("\nShowing {} of {total} servers", page.items.len());
    }
    if page.more {
        eprintln!(
            "To fetch the next page, run:\n  minefort servers online --skip {} --limit {}",
            list.next_page().skip,
            options.limit
        );
    }

    Ok(())
}

async fn mine(json: bool, global: crate::Global) -> Result<()> {
    let client = global.login().await?;
    let servers = client.servers().my_servers().await?;

    if json {
        let servers: Vec<_> = servers.iter().map(|server| server.info()).collect();
        return print_json(&servers);
    }

    if servers.is_empty() {
        println!("You have no servers.");
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["ID", "Name", "State", "Players", "Version"]);

    for server in &servers {
        table.add_row(prettytable::row![
            server.id,
            server.name.bold(),
            state_label(server.state),
            format!("{}/{}", server.players.count, server.players.max),
            server.version
        ]);
    }

    table.printstd();

    Ok(())
}

async fn available(name: String, global: crate::Global) -> Result<()> {
    let client = global.login().await?;

    if client.servers().is_name_available(&name).await? {
        println!("{} is {}", name.bold(), "available".green());
    } else {
        println!("{} is {}", name.bold(), "taken".red());
    }

    Ok(())
}

async fn create(name: String, template: String, global: crate::Global) -> Result<()> {
    let client = global.login().await?;
    let id = client
        .servers()
        .create_from_template(&name, &template)
        .await
        .with_context(|| format!("failed to create server {name:?}"))?;

    println!("Created {} with id {}", name.bold(), id.cyan());

    Ok(())
}
