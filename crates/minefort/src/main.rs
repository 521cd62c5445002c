use crate::prelude::{eprintln, *};
use clap::Parser;
use minefort::{Client, ClientConfig, DEFAULT_BASE_URL};

mod cli;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Command line client for the Minefort server hosting API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// API root URL
    #[clap(long, env = "MINEFORT_BASE_URL", global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Account email address, used to log in
    #[clap(long, env = "MINEFORT_EMAIL", global = true)]
    email: Option<String>,

    /// Account password, used to log in
    #[clap(long, env = "MINEFORT_PASSWORD", global = true, hide_env_values = true)]
    password: Option<String>,

    /// Existing session token; skips the login when set
    #[clap(long, env = "MINEFORT_SESSION", global = true, hide_env_values = true)]
    session: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "MINEFORT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Client carrying `--session` when given. Enough for public endpoints.
    pub fn client(&self) -> Result<Client> {
        let client = Client::with_config(ClientConfig::with_base_url(&self.base_url))
            .context("failed to build HTTP client")?;

        if let Some(session) = &self.session {
            client.set_session(session.clone());
        }

        Ok(client)
    }

    /// Client with a session, logging in with email and password if needed.
    pub async fn login(&self) -> Result<Client> {
        let client = self.client()?;
        if client.is_authenticated() {
            return Ok(client);
        }

        let email = self
            .email
            .as_deref()
            .ok_or_eyre("MINEFORT_EMAIL (or --email) is required unless MINEFORT_SESSION is set")?;
        let password = self
            .password
            .as_deref()
            .ok_or_eyre("MINEFORT_PASSWORD (or --password) is required")?;

        client
            .auth()
            .authenticate(email, password)
            .await
            .context("login failed")?;

        if self.verbose {
            eprintln!("Logged in as {email}");
        }

        Ok(client)
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Log in and print the session token
    Login(crate::cli::account::LoginOptions),

    /// Show the authenticated account
    Me(crate::cli::account::MeOptions),

    /// List, check, and create servers
    Servers(crate::cli::servers::App),

    /// Act on one of your servers
    Server(crate::cli::server::App),

    /// Browse and edit a server's files
    Files(crate::cli::files::App),

    /// List server icons
    Icons(crate::cli::catalog::IconsOptions),

    /// Read blog articles
    Articles(crate::cli::catalog::ArticlesOptions),

    /// Browse plugins
    Plugins(crate::cli::catalog::PluginsOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Login(options) => crate::cli::account::login(options, app.global).await,
        SubCommands::Me(options) => crate::cli::account::me(options, app.global).await,
        SubCommands::Servers(sub_app) => crate::cli::servers::run(sub_app, app.global).await,
        SubCommands::Server(sub_app) => crate::cli::server::run(sub_app, app.global).await,
        SubCommands::Files(sub_app) => crate::cli::files::run(sub_app, app.global).await,
        SubCommands::Icons(options) => crate::cli::catalog::icons(options, app.global).await,
        SubCommands::Articles(options) => crate::cli::catalog::articles(options, app.global).await,
        SubCommands::Plugins(options) => crate::cli::catalog::plugins(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
