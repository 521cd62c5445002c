use crate::prelude::{println, *};
use colored::Colorize;

#[derive(Debug, clap::Args, Clone)]
pub struct LoginOptions {
    /// Print only the token, for `export MINEFORT_SESSION=$(...)`
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct MeOptions {
    /// Include affiliate statistics
    #[arg(long)]
    pub affiliate: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn login(options: LoginOptions, global: crate::Global) -> Result<()> {
    let client = global.login().await?;
    let session = client.session().ok_or_eyre("no session after login")?;

    if options.quiet {
        println!("{session}");
    } else {
        println!("{} {}", "Logged in.".green().bold(), "Reuse this session with:".dimmed());
        println!("  export MINEFORT_SESSION={session}");
    }

    Ok(())
}

pub async fn me(options: MeOptions, global: crate::Global) -> Result<()> {
    let client = global.login().await?;
    let user = client.user().me().await?;

    let affiliate = if options.affiliate {
        let stats = client.user().affiliate_stats().await?;
        let unpaid = client.user().affiliate_unpaid().await?;
        Some((stats, unpaid))
    } else {
        None
    };

    if options.json {
        let value = serde_json::json!({
            "user": user,
            "affiliate": affiliate.as_ref().map(|(stats, unpaid)| serde_json::json!({
                "stats": stats,
                "unpaid": unpaid,
            })),
        });
        return print_json(&value);
    }

    println!("\n{}\n", user.email.bright_cyan().bold());

    let mut table = new_table();
    table.add_row(prettytable::row!["User ID", user.id]);
    table.add_row(prettytable::row!["Credits", format!("{:.2}", user.credits)]);
    table.add_row(prettytable::row!["Verified", user.verified]);
    table.add_row(prettytable::row!["Two-factor", user.two_factor]);
    table.add_row(prettytable::row!["Affiliate code", user.affiliate]);

    if let Some((stats, unpaid)) = &affiliate {
        table.add_row(prettytable::row![
            "Referred users",
            format!("{} ({} today)", stats.users.total, stats.users.today)
        ]);
        table.add_row(prettytable::row![
            "Revenue",
            format!("{:.2} ({:.2} today)", stats.revenue.total, stats.revenue.today)
        ]);
        table.add_row(prettytable::row!["Unpaid", format!("{unpaid:.2}")]);
    }

    table.printstd();

    Ok(())
}
