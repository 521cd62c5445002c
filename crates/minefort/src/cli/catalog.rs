use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use minefort::{PluginSearch, SortOrder};
use minefort_core::article::Article;
use minefort_core::options::find_by_id_or_name;

#[derive(Debug, clap::Args, Clone)]
pub struct IconsOptions {
    /// Show a single icon by id or name
    pub icon: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ArticlesOptions {
    /// Read one article by slug instead of listing
    pub slug: Option<String>,

    /// Print the article body as HTML
    #[arg(long)]
    pub html: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct PluginsOptions {
    /// Search term
    #[arg(default_value = "")]
    pub search: String,

    /// Number of plugins to skip
    #[arg(long, default_value = "0")]
    pub skip: u32,

    /// Maximum number of plugins to return
    #[arg(short, long, default_value = "25")]
    pub limit: u32,

    /// Sort order on downloads: asc or desc
    #[arg(long, default_value = "desc")]
    pub order: SortOrder,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn icons(options: IconsOptions, global: crate::Global) -> Result<()> {
    let client = global.login().await?;
    let icons = client.icons();

    let icons = match &options.icon {
        Some(key) => {
            let icon = find_by_id_or_name(icons.list().await?, key);
            vec![icon.ok_or_else(|| eyre!("No icon with id or name {key:?}"))?]
        }
        None => icons.list().await?,
    };

    if options.json {
        return print_json(&icons);
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["ID", "Name", "Item", "Price"]);
    for icon in &icons {
        let price = icon
            .price
            .map(|price| price.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(prettytable::row![icon.id, icon.name.bold(), icon.item, price]);
    }
    table.printstd();

    Ok(())
}

pub async fn articles(options: ArticlesOptions, global: crate::Global) -> Result<()> {
    let client = global.client()?;

    match &options.slug {
        Some(slug) => {
            let article = client
                .network()
                .article(slug)
                .await
                .with_context(|| format!("failed to read article {slug:?}"))?;

            if options.json {
                return print_json(&article);
            }
            print_article(&article, options.html);
        }
        None => {
            let articles = client.network().articles().await?;

            if options.json {
                return print_json(&articles);
            }

            let mut table = new_table();
            table.add_row(prettytable::row!["Published", "Title", "Slug"]);
            for article in &articles {
                table.add_row(prettytable::row![
                    article.published_at.format("%Y-%m-%d"),
                    article.title.bold(),
                    article.slug
                ]);
            }
            table.printstd();
        }
    }

    Ok(())
}

fn print_article(article: &Article, html: bool) {
    println!("\n{}", "=".repeat(80).bright_cyan());
    println!("{}", article.title.bright_cyan().bold());
    println!("{}", "=".repeat(80).bright_cyan());

    let authors: Vec<&str> = article.authors.iter().map(|author| author.name.as_str()).collect();
    println!(
        "{} {} · {} min read",
        article.published_at.format("%Y-%m-%d").to_string().dimmed(),
        authors.join(", "),
        article.reading_time
    );
    println!("{}\n", article.url.cyan().underline());

    if html {
        println!("{}", article.content);
    } else {
        println!("{}", article.custom_excerpt.as_deref().unwrap_or(&article.excerpt));
    }
}

pub async fn plugins(options: PluginsOptions, global: crate::Global) -> Result<()> {
    let client = global.login().await?;
    let search = PluginSearch {
        search: options.search.clone(),
        skip: options.skip,
        limit: options.limit,
        order: options.order,
    };
    let page = client.plugins().browse_page(search.clone()).await?;

    if options.json {
        return print_json(&page);
    }

    if page.items.is_empty() {
        println!("{}", "No plugins found.".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["ID", "Name", "Installable", "Description"]);
    for plugin in &page.items {
        let installable = if plugin.installable {
            "yes".green()
        } else {
            "no".red()
        };
        table.add_row(prettytable::row![
            plugin.id,
            plugin.name.bold(),
            installable,
            plugin.description
        ]);
    }
    table.printstd();

    if page.more {
        eprintln!(
            "\nTo fetch the next page, run:\n  minefort plugins {:?} --skip {} --limit {}",
            options.search,
            search.next_page().skip,
            options.limit
        );
    }

    Ok(())
}
