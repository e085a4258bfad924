mod app;
mod cli;
mod config;
mod render;

use anyhow::Context;
use app::{App, OrderPatch};
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use ordena_core::{Criteria, OrderDraft, OrderStore, RedbSlot};

fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    let cli = Cli::parse();
    let config = Config::from_env();

    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating data dir {}", config.data_dir.display()))?;
    let slot = RedbSlot::open(config.db_path())
        .with_context(|| format!("opening database {}", config.db_path().display()))?;

    let app = App::new(OrderStore::new(slot));
    app.seed_if_empty();

    match cli.command {
        Command::List {
            query,
            status,
            supplier,
            sort,
        } => {
            let criteria = Criteria {
                query,
                status,
                supplier,
                sort,
            };
            print!("{}", render::table(&app.list(&criteria)));
        }

        Command::Show { id } => {
            if let Some(order) = app.show(&id) {
                print!("{}", render::detail(&order));
            }
        }

        Command::Add {
            supplier,
            date,
            status,
            items,
        } => {
            let date = date.unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());
            let draft = OrderDraft::from_form(&supplier, &date, status, &items.join("\n"));
            match app.add(draft) {
                Ok(order) => println!("created {}", order.id),
                Err(err) => anyhow::bail!("{err}"),
            }
        }

        Command::Edit {
            id,
            supplier,
            date,
            status,
            items,
        } => {
            let patch = OrderPatch {
                supplier,
                date,
                status,
                items_text: if items.is_empty() {
                    None
                } else {
                    Some(items.join("\n"))
                },
            };
            match app.edit(&id, patch) {
                Ok(true) => println!("updated {id}"),
                Ok(false) => {}
                Err(err) => anyhow::bail!("{err}"),
            }
        }

        Command::Rm { id } => {
            if app.remove(&id) {
                println!("deleted {id}");
            }
        }

        Command::Export { out } => {
            let csv = app.export_csv();
            std::fs::write(&out, csv)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("exported to {}", out.display());
        }
    }

    Ok(())
}
