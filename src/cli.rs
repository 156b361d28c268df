use std::time::Duration;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use scheduleViewer::config::Settings;
use scheduleViewer::runtime::start_store;
use scheduleViewer::service::formatting::{render_highlights, render_view};
use scheduleViewer::service::grouping::{derive_groups, GroupFilter};
use scheduleViewer::service::loader::LoadStatus;
use scheduleViewer::service::resolver::local_now;
use scheduleViewer::service::view::build_view;
use scheduleViewer::tasks::refresh::ScheduleStore;
use scheduleViewer::tasks::watch_loop::run_watch_loop;

#[derive(Parser)]
struct Cli {
    /// Base URL of the schedule endpoint
    #[arg(long, global = true)]
    endpoint: Option<String>,
    /// Sheet key to load
    #[arg(long, global = true)]
    sheet: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Show {
        #[arg(long, default_value = "all")]
        group: String,
        #[arg(long, value_parser = parse_at)]
        at: Option<NaiveDateTime>,
    },
    Groups,
    Now {
        #[arg(long, default_value = "all")]
        group: String,
        #[arg(long, value_parser = parse_at)]
        at: Option<NaiveDateTime>,
    },
    Pick,
    Watch {
        #[arg(long, default_value = "all")]
        group: String,
        #[arg(long, default_value_t = 60)]
        interval: u64,
        #[arg(long, default_value_t = 900)]
        reload: u64,
    },
}

fn parse_at(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .map_err(|e| format!("expected \"YYYY-MM-DD HH:MM\": {}", e))
}

pub async fn cli(mut settings: Settings) {
    let cli = Cli::parse();
    if cli.endpoint.is_some() {
        settings.endpoint = cli.endpoint;
    }
    if let Some(sheet) = cli.sheet {
        settings.sheet = sheet;
    }

    let store = start_store(&settings).await;
    let now = |at: Option<NaiveDateTime>| at.unwrap_or_else(|| local_now(settings.timezone));

    match cli.command {
        Commands::Show { group, at } => {
            store.select_group(GroupFilter::parse(&group)).await;
            let state = store.snapshot().await;
            print!("{}", render_view(&build_view(&state, now(at))));
        }
        Commands::Groups => {
            let state = store.snapshot().await;
            for group in build_view(&state, now(None)).groups {
                println!("{}", group);
            }
        }
        Commands::Now { group, at } => {
            store.select_group(GroupFilter::parse(&group)).await;
            let state = store.snapshot().await;
            let highlights = render_highlights(&build_view(&state, now(at)));
            if highlights.is_empty() {
                println!("Сегодня больше занятий нет");
            } else {
                print!("{}", highlights);
            }
        }
        Commands::Pick => {
            if let Err(e) = pick(&store).await {
                println!("Selection aborted: {}", e);
                return;
            }
            let state = store.snapshot().await;
            print!("{}", render_view(&build_view(&state, now(None))));
        }
        Commands::Watch {
            group,
            interval,
            reload,
        } => {
            store.select_group(GroupFilter::parse(&group)).await;
            run_watch_loop(
                store,
                settings.timezone,
                Duration::from_secs(interval.max(1)),
                Duration::from_secs(reload.max(1)),
            )
            .await;
        }
    }
}

async fn pick(store: &ScheduleStore) -> Result<(), Box<dyn std::error::Error>> {
    let current_sheet = store.snapshot().await.sheet;
    let sheet = Text::new("Лист расписания")
        .with_default(&current_sheet)
        .prompt()?;
    if sheet.trim() != current_sheet {
        println!("Загрузка…");
        store.refresh(sheet.trim()).await;
    }

    let state = store.snapshot().await;
    if let LoadStatus::Degraded(err) = &state.status {
        println!("Живые данные недоступны: {}", err);
    }
    let options: Vec<String> = derive_groups(&state.entries)
        .iter()
        .map(|group| group.to_string())
        .collect();
    let choice = Select::new("Группа", options).prompt()?;
    store.select_group(GroupFilter::parse(&choice)).await;
    Ok(())
}
