// Wardiya command line entry point

use std::path::PathBuf;
use std::time::Duration as StdDuration;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use wardiya::models::settings::{Settings, MIN_WATCH_INTERVAL_SECS};
use wardiya::services::dashboard::dashboard_cards;
use wardiya::services::database::Database;
use wardiya::services::holiday::HolidayService;
use wardiya::services::notification::NotificationService;
use wardiya::services::schedule::{effective_day, get_current_week_index, RolloverRule, Schedule, ScheduleFilter};
use wardiya::services::settings::{resolve_database_path, SettingsService};
use wardiya::services::storage::{KeyValueStore, SqliteStore};
use wardiya::services::watcher::WeekWatcher;
use wardiya::services::week_tracker::WeekTracker;
use wardiya::ui::{render_dashboard, render_schedule_cards, render_schedule_table};
use wardiya::utils::date::{parse_date_input, Clock, FixedClock, SystemClock};

#[derive(Parser)]
#[command(name = "wardiya")]
#[command(version)]
#[command(about = "Three-person weekly shift rotation calendar", long_about = None)]
struct Cli {
    /// SQLite file holding the holiday override and last seen week
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Pretend the current time is this local instant ("yyyy-mm-dd HH:MM")
    #[arg(long, global = true, value_parser = parse_now)]
    now: Option<NaiveDateTime>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Last, current and next week
    Dashboard,
    /// Full schedule, optionally filtered
    Schedule {
        /// Only weeks this person works in
        #[arg(short, long)]
        person: Option<String>,

        /// Only the week containing this date (yyyy-mm-dd)
        #[arg(short, long)]
        date: Option<String>,

        /// Card list instead of a table
        #[arg(long)]
        compact: bool,

        /// Print the matching weeks as JSON
        #[arg(long, conflicts_with = "compact")]
        json: bool,
    },
    /// Show or change the holiday list
    Holidays {
        #[command(subcommand)]
        action: Option<HolidayAction>,
    },
    /// Keep the dashboard up to date, re-checking on an interval
    Watch {
        /// Seconds between checks
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// Show or change config.toml
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location and its settings
    Show,
    /// Change one or more settings
    Set {
        /// SQLite file for the key-value store
        #[arg(long)]
        database_path: Option<PathBuf>,

        /// Use the default data directory again
        #[arg(long, conflicts_with = "database_path")]
        default_database: bool,

        /// Show new-week notices as desktop notifications
        #[arg(long)]
        notifications: Option<bool>,

        /// Default seconds between `watch` checks
        #[arg(long)]
        watch_interval: Option<u64>,
    },
}

#[derive(Subcommand)]
enum HolidayAction {
    /// Print the holiday dates in effect
    List,
    /// Replace the holiday list (dd/mm/yyyy)
    Set { dates: Vec<String> },
    /// Go back to the built-in list
    Reset,
}

fn parse_now(text: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M")
        .map_err(|e| format!("expected \"yyyy-mm-dd HH:MM\": {}", e))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let settings_service = SettingsService::from_default_location();
    let command = cli.command.unwrap_or(Commands::Dashboard);

    if let Commands::Config { action } = command {
        return run_config(&settings_service, action.unwrap_or(ConfigAction::Show));
    }

    let settings = settings_service.get_or_default();
    log::debug!("Loaded settings from {}", settings_service.path().display());

    let db_path = match cli.db {
        Some(ref path) => path.clone(),
        None => resolve_database_path(&settings)?,
    };
    let db_path_str = db_path.to_string_lossy();
    let db = Database::open_initialized(&db_path_str)
        .with_context(|| format!("Failed to open store at {}", db_path.display()))?;
    let store = SqliteStore::new(&db);

    let clock: Box<dyn Clock> = match cli.now {
        Some(now) => Box::new(FixedClock(now)),
        None => Box::new(SystemClock),
    };

    let schedule = Schedule::standard();

    match command {
        Commands::Dashboard => {
            show_dashboard(&schedule, &store, clock.now(), &settings);
        }
        Commands::Schedule {
            person,
            date,
            compact,
            json,
        } => {
            show_schedule(&schedule, &store, clock.now(), person, date, compact, json)?;
        }
        Commands::Holidays { action } => {
            run_holidays(&store, action.unwrap_or(HolidayAction::List))?;
        }
        Commands::Watch { interval } => {
            let secs = interval
                .unwrap_or(settings.watch_interval_secs)
                .max(MIN_WATCH_INTERVAL_SECS);
            watch(&schedule, &store, clock.as_ref(), &settings, StdDuration::from_secs(secs));
        }
        Commands::Config { .. } => {} // handled before the store is opened
    }

    Ok(())
}

fn show_dashboard(schedule: &Schedule, store: &dyn KeyValueStore, now: NaiveDateTime, settings: &Settings) {
    let holidays = HolidayService::new(store).load();
    let current = get_current_week_index(schedule, now);
    let today = effective_day(now, &RolloverRule::default());

    let cards = dashboard_cards(schedule, current, today, &holidays);
    print!("{}", render_dashboard(&cards));

    if let Some(notice) = WeekTracker::new(store).check_new_week(schedule, current) {
        let notifications = NotificationService::new(settings.desktop_notifications);
        match notifications.show_new_week(&notice) {
            Ok(true) => {}
            Ok(false) => println!("\n{}", notice),
            Err(e) => {
                log::warn!("{}", e);
                println!("\n{}", notice);
            }
        }
    }
}

fn show_schedule(
    schedule: &Schedule,
    store: &dyn KeyValueStore,
    now: NaiveDateTime,
    person: Option<String>,
    date: Option<String>,
    compact: bool,
    json: bool,
) -> Result<()> {
    let holidays = HolidayService::new(store).load();
    let current = get_current_week_index(schedule, now);

    let date = match date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(text) => {
            let parsed = parse_date_input(text);
            if parsed.is_none() {
                eprintln!("Invalid date '{}', expected yyyy-mm-dd; showing all dates", text);
            }
            parsed
        }
        None => None,
    };

    let filter = ScheduleFilter { person, date };
    let rows = filter.apply(schedule);

    if json {
        let weeks: Vec<_> = rows.iter().map(|(_, week)| *week).collect();
        println!("{}", serde_json::to_string_pretty(&weeks)?);
    } else if compact {
        print!("{}", render_schedule_cards(&rows, current, &holidays));
    } else {
        print!("{}", render_schedule_table(&rows, current, &holidays));
    }

    Ok(())
}

fn run_holidays(store: &dyn KeyValueStore, action: HolidayAction) -> Result<()> {
    let service = HolidayService::new(store);

    match action {
        HolidayAction::List => {
            let source = if service.has_override() { "override" } else { "built-in" };
            println!("Holidays ({}):", source);
            for date in service.load().iter() {
                println!("  {}", date);
            }
        }
        HolidayAction::Set { dates } => {
            let set = service.set_override(&dates)?;
            println!("Saved {} holiday dates", set.len());
        }
        HolidayAction::Reset => {
            service.reset()?;
            println!("Holiday list reset to built-in dates");
        }
    }

    Ok(())
}

fn run_config(service: &SettingsService, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let settings = service.get_or_default();
            println!("# {}", service.path().display());
            print!("{}", toml::to_string_pretty(&settings).context("Failed to render settings")?);
        }
        ConfigAction::Set {
            database_path,
            default_database,
            notifications,
            watch_interval,
        } => {
            service.modify(|settings| {
                if database_path.is_some() {
                    settings.database_path = database_path;
                } else if default_database {
                    settings.database_path = None;
                }
                if let Some(enabled) = notifications {
                    settings.desktop_notifications = enabled;
                }
                if let Some(secs) = watch_interval {
                    settings.watch_interval_secs = secs;
                }
            })?;
            println!("Saved settings to {}", service.path().display());
        }
    }

    Ok(())
}

fn watch(
    schedule: &Schedule,
    store: &dyn KeyValueStore,
    clock: &dyn Clock,
    settings: &Settings,
    interval: StdDuration,
) {
    let now = clock.now();
    let mut watcher = WeekWatcher::new(get_current_week_index(schedule, now), interval);
    show_dashboard(schedule, store, now, settings);

    log::info!("Watching for week changes every {:?}", watcher.interval());

    loop {
        std::thread::sleep(watcher.interval());

        let tick = watcher.tick(schedule, clock);
        if tick.changed {
            println!();
            show_dashboard(schedule, store, clock.now(), settings);
        }
    }
}
