use blockout::application::{
    init, load_sessions, load_trainers, ConfigService, CreateBlockService, SessionDraft,
    SessionService,
};
use blockout::cli::output::format_when;
use blockout::cli::{
    format_outbox, format_session_list, format_trainer_list, BlockArgs, Cli, Commands,
    SessionCommand,
};
use blockout::domain::recurrence::{parse_dates_of_month, parse_days_of_week, parse_months};
use blockout::domain::time_ref::parse_time;
use blockout::domain::{Actor, BlockDuration, BlockForm, BlockType, DateReference, Role};
use blockout::error::BlockoutError;
use blockout::infrastructure::{
    connect, Config, FileSystemWorkspace, OutboxGateway, WorkspaceRepository,
};
use blockout::telemetry;
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use std::str::FromStr;

fn main() {
    telemetry::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), BlockoutError> {
    match cli.command {
        Commands::Init {
            path,
            user_id,
            role,
            first_name,
            api_url,
        } => {
            let role = Role::from_str(&role).map_err(BlockoutError::Config)?;
            let mut config = Config::new(user_id, role);
            config.first_name = first_name;
            config.api_url = api_url;

            init::init(&path, &config)
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemWorkspace::discover()?);

            if list {
                for (key, value) in service.list()? {
                    println!("{} = {}", key, value);
                }
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: blockout config [--list | <key> [<value>]]");
                println!("Valid keys: api_url, user_id, role, first_name, token, timeout_secs");
            }
            Ok(())
        }
        Commands::Block(args) => block(args),
        Commands::Unblock { id, all } => {
            let (workspace, config) = open_workspace()?;
            let gateway = connect(&workspace, &config)?;
            let sessions = load_sessions(gateway.as_ref(), Local::now().date_naive());

            let service = SessionService::new(gateway.as_ref(), config.actor(), sessions);
            report(service.delete_block(&id, all)?, || {
                format!("Blocked time {} deleted.", id)
            });
            Ok(())
        }
        Commands::Session { action } => session(action),
        Commands::Sessions => {
            let (workspace, config) = open_workspace()?;
            let gateway = connect(&workspace, &config)?;
            print!(
                "{}",
                format_session_list(&load_sessions(gateway.as_ref(), Local::now().date_naive()))
            );
            Ok(())
        }
        Commands::Trainers => {
            let (workspace, config) = open_workspace()?;
            let gateway = connect(&workspace, &config)?;
            print!("{}", format_trainer_list(&load_trainers(gateway.as_ref())));
            Ok(())
        }
        Commands::Outbox { clear } => {
            let workspace = FileSystemWorkspace::discover()?;
            let outbox = OutboxGateway::new(workspace.outbox_path());

            if clear {
                println!("Cleared {} queued request(s)", outbox.clear()?);
            } else {
                print!("{}", format_outbox(&outbox.entries()?));
            }
            Ok(())
        }
    }
}

fn open_workspace() -> Result<(FileSystemWorkspace, Config), BlockoutError> {
    let workspace = FileSystemWorkspace::discover()?;
    let config = workspace.load_config()?;
    Ok((workspace, config))
}

/// Print the announcement, or a plain confirmation when the session was not in view
fn report(announcement: Option<String>, fallback: impl FnOnce() -> String) {
    println!("{}", announcement.unwrap_or_else(fallback));
}

fn parse_start(date: &str, time: &str) -> Result<NaiveDateTime, BlockoutError> {
    let date = DateReference::parse(date)?.resolve(Local::now().date_naive());
    Ok(date.and_time(parse_time(time)?))
}

fn parse_duration(input: &str) -> Result<u32, BlockoutError> {
    BlockDuration::parse_minutes(input).ok_or_else(|| {
        BlockoutError::Config(format!(
            "Invalid duration: '{}'. Use minutes or hours (e.g. 45m, 1h, 1.5h, 1h30m)",
            input
        ))
    })
}

/// Fill a block form from the command line, the way the form is edited by hand
fn block_form(args: &BlockArgs, actor: &Actor) -> Result<BlockForm, BlockoutError> {
    let start = parse_start(&args.date, &args.time)?;
    let mut form = BlockForm::for_slot(actor, start);

    form.duration_minutes = parse_duration(&args.duration)?;
    form.reason = args.reason.clone();
    form.location = args.location.clone();
    form.block_type = BlockType::from_str(&args.block_type).map_err(BlockoutError::Config)?;
    if actor.role == Role::Admin {
        form.trainer_id = args.trainer.clone();
    }

    if let Some(days) = &args.days {
        form.weekly.days_of_week = parse_days_of_week(days).map_err(BlockoutError::Config)?;
    }
    if let Some(weeks) = args.weeks {
        form.weekly.number_of_weeks = weeks;
    }
    if let Some(dates) = &args.dates {
        form.monthly.dates_of_month = parse_dates_of_month(dates).map_err(BlockoutError::Config)?;
    }
    if let Some(months) = args.months {
        form.monthly.number_of_months = months;
    }
    if let Some(months) = &args.months_included {
        form.yearly.months_included = parse_months(months).map_err(BlockoutError::Config)?;
    }

    Ok(form)
}

fn block(args: BlockArgs) -> Result<(), BlockoutError> {
    let (workspace, config) = open_workspace()?;
    let actor = config.actor();
    let mut form = block_form(&args, &actor)?;

    let gateway = connect(&workspace, &config)?;
    let roster = load_trainers(gateway.as_ref());
    let service = CreateBlockService::new(gateway.as_ref(), actor, roster);

    if args.dry_run {
        let request = service.preview(&form, Local::now().date_naive())?;
        let length = BlockDuration::from_minutes(request.duration)
            .map(|duration| duration.to_string())
            .unwrap_or_else(|| format!("{} minutes", request.duration));
        println!("Would block {} ({})", format_when(request.start), length);
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let created = service.submit(&mut form, Local::now().naive_local())?;
    println!("{}", created.announcement);
    Ok(())
}

fn session(action: SessionCommand) -> Result<(), BlockoutError> {
    let (workspace, config) = open_workspace()?;
    let gateway = connect(&workspace, &config)?;
    let today = Local::now().date_naive();

    match action {
        SessionCommand::Create {
            date,
            time,
            duration,
            title,
            location,
            trainer,
            notes,
        } => {
            let mut draft = SessionDraft::new(parse_start(&date, &time)?);
            draft.duration_minutes = parse_duration(&duration)?;
            draft.title = title;
            draft.location = location;
            draft.trainer_id = trainer;
            draft.notes = notes;

            let service = SessionService::new(gateway.as_ref(), config.actor(), Vec::new());
            println!("{}", service.create(&draft, today)?);
        }
        SessionCommand::Book { id } => {
            let sessions = load_sessions(gateway.as_ref(), today);
            let service = SessionService::new(gateway.as_ref(), config.actor(), sessions);
            report(service.book(&id)?, || format!("Session {} booked.", id));
        }
        SessionCommand::Cancel { id } => {
            let sessions = load_sessions(gateway.as_ref(), today);
            let service = SessionService::new(gateway.as_ref(), config.actor(), sessions);
            report(service.cancel(&id)?, || format!("Session {} cancelled.", id));
        }
        SessionCommand::Confirm { id } => {
            let sessions = load_sessions(gateway.as_ref(), today);
            let service = SessionService::new(gateway.as_ref(), config.actor(), sessions);
            report(service.confirm(&id)?, || format!("Session {} confirmed.", id));
        }
    }

    Ok(())
}
