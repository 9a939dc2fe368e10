use std::env;
use std::ffi::OsStr;
use std::io::{self, Write as _};
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};

use anyhow::Context as _;
use chrono::Datelike;
use log::{error, info};
use seahorse::{App, Command, Context, Flag, FlagType};

use booking_picker::config::Config;
use booking_picker::events::{EventKind, EventsClient, FetchResult};
use booking_picker::picker::{DateTimePicker, DaySelection, Direction};
use booking_picker::render;
use booking_picker::time::{Date, Month, TimeStamp, Year, YearMonth};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use core::fmt;

    use log::error;
    use seahorse::{Command, Context};

    type TryAction<E> = fn(_: &Context) -> Result<(), E>;

    pub trait ErrorLike: Send + Sync + fmt::Debug + 'static {}

    impl<E: Send + Sync + fmt::Debug + 'static> ErrorLike for E {}

    pub trait TryActionExt {
        #[must_use]
        fn try_action<E>(self, action: TryAction<E>) -> Self
        where
            E: ErrorLike;
    }

    impl TryActionExt for Command {
        fn try_action<E>(self, action: TryAction<E>) -> Self
        where
            E: ErrorLike,
        {
            self.action(move |context: &Context| {
                if let Err(e) = action(context) {
                    error!("{:?}", e);
                    ::std::process::exit(1);
                }
            })
        }
    }
}

use seahorse_exts::TryActionExt;

fn load_config(context: &Context) -> anyhow::Result<Config> {
    match context.string_flag("config") {
        Ok(path) => Config::from_toml_file(PathBuf::from(path)),
        Err(_) => Ok(Config::default()),
    }
}

fn local_today() -> Date {
    let now = chrono::Local::now().date_naive();

    Date::new(
        Year::new(now.year() as usize),
        Month::new(now.month() as usize),
        now.day() as usize,
    )
    .expect("the local clock should produce a valid calendar date")
}

/// Requests holiday and observance data for `month`.
///
/// The two fetches run independently of each other, each delivers its own
/// result over the channel. Without a configured source both collections
/// resolve to empty right away.
fn request_month(client: Option<&EventsClient>, month: YearMonth, sender: &Sender<FetchResult>) {
    for kind in EventKind::kinds() {
        match client {
            Some(client) => client.fetch_in_background(month, kind, sender.clone()),
            None => {
                let _ = sender.send(FetchResult::new(month, kind, Vec::new()));
            }
        }
    }
}

enum UserCommand {
    Navigate(Direction),
    SelectDay(usize),
    SelectSlot(TimeStamp),
    Quit,
}

fn parse_command(input: &str) -> Option<UserCommand> {
    match input {
        "next" | "n" => return Some(UserCommand::Navigate(Direction::Next)),
        "prev" | "p" => return Some(UserCommand::Navigate(Direction::Previous)),
        "quit" | "q" => return Some(UserCommand::Quit),
        _ => {}
    }

    if let Ok(day) = input.parse::<usize>() {
        return Some(UserCommand::SelectDay(day));
    }

    input
        .parse::<TimeStamp>()
        .ok()
        .map(UserCommand::SelectSlot)
}

fn interactive(config: &Config) -> anyhow::Result<()> {
    let today = local_today();
    let mut picker = DateTimePicker::new(
        YearMonth::from(today),
        today,
        config.picker().slots().to_vec(),
    );
    picker.on_change(|value| match value {
        Some(date_time) => println!("=> {}", date_time),
        None => println!("=> no date and time selected"),
    });

    let client = config.events().map(EventsClient::new);
    if client.is_none() {
        info!("no [events] section in the config, days will not be annotated");
    }

    let (sender, receiver) = mpsc::channel();
    request_month(client.as_ref(), picker.calendar().viewed(), &sender);

    println!("commands: next, prev, a day number, a time like 14:00, quit");

    let mut line = String::new();
    loop {
        while let Ok(result) = receiver.try_recv() {
            picker.apply_records(result);
        }

        println!();
        println!("{}", render::render(&picker));
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match parse_command(input) {
            Some(UserCommand::Navigate(direction)) => {
                let viewed = picker.navigate(direction);
                request_month(client.as_ref(), viewed, &sender);
            }
            Some(UserCommand::SelectDay(day)) => match picker.select_day(day) {
                Ok(DaySelection::Selected(date)) => info!("selected {}", date),
                Ok(DaySelection::Rejected) => println!("this day cannot be selected"),
                Err(error) => println!("{}", error),
            },
            Some(UserCommand::SelectSlot(slot)) => {
                if let Err(error) = picker.select_slot(slot) {
                    println!("{}", error);
                }
            }
            Some(UserCommand::Quit) => break,
            None if input.is_empty() => {}
            None => println!("unknown command: \"{}\"", input),
        }
    }

    match picker.date_time() {
        Some(date_time) => println!("booked: {}", date_time),
        None => println!("nothing was booked"),
    }

    Ok(())
}

fn list_events(config: &Config) -> anyhow::Result<()> {
    let events = config
        .events()
        .context("the config file has no [events] section")?;
    let client = EventsClient::new(events);

    for kind in EventKind::kinds() {
        println!("{}:", kind);

        let mut records = client.fetch(kind)?;
        records.sort_by_key(|record| record.date());
        for record in records {
            println!("  {}  {}", record.date(), record.name());
        }
    }

    Ok(())
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let pick_command = Command::new("pick")
        .usage(format!("{} pick [args]", args[0]))
        .description("Starts an interactive booking session.")
        .flag(Flag::new("config", FlagType::String).description("Path to the config file."))
        .try_action(|context: &Context| {
            let config = load_config(context)?;
            interactive(&config)
        });

    let events_command = Command::new("events")
        .usage(format!("{} events --config config.toml", args[0]))
        .description("Fetches and lists the holiday and observance records once.")
        .flag(Flag::new("config", FlagType::String).description("Path to the config file."))
        .try_action(|context: &Context| {
            let config = load_config(context)?;
            list_events(&config)
        });

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [command]", args[0]))
        .command(pick_command)
        .command(events_command);

    app.run(args);

    Ok(())
}
