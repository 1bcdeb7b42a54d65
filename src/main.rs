use chrono::Utc;
use clap::ArgMatches;
use libchatfmt::{
    bulk,
    cfg::{ChatConfig, select_config},
    colors,
    dispatch::{self, ConsoleRecipient},
    logger,
    placeholders::Placeholders,
};
use libcommon::{
    ChatError,
    timefmt::{self, INVALID_TIME},
};
use std::{
    env,
    io::{self, IsTerminal, Read},
    path::PathBuf,
};

mod clidef;

static VERSION: &str = "0.1.0";

/// Get configuration. Without any config file the defaults are used.
fn get_cfg(p: &ArgMatches) -> ChatConfig {
    let path = match select_config(p.get_one::<String>("config").map(PathBuf::from)) {
        Ok(path) => path,
        Err(err) => {
            log::debug!("{err}, using defaults");
            return ChatConfig::default();
        }
    };

    match ChatConfig::new(path.clone()) {
        Ok(cfg) => {
            log::debug!("Using configuration at {}", path.display());
            cfg
        }
        Err(err) => {
            log::warn!("Ignoring configuration at {}: {err}", path.display());
            ChatConfig::default()
        }
    }
}

/// Get message lines from the argument or STDIN
fn get_lines(p: &ArgMatches) -> Result<Vec<String>, ChatError> {
    if let Some(msg) = p.get_one::<String>("message").filter(|m| m.as_str() != "-") {
        return Ok(vec![msg.to_owned()]);
    }

    if io::stdin().is_terminal() {
        return Err(ChatError::InputError("no message given and STDIN is a terminal".to_string()));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.lines().map(|l| l.to_string()).collect())
}

/// Print time helpers, if any requested. Returns true if something was printed.
fn print_time(p: &ArgMatches, cfg: &ChatConfig) -> Result<bool, ChatError> {
    let mut done = false;
    if let Some(ms) = p.get_one::<u64>("duration") {
        println!("{}", timefmt::strftime(*ms));
        done = true;
    }

    if let Some(spec) = p.get_one::<String>("offset") {
        let ms = timefmt::offset_to_epoch_millis(Utc::now(), spec);
        if ms == INVALID_TIME {
            return Err(ChatError::InputError(format!("invalid offset \"{spec}\", expected a number with s, m, h or d")));
        }
        println!("{}", timefmt::to_formatted_date(ms, cfg.date_policy()).unwrap_or(ms.to_string()));
        done = true;
    }

    if let Some(ms) = p.get_one::<i64>("date") {
        match timefmt::to_formatted_date(*ms, cfg.date_policy()) {
            Some(d) => println!("{d}"),
            None => return Err(ChatError::InputError(format!("timestamp {ms} is out of range"))),
        }
        done = true;
    }

    Ok(done)
}

fn run(p: &ArgMatches) -> Result<(), ChatError> {
    let cfg = get_cfg(p);
    if print_time(p, &cfg)? {
        return Ok(());
    }

    let mut ph = cfg.placeholders();
    ph.extend(&Placeholders::from_strings(&clidef::split_by(p, "placeholders", None))?);
    let lines = get_lines(p)?;

    if p.get_flag("strip") {
        for l in bulk::format_list(&lines, &ph) {
            println!("{}", colors::remove_colors(&l));
        }
    } else if p.get_flag("broadcast") {
        let audience = cfg.audience();
        if audience.is_empty() {
            log::warn!("Nobody to broadcast to: no audience configured");
        }

        let permission = p.get_one::<String>("permission").map(|s| s.as_str());
        for l in &lines {
            dispatch::broadcast(&audience, l, permission, Some(&ph));
        }
    } else if p.get_flag("raw") {
        for l in lines {
            println!("{}", bulk::prepare(&l, Some(&ph)));
        }
    } else {
        let console = ConsoleRecipient::operator(cfg.ansi() && io::stdout().is_terminal());
        for l in &lines {
            dispatch::send(&console, l, Some(&ph));
        }
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut cli = clidef::cli(VERSION);

    if args.len() == 1 && io::stdin().is_terminal() {
        return {
            let _ = cli.print_help();
        };
    }

    // Our main params
    let params = cli.to_owned().get_matches();

    // Set logger
    if let Err(err) = logger::init(params.get_count("debug")) {
        eprintln!("{err}");
    }

    // Print help?
    if params.get_flag("help") {
        return {
            let _ = cli.print_help();
        };
    }

    // Print version?
    if params.get_flag("version") {
        return {
            println!("Version {VERSION}");
        };
    }

    if let Err(err) = run(&params) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
