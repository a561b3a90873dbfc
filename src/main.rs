use env_logger::Env;
use failure::Error;
use log::error;

mod alexa;
mod config;
mod handlers;
mod quotes;
mod site;
mod skill;
mod speech;

/// Logs an error along with its chain of causes.
pub fn log_error(e: &Error) {
    let mut message = e.to_string();
    for cause in e.iter_causes() {
        message.push_str(&format!("\n  caused by: {}", cause));
    }
    error!("{}", message);
}

fn run() -> Result<(), Error> {
    let config = config::Config::from_args()?;
    let skill = skill::quote_central(config.skill_id.as_deref());
    site::run(&config, skill)
}

fn main() {
    env_logger::from_env(Env::default().default_filter_or("quote_central=info")).init();

    if let Err(e) = run() {
        log_error(&e);
        std::process::exit(1);
    }
}
