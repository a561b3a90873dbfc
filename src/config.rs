use clap::{crate_version, App, Arg, ArgMatches};
use failure::{Error, ResultExt};

/// Skill id issued for Quote Central.
pub const DEFAULT_SKILL_ID: &str = "amzn1.ask.skill.20c4816b-39f0-47f9-841c-fc18ee0b6d76";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` disables the skill id check.
    pub skill_id: Option<String>,
}

impl Config {
    pub fn from_args() -> Result<Config, Error> {
        Config::from_matches(&app().get_matches())
    }

    fn from_matches(matches: &ArgMatches) -> Result<Config, Error> {
        let host = matches.value_of("host").unwrap_or("0.0.0.0").to_owned();
        let port = matches
            .value_of("port")
            .unwrap_or("8086")
            .parse::<u16>()
            .context("Port must be a number between 0 and 65535")?;
        let skill_id = if matches.is_present("no-skill-id-check") {
            None
        } else {
            Some(
                matches
                    .value_of("skill-id")
                    .unwrap_or(DEFAULT_SKILL_ID)
                    .to_owned(),
            )
        };

        Ok(Config {
            host,
            port,
            skill_id,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn app() -> App<'static, 'static> {
    App::new("Quote Central")
        .version(crate_version!())
        .about("Alexa skill endpoint that reads out a random quote")
        .arg(
            Arg::with_name("host")
                .long("host")
                .value_name("HOST")
                .help("Address to listen on")
                .takes_value(true)
                .default_value("0.0.0.0"),
        )
        .arg(
            Arg::with_name("port")
                .short("p")
                .long("port")
                .value_name("PORT")
                .help("Port to listen on")
                .takes_value(true)
                .default_value("8086"),
        )
        .arg(
            Arg::with_name("skill-id")
                .long("skill-id")
                .value_name("ID")
                .help("Skill id requests must be addressed to")
                .takes_value(true)
                .default_value(DEFAULT_SKILL_ID),
        )
        .arg(
            Arg::with_name("no-skill-id-check")
                .long("no-skill-id-check")
                .help("Accept requests addressed to any skill id"),
        )
}
