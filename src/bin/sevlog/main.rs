use anyhow::Context;
use clap::{crate_authors, crate_version, Arg, ArgMatches, Command};
use sevlog::logger::{self, Config, Severity, SyslogConfig};
use sevlog::syslog::Facility;

fn main() -> anyhow::Result<()> {
    let matches = Command::new("sevlog")
        .about("Write a leveled message to stderr or to syslog")
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("loglevel")
                .long("loglevel")
                .value_name("LEVEL")
                .takes_value(true)
                .help("Log level (0 = DEBUG, 5 = FATAL)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("JSON config file, overridden by the other flags"),
        )
        .arg(
            Arg::new("level")
                .short('l')
                .long("level")
                .value_name("LEVEL")
                .takes_value(true)
                .default_value("info")
                .help("Level of the message; fatal exits with status 1"),
        )
        .arg(
            Arg::new("syslog")
                .short('s')
                .long("syslog")
                .help("Send to syslog instead of stderr"),
        )
        .arg(
            Arg::new("syslog-network")
                .long("syslog-network")
                .value_name("NETWORK")
                .takes_value(true)
                .possible_values(["unix", "unixgram", "udp", "tcp"])
                .requires("syslog-address")
                .help("Remote syslog network; the local daemon when omitted"),
        )
        .arg(
            Arg::new("syslog-address")
                .long("syslog-address")
                .value_name("ADDRESS")
                .takes_value(true)
                .help("Remote syslog address or socket path"),
        )
        .arg(
            Arg::new("facility")
                .long("facility")
                .value_name("FACILITY")
                .takes_value(true)
                .help("Syslog facility (user, daemon, local0, ...)"),
        )
        .arg(
            Arg::new("tag")
                .short('t')
                .long("tag")
                .value_name("TAG")
                .takes_value(true)
                .help("Syslog tag, defaults to the program name"),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .multiple_values(true)
                .required(true),
        )
        .get_matches();

    let config = load_config(&matches)?;
    let level: Severity = matches.value_of("level").unwrap_or("info").parse()?;
    let message = matches
        .values_of("message")
        .map(|words| words.collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    logger::init(config.build().context("configuring logger")?)?;
    // A fatal message exits here with status 1.
    logger::global().emit(level, &message);
    Ok(())
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<Config> {
    let mut config = match matches.value_of("config") {
        Some(path) => Config::load(path).with_context(|| format!("loading config {}", path))?,
        None => Config::default(),
    };

    if let Some(level) = matches.value_of("loglevel") {
        config.loglevel = level.parse()?;
    }

    let remote = ["syslog-network", "syslog-address", "facility", "tag"]
        .iter()
        .any(|name| matches.is_present(*name));
    if matches.is_present("syslog") || remote {
        let syslog = config.syslog.get_or_insert_with(SyslogConfig::default);
        if let Some(network) = matches.value_of("syslog-network") {
            syslog.network = network.to_owned();
        }
        if let Some(address) = matches.value_of("syslog-address") {
            syslog.address = address.to_owned();
        }
        if let Some(facility) = matches.value_of("facility") {
            syslog.facility = Facility::from_name(facility)?;
        }
        if let Some(tag) = matches.value_of("tag") {
            syslog.tag = tag.to_owned();
        }
    }

    Ok(config)
}
