mod logging;
mod mycnf;
mod prompt;
mod settings;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use clap::{CommandFactory, FromArgMatches, Parser};
use marid_core::{Error as CoreError, validate_snapshot};
use marid_format::{DEFAULT_FORMAT, FormatterRegistry, generate};
use marid_introspect::extract_mysql;
use settings::{Config, ConfigError, ConnectionSettings};
use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to read password: {0}")]
    Prompt(io::Error),
    #[error("failed to write diagram: {0}")]
    Output(io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "marid",
    version,
    about = "MySQL to Mermaid ER Diagram Generator",
    long_about = "Marid connects to a MySQL database, extracts table definitions,\n\
                  and generates Mermaid ER diagrams based on the schema."
)]
struct Cli {
    /// MySQL host address [default: localhost]
    #[arg(short = 'H', long)]
    host: Option<String>,
    /// MySQL port [default: 3306]
    #[arg(short = 'P', long)]
    port: Option<u16>,
    /// MySQL username [default: root]
    #[arg(short = 'u', long)]
    user: Option<String>,
    /// MySQL password (insecure, prefer --ask-password)
    #[arg(short = 'p', long)]
    password: Option<String>,
    /// Prompt for password (secure)
    #[arg(long, default_value_t = false)]
    ask_password: bool,
    /// Read connection info from ~/.my.cnf
    #[arg(short = 'c', long, default_value_t = false)]
    use_mycnf: bool,
    /// Connect without a password
    #[arg(short = 'n', long, default_value_t = false)]
    no_password: bool,
    /// Database name (required)
    #[arg(short = 'd', long)]
    database: Option<String>,
    /// Comma-separated list of tables (default: all tables)
    #[arg(short = 't', long, default_value = "")]
    tables: String,
    /// Output format
    #[arg(short = 'f', long, default_value = DEFAULT_FORMAT)]
    format: String,
    /// Log progress to stderr
    #[arg(short = 'v', long, default_value_t = false)]
    verbose: bool,
    /// Emit logs as JSON lines
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

impl Cli {
    fn connection_settings(&self) -> ConnectionSettings {
        ConnectionSettings {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.password.clone(),
            database: self.database.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let registry = FormatterRegistry::with_builtin();
    let cli = parse_cli(&registry);

    logging::init_logging(cli.verbose, cli.log_json).map_err(CliError::Logging)?;

    let config = resolve_config(&cli, mycnf::load_default, prompt::prompt_password)?;
    run(&registry, &config).await
}

fn parse_cli(registry: &FormatterRegistry) -> Cli {
    let command = Cli::command().mut_arg("format", |arg| arg.help(format_help(registry)));
    Cli::from_arg_matches(&command.get_matches()).unwrap_or_else(|err| err.exit())
}

fn format_help(registry: &FormatterRegistry) -> String {
    let available = registry.available();
    let mut help = format!("Output format (default: {DEFAULT_FORMAT})");
    if !available.is_empty() {
        help.push_str(&format!("; available: {}", available.join(", ")));
    }
    help
}

/// Merge flags with `.my.cnf` and settle the password source.
fn resolve_config<L, P>(cli: &Cli, load_mycnf: L, prompt: P) -> Result<Config, CliError>
where
    L: FnOnce() -> Result<ConnectionSettings, ConfigError>,
    P: FnOnce() -> io::Result<String>,
{
    let mut settings = cli.connection_settings();

    if cli.use_mycnf {
        match load_mycnf() {
            Ok(file) => settings = settings.or(file),
            Err(err) => {
                tracing::warn!(event = "mycnf_unreadable", error = %err, "Could not read .my.cnf");
            }
        }
    }

    if cli.no_password {
        settings.password = None;
    } else if cli.ask_password {
        settings.password = Some(prompt().map_err(CliError::Prompt)?);
    }

    Ok(Config::resolve(
        settings,
        cli.tables.clone(),
        cli.format.clone(),
    )?)
}

async fn run(registry: &FormatterRegistry, config: &Config) -> Result<(), CliError> {
    // Fail on a bad format name before touching the network.
    registry.get(&config.format)?;

    tracing::info!(
        event = "run_started",
        host = %config.host,
        port = config.port,
        database = %config.database,
        format = %config.format
    );
    let timer = Instant::now();

    let pool = connect(config).await?;
    let extracted = extract_mysql(&pool, &config.extract_options()).await;
    pool.close().await;
    let snapshot = extracted?;

    validate_snapshot(&snapshot)?;
    let diagram = generate(registry, &snapshot, &config.format)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{diagram}").map_err(CliError::Output)?;

    tracing::info!(
        event = "run_finished",
        tables = snapshot.tables.len(),
        duration_ms = timer.elapsed().as_millis() as u64
    );

    Ok(())
}

async fn connect(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    let mut options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .database(&config.database);
    if !config.password.is_empty() {
        options = options.password(&config.password);
    }

    MySqlPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("marid").chain(args.iter().copied()))
            .expect("parse args")
    }

    fn file_settings() -> Result<ConnectionSettings, ConfigError> {
        Ok(ConnectionSettings {
            host: Some("file-host".to_string()),
            port: Some(1234),
            user: Some("file-user".to_string()),
            password: Some("file-pass".to_string()),
            database: Some("file-db".to_string()),
        })
    }

    fn no_prompt() -> io::Result<String> {
        panic!("password prompt should not be shown")
    }

    fn unused_mycnf() -> Result<ConnectionSettings, ConfigError> {
        panic!(".my.cnf should not be read")
    }

    #[test]
    fn missing_database_is_an_error() {
        let err = resolve_config(&cli(&[]), unused_mycnf, no_prompt).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::MissingDatabase)));
    }

    #[test]
    fn defaults_without_mycnf() {
        let config = resolve_config(&cli(&["-d", "app"]), unused_mycnf, no_prompt)
            .expect("resolve");

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3306);
        assert_eq!(config.user, "root");
        assert_eq!(config.format, "mermaid");
        assert!(config.tables_list().is_empty());
    }

    #[test]
    fn mycnf_fills_values_not_given_on_command_line() {
        let args = cli(&["--use-mycnf", "--host", "cli-host", "--tables", "foo"]);

        let config = resolve_config(&args, file_settings, no_prompt).expect("resolve");

        assert_eq!(config.host, "cli-host");
        assert_eq!(config.port, 1234);
        assert_eq!(config.user, "file-user");
        assert_eq!(config.database, "file-db");
        assert_eq!(config.password, "file-pass");
        assert_eq!(config.tables, "foo");
    }

    #[test]
    fn unreadable_mycnf_falls_back_to_command_line() {
        let args = cli(&["-c", "--database", "cli-db", "--host", "cli-host"]);

        let config = resolve_config(
            &args,
            || Err(ConfigError::MyCnfNotFound("/nowhere/.my.cnf".into())),
            no_prompt,
        )
        .expect("resolve");

        assert_eq!(config.database, "cli-db");
        assert_eq!(config.host, "cli-host");
    }

    #[test]
    fn ask_password_overrides_other_sources() {
        let args = cli(&["-c", "--ask-password", "-p", "flag-pass"]);

        let config = resolve_config(&args, file_settings, || Ok("typed".to_string()))
            .expect("resolve");

        assert_eq!(config.password, "typed");
    }

    #[test]
    fn no_password_clears_password() {
        let args = cli(&["-c", "-n", "--ask-password"]);

        let config = resolve_config(&args, file_settings, no_prompt).expect("resolve");

        assert_eq!(config.password, "");
    }

    #[test]
    fn prompt_failure_is_reported() {
        let args = cli(&["-d", "app", "--ask-password"]);

        let err = resolve_config(&args, unused_mycnf, || {
            Err(io::Error::new(io::ErrorKind::Other, "no tty"))
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "failed to read password: no tty");
    }

    #[test]
    fn format_help_lists_registered_formats() {
        let registry = FormatterRegistry::with_builtin();
        assert_eq!(
            format_help(&registry),
            "Output format (default: mermaid); available: mermaid"
        );
    }

    #[tokio::test]
    async fn unknown_format_fails_before_connecting() {
        let registry = FormatterRegistry::with_builtin();
        let config = resolve_config(&cli(&["-d", "app", "-f", "unknown"]), unused_mycnf, no_prompt)
            .expect("resolve");

        let err = run(&registry, &config).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "unknown format \"unknown\". Available formats: mermaid"
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
