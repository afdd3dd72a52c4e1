//! Football results reporting CLI
//!
//! Loads a delimited results file and prints a team's win count to the
//! console and to an HTML report file.

use clap::{Parser, Subcommand};
use footy::{Config, Result};

#[derive(Parser)]
#[command(name = "footy")]
#[command(about = "Win-count reporting over delimited football results", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the win-count report and print it to both targets (default)
    Report {
        /// Override the team named in the config
        #[arg(long)]
        team: Option<String>,
        /// Override the results file path
        #[arg(long)]
        input: Option<String>,
        /// Override the HTML report path
        #[arg(long)]
        output: Option<String>,
    },
    /// Write a default config and create the report directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Run command; a bare invocation builds the report with config values
    let result = match cli.command {
        Some(Commands::Report {
            team,
            input,
            output,
        }) => commands::report(&config, team, input, output),
        Some(Commands::Init) => commands::init(&config, &cli.config),
        None => commands::report(&config, None, None, None),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use footy::data::MatchReader;
    use footy::summary::Summary;
    use footy::{Config, Result};

    pub fn report(
        config: &Config,
        team: Option<String>,
        input: Option<String>,
        output: Option<String>,
    ) -> Result<()> {
        let team = team.unwrap_or_else(|| config.data.team.clone());
        let input = input.unwrap_or_else(|| config.data.input_path.clone());
        let output = output.unwrap_or_else(|| config.report.output_path.clone());

        log::debug!("Reading matches from {}", input);
        let mut reader = MatchReader::from_csv(input);
        reader.load()?;

        let html = Summary::wins_to_html(team.as_str(), output);
        let console = Summary::wins_to_console(team.as_str());
        html.build_and_print_report(reader.matches())?;
        console.build_and_print_report(reader.matches())?;
        Ok(())
    }

    pub fn init(config: &Config, config_path: &str) -> Result<()> {
        config.save(config_path)?;
        println!("Created config at {}", config_path);

        if let Some(dir) = std::path::Path::new(&config.report.output_path).parent() {
            std::fs::create_dir_all(dir)?;
            println!("Created {} directory", dir.display());
        }
        Ok(())
    }
}
