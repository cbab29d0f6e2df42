use anyhow::Result;
use clap::Parser;
use racemerge::cli::{log_level, Cli, Commands, OutputArgs};
use racemerge::commands::courses::CoursesConfig;
use racemerge::commands::merge::MergeConfig;
use racemerge::commands::OutputOptions;
use racemerge::config::load_config;
use racemerge::formatting::ColorMode;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG, when set, takes precedence over -v
    env_logger::Builder::new()
        .filter_level(log_level(cli.verbosity))
        .parse_default_env()
        .init();

    let settings = load_config();
    let color = cli
        .color
        .unwrap_or_else(|| ColorMode::from_env(settings.output().use_color));

    match cli.command {
        Commands::Merge {
            paths,
            date,
            name,
            location,
            output,
        } => {
            let config = MergeConfig {
                paths,
                date,
                name,
                location,
                output: output_options(output, color),
            };
            racemerge::commands::merge::handle_merge(config, &settings)
        }
        Commands::Courses { path, output } => {
            let config = CoursesConfig {
                path,
                output: output_options(output, color),
            };
            racemerge::commands::courses::handle_courses(config, &settings)
        }
        Commands::Init { force } => {
            let path = racemerge::commands::init::init_config(force)?;
            println!("Created {}", path.display());
            Ok(())
        }
    }
}

// Pure mapping from parsed flags to command options
fn output_options(args: OutputArgs, color: ColorMode) -> OutputOptions {
    OutputOptions {
        format: args.format,
        output: args.output,
        top: args.top,
        color,
    }
}
