mod input;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use serde_json::Map;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;
use xamlkit_codegen::{Context, XamlExtension};
use xamlkit_core::Project;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Project snapshot (JSON with colors, textStyles and layers)
    #[clap(short, long, global = true, default_value = "project.json")]
    project: PathBuf,
    /// JSON object of generator options
    #[clap(long, global = true)]
    options: Option<PathBuf>,
    /// Single option override, key=value (repeatable; values are strings,
    /// booleans as `true`/`false`)
    #[clap(short = 'o', long = "option", global = true)]
    option: Vec<String>,
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Color and brush resources
    Colors {
        /// Write Colors.xaml into this directory instead of printing
        #[clap(long)]
        export: Option<PathBuf>,
    },
    /// TextBlock style resources
    TextStyles {
        /// Write TextBlock.xaml into this directory instead of printing
        #[clap(long)]
        export: Option<PathBuf>,
    },
    /// Markup for every layer that has a mapping
    Layers,
    /// Wrap text in a XAML comment
    Comment { text: String },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    let extension = XamlExtension::new().context("Failed to load templates")?;

    // comments need neither a project nor options
    let (project, options) = match &args.command {
        Commands::Comment { .. } => (Project::new(), Map::new()),
        _ => (
            input::load_project(&args.project)?,
            input::load_options(args.options.as_deref(), &args.option)?,
        ),
    };
    let ctx = Context::from_source(&project, &options).context("Invalid options")?;

    match args.command {
        Commands::Colors { export: None } => {
            let code = extension.styleguide_colors(&ctx, &project.colors)?;
            println!("{}", code.code);
        }
        Commands::Colors { export: Some(dir) } => {
            let file = extension.export_styleguide_colors(&ctx, &project.colors)?;
            let path = input::write_export(&dir, &file)?;
            info!("Wrote {}", path.display());
        }
        Commands::TextStyles { export: None } => {
            let code = extension.styleguide_text_styles(&ctx, &project.text_styles)?;
            println!("{}", code.code);
        }
        Commands::TextStyles { export: Some(dir) } => {
            let file = extension.export_styleguide_text_styles(&ctx, &project.text_styles)?;
            let path = input::write_export(&dir, &file)?;
            info!("Wrote {}", path.display());
        }
        Commands::Layers => {
            for layer in &project.layers {
                match extension.layer(&ctx, layer)? {
                    Some(code) => {
                        println!("{}", extension.comment(&ctx, layer.name()));
                        println!("{}", code.code);
                    }
                    None => debug!("Skipping layer without mapping: {}", layer.name()),
                }
            }
        }
        Commands::Comment { text } => println!("{}", extension.comment(&ctx, &text)),
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"warn".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("handlebars=off,{}", log_level)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
