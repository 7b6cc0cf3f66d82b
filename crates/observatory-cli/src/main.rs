mod logging;
mod serve;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use observatory_core::{
    ChartData, ClassCatalog, ClassHierarchy, ClassSource, Config, PlotResolver,
};

#[derive(Parser)]
#[command(name = "observatory")]
#[command(about = "Schema.org structured data observatory", long_about = None)]
struct Cli {
    /// Config file to use instead of the default locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Open the dashboard in a browser
        #[arg(long)]
        open: bool,
        /// Class hierarchy JSON file
        #[arg(long)]
        data: Option<String>,
        /// Static assets directory
        #[arg(long)]
        assets: Option<String>,
    },
    /// Print the sunburst chart arrays as JSON
    Chart {
        /// Class hierarchy JSON file
        #[arg(long)]
        data: Option<String>,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// List the selectable classes
    Classes {
        /// Label source: fixed or assets
        #[arg(long)]
        source: Option<ClassSource>,
    },
    /// Print the plot image path for a class label
    Resolve {
        /// Class label, e.g. schema:Product
        label: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logging();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Serve {
            port,
            host,
            open,
            data,
            assets,
        } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if open {
                config.server.open_browser = true;
            }
            if let Some(data) = data {
                config.data.hierarchy_file = data;
            }
            if let Some(assets) = assets {
                config.assets.dir = assets;
            }
            serve::start_server(serve::ServeConfig::from(config)).await?;
        }
        Commands::Chart { data, pretty } => {
            let path = data.unwrap_or(config.data.hierarchy_file);
            let hierarchy = ClassHierarchy::from_file(&path)?;
            let chart = ChartData::from_hierarchy(&hierarchy);
            let json = if pretty {
                serde_json::to_string_pretty(&chart)?
            } else {
                serde_json::to_string(&chart)?
            };
            println!("{}", json);
        }
        Commands::Classes { source } => {
            let catalog = match source.unwrap_or(config.selection.source) {
                ClassSource::Fixed => ClassCatalog::fixed(),
                ClassSource::Assets => ClassCatalog::scan(
                    config.assets.plots_path(),
                    &config.assets.plot_suffix,
                    &config.selection.namespace,
                )?,
            };
            for class in catalog.classes() {
                println!("{}", class);
            }
        }
        Commands::Resolve { label } => {
            let selection = PlotResolver::from_config(&config.assets).resolve(&label)?;
            println!("{}", selection.image_path);
        }
    }

    Ok(())
}
