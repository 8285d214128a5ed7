use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, WriteLogger};

use sellflow::core::abandon::CloseReason;
use sellflow::core::config::{self, CliOverrides, SellflowConfig};
use sellflow::core::draft_file::load_draft;
use sellflow::core::publish::Published;
use sellflow::core::state::Wizard;
use sellflow::services::Collaborators;
use sellflow::tui::{self, WizardHost};

#[derive(Parser)]
#[command(name = "sellflow", about = "Create a marketplace listing step by step")]
struct Args {
    /// Resume from a saved draft (JSON)
    #[arg(short, long)]
    draft: Option<PathBuf>,

    /// Start with the business-seller section switched on
    #[arg(long)]
    business: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<String>,
}

/// Records what the wizard reported so it can be summarised after the
/// terminal is restored.
#[derive(Default)]
struct CliHost {
    published: Option<Published>,
}

impl WizardHost for CliHost {
    fn on_publish(&mut self, published: &Published) {
        info!(
            "Listing {} published at {}",
            published.listing_id, published.published_at
        );
        self.published = Some(published.clone());
    }

    fn on_close(&mut self, reason: &CloseReason) {
        info!("Sell flow closed: {:?}", reason);
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logger isn't up yet, so hold on to the error and report it after init
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (SellflowConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_file: args.log_file.clone(),
            log_level: args.log_level.clone(),
            business: args.business,
        },
    );

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
    if let Some(e) = config_error {
        warn!("Ignoring config file: {}", e);
    }
    info!("Sellflow starting up (log level {})", resolved.log_level);

    let mut initial = match &args.draft {
        Some(path) => Some(load_draft(path).map_err(io::Error::other)?),
        None => None,
    };
    if resolved.default_business {
        initial.get_or_insert_with(Default::default).is_business = true;
    }

    let wizard = Wizard::open(initial);
    let collaborators = Collaborators::from_config(&resolved);
    let mut host = CliHost::default();
    let reason = tui::run(wizard, collaborators, &mut host)?;

    match reason {
        CloseReason::Discarded => println!("Listing discarded."),
        CloseReason::DraftSaved => println!("Draft saved. Pick up where you left off any time."),
        CloseReason::ViewListing { listing_id } => println!("Opening listing {listing_id}."),
        CloseReason::ReturnHome => match host.published {
            Some(p) => println!("\"{}\" is live as {}.", p.title, p.listing_id),
            None => println!("Back home."),
        },
    }
    Ok(())
}
