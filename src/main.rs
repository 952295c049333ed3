use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use showcase_catalog::catalog::Catalog;
use showcase_catalog::config::Config;
use showcase_catalog::gallery::Gallery;
use showcase_catalog::logging;
use showcase_catalog::photos::{PhotoLibrary, NO_PHOTO_PLACEHOLDER};

#[derive(Parser)]
#[command(name = "showcase_catalog")]
#[command(about = "Youth theatre showcase roster and gallery data engine")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the catalog and report per-day/per-stage counts
    Validate,
    /// Dump the catalog as pretty-printed JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List performers, optionally filtered by day and/or stage
    List {
        /// Program day id, e.g. monday-24th
        #[arg(long)]
        day: Option<String>,
        /// Show-instance id, e.g. stage-two-thursday-pirated
        #[arg(long)]
        stage: Option<String>,
    },
    /// Report photo coverage for the roster
    Photos {
        /// Performer photo directory (defaults to catalog.toml / built-in)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print ordered gallery image paths
    Gallery {
        /// Gallery asset root (defaults to catalog.toml / built-in)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Show-instance id; omit for the cross-stage sample
        #[arg(long)]
        stage: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Validate => {
            let catalog = match Catalog::load() {
                Ok(catalog) => catalog,
                Err(e) => {
                    error!("catalog build failed: {}", e);
                    eprintln!("✗ Catalog build failed: {}", e);
                    std::process::exit(1);
                }
            };

            println!("📊 Catalog: {} performers across {} days", catalog.len(), catalog.days().len());
            for day in catalog.days() {
                println!("\n   {} — {} performers", day.label, catalog.performers_by_day(&day.id).len());
                for slot in catalog.show_slots().iter().filter(|s| s.day_id == day.id) {
                    println!(
                        "      {} [{}] {} — {} performers",
                        slot.stage,
                        slot.time,
                        slot.production.title,
                        catalog.performers_by_stage_and_day(slot.stage_id, &day.id).len()
                    );
                }
            }

            let eligible = catalog.performers().iter().filter(|p| p.award_eligible).count();
            let displayed = catalog
                .performers()
                .iter()
                .filter(|p| p.commitment != showcase_catalog::normalize::NO_COMMITMENT)
                .count();
            println!("\n   Award-eligible: {}", eligible);
            println!("   Displayed commitments: {}", displayed);
            println!("\n✓ Catalog is valid");
        }
        Commands::Export { output } => {
            let catalog = Catalog::load()?;
            let json = serde_json::to_string_pretty(&catalog)?;
            match output {
                Some(path) => {
                    fs::write(&path, &json)?;
                    info!("catalog exported to {}", path.display());
                    println!("✓ Exported {} performers to {}", catalog.len(), path.display());
                }
                None => println!("{}", json),
            }
        }
        Commands::List { day, stage } => {
            let catalog = Catalog::load()?;
            let performers = match (stage.as_deref(), day.as_deref()) {
                (Some(stage_id), Some(day_id)) => catalog.performers_by_stage_and_day(stage_id, day_id),
                (Some(stage_id), None) => catalog.performers_by_stage(stage_id),
                (None, Some(day_id)) => catalog.performers_by_day(day_id),
                (None, None) => catalog.performers().iter().collect(),
            };

            if performers.is_empty() {
                println!("⚠️  No performers matched");
                return Ok(());
            }
            for performer in performers {
                println!("   {} — {}", performer.name, performer.commitment);
            }
        }
        Commands::Photos { dir } => {
            let catalog = Catalog::load()?;
            let dir = dir.unwrap_or_else(|| PathBuf::from(&config.assets.performers_dir));
            let library = PhotoLibrary::scan(&dir)?;
            println!("📷 {} photo assets in {}", library.len(), dir.display());

            let mut missing = Vec::new();
            let mut placeholders = 0;
            let mut matched = 0;
            for performer in catalog.performers() {
                match library.photo_for(&performer.name) {
                    Some(NO_PHOTO_PLACEHOLDER) => placeholders += 1,
                    Some(_) => matched += 1,
                    None => missing.push(performer.name.as_str()),
                }
            }
            println!("   Matched: {}", matched);
            println!("   Placeholder: {}", placeholders);
            println!("   Missing: {}", missing.len());
            for name in missing {
                println!("      - {}", name);
            }
        }
        Commands::Gallery { dir, stage } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from(&config.assets.gallery_root));
            let gallery = Gallery::scan(Path::new(&dir))?;
            match stage {
                Some(stage_id) => {
                    for path in gallery.images(&stage_id) {
                        println!("{}", path);
                    }
                }
                None => {
                    for path in gallery.all_images(100) {
                        println!("{}", path);
                    }
                }
            }
        }
    }

    Ok(())
}
