use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use choku_wrapped::{
    DirBlobStore, IngestOutcome, ServiceError, StoreError, WrappedService, WrappedStore, decode,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Service(#[from] ServiceError),
}

#[derive(Parser)]
#[command(name = "choku-wrapped")]
#[command(about = "Decode Chokuretsu saves and maintain community statistics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a save file and print the record as JSON
    Decode {
        /// Save file to decode
        file: PathBuf,
    },

    /// Ingest save files into the record store
    Ingest {
        /// Save files to ingest
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Store path
        #[arg(long, default_value = ".choku-wrapped", env = "CHOKU_WRAPPED_DB")]
        db: PathBuf,

        /// Directory to back up accepted uploads into
        #[arg(long, env = "CHOKU_WRAPPED_BACKUP")]
        backup: Option<PathBuf>,
    },

    /// Print the stored statistics snapshot
    Stats {
        /// Attach the record with this hash
        #[arg(long)]
        hash: Option<String>,

        /// Store path
        #[arg(long, default_value = ".choku-wrapped", env = "CHOKU_WRAPPED_DB")]
        db: PathBuf,
    },

    /// Recompute the snapshot from every stored record
    Recompute {
        /// Store path
        #[arg(long, default_value = ".choku-wrapped", env = "CHOKU_WRAPPED_DB")]
        db: PathBuf,
    },

    /// Wipe the record store and rebuild it from backups
    Refresh {
        /// Store path
        #[arg(long, default_value = ".choku-wrapped", env = "CHOKU_WRAPPED_DB")]
        db: PathBuf,

        /// Backup directory to rebuild from
        #[arg(long, env = "CHOKU_WRAPPED_BACKUP")]
        backup: PathBuf,
    },
}

fn open_service(db: &Path, backup: Option<&Path>) -> Result<WrappedService, AppError> {
    let mut service = WrappedService::from_store(WrappedStore::open_or_init(db)?);
    if let Some(backup) = backup {
        service = service.with_backup(Arc::new(DirBlobStore::new(backup)?));
    }
    Ok(service)
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { file } => {
            let bytes = std::fs::read(&file)?;
            let record = decode(&bytes);
            if !record.is_valid {
                eprintln!("{}: not a completed save", file.display());
            }
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Commands::Ingest { files, db, backup } => {
            let service = open_service(&db, backup.as_deref())?;
            let mut accepted = 0;
            for file in &files {
                let bytes = match std::fs::read(file) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        eprintln!("{}: {}", file.display(), e);
                        continue;
                    }
                };
                let outcome = service.ingest(&bytes)?;
                if matches!(outcome, IngestOutcome::Accepted(_)) {
                    accepted += 1;
                }
                println!("{} {}", outcome.label(), outcome.hash());
            }
            eprintln!("Accepted {} of {} file(s)", accepted, files.len());
            Ok(())
        }
        Commands::Stats { hash, db } => {
            let service = open_service(&db, None)?;
            let stats = match hash {
                Some(hash) => match service.snapshot_for(&hash)? {
                    Some(stats) => stats,
                    None => {
                        eprintln!("No save with hash '{}'", hash);
                        return Ok(());
                    }
                },
                None => service.snapshot()?,
            };
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
        Commands::Recompute { db } => {
            let service = open_service(&db, None)?;
            let stats = service.recompute()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
            eprintln!("Recomputed from {} submission(s)", stats.num_submissions);
            Ok(())
        }
        Commands::Refresh { db, backup } => {
            let service = open_service(&db, Some(&backup))?;
            let report = service.refresh()?;
            println!(
                "Restored {} record(s), skipped {} backup(s)",
                report.restored, report.skipped
            );
            Ok(())
        }
    }
}
