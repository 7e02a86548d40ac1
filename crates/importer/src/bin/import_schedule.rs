use clap::Parser;
use database::{db::create_connection, services::import_schedule::ScheduleImportService};
use env_logger::Env;
use importer::{config::Config, reader::read_schedule};
use log::info;
use migration::{Migrator, MigratorTrait};
use models::{phonetic::PinyinTransliterator, schedule::DEFAULT_SEMESTER};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Import a course schedule CSV file")]
struct Args {
    /// Path to the schedule CSV file
    csv_file: PathBuf,

    /// Semester the schedule belongs to, created if new
    #[arg(long, default_value = DEFAULT_SEMESTER)]
    semester: String,
}

/// Reads the schedule file and writes it into the database in one transaction
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::from_env()?;

    // An unreadable file aborts before anything touches the database
    let rows = read_schedule(&args.csv_file)?;
    info!("Read {} rows from {}", rows.len(), args.csv_file.display());

    let db = create_connection(&config.database_url).await?;
    if config.run_migrations {
        Migrator::up(&db, None).await?;
    }

    let report =
        ScheduleImportService::import(&db, &args.semester, rows, &PinyinTransliterator).await?;

    println!(
        "导入完成! 创建 {} 门课程，更新 {} 门课程",
        report.created, report.updated
    );

    Ok(())
}
