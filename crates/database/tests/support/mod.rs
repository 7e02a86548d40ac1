#![allow(dead_code)]

use database::db::create_connection;
use migration::{Migrator, MigratorTrait};
use models::{
    phonetic::Transliterate,
    schedule::{ScheduleRecord, ScheduleRow, SourceRow},
};
use sea_orm::DatabaseConnection;

/// A fresh in-memory database with every migration applied
pub async fn setup_db() -> DatabaseConnection {
    let db = create_connection("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// Maps a handful of characters to fixed syllables; anything else
/// becomes its own lowercase token
pub struct FakeTransliterator;

impl Transliterate for FakeTransliterator {
    fn syllables(&self, name: &str) -> Vec<String> {
        name.chars()
            .map(|c| match c {
                '张' => "zhang".to_string(),
                '三' => "san".to_string(),
                '李' => "li".to_string(),
                '四' => "si".to_string(),
                '王' => "wang".to_string(),
                '五' => "wu".to_string(),
                other => other.to_lowercase().collect(),
            })
            .collect()
    }
}

/// Builds a source row from the seven schedule cells in file order:
/// code, name, English name, nature, department, instructors, credit
pub fn source_row(line: u64, cells: [&str; 7]) -> SourceRow {
    let cell = |i: usize| Some(cells[i].to_string());
    let record = ScheduleRecord {
        code: cell(0),
        name: cell(1),
        english_name: cell(2),
        category: cell(3),
        department: cell(4),
        instructors: cell(5),
        credit: cell(6),
    };

    SourceRow {
        line,
        raw: cells.iter().map(|c| c.to_string()).collect(),
        parsed: ScheduleRow::try_from(record),
    }
}
