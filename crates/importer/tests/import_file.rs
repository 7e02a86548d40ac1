use database::{
    db::create_connection,
    entities::{courses, teachers},
    services::import_schedule::ScheduleImportService,
};
use importer::reader::read_schedule;
use migration::{Migrator, MigratorTrait};
use models::phonetic::PinyinTransliterator;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn imports_a_schedule_file_end_to_end() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "\u{feff}课程代码,课程名称,课程英文名称,课程性质,开课学院,任课老师,学分\n\
         CS101,Intro,Introduction to CS,必修,计算机系,张三/李四,3.0\n\
         CS102,Broken,,必修,计算机系,李四,x\n\
         MA101,Calculus,,通识,数学系,李四,\n"
    )
    .unwrap();

    let db = create_connection("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let rows = read_schedule(file.path()).unwrap();
    let report = ScheduleImportService::import(&db, "2024-2025-2", rows, &PinyinTransliterator)
        .await
        .unwrap();

    assert_eq!((report.created, report.updated), (2, 0));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].line, 3);

    let zhang = teachers::Entity::find()
        .filter(teachers::Column::Name.eq("张三"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(zhang.pinyin, "zhangsan");
    assert_eq!(zhang.abbr_pinyin, "zs");

    let calculus = courses::Entity::find()
        .filter(courses::Column::Code.eq("MA101"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(calculus.credit, 0.0);

    // Second run over the same file only updates
    let rows = read_schedule(file.path()).unwrap();
    let report = ScheduleImportService::import(&db, "2024-2025-2", rows, &PinyinTransliterator)
        .await
        .unwrap();

    assert_eq!((report.created, report.updated), (0, 2));
    assert_eq!(courses::Entity::find().count(&db).await.unwrap(), 2);
    assert_eq!(teachers::Entity::find().count(&db).await.unwrap(), 2);
}
