use importer::reader::{ReadError, parse_schedule, read_schedule};
use models::schedule::ScheduleRowError;
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER_LINE: &str = "课程代码,课程名称,课程英文名称,课程性质,开课学院,任课老师,学分";

#[test]
fn strips_byte_order_mark() {
    let content = format!("\u{feff}{HEADER_LINE}\nCS101,Intro,,必修,计算机系,张三/李四,3.0\n");
    let rows = parse_schedule(&content).unwrap();

    assert_eq!(rows.len(), 1);
    let row = rows[0].parsed.as_ref().unwrap();
    assert_eq!(row.code, "CS101");
    assert_eq!(row.instructors, vec!["张三", "李四"]);
}

#[test]
fn keeps_line_numbers_and_raw_cells() {
    let content = format!(
        "{HEADER_LINE}\nCS101,Intro,,必修,计算机系,张三,3\nCS102,Broken,,必修,计算机系,李四,abc\n"
    );
    let rows = parse_schedule(&content).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 2);
    assert!(rows[0].parsed.is_ok());

    assert_eq!(rows[1].line, 3);
    assert_eq!(rows[1].raw_line(), "CS102,Broken,,必修,计算机系,李四,abc");
    assert_eq!(
        rows[1].parsed,
        Err(ScheduleRowError::InvalidCredit("abc".into()))
    );
}

#[test]
fn missing_column_fails_each_row() {
    let content = "课程代码,课程名称,课程性质,开课学院,任课老师\nCS101,Intro,必修,计算机系,张三\n";
    let rows = parse_schedule(content).unwrap();

    // English name and credit are optional columns
    assert!(rows[0].parsed.is_ok());

    let content = "课程代码,课程名称,课程性质,任课老师,学分\nCS101,Intro,必修,张三,3\nCS102,Data,必修,李四,3\n";
    let rows = parse_schedule(content).unwrap();

    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row.parsed, Err(ScheduleRowError::MissingField("开课学院")));
    }
}

#[test]
fn quoted_cells_and_padded_headers() {
    let content = " 课程代码 ,课程名称,课程英文名称,课程性质,开课学院,任课老师,学分\nCS101,\"Intro, Part 1\",,必修,计算机系,张三,2\n";
    let rows = parse_schedule(content).unwrap();

    let row = rows[0].parsed.as_ref().unwrap();
    assert_eq!(row.code, "CS101");
    assert_eq!(row.name, "Intro, Part 1");
}

#[test]
fn reads_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "\u{feff}{HEADER_LINE}\nCS101,Intro,,必修,计算机系,张三,3\n").unwrap();

    let rows = read_schedule(file.path()).unwrap();

    assert_eq!(rows.len(), 1);
    assert!(rows[0].parsed.is_ok());
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_schedule(&dir.path().join("missing.csv"));

    assert!(matches!(result, Err(ReadError::Io { .. })));
}

#[test]
fn non_utf8_file_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    // "课程代码" in GBK
    file.write_all(&[0xbf, 0xce, 0xb3, 0xcc, 0xb4, 0xfa, 0xc2, 0xeb, b'\n'])
        .unwrap();

    assert!(matches!(read_schedule(file.path()), Err(ReadError::Io { .. })));
}
