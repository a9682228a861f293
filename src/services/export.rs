use crate::models::HarvestRecord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CSV_FILE_NAME: &str = "shorts_data.csv";

const CSV_HEADER: [&str; 8] = [
    "video_id",
    "title",
    "description",
    "published_at",
    "view_count",
    "duration_seconds",
    "like_count",
    "transcript_text",
];

/// Write the harvested records to `shorts_data.csv` inside `folder`,
/// creating the folder if needed and overwriting any previous export.
/// Returns the path of the written file.
pub fn write_csv(records: &[HarvestRecord], folder: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(folder)?;
    let path = folder.join(CSV_FILE_NAME);

    let mut out = String::new();
    out.push_str(&CSV_HEADER.join(","));
    out.push('\n');

    for record in records {
        let metadata = &record.metadata;
        let row = [
            escape(&metadata.video_id),
            escape(&metadata.title),
            escape(&metadata.description),
            escape(&metadata.published_at),
            count_cell(metadata.view_count),
            metadata.duration_seconds.to_string(),
            count_cell(metadata.like_count),
            escape(&record.transcript_text),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    fs::write(&path, out)?;
    Ok(path)
}

/// Unknown counts become empty cells, not zeros.
fn count_cell(count: Option<u64>) -> String {
    count.map(|c| c.to_string()).unwrap_or_default()
}

/// RFC 4180 quoting: fields containing separators or quotes get wrapped,
/// embedded quotes doubled.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{VideoMetadata, TRANSCRIPT_UNAVAILABLE};
    use tempfile::tempdir;

    fn record(id: &str, transcript: &str) -> HarvestRecord {
        HarvestRecord {
            metadata: VideoMetadata {
                video_id: id.to_string(),
                title: format!("Video {id}"),
                description: "desc".to_string(),
                published_at: "2024-01-01T00:00:00Z".to_string(),
                view_count: Some(100),
                duration_seconds: 42,
                like_count: Some(7),
            },
            transcript_text: transcript.to_string(),
        }
    }

    #[test]
    fn writes_header_and_one_row_per_record() {
        let dir = tempdir().unwrap();
        let records = vec![record("a", "hello world"), record("b", TRANSCRIPT_UNAVAILABLE)];

        let path = write_csv(&records, dir.path()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "video_id,title,description,published_at,view_count,duration_seconds,like_count,transcript_text"
        );
        assert_eq!(
            lines[1],
            "a,Video a,desc,2024-01-01T00:00:00Z,100,42,7,hello world"
        );
        assert_eq!(
            lines[2],
            "b,Video b,desc,2024-01-01T00:00:00Z,100,42,7,Unavailable"
        );
    }

    #[test]
    fn quotes_fields_containing_separators_and_quotes() {
        let dir = tempdir().unwrap();
        let mut rec = record("a", "one two");
        rec.metadata.title = "a, \"quoted\" title".to_string();
        rec.metadata.description = "line one\nline two".to_string();

        let path = write_csv(&[rec], dir.path()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"a, \"\"quoted\"\" title\""));
        assert!(content.contains("\"line one\nline two\""));
    }

    #[test]
    fn absent_counts_are_empty_cells() {
        let dir = tempdir().unwrap();
        let mut rec = record("a", "text");
        rec.metadata.view_count = None;
        rec.metadata.like_count = None;

        let path = write_csv(&[rec], dir.path()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content
            .lines()
            .nth(1)
            .unwrap()
            .ends_with(",2024-01-01T00:00:00Z,,42,,text"));
    }

    #[test]
    fn creates_missing_folders_and_overwrites_previous_exports() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("out").join("run1");

        let first = write_csv(&[record("a", "x"), record("b", "y")], &nested).unwrap();
        assert_eq!(first, nested.join(CSV_FILE_NAME));

        let second = write_csv(&[record("c", "z")], &nested).unwrap();
        assert_eq!(first, second);
        let content = fs::read_to_string(&second).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("c,Video c"));
    }
}
