use es_reindex::jsonl::EsDocument;
use es_reindex::{run, RunOptions};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn options(&self, mapping: &Path, limit: i64, seed: u64) -> RunOptions {
        RunOptions {
            input: self.dir.path().join("input.json"),
            mapping: mapping.to_path_buf(),
            output: self.dir.path().join("output.json"),
            limit,
            seed: Some(seed),
        }
    }

    fn output_lines(&self) -> Vec<Value> {
        let content = std::fs::read_to_string(self.dir.path().join("output.json")).unwrap();
        if content.is_empty() {
            return vec![];
        }
        content
            .split('\n')
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

/// The single-rename example: `_source` is rebuilt, meta is carried over.
#[test]
fn test_rename_end_to_end() {
    let fixture = Fixture::new();
    fixture.write(
        "input.json",
        r#"{"_id":"1","_type":"t","_source":{"a":"x"}}"#,
    );
    let mapping = fixture.write(
        "mapping.json",
        r#"{"index":"people-v2","field_mapping":{"b":"a"}}"#,
    );

    let summary = run(&fixture.options(&mapping, -1, 1)).unwrap();
    assert_eq!(summary.documents_read, 1);
    assert_eq!(summary.documents_written, 1);
    assert_eq!(summary.seed, 1);

    let lines = fixture.output_lines();
    assert_eq!(
        lines,
        vec![json!({
            "_index": "people-v2",
            "_type": "t",
            "_id": "1",
            "_source": {"b": "x"}
        })]
    );
}

#[test]
fn test_all_categories_with_side_data() {
    let fixture = Fixture::new();
    fixture.write(
        "input.json",
        concat!(
            r#"{"_index":"old","_type":"doc","_id":"42","_score":1.0,"_source":{"user":{"name":"ada","city":null},"n":5}}"#,
            "\n",
            r#"{"_index":"old","_type":"doc","_id":"7","_source":{"user":{"name":"bob"}}}"#,
            "\n"
        ),
    );
    let side = fixture.write("side.csv", "id,name,profile.team\n42,Alice,core\n");
    let mapping = fixture.write(
        "mapping.json",
        &json!({
            "index": "people-v2",
            "field_mapping": {
                "profile.login": "user.name",
                "profile.city": "user.city",
                "count": "n"
            },
            "default_values": {"count": 10, "status": "migrated"},
            "random_generate": {
                "rank": {"type": "long", "min": 3, "max": 3},
                "tier": {"type": "keyword", "values": ["gold"]},
                "born": {"type": "date"},
                "shape": {"type": "geo_shape"}
            },
            "file": {"path": side.to_string_lossy()}
        })
        .to_string(),
    );

    run(&fixture.options(&mapping, -1, 5)).unwrap();
    let lines = fixture.output_lines();
    assert_eq!(lines.len(), 2);

    assert_eq!(
        lines[0],
        json!({
            "_index": "people-v2",
            "_type": "doc",
            "_id": "42",
            "_score": 1.0,
            "_source": {
                "profile": {"login": "ada", "city": null, "team": "core"},
                "count": 10,
                "status": "migrated",
                "rank": 3,
                "tier": "gold",
                "born": {},
                "shape": null,
                "name": "Alice"
            }
        })
    );

    // No side-data row and no `user.city` for the second document.
    assert_eq!(
        lines[1]["_source"],
        json!({
            "profile": {"login": "bob"},
            "count": 10,
            "status": "migrated",
            "rank": 3,
            "tier": "gold",
            "born": {},
            "shape": null
        })
    );
    assert!(lines[1].get("_score").is_none());
}

#[test]
fn test_limit_and_blank_lines() {
    let fixture = Fixture::new();
    fixture.write(
        "input.json",
        "{\"_id\":\"1\",\"_source\":{\"a\":1}}\n\n{\"_id\":\"2\",\"_source\":{\"a\":2}}\n{\"_id\":\"3\",\"_source\":{\"a\":3}}\n",
    );
    let mapping = fixture.write("mapping.json", r#"{"field_mapping":{"b":"a"}}"#);

    let summary = run(&fixture.options(&mapping, 3, 1)).unwrap();
    assert_eq!(summary.documents_written, 2);

    let ids: Vec<_> = fixture
        .output_lines()
        .iter()
        .map(|line| line["_id"].clone())
        .collect();
    assert_eq!(ids, [json!("1"), json!("2")]);
}

#[test]
fn test_output_has_no_trailing_newline() {
    let fixture = Fixture::new();
    fixture.write(
        "input.json",
        "{\"_id\":\"1\",\"_source\":{}}\n{\"_id\":\"2\",\"_source\":{}}\n",
    );
    let mapping = fixture.write("mapping.json", "{}");

    run(&fixture.options(&mapping, -1, 1)).unwrap();
    let content = std::fs::read_to_string(fixture.dir.path().join("output.json")).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(!content.ends_with('\n'));

    let doc: EsDocument = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(doc.index, None);
    assert!(doc.source.is_empty());
}

#[test]
fn test_same_seed_reproduces_output() {
    let fixture = Fixture::new();
    fixture.write(
        "input.json",
        "{\"_id\":\"1\"}\n{\"_id\":\"2\"}\n{\"_id\":\"3\"}\n",
    );
    let mapping = fixture.write(
        "mapping.json",
        r#"{"random_generate":{
            "blob":{"type":"binary"},
            "flag":{"type":"boolean"},
            "score":{"type":"float","min":0,"max":100},
            "n":{"type":"integer","min":-1000,"max":1000}
        }}"#,
    );

    run(&fixture.options(&mapping, -1, 2024)).unwrap();
    let first = fixture.output_lines();
    run(&fixture.options(&mapping, -1, 2024)).unwrap();
    let second = fixture.output_lines();

    assert_eq!(first, second);
    for line in &first {
        let score = line["_source"]["score"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&score));
    }
}

#[test]
fn test_yaml_mapping() {
    let fixture = Fixture::new();
    fixture.write("input.json", r#"{"_id":"1","_source":{"a":{"b":"x"}}}"#);
    let mapping = fixture.write(
        "mapping.yaml",
        "index: from-yaml\nfield_mapping:\n  c.d: a.b\n",
    );

    run(&fixture.options(&mapping, -1, 1)).unwrap();
    let lines = fixture.output_lines();
    assert_eq!(lines[0]["_index"], json!("from-yaml"));
    assert_eq!(lines[0]["_source"], json!({"c": {"d": "x"}}));
}

#[test]
fn test_malformed_input_fails_without_output() {
    let fixture = Fixture::new();
    fixture.write("input.json", "{\"_id\":\"1\"}\n{broken\n");
    let mapping = fixture.write("mapping.json", "{}");

    let err = run(&fixture.options(&mapping, -1, 1)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to read input documents"));
    assert!(message.contains("line 2"));
    assert!(!fixture.dir.path().join("output.json").exists());
}

#[test]
fn test_data_shape_collision_fails_run() {
    let fixture = Fixture::new();
    fixture.write("input.json", r#"{"_id":"9","_source":{"a":1}}"#);
    let mapping = fixture.write(
        "mapping.json",
        r#"{"field_mapping":{"x":"a"},"default_values":{"x.y":2}}"#,
    );

    let err = run(&fixture.options(&mapping, -1, 1)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to transform document 9"));
    assert!(message.contains("segment 'x'"));
    assert!(!fixture.dir.path().join("output.json").exists());
}

#[test]
fn test_side_file_without_id_column_fails() {
    let fixture = Fixture::new();
    fixture.write("input.json", r#"{"_id":"1"}"#);
    let side = fixture.write("side.csv", "key,name\n1,Alice\n");
    let mapping = fixture.write(
        "mapping.json",
        &json!({"file": {"path": side.to_string_lossy()}}).to_string(),
    );

    let err = run(&fixture.options(&mapping, -1, 1)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to load side data"));
    assert!(message.contains("no 'id' column"));
}

#[test]
fn test_invalid_random_spec_fails_before_reading_input() {
    let fixture = Fixture::new();
    // Input is never created: mapping validation must fail first.
    let mapping = fixture.write(
        "mapping.json",
        r#"{"random_generate":{"stats.count":{"type":"long","max":3}}}"#,
    );

    let err = run(&fixture.options(&mapping, -1, 1)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Invalid mapping"));
    assert!(message.contains("random_generate.stats.count"));
    assert!(message.contains("'min'"));
}

#[test]
fn test_missing_mapping_file() {
    let fixture = Fixture::new();
    let missing = fixture.dir.path().join("nope.json");

    let err = run(&fixture.options(&missing, -1, 1)).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load mapping file"));
}
