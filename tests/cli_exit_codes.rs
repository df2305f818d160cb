use std::path::Path;
use std::process::Command;

use lcr_lib::LcrOutput;
use tempfile::TempDir;

fn write_candidates(path: &Path, candidates: &[&str]) {
    let json = serde_json::to_string(candidates).expect("serialize candidates");
    std::fs::write(path, json).expect("write candidates");
}

fn lcr() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lcr"))
}

#[test]
fn rank_exit_code_zero_for_decodable_pool() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("candidates.json");
    write_candidates(
        &input,
        &[
            "title 12 6 96 42 | description 12 60 96 54",
            "title 12 12 96 60 | description 12 42 96 60",
        ],
    );

    let status = lcr()
        .args([
            "rank",
            "--input",
            input.to_str().unwrap(),
            "--input-format",
            "seq",
            "--format",
            "json",
        ])
        .status()
        .expect("run lcr");
    assert_eq!(status.code(), Some(0));
}

#[test]
fn rank_output_selects_best_candidate_first() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("candidates.json");
    write_candidates(
        &input,
        &[
            "title 12 12 96 60 | description 12 42 96 60",
            "title 12 6 96 42 | description 12 60 96 54",
        ],
    );

    let output = lcr()
        .args(["rank", "--input", input.to_str().unwrap()])
        .output()
        .expect("run lcr");
    assert_eq!(output.status.code(), Some(0));

    let body: LcrOutput = serde_json::from_slice(&output.stdout).expect("rank output is JSON");
    match body {
        LcrOutput::Rank(rank) => {
            assert_eq!(rank.diagnostics.candidates, 2);
            assert_eq!(rank.selected.len(), 2);
            assert_eq!(
                rank.selected[0].source_index, 1,
                "non-overlapping candidate should win"
            );
            let decode = rank.decode.expect("seq input reports decoding");
            assert_eq!(decode.decoded, 2);
        }
        other => panic!("expected rank output, got {:?}", other),
    }
}

#[test]
fn rank_exit_code_one_when_nothing_survives() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("candidates.json");
    // Decodable label with degenerate geometry: decoded, then rejected.
    write_candidates(&input, &["title 0 0 0 0"]);

    let output = lcr()
        .args(["rank", "--input", input.to_str().unwrap()])
        .output()
        .expect("run lcr");
    assert_eq!(output.status.code(), Some(1));

    let err: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("error output is JSON");
    assert_eq!(err.get("mode").and_then(|v| v.as_str()), Some("error"));
    assert_eq!(
        err.get("error")
            .and_then(|e| e.get("category"))
            .and_then(|v| v.as_str()),
        Some("no-valid-layouts")
    );
}

#[test]
fn rank_exit_code_two_for_missing_input() {
    let status = lcr()
        .args(["rank", "--input", "missing.json"])
        .status()
        .expect("run lcr");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn rank_exit_code_two_for_invalid_cli_config() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("candidates.json");
    write_candidates(&input, &["title 12 6 96 42"]);

    let output = lcr()
        .args([
            "rank",
            "--input",
            input.to_str().unwrap(),
            "--top-k",
            "0",
        ])
        .output()
        .expect("run lcr");
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("error output is JSON");
    let message = err
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    assert!(
        message.contains("top_k"),
        "expected top_k in message, got: {message}"
    );
}

#[test]
fn rank_accepts_config_file_and_cli_overrides_it() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("candidates.json");
    let cfg = dir.path().join("lcr.toml");
    write_candidates(
        &input,
        &[
            "title 12 6 96 42 | description 12 60 96 54",
            "title 0 6 96 42 | description 12 60 96 54",
        ],
    );
    std::fs::write(&cfg, "top_k = 1\n").expect("write config");

    let output = lcr()
        .args([
            "rank",
            "--input",
            input.to_str().unwrap(),
            "--config",
            cfg.to_str().unwrap(),
        ])
        .output()
        .expect("run lcr");
    assert_eq!(output.status.code(), Some(0));
    let body: LcrOutput = serde_json::from_slice(&output.stdout).expect("rank output is JSON");
    match body {
        LcrOutput::Rank(rank) => assert_eq!(rank.selected.len(), 1, "config top_k=1 applies"),
        other => panic!("expected rank output, got {:?}", other),
    }

    let output = lcr()
        .args([
            "rank",
            "--input",
            input.to_str().unwrap(),
            "--config",
            cfg.to_str().unwrap(),
            "--top-k",
            "2",
        ])
        .output()
        .expect("run lcr");
    assert_eq!(output.status.code(), Some(0));
    let body: LcrOutput = serde_json::from_slice(&output.stdout).expect("rank output is JSON");
    match body {
        LcrOutput::Rank(rank) => assert_eq!(rank.selected.len(), 2, "CLI flag wins over config"),
        other => panic!("expected rank output, got {:?}", other),
    }
}

#[test]
fn rank_writes_output_file_and_keeps_stdout_empty() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("candidates.json");
    let out_path = dir.path().join("ranked.json");
    write_candidates(&input, &["title 12 6 96 42 | description 12 60 96 54"]);

    let output = lcr()
        .args([
            "rank",
            "--input",
            input.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("run lcr");
    assert_eq!(output.status.code(), Some(0));
    assert!(
        output.stdout.is_empty(),
        "when writing to file, stdout should stay empty"
    );

    let content = std::fs::read_to_string(&out_path).expect("read output file");
    let json: serde_json::Value = serde_json::from_str(&content).expect("output file is JSON");
    assert_eq!(json.get("mode").and_then(|v| v.as_str()), Some("rank"));
}

#[test]
fn rank_pretty_stays_json_when_piped() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("candidates.json");
    write_candidates(&input, &["title 12 6 96 42 | description 12 60 96 54"]);

    let output = lcr()
        .args([
            "rank",
            "--input",
            input.to_str().unwrap(),
            "--format",
            "pretty",
        ])
        .output()
        .expect("run lcr");
    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("piped pretty output should be JSON");
    assert_eq!(json.get("mode").and_then(|v| v.as_str()), Some("rank"));
}

#[test]
fn rank_json_input_bypasses_decoding() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("pool.json");
    let pool = serde_json::json!([
        [
            {"label": "title", "x": 0.1, "y": 0.05, "width": 0.8, "height": 0.35},
            {"label": "description", "x": 0.1, "y": 0.5, "width": 0.8, "height": 0.45}
        ]
    ]);
    std::fs::write(&input, pool.to_string()).expect("write pool");

    let output = lcr()
        .args([
            "rank",
            "--input",
            input.to_str().unwrap(),
            "--input-format",
            "json",
        ])
        .output()
        .expect("run lcr");
    assert_eq!(output.status.code(), Some(0));
    let body: LcrOutput = serde_json::from_slice(&output.stdout).expect("rank output is JSON");
    match body {
        LcrOutput::Rank(rank) => {
            assert!(rank.decode.is_none(), "json input has no decode report");
            assert_eq!(rank.selected.len(), 1);
        }
        other => panic!("expected rank output, got {:?}", other),
    }
}

#[test]
fn score_reports_breakdown_for_structured_layout() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("layout.json");
    let layout = serde_json::json!([
        {"label": "title", "x": 0.1, "y": 0.05, "width": 0.8, "height": 0.35},
        {"label": "description", "x": 0.1, "y": 0.5, "width": 0.8, "height": 0.45}
    ]);
    std::fs::write(&input, layout.to_string()).expect("write layout");

    let output = lcr()
        .args(["score", "--input", input.to_str().unwrap()])
        .output()
        .expect("run lcr");
    assert_eq!(output.status.code(), Some(0));

    let body: LcrOutput = serde_json::from_slice(&output.stdout).expect("score output is JSON");
    match body {
        LcrOutput::Score(score) => {
            assert_eq!(score.elements, 2);
            assert!(score.scores.alignment > 0.0, "columns share three axes");
            assert!(score.scores.overlap.abs() < 1e-6);
        }
        other => panic!("expected score output, got {:?}", other),
    }
}

#[test]
fn render_writes_images_grid_and_html() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("pool.json");
    let out_dir = dir.path().join("out");
    let pool = serde_json::json!([
        [
            {"label": "background", "x": 0.0, "y": 0.0, "width": 1.0, "height": 1.0},
            {"label": "title", "x": 0.25, "y": 0.1, "width": 0.5, "height": 0.1}
        ],
        [
            {"label": "logo", "x": 0.4, "y": 0.4, "width": 0.2, "height": 0.2}
        ]
    ]);
    std::fs::write(&input, pool.to_string()).expect("write pool");

    let output = lcr()
        .args([
            "render",
            "--input",
            input.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
            "--grid",
            "--html",
        ])
        .output()
        .expect("run lcr");
    assert_eq!(output.status.code(), Some(0));

    let body: LcrOutput = serde_json::from_slice(&output.stdout).expect("render output is JSON");
    match body {
        LcrOutput::Render(render) => {
            assert_eq!(render.images.len(), 2);
            for path in &render.images {
                assert!(path.exists(), "missing image {}", path.display());
            }
            let grid = render.grid.expect("grid requested");
            assert!(grid.exists());
            let html = render.html.expect("html requested");
            let page = std::fs::read_to_string(html).expect("read html");
            assert!(page.contains("class=\"title\""));
        }
        other => panic!("expected render output, got {:?}", other),
    }
}

#[test]
fn render_exit_code_two_for_empty_pool() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("pool.json");
    std::fs::write(&input, "[]").expect("write pool");

    let status = lcr()
        .args(["render", "--input", input.to_str().unwrap()])
        .status()
        .expect("run lcr");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn unknown_dataset_is_a_fatal_config_error() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("candidates.json");
    write_candidates(&input, &["title 12 6 96 42"]);

    let output = lcr()
        .args([
            "rank",
            "--input",
            input.to_str().unwrap(),
            "--dataset",
            "midjourney",
        ])
        .output()
        .expect("run lcr");
    // clap rejects the value before the command runs.
    assert_eq!(output.status.code(), Some(2));
}
