use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

fn schema_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../bqproto/bqproto/tests/fixtures/schemas")
        .join(name)
}

fn genproto(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_genproto"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("GENPROTO_LOG")
        .env_remove("GENPROTO_FORMAT")
        .output()
        .unwrap()
}

#[test]
fn print_writes_document_to_stdout() {
    let schema = schema_path("courses.json");

    let output = genproto(&["print", schema.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("syntax = \"proto3\";\n\nmessage RawCourses {\n"));
    assert!(stdout.ends_with("}\n"));
}

#[test]
fn proto_names_descriptor_after_schema_stem() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("students.pb");
    let schema = schema_path("students.json");

    let output = genproto(&[
        "proto",
        schema.to_str().unwrap(),
        out.to_str().unwrap(),
        "--format",
        "descriptor-set",
    ]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let bytes = fs::read(&out).unwrap();
    assert!(!bytes.is_empty());
    assert!(
        bytes.windows(b"students.proto".len()).any(|w| w == b"students.proto"),
        "descriptor file should be named after the schema stem"
    );
}

#[test]
fn dir_writes_one_file_per_schema() {
    let dir = tempfile::tempdir().unwrap();
    let schemas = schema_path("");

    let output = genproto(&["dir", schemas.to_str().unwrap(), dir.path().to_str().unwrap()]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let courses = fs::read_to_string(dir.path().join("courses.proto")).unwrap();
    let students = fs::read_to_string(dir.path().join("students.proto")).unwrap();
    assert!(courses.contains("message RawCourses {"));
    assert!(students.contains("message RawStudents {"));
}

#[test]
fn invalid_log_filter_is_reported() {
    let schema = schema_path("courses.json");

    let output = genproto(&["--log-level", "genproto=loud", "print", schema.to_str().unwrap()]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ignoring invalid log filter"), "{stderr}");
    assert!(stderr.contains("genproto=loud"), "{stderr}");
}

#[test]
fn translation_failure_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bad.proto");
    let schema = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../bqproto/bqproto/tests/fixtures/invalid/unsupported.json");

    let output = genproto(&["proto", schema.to_str().unwrap(), out.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("UNSUPPORTED_TYPE"));
    assert!(!out.exists());
}
