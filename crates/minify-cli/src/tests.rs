use crate::*;
use clap::Parser;
use std::io::Cursor;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("minify").chain(args.iter().copied())).unwrap()
}

// ========== Arguments ==========

#[test]
fn test_defaults() {
    let c = cli(&[]);
    assert_eq!(c.profile, Profile::Base);
    assert!(c.input.is_none());
    assert!(c.output.is_none());
    assert!(!c.stats);
    assert_eq!(c.log_level(), "warn");
}

#[test]
fn test_flags() {
    let c = cli(&["in.c", "-o", "out.c", "--profile", "regions", "--skip-region", "license", "--stats", "-vv"]);
    assert_eq!(c.input.as_deref(), Some(Path::new("in.c")));
    assert_eq!(c.output.as_deref(), Some(Path::new("out.c")));
    assert_eq!(c.profile, Profile::Regions);
    assert_eq!(c.skip_regions, vec!["license".to_string()]);
    assert!(c.stats);
    assert_eq!(c.log_level(), "debug");
}

#[test]
fn test_unknown_profile_rejected() {
    let args = ["minify", "--profile", "fortran"];
    assert!(Cli::try_parse_from(args).is_err());
}

// ========== Config ==========

#[test]
fn test_skip_regions_extend_profile() {
    let config = load_config(&cli(&["--profile", "regions", "--skip-region", "license", "--skip-region", "header"])).unwrap();
    assert_eq!(config.regions.skip, vec!["header", "footer", "license"]);
}

#[test]
fn test_config_file_replaces_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minify.json");
    fs::write(&path, r#"{"line_comment": "--"}"#).unwrap();
    let config = load_config(&cli(&["--config", path.to_str().unwrap()])).unwrap();
    assert_eq!(config.line_comment.as_deref(), Some("--"));
}

// ========== Run ==========

#[test]
fn test_run_stdin_to_stdout() {
    let mut out = Vec::new();
    let r = run(&cli(&[]), Cursor::new("x = 1; // c\ny = 2;"), &mut out).unwrap().unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "x=1;y=2;");
    assert_eq!(r.lines_in, 2);
}

#[test]
fn test_run_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.cs");
    let output = dir.path().join("out.cs");
    fs::write(&input, "#region header\nusing X;\n#endregion\nclass A { }\n").unwrap();

    let c = cli(&[input.to_str().unwrap(), "-o", output.to_str().unwrap(), "-p", "regions"]);
    let mut stdout = Vec::<u8>::new();
    run(&c, Cursor::new(""), &mut stdout).unwrap();

    assert!(stdout.is_empty());
    assert_eq!(fs::read_to_string(&output).unwrap(), "class A{}");
}

#[test]
fn test_run_empty_input_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.txt");
    let c = cli(&["-o", output.to_str().unwrap()]);
    let result = run(&c, Cursor::new(""), Vec::<u8>::new()).unwrap();
    assert!(result.is_none());
    assert!(!output.exists());
}

#[test]
fn test_run_missing_input_file() {
    let err = run(&cli(&["/no/such/file.c"]), Cursor::new(""), Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, MinifyError::Io(_)));
}

#[test]
fn test_read_input_empty() {
    let err = read_input(None, Cursor::new("")).unwrap_err();
    assert!(err.is_input_unavailable());
    assert_eq!(read_input(None, Cursor::new(" ")).unwrap(), " ");
}

#[test]
fn test_format_stats() {
    let r = Minifier::default().minify_detailed("a /* open");
    let s = format_stats(&r);
    assert!(s.starts_with("9 -> 1 bytes"));
    assert!(s.contains("ends inside a comment"));
}
