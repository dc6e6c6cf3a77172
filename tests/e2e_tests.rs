//! End-to-end integration tests
//!
//! These tests drive complete invocations through `cli::run` with in-memory
//! standard streams. Relay tests use fixtures in tests/fixtures/, each with an
//! input.txt; the expected output is always the input, byte for byte.
//!
//! Each relay fixture is run twice: once through stdin/stdout and once through
//! `--input`/`--output` redirection.

#[cfg(test)]
mod tests {
    use pipe_scaffold::cli::{run, Status};
    use rstest::rstest;
    use std::ffi::OsStr;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Copy)]
    enum Route {
        Standard,
        Redirected,
    }

    struct Invocation {
        status: Status,
        stdout: Vec<u8>,
        stderr: String,
    }

    fn invoke<S: AsRef<OsStr>>(args: &[S], stdin: &[u8]) -> Invocation {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let status = run(args, stdin, &mut stdout, &mut stderr);
        Invocation {
            status,
            stdout,
            stderr: String::from_utf8(stderr).expect("diagnostics are UTF-8"),
        }
    }

    /// Relay tests/fixtures/{fixture_name}/input.txt and compare with the input
    fn run_relay_fixture(fixture_name: &str, route: Route) {
        let input_path = format!("tests/fixtures/{}/input.txt", fixture_name);
        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        let expected = fs::read(&input_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", input_path, e));

        let actual = match route {
            Route::Standard => {
                let invocation = invoke(&["--key", "feature_type"], &expected);
                assert_eq!(invocation.status, Status::Success, "{}", invocation.stderr);
                invocation.stdout
            }
            Route::Redirected => {
                let dir = TempDir::new().expect("Failed to create temp dir");
                let output_path = dir.path().join("output.txt");
                let invocation = invoke(
                    &[
                        "--input",
                        input_path.as_str(),
                        "--output",
                        output_path.to_str().unwrap(),
                    ],
                    b"stdin must not be read\n",
                );
                assert_eq!(invocation.status, Status::Success, "{}", invocation.stderr);
                assert!(invocation.stdout.is_empty());
                fs::read(&output_path).expect("Failed to read output file")
            }
        };

        assert_eq!(
            actual, expected,
            "\n\nOutput mismatch for fixture: {} (route: {:?})\n",
            fixture_name, route
        );
    }

    #[rstest]
    #[case("three_lines")]
    #[case("crlf_no_final_newline")]
    #[case("empty")]
    #[case("features")]
    fn test_relay_fixtures(
        #[case] fixture: &str,
        #[values(Route::Standard, Route::Redirected)] route: Route,
    ) {
        run_relay_fixture(fixture, route);
    }

    #[test]
    fn test_redirection_preserves_line_count() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("foo.txt");
        let output = dir.path().join("bar.txt");
        let lines: String = (1..=250).map(|i| format!("record {}\n", i)).collect();
        fs::write(&input, &lines).unwrap();

        let invocation = invoke(
            &[
                "--input",
                input.to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
            ],
            b"",
        );

        assert_eq!(invocation.status.code(), 0);
        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written.lines().count(), 250);
        assert_eq!(written, lines);
    }

    #[rstest]
    #[case::alone(&["--help"])]
    #[case::after_unknown(&["--bogus", "--help"])]
    #[case::after_bad_key(&["--key", "nope", "--help"])]
    #[case::after_trailing(&["stray", "--help"])]
    fn test_help_wins(#[case] args: &[&str]) {
        let invocation = invoke(args, b"data\n");

        assert_eq!(invocation.status.code(), 0);
        assert!(invocation.stdout.is_empty());
        assert!(invocation.stderr.starts_with("Usage: pipe-scaffold"));
        for option in ["--input", "--output", "--verbose", "--key", "--value", "--help"] {
            assert!(invocation.stderr.contains(option), "usage lacks {}", option);
        }
    }

    #[rstest]
    #[case::unknown(&["--bogus"], "ERROR: invalid option: --bogus")]
    #[case::short_flag(&["-h"], "ERROR: unexpected extra argument: -h")]
    #[case::key_not_permitted(
        &["--key", "gene"],
        "ERROR: value 'gene' not permitted for option --key, must be one of 'feature_type, sub_type'"
    )]
    #[case::missing_value(&["--key", "--value", "x"], "ERROR: option '--key' is missing its value")]
    #[case::trailing(
        &["--key", "feature_type", "extra_token"],
        "ERROR: unexpected extra argument: extra_token"
    )]
    #[case::missing_argument(&["--output"], "ERROR: missing argument: --output")]
    fn test_failures(#[case] args: &[&str], #[case] expected_line: &str) {
        let invocation = invoke(args, b"data\n");

        assert_eq!(invocation.status.code(), 1);
        assert!(invocation.stdout.is_empty(), "relay must not start");
        assert!(
            invocation.stderr.lines().any(|line| line == expected_line),
            "expected {:?} in:\n{}",
            expected_line,
            invocation.stderr
        );
    }

    #[test]
    fn test_every_error_reported_in_one_run() {
        let invocation = invoke(&["--bogus", "--key", "gene", "a", "b"], b"");

        assert_eq!(invocation.status, Status::Failure);
        let lines: Vec<_> = invocation.stderr.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.starts_with("ERROR: ")));
    }

    #[test]
    fn test_validation_failure_does_not_create_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.txt");

        let invocation = invoke(
            &["--output", output.to_str().unwrap(), "--key", "gene"],
            b"data\n",
        );

        assert_eq!(invocation.status, Status::Failure);
        assert!(!output.exists());
    }

    #[test]
    fn test_unopenable_input_fails_immediately() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");

        let invocation = invoke(&["--input", missing.to_str().unwrap()], b"data\n");

        assert_eq!(invocation.status, Status::Failure);
        assert!(invocation.stdout.is_empty());
        assert_eq!(invocation.stderr.lines().count(), 1);
        assert!(invocation
            .stderr
            .starts_with("ERROR: cannot open input file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_relay_between_non_utf8_file_names() {
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let input = dir.path().join(OsStr::from_bytes(b"in\xff.txt"));
        let output = dir.path().join(OsStr::from_bytes(b"out\xff.txt"));
        fs::write(&input, b"alpha\nbeta\n").unwrap();

        let invocation = invoke(
            &[
                OsStr::new("--input"),
                input.as_os_str(),
                OsStr::new("--output"),
                output.as_os_str(),
            ],
            b"",
        );

        assert_eq!(invocation.status, Status::Success, "{}", invocation.stderr);
        assert_eq!(fs::read(&output).unwrap(), b"alpha\nbeta\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_text_value_fails() {
        use std::os::unix::ffi::OsStrExt;

        let invocation = invoke(
            &[OsStr::new("--value"), OsStr::from_bytes(b"\xff")],
            b"data\n",
        );

        assert_eq!(invocation.status, Status::Failure);
        assert!(invocation.stdout.is_empty());
        assert_eq!(
            invocation.stderr,
            "ERROR: value of option --value is not valid UTF-8: \u{FFFD}\n"
        );
    }

    #[test]
    fn test_verbose_does_not_touch_stdout() {
        let invocation = invoke(&["--verbose", "--value", "exon"], b"alpha\n");

        assert_eq!(invocation.status, Status::Success);
        assert_eq!(invocation.stdout, b"alpha\n");
    }
}
