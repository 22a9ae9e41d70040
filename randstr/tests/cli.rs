use std::process::{Command, Output};

fn randstr(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_randstr"))
        .args(args)
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .output()
        .expect("failed to run randstr")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn labelled(output: &Output, label: &str) -> String {
    stdout(output)
        .trim_end()
        .strip_prefix(label)
        .unwrap_or_else(|| panic!("missing {label:?} in {:?}", stdout(output)))
        .to_string()
}

#[test]
fn default_run() {
    let out = randstr(&[]);
    assert!(out.status.success());
    let secret = labelled(&out, "Generated Random String: ");
    assert_eq!(secret.len(), 16);
    assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn digits_length_six() {
    let out = randstr(&["--charset", "digits", "--length", "6"]);
    assert!(out.status.success());
    let secret = labelled(&out, "Generated Random String: ");
    assert_eq!(secret.len(), 6);
    assert!(secret.chars().all(|c| c.is_ascii_digit()), "{secret}");
}

#[test]
fn custom_without_chars_is_usage_error() {
    let out = randstr(&["--charset", "custom", "--length", "5"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty(), "no generation line");
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("--custom_chars"), "{err}");
}

#[test]
fn custom_chars_only() {
    let out = randstr(&["-c", "custom", "--custom_chars", "ab", "-l", "40"]);
    assert!(out.status.success());
    let secret = labelled(&out, "Generated Random String: ");
    assert_eq!(secret.len(), 40);
    assert!(secret.chars().all(|c| c == 'a' || c == 'b'));
}

#[test]
fn unknown_charset_is_usage_error() {
    let out = randstr(&["--charset", "emoji"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn zero_length_is_precondition_error() {
    let out = randstr(&["--length", "0"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stdout.is_empty());
    let err = String::from_utf8(out.stderr).unwrap();
    assert_eq!(err.lines().count(), 1, "one line per error: {err}");
}

#[test]
fn hash_password() {
    let out = randstr(&["--hash_password", "--length", "16"]);
    assert!(out.status.success());
    let digest = labelled(&out, "Generated (and Hashed) Random String (SHA256): ");
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    assert!(!stdout(&out).contains("Generated Random String:"));

    let again = randstr(&["--hash_password", "--length", "16"]);
    assert_ne!(digest, labelled(&again, "Generated (and Hashed) Random String (SHA256): "));
}

#[test]
fn template_fixture() {
    let out = randstr(&["-l", "24", "--template", "tests/data/env.tmpl"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let mut lines = text.lines();
    let secret = lines.next().unwrap().strip_prefix("DATABASE_PASSWORD=").unwrap();
    assert_eq!(secret.len(), 24);
    assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(lines.next(), Some("DATABASE_PASSWORD_LEN=24"));
    assert_eq!(lines.next(), None);
    assert!(text.ends_with("=24\n") && !text.ends_with("\n\n"), "{text:?}");
}

#[test]
fn huge_length_is_precondition_error() {
    let out = randstr(&["-q", "-l", &usize::MAX.to_string()]);
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stdout.is_empty());
    let err = String::from_utf8(out.stderr).unwrap();
    assert_eq!(err.lines().count(), 1, "one line, no panic: {err}");
}

#[test]
fn missing_template_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.tmpl");
    let out = randstr(&["--template", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(4));
    assert!(out.stdout.is_empty(), "no partial output");
}

#[test]
fn clipboard_failure_keeps_result_and_exit_code() {
    // no display in the child env, so arboard has nothing to talk to
    let out = randstr(&["--copy", "-c", "letters", "-l", "12"]);
    assert!(out.status.success());
    let secret = labelled(&out, "Generated Random String: ");
    assert_eq!(secret.len(), 12);
    assert!(secret.chars().all(|c| c.is_ascii_alphabetic()));
}

#[test]
fn quiet_silences_logs() {
    let out = randstr(&["--copy", "--quiet"]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
}
