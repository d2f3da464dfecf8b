use std::process::Command;

fn prokit(cwd: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_prokit"))
        .args(args)
        .current_dir(cwd)
        .env_remove("CLICOLOR_FORCE")
        .output()
        .expect("run binary")
}

#[test]
fn version_prints_banner_without_touching_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    for flag in ["-version", "--version", "-version=true"] {
        let out = prokit(dir.path(), &[flag, "-output=should-not-exist"]);
        assert!(out.status.success(), "{flag}");
        let s = String::from_utf8_lossy(&out.stdout);
        assert!(s.contains("proKit v1.0.0"), "{s}");
        assert!(s.contains("A minimal project scaffolding tool"), "{s}");
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn help_exits_zero_with_examples_and_languages() {
    let dir = tempfile::tempdir().unwrap();
    for flag in ["-help", "-h", "--help"] {
        let out = prokit(dir.path(), &[flag]);
        assert!(out.status.success(), "{flag}");
        let s = String::from_utf8_lossy(&out.stdout);
        assert!(s.contains("prokit -lang=<language> -name=<project-name> [options]"), "{s}");
        assert!(s.contains("prokit -lang=ts -name=mylibrary -type=library"), "{s}");
        assert!(s.contains("Languages: Go, TS, C, CXX, C#, Python"), "{s}");
    }
}

#[test]
fn missing_required_flags_print_usage_and_fail() {
    let dir = tempfile::tempdir().unwrap();
    for args in [&[][..], &["-lang=go"][..], &["-name=x"][..], &["-lang=", "-name=x"][..]] {
        let out = prokit(dir.path(), args);
        assert_eq!(out.status.code(), Some(1), "{args:?}");
        let err = String::from_utf8_lossy(&out.stderr);
        assert!(
            err.contains("✘ Error: language (-lang) and name (-name) are required"),
            "{err}"
        );
        assert!(err.contains("Usage:"), "{err}");
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unknown_flag_fails_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let out = prokit(dir.path(), &["--bogus"]);
    assert_eq!(out.status.code(), Some(1));
    let out = prokit(dir.path(), &["-lang"]);
    assert_eq!(out.status.code(), Some(1));
}
