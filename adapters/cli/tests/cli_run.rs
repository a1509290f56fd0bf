use std::process::Command;

fn life() -> Command {
    Command::new(env!("CARGO_BIN_EXE_life"))
}

#[test]
fn fixed_preset_prints_requested_generations() {
    let output = life()
        .args(["--preset", "fixed", "--generations", "2", "--delay-ms", "0", "--no-clear"])
        .output()
        .expect("failed to run life binary");

    assert!(output.status.success(), "life should exit cleanly");
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2 * 31, "two frames of 30 rows plus a footer");
    assert_eq!(lines[30], "generation: 1");
    assert_eq!(lines[61], "generation: 2");
    assert!(lines
        .iter()
        .filter(|line| !line.starts_with("generation"))
        .all(|line| line.len() == 30));
}

#[test]
fn custom_glyphs_are_used() {
    let output = life()
        .args([
            "--preset", "glider", "--width", "6", "--height", "6", "--generations", "1",
            "--delay-ms", "0", "--no-clear", "--alive", "#", "--dead", "-",
        ])
        .output()
        .expect("failed to run life binary");

    assert!(output.status.success(), "life should exit cleanly");
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert_eq!(stdout.matches('#').count(), 5);
    assert!(!stdout.contains('W'));
}

#[test]
fn zero_height_fails_before_running() {
    let output = life()
        .args(["--height", "0", "--generations", "1"])
        .output()
        .expect("failed to run life binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf-8 output");
    assert!(stderr.contains("grid height must be positive"));
    assert!(output.stdout.is_empty());
}

#[test]
fn unaddressable_grid_size_is_reported_not_panicked() {
    let output = life()
        .args([
            "--preset", "glider", "--width", "4294967295", "--height", "4294967295",
            "--generations", "1",
        ])
        .output()
        .expect("failed to run life binary");

    assert_eq!(output.status.code(), Some(1), "validation errors exit with 1, panics with 101");
    let stderr = String::from_utf8(output.stderr).expect("utf-8 output");
    assert!(stderr.contains("grid of 4294967295x4294967295 cells is too large"));
    assert!(!stderr.contains("panicked"));
    assert!(output.stdout.is_empty());
}

#[test]
fn invisible_glyph_is_rejected() {
    let output = life()
        .args(["--preset", "glider", "--generations", "1", "--dead", "\u{200B}"])
        .output()
        .expect("failed to run life binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf-8 output");
    assert!(stderr.contains("invalid glyphs"));
    assert!(output.stdout.is_empty());
}

#[test]
fn help_lists_every_option() {
    let output = life().arg("--help").output().expect("failed to run life binary");

    assert!(output.status.success());
    let help = String::from_utf8(output.stdout).expect("utf-8 output");
    for flag in [
        "--preset",
        "--width",
        "--height",
        "--population",
        "--seed",
        "--delay-ms",
        "--generations",
        "--alive",
        "--dead",
        "--no-clear",
        "--config",
    ] {
        assert!(help.contains(flag), "help should document {flag}");
    }
    for preset in ["fixed", "glider", "random"] {
        assert!(help.contains(preset), "help should list the {preset} preset");
    }
}
