use std::process::Command;

fn viewpan(args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_viewpan"));
    cmd.args(args);
    cmd.output().expect("failed to execute viewpan")
}

#[test]
fn help_exits_successfully() {
    // Act
    let output = viewpan(&["--help"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("recentering offset calculator"));
}

#[test]
fn version_exits_successfully() {
    // Act
    let output = viewpan(&["--version"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("viewpan"));
}

#[test]
fn compute_centers_target_with_panel_closed() {
    // Arrange — chrome passed explicitly so a user config can't skew it
    let args = [
        "compute",
        "--stage",
        "0,0,1000x800",
        "--target",
        "400,300,100x60",
        "--bar-height",
        "100",
        "--panel-width",
        "350",
    ];

    // Act
    let output = viewpan(&args);

    // Assert — visible center (500, 350), target center (450, 330)
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dx: 50 dy: 20"));
}

#[test]
fn compute_with_open_panel_shifts_left() {
    // Arrange
    let args = [
        "compute",
        "--stage",
        "0,0,1000x800",
        "--target",
        "400,300,100x60",
        "--panel-open",
        "--bar-height",
        "100",
        "--panel-width",
        "350",
    ];

    // Act
    let output = viewpan(&args);

    // Assert — visible width 650, centered at x = 325
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dx: -125 dy: 20"));
}

#[test]
fn compute_emits_json() {
    // Arrange
    let args = [
        "compute",
        "--stage",
        "0,0,1000x800",
        "--target",
        "400,300,100x60",
        "--bar-height",
        "100",
        "--panel-width",
        "350",
        "--json",
    ];

    // Act
    let output = viewpan(&args);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"dx\":50.0"));
    assert!(stdout.contains("\"dy\":20.0"));
}

#[test]
fn compute_without_stage_is_a_noop() {
    // Act
    let output = viewpan(&["compute", "--target", "400,300,100x60"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dx: 0 dy: 0"));
}

#[test]
fn compute_rejects_malformed_rect() {
    // Act
    let output = viewpan(&["compute", "--stage", "banana", "--target", "0,0,10x10"]);

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid rect"));
}

#[test]
fn config_subcommand_shows_effective_values() {
    // Act
    let output = viewpan(&["config"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Config file:"));
    assert!(stdout.contains("chrome.bar_height"));
    assert!(stdout.contains("chrome.panel_width"));
}
