use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::error::Error;
use std::path::Path;
use tempfile::tempdir;

// Helper function to get the compiled binary with a clean configuration
fn bezel_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bezel").expect("Failed to find bezel binary");
    cmd.env_remove("BEZEL_FRAMES_DIR")
        .env_remove("BEZEL_FFMPEG")
        .env_remove("BEZEL_OUTPUT_SUFFIX")
        .env_remove("RUST_LOG");
    cmd
}

fn dummy_recording(dir: &Path) -> Result<String, Box<dyn Error>> {
    let input = dir.join("rec.mp4");
    std::fs::write(&input, "dummy content")?;
    Ok(input.to_string_lossy().into_owned())
}

#[test]
fn test_list_devices() -> Result<(), Box<dyn Error>> {
    bezel_cmd()
        .arg("--list-devices")
        .assert()
        .success()
        .stdout(contains("landscape:"))
        .stdout(contains("portrait:"))
        .stdout(contains("iphoneXSmax"))
        .stdout(contains("imac27"));
    Ok(())
}

#[test]
fn test_help_carries_trademark_notice() -> Result<(), Box<dyn Error>> {
    bezel_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--bg-color"))
        .stdout(contains("trademarks of Apple Inc."));
    Ok(())
}

#[test]
fn test_missing_required_arguments_is_a_usage_error() -> Result<(), Box<dyn Error>> {
    bezel_cmd().args(["-i", "rec.mp4"]).assert().code(2);
    Ok(())
}

#[test]
fn test_unknown_device_lists_valid_ids() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dummy_recording(dir.path())?;

    bezel_cmd()
        .args(["-i", &input, "-d", "pixel9", "--ffmpeg", "false"])
        .assert()
        .code(1)
        .stderr(contains("Unknown device 'pixel9'"))
        .stderr(contains("Landscape devices:"))
        .stderr(contains("Portrait devices:"))
        .stderr(contains("iphoneXSmax"))
        .stderr(contains("--debug").not());

    assert!(!dir.path().join("rec_overlay.mp4").exists());
    Ok(())
}

#[test]
fn test_same_input_and_output_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dummy_recording(dir.path())?;
    let output = dir.path().join(".").join("rec.mp4");

    bezel_cmd()
        .args(["-i", &input, "-o"])
        .arg(&output)
        .args(["-d", "iphoneXS", "--ffmpeg", "false"])
        .assert()
        .code(1)
        .stderr(contains("same file"));

    assert_eq!(std::fs::read_to_string(&input)?, "dummy content");
    Ok(())
}

#[test]
fn test_invalid_background_color_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dummy_recording(dir.path())?;

    bezel_cmd()
        .args(["-i", &input, "-d", "iphoneXS", "-c", "#12345", "--ffmpeg", "false"])
        .assert()
        .code(1)
        .stderr(contains("#12345"));
    Ok(())
}

#[test]
fn test_invalid_orientation_is_a_usage_error() -> Result<(), Box<dyn Error>> {
    bezel_cmd()
        .args(["-i", "rec.mp4", "-d", "iphoneXS", "--orientation", "sideways"])
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn test_missing_ffmpeg_binary_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dummy_recording(dir.path())?;
    let ffmpeg = dir.path().join("no-such-ffmpeg");

    bezel_cmd()
        .args(["-i", &input, "-d", "iphoneXS", "--ffmpeg"])
        .arg(&ffmpeg)
        .assert()
        .code(1)
        .stderr(contains("Failed to start"))
        .stderr(contains("--debug"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_failing_ffmpeg_suggests_debug() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dummy_recording(dir.path())?;

    bezel_cmd()
        .args(["-i", &input, "-d", "iphoneXS", "--ffmpeg", "false"])
        .assert()
        .code(1)
        .stderr(contains("ffmpeg exited with"))
        .stderr(contains("Re-run with --debug"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_debug_mode_logs_command_and_drops_hint() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dummy_recording(dir.path())?;

    bezel_cmd()
        .args(["-i", &input, "-d", "iphoneXS", "--debug", "--ffmpeg", "false"])
        .assert()
        .code(1)
        .stderr(contains("ffmpeg command:"))
        .stderr(contains("-filter_complex"))
        .stderr(contains("Re-run with --debug").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_clean_exit_without_output_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dummy_recording(dir.path())?;

    bezel_cmd()
        .args(["-i", &input, "-d", "iphoneXSmax", "--ffmpeg", "true"])
        .assert()
        .code(1)
        .stderr(contains("no output was written"))
        .stderr(contains("rec_overlay.mp4"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_existing_output_after_clean_exit_succeeds() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dummy_recording(dir.path())?;
    let output = dir.path().join("framed.mp4");
    std::fs::write(&output, "stand-in for ffmpeg output")?;

    bezel_cmd()
        .args(["-i", &input, "-d", "ipadPro11", "--orientation", "landscape", "--ffmpeg", "true", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stderr(contains("Video saved to:"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_failing_ffmpeg_is_reported_once() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dummy_recording(dir.path())?;

    let output = bezel_cmd()
        .args(["-i", &input, "-d", "iphoneXS", "--ffmpeg", "false"])
        .output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr.matches("ffmpeg exited with").count(), 1, "{stderr}");
    assert!(!stderr.contains("ERROR"), "{stderr}");
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_missing_output_is_reported_once() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dummy_recording(dir.path())?;

    let output = bezel_cmd()
        .args(["-i", &input, "-d", "iphoneXS", "--ffmpeg", "true"])
        .output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr.matches("rec_overlay.mp4").count(), 1, "{stderr}");
    assert!(!stderr.contains("does not exist"), "{stderr}");
    Ok(())
}
