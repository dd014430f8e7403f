use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn perf_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn label_perf() -> Command {
    let mut cmd = Command::cargo_bin("label-perf").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("LABEL_PERF_CONFIG")
        .env_remove("LABEL_PERF_ON_MALFORMED")
        .env_remove("LABEL_PERF_LOG_LEVEL")
        .current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn latency_regression_prints_bad() -> Result<(), Box<dyn std::error::Error>> {
    let file = perf_file("239 micros/op\n");
    label_perf()
        .arg("200")
        .arg("micros/op")
        .arg("greater")
        .arg(file.path())
        .assert()
        .success()
        .stdout("bad\n");
    Ok(())
}

#[test]
fn averaged_latency_at_threshold_prints_good() -> Result<(), Box<dyn std::error::Error>> {
    let file = perf_file("150 micros/op\n250 micros/op\n");
    label_perf()
        .args(["200", "micros/op", "greater"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("good\n");
    Ok(())
}

#[test]
fn throughput_scenarios() -> Result<(), Box<dyn std::error::Error>> {
    let at_threshold = perf_file("700 MB/S\n");
    label_perf()
        .args(["700", "MB/S", "less"])
        .arg(at_threshold.path())
        .assert()
        .success()
        .stdout("good\n");

    let below = perf_file("650 MB/S\n");
    label_perf()
        .args(["700", "MB/S", "less"])
        .arg(below.path())
        .assert()
        .success()
        .stdout("bad\n");
    Ok(())
}

#[test]
fn no_measurements_prints_skip() -> Result<(), Box<dyn std::error::Error>> {
    let file = perf_file("benchmark finished without numbers\n");
    label_perf()
        .args(["700", "MB/S", "less"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("skip\n");
    Ok(())
}

#[test]
fn missing_file_prints_usage_and_exits_1() -> Result<(), Box<dyn std::error::Error>> {
    label_perf()
        .args(["700", "MB/S", "less", "/nonexistent/label-perf/perf.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("usage: label-perf"))
        .stdout(predicate::str::starts_with("good").not())
        .stdout(predicate::str::starts_with("bad").not())
        .stdout(predicate::str::starts_with("skip").not());
    Ok(())
}

#[test]
fn too_few_arguments_prints_usage_and_exits_1() -> Result<(), Box<dyn std::error::Error>> {
    label_perf()
        .args(["700", "MB/S"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("usage: label-perf"));

    label_perf()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("averages them"));
    Ok(())
}

#[test]
fn invalid_direction_is_reported_on_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let file = perf_file("650 MB/S\n");
    label_perf()
        .args(["700", "MB/S", "sideways"])
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid direction"));
    Ok(())
}

#[test]
fn malformed_measurement_fails_unless_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let file = perf_file("650 MB/S\nfast MB/S\n");
    label_perf()
        .args(["700", "MB/S", "less"])
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed measurement on line 2"));

    label_perf()
        .env("LABEL_PERF_ON_MALFORMED", "skip")
        .args(["700", "MB/S", "less"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("bad\n");
    Ok(())
}

#[test]
fn negative_threshold_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let file = perf_file("-2.5 dB\n");
    label_perf()
        .args(["-3", "dB", "less"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("good\n");
    Ok(())
}

#[test]
fn debug_logging_stays_off_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let file = perf_file("239 micros/op\n");
    label_perf()
        .env("LABEL_PERF_LOG_LEVEL", "debug")
        .args(["200", "micros/op", "greater"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("bad\n")
        .stderr(predicate::str::contains("count=1"));
    Ok(())
}

#[test]
fn usage_ignores_broken_config() -> Result<(), Box<dyn std::error::Error>> {
    label_perf()
        .env("LABEL_PERF_CONFIG", "/nonexistent/label-perf.toml")
        .args(["700", "MB/S"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("usage: label-perf"));

    label_perf()
        .env("LABEL_PERF_LOG_LEVEL", "not a [valid filter")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("label-perf"));
    Ok(())
}

#[test]
fn invalid_utf8_elsewhere_in_log_still_classifies() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"latency 12 \xb5s\n239 micros/op\n")?;
    label_perf()
        .args(["200", "micros/op", "greater"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("bad\n");
    Ok(())
}
