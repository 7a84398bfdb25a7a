use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE_CSV: &str = "\
Nazwa zestawu reklam;Wydana kwota (PLN);Wyniki;Dodanie do koszyka w witrynie;Zainicjowanie finalizacji zakupu;Kliknięcia (wszystkie);Zasięg;Wyświetlenia;CPC (wszystkie) (PLN)
Zestaw A;100;10;12;9;300;5000;8000;1.5
Zestaw B;100;2;4;3;150;2500;4100;2.5
";

fn cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("metamonitor").unwrap();
    cmd.env("METAMONITOR_CONFIG_DIR", config_dir);
    cmd
}

/// Initialize a fresh config + data dir pair and return them.
fn setup(tmp: &Path) -> Result<(PathBuf, PathBuf)> {
    let config_dir = tmp.join("config");
    let data_dir = tmp.join("data");
    cmd(&config_dir)
        .arg("init")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized metamonitor"));
    Ok((config_dir, data_dir))
}

fn write_sample(tmp: &Path) -> Result<PathBuf> {
    let csv_path = tmp.join("export.csv");
    fs::write(&csv_path, SAMPLE_CSV)?;
    Ok(csv_path)
}

#[test]
fn test_import_and_monitor() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let (config_dir, _) = setup(tmp.path())?;
    let csv_path = write_sample(tmp.path())?;

    cmd(&config_dir)
        .arg("import")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 ad sets imported"));

    cmd(&config_dir)
        .arg("monitor")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Łączne wydatki:    200,00 PLN")
                .and(predicate::str::contains("Aktywne kreacje:   2/2"))
                .and(predicate::str::contains("Zestaw A"))
                .and(predicate::str::contains("SKALUJ"))
                .and(predicate::str::contains("ZATRZYMAJ")),
        );
    Ok(())
}

#[test]
fn test_import_rejects_missing_columns() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let (config_dir, _) = setup(tmp.path())?;
    let csv_path = write_sample(tmp.path())?;
    cmd(&config_dir).arg("import").arg(&csv_path).assert().success();

    let bad = tmp.path().join("bad.csv");
    fs::write(&bad, "Nazwa zestawu reklam;Wyniki\nA;5\n")?;
    cmd(&config_dir)
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing CSV columns"));

    // The rejected file must not have touched the existing portfolio.
    cmd(&config_dir)
        .arg("monitor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zestaw A"));
    Ok(())
}

#[test]
fn test_export_load_roundtrip() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let (config_dir, _) = setup(tmp.path())?;
    let csv_path = write_sample(tmp.path())?;
    cmd(&config_dir).arg("import").arg(&csv_path).assert().success();

    let json_path = tmp.path().join("analysis.json");
    cmd(&config_dir)
        .arg("export")
        .arg("--output")
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 records"));

    cmd(&config_dir).arg("clear").assert().success();
    cmd(&config_dir)
        .arg("monitor")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data"));

    cmd(&config_dir)
        .arg("load")
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 records loaded"));
    cmd(&config_dir)
        .arg("monitor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zestaw B"));
    Ok(())
}

#[test]
fn test_load_rejects_malformed_json_without_clobbering() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let (config_dir, _) = setup(tmp.path())?;
    let csv_path = write_sample(tmp.path())?;
    cmd(&config_dir).arg("import").arg(&csv_path).assert().success();

    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "{not json")?;
    cmd(&config_dir)
        .arg("load")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));

    cmd(&config_dir)
        .arg("monitor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zestaw A"));
    Ok(())
}

#[test]
fn test_set_updates_status_and_notes() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let (config_dir, _) = setup(tmp.path())?;
    let csv_path = write_sample(tmp.path())?;
    cmd(&config_dir).arg("import").arg(&csv_path).assert().success();

    cmd(&config_dir)
        .args(["set", "2", "--status", "stopped", "--notes", "wyczerpany budżet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated record 2"));

    cmd(&config_dir)
        .arg("monitor")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Aktywne kreacje:   1/2")
                .and(predicate::str::contains("wyczerpany budżet")),
        );

    cmd(&config_dir)
        .args(["set", "2", "--status", "paused"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown status"));

    cmd(&config_dir)
        .args(["set", "99", "--notes", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record with id 99"));
    Ok(())
}

#[test]
fn test_funnel_view() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let (config_dir, _) = setup(tmp.path())?;
    let csv_path = write_sample(tmp.path())?;
    cmd(&config_dir).arg("import").arg(&csv_path).assert().success();

    cmd(&config_dir)
        .args(["funnel", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Wyświetlenia")
                .and(predicate::str::contains("8 000"))
                // reach 5000 / impressions 8000
                .and(predicate::str::contains("62,50%")),
        );
    Ok(())
}

#[test]
fn test_matrix_respects_policy_flags() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let (config_dir, _) = setup(tmp.path())?;

    cmd(&config_dir)
        .args(["matrix", "--max-cpc", "3", "--max-cost", "40", "--min-purchases", "8"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Minimum 8 zakupów")
                .and(predicate::str::contains("SKALUJ"))
                .and(predicate::str::contains("WYŁĄCZ")),
        );
    Ok(())
}

#[test]
fn test_demo_and_status() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let (config_dir, _) = setup(tmp.path())?;

    cmd(&config_dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("sample ad sets"));

    cmd(&config_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ad sets:    5"));
    Ok(())
}
