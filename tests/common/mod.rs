use assert_cmd::Command;
use std::path::Path;

pub fn journo_cmd(db: &Path) -> Command {
    let mut cmd = bare_cmd();
    cmd.arg("--db").arg(db);
    cmd
}

pub fn bare_cmd() -> Command {
    let mut cmd = Command::cargo_bin("journo").unwrap();
    cmd.env_remove("JOURNO_DB");
    cmd.env_remove("RUST_LOG");
    cmd
}
