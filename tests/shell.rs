use assert_cmd::Command;
use predicates::prelude::*;

fn simsh() -> Command {
    let mut cmd = Command::cargo_bin("simsh").expect("binary builds");
    cmd.arg("--norc").arg("--quiet");
    cmd
}

#[test]
fn end_of_input_exits_with_zero() {
    simsh()
        .write_stdin("echo hello world\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world\n"));
}

#[test]
fn exit_with_code_sets_status() {
    simsh()
        .write_stdin("exit 3\necho unreachable\n")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("unreachable").not());
}

#[test]
fn plain_exit_is_success() {
    simsh()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn non_numeric_exit_code_is_zero() {
    simsh().write_stdin("exit later\n").assert().success();
}

#[test]
fn unknown_command_is_reported_and_loop_continues() {
    simsh()
        .write_stdin("simsh-no-such-tool arg\necho after\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "shell: simsh-no-such-tool: command not found",
        ))
        .stdout(predicate::str::contains("after"));
}

#[test]
fn exported_variables_reach_children() {
    simsh()
        .write_stdin(concat!(
            "export SIMSH_IT_VAR=42\n",
            "sh -c \"echo child:$SIMSH_IT_VAR\"\n",
            "unset SIMSH_IT_VAR\n",
            "sh -c \"echo gone:$SIMSH_IT_VAR\"\n",
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("child:42"))
        .stdout(predicate::str::contains("gone:\n"));
}

#[test]
fn signal_termination_is_reported() {
    simsh()
        .write_stdin("sh -c \"kill -TERM $$\"\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Process terminated by signal 15"));
}

#[test]
fn cd_updates_pwd() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().canonicalize().expect("canonical");
    simsh()
        .write_stdin(format!("cd {}\npwd\n", target.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}\n", target.display())));
}

#[test]
fn bare_cd_uses_home() {
    let home = tempfile::tempdir().expect("tempdir");
    let target = home.path().canonicalize().expect("canonical");
    simsh()
        .env("HOME", &target)
        .write_stdin("cd\npwd\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}\n", target.display())));
}

#[test]
fn history_lists_entered_lines() {
    simsh()
        .write_stdin("echo a\necho a\necho b\nhistory\nhistory 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 echo a\n2 echo b\n3 history\n"))
        .stdout(predicate::str::contains("4 history 1\n"))
        .stdout(predicate::str::contains("1 echo a\n2 echo a").not());
}

#[test]
fn startup_file_is_sourced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rc = dir.path().join("rc");
    std::fs::write(&rc, "export SIMSH_RC_IT=fromrc\n").expect("write rc");

    Command::cargo_bin("simsh")
        .expect("binary builds")
        .arg("--quiet")
        .arg("--config")
        .arg(&rc)
        .write_stdin("sh -c \"echo rc:$SIMSH_RC_IT\"\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("rc:fromrc"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("simsh")
        .expect("binary builds")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("simsh "));
}

#[test]
fn banner_unless_quiet() {
    Command::cargo_bin("simsh")
        .expect("binary builds")
        .arg("--norc")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type 'help' for commands"));
}
