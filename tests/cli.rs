use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("cesarcrypt").unwrap()
}

#[test]
fn prompts_before_reading() {
    cmd()
        .write_stdin("hola\n")
        .assert()
        .success()
        .stdout(contains("Ingresa el texto a cifrar: "));
}

#[test]
fn encrypts_and_decrypts_line() {
    cmd()
        .write_stdin("hola\n")
        .assert()
        .success()
        .stdout(contains("Texto cifrado: mtpf"))
        .stdout(contains("Texto descifrado: hola"));
}

#[test]
fn lowercases_input_before_encrypting() {
    cmd()
        .write_stdin("España\n")
        .assert()
        .success()
        .stdout(contains("Texto cifrado: jxufsf"))
        .stdout(contains("Texto descifrado: españa"));
}

#[test]
fn mixed_content_passes_through() {
    cmd()
        .write_stdin("Hola, Mundo! 123\n")
        .assert()
        .success()
        .stdout(contains("Texto cifrado: mtpf, qzrit! 123"))
        .stdout(contains("Texto descifrado: hola, mundo! 123"));
}

#[test]
fn eof_is_treated_as_empty_input() {
    cmd()
        .assert()
        .success()
        .stdout(contains("Texto cifrado: "))
        .stdout(contains("Texto descifrado: "));
}

#[test]
fn empty_line_round_trips() {
    cmd()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Texto cifrado: \n"))
        .stdout(contains("Texto descifrado: \n"));
}
