use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

const ALICE_FPR: &str = "FE99FA61B6E73BD747C418B62F0CCAE7892B31EA";
const BOB_FPR: &str = "048BB80C5FB6B68C4550CF47C21F2E4A99B367F5";

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

/// Run keyprofile isolated from the user's config, colors and log settings.
fn keyprofile(home: &assert_fs::TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("keyprofile");
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("KEYPROFILE_CONFIG");
    cmd
}

// ─── Text output ────────────────────────────────────────────────

#[test]
fn inspect_rsa_key_without_sub_keys() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .args(["inspect", &fixture("alice_rsa2048.asc")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("alice@example.com"))
        .stdout(predicate::str::contains(ALICE_FPR))
        .stdout(predicate::str::contains("RSA (2048 bits)"))
        .stdout(predicate::str::contains("2F0CCAE7892B31EA"))
        .stdout(predicate::str::contains("Expires: Never"))
        .stdout(predicate::str::contains("Revoked: No"))
        .stdout(predicate::str::contains("Curve:").not())
        .stdout(predicate::str::contains("Sub-keys").not())
        .stdout(predicate::str::contains("Identity Claims").not());
}

#[test]
fn inspect_curve_key_with_sub_keys() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .args(["inspect", &fixture("bob_ed25519.asc")])
        .assert()
        .success()
        .stdout(predicate::str::contains(BOB_FPR))
        .stdout(predicate::str::contains("Key Type: EdDSA (Legacy)"))
        .stdout(predicate::str::contains("Curve: Ed25519 (Legacy)"))
        .stdout(predicate::str::contains("Other User IDs"))
        .stdout(predicate::str::contains("bob-at-work"))
        .stdout(predicate::str::contains("Sub-keys (2)"))
        .stdout(predicate::str::contains("ID: 1EB2963F2E3AFCF7, Usage: Signing"))
        .stdout(predicate::str::contains(
            "ID: ADA7F169E05530E8, Usage: Encryption (Communications), Encryption (Storage)",
        ))
        .stdout(predicate::str::contains("Curve25519 (Legacy)"));
}

#[test]
fn inspect_shows_identity_claims() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .args(["inspect", &fixture("bob_ed25519.asc")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Identity Claims"))
        .stdout(predicate::str::contains("https://fosstodon.org/@bob"))
        .stdout(predicate::str::contains("https://twitter.com/bob"))
        .stdout(predicate::str::contains("unrelated@example.com").not());
}

#[test]
fn inspect_headline_is_first_stored_user_id() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .args(["inspect", &fixture("zed_storage_order.asc")])
        .assert()
        .success()
        .stdout(predicate::str::contains("🔑 Zed"))
        .stdout(predicate::str::is_match(r"(?s)Other User IDs.*Alice <alice@example\.com>").unwrap())
        .stdout(predicate::str::is_match(r"(?s)3F8A58B087DB6C3D.*E242941E428E7AD0.*E03F947D67F495DA").unwrap());
}

#[test]
fn inspect_expired_key() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .args(["inspect", &fixture("carol_expired.asc")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Key Type: ECDSA"))
        .stdout(predicate::str::contains("Curve: P-256"))
        .stdout(predicate::str::contains("Created: 1 January 2020"))
        .stdout(predicate::str::contains("Expires: 1 June 2020 (expired)"))
        .stdout(predicate::str::contains("Revoked: No"));
}

#[test]
fn inspect_revoked_key() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .args(["inspect", &fixture("dave_revoked.asc")])
        .assert()
        .success()
        .stdout(predicate::str::contains("3CC22842C6D0A363EBB86F24A5C7858D8AABB57B"))
        .stdout(predicate::str::contains("RSA (3072 bits)"))
        .stdout(predicate::str::contains("Revoked: Yes"))
        .stdout(predicate::str::contains("Expires: Never"));
}

#[test]
fn inspect_secret_key_shows_public_profile() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .args(["inspect", &fixture("alice_secret.asc")])
        .assert()
        .success()
        .stdout(predicate::str::contains(ALICE_FPR))
        .stderr(predicate::str::contains("secret key material"));
}

// ─── Input handling ─────────────────────────────────────────────

#[test]
fn inspect_reads_stdin() {
    let home = assert_fs::TempDir::new().unwrap();
    let armored = std::fs::read_to_string(fixture("alice_rsa2048.asc")).unwrap();

    keyprofile(&home)
        .arg("inspect")
        .write_stdin(armored.clone())
        .assert()
        .success()
        .stdout(predicate::str::contains(ALICE_FPR));

    keyprofile(&home)
        .args(["inspect", "-"])
        .write_stdin(armored)
        .assert()
        .success()
        .stdout(predicate::str::contains(ALICE_FPR));
}

#[test]
fn inspect_truncated_key_fails() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .args(["inspect", &fixture("truncated.asc")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("✗ Error: The supplied text is not a valid OpenPGP public key"))
        .stdout(predicate::str::contains("Fingerprint").not());
}

#[test]
fn inspect_garbage_fails_with_same_message() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .arg("inspect")
        .write_stdin("hello, this is not a key\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid OpenPGP public key"));
}

#[test]
fn verbose_logs_rejection_reason() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .args(["--verbose", "inspect", &fixture("truncated.asc")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key rejected"));
}

#[test]
fn inspect_empty_input_fails() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .arg("inspect")
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No key text supplied"));
}

#[test]
fn inspect_missing_file_fails() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .args(["inspect", "no-such-key.asc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

// ─── JSON and config ────────────────────────────────────────────

#[test]
fn inspect_json_uses_profile_field_names() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .args(["--json", "inspect", &fixture("alice_rsa2048.asc")])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"userIDs\""))
        .stdout(predicate::str::contains("\"technicalDetails\""))
        .stdout(predicate::str::contains("\"keyID\": \"2F0CCAE7892B31EA\""))
        .stdout(predicate::str::contains("\"keyType\": \"RSA (2048 bits)\""))
        .stdout(predicate::str::contains("\"isRevoked\": false"))
        .stdout(predicate::str::contains("\"expiryDate\": null"))
        .stdout(predicate::str::contains(format!("\"fingerprint\": \"{ALICE_FPR}\"")));
}

#[test]
fn config_date_format_is_applied() {
    let home = assert_fs::TempDir::new().unwrap();
    let config = home.child("custom.toml");
    config
        .write_str("[display]\ndate_format = \"%Y-%m-%d\"\ncolor = false\n")
        .unwrap();

    keyprofile(&home)
        .args(["--config", config.path().to_str().unwrap()])
        .args(["inspect", &fixture("carol_expired.asc")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expires: 2020-06-01"));
}

#[test]
fn missing_config_file_fails() {
    let home = assert_fs::TempDir::new().unwrap();

    keyprofile(&home)
        .args(["--config", "/nonexistent/keyprofile.toml"])
        .args(["inspect", &fixture("alice_rsa2048.asc")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn invalid_config_file_fails() {
    let home = assert_fs::TempDir::new().unwrap();
    home.child("keyprofile/config.toml")
        .write_str("[log]\nlevel = \"chatty\"\n")
        .unwrap();

    keyprofile(&home)
        .args(["inspect", &fixture("alice_rsa2048.asc")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level"));
}
