//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command using the built-in shop configuration
fn cli_cmd() -> Command {
    Command::cargo_bin("teeshop").expect("Failed to find teeshop binary")
}

/// Create a CLI command reading a config file written to a temp directory
fn cli_cmd_with_config(dir: &TempDir, json: &str) -> Command {
    let path = dir.path().join("shop.json");
    fs::write(&path, json).unwrap();
    let mut cmd = cli_cmd();
    cmd.arg("--config").arg(&path);
    cmd
}

// ============================================================================
// Catalog Command Tests
// ============================================================================

#[test]
fn test_catalog_lists_products_and_options() {
    cli_cmd()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Playeras Profe Joako"))
        .stdout(predicate::str::contains("classic-tee"))
        .stdout(predicate::str::contains("$450.00"))
        .stdout(predicate::str::contains("nombre-numero"))
        .stdout(predicate::str::contains("Envío express"));
}

// ============================================================================
// Cart Command Tests
// ============================================================================

#[test]
fn test_cart_empty() {
    cli_cmd()
        .arg("cart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tu carrito está vacío."));
}

#[test]
fn test_cart_merges_repeated_ids() {
    cli_cmd()
        .args(["cart", "classic-tee", "classic-tee", "sport-tee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Playera Clásica"))
        .stdout(predicate::str::contains("$500.00"))
        .stdout(predicate::str::contains("Total: $820.00 (3 artículos)"));
}

#[test]
fn test_cart_minus_and_remove() {
    cli_cmd()
        .args([
            "cart",
            "classic-tee",
            "classic-tee",
            "sport-tee",
            "--minus",
            "classic-tee",
            "--remove",
            "sport-tee",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $250.00 (1 artículo)"))
        .stdout(predicate::str::contains("Playera Deportiva").not());
}

#[test]
fn test_cart_decrement_to_empty() {
    cli_cmd()
        .args(["cart", "retro-tee", "--minus", "retro-tee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tu carrito está vacío."));
}

#[test]
fn test_cart_unknown_product_fails() {
    cli_cmd()
        .args(["cart", "no-such-tee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown product: no-such-tee"));
}

// ============================================================================
// Quote Command Tests
// ============================================================================

#[test]
fn test_quote_full_order() {
    cli_cmd()
        .args([
            "quote",
            "--name",
            "Ana",
            "--model",
            "Clásica",
            "--size",
            "M",
            "--color",
            "Negro",
            "--quantity",
            "2",
            "--extra",
            "nombre-numero",
            "--shipping",
            "Envío estándar",
            "--jersey-number",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cliente: Ana"))
        .stdout(predicate::str::contains("- Modelo: Clásica — $250.00 c/u × 2"))
        .stdout(predicate::str::contains("- Extras: Nombre y número"))
        .stdout(predicate::str::contains("- Personalización: Número: 10"))
        .stdout(predicate::str::contains("- Envío: Envío estándar — $99.00"))
        .stdout(predicate::str::contains("Total: $719.00"));
}

#[test]
fn test_quote_without_extras_or_shipping() {
    cli_cmd()
        .args(["quote", "--name", "Luis", "--model", "Retro", "--size", "G", "--color", "Rojo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Extras: Ninguno"))
        .stdout(predicate::str::contains("- Envío: N/A — $0.00"))
        .stdout(predicate::str::contains("Total: $380.00"));
}

#[test]
fn test_quote_zero_quantity_rejected() {
    cli_cmd()
        .args([
            "quote", "--name", "Ana", "--model", "Clásica", "--size", "M", "--color", "Negro",
            "--quantity", "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Completa nombre, modelo, talla, color y cantidad"));
}

#[test]
fn test_quote_blank_name_rejected() {
    cli_cmd()
        .args(["quote", "--name", "  ", "--model", "Clásica", "--size", "M", "--color", "Negro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Completa nombre"));
}

#[test]
fn test_quote_unknown_model() {
    cli_cmd()
        .args(["quote", "--name", "Ana", "--model", "Polo", "--size", "M", "--color", "Negro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown model: Polo"));
}

// ============================================================================
// Link / Gradient Command Tests
// ============================================================================

#[test]
fn test_link_during_business_hours() {
    cli_cmd()
        .args(["link", "--hour", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WhatsApp — ¡Respondo ahora!"))
        .stdout(predicate::str::contains("https://wa.me/527221234567?text=Hola%2C%20vengo"));
}

#[test]
fn test_link_after_hours() {
    cli_cmd()
        .args(["link", "--hour", "22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fuera de horario"));
}

#[test]
fn test_link_rejects_bad_hour() {
    cli_cmd().args(["link", "--hour", "24"]).assert().failure();
}

#[test]
fn test_gradient_at_center() {
    cli_cmd()
        .args(["gradient", "640", "400", "--width", "1280", "--height", "800"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "linear-gradient(0deg, hsl(219.0 30.0% 21.0%) 0%, hsl(229.0 28.0% 72.5%) 100%)",
        ));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_dump_is_loadable() {
    let dir = TempDir::new().unwrap();
    let output = cli_cmd().arg("config").output().unwrap();
    assert!(output.status.success());
    let json = String::from_utf8(output.stdout).unwrap();

    cli_cmd_with_config(&dir, &json)
        .args(["cart", "league-jersey"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $450.00 (1 artículo)"));
}

#[test]
fn test_custom_config_changes_phone() {
    let dir = TempDir::new().unwrap();
    cli_cmd_with_config(&dir, r#"{ "contact": { "phone": "+52 55 1234 0000" } }"#)
        .args(["link", "--hour", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://wa.me/525512340000?text="));
}

#[test]
fn test_custom_catalog_prices() {
    let dir = TempDir::new().unwrap();
    let json = r#"{
        "catalog": [ { "id": "promo", "name": "Playera Promo", "price": "199.90" } ]
    }"#;
    cli_cmd_with_config(&dir, json)
        .args(["cart", "promo", "promo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $399.80 (2 artículos)"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    cli_cmd_with_config(&dir, "{ not json")
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
