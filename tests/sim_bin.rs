use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("42")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 42);
    assert_eq!(v["summary"]["game_over"], true);
    assert_eq!(v["summary"]["sunk_ships"], 10);
    assert_eq!(v["summary"]["status"], "Game over!");
    let shots = v["summary"]["shots"].as_u64().unwrap();
    assert!((20..=100).contains(&shots));
}
