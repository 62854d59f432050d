use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "3", "--games", "4", "--x", "medium", "--o", "hard"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 4);
    assert_eq!(v["x"], "medium");
    assert_eq!(v["o"], "hard");
    let total = v["x_wins"].as_u64().unwrap() + v["o_wins"].as_u64().unwrap() + v["draws"].as_u64().unwrap();
    assert_eq!(total, 4);
    // minimax never loses the 3x3 game to the heuristic
    assert_eq!(v["x_wins"], 0);
}

#[test]
fn sim_rejects_invalid_configuration() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--size", "4", "--win", "5"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
