//! Batch protocol end to end: input text in, stdout and stderr text out

use gamma::engine::{BatchRunner, Flow};
use gamma::types::GameConfig;

fn run(input: &str) -> (String, String, Flow) {
    let mut runner = BatchRunner::new(Vec::new(), Vec::new());
    let flow = runner.run(input.as_bytes()).unwrap();
    let (out, err) = runner.into_writers();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
        flow,
    )
}

#[test]
fn test_golden_game_through_the_protocol() {
    let input = "\
# reference game
B 10 10 2 3
m 1 0 0
b 1
b 2
f 1
m 2 3 1
f 1
f 2
m 1 0 2
m 1 0 9
m 1 5 5
f 1
m 1 0 1
m 1 5 5
m 1 6 6
m 2 2 1
m 2 1 1
m 2 0 1
m 2 6 6
b 1
f 1
b 2
f 2
p
";
    let (out, err, flow) = run(input);
    assert_eq!(flow, Flow::Continue);
    assert_eq!(err, "");

    let expected = "\
OK 2
1
1
0
99
1
98
98
1
1
0
6
1
1
0
1
1
0
1
5
9
4
91
1.........
..........
..........
......2...
.....1....
..........
..........
1.........
1222......
1.........
";
    assert_eq!(out, expected);
}

#[test]
fn test_errors_report_their_line_and_do_not_stop_the_run() {
    let input = "\
B 3 3 2 1
m 1 1 1
m 1 1
x 1
m 3 0 0
m 1 3 0
b 0
f 9

p
";
    let (out, err, _) = run(input);
    assert_eq!(err, "ERROR 3\nERROR 4\n");
    // Invalid players and coordinates are game-level answers, not errors.
    assert_eq!(out, "OK 1\n1\n0\n0\n0\n0\n...\n.1.\n...\n");
}

#[test]
fn test_argument_out_of_u32_range() {
    let (out, err, _) = run("B 2 2 1 1\nm 1 4294967296 0\nm 1 4294967295 0\n");
    assert_eq!(out, "OK 1\n0\n");
    assert_eq!(err, "ERROR 2\n");
}

#[test]
fn test_interactive_line_hands_over_config() {
    let (out, err, flow) = run("\n# comment\nI 20 10 4 2\nm 1 0 0\n");
    assert_eq!((out.as_str(), err.as_str()), ("", ""));
    assert_eq!(flow, Flow::Interactive(GameConfig::new(20, 10, 4, 2)));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = GameConfig::new(20, 10, 4, 2);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"width":20,"height":10,"players":4,"areas":2}"#);
    let back: GameConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
    assert!(back.validate().is_ok());
}
