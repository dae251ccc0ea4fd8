//! Command language tests: parsing, dispatch and rendered output.

use std::io::Cursor;

use log::LevelFilter;

use social_graph::cli::commands::{
    execute, write_config, write_info, Command, CommandRunner, RunSummary,
};
use social_graph::cli::{logger_builder, OutputFormat};
use social_graph::config::NetworkConfig;
use social_graph::engine::{NetworkStats, QueryEngine};
use social_graph::format::NetworkReader;
use social_graph::graph::SocialGraph;
use social_graph::types::SocialError;

// ==================== Helper ====================

fn network() -> SocialGraph {
    let users = "\
U1,Alice,30,UK,0.5
U2,Bob,25,US,0.8
U3,Carol,41,UK,0.3
U4,Dave,19,BR,0.9
U5,Eve,52,US,0.125
";
    let friendships = "U1,U2\nU1,U3\nU2,U4\n";
    NetworkReader::read_from(Cursor::new(users), Cursor::new(friendships)).unwrap()
}

fn run_text(graph: &SocialGraph, input: &str) -> (String, RunSummary) {
    let mut runner = CommandRunner::new(graph, QueryEngine::new(), OutputFormat::Text, Vec::new());
    let summary = runner.run_all(Cursor::new(input)).unwrap();
    (String::from_utf8(runner.into_inner()).unwrap(), summary)
}

// ==================== Parsing ====================

#[test]
fn test_parse_commands() {
    assert_eq!(
        Command::parse("ViewProfile U1"),
        Command::ViewProfile { id: "U1".into() }
    );
    assert_eq!(
        Command::parse("  FindSeparation   U1\tU4  "),
        Command::FindSeparation {
            a: "U1".into(),
            b: "U4".into()
        }
    );
    assert_eq!(
        Command::parse("TotalUsers UK US"),
        Command::TotalUsers {
            countries: vec!["UK".into(), "US".into()]
        }
    );
    assert_eq!(
        Command::parse("TotalUsers"),
        Command::TotalUsers { countries: vec![] }
    );
    assert_eq!(
        Command::parse("viewprofile U1"),
        Command::Unrecognised {
            keyword: "viewprofile".into()
        }
    );
}

#[test]
fn test_parse_missing_arguments_are_empty() {
    assert_eq!(
        Command::parse("ListMutuals U1"),
        Command::ListMutuals {
            a: "U1".into(),
            b: String::new()
        }
    );
    assert_eq!(
        Command::parse("SuggestFriends"),
        Command::SuggestFriends { id: String::new() }
    );
}

// ==================== Text Output ====================

#[test]
fn test_view_profile_output() {
    let graph = network();
    let (out, _) = run_text(&graph, "ViewProfile U1\n");
    assert_eq!(
        out,
        "ViewProfile U1\nName: Alice\nAge: 30\nCountry: United Kingdom\n\
         Activity Rate: 50%\nFriends: 2\n\n"
    );
}

#[test]
fn test_list_friends_output() {
    let graph = network();
    let (out, _) = run_text(&graph, "ListFriends U2\n");

    let mut lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "ListFriends U2");
    assert_eq!(lines[1], "2 friend(s) found.");
    assert_eq!(lines.pop(), Some(""));
    let mut entries = lines[2..].to_vec();
    entries.sort_unstable();
    assert_eq!(entries, vec!["Alice [ID:U1]", "Dave [ID:U4]"]);
}

#[test]
fn test_list_mutuals_output() {
    let graph = network();
    let (out, _) = run_text(&graph, "ListMutuals U1 U4\n");
    assert_eq!(out, "ListMutuals U1 U4\n1 mutual friend(s) found.\nBob [ID:U2]\n\n");
}

#[test]
fn test_find_separation_output() {
    let graph = network();
    let script = "FindSeparation U3 U4\nFindSeparation U1 U1\nFindSeparation U1 U5\n";
    let (out, _) = run_text(&graph, script);
    assert_eq!(
        out,
        "FindSeparation U3 U4\nSeparation between U3 and U4 is 3.\n\n\
         FindSeparation U1 U1\nSeparation between U1 and U1 is 0.\n\n\
         FindSeparation U1 U5\nNo connection found.\n\n"
    );
}

#[test]
fn test_suggest_friends_output() {
    let graph = network();
    let (out, _) = run_text(&graph, "SuggestFriends U1\n");
    assert_eq!(
        out,
        "SuggestFriends U1\n1 suggestion(s) found.\nDave [ID:U4], 1 mutual friend(s)\n\n"
    );
}

#[test]
fn test_friend_score_output() {
    let graph = network();
    let (out, _) = run_text(&graph, "FriendScore U1 U4\nFriendScore U1 U1\nFriendScore U1 U5\n");
    assert_eq!(
        out,
        "FriendScore U1 U4\nFriend Score: 360.450\n\n\
         FriendScore U1 U1\nFriend Score: 720.500\n\n\
         FriendScore U1 U5\nFriend Score: 120.000\n\n"
    );
}

#[test]
fn test_total_users_output() {
    let graph = network();
    let (out, _) = run_text(&graph, "TotalUsers\nTotalUsers US\nTotalUsers UK BR\n");
    assert_eq!(
        out,
        "TotalUsers\nTotal Users: 5\n\n\
         TotalUsers US\nTotal Users: 2\n\n\
         TotalUsers UK BR\nTotal Users: 3\n\n"
    );
}

#[test]
fn test_errors_do_not_stop_the_run() {
    let graph = network();
    let input = "ViewProfile NOPE\nDance U1\nListMutuals U1\n\nTotalUsers JP\n";
    let (out, summary) = run_text(&graph, input);
    assert_eq!(
        out,
        "ViewProfile NOPE\nError: User not found.\n\n\
         Dance U1\nError: Unrecognised command.\n\n\
         ListMutuals U1\nError: User not found.\n\n\
         TotalUsers JP\nTotal Users: 0\n\n"
    );
    assert_eq!(
        summary,
        RunSummary {
            processed: 4,
            failed: 3
        }
    );
}

#[test]
fn test_command_errors_are_recoverable() {
    let graph = network();
    let engine = QueryEngine::new();
    for line in ["ViewProfile NOPE", "Dance U1", "FriendScore U1"] {
        let err = execute(&engine, &graph, &Command::parse(line)).unwrap_err();
        assert!(err.is_recoverable(), "{}: {}", line, err);
    }

    let io = SocialError::Io(std::io::Error::new(std::io::ErrorKind::Other, "closed"));
    assert!(!io.is_recoverable());
    assert!(!SocialError::Config("bad".to_string()).is_recoverable());
}

// ==================== JSON Output ====================

#[test]
fn test_json_output() {
    let graph = network();
    let mut runner = CommandRunner::new(&graph, QueryEngine::new(), OutputFormat::Json, Vec::new());
    runner.run_line("FindSeparation U1 U4").unwrap();
    runner.run_line("ViewProfile ghost").unwrap();
    runner.run_line("FriendScore U1 U4").unwrap();
    let out = String::from_utf8(runner.into_inner()).unwrap();

    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);

    assert_eq!(lines[0]["command"], "FindSeparation U1 U4");
    assert_eq!(lines[0]["success"], true);
    assert_eq!(lines[0]["data"]["type"], "separation");
    assert_eq!(lines[0]["data"]["separation"]["kind"], "degrees");
    assert_eq!(lines[0]["data"]["separation"]["degrees"], 2);

    assert_eq!(lines[1]["success"], false);
    assert_eq!(lines[1]["error"]["code"], "user_not_found");
    assert!(lines[1].get("data").is_none());

    assert_eq!(lines[2]["data"]["type"], "friend_score");
    assert_eq!(lines[2]["data"]["mutual_count"], 1);
    let score = lines[2]["data"]["score"].as_f64().unwrap();
    assert!((score - 360.45).abs() < 1e-9);
}

// ==================== Info ====================

#[test]
fn test_network_stats() {
    let graph = network();
    let stats = NetworkStats::collect(&graph);
    assert_eq!(stats.users, 5);
    assert_eq!(stats.friendships, 3);
    assert_eq!(stats.max_friends, 2);
    assert_eq!(stats.isolated, 1);
    assert_eq!(stats.components, 2);
    assert_eq!(stats.largest_component, 4);
    assert_eq!(stats.countries.get("US"), Some(&2));
    assert!((stats.avg_friends - 1.2).abs() < 1e-9);

    let mut out = Vec::new();
    write_info(&mut out, &stats, OutputFormat::Text).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("  Users: 5\n"));
    assert!(text.contains("  Connected components: 2\n"));
    assert!(text.contains("    BR: 1\n"));
}

// ==================== Config and Logging ====================

#[test]
fn test_write_config_round_trips() {
    let config = NetworkConfig {
        output_format: "json".to_string(),
        ..NetworkConfig::default()
    };

    let mut out = Vec::new();
    write_config(&mut out, &config, OutputFormat::Text).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("output_format = \"json\""));
    assert!(text.contains("[countries]"));

    let reparsed = NetworkConfig::from_toml_str(&text).unwrap();
    assert_eq!(reparsed.output_format, "json");
    assert_eq!(reparsed.countries, config.countries);

    let mut out = Vec::new();
    write_config(&mut out, &config, OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["countries"]["JP"], "Japan");
}

#[test]
fn test_logger_level_selection() {
    let level = |verbose, env: Option<&str>| logger_builder(verbose, "warn", env).build().filter();

    assert_eq!(level(false, None), LevelFilter::Warn);
    assert_eq!(level(false, Some("error")), LevelFilter::Error);
    assert_eq!(level(true, None), LevelFilter::Debug);
    assert_eq!(level(true, Some("error")), LevelFilter::Debug);
}
