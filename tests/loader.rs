//! Record file loading and configuration tests.

use std::io::{Cursor, Write};

use social_graph::config::{load_config, CountryTable, NetworkConfig};
use social_graph::format::NetworkReader;
use social_graph::types::SocialError;
use tempfile::NamedTempFile;

const USERS: &str = "\
U1,Alice Smith,30,UK,0.5
U2,Bob Jones,25,US,0.8
U3,Carol White,41,UK,0.3
U4,Dave Brown,19,FR,0.9
";

const FRIENDSHIPS: &str = "\
U1,U2
U1,U3
U2,U4
U2,U1
U4,U99
U3,U3
";

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ==================== Reader Tests ====================

#[test]
fn test_read_from_files() {
    let users = temp_file(USERS);
    let friendships = temp_file(FRIENDSHIPS);

    let graph = NetworkReader::read_from_files(users.path(), friendships.path()).unwrap();
    assert_eq!(graph.user_count(), 4);
    // Duplicate, unknown-id and self records are dropped.
    assert_eq!(graph.friendship_count(), 3);

    let alice = graph.lookup("U1").unwrap();
    assert_eq!(alice.name, "Alice Smith");
    assert_eq!(alice.age, 30);
    assert_eq!(alice.country_code, "UK");
    assert!((alice.activity_rate - 0.5).abs() < f64::EPSILON);

    let u3 = graph.handle("U3").unwrap();
    assert!(!graph.neighbors(u3).contains(&u3));
}

#[test]
fn test_read_missing_file_is_io_error() {
    let users = temp_file(USERS);
    let missing = users.path().with_extension("does-not-exist");
    match NetworkReader::read_from_files(users.path(), &missing) {
        Err(SocialError::Io(_)) => {}
        other => panic!("Expected Io error, got {:?}", other.map(|g| g.user_count())),
    }
}

#[test]
fn test_crlf_and_blank_lines() {
    let users = "U1,Alice,30,UK,0.5\r\n\r\nU2,Bob,25,US,0.8\r\n";
    let friendships = "U1,U2\r\n\n";
    let graph = NetworkReader::read_from(Cursor::new(users), Cursor::new(friendships)).unwrap();

    assert_eq!(graph.user_count(), 2);
    assert_eq!(graph.friendship_count(), 1);
    assert!((graph.lookup("U2").unwrap().activity_rate - 0.8).abs() < f64::EPSILON);
}

#[test]
fn test_extra_user_fields_ignored() {
    let users = "U1,Alice,30,UK,0.5,extra,fields\n";
    let users = NetworkReader::read_users(Cursor::new(users), "users").unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].country_code, "UK");
}

#[test]
fn test_malformed_age_fails_load() {
    let users = "U1,Alice,30,UK,0.5\nU2,Bob,old,US,0.8\n";
    match NetworkReader::read_users(Cursor::new(users), "users.txt") {
        Err(SocialError::MalformedRecord { file, line, reason }) => {
            assert_eq!(file, "users.txt");
            assert_eq!(line, 2);
            assert!(reason.contains("age"), "reason: {}", reason);
        }
        other => panic!("Expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_negative_age_loads() {
    let users = "A,Al,-3,UK,0.5\nB,Bo,40,US,0.2\n";
    let graph = NetworkReader::read_from(Cursor::new(users), Cursor::new("A,B\n")).unwrap();

    assert_eq!(graph.user_count(), 2);
    let al = graph.lookup("A").unwrap();
    assert_eq!(al.age, -3);
    assert_eq!(graph.friendship_count(), 1);
}

#[test]
fn test_malformed_activity_rate_fails_load() {
    let users = "U1,Alice,30,UK,lots\n";
    match NetworkReader::read_users(Cursor::new(users), "users") {
        Err(SocialError::MalformedRecord { line, reason, .. }) => {
            assert_eq!(line, 1);
            assert!(reason.contains("activity rate"), "reason: {}", reason);
        }
        other => panic!("Expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_short_user_record_fails_load() {
    let users = "U1,Alice,30\n";
    assert!(matches!(
        NetworkReader::read_users(Cursor::new(users), "users"),
        Err(SocialError::MalformedRecord { .. })
    ));
}

#[test]
fn test_friendship_missing_second_id_dropped() {
    let users = "U1,Alice,30,UK,0.5\n";
    let friendships = "U1\n";
    let records = NetworkReader::read_friendships(Cursor::new(friendships)).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].b, "");

    let graph = NetworkReader::read_from(Cursor::new(users), Cursor::new(friendships)).unwrap();
    assert_eq!(graph.friendship_count(), 0);
}

// ==================== Config Tests ====================

#[test]
fn test_default_country_table() {
    let table = CountryTable::default();
    assert_eq!(table.len(), 7);
    assert_eq!(table.resolve("UK"), "United Kingdom");
    assert_eq!(table.resolve("US"), "United States");
    assert_eq!(table.resolve("FR"), "France");
    assert_eq!(table.resolve("DE"), "Germany");
    assert_eq!(table.resolve("IN"), "India");
    assert_eq!(table.resolve("CN"), "China");
    assert_eq!(table.resolve("JP"), "Japan");
    assert_eq!(table.resolve("BR"), "BR");
    assert_eq!(table.resolve("uk"), "uk");
}

#[test]
fn test_config_defaults_when_empty() {
    let config = NetworkConfig::from_toml_str("").unwrap();
    assert_eq!(config.output_format, "text");
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.country_table(), CountryTable::default());
}

#[test]
fn test_config_overrides_countries() {
    let config = NetworkConfig::from_toml_str(
        r#"
output_format = "json"

[countries]
BR = "Brazil"
UK = "Britain"
"#,
    )
    .unwrap();

    assert_eq!(config.output_format, "json");
    let table = config.country_table();
    assert_eq!(table.len(), 2);
    assert_eq!(table.resolve("BR"), "Brazil");
    assert_eq!(table.resolve("UK"), "Britain");
    assert_eq!(table.resolve("US"), "US");
}

#[test]
fn test_config_invalid_toml() {
    assert!(matches!(
        NetworkConfig::from_toml_str("output_format = ["),
        Err(SocialError::Config(_))
    ));
}

#[test]
fn test_load_config_from_file() {
    let original = NetworkConfig {
        log_level: "debug".to_string(),
        ..NetworkConfig::default()
    };
    let file = temp_file(&original.to_toml_string().unwrap());

    let loaded = load_config(file.path()).unwrap();
    assert_eq!(loaded.log_level, "debug");
    assert_eq!(loaded.countries, original.countries);
}
