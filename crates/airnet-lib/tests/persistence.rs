mod common;

use airnet_lib::{load_network, save_network, ErrorKind, Network, Router};
use rusqlite::Connection;
use tempfile::tempdir;

use common::{airport, hub_network};

#[test]
fn new_database_loads_empty_network() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("nested").join("airnet.db");
    let network = load_network(&path).expect("empty store loads");
    assert!(network.is_empty());
    assert_eq!(network.flight_count(), 0);
    assert!(path.exists());
}

#[test]
fn saved_network_round_trips() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("airnet.db");
    let original = hub_network();
    save_network(&path, &original).expect("save succeeds");

    let loaded = load_network(&path).expect("load succeeds");
    assert_eq!(
        loaded.airports().collect::<Vec<_>>(),
        original.airports().collect::<Vec<_>>()
    );
    assert_eq!(loaded.flights(), original.flights());

    let route = Router::new(&loaded).route("HUB", "WST").unwrap();
    let expected = Router::new(&original).route("HUB", "WST").unwrap();
    assert_eq!(route, expected);
}

#[test]
fn saving_replaces_previous_contents() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("airnet.db");
    let mut network = hub_network();
    save_network(&path, &network).unwrap();

    network.remove_airport("NTH").unwrap();
    save_network(&path, &network).unwrap();

    let loaded = load_network(&path).unwrap();
    assert!(!loaded.contains_airport("NTH"));
    assert_eq!(loaded.flight_count(), 4);
}

#[test]
fn duplicate_rows_are_rejected_on_load() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("legacy.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE airports (id TEXT, x REAL, y REAL, class TEXT);
        INSERT INTO airports (id, x, y, class) VALUES
            ('AAA', 0, 0, 'M'),
            ('AAA', 1, 1, 'S');
        "#,
    )
    .unwrap();
    drop(conn);

    let err = load_network(&path).expect_err("duplicate ids fail");
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
}

#[test]
fn invalid_rows_fail_validation() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("bad.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE airports (id TEXT, x REAL, y REAL, class TEXT);
        INSERT INTO airports (id, x, y, class) VALUES ('TOOLONG', 0, 0, 'M');
        "#,
    )
    .unwrap();
    drop(conn);

    let err = load_network(&path).expect_err("bad id fails");
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn dangling_flights_are_reported_as_corrupt() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("dangling.db");
    let mut network = Network::new();
    network.add_airport(airport("AAA", 0.0, 0.0, "M")).unwrap();
    save_network(&path, &network).unwrap();

    let conn = Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO flights (origin, destination, aircraft) VALUES ('AAA', 'ZZZ', 'L')",
        [],
    )
    .unwrap();
    drop(conn);

    let err = load_network(&path).expect_err("dangling flight fails");
    assert_eq!(err.kind(), ErrorKind::Storage);
    assert!(err.to_string().contains("ZZZ"));
}
