// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.

use std::path::PathBuf;

use crate::{Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first: Persistence = super::create_test_persistence();
    let mut second: Persistence = super::create_test_persistence();

    super::create_student(&mut first, "alice", "R001");

    assert!(first.username_exists("alice").unwrap());
    assert!(!second.username_exists("alice").unwrap());
}

#[test]
fn test_file_database_runs_migrations() {
    let path: PathBuf =
        std::env::temp_dir().join(format!("placement_portal_init_{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        assert!(!persistence.username_exists("nobody").unwrap());
    }

    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}
