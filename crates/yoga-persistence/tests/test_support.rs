#![allow(dead_code)]

use tempfile::TempDir;
use yoga_persistence::{build_pool, PoolProvider};

/// Base SQLite descartable: el directorio vive lo mismo que el valor.
pub struct TestDb {
    pub provider: PoolProvider,
    _dir: TempDir,
}

pub fn fresh_db() -> TestDb {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("yoga-test.db");
    let pool = build_pool(path.to_str().expect("utf8 path"), 2, 5000).expect("pool");
    TestDb { provider: PoolProvider::new(pool),
             _dir: dir }
}
