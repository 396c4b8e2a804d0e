//! Store abstraction over client records.
//!
//! Services depend on the reader/writer traits only; [`DieselRepository`] is
//! the SQLite-backed implementation and `mock::MockRepository` stands in for
//! it in tests.

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        client::{Client, NewClient, UpdateClient},
        types::ClientId,
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    /// Snapshot of every client in insertion order.
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update_client(&self, id: ClientId, updates: &UpdateClient) -> RepositoryResult<Client>;
    fn delete_client(&self, id: ClientId) -> RepositoryResult<()>;
}

/// Diesel-backed store sharing a SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
