//! Shared request state.

use crate::error::ServerError;
use inventory_core::db::{open_location, DbLocation};
use inventory_core::{
    InventoryDatasource, InventoryRepository, InventoryRepositoryImpl, SqliteInventoryDatasource,
};
use std::sync::Arc;

/// Repository handle shared by all requests.
pub type SharedRepository = Arc<dyn InventoryRepository>;

#[derive(Clone)]
pub struct AppState {
    pub repository: SharedRepository,
}

impl AppState {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    /// Wires `datasource` behind the default repository.
    pub fn with_datasource<D: InventoryDatasource + 'static>(datasource: D) -> Self {
        Self::new(Arc::new(InventoryRepositoryImpl::new(datasource)))
    }

    /// Opens (and migrates) the SQLite store at `location`.
    pub fn open(location: &DbLocation) -> Result<Self, ServerError> {
        let conn = open_location(location)?;
        let datasource = SqliteInventoryDatasource::try_new(conn)?;
        Ok(Self::with_datasource(datasource))
    }
}
