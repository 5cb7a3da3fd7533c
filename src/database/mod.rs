//! This module acts as a central hub for all database-related logic.
//! It declares the specialized submodules so they can be accessed from
//! elsewhere in the application via their full path, e.g.,
//! `database::store::PgRecordStore`.

pub mod init;
pub mod records;
pub mod store;
