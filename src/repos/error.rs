/**
 * Responsibility
 * - What the repo tells the layers above when an operation fails
 */
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("item {id} not found")]
    NotFound { id: u64 },
}
