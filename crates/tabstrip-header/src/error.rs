//! Header error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("Header cell's group has been released")]
    GroupReleased,
}
