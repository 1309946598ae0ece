use gridsync_core::prelude::Role;
use gridsync_link::LinkError;
use gridsync_messages::EncodeError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RouterError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error("{operation} is not available to a {role:?} router")]
    WrongRole {
        operation: &'static str,
        role: Role,
    },
}

pub type Result<T> = core::result::Result<T, RouterError>;
