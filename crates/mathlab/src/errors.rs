//! Error handling and exit codes.

use mathlab_core::constants::exit_codes;
use mathlab_core::GeometryError;
use mathlab_store::StoreError;
use mathlab_worker::WorkerError;

/// Exit code for an error returned by [`crate::app::run`].
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<GeometryError>() {
        return geometry_exit_code(e);
    }
    if let Some(e) = err.downcast_ref::<WorkerError>() {
        return worker_exit_code(e);
    }
    if let Some(e) = err.downcast_ref::<StoreError>() {
        return store_exit_code(e);
    }
    exit_codes::ERROR_GENERIC
}

fn geometry_exit_code(err: &GeometryError) -> i32 {
    match err {
        GeometryError::InvalidArgument(_) => exit_codes::ERROR_INVALID_ARGUMENT,
    }
}

fn worker_exit_code(err: &WorkerError) -> i32 {
    match err {
        WorkerError::Computation(e) => geometry_exit_code(e),
        WorkerError::Disconnected(_) | WorkerError::Spawn(_) => exit_codes::ERROR_GENERIC,
    }
}

fn store_exit_code(err: &StoreError) -> i32 {
    match err {
        StoreError::InvalidName(_)
        | StoreError::DuplicateUser(_)
        | StoreError::UnknownUser(_)
        | StoreError::UnknownTopic(_)
        | StoreError::NoActiveUser => exit_codes::ERROR_INVALID_ARGUMENT,
        StoreError::Io(_) | StoreError::Corrupt(_) | StoreError::InvalidKey(_) => {
            exit_codes::ERROR_CONFIG
        }
    }
}
