use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("disk count {disks} is out of range (expected 1 to {max})")]
    InvalidDiskCount { disks: u32, max: u32 },

    #[error("internal consistency error: {message}")]
    InternalConsistency { message: String },
}

pub type Result<T> = std::result::Result<T, SolverError>;
