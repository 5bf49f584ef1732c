//! Repository Layer
//!
//! On-disk persistence for host state.

mod position_repo;

pub use position_repo::PositionRepository;
