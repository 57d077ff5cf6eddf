//! rigmap core - bone-name matching for skeletal animation retargeting
//!
//! Maps the bones of a target rig onto the bones of a source rig by name so
//! animation authored for one skeleton can drive another:
//!
//! - **Fast path**: exact table lookup when the target follows a known
//!   convention (Mixamo)
//! - **Fuzzy path**: normalized-name similarity with a 0.6 acceptance floor
//!   for everything else
//! - **Total**: unmatched target bones are left out of the mapping, never an error
//!
//! Everything here is pure computation over borrowed name lists, so mappers
//! can be shared across threads freely.

#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::unnecessary_to_owned)]

pub mod config;
pub mod engine;
pub mod error;
pub mod nlp;

pub use config::MapperConfig;
pub use engine::{
    auto_map, direct_map, is_target_convention, AutoMapper, Bone, BoneMapping, BoneMatch,
    DirectMapper, MappingReport, MappingStrategy, Retargeter,
};
pub use error::{Result, RigmapError};
