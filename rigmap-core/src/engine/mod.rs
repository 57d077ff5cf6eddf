//! Bone Mapping Engine
//!
//! This module contains the bone correspondence functionality:
//!
//! - `mapping`: Shared result types (BoneMapping, BoneMatch, Bone)
//! - `convention`: Known-convention recognition policy
//! - `auto_mapper`: Fuzzy mapper for arbitrary rig conventions
//! - `direct_mapper`: Exact table lookup for a known convention
//! - `retarget`: Direct-then-fuzzy composition
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Retargeter                               │
//! │  ┌──────────────────────┐        ┌──────────────────────────┐   │
//! │  │ DirectMapper         │  miss  │ AutoMapper               │   │
//! │  │ signature + table    │ ─────▶ │ normalize + similarity   │   │
//! │  └──────────────────────┘        └──────────────────────────┘   │
//! │                           │                                     │
//! │                    ┌──────┴──────┐                              │
//! │                    │ BoneMapping │                              │
//! │                    │ target→src  │                              │
//! │                    └─────────────┘                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod auto_mapper;
pub mod convention;
pub mod direct_mapper;
pub mod mapping;
pub mod retarget;

// Re-export main types
pub use auto_mapper::{auto_map, AutoMapper, DEFAULT_ACCEPTANCE_THRESHOLD};
pub use convention::{RecognitionPolicy, SkeletonConvention, MIXAMO_SIGNATURE};
pub use direct_mapper::{direct_map, is_target_convention, BoneTable, DirectMapper, MIXAMO_BONE_TABLE};
pub use mapping::{Bone, BoneMapping, BoneMatch, MatchOrigin};
pub use retarget::{MappingReport, MappingStrategy, Retargeter};
