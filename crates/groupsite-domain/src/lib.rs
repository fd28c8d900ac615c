//! Domain types shared by the research group site crates
//!
//! This crate provides the data model the rest of the workspace passes around:
//! - PublicationRecord: one normalized bibliography entry
//! - TeamMember / TeamRoster: the group's people and their name variants
//! - GroupInfo: the group's name and introduction

pub mod group;
pub mod publication;
pub mod team;

pub use group::*;
pub use publication::*;
pub use team::*;
