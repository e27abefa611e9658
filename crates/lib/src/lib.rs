//! xtcinstall-lib: core logic for bootstrapping an XTC development checkout
//!
//! This crate provides the pieces the `xtcinstall` binary composes:
//! - `execute`: running external commands with live output, one or many in order
//! - `repo`: reconciling a local checkout with its remote (clone, update, ignore, abort)
//! - `patch`: idempotent rewrites of shell profiles, firewall rules and package manifests
//! - `dispatch`: OS-specific build setup and firewall handling
//! - `install`: the per-target install flows

pub mod consts;
pub mod dispatch;
pub mod execute;
pub mod install;
pub mod patch;
pub mod platform;
pub mod repo;
#[cfg(test)]
mod util;
pub mod workdir;
