//! Operating system abstraction layer
//!
//! Platform-specific entropy sources selected at compile time. Each
//! submodule exposes the same `sys_random` function, so the CSPRNG stays
//! fully portable.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
