// SPDX-License-Identifier: MPL-2.0

//! Horizontal menu bar widget for COSMIC applications.

pub mod config;
pub mod widgets;
