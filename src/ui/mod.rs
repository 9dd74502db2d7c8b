// SPDX-License-Identifier: MPL-2.0
//! Rendering layer: widgets, styles, and the asset catalog.
//!
//! Everything under this module reads the navigator's derived presentation
//! and draws it; no navigation decisions are made here.

pub mod assets;
pub mod controls;
pub mod design_tokens;
pub mod placard;
pub mod styles;
pub mod theming;
