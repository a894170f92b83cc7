// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image intake for the Showcase site admin.
//!
//! Decodes user-picked photos, shrinks them under the configured ceiling,
//! and returns inline `data:image/jpeg` references ready to embed in a
//! record. Each file is processed on the blocking pool; batches are joined.

pub mod compress;
pub mod intake;
pub mod source;

pub use compress::{compress, scaled_dimensions, Compressed, Pass, Shrink};
pub use intake::ImageIntake;
pub use source::ImageSource;
