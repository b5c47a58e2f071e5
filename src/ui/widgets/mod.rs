// SPDX-License-Identifier: MPL-2.0
pub mod comparison_frame;

pub use comparison_frame::ComparisonFrame;
