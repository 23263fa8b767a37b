// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors surfaced while constructing a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlError {
    /// No layer was supplied for the thumbnail viewport.
    MissingLayer,
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLayer => write!(f, "a layer must be set"),
        }
    }
}

impl core::error::Error for ControlError {}
