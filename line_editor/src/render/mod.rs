// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod csi_sequence;
pub mod cursor_geometry;
pub mod decorator;
pub mod renderer;

// Re-export.
pub use csi_sequence::*;
pub use cursor_geometry::*;
pub use decorator::*;
pub use renderer::*;
