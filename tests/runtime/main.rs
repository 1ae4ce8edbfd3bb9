//! Integration tests for Layer 2: Runtime
//!
//! Tests for the session loop driving a hub over scripted input.

mod session;
