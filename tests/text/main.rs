//! Integration tests for Layer 1: Text
//!
//! Tests for markup highlighting and token descriptions working together.

mod describe;
mod highlight;
