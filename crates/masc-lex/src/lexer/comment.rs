//! Comment handling.
//!
//! MASClang has no comment syntax, so there is nothing to skip here beyond
//! the whitespace
//! `core::skip_whitespace` already handles. This module exists, empty, as
//! the hook a future comment syntax would extend, keeping comment-skipping
//! isolated from the rest of dispatch.
