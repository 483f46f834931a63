//! Tests for todo management service
