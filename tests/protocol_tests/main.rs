//! Protocol test suite
//!
//! Request parsing and response codec tests, grouped per area.

mod request_tests;
