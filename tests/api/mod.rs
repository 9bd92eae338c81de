//! REST API endpoint tests.

mod health_tests;
mod loans_tests;
