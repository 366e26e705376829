//! Unit and service tests for the social graph module.

mod domain_tests;
