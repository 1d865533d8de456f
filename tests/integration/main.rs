//! Integration tests for Steam-Achievements

mod pipeline_tests;
