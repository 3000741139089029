//! Integration test modules

mod properties_file_tests;
