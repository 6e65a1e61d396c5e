// search-validator Test Infrastructure
//
// Every test drives the validator through the scripted in-memory backend in
// `helpers`; nothing here talks to a live search endpoint.

// ============================================================================
// TEST HELPERS - Scripted search client, temp directories, fixtures
// ============================================================================
pub mod helpers;


// ============================================================================
// SEARCH CALL TESTS - Parameters in, normalized items out
// ============================================================================
pub mod query_builder_tests;

pub mod matcher_tests;
