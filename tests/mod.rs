//! Test suite for the Pokédex server
//!
//! This module organizes all tests
