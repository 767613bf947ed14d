//! Unit test modules.

mod dispatch_test;
