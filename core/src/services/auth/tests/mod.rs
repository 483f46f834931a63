//! Auth service test suite and its shared mocks
