/*! Integration tests for Catena.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - container: Tests for Container, Key and Value, including serde support
 * - casing: Tests for the key tokenizer and the six casing conventions
 * - dispatch: Tests for depth-aware application of operations
 * - ops: Tests for the operation catalogue, organized by area
 * - chain: Tests for the stateful Chain facade and its depth handling
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("catena=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod chain;
mod container;
mod dispatch;
mod ops;
