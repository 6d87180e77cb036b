//! Serial vs data-parallel matrix multiplication on generated operands.
//!
//! Reproduces the suite's standard flow: generate seeded operands, persist
//! them, time the kernel, and persist the product matrix.
//!
//! Run with:
//!
//! ```bash
//! cargo run --release --example parallel_matmul
//! ```

use std::env;
use std::time::Instant;

use fastNumkern::prelude::*;
use numkern::datastore;

fn main() -> Result<(), KernelError> {
    let order = 512;
    let a = datastore::generate_double_matrix(order, 42)?;
    let b = datastore::generate_double_matrix(order, 43)?;

    let dir = env::temp_dir();
    datastore::save_double_matrix(&a, &dir.join("matmul_a.txt"))?;
    datastore::save_double_matrix(&b, &dir.join("matmul_b.txt"))?;

    let start = Instant::now();
    let serial = multiply(&a, &b)?;
    let serial_elapsed = start.elapsed();
    println!("serial   matmul: order {order} in {serial_elapsed:?}");

    let kernels = Kernels::new()?;
    let start = Instant::now();
    let parallel = kernels.multiply(&a, &b)?;
    let parallel_elapsed = start.elapsed();
    println!(
        "parallel matmul: order {order} in {parallel_elapsed:?} ({} workers)",
        kernels.workers()
    );

    // Fixed accumulation order makes the two results bit-identical.
    assert_eq!(serial, parallel);
    let output_path = dir.join("matmul_c.txt");
    datastore::save_double_matrix(&parallel, &output_path)?;
    assert_eq!(datastore::load_double_matrix(&output_path, order)?, parallel);

    println!(
        "outputs identical, saved to {}; speedup {:.2}x",
        output_path.display(),
        serial_elapsed.as_secs_f64() / parallel_elapsed.as_secs_f64()
    );
    Ok(())
}
