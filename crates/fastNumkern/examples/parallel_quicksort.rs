//! Serial vs task-parallel quicksort on a generated double vector.
//!
//! Reproduces the suite's standard flow: generate a seeded input, persist
//! it, time the kernel, persist the sorted output, and read it back.
//!
//! Run with:
//!
//! ```bash
//! cargo run --release --example parallel_quicksort
//! ```

use std::env;
use std::time::Instant;

use fastNumkern::prelude::*;
use numkern::datastore;

fn main() -> Result<(), KernelError> {
    let len = 1_000_000;
    let input = datastore::generate_double_vector(len, 0.0, 1000.0, 42);

    let dir = env::temp_dir();
    let input_path = dir.join("quicksort_input.txt");
    let output_path = dir.join("quicksort_output.txt");
    datastore::save_double_vector(&input, &input_path)?;

    let mut serial = datastore::load_double_vector(&input_path, len)?;
    let start = Instant::now();
    quicksort(&mut serial);
    let serial_elapsed = start.elapsed();
    println!("serial   quicksort: {len} doubles in {serial_elapsed:?}");

    let kernels = Kernels::new()?;
    let mut parallel = input;
    let start = Instant::now();
    kernels.quicksort(&mut parallel);
    let parallel_elapsed = start.elapsed();
    println!(
        "parallel quicksort: {len} doubles in {parallel_elapsed:?} \
         ({} workers, depth budget {})",
        kernels.workers(),
        kernels.depth_budget()
    );

    assert_eq!(serial, parallel);
    datastore::save_double_vector(&parallel, &output_path)?;

    println!(
        "outputs identical, saved to {}; speedup {:.2}x",
        output_path.display(),
        serial_elapsed.as_secs_f64() / parallel_elapsed.as_secs_f64()
    );
    Ok(())
}
