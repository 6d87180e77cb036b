//! Serial vs parallel counting sort on a generated integer vector.
//!
//! Reproduces the suite's standard flow: generate a seeded input, persist
//! it, time the kernel, persist the sorted output, and read it back.
//!
//! Run with:
//!
//! ```bash
//! cargo run --release --example parallel_countsort
//! ```

use std::env;
use std::time::Instant;

use fastNumkern::prelude::*;
use numkern::datastore;

fn main() -> Result<(), KernelError> {
    let len = 1_000_000;
    let input = datastore::generate_int_vector(len, 0, 100_000, 42);

    let dir = env::temp_dir();
    let input_path = dir.join("countsort_input.txt");
    let output_path = dir.join("countsort_output.txt");
    datastore::save_int_vector(&input, &input_path)?;

    let start = Instant::now();
    let serial = counting_sort(&input)?;
    let serial_elapsed = start.elapsed();
    println!("serial   counting sort: {len} keys in {serial_elapsed:?}");

    let kernels = Kernels::new()?;
    let start = Instant::now();
    let parallel = kernels.counting_sort(&input)?;
    let parallel_elapsed = start.elapsed();
    println!(
        "parallel counting sort: {len} keys in {parallel_elapsed:?} ({} workers)",
        kernels.workers()
    );

    assert_eq!(serial, parallel);
    datastore::save_int_vector(&parallel, &output_path)?;
    assert_eq!(datastore::load_int_vector(&output_path, len)?, parallel);

    println!(
        "outputs identical, saved to {}; speedup {:.2}x",
        output_path.display(),
        serial_elapsed.as_secs_f64() / parallel_elapsed.as_secs_f64()
    );
    Ok(())
}
