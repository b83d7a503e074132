//! Performance benchmarks for the Leave Entitlement Engine.
//!
//! This benchmark suite tracks the cost of a full entitlement calculation:
//! - Single maternity calculation with statutory pay only
//! - Single maternity calculation with a Burgundy Book top-up
//! - Rates table selection followed by a calculation
//! - Batches of 100 and 1000 calculations
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use leave_entitlement_engine::config::ConfigLoader;
use leave_entitlement_engine::models::CalculatorInputs;
use leave_entitlement_engine::{calculate_entitlements, calculate_entitlements_with_table};

/// Creates a maternity case for a maintained-school teacher.
fn create_inputs(salary: u32, la_service_years: u32) -> CalculatorInputs {
    CalculatorInputs {
        role: "teacher".to_string(),
        school_type: "maintained".to_string(),
        service_years: "2".to_string(),
        service_months: "0".to_string(),
        la_service_years: la_service_years.to_string(),
        la_service_months: "0".to_string(),
        annual_salary: salary.to_string(),
        is_pay_annualised: "yes".to_string(),
        leave_type: "maternity".to_string(),
        ewc_date: "2026-06-10".to_string(),
        actual_leave_start_date: Some("2026-06-07".to_string()),
        returning_to_work: "yes".to_string(),
        ..CalculatorInputs::default()
    }
}

/// Creates a mixed batch cycling through every leave type.
fn create_batch(count: usize) -> Vec<CalculatorInputs> {
    let leave_types = ["maternity", "adoption", "paternity", "spl"];
    (0..count)
        .map(|i| {
            let mut inputs = create_inputs(18_000 + (i as u32 % 40) * 1_000, (i % 3) as u32);
            inputs.leave_type = leave_types[i % leave_types.len()].to_string();
            inputs.spl_mother_weeks_taken = "12".to_string();
            inputs.spl_partner_weeks = "20".to_string();
            inputs
        })
        .collect()
}

/// Benchmark: Single calculation, statutory pay only.
fn bench_single_statutory(c: &mut Criterion) {
    let inputs = create_inputs(31_284, 0);

    c.bench_function("single_statutory", |b| {
        b.iter(|| black_box(calculate_entitlements(black_box(&inputs)).unwrap()))
    });
}

/// Benchmark: Single calculation with Burgundy Book occupational pay.
fn bench_single_burgundy(c: &mut Criterion) {
    let inputs = create_inputs(31_284, 3);

    c.bench_function("single_burgundy", |b| {
        b.iter(|| black_box(calculate_entitlements(black_box(&inputs)).unwrap()))
    });
}

/// Benchmark: Rates lookup from the loaded table, then a calculation.
fn bench_with_rates_table(c: &mut Criterion) {
    let loader = ConfigLoader::load("./config/uk_statutory").expect("Failed to load config");
    let inputs = create_inputs(31_284, 3);

    c.bench_function("with_rates_table", |b| {
        b.iter(|| {
            black_box(calculate_entitlements_with_table(black_box(&inputs), loader.table()).unwrap())
        })
    });
}

/// Benchmark: Batches of mixed calculations.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for count in [100usize, 1000].iter() {
        let batch = create_batch(*count);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("calculations", count), &batch, |b, batch| {
            b.iter(|| {
                for inputs in batch {
                    black_box(calculate_entitlements(inputs).unwrap());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_statutory,
    bench_single_burgundy,
    bench_with_rates_table,
    bench_batch,
);
criterion_main!(benches);
