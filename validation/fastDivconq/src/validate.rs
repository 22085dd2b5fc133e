use fastDivconq::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationCase {
    name: String,
    #[serde(default)]
    notes: String,
    operation: Operation,
    #[serde(default)]
    dtype: Dtype,
    #[serde(default)]
    params: Params,
    input: Value,
    expected: Expected,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
enum Operation {
    Sort,
    PrefixSum,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
enum Dtype {
    #[default]
    I64,
    U8,
    F64,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct Params {
    workers: Option<usize>,
    threshold: Option<usize>,
    sort_kernel: Option<String>,
    merge_strategy: Option<String>,
    parallel: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
enum Expected {
    /// Exact output values.
    Values(Value),
    /// Substring of the error message.
    Error(String),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let case_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("cases"));

    let mut paths: Vec<PathBuf> = fs::read_dir(&case_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut failures = 0;
    let mut total = 0;
    for path in &paths {
        let cases: Vec<ValidationCase> = serde_json::from_reader(fs::File::open(path)?)?;
        for case in cases {
            total += 1;
            match check_case(&case) {
                Ok(()) => println!("PASS {}", case.name),
                Err(reason) => {
                    failures += 1;
                    println!("FAIL {}: {}", case.name, reason);
                }
            }
        }
    }

    println!();
    println!("{} of {} cases passed", total - failures, total);

    if failures > 0 {
        return Err(format!("{failures} validation case(s) failed").into());
    }
    Ok(())
}

fn check_case(case: &ValidationCase) -> Result<(), String> {
    debug!(name = %case.name, notes = %case.notes, "checking case");
    match case.dtype {
        Dtype::I64 => check_typed::<i64>(case),
        Dtype::U8 => check_typed::<u8>(case),
        Dtype::F64 => check_typed::<f64>(case),
    }
}

fn check_typed<T>(case: &ValidationCase) -> Result<(), String>
where
    T: Accumulate + DeserializeOwned,
{
    let input: Vec<T> =
        serde_json::from_value(case.input.clone()).map_err(|e| format!("bad input: {e}"))?;
    let outcome = run_case(case, &input);

    match (&case.expected, outcome) {
        (Expected::Values(expected), Ok(values)) => {
            let expected: Vec<T> = serde_json::from_value(expected.clone())
                .map_err(|e| format!("bad expected values: {e}"))?;
            if values == expected {
                Ok(())
            } else {
                Err(format!("expected {expected:?}, got {values:?}"))
            }
        }
        (Expected::Values(_), Err(err)) => Err(format!("unexpected error: {err}")),
        (Expected::Error(fragment), Err(err)) => {
            let message = err.to_string();
            if message.contains(fragment.as_str()) {
                Ok(())
            } else {
                Err(format!("expected error containing {fragment:?}, got {message:?}"))
            }
        }
        (Expected::Error(fragment), Ok(values)) => Err(format!(
            "expected error containing {fragment:?}, got {values:?}"
        )),
    }
}

fn run_case<T>(case: &ValidationCase, input: &[T]) -> Result<Vec<T>, DivconqError>
where
    T: Accumulate,
{
    let params = &case.params;

    let mut builder = Divconq::<T>::new();
    if let Some(workers) = params.workers {
        builder = builder.workers(workers);
    }
    if let Some(threshold) = params.threshold {
        builder = builder.threshold(threshold);
    }
    if let Some(kernel) = params.sort_kernel.as_deref() {
        builder = builder.sort_kernel(match kernel {
            "quicksort" => QuickSort,
            _ => MergeSort,
        });
    }
    if let Some(strategy) = params.merge_strategy.as_deref() {
        builder = builder.merge_strategy(match strategy {
            "linear_scan" => LinearScan,
            "heap" => Heap,
            other => {
                if other != "auto" {
                    warn!(strategy = other, "unknown merge strategy, using auto");
                }
                Auto
            }
        });
    }
    if let Some(parallel) = params.parallel {
        builder = builder.parallel(parallel);
    }

    match case.operation {
        Operation::Sort => builder.adapter(Sort).build()?.sort(input),
        Operation::PrefixSum => builder.adapter(PrefixSum).build()?.scan(input),
    }
}
