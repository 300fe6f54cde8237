//! Tabular export of point sets through polars.
//!
//! Columns: `x`, then `y`/`z` as the dimension requires, then `w`.

use anyhow::{Context, Result};
use polars::prelude::*;
use quadpts::PointSet;
use std::fs::File;
use std::path::Path;

pub fn to_frame(set: &PointSet) -> PolarsResult<DataFrame> {
    let axis = |k: usize| -> Vec<f64> { set.iter().map(|p| p.x()[k]).collect() };
    let w: Vec<f64> = set.iter().map(|p| p.w()).collect();
    match set.ndim() {
        1 => df!("x" => axis(0), "w" => w),
        2 => df!("x" => axis(0), "y" => axis(1), "w" => w),
        _ => df!("x" => axis(0), "y" => axis(1), "z" => axis(2), "w" => w),
    }
}

/// Write as parquet for `*.parquet`, CSV otherwise.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match out.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file).finish(df)?;
        }
        _ => {
            CsvWriter::new(file).include_header(true).finish(df)?;
        }
    }
    Ok(())
}

/// `(rows, Σ w)` of an exported CSV.
pub fn summarize_csv(input: &Path) -> Result<(usize, f64)> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", input.display()))?;
    let wsum = df.column("w")?.f64()?.sum().unwrap_or(0.0);
    Ok((df.height(), wsum))
}
