//! Write a demo validation trace for the `lut-validate` viewer.
//!
//! Builds a small linearly-interpolated sine table and sweeps it against
//! the exact function at a fraction of the table step, including a margin
//! beyond both table bounds where the table clamps and the error grows.
//! Each output row is `reference estimate relative_error`.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

const OUTPUT: &str = "lt_vf.txt";

/// sin(x) sampled on [0, 2π] with this many entries.
const TABLE_SIZE: usize = 64;

/// Queries per table step, so the sweep hits the interpolation mid-points.
const STEP_DIV: usize = 4;

/// Fraction of the domain swept beyond each table bound.
const OUTBOUND_MARGIN: f64 = 0.1;

fn main() -> Result<()> {
    env_logger::init();

    let table = SineTable::new(TABLE_SIZE);
    let margin = (table.xmax - table.xmin) * OUTBOUND_MARGIN;
    let query_step = table.step / STEP_DIV as f64;

    let file = File::create(OUTPUT).with_context(|| format!("creating {OUTPUT}"))?;
    let mut out = BufWriter::new(file);

    let mut rows = 0usize;
    let mut x = table.xmin - margin;
    while x <= table.xmax + margin {
        let reference = x.sin();
        let estimate = table.evaluate(x);
        let err = reference - estimate;
        // Near-zero references get the absolute error instead of a quotient.
        let relative_error = if reference.abs() < 2.0 * f64::EPSILON {
            err
        } else {
            err / reference
        };
        writeln!(out, "{reference} {estimate} {relative_error}")
            .with_context(|| format!("writing {OUTPUT}"))?;
        rows += 1;
        x += query_step;
    }

    out.flush().with_context(|| format!("flushing {OUTPUT}"))?;
    log::info!("wrote {rows} rows to {OUTPUT}");
    Ok(())
}

// ---------------------------------------------------------------------------
// SineTable – the estimate under validation
// ---------------------------------------------------------------------------

struct SineTable {
    xmin: f64,
    xmax: f64,
    step: f64,
    values: Vec<f64>,
}

impl SineTable {
    fn new(size: usize) -> Self {
        let xmin = 0.0;
        let xmax = std::f64::consts::TAU;
        let step = (xmax - xmin) / (size - 1) as f64;
        let values = (0..size).map(|i| (xmin + i as f64 * step).sin()).collect();
        SineTable {
            xmin,
            xmax,
            step,
            values,
        }
    }

    /// Clamped linear interpolation between the stored samples.
    fn evaluate(&self, x: f64) -> f64 {
        let last = self.values.len() - 1;
        let pos = ((x - self.xmin) / self.step).clamp(0.0, last as f64);
        let i = pos.floor() as usize;
        if i >= last {
            return self.values[last];
        }
        let frac = pos - i as f64;
        self.values[i] + frac * (self.values[i + 1] - self.values[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_exact_at_nodes_and_clamps_outside() {
        let table = SineTable::new(TABLE_SIZE);
        for i in [0, 1, TABLE_SIZE / 2, TABLE_SIZE - 1] {
            let x = table.xmin + i as f64 * table.step;
            assert!(
                (table.evaluate(x) - x.sin()).abs() < 1e-12,
                "node {i} not exact"
            );
        }
        assert_eq!(table.evaluate(table.xmin - 1.0), table.values[0]);
        assert_eq!(
            table.evaluate(table.xmax + 1.0),
            table.values[TABLE_SIZE - 1]
        );
    }

    #[test]
    fn interpolation_error_is_small_inside_the_table() {
        let table = SineTable::new(TABLE_SIZE);
        let mid = table.xmin + 10.5 * table.step;
        // A 64-entry sine table is good to a few 1e-3 between nodes.
        assert!((table.evaluate(mid) - mid.sin()).abs() < 5e-3);
    }
}
