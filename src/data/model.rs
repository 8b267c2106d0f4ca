// ---------------------------------------------------------------------------
// ValidationRecord – one row of the trace file
// ---------------------------------------------------------------------------

/// A single validation sample: ground-truth value, lookup-table estimate,
/// and the relative error as reported by the producer of the trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationRecord {
    pub reference: f64,
    pub estimate: f64,
    /// Column 3 of the trace, taken as-is.  Never recomputed from the other
    /// two columns: the producer substitutes the absolute error when the
    /// reference is too close to zero for a quotient to mean anything.
    pub relative_error: f64,
}

impl ValidationRecord {
    /// Difference between ground truth and estimate.
    pub fn absolute_error(&self) -> f64 {
        self.reference - self.estimate
    }
}

// ---------------------------------------------------------------------------
// ValidationTable – the complete loaded trace
// ---------------------------------------------------------------------------

/// The full parsed trace.  Immutable once loaded; rows have no identity
/// beyond their order, which is also the shared x axis of the panels.
#[derive(Debug, Clone)]
pub struct ValidationTable {
    pub records: Vec<ValidationRecord>,
}

impl ValidationTable {
    pub fn from_records(records: Vec<ValidationRecord>) -> Self {
        ValidationTable { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column 1: ground-truth values.
    pub fn references(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.reference).collect()
    }

    /// Column 2: estimated values.
    pub fn estimates(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.estimate).collect()
    }

    /// Column 3, pass-through.
    pub fn relative_errors(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.relative_error).collect()
    }

    /// Derived series: `reference - estimate`, row by row.
    pub fn absolute_errors(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.absolute_error()).collect()
    }

    /// Summary magnitudes over the whole trace, for the top bar.
    pub fn stats(&self) -> ValidationStats {
        if self.records.is_empty() {
            return ValidationStats::default();
        }
        let n = self.records.len() as f64;
        let mut stats = ValidationStats::default();
        for r in &self.records {
            let abserr = r.absolute_error().abs();
            let relerr = r.relative_error.abs();
            stats.abserr_mean += abserr;
            stats.relerr_mean += relerr;
            stats.abserr_max = stats.abserr_max.max(abserr);
            stats.relerr_max = stats.relerr_max.max(relerr);
        }
        stats.abserr_mean /= n;
        stats.relerr_mean /= n;
        stats
    }
}

// ---------------------------------------------------------------------------
// ValidationStats – error magnitudes for the whole trace
// ---------------------------------------------------------------------------

/// Mean and worst-case error magnitudes of a loaded trace.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ValidationStats {
    pub abserr_mean: f64,
    pub abserr_max: f64,
    pub relerr_mean: f64,
    pub relerr_max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ValidationTable {
        ValidationTable::from_records(vec![
            ValidationRecord {
                reference: 1.0,
                estimate: 0.75,
                relative_error: 0.25,
            },
            ValidationRecord {
                reference: -2.0,
                estimate: -2.5,
                relative_error: -0.25,
            },
            ValidationRecord {
                reference: 0.5,
                estimate: 0.5,
                relative_error: 0.0,
            },
        ])
    }

    #[test]
    fn absolute_error_is_reference_minus_estimate() {
        let t = table();
        let refs = t.references();
        let estims = t.estimates();
        for (i, abserr) in t.absolute_errors().iter().enumerate() {
            assert_eq!(*abserr, refs[i] - estims[i], "row {i}");
        }
    }

    #[test]
    fn relative_errors_pass_through_unchanged() {
        let t = table();
        assert_eq!(t.relative_errors(), vec![0.25, -0.25, 0.0]);
    }

    #[test]
    fn stats_over_known_trace() {
        let s = table().stats();
        // |abs errors| = 0.25, 0.5, 0.0; |rel errors| = 0.25, 0.25, 0.0
        assert_eq!(s.abserr_max, 0.5);
        assert_eq!(s.relerr_max, 0.25);
        assert!((s.abserr_mean - 0.25).abs() < 1e-15);
        assert!((s.relerr_mean - 0.5 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn empty_table_has_zero_stats() {
        let t = ValidationTable::from_records(Vec::new());
        assert!(t.is_empty());
        assert_eq!(t.stats(), ValidationStats::default());
    }
}
