use serde::Serialize;

use crate::error::{Result, StayError};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub kurtaxe_cost: Vec<f64>,
    pub stay_cost: Vec<f64>,
    pub total_kurtaxe_cost: f64,
    pub total_stay_cost: f64,
}

impl CostBreakdown {
    pub fn combined_total(&self) -> f64 {
        self.total_stay_cost + self.total_kurtaxe_cost
    }
}

/// Split each cleaned total into its Kurtaxe share (`quantity * fee`) and the
/// remaining stay cost.
pub fn compute_costs(cleaned_totals: &[f64], kurtaxe_quantities: &[u64], fee: f64) -> Result<CostBreakdown> {
    if cleaned_totals.len() != kurtaxe_quantities.len() {
        return Err(StayError::Other(format!(
            "cost inputs differ in length: {} totals, {} quantities",
            cleaned_totals.len(),
            kurtaxe_quantities.len()
        )));
    }

    let mut out = CostBreakdown {
        kurtaxe_cost: Vec::with_capacity(cleaned_totals.len()),
        stay_cost: Vec::with_capacity(cleaned_totals.len()),
        ..CostBreakdown::default()
    };
    for (&total, &qty) in cleaned_totals.iter().zip(kurtaxe_quantities) {
        let kurtaxe = qty as f64 * fee;
        let stay = total - kurtaxe;
        out.total_kurtaxe_cost += kurtaxe;
        out.total_stay_cost += stay;
        out.kurtaxe_cost.push(kurtaxe);
        out.stay_cost.push(stay);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_split() {
        let c = compute_costs(&[1250.0], &[2], 3.2).unwrap();
        assert_eq!(c.kurtaxe_cost, vec![6.4]);
        assert!((c.stay_cost[0] - 1243.6).abs() < 1e-9);
    }

    #[test]
    fn test_parts_add_up_to_total() {
        let totals = [1250.0, 80.0, 0.0, 333.33];
        let qty = [2, 0, 5, 7];
        let c = compute_costs(&totals, &qty, 3.2).unwrap();
        for i in 0..totals.len() {
            assert!((c.stay_cost[i] + c.kurtaxe_cost[i] - totals[i]).abs() < 1e-9);
            assert_eq!(c.kurtaxe_cost[i], qty[i] as f64 * 3.2);
        }
        let sum: f64 = totals.iter().sum();
        assert!((c.combined_total() - sum).abs() < 1e-9);
    }

    #[test]
    fn test_no_kurtaxe_leaves_total_untouched() {
        let c = compute_costs(&[99.5], &[0], 3.2).unwrap();
        assert_eq!(c.kurtaxe_cost, vec![0.0]);
        assert_eq!(c.stay_cost, vec![99.5]);
        assert_eq!(c.total_kurtaxe_cost, 0.0);
    }

    #[test]
    fn test_empty_input() {
        let c = compute_costs(&[], &[], 3.2).unwrap();
        assert!(c.stay_cost.is_empty());
        assert_eq!(c.combined_total(), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(compute_costs(&[1.0, 2.0], &[1], 3.2), Err(StayError::Other(_))));
    }
}
