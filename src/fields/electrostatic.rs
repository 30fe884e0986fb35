use crate::charges::Charge;
use crate::constants::{COULOMB_K, SOFTENING_EPSILON};
use crate::errors::SandboxError;
use crate::math::{R2, Scalar};

/// Coupling constant and softening used by the point-charge kernels.
///
/// The softening term ε is added to r² before the inverse-cube is taken, so
/// a sample landing exactly on a charge sees a finite field instead of a
/// division by zero.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SofteningModel {
    /// Coupling constant _k_.
    pub k: Scalar,
    /// Softening ε, strictly positive.
    pub epsilon: Scalar,
}

impl Default for SofteningModel {
    fn default() -> Self {
        Self {
            k: COULOMB_K,
            epsilon: SOFTENING_EPSILON,
        }
    }
}

impl SofteningModel {
    /// Returns a copy with a different softening term.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: Scalar) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns a copy with a different coupling constant.
    #[must_use]
    pub fn with_k(mut self, k: Scalar) -> Self {
        self.k = k;
        self
    }

    /// Checks that `k` is finite and ε is finite and positive.
    pub fn validate(&self) -> Result<(), SandboxError> {
        if !self.k.is_finite() {
            return Err(SandboxError::InvalidConfig(format!(
                "coupling constant must be finite, got {}",
                self.k
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SandboxError::InvalidConfig(format!(
                "softening must be finite and positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

/// Electric field E at `point` due to discrete point charges, softened by ε.
///
/// Each charge contributes `k q d / (|d|² + ε)^{3/2}` with `d = point - position`.
/// Returns the zero vector for an empty charge set.
#[must_use]
pub fn electric_field_at(point: R2, charges: &[Charge], model: &SofteningModel) -> R2 {
    let mut e = R2::zeros();
    for c in charges {
        let d = point - c.position;
        let r2 = d.norm_squared() + model.epsilon;
        let r = r2.sqrt();
        let factor = model.k * c.q / (r2 * r);
        e += d * factor;
    }
    e
}

/// Electric potential φ at `point`, consistent with the softened field kernel.
#[must_use]
pub fn potential_at(point: R2, charges: &[Charge], model: &SofteningModel) -> Scalar {
    charges
        .iter()
        .map(|c| {
            let r2 = (point - c.position).norm_squared() + model.epsilon;
            model.k * c.q / r2.sqrt()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::charges::ChargeStore;

    fn store_with(charges: &[(Scalar, Scalar, Scalar)]) -> ChargeStore {
        let mut store = ChargeStore::new();
        for &(q, x, y) in charges {
            store.add(q, x, y).unwrap();
        }
        store
    }

    #[test]
    fn empty_set_gives_zero_field() {
        let e = electric_field_at(R2::new(3.0, -1.0), &[], &SofteningModel::default());
        assert_eq!(e, R2::zeros());
    }

    #[test]
    fn positive_charge_points_away() {
        let store = store_with(&[(1.0, 0.0, 0.0)]);
        let e = electric_field_at(R2::new(1.0, 0.0), store.list(), &SofteningModel::default());
        assert!(e.x > 0.0);
        assert_abs_diff_eq!(e.y, 0.0, epsilon = 1.0e-12);
        // 1 / 1.2^{3/2}
        assert_relative_eq!(e.x, 1.0 / 1.2_f64.powf(1.5), max_relative = 1.0e-12);
    }

    #[test]
    fn negative_charge_points_toward() {
        let store = store_with(&[(-1.0, 0.0, 0.0)]);
        let e = electric_field_at(R2::new(1.0, 0.0), store.list(), &SofteningModel::default());
        assert!(e.x < 0.0);
        assert_abs_diff_eq!(e.y, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn dipole_midpoint_points_from_positive_to_negative() {
        let store = store_with(&[(1.0, -2.0, 0.0), (-1.0, 2.0, 0.0)]);
        let e = electric_field_at(R2::zeros(), store.list(), &SofteningModel::default());
        assert!(e.x > 0.0);
        assert_abs_diff_eq!(e.y, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn dipole_reversed_points_negative_x() {
        let store = store_with(&[(1.0, 2.0, 0.0), (-1.0, -2.0, 0.0)]);
        let e = electric_field_at(R2::zeros(), store.list(), &SofteningModel::default());
        assert!(e.x < 0.0);
        assert_abs_diff_eq!(e.y, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn sample_on_top_of_charge_is_finite_and_zero() {
        let store = store_with(&[(5.0, 1.0, 1.0)]);
        let e = electric_field_at(R2::new(1.0, 1.0), store.list(), &SofteningModel::default());
        assert_eq!(e, R2::zeros());
    }

    #[test]
    fn zero_charge_contributes_nothing() {
        let store = store_with(&[(0.0, 0.5, 0.5)]);
        let e = electric_field_at(R2::new(1.0, 0.0), store.list(), &SofteningModel::default());
        assert_eq!(e, R2::zeros());
    }

    #[test]
    fn potential_of_single_charge_matches_softened_reference() {
        let store = store_with(&[(2.0, 0.0, 0.0)]);
        let phi = potential_at(R2::new(0.0, 1.0), store.list(), &SofteningModel::default());
        assert_relative_eq!(phi, 2.0 / 1.2_f64.sqrt(), max_relative = 1.0e-12);
    }

    #[test]
    fn validate_rejects_non_positive_softening() {
        assert!(SofteningModel::default().validate().is_ok());
        assert!(SofteningModel::default().with_epsilon(0.0).validate().is_err());
        assert!(SofteningModel::default().with_epsilon(f64::NAN).validate().is_err());
        assert!(SofteningModel::default().with_k(f64::INFINITY).validate().is_err());
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        fn coord() -> impl Strategy<Value = Scalar> {
            -6.0_f64..6.0
        }

        fn charge_triple() -> impl Strategy<Value = (Scalar, Scalar, Scalar)> {
            (-5.0_f64..5.0, coord(), coord())
        }

        proptest! {
            #[test]
            fn field_is_finite_everywhere(
                charges in prop::collection::vec(charge_triple(), 0..8),
                px in coord(),
                py in coord(),
            ) {
                let store = store_with(&charges);
                let e = electric_field_at(R2::new(px, py), store.list(), &SofteningModel::default());
                prop_assert!(e.x.is_finite() && e.y.is_finite());
            }

            #[test]
            fn field_is_invariant_under_reversal(
                charges in prop::collection::vec(charge_triple(), 0..8),
                px in coord(),
                py in coord(),
            ) {
                let model = SofteningModel::default();
                let p = R2::new(px, py);
                let forward = store_with(&charges);
                let mut reversed_input = charges.clone();
                reversed_input.reverse();
                let reversed = store_with(&reversed_input);
                let a = electric_field_at(p, forward.list(), &model);
                let b = electric_field_at(p, reversed.list(), &model);
                prop_assert!((a - b).norm() <= 1.0e-9 * (1.0 + a.norm()));
            }

            #[test]
            fn superposition_is_linear(
                c1 in charge_triple(),
                c2 in charge_triple(),
                px in coord(),
                py in coord(),
            ) {
                let model = SofteningModel::default();
                let p = R2::new(px, py);
                let both = electric_field_at(p, store_with(&[c1, c2]).list(), &model);
                let sum = electric_field_at(p, store_with(&[c1]).list(), &model)
                    + electric_field_at(p, store_with(&[c2]).list(), &model);
                prop_assert!((both - sum).norm() <= 1.0e-9 * (1.0 + both.norm()));
            }

            #[test]
            fn negating_charges_negates_field(
                charges in prop::collection::vec(charge_triple(), 1..6),
                px in coord(),
                py in coord(),
            ) {
                let model = SofteningModel::default();
                let p = R2::new(px, py);
                let negated: Vec<_> = charges.iter().map(|&(q, x, y)| (-q, x, y)).collect();
                let a = electric_field_at(p, store_with(&charges).list(), &model);
                let b = electric_field_at(p, store_with(&negated).list(), &model);
                prop_assert!((a + b).norm() <= 1.0e-12 * (1.0 + a.norm()));
            }
        }
    }
}
