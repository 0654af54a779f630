//! Requirement satisfaction against the maturity index.

use std::collections::BTreeMap;

use specgate_model::{Maturity, Requirement};

/// Check one requirement against the maturity index.
///
/// Returns the verdict and, when unsatisfied, a human-readable reason.
/// A requirement whose target is absent from the index, or whose target
/// has no declared maturity, or which declares no `min_maturity`, is
/// satisfied: dangling references are reported by the consistency rule
/// instead, so the gap is never double-reported.
pub fn requirement_satisfied(
    requirement: &Requirement,
    maturities: &BTreeMap<String, Option<Maturity>>,
) -> (bool, Option<String>) {
    let Some(min) = requirement.min_maturity else {
        return (true, None);
    };
    let Some(Some(actual)) = maturities.get(requirement.target.as_str()) else {
        return (true, None);
    };

    if actual.rank() >= min.rank() {
        (true, None)
    } else {
        let reason = format!(
            "requires '{}' at '{}' (currently: '{}')",
            requirement.target, min, actual
        );
        (false, Some(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specgate_model::CrossRef;

    fn requirement(target: &str, min: Option<Maturity>) -> Requirement {
        Requirement {
            target: CrossRef::new(target),
            min_maturity: min,
            reason: None,
        }
    }

    #[test]
    fn test_rank_comparison() {
        let mut maturities = BTreeMap::new();
        maturities.insert("#/types/A".to_string(), Some(Maturity::Implemented));

        let (ok, _) = requirement_satisfied(
            &requirement("#/types/A", Some(Maturity::Implemented)),
            &maturities,
        );
        assert!(ok);

        let (ok, reason) = requirement_satisfied(
            &requirement("#/types/A", Some(Maturity::Tested)),
            &maturities,
        );
        assert!(!ok);
        assert_eq!(
            reason.unwrap(),
            "requires '#/types/A' at 'tested' (currently: 'implemented')"
        );
    }

    #[test]
    fn test_missing_target_is_satisfied() {
        let maturities = BTreeMap::new();
        let (ok, reason) = requirement_satisfied(
            &requirement("#/types/Ghost", Some(Maturity::Tested)),
            &maturities,
        );
        assert!(ok);
        assert!(reason.is_none());
    }

    #[test]
    fn test_target_without_maturity_is_satisfied() {
        let mut maturities = BTreeMap::new();
        maturities.insert("#/types/A".to_string(), None);
        let (ok, _) =
            requirement_satisfied(&requirement("#/types/A", Some(Maturity::Tested)), &maturities);
        assert!(ok);
    }

    #[test]
    fn test_no_min_maturity_is_satisfied() {
        let mut maturities = BTreeMap::new();
        maturities.insert("#/types/A".to_string(), Some(Maturity::Idea));
        let (ok, _) = requirement_satisfied(&requirement("#/types/A", None), &maturities);
        assert!(ok);
    }
}
