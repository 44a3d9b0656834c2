//! Respondent cohorts and the algebra to combine them.
//!
//! A [`Cohort`] is a set of respondent IDs satisfying some inclusion
//! criterion ("graduate students", "respondents who answered Yes to PI2"),
//! always bound to the [`Universe`] of one results table. Binding the
//! universe lets every operation reject combinations of cohorts that were
//! built from different tables instead of silently producing a wrong-sized
//! result.
//!
//! The algebra is intentionally small: intersection and union via
//! [`Cohort::combine`], left-anchored subtraction via [`Cohort::difference`],
//! and [`Cohort::complement`]. The backing representation is private;
//! callers only ever see the operations.

use std::{collections::BTreeSet, sync::Arc};

use crate::respondent::RespondentId;

/// The full set of respondents of one loaded results table, in store order.
///
/// Cohorts hold a cheap clone of the universe they were derived from. Two
/// universes are the same when they list the same respondents in the same
/// order.
#[derive(Debug, Clone)]
pub struct Universe {
    ids: Arc<[RespondentId]>,
}

impl Universe {
    /// Builds a universe from the respondent IDs of a results table.
    ///
    /// IDs are expected to be unique; the results table validates this
    /// before constructing its universe.
    #[must_use]
    pub fn new(ids: Vec<RespondentId>) -> Self {
        Self { ids: ids.into() }
    }

    /// Number of respondents in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// `true` if the universe has no respondents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Respondent IDs in store order.
    pub fn iter(&self) -> impl Iterator<Item = &RespondentId> {
        self.ids.iter()
    }

    /// The cohort containing every respondent.
    #[must_use]
    pub fn everyone(&self) -> Cohort {
        Cohort {
            universe: self.clone(),
            members: self.ids.iter().cloned().collect(),
        }
    }

    /// Builds a cohort from explicit member IDs.
    ///
    /// Fails with [`CohortError::ForeignRespondent`] if any ID is not part
    /// of this universe, so a cohort is always a subset of its universe.
    pub fn cohort<I>(&self, members: I) -> Result<Cohort, CohortError>
    where
        I: IntoIterator<Item = RespondentId>,
    {
        let members = members.into_iter().collect::<BTreeSet<_>>();
        if let Some(id) = members.iter().find(|id| !self.ids.contains(*id)) {
            return Err(CohortError::ForeignRespondent { id: id.clone() });
        }
        Ok(Cohort {
            universe: self.clone(),
            members,
        })
    }

    /// `true` when both universes describe the same respondent list.
    #[must_use]
    pub fn same_as(&self, other: &Universe) -> bool {
        Arc::ptr_eq(&self.ids, &other.ids) || self.ids == other.ids
    }
}

/// How [`Cohort::combine`] merges its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineLogic {
    /// Intersection: respondents present in every operand.
    And,
    /// Union: respondents present in any operand.
    Or,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CohortError {
    #[display("cohort combination requires at least one operand")]
    EmptyArgument,
    #[display("cohort operands belong to different respondent universes")]
    UniverseMismatch,
    #[display("respondent '{id}' is not part of this universe")]
    ForeignRespondent { id: RespondentId },
}

/// A set of respondent IDs bound to the universe it was derived from.
#[derive(Debug, Clone)]
pub struct Cohort {
    universe: Universe,
    members: BTreeSet<RespondentId>,
}

impl Cohort {
    /// Intersects (`And`) or unions (`Or`) the given cohorts.
    ///
    /// Commutative and associative in either logic. Fails with
    /// [`CohortError::EmptyArgument`] for zero operands and
    /// [`CohortError::UniverseMismatch`] when the operands were derived from
    /// different results tables.
    pub fn combine(cohorts: &[Cohort], logic: CombineLogic) -> Result<Cohort, CohortError> {
        let (first, rest) = cohorts.split_first().ok_or(CohortError::EmptyArgument)?;
        let mut members = first.members.clone();
        for cohort in rest {
            if !first.universe.same_as(&cohort.universe) {
                return Err(CohortError::UniverseMismatch);
            }
            match logic {
                CombineLogic::And => members.retain(|id| cohort.members.contains(id)),
                CombineLogic::Or => members.extend(cohort.members.iter().cloned()),
            }
        }
        Ok(Cohort {
            universe: first.universe.clone(),
            members,
        })
    }

    /// `base` minus the union of `others`.
    ///
    /// Left-anchored: the result is always a subset of `base`, and order of
    /// the subtrahends does not matter. Zero subtrahends is the identity.
    pub fn difference(base: &Cohort, others: &[Cohort]) -> Result<Cohort, CohortError> {
        let mut members = base.members.clone();
        for cohort in others {
            if !base.universe.same_as(&cohort.universe) {
                return Err(CohortError::UniverseMismatch);
            }
            members.retain(|id| !cohort.members.contains(id));
        }
        Ok(Cohort {
            universe: base.universe.clone(),
            members,
        })
    }

    /// Every respondent of the universe that is not a member of this cohort.
    #[must_use]
    pub fn complement(&self) -> Cohort {
        let members = self
            .universe
            .iter()
            .filter(|id| !self.members.contains(*id))
            .cloned()
            .collect();
        Cohort {
            universe: self.universe.clone(),
            members,
        }
    }

    /// The universe this cohort was derived from.
    #[must_use]
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// `true` if the cohort has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, id: &RespondentId) -> bool {
        self.members.contains(id)
    }

    /// Member IDs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &RespondentId> {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(n: usize) -> Universe {
        Universe::new((1..=n).map(|i| RespondentId::new(format!("{i:02}"))).collect())
    }

    fn cohort(u: &Universe, ids: &[&str]) -> Cohort {
        u.cohort(ids.iter().map(|id| RespondentId::new(*id))).unwrap()
    }

    #[test]
    fn test_inclusion_exclusion() {
        let u = universe(8);
        let a = cohort(&u, &["01", "02", "03", "04"]);
        let b = cohort(&u, &["03", "04", "05"]);
        let union = Cohort::combine(&[a.clone(), b.clone()], CombineLogic::Or).unwrap();
        let inter = Cohort::combine(&[a.clone(), b.clone()], CombineLogic::And).unwrap();
        assert_eq!(union.len(), a.len() + b.len() - inter.len());
    }

    #[test]
    fn test_combine_is_commutative_and_idempotent() {
        let u = universe(6);
        let a = cohort(&u, &["01", "02", "05"]);
        let b = cohort(&u, &["02", "03"]);
        for logic in [CombineLogic::And, CombineLogic::Or] {
            let ab = Cohort::combine(&[a.clone(), b.clone()], logic).unwrap();
            let ba = Cohort::combine(&[b.clone(), a.clone()], logic).unwrap();
            assert_eq!(
                ab.iter().collect::<Vec<_>>(),
                ba.iter().collect::<Vec<_>>()
            );
            let aa = Cohort::combine(&[a.clone(), a.clone()], logic).unwrap();
            assert_eq!(aa.len(), a.len());
        }
    }

    #[test]
    fn test_combine_rejects_zero_operands() {
        assert!(matches!(
            Cohort::combine(&[], CombineLogic::Or),
            Err(CohortError::EmptyArgument)
        ));
    }

    #[test]
    fn test_difference_is_left_anchored() {
        let u = universe(6);
        let a = cohort(&u, &["01", "02", "03", "04"]);
        let b = cohort(&u, &["02", "05"]);
        let d = Cohort::difference(&a, &[b.clone()]).unwrap();
        assert!(d.iter().all(|id| a.contains(id)));
        assert!(d.iter().all(|id| !b.contains(id)));
        assert_eq!(d.len(), 3);

        let identity = Cohort::difference(&a, &[]).unwrap();
        assert_eq!(identity.len(), a.len());
    }

    #[test]
    fn test_complement_is_involutive() {
        let u = universe(5);
        let a = cohort(&u, &["01", "04"]);
        let back = a.complement().complement();
        assert_eq!(
            back.iter().collect::<Vec<_>>(),
            a.iter().collect::<Vec<_>>()
        );
        assert_eq!(a.complement().len(), u.len() - a.len());
    }

    #[test]
    fn test_universe_mismatch_fails_loudly() {
        let u1 = universe(4);
        let u2 = universe(5);
        let a = cohort(&u1, &["01"]);
        let b = cohort(&u2, &["01"]);
        assert!(matches!(
            Cohort::combine(&[a.clone(), b.clone()], CombineLogic::Or),
            Err(CohortError::UniverseMismatch)
        ));
        assert!(matches!(
            Cohort::difference(&a, &[b]),
            Err(CohortError::UniverseMismatch)
        ));
    }

    #[test]
    fn test_cohort_must_be_subset_of_universe() {
        let u = universe(3);
        let err = u.cohort([RespondentId::new("99")]);
        assert!(matches!(err, Err(CohortError::ForeignRespondent { .. })));
    }

    #[test]
    fn test_same_universe_by_value() {
        // Two separately constructed but identical universes interoperate.
        let u1 = universe(4);
        let u2 = universe(4);
        let a = cohort(&u1, &["01", "02"]);
        let b = cohort(&u2, &["02", "03"]);
        let inter = Cohort::combine(&[a, b], CombineLogic::And).unwrap();
        assert_eq!(inter.len(), 1);
    }
}
