//! Candidate bookkeeping and constraint-consistent selection
//!
//! Candidates live in an insertion-ordered list with tombstoned removal, so
//! removing a tested code mid-scan never reorders the survivors. The guess
//! selector walks that order and returns the first candidate whose
//! exact-position match count agrees with every guess already processed.

use crate::core::Code;

/// A guess already submitted, with the red mark count it earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessedGuess {
    pub code: Code,
    pub red: u8,
}

/// Stable handle to a candidate, valid until that candidate is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateHandle(usize);

/// Insertion-ordered candidate store with O(1) removal by handle.
///
/// Removal leaves a tombstone instead of shifting, preserving both handle
/// stability and the generation order of the remaining candidates.
#[derive(Debug, Default, Clone)]
pub struct CandidateList {
    slots: Vec<Option<Code>>,
    live: usize,
}

impl CandidateList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate at the tail, returning its handle.
    pub fn push(&mut self, code: Code) -> CandidateHandle {
        self.slots.push(Some(code));
        self.live += 1;
        CandidateHandle(self.slots.len() - 1)
    }

    /// Remove the candidate behind `handle`, if still present.
    pub fn remove(&mut self, handle: CandidateHandle) -> Option<Code> {
        let removed = self.slots.get_mut(handle.0)?.take();
        if removed.is_some() {
            self.live -= 1;
        }
        removed
    }

    /// Number of candidates still present.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.live
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterate the remaining candidates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CandidateHandle, &Code)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|code| (CandidateHandle(index), code)))
    }

    /// Drop every candidate and tombstone.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.live = 0;
    }
}

/// True if `candidate` would have earned exactly the recorded red count
/// against every processed guess.
#[must_use]
pub fn is_consistent(candidate: &Code, processed: &[ProcessedGuess]) -> bool {
    processed
        .iter()
        .all(|guess| candidate.exact_matches(&guess.code) == guess.red)
}

/// Select the next guess: the first remaining candidate, in list order,
/// consistent with every processed result.
///
/// Returns `None` when no candidate fits — with candidates remaining and a
/// valid secret in play that is an internal-consistency violation, not a
/// transient condition.
#[must_use]
pub fn select_next<'a>(
    candidates: &'a CandidateList,
    processed: &[ProcessedGuess],
) -> Option<(CandidateHandle, &'a Code)> {
    candidates
        .iter()
        .find(|(_, candidate)| is_consistent(candidate, processed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn code(slots: [Color; 5]) -> Code {
        Code::new(slots)
    }

    #[test]
    fn removal_keeps_order_and_handles_stable() {
        let mut list = CandidateList::new();
        let a = code([Color::Beige; 5]);
        let b = code([Color::Red; 5]);
        let c = code([Color::White; 5]);

        let ha = list.push(a);
        let hb = list.push(b);
        let hc = list.push(c);
        assert_eq!(list.len(), 3);

        assert_eq!(list.remove(hb), Some(b));
        assert_eq!(list.len(), 2);
        let order: Vec<Code> = list.iter().map(|(_, code)| *code).collect();
        assert_eq!(order, vec![a, c]);

        // removing twice is a no-op
        assert_eq!(list.remove(hb), None);
        assert_eq!(list.len(), 2);

        assert_eq!(list.remove(ha), Some(a));
        assert_eq!(list.remove(hc), Some(c));
        assert!(list.is_empty());
    }

    #[test]
    fn select_next_skips_inconsistent_candidates() {
        let mut list = CandidateList::new();
        let wrong = code([
            Color::Beige,
            Color::Beige,
            Color::Beige,
            Color::Green,
            Color::Orange,
        ]);
        let right = code([
            Color::Beige,
            Color::Green,
            Color::Green,
            Color::Beige,
            Color::Orange,
        ]);
        list.push(wrong);
        list.push(right);

        // A monochrome probe of beige scored two reds: the secret holds
        // exactly two beige slots.
        let processed = [ProcessedGuess {
            code: Code::monochrome(Color::Beige),
            red: 2,
        }];
        let (_, picked) = select_next(&list, &processed).unwrap();
        assert_eq!(*picked, right);
    }

    #[test]
    fn selected_candidate_is_consistent_with_all_processed() {
        let secret = code([
            Color::Red,
            Color::Beige,
            Color::White,
            Color::Beige,
            Color::Green,
        ]);
        let mut list = CandidateList::new();
        list.push(code([Color::Beige; 5]));
        list.push(code([
            Color::Red,
            Color::Beige,
            Color::White,
            Color::Green,
            Color::Beige,
        ]));
        list.push(secret);

        let probes = [
            Code::monochrome(Color::Beige),
            Code::monochrome(Color::Red),
            Code::monochrome(Color::White),
        ];
        let processed: Vec<ProcessedGuess> = probes
            .iter()
            .map(|probe| ProcessedGuess {
                code: *probe,
                red: probe.exact_matches(&secret),
            })
            .collect();

        let (_, picked) = select_next(&list, &processed).unwrap();
        assert!(is_consistent(picked, &processed));
        for guess in &processed {
            assert_eq!(picked.exact_matches(&guess.code), guess.red);
        }
    }

    #[test]
    fn select_next_returns_none_when_nothing_fits() {
        let mut list = CandidateList::new();
        list.push(code([Color::Beige; 5]));

        let processed = [ProcessedGuess {
            code: Code::monochrome(Color::Beige),
            red: 2,
        }];
        assert!(select_next(&list, &processed).is_none());
    }

    #[test]
    fn first_consistent_in_list_order_wins() {
        let mut list = CandidateList::new();
        let first = code([
            Color::Beige,
            Color::Red,
            Color::Red,
            Color::Red,
            Color::Red,
        ]);
        let second = code([
            Color::Red,
            Color::Beige,
            Color::Red,
            Color::Red,
            Color::Red,
        ]);
        list.push(first);
        list.push(second);

        // both are consistent with an empty history; list order decides
        let (_, picked) = select_next(&list, &[]).unwrap();
        assert_eq!(*picked, first);
    }
}
