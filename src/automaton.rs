use crate::ahocorasick::MatchKind;
use crate::prefilter::{self, Candidate, PrefilterObj, PrefilterState};
use crate::state_id::{dead_id, fail_id, StateID};
use crate::Match;

// NOTE: This trait essentially started as a copy of the `DFA` trait in the
// regex-automata crate, whose only purpose is to be able to write automaton
// agnostic code. Here, we need to write code that is agnostic over our
// NFA and our four flavors of DFA.
//
// The search routines below have a fair bit of duplication between them.
// They are instructive to read side by side, since the diffs between them
// are exactly the diffs between the match semantics they implement.

/// A trait describing the interface of an Aho-Corasick finite state machine.
///
/// Every automaton has exactly one fail state, one dead state and exactly one
/// start state. Generally, these correspond to the first, second and third
/// states, respectively. The failure transitions point to the state that
/// corresponds to the longest proper suffix of the path traversed so far
/// that is also a prefix of some pattern.
///
/// These routines are defined over a type parameter `S: StateID`, which
/// corresponds to the internal representation for a state identifier. This
/// makes it possible to save on space by using smaller integers than `usize`
/// when appropriate.
pub trait Automaton {
    /// The representation used for state identifiers in this automaton.
    type ID: StateID;

    /// The type of matching that should be done.
    fn match_kind(&self) -> &MatchKind;

    /// Returns true if and only if this automaton matches at the beginning
    /// of the haystack only.
    fn anchored(&self) -> bool;

    /// An optional prefilter for quickly skipping to the next candidate
    /// match. A prefilter must report at least every match, although it may
    /// report positions that do not correspond to a match. That is, it must
    /// never report false negatives, but can report false positives.
    fn prefilter(&self) -> Option<&PrefilterObj>;

    /// Return the identifier of this automaton's start state.
    fn start_state(&self) -> Self::ID;

    /// Returns true if and only if the given state identifier refers to a
    /// valid state.
    fn is_valid(&self, id: Self::ID) -> bool;

    /// Returns true if and only if the given identifier corresponds to a
    /// match state.
    ///
    /// The state ID given must be valid, or else implementors may panic.
    fn is_match_state(&self, id: Self::ID) -> bool;

    /// Returns true if and only if the given identifier corresponds to a
    /// state that is either the dead state or a match state.
    ///
    /// Depending on the implementation of the automaton, this routine can
    /// be used to save a branch in the core matching loop. Nevertheless,
    /// `is_match_state(id) || id == dead_id()` is always a valid
    /// implementation. Indeed, this is the default implementation.
    ///
    /// The state ID given must be valid, or else implementors may panic.
    fn is_match_or_dead_state(&self, id: Self::ID) -> bool {
        id == dead_id() || self.is_match_state(id)
    }

    /// If the given state is a match state, return the match corresponding
    /// to the given match index. `end` must be the ending position of the
    /// detected match. If no match exists or if `match_index` exceeds the
    /// number of matches in this state, then `None` is returned.
    ///
    /// The state ID given must be valid, or else implementors may panic.
    ///
    /// If the given state ID is correct and if the `match_index` is less
    /// than the number of matches for that state, then this is guaranteed
    /// to return a match.
    fn get_match(
        &self,
        id: Self::ID,
        match_index: usize,
        end: usize,
    ) -> Option<Match>;

    /// Returns the number of matches for the given state. If the given state
    /// is not a match state, then this returns 0.
    ///
    /// The state ID given must be valid, or else implementors must panic.
    fn match_count(&self, id: Self::ID) -> usize;

    /// Given the current state that this automaton is in and the next input
    /// byte, this method returns the identifier of the next state. The
    /// identifier returned must always be valid and may never correspond to
    /// the fail state. The returned identifier may, however, point to the
    /// dead state.
    ///
    /// This is not safe so that implementors may look up the next state
    /// without memory safety checks such as bounds checks. As such, callers
    /// must ensure that the given identifier corresponds to a valid
    /// automaton state. Implementors must, in turn, ensure that this routine
    /// is safe for all valid state identifiers and for all possible `u8`
    /// values.
    fn next_state(&self, current: Self::ID, input: u8) -> Self::ID;

    /// Like next_state, but panics if the underlying implementation ever
    /// returns a `fail_id()` for the next state. A fail state here means the
    /// automaton was built incorrectly, and silently continuing would
    /// produce wrong matches.
    fn next_state_no_fail(&self, current: Self::ID, input: u8) -> Self::ID {
        let next = self.next_state(current, input);
        assert!(
            next != fail_id(),
            "automaton should never return fail_id for next state"
        );
        next
    }

    /// Execute a search using standard match semantics.
    ///
    /// This can be used even when the automaton was constructed with leftmost
    /// match semantics when you want to find the earliest possible match. In
    /// this case, the resulting match is guaranteed to have the smallest
    /// starting offset of a match corresponding to the automaton's match
    /// semantics.
    fn standard_find_at(
        &self,
        prestate: &mut PrefilterState,
        haystack: &[u8],
        at: usize,
        state_id: &mut Self::ID,
    ) -> Option<Match> {
        let pre = self.prefilter();
        self.standard_find_at_imp(prestate, pre, haystack, at, state_id)
    }

    // It's important for this to always be inlined. Namely, its only caller
    // is standard_find_at, and the inlining should remove the case analysis
    // for prefilter scanning when there is no prefilter available.
    #[inline(always)]
    fn standard_find_at_imp(
        &self,
        prestate: &mut PrefilterState,
        prefilter: Option<&PrefilterObj>,
        haystack: &[u8],
        mut at: usize,
        state_id: &mut Self::ID,
    ) -> Option<Match> {
        while at < haystack.len() {
            if let Some(pre) = prefilter {
                if prestate.is_effective(at)
                    && *state_id == self.start_state()
                {
                    let c = prefilter::next(
                        prestate,
                        pre.as_ref(),
                        haystack,
                        at,
                    )
                    .into_option();
                    match c {
                        None => return None,
                        Some(i) => {
                            at = i;
                        }
                    }
                }
            }
            // CORRECTNESS: next_state is correct for all possible u8 values,
            // so the only thing we're concerned about is the validity of
            // `state_id`. `state_id` either comes from the caller (in which
            // case, we assume it is correct), or it comes from the return
            // value of next_state, which is guaranteed to be correct.
            *state_id = self.next_state_no_fail(*state_id, haystack[at]);
            at += 1;
            // This routine always quits immediately after seeing a
            // match, and since dead states can only come after seeing
            // a match, seeing a dead state here is impossible. (Unless
            // we have an anchored automaton, in which case, dead states
            // are used to stop a search.)
            debug_assert!(
                *state_id != dead_id() || self.anchored(),
                "standard find should never see a dead state"
            );

            if self.is_match_or_dead_state(*state_id) {
                return if *state_id == dead_id() {
                    None
                } else {
                    self.get_match(*state_id, 0, at)
                };
            }
        }
        None
    }

    /// Execute a search using leftmost (either first or longest) match
    /// semantics.
    ///
    /// The principle difference between searching with standard semantics and
    /// searching with leftmost semantics is that leftmost searching will
    /// continue searching even after a match has been found. Once a match
    /// is found, the search does not stop until either the haystack has been
    /// exhausted or a dead state is observed in the automaton. (Dead states
    /// only exist in automatons constructed with leftmost semantics.) That
    /// is, we rely on the construction of the automaton to tell us when to
    /// quit.
    fn leftmost_find_at(
        &self,
        prestate: &mut PrefilterState,
        haystack: &[u8],
        at: usize,
        state_id: &mut Self::ID,
    ) -> Option<Match> {
        let pre = self.prefilter();
        self.leftmost_find_at_imp(prestate, pre, haystack, at, state_id)
    }

    // See comment on standard_find_at_imp for why this is inlined.
    #[inline(always)]
    fn leftmost_find_at_imp(
        &self,
        prestate: &mut PrefilterState,
        prefilter: Option<&PrefilterObj>,
        haystack: &[u8],
        mut at: usize,
        state_id: &mut Self::ID,
    ) -> Option<Match> {
        debug_assert!(self.match_kind().is_leftmost());
        if self.anchored() && at > 0 && *state_id == self.start_state() {
            return None;
        }
        let mut last_match = self.get_match(*state_id, 0, at);
        while at < haystack.len() {
            if let Some(pre) = prefilter {
                if prestate.is_effective(at)
                    && *state_id == self.start_state()
                {
                    let c = prefilter::next(
                        prestate,
                        pre.as_ref(),
                        haystack,
                        at,
                    )
                    .into_option();
                    match c {
                        None => return None,
                        Some(i) => {
                            at = i;
                        }
                    }
                }
            }
            // CORRECTNESS: next_state is correct for all possible u8 values,
            // so the only thing we're concerned about is the validity of
            // `state_id`. `state_id` either comes from the caller (in which
            // case, we assume it is correct), or it comes from the return
            // value of next_state, which is guaranteed to be correct.
            *state_id = self.next_state_no_fail(*state_id, haystack[at]);
            at += 1;
            if self.is_match_or_dead_state(*state_id) {
                if *state_id == dead_id() {
                    // The only way to enter into a dead state is if a match
                    // has been found, so we assert as much. This is different
                    // from normal automata, where you might enter a dead
                    // state if you know a subsequent match will never be
                    // found (regardless of whether a match has already been
                    // found). For Aho-Corasick, it is built so that we can
                    // match at any position, so the possibility of a match
                    // always exists.
                    //
                    // (Unless we have an anchored automaton, in which case,
                    // dead states are used to stop a search.)
                    debug_assert!(
                        last_match.is_some() || self.anchored(),
                        "dead state should only be seen after match"
                    );
                    return last_match;
                }
                last_match = self.get_match(*state_id, 0, at);
            }
        }
        last_match
    }

    /// This is like leftmost_find_at, but does not need to track a caller
    /// provided state id. In other words, the first match is always found
    /// from the start state.
    ///
    /// Additionally, if the match kind is leftmost and the prefilter can
    /// confirm its own matches, a match reported by the prefilter is
    /// returned directly.
    fn leftmost_find_at_no_state(
        &self,
        prestate: &mut PrefilterState,
        haystack: &[u8],
        at: usize,
    ) -> Option<Match> {
        let pre = self.prefilter();
        self.leftmost_find_at_no_state_imp(prestate, pre, haystack, at)
    }

    // See comment on standard_find_at_imp for why this is inlined.
    #[inline(always)]
    fn leftmost_find_at_no_state_imp(
        &self,
        prestate: &mut PrefilterState,
        prefilter: Option<&PrefilterObj>,
        haystack: &[u8],
        mut at: usize,
    ) -> Option<Match> {
        debug_assert!(self.match_kind().is_leftmost());
        if self.anchored() && at > 0 {
            return None;
        }
        // If our prefilter handles confirming matches on its own, then there
        // is no need to run the automaton at all: every candidate it reports
        // is already known to be a leftmost match.
        if let Some(pre) = prefilter {
            if !pre.as_ref().reports_false_positives() {
                return match prefilter::next(
                    prestate,
                    pre.as_ref(),
                    haystack,
                    at,
                ) {
                    Candidate::None => None,
                    Candidate::Match(m) => Some(m),
                    Candidate::PossibleStartOfMatch(_) => unreachable!(
                        "prefilters that do not report false positives must \
                         never report a possible start of match",
                    ),
                };
            }
        }

        let mut state_id = self.start_state();
        let mut last_match = self.get_match(state_id, 0, at);
        while at < haystack.len() {
            if let Some(pre) = prefilter {
                if prestate.is_effective(at) && state_id == self.start_state()
                {
                    match prefilter::next(prestate, pre.as_ref(), haystack, at)
                    {
                        Candidate::None => return None,
                        // Since we have a prefilter, which is a heuristic
                        // that doesn't need to be correct in terms of match
                        // semantics, we can return a match it confirms
                        // immediately.
                        Candidate::Match(m) => return Some(m),
                        Candidate::PossibleStartOfMatch(i) => {
                            at = i;
                        }
                    }
                }
            }
            // CORRECTNESS: next_state is correct for all possible u8 values,
            // so the only thing we're concerned about is the validity of
            // `state_id`. `state_id` either comes from the caller (in which
            // case, we assume it is correct), or it comes from the return
            // value of next_state, which is guaranteed to be correct.
            state_id = self.next_state_no_fail(state_id, haystack[at]);
            at += 1;
            if self.is_match_or_dead_state(state_id) {
                if state_id == dead_id() {
                    // See comment in leftmost_find_at_imp.
                    debug_assert!(
                        last_match.is_some() || self.anchored(),
                        "dead state should only be seen after match"
                    );
                    return last_match;
                }
                last_match = self.get_match(state_id, 0, at);
            }
        }
        last_match
    }

    /// Execute an overlapping search.
    ///
    /// When executing an overlapping match, the previous state ID in
    /// addition to the previous match index should be given. If there are
    /// more matches at the given state, then the match is reported and the
    /// given index is incremented.
    fn overlapping_find_at(
        &self,
        prestate: &mut PrefilterState,
        haystack: &[u8],
        at: usize,
        state_id: &mut Self::ID,
        match_index: &mut usize,
    ) -> Option<Match> {
        if self.anchored()
            && at > 0
            && *state_id == self.start_state()
        {
            return None;
        }

        let match_count = self.match_count(*state_id);
        if *match_index < match_count {
            // This is guaranteed to return a match since
            // match_index < match_count.
            let result = self.get_match(*state_id, *match_index, at);
            debug_assert!(result.is_some(), "must be a match");
            *match_index += 1;
            return result;
        }

        *match_index = 0;
        match self.standard_find_at(prestate, haystack, at, state_id) {
            None => None,
            Some(m) => {
                *match_index = 1;
                Some(m)
            }
        }
    }

    /// Return the earliest match found. This returns as soon as we know that
    /// we have a match. As such, this does not necessarily correspond to the
    /// leftmost starting match, but rather, the leftmost ending match.
    fn earliest_find_at(
        &self,
        prestate: &mut PrefilterState,
        haystack: &[u8],
        at: usize,
        state_id: &mut Self::ID,
    ) -> Option<Match> {
        if *state_id == self.start_state() {
            if self.anchored() && at > 0 {
                return None;
            }
            if let Some(m) = self.get_match(self.start_state(), 0, at) {
                return Some(m);
            }
        }
        self.standard_find_at(prestate, haystack, at, state_id)
    }

    /// A convenience function for finding the next match according to the
    /// match semantics of this automaton. For standard match semantics, this
    /// finds the earliest match. Otherwise, the leftmost match is found.
    fn find_at(
        &self,
        prestate: &mut PrefilterState,
        haystack: &[u8],
        at: usize,
        state_id: &mut Self::ID,
    ) -> Option<Match> {
        match *self.match_kind() {
            MatchKind::Standard => {
                self.earliest_find_at(prestate, haystack, at, state_id)
            }
            MatchKind::LeftmostFirst | MatchKind::LeftmostLongest => {
                self.leftmost_find_at(prestate, haystack, at, state_id)
            }
            MatchKind::__Nonexhaustive => unreachable!(),
        }
    }

    /// Like find_at, but does not track state identifiers.
    fn find_at_no_state(
        &self,
        prestate: &mut PrefilterState,
        haystack: &[u8],
        at: usize,
    ) -> Option<Match> {
        match *self.match_kind() {
            MatchKind::Standard => {
                let mut state = self.start_state();
                self.earliest_find_at(prestate, haystack, at, &mut state)
            }
            MatchKind::LeftmostFirst | MatchKind::LeftmostLongest => {
                self.leftmost_find_at_no_state(prestate, haystack, at)
            }
            MatchKind::__Nonexhaustive => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfa;
    use crate::nfa::{self, NFA};

    fn nfa_anchored(
        kind: MatchKind,
        patterns: &[&str],
    ) -> NFA<usize> {
        nfa::Builder::new()
            .match_kind(kind)
            .anchored(true)
            .build(patterns)
            .unwrap()
    }

    fn find(
        aut: &impl Automaton<ID = usize>,
        haystack: &str,
        at: usize,
    ) -> Option<(usize, usize, usize)> {
        let mut prestate = PrefilterState::new(10);
        aut.find_at_no_state(&mut prestate, haystack.as_bytes(), at)
            .map(|m| (m.pattern(), m.start(), m.end()))
    }

    #[test]
    fn anchored_matches_only_at_position_zero() {
        let nfa = nfa_anchored(MatchKind::Standard, &["foo", "bar"]);
        // Sentinels and trie states are all valid; ids past the state table
        // are not.
        assert!(nfa.is_valid(0) && nfa.is_valid(1) && nfa.is_valid(2));
        assert!(!nfa.is_valid(9999));
        assert_eq!(find(&nfa, "foo", 0), Some((0, 0, 3)));
        assert_eq!(find(&nfa, "barfoo", 0), Some((1, 0, 3)));
        assert_eq!(find(&nfa, "xfoo", 0), None);
        assert_eq!(find(&nfa, "xfoo", 1), None);
    }

    #[test]
    fn anchored_leftmost_longest() {
        let nfa = nfa_anchored(MatchKind::LeftmostLongest, &["a", "ab"]);
        assert_eq!(find(&nfa, "ab", 0), Some((1, 0, 2)));
        assert_eq!(find(&nfa, "za", 0), None);
        assert_eq!(find(&nfa, "ab", 1), None);
    }

    #[test]
    fn anchored_dfa_agrees_with_nfa() {
        let nfa = nfa_anchored(MatchKind::LeftmostFirst, &["sam", "samwise"]);
        let dfa = dfa::Builder::new().build(&nfa).unwrap();
        for haystack in &["sam", "samwise", "seaside", ""] {
            assert_eq!(find(&nfa, haystack, 0), {
                let mut prestate = PrefilterState::new(7);
                dfa.find_at_no_state(&mut prestate, haystack.as_bytes(), 0)
                    .map(|m| (m.pattern(), m.start(), m.end()))
            });
        }
    }
}
