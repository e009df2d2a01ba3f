use std::fmt;

use crate::automaton::Automaton;
use crate::dfa::{self, DFA};
use crate::error::Result;
use crate::nfa::{self, NFA};
use crate::prefilter::PrefilterState;
use crate::state_id::StateID;
use crate::Match;

/// An automaton for searching multiple strings in linear time.
///
/// The `AhoCorasick` type supports a few basic ways of constructing an
/// automaton, including [`AhoCorasick::new`](struct.AhoCorasick.html#method.new).
/// However, there are a fair number of configurable options that can be set
/// by using [`AhoCorasickBuilder`](struct.AhoCorasickBuilder.html) instead.
/// Such options include, but are not limited to, how matches are determined,
/// simple case insensitivity and whether to use a DFA or not.
///
/// If you aren't sure where to start, try beginning with
/// [`AhoCorasick::new`](struct.AhoCorasick.html#method.new) and using the
/// [`find_iter`](struct.AhoCorasick.html#method.find_iter) method to iterate
/// over matches.
///
/// # Resource usage
///
/// Aho-Corasick automatons are always constructed in `O(p)` time, where `p`
/// is the combined length of all patterns being searched. With that said,
/// building an automaton can be fairly costly because of high constant
/// factors, particularly when enabling the [DFA](struct.AhoCorasickBuilder.html#method.dfa)
/// option (which is disabled by default). For this reason, it's generally a
/// good idea to build an automaton once and reuse it as much as possible.
///
/// # Cloning
///
/// A built automaton is immutable and is cheap to share across threads by
/// reference. Cloning it duplicates the entire state table, so clone only
/// when each thread genuinely needs its own copy.
#[derive(Clone, Debug)]
pub struct AhoCorasick<S: StateID = usize> {
    imp: Imp<S>,
    match_kind: MatchKind,
    match_only_whole_words: bool,
}

impl AhoCorasick {
    /// Create a new Aho-Corasick automaton using the default configuration.
    ///
    /// The default configuration optimizes for less space usage, but at the
    /// expense of longer search times. To change the configuration, use
    /// [`AhoCorasickBuilder`](struct.AhoCorasickBuilder.html)
    /// for fine-grained control, and see the builder's methods for the
    /// available knobs.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use aho_corasick::AhoCorasick;
    ///
    /// let ac = AhoCorasick::new(vec![
    ///     "foo", "bar", "baz",
    /// ]);
    /// assert_eq!(Some(1), ac.find(b"xxx bar xxx").map(|m| m.pattern()));
    /// ```
    pub fn new<I, P>(patterns: I) -> AhoCorasick
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        AhoCorasickBuilder::new().build(patterns)
    }
}

impl<S: StateID> AhoCorasick<S> {
    /// Returns true if and only if this automaton matches the haystack at
    /// any position.
    ///
    /// # Examples
    ///
    /// ```
    /// use aho_corasick::AhoCorasick;
    ///
    /// let ac = AhoCorasick::new(vec![
    ///     "foo", "bar", "quux", "baz",
    /// ]);
    /// assert!(ac.is_match(b"xxx bar xxx"));
    /// assert!(!ac.is_match(b"xxx qux xxx"));
    /// ```
    pub fn is_match<B: AsRef<[u8]>>(&self, haystack: B) -> bool {
        self.earliest_find(haystack).is_some()
    }

    /// Returns the location of the first detected match in `haystack`.
    ///
    /// This method has the same behavior regardless of the
    /// [`MatchKind`](enum.MatchKind.html) of this automaton: the match
    /// reported is the one whose end offset comes first in the haystack.
    pub fn earliest_find<B: AsRef<[u8]>>(&self, haystack: B) -> Option<Match> {
        let mut prestate = PrefilterState::new(self.max_pattern_len());
        let mut start = self.imp.start_state();
        self.imp.earliest_find_at(
            &mut prestate,
            haystack.as_ref(),
            0,
            &mut start,
        )
    }

    /// Returns the location of the first match according to the match
    /// semantics that this automaton was constructed with.
    ///
    /// When using `MatchKind::Standard`, this corresponds precisely to the
    /// same behavior as
    /// [`earliest_find`](struct.AhoCorasick.html#method.earliest_find).
    /// Otherwise, match semantics correspond to either leftmost-first or
    /// leftmost-longest.
    ///
    /// # Examples
    ///
    /// ```
    /// use aho_corasick::{AhoCorasickBuilder, MatchKind};
    ///
    /// let ac = AhoCorasickBuilder::new()
    ///     .match_kind(MatchKind::LeftmostFirst)
    ///     .build(vec!["abc", "b"]);
    /// let mat = ac.find(b"zzzabczzz").expect("should have a match");
    /// assert_eq!((0, 3, 6), (mat.pattern(), mat.start(), mat.end()));
    /// ```
    pub fn find<B: AsRef<[u8]>>(&self, haystack: B) -> Option<Match> {
        let mut prestate = PrefilterState::new(self.max_pattern_len());
        self.imp.find_at_no_state(&mut prestate, haystack.as_ref(), 0)
    }

    /// Returns an iterator of non-overlapping matches, using the match
    /// semantics that this automaton was constructed with.
    ///
    /// # Examples
    ///
    /// ```
    /// use aho_corasick::AhoCorasick;
    ///
    /// let ac = AhoCorasick::new(vec![
    ///     "append", "appendage", "app",
    /// ]);
    /// let matches: Vec<usize> = ac
    ///     .find_iter(b"append the app to the appendage")
    ///     .map(|mat| mat.pattern())
    ///     .collect();
    /// assert_eq!(vec![2, 2, 2], matches);
    /// ```
    pub fn find_iter<'a, 'b, B: ?Sized + AsRef<[u8]>>(
        &'a self,
        haystack: &'b B,
    ) -> FindIter<'a, 'b, S> {
        FindIter::new(self, haystack.as_ref())
    }

    /// Returns an iterator of overlapping matches in the given haystack.
    ///
    /// Overlapping matches can _only_ be detected using `MatchKind::Standard`
    /// semantics. If this automaton was constructed with leftmost matching
    /// semantics, then this panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use aho_corasick::AhoCorasick;
    ///
    /// let ac = AhoCorasick::new(vec![
    ///     "append", "appendage", "app",
    /// ]);
    /// let matches: Vec<usize> = ac
    ///     .find_overlapping_iter(b"append the app to the appendage")
    ///     .map(|mat| mat.pattern())
    ///     .collect();
    /// assert_eq!(vec![2, 0, 2, 2, 0, 1], matches);
    /// ```
    pub fn find_overlapping_iter<'a, 'b, B: ?Sized + AsRef<[u8]>>(
        &'a self,
        haystack: &'b B,
    ) -> FindOverlappingIter<'a, 'b, S> {
        FindOverlappingIter::new(self, haystack.as_ref())
    }

    /// Returns every match in the haystack, using the match semantics that
    /// this automaton was constructed with.
    ///
    /// This is a convenience for collecting
    /// [`find_iter`](struct.AhoCorasick.html#method.find_iter).
    pub fn find_all<B: AsRef<[u8]>>(&self, haystack: B) -> Vec<Match> {
        self.find_iter(haystack.as_ref()).collect()
    }

    /// Replace all matches with a corresponding value in the `replace_with`
    /// slice given. Matches correspond to the same matches as reported by
    /// [`find_iter`](struct.AhoCorasick.html#method.find_iter).
    ///
    /// Replacements are determined by the index of the matching pattern.
    /// For example, if the pattern with index `2` is found, then it is
    /// replaced by `replace_with[2]`.
    ///
    /// # Panics
    ///
    /// This panics when `replace_with.len()` does not equal the total number
    /// of patterns that are matched by this automaton.
    ///
    /// # Examples
    ///
    /// ```
    /// use aho_corasick::{AhoCorasickBuilder, MatchKind};
    ///
    /// let ac = AhoCorasickBuilder::new()
    ///     .match_kind(MatchKind::LeftmostFirst)
    ///     .build(vec!["append", "appendage", "app"]);
    /// let result = ac.replace_all(
    ///     "append the app to the appendage",
    ///     &["x", "y", "z"],
    /// );
    /// assert_eq!("x the z to the xage", result);
    /// ```
    pub fn replace_all<B>(&self, haystack: &str, replace_with: &[B]) -> String
    where
        B: AsRef<str>,
    {
        assert_eq!(
            replace_with.len(),
            self.pattern_count(),
            "replace_all requires a replacement for every pattern \
             in the automaton"
        );
        let mut dst = String::with_capacity(haystack.len());
        self.replace_all_with(haystack, &mut dst, |mat, _, dst| {
            dst.push_str(replace_with[mat.pattern()].as_ref());
            true
        });
        dst
    }

    /// Replace all matches using raw bytes with a corresponding value in the
    /// `replace_with` slice given. Matches correspond to the same matches as
    /// reported by [`find_iter`](struct.AhoCorasick.html#method.find_iter).
    ///
    /// # Panics
    ///
    /// This panics when `replace_with.len()` does not equal the total number
    /// of patterns that are matched by this automaton.
    pub fn replace_all_bytes<B>(
        &self,
        haystack: &[u8],
        replace_with: &[B],
    ) -> Vec<u8>
    where
        B: AsRef<[u8]>,
    {
        assert_eq!(
            replace_with.len(),
            self.pattern_count(),
            "replace_all_bytes requires a replacement for every pattern \
             in the automaton"
        );
        let mut dst = Vec::with_capacity(haystack.len());
        self.replace_all_with_bytes(haystack, &mut dst, |mat, _, dst| {
            dst.extend(replace_with[mat.pattern()].as_ref());
            true
        });
        dst
    }

    /// Replace all matches using a closure called on each match.
    /// Matches correspond to the same matches as reported by
    /// [`find_iter`](struct.AhoCorasick.html#method.find_iter).
    ///
    /// The closure accepts three parameters: the match found, the text of
    /// the match and a string buffer with which to write the replaced text
    /// (if any). If the closure returns `false`, then replacement stops and
    /// the rest of the haystack after the current match is copied to the
    /// buffer verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use aho_corasick::{AhoCorasickBuilder, MatchKind};
    ///
    /// let ac = AhoCorasickBuilder::new()
    ///     .match_kind(MatchKind::LeftmostFirst)
    ///     .build(vec!["append", "appendage", "app"]);
    /// let mut result = String::new();
    /// ac.replace_all_with(
    ///     "append the app to the appendage",
    ///     &mut result,
    ///     |mat, _, dst| {
    ///         dst.push_str(&mat.pattern().to_string());
    ///         true
    ///     },
    /// );
    /// assert_eq!("0 the 2 to the 0age", result);
    /// ```
    pub fn replace_all_with<F>(
        &self,
        haystack: &str,
        dst: &mut String,
        mut replace_with: F,
    ) where
        F: FnMut(&Match, &str, &mut String) -> bool,
    {
        let mut last_match = 0;
        for mat in self.find_iter(haystack) {
            dst.push_str(&haystack[last_match..mat.start()]);
            last_match = mat.end();
            let keep_going =
                replace_with(&mat, &haystack[mat.start()..mat.end()], dst);
            if !keep_going {
                break;
            }
        }
        dst.push_str(&haystack[last_match..]);
    }

    /// Replace all matches using raw bytes with a closure called on each
    /// match. Matches correspond to the same matches as reported by
    /// [`find_iter`](struct.AhoCorasick.html#method.find_iter).
    ///
    /// The closure accepts three parameters: the match found, the text of
    /// the match and a byte buffer with which to write the replaced text
    /// (if any). If the closure returns `false`, then replacement stops and
    /// the rest of the haystack after the current match is copied to the
    /// buffer verbatim.
    pub fn replace_all_with_bytes<F>(
        &self,
        haystack: &[u8],
        dst: &mut Vec<u8>,
        mut replace_with: F,
    ) where
        F: FnMut(&Match, &[u8], &mut Vec<u8>) -> bool,
    {
        let mut last_match = 0;
        for mat in self.find_iter(haystack) {
            dst.extend(&haystack[last_match..mat.start()]);
            last_match = mat.end();
            let keep_going =
                replace_with(&mat, &haystack[mat.start()..mat.end()], dst);
            if !keep_going {
                break;
            }
        }
        dst.extend(&haystack[last_match..]);
    }

    /// Returns the match kind used by this automaton.
    pub fn match_kind(&self) -> &MatchKind {
        self.imp.match_kind()
    }

    /// Returns the length of the longest pattern matched by this automaton.
    pub fn max_pattern_len(&self) -> usize {
        self.imp.max_pattern_len()
    }

    /// Return the total number of patterns matched by this automaton.
    ///
    /// This includes patterns that may never participate in a match. For
    /// example, if
    /// [`MatchKind::LeftmostFirst`](enum.MatchKind.html#variant.LeftmostFirst)
    /// match semantics are used, and the patterns `Sam` and `Samwise` were
    /// used to build the automaton, then `Samwise` can never match since
    /// `Sam` will always take precedence.
    pub fn pattern_count(&self) -> usize {
        self.imp.pattern_count()
    }

    /// Returns true if and only if this automaton supports reporting
    /// overlapping matches.
    ///
    /// When this returns false and overlapping matches are requested, they
    /// are not supported and will result in a panic.
    pub fn supports_overlapping(&self) -> bool {
        self.match_kind.supports_overlapping()
    }

    /// Returns the approximate total amount of heap used by this automaton,
    /// in units of bytes.
    pub fn heap_bytes(&self) -> usize {
        self.imp.heap_bytes()
    }
}

/// The internal implementation of Aho-Corasick, which is either an NFA or
/// a DFA. The NFA is slower but uses less memory. The DFA is faster but
/// uses more memory.
#[derive(Clone, Debug)]
enum Imp<S: StateID> {
    NFA(NFA<S>),
    DFA(DFA<S>),
}

impl<S: StateID> Imp<S> {
    fn match_kind(&self) -> &MatchKind {
        match *self {
            Imp::NFA(ref nfa) => nfa.match_kind(),
            Imp::DFA(ref dfa) => dfa.match_kind(),
        }
    }

    fn heap_bytes(&self) -> usize {
        match *self {
            Imp::NFA(ref nfa) => nfa.heap_bytes(),
            Imp::DFA(ref dfa) => dfa.heap_bytes(),
        }
    }

    fn max_pattern_len(&self) -> usize {
        match *self {
            Imp::NFA(ref nfa) => nfa.max_pattern_len(),
            Imp::DFA(ref dfa) => dfa.max_pattern_len(),
        }
    }

    fn pattern_count(&self) -> usize {
        match *self {
            Imp::NFA(ref nfa) => nfa.pattern_count(),
            Imp::DFA(ref dfa) => dfa.pattern_count(),
        }
    }

    fn start_state(&self) -> S {
        match *self {
            Imp::NFA(ref nfa) => nfa.start_state(),
            Imp::DFA(ref dfa) => dfa.start_state(),
        }
    }

    #[inline(always)]
    fn overlapping_find_at(
        &self,
        prestate: &mut PrefilterState,
        haystack: &[u8],
        at: usize,
        state_id: &mut S,
        match_index: &mut usize,
    ) -> Option<Match> {
        match *self {
            Imp::NFA(ref nfa) => nfa.overlapping_find_at(
                prestate,
                haystack,
                at,
                state_id,
                match_index,
            ),
            Imp::DFA(ref dfa) => dfa.overlapping_find_at(
                prestate,
                haystack,
                at,
                state_id,
                match_index,
            ),
        }
    }

    #[inline(always)]
    fn earliest_find_at(
        &self,
        prestate: &mut PrefilterState,
        haystack: &[u8],
        at: usize,
        state_id: &mut S,
    ) -> Option<Match> {
        match *self {
            Imp::NFA(ref nfa) => {
                nfa.earliest_find_at(prestate, haystack, at, state_id)
            }
            Imp::DFA(ref dfa) => {
                dfa.earliest_find_at(prestate, haystack, at, state_id)
            }
        }
    }

    #[inline(always)]
    fn find_at_no_state(
        &self,
        prestate: &mut PrefilterState,
        haystack: &[u8],
        at: usize,
    ) -> Option<Match> {
        match *self {
            Imp::NFA(ref nfa) => nfa.find_at_no_state(prestate, haystack, at),
            Imp::DFA(ref dfa) => dfa.find_at_no_state(prestate, haystack, at),
        }
    }
}

/// An iterator of non-overlapping matches in a particular haystack.
///
/// This iterator yields matches according to the
/// [`MatchKind`](enum.MatchKind.html)
/// used by this automaton.
///
/// This iterator is constructed via the
/// [`AhoCorasick::find_iter`](struct.AhoCorasick.html#method.find_iter)
/// method.
///
/// The lifetime `'a` refers to the lifetime of the `AhoCorasick` automaton.
///
/// The lifetime `'b` refers to the lifetime of the haystack being searched.
#[derive(Debug)]
pub struct FindIter<'a, 'b, S: StateID> {
    fsm: &'a Imp<S>,
    prestate: PrefilterState,
    haystack: &'b [u8],
    pos: usize,
    match_only_whole_words: bool,
}

impl<'a, 'b, S: StateID> FindIter<'a, 'b, S> {
    fn new(ac: &'a AhoCorasick<S>, haystack: &'b [u8]) -> FindIter<'a, 'b, S> {
        let prestate = PrefilterState::new(ac.max_pattern_len());
        FindIter {
            fsm: &ac.imp,
            prestate,
            haystack,
            pos: 0,
            match_only_whole_words: ac.match_only_whole_words,
        }
    }
}

impl<'a, 'b, S: StateID> Iterator for FindIter<'a, 'b, S> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if self.pos > self.haystack.len() {
                return None;
            }
            let result = self.fsm.find_at_no_state(
                &mut self.prestate,
                self.haystack,
                self.pos,
            )?;
            // Move the position one past the end of the match so the next
            // search picks up where this one left off. A zero length match
            // requires an extra bump to guarantee forward progress.
            if result.end() == self.pos {
                self.pos += 1;
            } else {
                self.pos = result.end();
            }
            if self.match_only_whole_words
                && !is_whole_word(self.haystack, &result)
            {
                continue;
            }
            return Some(result);
        }
    }
}

/// An iterator of overlapping matches in a particular haystack.
///
/// This iterator will report all possible matches in a particular haystack,
/// even when the matches overlap.
///
/// This iterator is constructed via the
/// [`AhoCorasick::find_overlapping_iter`](struct.AhoCorasick.html#method.find_overlapping_iter)
/// method.
///
/// The lifetime `'a` refers to the lifetime of the `AhoCorasick` automaton.
///
/// The lifetime `'b` refers to the lifetime of the haystack being searched.
#[derive(Debug)]
pub struct FindOverlappingIter<'a, 'b, S: StateID> {
    fsm: &'a Imp<S>,
    prestate: PrefilterState,
    haystack: &'b [u8],
    pos: usize,
    state_id: S,
    match_index: usize,
    match_only_whole_words: bool,
}

impl<'a, 'b, S: StateID> FindOverlappingIter<'a, 'b, S> {
    fn new(
        ac: &'a AhoCorasick<S>,
        haystack: &'b [u8],
    ) -> FindOverlappingIter<'a, 'b, S> {
        assert!(
            ac.supports_overlapping(),
            "automaton built with match kind {:?} does not support \
             overlapping searches; only MatchKind::Standard does",
            ac.match_kind,
        );
        let prestate = PrefilterState::new(ac.max_pattern_len());
        FindOverlappingIter {
            fsm: &ac.imp,
            prestate,
            haystack,
            pos: 0,
            state_id: ac.imp.start_state(),
            match_index: 0,
            match_only_whole_words: ac.match_only_whole_words,
        }
    }
}

impl<'a, 'b, S: StateID> Iterator for FindOverlappingIter<'a, 'b, S> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if self.pos > self.haystack.len() {
                return None;
            }
            let result = self.fsm.overlapping_find_at(
                &mut self.prestate,
                self.haystack,
                self.pos,
                &mut self.state_id,
                &mut self.match_index,
            )?;
            self.pos = result.end();
            if self.match_only_whole_words
                && !is_whole_word(self.haystack, &result)
            {
                continue;
            }
            return Some(result);
        }
    }
}

/// Returns true if and only if neither byte adjacent to the given match is
/// an ASCII alphanumeric byte. Bytes outside ASCII never count as word
/// bytes, so matches embedded in multi-byte encoded text are treated as
/// whole words.
fn is_whole_word(haystack: &[u8], m: &Match) -> bool {
    if m.start() > 0 && haystack[m.start() - 1].is_ascii_alphanumeric() {
        return false;
    }
    if m.end() < haystack.len() && haystack[m.end()].is_ascii_alphanumeric() {
        return false;
    }
    true
}

/// A builder for configuring an Aho-Corasick automaton.
#[derive(Clone, Debug)]
pub struct AhoCorasickBuilder {
    nfa_builder: nfa::Builder,
    dfa_builder: dfa::Builder,
    dfa: bool,
    match_only_whole_words: bool,
}

impl Default for AhoCorasickBuilder {
    fn default() -> AhoCorasickBuilder {
        AhoCorasickBuilder::new()
    }
}

impl AhoCorasickBuilder {
    /// Create a new builder for configuring an Aho-Corasick automaton.
    ///
    /// If you don't need fine-grained configuration or aren't sure which
    /// knobs to set, try using
    /// [`AhoCorasick::new`](struct.AhoCorasick.html#method.new)
    /// instead.
    pub fn new() -> AhoCorasickBuilder {
        AhoCorasickBuilder {
            nfa_builder: nfa::Builder::new(),
            dfa_builder: dfa::Builder::new(),
            dfa: false,
            match_only_whole_words: false,
        }
    }

    /// Build an Aho-Corasick automaton using the configuration set on this
    /// builder.
    ///
    /// A builder may be reused to create more automatons.
    ///
    /// This method will use the default for representing internal state
    /// identifiers, which is `usize`. This guarantees that building the
    /// automaton will succeed and is generally a good default, but can make
    /// the size of the automaton 2-8 times bigger than it needs to be,
    /// depending on your target platform.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use aho_corasick::AhoCorasickBuilder;
    ///
    /// let ac = AhoCorasickBuilder::new()
    ///     .ascii_case_insensitive(true)
    ///     .build(vec!["FOO", "bAr", "BaZ"]);
    /// assert_eq!(Some(1), ac.find(b"xxx bar xxx").map(|m| m.pattern()));
    /// ```
    pub fn build<I, P>(&self, patterns: I) -> AhoCorasick
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        // The builder only returns an error if the chosen state ID
        // representation is too small to hold all of the automaton's
        // transitions. But `usize` can always represent the offsets of a
        // table that fits into memory, so this can never fail.
        self.build_with_size::<usize, I, P>(patterns)
            .expect("usize state ID type cannot overflow")
    }

    /// Build an Aho-Corasick automaton using the configuration set on this
    /// builder with a specific state identifier representation. This only
    /// has an effect on the memory usage of the underlying automaton.
    ///
    /// Generally, the state identifier representation, `S`, must satisfy
    /// `S::max_id() >= n`, where `n` is the number of states in the
    /// automaton (or the number of states multiplied by the alphabet length,
    /// when state identifiers are premultiplied). If the chosen
    /// representation is too small, then this returns an error.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
    ///
    /// # fn example() -> Result<(), ::aho_corasick::Error> {
    /// let ac: AhoCorasick<u16> = AhoCorasickBuilder::new()
    ///     .build_with_size(vec!["foo", "bar", "baz"])?;
    /// assert_eq!(Some(1), ac.find(b"xxx bar xxx").map(|m| m.pattern()));
    /// # Ok(()) }; example().unwrap()
    /// ```
    pub fn build_with_size<S, I, P>(
        &self,
        patterns: I,
    ) -> Result<AhoCorasick<S>>
    where
        S: StateID,
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let nfa = self.nfa_builder.build(patterns)?;
        let match_kind = *nfa.match_kind();
        let imp = if self.dfa {
            let dfa = self.dfa_builder.build(&nfa)?;
            Imp::DFA(dfa)
        } else {
            Imp::NFA(nfa)
        };
        Ok(AhoCorasick {
            imp,
            match_kind,
            match_only_whole_words: self.match_only_whole_words,
        })
    }

    /// Set the desired match semantics.
    ///
    /// The default is [`MatchKind::Standard`](enum.MatchKind.html#variant.Standard),
    /// which corresponds to the match semantics supported by the standard
    /// textbook description of the Aho-Corasick algorithm. Namely, matches
    /// are reported as soon as they are found. Moreover, this is the only
    /// match kind that supports overlapping matches.
    ///
    /// The other kinds of match semantics that are supported are
    /// [`MatchKind::LeftmostFirst`](enum.MatchKind.html#variant.LeftmostFirst)
    /// and
    /// [`MatchKind::LeftmostLongest`](enum.MatchKind.html#variant.LeftmostLongest).
    pub fn match_kind(&mut self, kind: MatchKind) -> &mut AhoCorasickBuilder {
        self.nfa_builder.match_kind(kind);
        self
    }

    /// Enable ASCII-aware case insensitive matching.
    ///
    /// When this option is enabled, searching will be performed without
    /// respect to case for ASCII letters (`a-z` and `A-Z`) only.
    ///
    /// Enabling this option does not change the search algorithm, but it
    /// may increase the size of the automaton.
    pub fn ascii_case_insensitive(
        &mut self,
        yes: bool,
    ) -> &mut AhoCorasickBuilder {
        self.nfa_builder.ascii_case_insensitive(yes);
        self
    }

    /// Set the limit on how many states use a dense representation for
    /// their transitions.
    ///
    /// A dense representation uses more space, but supports faster access
    /// to transitions at search time. Thus, this setting permits the control
    /// of a space versus time trade off when using the NFA variant of
    /// Aho-Corasick. States near the start state are visited much more
    /// frequently during a search, which is why only shallow states benefit
    /// from the dense representation.
    ///
    /// This limit is expressed in terms of the depth of a state, i.e., the
    /// number of transitions from the starting state of the automaton. The
    /// default is `2`.
    pub fn dense_depth(&mut self, depth: usize) -> &mut AhoCorasickBuilder {
        self.nfa_builder.dense_depth(depth);
        self
    }

    /// Compile the standard Aho-Corasick automaton into a deterministic
    /// finite automaton (DFA).
    ///
    /// When this is disabled (which is the default), then a non-deterministic
    /// finite automaton (NFA) is used instead.
    ///
    /// The main benefit to a DFA is that it can execute searches more
    /// quickly than a NFA (perhaps 2-3 times as fast). The main drawback is
    /// that the DFA uses more space and can take much longer to build.
    pub fn dfa(&mut self, yes: bool) -> &mut AhoCorasickBuilder {
        self.dfa = yes;
        self
    }

    /// Enable heuristic prefilter optimizations.
    ///
    /// When enabled, searching will attempt to quickly skip to match
    /// candidates using specialized literal search routines. A prefilter
    /// cannot always be used, and is generally treated as a heuristic. It
    /// can be useful to disable this if the prefilter is observed to be
    /// sub-optimal for a particular workload.
    ///
    /// This is enabled by default.
    pub fn prefilter(&mut self, yes: bool) -> &mut AhoCorasickBuilder {
        self.nfa_builder.prefilter(yes);
        self
    }

    /// Only report matches that are surrounded by non-alphanumeric bytes
    /// (or the haystack boundaries). Only ASCII bytes count as alphanumeric,
    /// so this is most useful for haystacks that are predominantly ASCII.
    ///
    /// This is disabled by default.
    pub fn match_only_whole_words(
        &mut self,
        yes: bool,
    ) -> &mut AhoCorasickBuilder {
        self.match_only_whole_words = yes;
        self
    }

    /// A debug setting for whether to attempt to shrink the size of the
    /// automaton's alphabet or not.
    ///
    /// This option is enabled by default and should never be disabled unless
    /// one is debugging the underlying automaton. This option only applies
    /// when building a DFA.
    ///
    /// When enabled, some (but not all) Aho-Corasick automatons will use a
    /// map from all possible bytes to their corresponding equivalence class.
    /// When two bytes are in the same equivalence class, then it is
    /// guaranteed they will never discriminate between a match and a
    /// non-match. Grouping bytes this way can dramatically shrink the size
    /// of the DFA's transition table.
    pub fn byte_classes(&mut self, yes: bool) -> &mut AhoCorasickBuilder {
        self.dfa_builder.byte_classes(yes);
        self
    }

    /// A debug setting for whether to attempt to premultiply state
    /// identifiers or not.
    ///
    /// This option is enabled by default and should never be disabled unless
    /// one is debugging the underlying automaton. This option only applies
    /// when building a DFA.
    ///
    /// When enabled, state identifiers are premultiplied to point to their
    /// corresponding row in the DFA's transition table. That is, given the
    /// `i`th state, its corresponding premultiplied identifier is `i *
    /// alphabet_len` where `alphabet_len` is the number of symbols in the
    /// DFA's alphabet. This saves a multiplication instruction per byte
    /// at search time.
    pub fn premultiply(&mut self, yes: bool) -> &mut AhoCorasickBuilder {
        self.dfa_builder.premultiply(yes);
        self
    }
}

/// A knob for controlling the match semantics of an Aho-Corasick automaton.
///
/// There are two generally different ways that Aho-Corasick automatons can
/// report matches. The first way is the "standard" approach that results from
/// implementing most textbook explanations of Aho-Corasick. The second way is
/// to report only the leftmost non-overlapping matches. The leftmost approach
/// is in turn split into two different ways of resolving ambiguous matches:
/// leftmost-first and leftmost-longest.
///
/// The `Standard` match kind is the default and is the only one that supports
/// overlapping matches and stream searching. (Stream searching is not
/// provided by this crate.) The `Standard` match kind will report matches as
/// they are seen. When searching for overlapping matches, then all possible
/// matches are reported. When searching for non-overlapping matches, the
/// first match seen is reported.
///
/// The `LeftmostFirst` match kind reports the leftmost match. When multiple
/// leftmost matches exist, the match corresponding to the pattern that was
/// provided *earliest* to the automaton is reported. The `LeftmostLongest`
/// match kind instead reports the *longest* of the leftmost matches, with
/// ties broken by the earliest pattern.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchKind {
    /// Use standard match semantics, which support overlapping matches. When
    /// used with non-overlapping matches, matches are reported as they are
    /// seen.
    Standard,
    /// Use leftmost-first match semantics, which reports leftmost matches.
    /// When there are multiple possible leftmost matches, the match
    /// corresponding to the pattern that appeared earlier when constructing
    /// the automaton is reported.
    ///
    /// This does **not** support overlapping matches.
    LeftmostFirst,
    /// Use leftmost-longest match semantics, which reports leftmost matches.
    /// When there are multiple possible leftmost matches, the longest match
    /// is chosen.
    ///
    /// This does **not** support overlapping matches.
    LeftmostLongest,
    /// Hints that destructuring should not be exhaustive.
    ///
    /// This enum may grow additional variants, so this makes sure clients
    /// don't count on exhaustive matching. (Otherwise, adding a new variant
    /// could break existing code.)
    #[doc(hidden)]
    __Nonexhaustive,
}

impl Default for MatchKind {
    fn default() -> MatchKind {
        MatchKind::Standard
    }
}

impl MatchKind {
    fn supports_overlapping(&self) -> bool {
        self.is_standard()
    }

    pub(crate) fn is_standard(&self) -> bool {
        *self == MatchKind::Standard
    }

    pub(crate) fn is_leftmost(&self) -> bool {
        *self == MatchKind::LeftmostFirst
            || *self == MatchKind::LeftmostLongest
    }

    pub(crate) fn is_leftmost_first(&self) -> bool {
        *self == MatchKind::LeftmostFirst
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MatchKind::Standard => write!(f, "standard"),
            MatchKind::LeftmostFirst => write!(f, "leftmost-first"),
            MatchKind::LeftmostLongest => write!(f, "leftmost-longest"),
            MatchKind::__Nonexhaustive => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_filtering() {
        let ac = AhoCorasickBuilder::new()
            .match_only_whole_words(true)
            .build(vec!["bar"]);
        let matches: Vec<(usize, usize)> = ac
            .find_iter(b"bar embargo bar-keep barbar")
            .map(|m| (m.start(), m.end()))
            .collect();
        assert_eq!(matches, vec![(0, 3), (12, 15)]);
    }

    #[test]
    fn whole_word_filtering_overlapping() {
        let ac = AhoCorasickBuilder::new()
            .match_only_whole_words(true)
            .build(vec!["he", "hers"]);
        let matches: Vec<(usize, usize)> = ac
            .find_overlapping_iter(b"he said hers")
            .map(|m| (m.start(), m.end()))
            .collect();
        assert_eq!(matches, vec![(0, 2), (8, 12)]);
    }

    #[test]
    fn replace_all_early_stop() {
        let ac = AhoCorasick::new(vec!["x"]);
        let mut dst = String::new();
        let mut budget = 2;
        ac.replace_all_with("1x2x3x4", &mut dst, |_, _, dst| {
            dst.push('!');
            budget -= 1;
            budget > 0
        });
        assert_eq!("1!2!3x4", dst);
    }

    #[test]
    #[should_panic]
    fn replace_all_wrong_arity_panics() {
        let ac = AhoCorasick::new(vec!["foo", "bar"]);
        ac.replace_all("foobar", &["only one"]);
    }

    #[test]
    #[should_panic]
    fn overlapping_requires_standard_semantics() {
        let ac = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostFirst)
            .build(vec!["foo"]);
        let _ = ac.find_overlapping_iter(b"foo");
    }

    #[test]
    fn state_size_u16() {
        let ac: AhoCorasick<u16> = AhoCorasickBuilder::new()
            .build_with_size(vec!["foo", "bar", "baz"])
            .unwrap();
        assert_eq!(3, ac.pattern_count());
        assert!(ac.is_match("xxfooxx"));
    }
}
