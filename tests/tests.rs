use aho_corasick::{AhoCorasickBuilder, Match, MatchKind};

/// A description of a single test against an Aho-Corasick automaton.
#[derive(Clone, Debug)]
struct SearchTest {
    /// The name of this test, for debugging.
    name: &'static str,
    /// The patterns to search for.
    patterns: &'static [&'static str],
    /// The text to search.
    haystack: &'static str,
    /// Each match is a triple of (pattern_index, start, end), where
    /// pattern_index is the index of the pattern in `patterns` and `start`
    /// and `end` are the byte offsets of the match.
    matches: &'static [(usize, usize, usize)],
}

/// A collection of test groups.
type TestCollection = &'static [&'static [SearchTest]];

// Define several collections corresponding to the different type of match
// semantics supported. These collections have some overlap, but each
// collection should have some tests that no other collection has.

/// Tests for Aho-Corasick's standard non-overlapping match semantics.
const AC_STANDARD_NON_OVERLAPPING: TestCollection = &[STANDARD];

/// Tests for Aho-Corasick's standard overlapping match semantics.
const AC_STANDARD_OVERLAPPING: TestCollection = &[STANDARD_OVERLAPPING];

/// Tests for Aho-Corasick's leftmost-first match semantics.
const AC_LEFTMOST_FIRST: TestCollection = &[LEFTMOST_FIRST];

/// Tests for Aho-Corasick's leftmost-longest match semantics.
const AC_LEFTMOST_LONGEST: TestCollection = &[LEFTMOST_LONGEST];

/// Tests for ASCII case insensitivity with standard semantics.
const AC_CASE_INSENSITIVE_STANDARD: TestCollection =
    &[CASE_INSENSITIVE, CASE_INSENSITIVE_STANDARD];

/// Tests for ASCII case insensitivity with leftmost-first semantics.
const AC_CASE_INSENSITIVE_LEFTMOST_FIRST: TestCollection =
    &[CASE_INSENSITIVE, CASE_INSENSITIVE_LEFTMOST_FIRST];

/// Tests for ASCII case insensitivity with leftmost-longest semantics.
const AC_CASE_INSENSITIVE_LEFTMOST_LONGEST: TestCollection =
    &[CASE_INSENSITIVE, CASE_INSENSITIVE_LEFTMOST_LONGEST];

/// A macro for defining a new test succinctly.
macro_rules! t {
    ($name:ident, $patterns:expr, $haystack:expr, $matches:expr) => {
        SearchTest {
            name: stringify!($name),
            patterns: $patterns,
            haystack: $haystack,
            matches: $matches,
        }
    };
}

/// Tests for standard non-overlapping searches. Under standard semantics, a
/// match is reported as soon as any match state is entered, so the reported
/// match is the one whose end offset comes first.
const STANDARD: &'static [SearchTest] = &[
    t!(standard010, &["a"], "", &[]),
    t!(standard020, &["a"], "a", &[(0, 0, 1)]),
    t!(standard030, &["a"], "aa", &[(0, 0, 1), (0, 1, 2)]),
    t!(standard040, &["a"], "aba", &[(0, 0, 1), (0, 2, 3)]),
    t!(
        standard050,
        &["a", "b"],
        "abba",
        &[(0, 0, 1), (1, 1, 2), (1, 2, 3), (0, 3, 4)]
    ),
    t!(
        standard060,
        &["foo", "bar", "baz"],
        "foo bar baz",
        &[(0, 0, 3), (1, 4, 7), (2, 8, 11)]
    ),
    t!(standard070, &["foo"], "barfoobaz", &[(0, 3, 6)]),
    // The match state reached at "she" carries both the 'she' and the 'he'
    // matches; the one inserted first during trie construction wins.
    t!(standard400, &["he", "she", "his", "hers"], "ushers", &[(1, 1, 4)]),
    // 'b' ends before 'abc' does, so standard semantics report it first.
    t!(standard410, &["abc", "b"], "abc", &[(1, 1, 2)]),
    t!(standard420, &["foo"], "", &[]),
];

/// Tests for standard overlapping searches. Every occurrence of every
/// pattern is enumerated, in order of the end offset of the match.
const STANDARD_OVERLAPPING: &'static [SearchTest] = &[
    t!(over010, &["a"], "a", &[(0, 0, 1)]),
    t!(over020, &["a", "b"], "ab", &[(0, 0, 1), (1, 1, 2)]),
    t!(
        over030,
        &["a", "ab", "abc"],
        "abc",
        &[(0, 0, 1), (1, 0, 2), (2, 0, 3)]
    ),
    t!(over040, &["abba", "bb"], "abba", &[(1, 1, 3), (0, 0, 4)]),
    t!(
        over400,
        &["he", "she", "his", "hers"],
        "ushers",
        &[(1, 1, 4), (0, 2, 4), (3, 2, 6)]
    ),
    t!(
        over410,
        &["append", "appendage", "app"],
        "append the app to the appendage",
        &[
            (2, 0, 3),
            (0, 0, 6),
            (2, 11, 14),
            (2, 22, 25),
            (0, 22, 28),
            (1, 22, 31),
        ]
    ),
];

/// Tests for leftmost-first match semantics.
const LEFTMOST_FIRST: &'static [SearchTest] = &[
    t!(leftfirst010, &["a"], "", &[]),
    t!(leftfirst020, &["a"], "a", &[(0, 0, 1)]),
    // The pattern added first always wins among matches with the same
    // starting position, even when a longer pattern could match.
    t!(leftfirst100, &["a", "ab"], "ab", &[(0, 0, 1)]),
    t!(leftfirst110, &["a", "ab"], "abab", &[(0, 0, 1), (0, 2, 3)]),
    t!(leftfirst120, &["Samwise", "Sam"], "Samwise", &[(0, 0, 7)]),
    t!(leftfirst130, &["Sam", "Samwise"], "Samwise", &[(0, 0, 3)]),
    // A match that starts earlier beats a pattern with a smaller index that
    // starts later.
    t!(leftfirst200, &["abcd", "b", "bc"], "zabcdz", &[(0, 1, 5)]),
    // ... but when the longer pattern falls through, the later start is the
    // leftmost match after all.
    t!(leftfirst210, &["abcd", "b", "bc"], "zabcxz", &[(1, 2, 3)]),
    t!(
        leftfirst300,
        &["foo", "foofoo"],
        "foofoo",
        &[(0, 0, 3), (0, 3, 6)]
    ),
    t!(leftfirst400, &["he", "she", "his", "hers"], "ushers", &[(1, 1, 4)]),
];

/// Tests for leftmost-longest match semantics.
const LEFTMOST_LONGEST: &'static [SearchTest] = &[
    t!(leftlong010, &["a"], "", &[]),
    t!(leftlong020, &["a"], "a", &[(0, 0, 1)]),
    // Unlike leftmost-first, the longest pattern wins among matches with
    // the same starting position.
    t!(leftlong100, &["a", "ab"], "ab", &[(1, 0, 2)]),
    t!(leftlong110, &["a", "ab"], "abab", &[(1, 0, 2), (1, 2, 4)]),
    t!(leftlong120, &["Samwise", "Sam"], "Samwise", &[(0, 0, 7)]),
    t!(leftlong130, &["Sam", "Samwise"], "Samwise", &[(1, 0, 7)]),
    t!(leftlong200, &["ab", "abcd"], "abcd", &[(1, 0, 4)]),
    // The longer pattern falls through mid-way, so the shorter one that
    // already matched is reported.
    t!(leftlong210, &["ab", "abcd"], "abcx", &[(0, 0, 2)]),
    t!(leftlong400, &["he", "she", "his", "hers"], "ushers", &[(1, 1, 4)]),
];

/// Tests for ASCII case insensitivity that work with any match semantics.
const CASE_INSENSITIVE: &'static [SearchTest] = &[
    t!(acasei010, &["foo"], "barfoobaz", &[(0, 3, 6)]),
    t!(acasei020, &["foo"], "barFOObaz", &[(0, 3, 6)]),
    t!(acasei030, &["FoO"], "bArfOoBaz", &[(0, 3, 6)]),
    t!(
        acasei040,
        &["Foo", "BAR"],
        "foo bar FOO Bar",
        &[(0, 0, 3), (1, 4, 7), (0, 8, 11), (1, 12, 15)]
    ),
    // Case insensitivity is ASCII only; non-ASCII bytes match literally.
    t!(acasei050, &["\u{00e9}tat"], "\u{00c9}TAT", &[]),
];

/// Case insensitivity tests that depend on standard semantics.
const CASE_INSENSITIVE_STANDARD: &'static [SearchTest] = &[
    t!(acaseis400, &["ABC", "b"], "aBc", &[(1, 1, 2)]),
];

/// Case insensitivity tests that depend on leftmost-first semantics.
const CASE_INSENSITIVE_LEFTMOST_FIRST: &'static [SearchTest] = &[
    t!(acaseilf400, &["samwise", "SAM"], "SAMWISE", &[(0, 0, 7)]),
    t!(acaseilf410, &["SAM", "samwise"], "SAMWISE", &[(0, 0, 3)]),
];

/// Case insensitivity tests that depend on leftmost-longest semantics.
const CASE_INSENSITIVE_LEFTMOST_LONGEST: &'static [SearchTest] = &[
    t!(acaseill400, &["SAM", "samwise"], "SAMWISE", &[(1, 0, 7)]),
];

/// Now define a macro for building every combination of builder
/// configuration and collection that ought to agree. Each invocation
/// produces one test function running one collection against one engine
/// configuration.
macro_rules! testconfig {
    (overlapping, $name:ident, $collection:expr, $kind:ident, $with:expr) => {
        #[test]
        fn $name() {
            run_search_tests($collection, |test| {
                let mut builder = AhoCorasickBuilder::new();
                builder.match_kind(MatchKind::$kind);
                $with(&mut builder);
                let ac = builder.build(test.patterns);
                ac.find_overlapping_iter(test.haystack).collect()
            });
        }
    };
    ($name:ident, $collection:expr, $kind:ident, $with:expr) => {
        #[test]
        fn $name() {
            run_search_tests($collection, |test| {
                let mut builder = AhoCorasickBuilder::new();
                builder.match_kind(MatchKind::$kind);
                $with(&mut builder);
                let ac = builder.build(test.patterns);
                ac.find_iter(test.haystack).collect()
            });
        }
    };
}

fn no_extra_config(_: &mut AhoCorasickBuilder) {}

fn all_sparse(b: &mut AhoCorasickBuilder) {
    b.dense_depth(0);
}

fn all_dense(b: &mut AhoCorasickBuilder) {
    b.dense_depth(::std::usize::MAX);
}

fn no_prefilter(b: &mut AhoCorasickBuilder) {
    b.prefilter(false);
}

fn dfa_default(b: &mut AhoCorasickBuilder) {
    b.dfa(true);
}

fn dfa_no_byte_class(b: &mut AhoCorasickBuilder) {
    b.dfa(true).byte_classes(false);
}

fn dfa_no_premultiply(b: &mut AhoCorasickBuilder) {
    b.dfa(true).premultiply(false);
}

fn dfa_no_byte_class_no_premultiply(b: &mut AhoCorasickBuilder) {
    b.dfa(true).byte_classes(false).premultiply(false);
}

// Standard semantics, non-overlapping, every engine configuration. Running
// every collection against both the NFA and all four DFA representations is
// what pins down the "NFA and DFA produce identical output" guarantee.
testconfig!(
    nfa_standard_default,
    AC_STANDARD_NON_OVERLAPPING,
    Standard,
    no_extra_config
);
testconfig!(
    nfa_standard_all_sparse,
    AC_STANDARD_NON_OVERLAPPING,
    Standard,
    all_sparse
);
testconfig!(
    nfa_standard_all_dense,
    AC_STANDARD_NON_OVERLAPPING,
    Standard,
    all_dense
);
testconfig!(
    nfa_standard_no_prefilter,
    AC_STANDARD_NON_OVERLAPPING,
    Standard,
    no_prefilter
);
testconfig!(
    dfa_standard_default,
    AC_STANDARD_NON_OVERLAPPING,
    Standard,
    dfa_default
);
testconfig!(
    dfa_standard_no_byte_class,
    AC_STANDARD_NON_OVERLAPPING,
    Standard,
    dfa_no_byte_class
);
testconfig!(
    dfa_standard_no_premultiply,
    AC_STANDARD_NON_OVERLAPPING,
    Standard,
    dfa_no_premultiply
);
testconfig!(
    dfa_standard_no_byte_class_no_premultiply,
    AC_STANDARD_NON_OVERLAPPING,
    Standard,
    dfa_no_byte_class_no_premultiply
);

// Standard semantics, overlapping.
testconfig!(
    overlapping,
    nfa_overlapping_default,
    AC_STANDARD_OVERLAPPING,
    Standard,
    no_extra_config
);
testconfig!(
    overlapping,
    nfa_overlapping_all_sparse,
    AC_STANDARD_OVERLAPPING,
    Standard,
    all_sparse
);
testconfig!(
    overlapping,
    nfa_overlapping_all_dense,
    AC_STANDARD_OVERLAPPING,
    Standard,
    all_dense
);
testconfig!(
    overlapping,
    dfa_overlapping_default,
    AC_STANDARD_OVERLAPPING,
    Standard,
    dfa_default
);
testconfig!(
    overlapping,
    dfa_overlapping_no_byte_class,
    AC_STANDARD_OVERLAPPING,
    Standard,
    dfa_no_byte_class
);
testconfig!(
    overlapping,
    dfa_overlapping_no_premultiply,
    AC_STANDARD_OVERLAPPING,
    Standard,
    dfa_no_premultiply
);
testconfig!(
    overlapping,
    dfa_overlapping_no_byte_class_no_premultiply,
    AC_STANDARD_OVERLAPPING,
    Standard,
    dfa_no_byte_class_no_premultiply
);

// Leftmost-first semantics.
testconfig!(
    nfa_leftmost_first_default,
    AC_LEFTMOST_FIRST,
    LeftmostFirst,
    no_extra_config
);
testconfig!(
    nfa_leftmost_first_all_sparse,
    AC_LEFTMOST_FIRST,
    LeftmostFirst,
    all_sparse
);
testconfig!(
    nfa_leftmost_first_all_dense,
    AC_LEFTMOST_FIRST,
    LeftmostFirst,
    all_dense
);
testconfig!(
    dfa_leftmost_first_default,
    AC_LEFTMOST_FIRST,
    LeftmostFirst,
    dfa_default
);
testconfig!(
    dfa_leftmost_first_no_byte_class,
    AC_LEFTMOST_FIRST,
    LeftmostFirst,
    dfa_no_byte_class
);
testconfig!(
    dfa_leftmost_first_no_premultiply,
    AC_LEFTMOST_FIRST,
    LeftmostFirst,
    dfa_no_premultiply
);
testconfig!(
    dfa_leftmost_first_no_byte_class_no_premultiply,
    AC_LEFTMOST_FIRST,
    LeftmostFirst,
    dfa_no_byte_class_no_premultiply
);

// Leftmost-longest semantics.
testconfig!(
    nfa_leftmost_longest_default,
    AC_LEFTMOST_LONGEST,
    LeftmostLongest,
    no_extra_config
);
testconfig!(
    nfa_leftmost_longest_all_sparse,
    AC_LEFTMOST_LONGEST,
    LeftmostLongest,
    all_sparse
);
testconfig!(
    nfa_leftmost_longest_all_dense,
    AC_LEFTMOST_LONGEST,
    LeftmostLongest,
    all_dense
);
testconfig!(
    dfa_leftmost_longest_default,
    AC_LEFTMOST_LONGEST,
    LeftmostLongest,
    dfa_default
);
testconfig!(
    dfa_leftmost_longest_no_byte_class,
    AC_LEFTMOST_LONGEST,
    LeftmostLongest,
    dfa_no_byte_class
);
testconfig!(
    dfa_leftmost_longest_no_premultiply,
    AC_LEFTMOST_LONGEST,
    LeftmostLongest,
    dfa_no_premultiply
);
testconfig!(
    dfa_leftmost_longest_no_byte_class_no_premultiply,
    AC_LEFTMOST_LONGEST,
    LeftmostLongest,
    dfa_no_byte_class_no_premultiply
);

// ASCII case insensitivity.
fn acasei(b: &mut AhoCorasickBuilder) {
    b.ascii_case_insensitive(true);
}

fn acasei_dfa(b: &mut AhoCorasickBuilder) {
    b.ascii_case_insensitive(true).dfa(true);
}

testconfig!(
    nfa_acasei_standard,
    AC_CASE_INSENSITIVE_STANDARD,
    Standard,
    acasei
);
testconfig!(
    dfa_acasei_standard,
    AC_CASE_INSENSITIVE_STANDARD,
    Standard,
    acasei_dfa
);
testconfig!(
    nfa_acasei_leftmost_first,
    AC_CASE_INSENSITIVE_LEFTMOST_FIRST,
    LeftmostFirst,
    acasei
);
testconfig!(
    dfa_acasei_leftmost_first,
    AC_CASE_INSENSITIVE_LEFTMOST_FIRST,
    LeftmostFirst,
    acasei_dfa
);
testconfig!(
    nfa_acasei_leftmost_longest,
    AC_CASE_INSENSITIVE_LEFTMOST_LONGEST,
    LeftmostLongest,
    acasei
);
testconfig!(
    dfa_acasei_leftmost_longest,
    AC_CASE_INSENSITIVE_LEFTMOST_LONGEST,
    LeftmostLongest,
    acasei_dfa
);

fn run_search_tests<F: FnMut(&SearchTest) -> Vec<Match>>(
    which: TestCollection,
    mut f: F,
) {
    let get_match_triples =
        |matches: Vec<Match>| -> Vec<(usize, usize, usize)> {
            matches
                .into_iter()
                .map(|m| (m.pattern(), m.start(), m.end()))
                .collect()
        };
    for &tests in which {
        for test in tests {
            assert_eq!(
                test.matches.to_vec(),
                get_match_triples(f(test)),
                "test: {}, patterns: {:?}, haystack: {:?}",
                test.name,
                test.patterns,
                test.haystack,
            );
        }
    }
}

/// Every expected match in the case sensitive collections must correspond
/// precisely to the pattern text. This guards against typos in the tables
/// themselves.
#[test]
fn search_tests_have_valid_matches() {
    let case_sensitive: TestCollection = &[
        STANDARD,
        STANDARD_OVERLAPPING,
        LEFTMOST_FIRST,
        LEFTMOST_LONGEST,
    ];
    for &tests in case_sensitive {
        for test in tests {
            for &(pattern, start, end) in test.matches {
                assert_eq!(
                    test.patterns[pattern],
                    &test.haystack[start..end],
                    "bad match in test: {}",
                    test.name,
                );
            }
        }
    }
    let case_insensitive: TestCollection = &[
        CASE_INSENSITIVE,
        CASE_INSENSITIVE_STANDARD,
        CASE_INSENSITIVE_LEFTMOST_FIRST,
        CASE_INSENSITIVE_LEFTMOST_LONGEST,
    ];
    for &tests in case_insensitive {
        for test in tests {
            for &(pattern, start, end) in test.matches {
                assert_eq!(
                    test.patterns[pattern].to_ascii_lowercase(),
                    test.haystack[start..end].to_ascii_lowercase(),
                    "bad match in test: {}",
                    test.name,
                );
            }
        }
    }
}

/// Standard semantics never report a match that begins before a previously
/// reported match ends.
#[test]
fn standard_non_overlapping_never_overlaps() {
    for test in STANDARD {
        let mut previous_end = 0;
        for &(_, start, end) in test.matches {
            assert!(
                start >= previous_end,
                "overlapping match in test: {}",
                test.name,
            );
            previous_end = end;
        }
    }
}

/// Overlapping matches are reported in order of their end position.
#[test]
fn overlapping_matches_sorted_by_end() {
    for test in STANDARD_OVERLAPPING {
        let ends: Vec<usize> =
            test.matches.iter().map(|&(_, _, end)| end).collect();
        let mut sorted = ends.clone();
        sorted.sort();
        assert_eq!(ends, sorted, "unsorted matches in test: {}", test.name);
    }
}

/// Building and searching is deterministic: two separately built automatons
/// report byte-for-byte identical results.
#[test]
fn deterministic_across_builds() {
    let patterns = &["he", "she", "his", "hers"];
    let haystack = "she sells seashells by the seashore, so she said to hers";
    let collect = || -> Vec<(usize, usize, usize)> {
        let ac = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .build(patterns);
        ac.find_iter(haystack)
            .map(|m| (m.pattern(), m.start(), m.end()))
            .collect()
    };
    assert_eq!(collect(), collect());
}

/// An empty pattern collection builds a degenerate automaton that reports
/// no matches anywhere.
#[test]
fn no_patterns_never_matches() {
    let patterns: &[&str] = &[];
    let ac = AhoCorasickBuilder::new().build(patterns);
    assert_eq!(0, ac.pattern_count());
    assert_eq!(0, ac.max_pattern_len());
    assert!(!ac.is_match("any haystack at all"));
    assert_eq!(None, ac.find_iter("any haystack at all").next());
}

/// The earliest match is the one with the smallest end offset, regardless
/// of pattern order.
#[test]
fn earliest_find_smallest_end() {
    let ac = AhoCorasickBuilder::new().build(&["Samwise", "Sam"]);
    let m = ac.earliest_find("Samwise").unwrap();
    assert_eq!((1, 0, 3), (m.pattern(), m.start(), m.end()));
}

/// Exercise the remaining accessors on the public handle.
#[test]
fn automaton_accessors() {
    let ac = AhoCorasickBuilder::new()
        .match_kind(MatchKind::LeftmostLongest)
        .build(&["foo", "foobar"]);
    assert_eq!(2, ac.pattern_count());
    assert_eq!(6, ac.max_pattern_len());
    assert_eq!(&MatchKind::LeftmostLongest, ac.match_kind());
    assert!(!ac.supports_overlapping());
    assert!(ac.heap_bytes() > 0);

    let matches: Vec<usize> =
        ac.find_all("foo foobar").iter().map(|m| m.pattern()).collect();
    assert_eq!(vec![0, 1], matches);
}
