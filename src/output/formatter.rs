// Fri Oct 16 2026 - Alex

use crate::pattern::MatchSpan;
use crate::symbol::Undecorate;
use std::ops::AddAssign;

/// Rebuilds a line with its decorated symbols replaced or annotated.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter {
    keep_original: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub candidates: usize,
    pub undecorated: usize,
    pub rejected: usize,
}

impl AddAssign for TransformStats {
    fn add_assign(&mut self, other: Self) {
        self.candidates += other.candidates;
        self.undecorated += other.undecorated;
        self.rejected += other.rejected;
    }
}

impl LineFormatter {
    pub fn new(keep_original: bool) -> Self {
        Self { keep_original }
    }

    pub fn keep_original(&self) -> bool {
        self.keep_original
    }

    pub fn transform<I, D>(&self, line: &[u8], spans: I, demangler: &mut D) -> Vec<u8>
    where
        I: IntoIterator<Item = MatchSpan>,
        D: Undecorate + ?Sized,
    {
        self.transform_with_stats(line, spans, demangler).0
    }

    /// Copies the bytes around each span verbatim and substitutes the span.
    ///
    /// `spans` must be ordered and non-overlapping, as `SymbolScanner::scan`
    /// produces them. A candidate that fails to undecorate is dropped from the
    /// output in both modes, unless the demangler is unavailable altogether,
    /// in which case the line passes through untouched. In keep mode a
    /// successful candidate is written as `<decorated> "<undecorated>"`.
    ///
    /// Only the candidates themselves have to be UTF-8; one that is not
    /// counts as a failed lookup.
    pub fn transform_with_stats<I, D>(
        &self,
        line: &[u8],
        spans: I,
        demangler: &mut D,
    ) -> (Vec<u8>, TransformStats)
    where
        I: IntoIterator<Item = MatchSpan>,
        D: Undecorate + ?Sized,
    {
        let mut out = Vec::with_capacity(line.len());
        let mut stats = TransformStats::default();
        let mut cursor = 0;

        for span in spans {
            out.extend_from_slice(&line[cursor..span.start()]);
            cursor = span.end();
            stats.candidates += 1;

            let raw = span.slice(line);
            let result = match std::str::from_utf8(raw) {
                Ok(symbol) => demangler.undecorate(symbol),
                Err(_) => None,
            };
            let undecorated = match result {
                Some(undecorated) => undecorated,
                None => {
                    stats.rejected += 1;
                    if !demangler.is_available() {
                        out.extend_from_slice(raw);
                    }
                    continue;
                }
            };
            stats.undecorated += 1;

            if self.keep_original {
                out.extend_from_slice(raw);
                out.extend_from_slice(b" \"");
                out.extend_from_slice(undecorated.as_bytes());
                out.push(b'"');
            } else {
                out.extend_from_slice(undecorated.as_bytes());
            }
        }

        if cursor < line.len() {
            out.extend_from_slice(&line[cursor..]);
        }

        (out, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::SymbolScanner;
    use crate::utils::testing::MapUndecorator;

    fn demangler() -> MapUndecorator {
        MapUndecorator::new(&[
            ("?foo@@YAXXZ", "void foo(void)"),
            ("?a@@X", "int a"),
            ("?b@@X", "int b"),
        ])
    }

    fn run(line: &str, keep: bool, demangler: &mut MapUndecorator) -> String {
        let scanner = SymbolScanner::new();
        let line = line.as_bytes();
        let out = LineFormatter::new(keep).transform(line, scanner.scan(line), demangler);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_replace_mode() {
        let out = run("Found symbol ?foo@@YAXXZ in module", false, &mut demangler());
        assert_eq!(out, "Found symbol void foo(void) in module");
    }

    #[test]
    fn test_keep_mode() {
        let out = run("Found symbol ?foo@@YAXXZ in module", true, &mut demangler());
        assert_eq!(out, r#"Found symbol ?foo@@YAXXZ "void foo(void)" in module"#);
    }

    #[test]
    fn test_passthrough_without_matches() {
        for keep in [false, true] {
            assert_eq!(run("no symbols here", keep, &mut demangler()), "no symbols here");
            assert_eq!(run("", keep, &mut demangler()), "");
        }
    }

    #[test]
    fn test_multiple_matches_keep_order() {
        let out = run("?a@@X ... ?b@@X", false, &mut demangler());
        assert_eq!(out, "int a ... int b");

        let out = run("?b@@X, ?a@@X;", true, &mut demangler());
        assert_eq!(out, r#"?b@@X "int b", ?a@@X "int a";"#);
    }

    #[test]
    fn test_failed_match_is_dropped() {
        for keep in [false, true] {
            let out = run("before ?unknown@@Q after", keep, &mut demangler());
            assert_eq!(out, "before  after");
        }
    }

    #[test]
    fn test_symbol_at_line_edges() {
        assert_eq!(run("?foo@@YAXXZ", false, &mut demangler()), "void foo(void)");
        assert_eq!(run("x ?foo@@YAXXZ", false, &mut demangler()), "x void foo(void)");
        assert_eq!(run("?foo@@YAXXZ x", false, &mut demangler()), "void foo(void) x");
    }

    #[test]
    fn test_unknown_symbols_dropped_by_working_demangler() {
        let mut empty = MapUndecorator::new(&[]);
        assert_eq!(run("plain text", false, &mut empty), "plain text");
        assert_eq!(run("a ?foo@@YAXXZ b", false, &mut empty), "a  b");
    }

    #[test]
    fn test_unavailable_demangler_passes_line_through() {
        let mut unavailable = MapUndecorator::unavailable();
        for keep in [false, true] {
            let line = "a ?foo@@YAXXZ b ?a@@X";
            assert_eq!(run(line, keep, &mut unavailable), line);
        }
    }

    #[test]
    fn test_stats() {
        let line = b"?a@@X ?zzz@@X ?b@@X";
        let scanner = SymbolScanner::new();
        let (_, stats) = LineFormatter::new(false).transform_with_stats(
            line,
            scanner.scan(line),
            &mut demangler(),
        );
        assert_eq!(
            stats,
            TransformStats {
                candidates: 3,
                undecorated: 2,
                rejected: 1,
            }
        );
    }

    #[test]
    fn test_non_utf8_text_around_symbol_is_copied() {
        let line = b"\xe9t\xe9 ?foo@@YAXXZ \xff";
        let scanner = SymbolScanner::new();
        let mut demangler = demangler();
        let out = LineFormatter::new(false).transform(line, scanner.scan(line), &mut demangler);
        assert_eq!(out, b"\xe9t\xe9 void foo(void) \xff");
    }

    #[test]
    fn test_non_utf8_candidate_is_a_failed_lookup() {
        let line = b"a ?\xff@@X b";
        let span = MatchSpan::new(2, 7);

        let mut working = demangler();
        let (out, stats) =
            LineFormatter::new(false).transform_with_stats(line, [span], &mut working);
        assert_eq!(out, b"a  b");
        assert_eq!(stats.rejected, 1);
        assert_eq!(working.lookups, 0);

        let mut unavailable = MapUndecorator::unavailable();
        let out = LineFormatter::new(true).transform(line, [span], &mut unavailable);
        assert_eq!(out, line);
    }
}
