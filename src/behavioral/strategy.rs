// Strategy: the printer delegates formatting to a swappable formatter.

use std::io::{self, Write};

pub trait StringFormatter {
    fn format_string(&self, string: &str) -> String;
}

impl<F> StringFormatter for F
where
    F: Fn(&str) -> String,
{
    fn format_string(&self, string: &str) -> String {
        self(string)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UpperCaseFormatter;

impl StringFormatter for UpperCaseFormatter {
    fn format_string(&self, string: &str) -> String {
        string.to_uppercase()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCaseFormatter;

impl StringFormatter for LowerCaseFormatter {
    fn format_string(&self, string: &str) -> String {
        string.to_lowercase()
    }
}

pub struct Printer<S> {
    strategy: S,
}

impl<S: StringFormatter> Printer<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn format(&self, string: &str) -> String {
        self.strategy.format_string(string)
    }

    pub fn print_string(&self, string: &str, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.format(string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const INPUT: &str = "LOREM ipsum DOLOR sit amet";

    #[test]
    fn test_case_strategies() {
        assert_eq!(Printer::new(LowerCaseFormatter).format(INPUT), "lorem ipsum dolor sit amet");
        assert_eq!(Printer::new(UpperCaseFormatter).format(INPUT), "LOREM IPSUM DOLOR SIT AMET");
    }

    #[test]
    fn test_closure_strategy() {
        let prefix = Printer::new(|s: &str| format!("Prefix: {s}"));
        assert_eq!(prefix.format(INPUT), format!("Prefix: {INPUT}"));
    }

    #[test]
    fn test_print_string_writes_line() {
        let mut out = Vec::new();
        Printer::new(UpperCaseFormatter)
            .print_string("abc", &mut out)
            .unwrap();
        assert_eq!(out, b"ABC\n");
    }

    #[test]
    fn test_boxed_strategies() {
        let strategies: Vec<Box<dyn StringFormatter>> =
            vec![Box::new(LowerCaseFormatter), Box::new(UpperCaseFormatter)];
        let results: Vec<String> = strategies.iter().map(|s| s.format_string("MiXeD")).collect();
        assert_eq!(results, ["mixed", "MIXED"]);
    }

    proptest! {
        #[test]
        fn test_ascii_case_round_trip(s in "[a-zA-Z ]{0,40}") {
            let upper = UpperCaseFormatter.format_string(&s);
            prop_assert_eq!(LowerCaseFormatter.format_string(&upper), s.to_lowercase());
            prop_assert_eq!(upper.len(), s.len());
        }
    }
}
