//! Textual grammar of the statements the machines understand.
//!
//! Sums come in two orientations (`4 + 7 = 11`, `11 = 4 + 7`) plus an
//! incomplete form (`4 + 7`) accepted only under lenient parsing.
//! Successor statements are `n = m + 1`, or a bare number under lenient
//! parsing. Operands are unsigned decimals of unbounded size and
//! whitespace is free everywhere the grammar allows it.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use regex::Regex;
use std::sync::LazyLock;

static SUM_OPERANDS_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*\+\s*(\d+)\s*=\s*(\d+)\s*$").expect("Invalid sum regex")
});
static SUM_RESULT_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*=\s*(\d+)\s*\+\s*(\d+)\s*$").expect("Invalid sum regex")
});
static SUM_INCOMPLETE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*\+\s*(\d+)\s*$").expect("Invalid sum regex"));
static SUCCESSOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*=\s*(\d+)\s*\+\s*1\s*$").expect("Invalid successor regex")
});
static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*$").expect("Invalid number regex"));

/// A parsed sum statement.
///
/// `result_first` records the surface orientation: `11 = 4 + 7` is
/// result-first, `4 + 7 = 11` is not. Nothing here forces `r` to equal
/// `o1 + o2`; callers may ask about false statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumEquation {
    pub o1: BigUint,
    pub o2: BigUint,
    pub r: BigUint,
    pub result_first: bool,
}

impl SumEquation {
    /// Whether the statement is arithmetically true.
    pub fn holds(&self) -> bool {
        self.r == &self.o1 + &self.o2
    }
}

/// A parsed successor statement `n = m + 1`, with `m >= 1` guaranteed
/// by parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessorEquation {
    pub n: BigUint,
    pub m: BigUint,
}

impl SuccessorEquation {
    /// Whether `n` really is the successor of `m`.
    pub fn holds(&self) -> bool {
        self.n == &self.m + 1u32
    }
}

/// Parse a sum statement in either orientation. Under lenient parsing
/// an incomplete statement is completed with its true result.
pub fn parse_sum(statement: &str, lenient: bool) -> Option<SumEquation> {
    if let Some(caps) = SUM_OPERANDS_FIRST.captures(statement) {
        return Some(SumEquation {
            o1: parse_operand(&caps[1])?,
            o2: parse_operand(&caps[2])?,
            r: parse_operand(&caps[3])?,
            result_first: false,
        });
    }
    if let Some(caps) = SUM_RESULT_FIRST.captures(statement) {
        return Some(SumEquation {
            r: parse_operand(&caps[1])?,
            o1: parse_operand(&caps[2])?,
            o2: parse_operand(&caps[3])?,
            result_first: true,
        });
    }
    if lenient {
        if let Some(caps) = SUM_INCOMPLETE.captures(statement) {
            let o1 = parse_operand(&caps[1])?;
            let o2 = parse_operand(&caps[2])?;
            let r = &o1 + &o2;
            return Some(SumEquation {
                o1,
                o2,
                r,
                result_first: false,
            });
        }
    }
    None
}

/// Parse a successor statement. The cited predecessor must be positive;
/// zero has no predecessor in this grammar. Under lenient parsing a bare
/// number `n` completes to `n = (n - 1) + 1`.
pub fn parse_successor(statement: &str, lenient: bool) -> Option<SuccessorEquation> {
    if let Some(caps) = SUCCESSOR.captures(statement) {
        let n = parse_operand(&caps[1])?;
        let m = parse_operand(&caps[2])?;
        if m.is_zero() {
            return None;
        }
        return Some(SuccessorEquation { n, m });
    }
    if lenient {
        if let Some(caps) = BARE_NUMBER.captures(statement) {
            let n = parse_operand(&caps[1])?;
            // 0 and 1 complete to a non-positive predecessor.
            if n <= BigUint::one() {
                return None;
            }
            let m = &n - 1u32;
            return Some(SuccessorEquation { n, m });
        }
    }
    None
}

fn parse_operand(digits: &str) -> Option<BigUint> {
    digits.parse::<BigUint>().ok()
}
