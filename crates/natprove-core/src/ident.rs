//! Content-addressed identifiers for propositions and arguments.
//!
//! Every lemma a proof touches is named by its numbers alone, so
//! identical sub-proofs deduplicate when fragment sets union. The wire
//! forms are consumed by the hosting platform and must stay stable:
//!
//! - `defn.N`: "N = N-1 + 1", the definition of the number N
//! - `sum.1.R.O1.O2`: "R = O1 + O2" (result first)
//! - `sum.0.R.O1.O2`: "O1 + O2 = R" (operands first)
//! - `temp.1.A.B.C`: "A + 1 = B + (C + 1)"
//! - `temp.2.A.B.C`: "(A) + 1 = (B + C) + 1"
//! - `<id>:N`: negation record, proving it shows `<id>` is false
//! - anything starting with `#`: a platform resource, cited verbatim
//!
//! Argument ids join conclusion and premise ids with `-`; arguments
//! vouched for by an external machine are `PM<conclusion>-<machine>`.
//! Configured pointers are validated to never contain `-`.

use crate::error::{CoreError, CoreResult};
use natprove_api::{Argument, Proposition};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;

/// Identifier of one proposition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropositionId {
    /// Successor definition of `n`: "n = n-1 + 1". Requires `n >= 1`.
    Definition { n: BigUint },
    /// Sum fact relating `r` and `o1 + o2`, in either orientation.
    Sum {
        result_first: bool,
        r: BigUint,
        o1: BigUint,
        o2: BigUint,
    },
    /// Induction bridge "a + 1 = b + (c + 1)": the successor shifted
    /// into the second operand.
    SuccShifted { a: BigUint, b: BigUint, c: BigUint },
    /// Induction bridge "(a) + 1 = (b + c) + 1": both sides under an
    /// outer successor.
    SuccBothSides { a: BigUint, b: BigUint, c: BigUint },
    /// Negation record of `of`.
    Negation { of: Box<PropositionId> },
    /// Platform-owned resource, never decoded locally.
    External { ptr: String },
}

impl PropositionId {
    /// Id for a sum fact.
    ///
    /// The successor-definition spelling (`r = o1 + 1` with the equality
    /// actually true) collapses to `defn.r`: the induction's base fact
    /// and the definition it relies on must be one object, or proof
    /// sets would carry both under different names.
    pub fn sum(r: BigUint, o1: BigUint, o2: BigUint, result_first: bool) -> Self {
        if result_first && o2.is_one() && r == &o1 + &o2 {
            PropositionId::Definition { n: r }
        } else {
            PropositionId::Sum {
                result_first,
                r,
                o1,
                o2,
            }
        }
    }

    pub fn external(ptr: impl Into<String>) -> Self {
        PropositionId::External { ptr: ptr.into() }
    }

    /// Negation record of this id.
    pub fn negated(self) -> Self {
        PropositionId::Negation { of: Box::new(self) }
    }

    /// The underlying platform resource. A negation record and the fact
    /// it negates are one resource.
    pub fn resource(&self) -> &PropositionId {
        match self {
            PropositionId::Negation { of } => of,
            other => other,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, PropositionId::External { .. })
    }

    /// Pointer for citing this proposition from within one response:
    /// ephemeral for locally-materialized ids, the platform pointer
    /// itself for external resources.
    pub fn pointer(&self) -> String {
        match self {
            PropositionId::External { ptr } => ptr.clone(),
            owned => format!("#P~{owned}"),
        }
    }

    /// Human-readable statement text. External resources have no local
    /// text; a negation record reads as the fact it negates.
    pub fn statement_text(&self) -> Option<String> {
        match self {
            PropositionId::Definition { n } => Some(format!("{} = {} + 1", n, n - 1u32)),
            PropositionId::Sum {
                result_first,
                r,
                o1,
                o2,
            } => {
                if *result_first {
                    Some(format!("{r} = {o1} + {o2}"))
                } else {
                    Some(format!("{o1} + {o2} = {r}"))
                }
            }
            PropositionId::SuccShifted { a, b, c } => Some(format!("{a} + 1 = {b} + ({c} + 1)")),
            PropositionId::SuccBothSides { a, b, c } => {
                Some(format!("({a}) + 1 = ({b} + {c}) + 1"))
            }
            PropositionId::Negation { of } => of.statement_text(),
            PropositionId::External { .. } => None,
        }
    }

    /// Materialize as a platform proposition: rendered statement text
    /// plus this id's ephemeral pointer.
    pub fn to_proposition(&self) -> Option<Proposition> {
        let statement = self.statement_text()?;
        Some(Proposition::informal(statement).with_ephemeral_ptr(self.pointer()))
    }
}

impl fmt::Display for PropositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropositionId::Definition { n } => write!(f, "defn.{n}"),
            PropositionId::Sum {
                result_first,
                r,
                o1,
                o2,
            } => {
                let orientation = if *result_first { 1 } else { 0 };
                write!(f, "sum.{orientation}.{r}.{o1}.{o2}")
            }
            PropositionId::SuccShifted { a, b, c } => write!(f, "temp.1.{a}.{b}.{c}"),
            PropositionId::SuccBothSides { a, b, c } => write!(f, "temp.2.{a}.{b}.{c}"),
            PropositionId::Negation { of } => write!(f, "{of}:N"),
            PropositionId::External { ptr } => f.write_str(ptr),
        }
    }
}

impl FromStr for PropositionId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('#') {
            return Ok(PropositionId::External { ptr: s.to_string() });
        }
        if let Some(base) = s.strip_suffix(":N") {
            let of = base.parse::<PropositionId>()?;
            // Negations do not stack; a doubled suffix is malformed.
            if matches!(of, PropositionId::Negation { .. }) {
                return Err(CoreError::malformed_id("proposition", s));
            }
            return Ok(of.negated());
        }
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            ["defn", n] => {
                let n = parse_wire_num(s, n)?;
                if n.is_zero() {
                    return Err(CoreError::malformed_id("proposition", s));
                }
                Ok(PropositionId::Definition { n })
            }
            ["sum", orientation, r, o1, o2] => {
                let result_first = match *orientation {
                    "1" => true,
                    "0" => false,
                    _ => return Err(CoreError::malformed_id("proposition", s)),
                };
                let r = parse_wire_num(s, r)?;
                let o1 = parse_wire_num(s, o1)?;
                let o2 = parse_wire_num(s, o2)?;
                // Normalizes the collapsed spelling back to `defn.r`.
                Ok(PropositionId::sum(r, o1, o2, result_first))
            }
            ["temp", "1", a, b, c] => Ok(PropositionId::SuccShifted {
                a: parse_wire_num(s, a)?,
                b: parse_wire_num(s, b)?,
                c: parse_wire_num(s, c)?,
            }),
            ["temp", "2", a, b, c] => Ok(PropositionId::SuccBothSides {
                a: parse_wire_num(s, a)?,
                b: parse_wire_num(s, b)?,
                c: parse_wire_num(s, c)?,
            }),
            _ => Err(CoreError::malformed_id("proposition", s)),
        }
    }
}

/// Identifier of one argument.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArgumentId {
    /// Conclusion derived from premises.
    Derived {
        conclusion: PropositionId,
        premises: Vec<PropositionId>,
    },
    /// Conclusion vouched for by an external machine.
    MachineChecked {
        conclusion: PropositionId,
        machine: String,
    },
}

impl ArgumentId {
    pub fn conclusion(&self) -> &PropositionId {
        match self {
            ArgumentId::Derived { conclusion, .. } => conclusion,
            ArgumentId::MachineChecked { conclusion, .. } => conclusion,
        }
    }

    /// Ephemeral pointer for this argument. Pointer-reserved characters
    /// from embedded resource ids are dropped.
    pub fn pointer(&self) -> String {
        let sanitized: String = self
            .to_string()
            .chars()
            .filter(|c| *c != '#' && *c != '/')
            .collect();
        format!("#A~{sanitized}")
    }

    /// Materialize as a platform argument, premise and conclusion ids
    /// replaced by citable pointers.
    pub fn to_argument(&self) -> Argument {
        match self {
            ArgumentId::Derived {
                conclusion,
                premises,
            } => Argument::derived(
                conclusion.pointer(),
                premises.iter().map(PropositionId::pointer).collect(),
            )
            .with_ephemeral_ptr(self.pointer()),
            ArgumentId::MachineChecked {
                conclusion,
                machine,
            } => Argument::machine_checked(conclusion.pointer(), machine.clone())
                .with_ephemeral_ptr(self.pointer()),
        }
    }
}

impl fmt::Display for ArgumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentId::Derived {
                conclusion,
                premises,
            } => {
                write!(f, "{conclusion}")?;
                for premise in premises {
                    write!(f, "-{premise}")?;
                }
                Ok(())
            }
            ArgumentId::MachineChecked {
                conclusion,
                machine,
            } => write!(f, "PM{conclusion}-{machine}"),
        }
    }
}

impl FromStr for ArgumentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix("PM") {
            let (conclusion, machine) = rest
                .split_once('-')
                .ok_or_else(|| CoreError::malformed_id("argument", s))?;
            if machine.is_empty() || machine.contains('-') {
                return Err(CoreError::malformed_id("argument", s));
            }
            return Ok(ArgumentId::MachineChecked {
                conclusion: conclusion.parse()?,
                machine: machine.to_string(),
            });
        }
        let mut parts = s.split('-');
        let conclusion = match parts.next() {
            Some(first) => first.parse::<PropositionId>()?,
            None => return Err(CoreError::malformed_id("argument", s)),
        };
        let premises = parts
            .map(str::parse::<PropositionId>)
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(ArgumentId::Derived {
            conclusion,
            premises,
        })
    }
}

fn parse_wire_num(whole: &str, digits: &str) -> CoreResult<BigUint> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::malformed_id("proposition", whole.to_string()));
    }
    digits
        .parse::<BigUint>()
        .map_err(|_| CoreError::malformed_id("proposition", whole.to_string()))
}
