//! Net identities
//!
//! Every label occurrence on every conductor gets its own identity; two
//! conductors both labelled "VDD" start life as distinct identities sharing a
//! display text. Whether they end up merged (one net) or not (an open) is
//! decided by the geometry, never by the text.

use std::collections::HashMap;
use std::fmt;

/// Identity of a net.
///
/// The derived ordering is load-bearing: named identities sort before
/// anonymous ones, named identities sort by text then disambiguation
/// counter, and the merge logic keeps whichever identity sorts first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetName {
    Named { text: String, subname: u32 },
    Anonymous { id: u64 },
}

impl NetName {
    pub fn text(&self) -> Option<&str> {
        match self {
            NetName::Named { text, .. } => Some(text),
            NetName::Anonymous { .. } => None,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, NetName::Named { .. })
    }
}

impl fmt::Display for NetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetName::Named { text, subname: 0 } => write!(f, "{text}"),
            NetName::Named { text, subname } => write!(f, "{text}__{subname}"),
            NetName::Anonymous { id } => write!(f, "<anon{id}>"),
        }
    }
}

/// Issues fresh identities: a per-text counter for named nets and a single
/// counter for anonymous ones.
#[derive(Debug, Default)]
pub struct NameGenerator {
    counts: HashMap<String, u32>,
    anonymous: u64,
}

impl NameGenerator {
    pub fn named(&mut self, text: &str) -> NetName {
        let count = self.counts.entry(text.to_string()).or_insert(0);
        let subname = *count;
        *count += 1;
        NetName::Named { text: text.to_string(), subname }
    }

    pub fn anonymous(&mut self) -> NetName {
        let id = self.anonymous;
        self.anonymous += 1;
        NetName::Anonymous { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_text_gets_distinct_identities() {
        let mut namer = NameGenerator::default();
        let a0 = namer.named("A");
        let a1 = namer.named("A");
        assert_ne!(a0, a1);
        assert_eq!(a0.text(), a1.text());
        assert!(a0 < a1);
    }

    #[test]
    fn test_named_sorts_before_anonymous() {
        let mut namer = NameGenerator::default();
        let anon = namer.anonymous();
        let named = namer.named("ZZZ");
        assert!(named < anon);
    }

    #[test]
    fn test_named_ordering_is_text_then_counter() {
        let mut namer = NameGenerator::default();
        let b0 = namer.named("B");
        let a0 = namer.named("A");
        let a1 = namer.named("A");
        assert!(a0 < a1);
        assert!(a1 < b0);
    }

    #[test]
    fn test_anonymous_identities_are_distinct() {
        let mut namer = NameGenerator::default();
        let x = namer.anonymous();
        let y = namer.anonymous();
        assert_ne!(x, y);
        assert!(x < y);
    }

    #[test]
    fn test_display() {
        let mut namer = NameGenerator::default();
        assert_eq!(namer.named("VDD").to_string(), "VDD");
        assert_eq!(namer.named("VDD").to_string(), "VDD__1");
    }
}
