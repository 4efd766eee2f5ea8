//! Pattern rules for street-line cleanup, one per step.
//!
//! Order matters: [`separate_house_number`] also splits ordinal street names
//! (`431 6th St` becomes `431 6 th St`), and [`rejoin_ordinal_suffix`] undoes
//! exactly that split. The pipeline itself uses [`crate::StreetLine`], which
//! never produces the split in the first place.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use addr_model::NormalizationOptions;

static UNIT_DESIGNATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r", Unit [0-9]+").expect("Invalid unit designator regex"));

static NUMBER_LETTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*([A-Za-z])").expect("Invalid number/letter regex")
});

static SPLIT_ORDINAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s+(th|nd)\b").expect("Invalid ordinal regex"));

/// A single street-line rewrite step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressRule {
    /// Remove `", Unit <digits>"`.
    StripUnit,
    /// Put one space between a digit run and a following letter.
    SeparateNumber,
    /// Remove the space between digits and a `th`/`nd` suffix.
    RejoinOrdinal,
}

impl AddressRule {
    /// Rules in application order.
    pub const ORDER: [AddressRule; 3] = [
        AddressRule::StripUnit,
        AddressRule::SeparateNumber,
        AddressRule::RejoinOrdinal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressRule::StripUnit => "strip unit",
            AddressRule::SeparateNumber => "separate number",
            AddressRule::RejoinOrdinal => "rejoin ordinal",
        }
    }

    pub fn apply(&self, value: &str) -> String {
        match self {
            AddressRule::StripUnit => strip_unit_designator(value),
            AddressRule::SeparateNumber => separate_house_number(value),
            AddressRule::RejoinOrdinal => rejoin_ordinal_suffix(value),
        }
    }

    /// Whether `options` enables this rule. The ordinal repair only runs
    /// together with number separation.
    pub fn is_enabled(&self, options: &NormalizationOptions) -> bool {
        match self {
            AddressRule::StripUnit => options.strip_units,
            AddressRule::SeparateNumber | AddressRule::RejoinOrdinal => options.separate_numbers,
        }
    }
}

/// Remove every `", Unit <digits>"` designator.
///
/// Other designators (`Apt`, `Suite`, `#`) are left alone.
///
/// ```
/// use addr_normalize::strip_unit_designator;
///
/// assert_eq!(strip_unit_designator("3640 Oak Creek Dr, Unit 10"), "3640 Oak Creek Dr");
/// assert_eq!(strip_unit_designator("12 Elm St, Apt 4"), "12 Elm St, Apt 4");
/// ```
pub fn strip_unit_designator(value: &str) -> String {
    UNIT_DESIGNATOR_REGEX.replace_all(value, "").into_owned()
}

/// Separate a digit run from an immediately following letter with one space.
///
/// ```
/// use addr_normalize::separate_house_number;
///
/// assert_eq!(separate_house_number("9690Canon Way"), "9690 Canon Way");
/// assert_eq!(separate_house_number("431 6th St"), "431 6 th St");
/// ```
pub fn separate_house_number(value: &str) -> String {
    NUMBER_LETTER_REGEX.replace_all(value, "$1 $2").into_owned()
}

/// Rejoin digits with a following `th`/`nd` token.
///
/// ```
/// use addr_normalize::rejoin_ordinal_suffix;
///
/// assert_eq!(rejoin_ordinal_suffix("431 6 th St"), "431 6th St");
/// assert_eq!(rejoin_ordinal_suffix("12 thompson Rd"), "12 thompson Rd");
/// ```
pub fn rejoin_ordinal_suffix(value: &str) -> String {
    SPLIT_ORDINAL_REGEX.replace_all(value, "${1}${2}").into_owned()
}

/// Apply every rule enabled by `options`, in order.
pub fn apply_rules(value: &str, options: &NormalizationOptions) -> String {
    AddressRule::ORDER
        .iter()
        .filter(|rule| rule.is_enabled(options))
        .fold(value.to_string(), |current, rule| rule.apply(&current))
}

/// Output of each enabled rule, in order.
pub fn trace_rules(value: &str, options: &NormalizationOptions) -> Vec<(AddressRule, String)> {
    let mut current = value.to_string();
    let mut steps = Vec::new();
    for rule in AddressRule::ORDER {
        if !rule.is_enabled(options) {
            continue;
        }
        current = rule.apply(&current);
        steps.push((rule, current.clone()));
    }
    steps
}
