//! Positional argument checks for the `create` operation.
//!
//! The default policy only looks at argument count and blankness. The strict
//! policy is an opt-in extra pass over character classes and never runs
//! unless the permissive checks already passed.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Argument layout
// ---------------------------------------------------------------------------

/// Index of the asset id (also the ledger key).
pub const ARG_ID: usize = 1;
pub const ARG_SERIAL_NUMBER: usize = 2;
pub const ARG_ASSET_TYPE: usize = 3;
pub const ARG_OWNER_NAME: usize = 4;
pub const ARG_DESCRIPTION: usize = 5;
pub const ARG_BUSINESS_PROVIDER_ID: usize = 6;
/// Optional, pre-encoded image payload.
pub const ARG_ENCODED_IMAGE: usize = 7;
/// Optional, pre-encoded attachment payload.
pub const ARG_ENCODED_FILES: usize = 8;

/// Minimum argument count for `create`, tag included.
pub const CREATE_MIN_ARGS: usize = 7;

/// Indices that must be non-blank, in reporting order.
const REQUIRED_INDICES: std::ops::RangeInclusive<usize> = ARG_ID..=ARG_BUSINESS_PROVIDER_ID;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// How much checking `create` arguments receive beyond count and blankness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    #[default]
    Permissive,
    Strict,
}

impl ValidationPolicy {
    /// Parse a policy name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "permissive" => Some(Self::Permissive),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

const LETTER: &str = "[a-zA-ZáéíóúÁÉÍÓÚñÑ]";
const LETTER_OR_DIGIT: &str = "[a-zA-Z0-9áéíóúÁÉÍÓÚñÑ]";

/// Words of letters separated by single whitespace characters.
static LETTERS_WITH_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:{LETTER}+\s?)*{LETTER}$")).expect("valid regex")
});

static LETTERS_AND_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{LETTER_OR_DIGIT}+$")).expect("valid regex"));

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate `create` arguments (index 0 is the operation tag).
///
/// Every blank required field is reported in one error, ascending by index.
pub fn validate_create_args(args: &[String], policy: ValidationPolicy) -> Result<(), CoreError> {
    if args.len() < CREATE_MIN_ARGS {
        return Err(CoreError::ArgumentCount {
            expected: format!("at least {CREATE_MIN_ARGS}"),
            actual: args.len(),
        });
    }

    let blank: Vec<usize> = REQUIRED_INDICES.filter(|&i| is_blank(&args[i])).collect();
    if !blank.is_empty() {
        return Err(CoreError::Validation(join_violations(&blank, "must not be blank")));
    }

    if policy == ValidationPolicy::Strict {
        validate_character_classes(args)?;
    }

    Ok(())
}

fn validate_character_classes(args: &[String]) -> Result<(), CoreError> {
    let checks: [(usize, &Regex); 2] = [
        (ARG_SERIAL_NUMBER, &*LETTERS_AND_DIGITS),
        (ARG_OWNER_NAME, &*LETTERS_WITH_SPACE),
    ];

    let invalid: Vec<usize> = checks
        .iter()
        .filter(|(i, re)| !re.is_match(args[*i].trim()))
        .map(|(i, _)| *i)
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(join_violations(
            &invalid,
            "has invalid characters",
        )))
    }
}

fn join_violations(indices: &[usize], reason: &str) -> String {
    indices
        .iter()
        .map(|i| format!("[element at index {i} {reason}]"))
        .collect::<Vec<_>>()
        .join(" ")
}
