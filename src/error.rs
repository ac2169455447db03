/*!
# Signet: Errors

Signatures and argument vectors fail in different ways, for different
audiences, so each stage gets its own error type:

* [`CompileError`] is a programmer error: the signature itself is malformed.
* [`MatchError`] is a user error: the arguments don't fit the signature.
* [`ConversionError`] comes from the typed [`ResultSet`](crate::ResultSet) accessors.
*/

use std::num::ParseIntError;
use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Signature Compilation Error.
pub enum CompileError {
	/// # Empty Group.
	///
	/// The signature contains a `{}`.
	#[error("Flag cannot be empty; syntax like {{}} is not acceptable.")]
	EmptyFlagToken,

	/// # Positional After Array.
	///
	/// The named positional was declared after an array positional.
	#[error("The `{0}` argument cannot follow an array argument.")]
	ArrayPositionalNotLast(String),

	/// # Duplicate Option.
	#[error("The `{0}` option is declared more than once.")]
	DuplicateOptionName(String),
}

impl CompileError {
	#[must_use]
	/// # As Str.
	///
	/// Return a short, static description of the error kind.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::EmptyFlagToken => "Empty flag token.",
			Self::ArrayPositionalNotLast(_) => "Array argument must be last.",
			Self::DuplicateOptionName(_) => "Duplicate option name.",
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Argument Matching Error.
///
/// These are the result of bad user input, and are meant to be printed.
pub enum MatchError {
	/// # Undeclared Option.
	#[error("The `--{0}` option does not exist.")]
	UnknownOption(String),

	/// # Value Given to a Switch.
	#[error("The `--{0}` option does not accept a value.")]
	OptionValueNotAccepted(String),

	/// # Second Value Given to a Single-Value Option.
	///
	/// This is the same value-conflict class as
	/// [`MatchError::OptionValueNotAccepted`]: the option has no room left
	/// for the value. It fires when a non-array option that was already
	/// recorded, with or without a value, turns up again with one.
	#[error("The `--{0}` option does not accept an array of values.")]
	OptionArrayNotAccepted(String),

	/// # Missing Option Value.
	#[error("The `--{0}` option requires a value.")]
	OptionValueRequired(String),

	/// # Bundle With Value.
	///
	/// Something like `-abc=x`; it isn't clear which key the value belongs to.
	#[error("The `-{0}` options cannot accept values.")]
	AmbiguousBundledOptionValue(String),

	/// # Too Many Arguments.
	///
	/// This holds the first token with nowhere to go.
	#[error("Too many arguments (unexpected: {0}).")]
	TooManyPositionalArguments(String),

	/// # Missing Required Arguments.
	#[error("Not enough arguments (missing: {}).", .0.join(", "))]
	MissingRequiredArguments(Vec<String>),
}

impl MatchError {
	#[must_use]
	#[expect(clippy::unused_self, reason = "Every variant is a usage error.")]
	/// # Exit Code.
	///
	/// Matching errors are usage errors, so this is always `2`.
	pub const fn exit_code(&self) -> i32 { 2 }

	#[must_use]
	/// # As Str.
	///
	/// Return a short, static description of the error kind.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::UnknownOption(_) => "Unknown option.",
			Self::OptionValueNotAccepted(_) => "Option does not accept a value.",
			Self::OptionArrayNotAccepted(_) => "Option does not accept multiple values.",
			Self::OptionValueRequired(_) => "Option requires a value.",
			Self::AmbiguousBundledOptionValue(_) => "Bundled options cannot have values.",
			Self::TooManyPositionalArguments(_) => "Too many arguments.",
			Self::MissingRequiredArguments(_) => "Missing required arguments.",
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Value Conversion Error.
pub enum ConversionError {
	/// # No Value.
	///
	/// Nothing was recorded for the name at that index.
	#[error("No value for `{name}` at index {index}.")]
	Missing {
		/// # Name.
		name: String,

		/// # Index.
		index: usize,
	},

	/// # Bad Integer.
	#[error("Invalid integer for `{name}`: {value:?}.")]
	Invalid {
		/// # Name.
		name: String,

		/// # Raw Value.
		value: String,

		/// # Parse Error.
		#[source]
		source: ParseIntError,
	},

	/// # Bad Value.
	///
	/// The generic [`ResultSet::parse`](crate::ResultSet::parse) failed; the
	/// underlying error is flattened to text since its type is arbitrary.
	#[error("Invalid value for `{name}`: {value:?} ({reason}).")]
	Unparseable {
		/// # Name.
		name: String,

		/// # Raw Value.
		value: String,

		/// # Reason.
		reason: String,
	},
}
