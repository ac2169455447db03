/*!
# Signet: Flag Specifications
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// # Flag Category.
pub enum Category {
	/// # Positional Argument.
	Argument,

	/// # Short Option (`-k`).
	Short,

	/// # Long Option (`--key`).
	Long,
}

impl Category {
	#[must_use]
	/// # Dash Prefix.
	///
	/// Return the leading dashes used by the category, if any.
	pub const fn prefix(self) -> &'static str {
		match self {
			Self::Argument => "",
			Self::Short => "-",
			Self::Long => "--",
		}
	}
}



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// # Presence.
///
/// For positional arguments, this says whether the argument itself must be
/// supplied. Options are always optional to specify, so for them it instead
/// says whether a _value_ must follow.
pub enum Presence {
	#[default]
	/// # Required.
	Required,

	/// # Optional.
	Optional,
}



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// # Cardinality.
pub enum Cardinality {
	#[default]
	/// # One Value.
	Single,

	/// # Many Values.
	Array,
}



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// # Option Value Policy.
///
/// Positional arguments are values, so always report `Required` here.
pub enum ValuePolicy {
	#[default]
	/// # Switch; No Value Allowed.
	None,

	/// # Value Allowed.
	Optional,

	/// # Value Mandatory.
	Required,
}



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// # Flag Specification.
///
/// One declared positional argument or option. These are produced by
/// [`compile`](crate::compile) and are immutable thereafter.
///
/// ## Examples
///
/// ```
/// use signet::{Cardinality, Category, Presence};
///
/// let specs = signet::compile("{files?* : Input files.}").unwrap();
/// assert_eq!(specs[0].category(), Category::Argument);
/// assert_eq!(specs[0].name(), "files");
/// assert_eq!(specs[0].presence(), Presence::Optional);
/// assert_eq!(specs[0].cardinality(), Cardinality::Array);
/// assert_eq!(specs[0].description(), "Input files.");
/// ```
pub struct FlagSpec {
	/// # Category.
	category: Category,

	/// # Name (No Dashes).
	name: String,

	/// # Presence.
	presence: Presence,

	/// # Cardinality.
	cardinality: Cardinality,

	/// # Value Policy.
	value_policy: ValuePolicy,

	/// # Default Value.
	///
	/// Never `Some("")`.
	default: Option<String>,

	/// # Description.
	description: String,
}

impl fmt::Display for FlagSpec {
	/// # Canonical Signature Group.
	///
	/// Render the flag back into signature syntax. Compiling the output
	/// yields an equal spec.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		f.write_str(self.category.prefix())?;
		f.write_str(&self.name)?;

		if self.is_argument() {
			match (self.presence, self.cardinality, self.default.as_deref()) {
				(Presence::Required, Cardinality::Single, _) => {},
				(Presence::Optional, Cardinality::Single, None) => f.write_str("?")?,
				(Presence::Optional, Cardinality::Single, Some(d)) => write!(f, "={d}")?,
				(Presence::Required, Cardinality::Array, _) => f.write_str("*")?,
				(Presence::Optional, Cardinality::Array, _) => f.write_str("?*")?,
			}
		}
		else {
			match (self.value_policy, self.cardinality, self.default.as_deref()) {
				(ValuePolicy::None, _, _) => {},
				(ValuePolicy::Optional, Cardinality::Single, None) => f.write_str("=")?,
				(ValuePolicy::Optional, Cardinality::Single, Some(d)) => write!(f, "={d}")?,
				(ValuePolicy::Optional, Cardinality::Array, _) => f.write_str("=*")?,
				(ValuePolicy::Required, _, _) => f.write_str("=+")?,
			}
		}

		if ! self.description.is_empty() {
			write!(f, " : {}", self.description)?;
		}

		f.write_str("}")
	}
}

impl FlagSpec {
	/// # New Positional Argument.
	pub(crate) fn argument(
		name: &str,
		presence: Presence,
		cardinality: Cardinality,
		default: Option<&str>,
		description: &str,
	) -> Self {
		Self {
			category: Category::Argument,
			name: name.to_owned(),
			presence,
			cardinality,
			value_policy: ValuePolicy::Required,
			default: default.filter(|d| ! d.is_empty()).map(str::to_owned),
			description: description.to_owned(),
		}
	}

	/// # New Option.
	///
	/// A switch (`ValuePolicy::None`) never carries a default or array
	/// cardinality; those are normalized away here.
	pub(crate) fn option(
		category: Category,
		name: &str,
		value_policy: ValuePolicy,
		cardinality: Cardinality,
		default: Option<&str>,
		description: &str,
	) -> Self {
		let switch = matches!(value_policy, ValuePolicy::None);
		Self {
			category,
			name: name.to_owned(),
			presence:
				if matches!(value_policy, ValuePolicy::Required) { Presence::Required }
				else { Presence::Optional },
			cardinality: if switch { Cardinality::Single } else { cardinality },
			value_policy,
			default:
				if switch { None }
				else { default.filter(|d| ! d.is_empty()).map(str::to_owned) },
			description: description.to_owned(),
		}
	}
}

impl FlagSpec {
	#[must_use]
	/// # Category.
	pub const fn category(&self) -> Category { self.category }

	#[must_use]
	/// # Name.
	///
	/// This never includes leading dashes.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Presence.
	pub const fn presence(&self) -> Presence { self.presence }

	#[must_use]
	/// # Cardinality.
	pub const fn cardinality(&self) -> Cardinality { self.cardinality }

	#[must_use]
	/// # Value Policy.
	pub const fn value_policy(&self) -> ValuePolicy { self.value_policy }

	#[must_use]
	/// # Default Value.
	pub fn default_value(&self) -> Option<&str> { self.default.as_deref() }

	#[must_use]
	/// # Description.
	pub fn description(&self) -> &str { &self.description }

	#[must_use]
	/// # Is Positional Argument?
	pub const fn is_argument(&self) -> bool {
		matches!(self.category, Category::Argument)
	}

	#[must_use]
	/// # Is Option?
	pub const fn is_option(&self) -> bool { ! self.is_argument() }

	#[must_use]
	/// # Is Array?
	pub const fn is_array(&self) -> bool {
		matches!(self.cardinality, Cardinality::Array)
	}

	#[must_use]
	/// # Is Required?
	///
	/// See [`Presence`] for what this means for options.
	pub const fn is_required(&self) -> bool {
		matches!(self.presence, Presence::Required)
	}

	#[must_use]
	/// # Accepts a Value?
	pub const fn accepts_value(&self) -> bool {
		! matches!(self.value_policy, ValuePolicy::None)
	}

	#[must_use]
	/// # Display Key.
	///
	/// Options get their dashes back; positional arguments are returned as-is.
	pub fn key(&self) -> String {
		let mut out = String::with_capacity(self.name.len() + 2);
		out.push_str(self.category.prefix());
		out.push_str(&self.name);
		out
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_switch_normalization() {
		let spec = FlagSpec::option(
			Category::Short,
			"v",
			ValuePolicy::None,
			Cardinality::Array,
			Some("nope"),
			"",
		);
		assert_eq!(spec.cardinality(), Cardinality::Single);
		assert!(spec.default_value().is_none());
		assert!(! spec.accepts_value());
		assert_eq!(spec.key(), "-v");
		assert_eq!(spec.to_string(), "{-v}");
	}

	#[test]
	fn t_display() {
		for (spec, expected) in [
			(
				FlagSpec::argument("file", Presence::Required, Cardinality::Single, None, ""),
				"{file}",
			),
			(
				FlagSpec::argument("file", Presence::Optional, Cardinality::Single, Some(""), "Path."),
				"{file? : Path.}",
			),
			(
				FlagSpec::argument("user", Presence::Optional, Cardinality::Single, Some("ionut"), ""),
				"{user=ionut}",
			),
			(
				FlagSpec::argument("rest", Presence::Optional, Cardinality::Array, None, ""),
				"{rest?*}",
			),
			(
				FlagSpec::option(Category::Long, "out", ValuePolicy::Required, Cardinality::Array, None, "Out."),
				"{--out=+ : Out.}",
			),
			(
				FlagSpec::option(Category::Long, "lvl", ValuePolicy::Optional, Cardinality::Single, Some("3"), ""),
				"{--lvl=3}",
			),
		] {
			assert_eq!(spec.to_string(), expected);
		}
	}
}
