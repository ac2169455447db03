/*!
# Signet: Result Set
*/

use crate::ConversionError;
use indexmap::IndexMap;
use std::str::FromStr;



#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
/// # Result Set.
///
/// This holds everything a [`Matcher`](crate::Matcher) recorded, keyed by
/// name, in the order names were first seen.
///
/// Positional arguments and options live in separate namespaces, but the
/// general accessors ([`ResultSet::has`], [`ResultSet::first`],
/// [`ResultSet::get`], [`ResultSet::all`]) look through both, checking
/// arguments first. Use [`ResultSet::argument`] or [`ResultSet::option`] to
/// be explicit.
///
/// A name with an empty value list was seen without a value, e.g. a switch.
/// That still counts as [`ResultSet::has`].
///
/// ## Examples
///
/// ```
/// let registry = signet::FlagRegistry::compile("{n} {-v} {--tag=*}").unwrap();
/// let result = registry.matches(&["-v", "12", "--tag=a", "--tag", "b"]).unwrap();
///
/// assert!(result.flag("v"));
/// assert_eq!(result.as_int("n", 0), Ok(12));
/// assert_eq!(result.all("tag"), ["a", "b"]);
/// assert!(! result.has("nope"));
/// ```
pub struct ResultSet {
	/// # Positional Arguments.
	arguments: IndexMap<String, Vec<String>>,

	/// # Options.
	options: IndexMap<String, Vec<String>>,
}

impl ResultSet {
	/// # Record Argument Value(s).
	pub(crate) fn push_argument<I>(&mut self, name: &str, values: I)
	where I: IntoIterator<Item=String> {
		if let Some(v) = self.arguments.get_mut(name) { v.extend(values); }
		else { self.arguments.insert(name.to_owned(), values.into_iter().collect()); }
	}

	/// # Record Option Value(s).
	pub(crate) fn push_option<I>(&mut self, name: &str, values: I)
	where I: IntoIterator<Item=String> {
		if let Some(v) = self.options.get_mut(name) { v.extend(values); }
		else { self.options.insert(name.to_owned(), values.into_iter().collect()); }
	}

	/// # Number of Recorded Arguments.
	pub(crate) fn argument_count(&self) -> usize { self.arguments.len() }

	/// # Has Argument?
	pub(crate) fn has_argument(&self, name: &str) -> bool {
		self.arguments.contains_key(name)
	}
}

impl ResultSet {
	#[must_use]
	/// # Has Name?
	///
	/// Returns `true` if the name was recorded at all, including switches,
	/// valueless options, and default substitutions.
	pub fn has(&self, name: &str) -> bool {
		self.arguments.contains_key(name) || self.options.contains_key(name)
	}

	#[must_use]
	/// # Flag.
	///
	/// An alias of [`ResultSet::has`] that reads better for switches.
	pub fn flag(&self, name: &str) -> bool { self.has(name) }

	#[must_use]
	/// # First Value.
	pub fn first(&self, name: &str) -> Option<&str> { self.get(name, 0) }

	#[must_use]
	/// # Value at Index.
	pub fn get(&self, name: &str, index: usize) -> Option<&str> {
		self.all(name).get(index).map(String::as_str)
	}

	#[must_use]
	/// # All Values.
	///
	/// Unrecorded names return an empty slice. (Use [`ResultSet::has`] to
	/// tell the difference between that and a valueless option.)
	pub fn all(&self, name: &str) -> &[String] {
		self.argument(name)
			.or_else(|| self.option(name))
			.unwrap_or_default()
	}

	#[must_use]
	/// # Argument Values.
	///
	/// Return the values for a positional argument, if it was recorded.
	pub fn argument(&self, name: &str) -> Option<&[String]> {
		self.arguments.get(name).map(Vec::as_slice)
	}

	#[must_use]
	/// # Option Values.
	///
	/// Return the values for an option, if it was recorded.
	pub fn option(&self, name: &str) -> Option<&[String]> {
		self.options.get(name).map(Vec::as_slice)
	}

	/// # Integer Value.
	///
	/// ## Errors
	///
	/// Returns an error if there is no value at `index` or it is not a
	/// valid integer.
	pub fn as_int(&self, name: &str, index: usize) -> Result<i64, ConversionError> {
		let value = self.required(name, index)?;
		value.parse::<i64>().map_err(|source| ConversionError::Invalid {
			name: name.to_owned(),
			value: value.to_owned(),
			source,
		})
	}

	/// # Parse Value.
	///
	/// Parse the value at `index` into any [`FromStr`] type.
	///
	/// ## Examples
	///
	/// ```
	/// use std::path::PathBuf;
	///
	/// let registry = signet::FlagRegistry::compile("{path} {--ratio=}").unwrap();
	/// let result = registry.matches(&["/tmp", "--ratio=0.5"]).unwrap();
	/// assert_eq!(result.parse::<PathBuf>("path", 0), Ok(PathBuf::from("/tmp")));
	/// assert_eq!(result.parse::<f64>("ratio", 0), Ok(0.5));
	/// ```
	///
	/// ## Errors
	///
	/// Returns an error if there is no value at `index` or it cannot be
	/// parsed.
	pub fn parse<T>(&self, name: &str, index: usize) -> Result<T, ConversionError>
	where T: FromStr, T::Err: std::fmt::Display {
		let value = self.required(name, index)?;
		value.parse::<T>().map_err(|e| ConversionError::Unparseable {
			name: name.to_owned(),
			value: value.to_owned(),
			reason: e.to_string(),
		})
	}

	#[must_use]
	/// # Length.
	///
	/// Return the number of recorded names across both namespaces.
	pub fn len(&self) -> usize { self.arguments.len() + self.options.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool {
		self.arguments.is_empty() && self.options.is_empty()
	}

	/// # Iterate.
	///
	/// Yield `(name, values)` pairs, arguments first, each in recording
	/// order.
	pub fn iter(&self) -> impl Iterator<Item=(&str, &[String])> {
		self.arguments.iter()
			.chain(self.options.iter())
			.map(|(k, v)| (k.as_str(), v.as_slice()))
	}

	/// # Required Value.
	fn required(&self, name: &str, index: usize) -> Result<&str, ConversionError> {
		self.get(name, index).ok_or_else(|| ConversionError::Missing {
			name: name.to_owned(),
			index,
		})
	}
}
