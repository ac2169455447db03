/*!
# Signet: Flag Registry
*/

use crate::{
	compile,
	CompileError,
	FlagSpec,
	Matcher,
	MatchError,
	ResultSet,
};
use std::{
	collections::HashMap,
	fmt,
	str::FromStr,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Flag Registry.
///
/// This wraps a compiled signature, indexing options by name and positional
/// arguments by declaration order so the [`Matcher`] can classify tokens
/// without searching.
///
/// A registry is immutable once built and can be shared freely between
/// threads; every match works from its own state.
///
/// ## Examples
///
/// ```
/// use signet::FlagRegistry;
///
/// let registry: FlagRegistry = "{file} {--out=}".parse().unwrap();
/// let result = registry.matches(&["in.txt", "--out", "out.txt"]).unwrap();
/// assert_eq!(result.first("file"), Some("in.txt"));
/// assert_eq!(result.first("out"), Some("out.txt"));
/// ```
pub struct FlagRegistry {
	/// # Specs (Declaration Order).
	specs: Vec<FlagSpec>,

	/// # Option Indices, by Name.
	options: HashMap<String, usize>,

	/// # Positional Indices.
	positionals: Vec<usize>,
}

impl fmt::Display for FlagRegistry {
	/// # Canonical Signature.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut iter = self.specs.iter();
		if let Some(first) = iter.next() {
			fmt::Display::fmt(first, f)?;
			for spec in iter { write!(f, " {spec}")?; }
		}
		Ok(())
	}
}

impl FromStr for FlagRegistry {
	type Err = CompileError;

	#[inline]
	fn from_str(src: &str) -> Result<Self, Self::Err> { Self::compile(src) }
}

impl TryFrom<Vec<FlagSpec>> for FlagRegistry {
	type Error = CompileError;

	#[inline]
	fn try_from(specs: Vec<FlagSpec>) -> Result<Self, Self::Error> { Self::new(specs) }
}

impl FlagRegistry {
	/// # New.
	///
	/// Index a list of specs.
	///
	/// ## Errors
	///
	/// Lists straight from [`compile`] always pass, but because lists can
	/// be merged by hand, the same invariants are checked again here: option
	/// names must be unique and an array positional must come last.
	pub fn new(specs: Vec<FlagSpec>) -> Result<Self, CompileError> {
		let mut options = HashMap::new();
		let mut positionals: Vec<usize> = Vec::new();

		for (idx, spec) in specs.iter().enumerate() {
			if spec.is_argument() {
				if positionals.last().is_some_and(|&last| specs[last].is_array()) {
					return Err(CompileError::ArrayPositionalNotLast(spec.name().to_owned()));
				}
				positionals.push(idx);
			}
			else if options.insert(spec.name().to_owned(), idx).is_some() {
				return Err(CompileError::DuplicateOptionName(spec.name().to_owned()));
			}
		}

		Ok(Self { specs, options, positionals })
	}

	/// # Compile.
	///
	/// Compile a signature and index the result in one go.
	///
	/// ## Errors
	///
	/// See [`compile`].
	pub fn compile(pattern: &str) -> Result<Self, CompileError> {
		compile(pattern).and_then(Self::new)
	}

	/// # Match Tokens.
	///
	/// Shorthand for `Matcher::new(self, tokens).run()`.
	///
	/// ## Errors
	///
	/// See [`Matcher::run`].
	pub fn matches<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ResultSet, MatchError> {
		Matcher::new(self, tokens).run()
	}
}

impl FlagRegistry {
	#[must_use]
	/// # Specs.
	///
	/// Return every spec in declaration order.
	pub fn specs(&self) -> &[FlagSpec] { &self.specs }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.specs.is_empty() }

	#[must_use]
	/// # Option by Name.
	///
	/// The name should not include dashes. Short and long options share one
	/// namespace.
	pub fn option(&self, name: &str) -> Option<&FlagSpec> {
		self.options.get(name).map(|&idx| &self.specs[idx])
	}

	#[must_use]
	/// # Positional by Index.
	///
	/// The index counts positional arguments only; options are skipped.
	pub fn positional(&self, index: usize) -> Option<&FlagSpec> {
		self.positionals.get(index).map(|&idx| &self.specs[idx])
	}

	/// # Positional Arguments.
	pub fn positionals(&self) -> impl Iterator<Item=&FlagSpec> {
		self.positionals.iter().map(move |&idx| &self.specs[idx])
	}

	/// # Options.
	pub fn options(&self) -> impl Iterator<Item=&FlagSpec> {
		self.specs.iter().filter(|s| s.is_option())
	}

	#[must_use]
	/// # Required Positional Names.
	///
	/// Return the names of the required positional arguments, in order.
	pub fn required_positional_names(&self) -> Vec<&str> {
		self.positionals()
			.filter(|s| s.is_required())
			.map(FlagSpec::name)
			.collect()
	}

	#[must_use]
	/// # Usage Line.
	///
	/// Render a one-line synopsis for the signature, options first:
	///
	/// ```
	/// let registry = signet::FlagRegistry::compile(
	///     "{src} {dst?} {-v} {--out=+} {--lvl=3}"
	/// ).unwrap();
	/// assert_eq!(
	///     registry.usage("copy"),
	///     "copy [-v] [--out=<out>...] [--lvl[=<lvl>]] <src> [dst]",
	/// );
	/// ```
	pub fn usage(&self, command: &str) -> String {
		let mut out = command.to_owned();

		for spec in self.options() {
			out.push_str(" [");
			out.push_str(&spec.key());
			if spec.accepts_value() {
				let bracket = ! spec.is_required();
				if bracket { out.push('['); }
				out.push_str("=<");
				out.push_str(spec.name());
				out.push('>');
				if bracket { out.push(']'); }
				if spec.is_array() { out.push_str("..."); }
			}
			out.push(']');
		}

		for spec in self.positionals() {
			out.push(' ');
			let (open, close) = if spec.is_required() { ('<', '>') } else { ('[', ']') };
			out.push(open);
			out.push_str(spec.name());
			if spec.is_array() { out.push_str("..."); }
			out.push(close);
		}

		out
	}
}
