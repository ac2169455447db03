/*!
# Signet: Matcher
*/

use crate::{
	FlagRegistry,
	FlagSpec,
	MatchError,
	ResultSet,
	ValuePolicy,
};



#[derive(Debug)]
/// # Matcher.
///
/// A single-use scanner that walks a token list left to right, checking each
/// entry against a [`FlagRegistry`] and recording what it finds into a fresh
/// [`ResultSet`].
///
/// ## Tokens
///
/// * Anything beginning with `-` is an option, except for a bare `-` or `--`;
/// * `--key` and `--key=val` are long options;
/// * `-k` and `-k=val` are short options;
/// * `-abc` is a bundle, equivalent to `-a -b -c`;
/// * Everything else is positional.
///
/// Value-accepting options without an inline `=val` take the following
/// token as their value, provided it is non-empty and doesn't itself begin
/// with a dash.
///
/// Short and long options share a namespace, so a `{-v}` declaration will
/// also match `--v`.
///
/// Note: the tokens should not include the program or command names.
///
/// ## Examples
///
/// ```
/// use signet::{FlagRegistry, Matcher};
///
/// let registry = FlagRegistry::compile("{-f} {-j} {-s}").unwrap();
/// let result = Matcher::new(&registry, &["-fjs"]).run().unwrap();
/// assert!(result.has("f") && result.has("j") && result.has("s"));
/// ```
pub struct Matcher<'a, S> {
	/// # Signature.
	registry: &'a FlagRegistry,

	/// # Tokens.
	tokens: &'a [S],

	/// # Cursor.
	cursor: usize,

	/// # Results.
	result: ResultSet,
}

impl<'a, S: AsRef<str>> Matcher<'a, S> {
	#[must_use]
	/// # New.
	pub fn new(registry: &'a FlagRegistry, tokens: &'a [S]) -> Self {
		Self {
			registry,
			tokens,
			cursor: 0,
			result: ResultSet::default(),
		}
	}

	/// # Run.
	///
	/// Consume the tokens, apply defaults, and verify that every required
	/// positional argument turned up.
	///
	/// ## Errors
	///
	/// Matching stops at the first problem, returning a [`MatchError`]
	/// describing it; partial results are discarded.
	pub fn run(mut self) -> Result<ResultSet, MatchError> {
		tracing::debug!(tokens = self.tokens.len(), flags = self.registry.specs().len(), "matching");

		while let Some(token) = self.current() {
			if is_option(token) { self.match_option(token)?; }
			else { self.match_argument(token)?; }
			self.cursor += 1;
		}

		self.validate()?;
		tracing::debug!(recorded = self.result.len(), "matched");
		Ok(self.result)
	}

	/// # Current Token.
	fn current(&self) -> Option<&'a str> {
		self.tokens.get(self.cursor).map(AsRef::as_ref)
	}

	/// # Peek at the Next Token.
	fn peek(&self) -> Option<&'a str> {
		self.tokens.get(self.cursor + 1).map(AsRef::as_ref)
	}

	/// # Match Option.
	///
	/// Handle a token that begins with one or two dashes.
	fn match_option(&mut self, token: &'a str) -> Result<(), MatchError> {
		let (raw, short) = token.strip_prefix("--")
			.map_or_else(|| (&token[1..], true), |r| (r, false));

		let (name, value) = match raw.split_once('=') {
			Some((n, v)) => (n, Some(v).filter(|v| ! v.is_empty())),
			None => (raw, None),
		};

		// Bundle!
		if short && 1 < name.chars().count() {
			if value.is_some() {
				return Err(fail(MatchError::AmbiguousBundledOptionValue(name.to_owned())));
			}

			tracing::trace!(bundle = name, "expanding bundled short options");
			let mut buf = [0_u8; 4];
			for c in name.chars() {
				let single: &str = c.encode_utf8(&mut buf);
				self.match_single_option(single, None)?;
			}
			return Ok(());
		}

		self.match_single_option(name, value)
	}

	/// # Match One Option.
	fn match_single_option(&mut self, name: &str, mut value: Option<&'a str>)
	-> Result<(), MatchError> {
		let registry = self.registry;
		let Some(spec) = registry.option(name) else {
			return Err(fail(MatchError::UnknownOption(name.to_owned())));
		};

		if value.is_some() && ! spec.accepts_value() {
			return Err(fail(MatchError::OptionValueNotAccepted(name.to_owned())));
		}

		// Borrow the next token, maybe.
		if value.is_none() && spec.accepts_value() {
			if let Some(next) = self.peek().filter(|n| ! n.is_empty() && ! n.starts_with('-')) {
				value = Some(next);
				self.cursor += 1;
			}
		}

		let value: Option<&str> = match value {
			Some(v) => Some(v),
			None => match spec.value_policy() {
				ValuePolicy::Required =>
					return Err(fail(MatchError::OptionValueRequired(name.to_owned()))),
				ValuePolicy::Optional if ! spec.is_array() => spec.default_value(),
				_ => None,
			},
		};

		self.record_option(spec, value)
	}

	/// # Record Option.
	fn record_option(&mut self, spec: &FlagSpec, value: Option<&str>)
	-> Result<(), MatchError> {
		let name = spec.name();
		if let Some(value) = value {
			if self.result.option(name).is_some() && ! spec.is_array() {
				return Err(fail(MatchError::OptionArrayNotAccepted(name.to_owned())));
			}
			tracing::trace!(option = name, value, "recorded option value");
			self.result.push_option(name, Some(value.to_owned()));
		}
		else {
			tracing::trace!(option = name, "recorded option");
			self.result.push_option(name, None);
		}

		Ok(())
	}

	/// # Match Positional Argument.
	fn match_argument(&mut self, token: &str) -> Result<(), MatchError> {
		let k = self.result.argument_count();
		let registry = self.registry;

		let spec =
			if let Some(spec) = registry.positional(k) { spec }
			else if let Some(spec) = k.checked_sub(1)
				.and_then(|prev| registry.positional(prev))
				.filter(|s| s.is_array())
			{ spec }
			else {
				return Err(fail(MatchError::TooManyPositionalArguments(token.to_owned())));
			};

		tracing::trace!(argument = spec.name(), value = token, "recorded argument");
		self.result.push_argument(spec.name(), Some(token.to_owned()));
		Ok(())
	}

	/// # Validate.
	///
	/// Fill in defaults for anything unseen, then make sure at least as
	/// many positional arguments were recorded as are required.
	fn validate(&mut self) -> Result<(), MatchError> {
		let registry = self.registry;

		for spec in registry.positionals() {
			if let Some(d) = spec.default_value() {
				if ! self.result.has_argument(spec.name()) {
					self.result.push_argument(spec.name(), Some(d.to_owned()));
				}
			}
		}

		for spec in registry.options() {
			if let Some(d) = spec.default_value() {
				if self.result.option(spec.name()).is_none() {
					self.result.push_option(spec.name(), Some(d.to_owned()));
				}
			}
		}

		// Only the count matters; optional positionals and defaults fill
		// slots just like required ones.
		let required = registry.required_positional_names();
		if required.len() <= self.result.argument_count() { return Ok(()); }

		let missing: Vec<String> = required.into_iter()
			.filter(|n| ! self.result.has_argument(n))
			.map(str::to_owned)
			.collect();
		Err(fail(MatchError::MissingRequiredArguments(missing)))
	}
}



/// # Is Option Token?
///
/// A bare `-` or `--` is not.
fn is_option(token: &str) -> bool {
	token.starts_with('-') && token != "-" && token != "--"
}

/// # Fail.
///
/// Log and pass through a matching error.
fn fail(err: MatchError) -> MatchError {
	tracing::debug!(error = %err, "match failed");
	err
}
