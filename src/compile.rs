/*!
# Signet: Signature Compiler

This turns a signature like `{file} {--output=} {-f}` into an ordered list of
[`FlagSpec`]s.
*/

use crate::{
	Cardinality,
	Category,
	CompileError,
	FlagSpec,
	Presence,
	ValuePolicy,
};
use std::collections::HashSet;



/// # Description Separator.
const DESCRIPTION_SEP: &str = " : ";



/// # Compile Signature.
///
/// Parse every `{...}` group in `pattern`, left to right, into a [`FlagSpec`].
/// Anything outside the braces is ignored, so a signature can double as
/// human-readable text.
///
/// Positional arguments support the following suffixes:
///
/// | Suffix | Meaning |
/// | ------ | ------- |
/// | | Required. |
/// | `?` | Optional. |
/// | `*` | Required array. |
/// | `?*` | Optional array. |
/// | `=val` | Optional, defaulting to `val`. |
///
/// Options (`-k` or `--key`) support these:
///
/// | Suffix | Meaning |
/// | ------ | ------- |
/// | | Switch; no value. |
/// | `=` | Optional value. |
/// | `=*` | Optional value, repeatable. |
/// | `=+` | Required value, repeatable. |
/// | `=val` | Optional value, defaulting to `val`. |
///
/// Either may carry a description, separated from the name by `" : "`,
/// e.g. `{--out=+ : Where to write.}`.
///
/// ## Examples
///
/// ```
/// let specs = signet::compile("copy {from} {to?} {-f} {--mode=755}").unwrap();
/// assert_eq!(specs.len(), 4);
/// assert_eq!(specs[3].default_value(), Some("755"));
/// ```
///
/// ## Errors
///
/// Compilation stops at the first problem:
/// * An empty group (or a group with an empty name);
/// * A positional argument following an array positional;
/// * An option name used more than once;
pub fn compile(pattern: &str) -> Result<Vec<FlagSpec>, CompileError> {
	let mut out = Vec::new();
	let mut seen_options: HashSet<String> = HashSet::new();
	let mut array_arg: Option<String> = None;

	for body in Groups::new(pattern) {
		let spec = compile_group(body)?;

		if spec.is_argument() {
			if array_arg.is_some() {
				tracing::debug!(name = spec.name(), "positional after array positional");
				return Err(CompileError::ArrayPositionalNotLast(spec.name().to_owned()));
			}
			if spec.is_array() { array_arg = Some(spec.name().to_owned()); }
		}
		else if ! seen_options.insert(spec.name().to_owned()) {
			tracing::debug!(name = spec.name(), "duplicate option");
			return Err(CompileError::DuplicateOptionName(spec.name().to_owned()));
		}

		out.push(spec);
	}

	tracing::debug!(pattern, flags = out.len(), "compiled signature");
	Ok(out)
}

/// # Compile One Group.
fn compile_group(body: &str) -> Result<FlagSpec, CompileError> {
	if body.is_empty() { return Err(CompileError::EmptyFlagToken); }

	let spec =
		if let Some(rest) = body.strip_prefix("--") { compile_option(Category::Long, rest) }
		else if let Some(rest) = body.strip_prefix('-') { compile_option(Category::Short, rest) }
		else { compile_argument(body) };

	if spec.name().is_empty() { Err(CompileError::EmptyFlagToken) }
	else {
		tracing::trace!(group = body, spec = %spec, "compiled group");
		Ok(spec)
	}
}

/// # Compile Option.
fn compile_option(category: Category, body: &str) -> FlagSpec {
	let (name, description) = split_description(body);

	let (name, policy, cardinality, default) =
		if let Some(n) = name.strip_suffix("=*") {
			(n, ValuePolicy::Optional, Cardinality::Array, None)
		}
		else if let Some(n) = name.strip_suffix("=+") {
			(n, ValuePolicy::Required, Cardinality::Array, None)
		}
		else if let Some(n) = name.strip_suffix('=') {
			(n, ValuePolicy::Optional, Cardinality::Single, None)
		}
		else if let Some((n, d)) = name.split_once('=') {
			(n, ValuePolicy::Optional, Cardinality::Single, Some(d))
		}
		else { (name, ValuePolicy::None, Cardinality::Single, None) };

	FlagSpec::option(category, name, policy, cardinality, default, description)
}

/// # Compile Positional Argument.
fn compile_argument(body: &str) -> FlagSpec {
	let (name, description) = split_description(body);

	let (name, presence, cardinality, default) =
		if let Some(n) = name.strip_suffix("?*") {
			(n, Presence::Optional, Cardinality::Array, None)
		}
		else if let Some(n) = name.strip_suffix('*') {
			(n, Presence::Required, Cardinality::Array, None)
		}
		else if let Some(n) = name.strip_suffix('?') {
			(n, Presence::Optional, Cardinality::Single, None)
		}
		else if let Some((n, d)) = name.split_once('=') {
			(n, Presence::Optional, Cardinality::Single, Some(d))
		}
		else { (name, Presence::Required, Cardinality::Single, None) };

	FlagSpec::argument(name, presence, cardinality, default, description)
}

/// # Split Name/Description.
fn split_description(body: &str) -> (&str, &str) {
	body.split_once(DESCRIPTION_SEP).unwrap_or((body, ""))
}



/// # Group Iterator.
///
/// Yield the contents of each innermost `{...}` group in a pattern. An
/// opening brace followed by another opening brace before any closing one is
/// abandoned in favor of the later one; unclosed groups are ignored.
struct Groups<'a> {
	/// # Remaining Text.
	rest: &'a str,
}

impl<'a> Groups<'a> {
	/// # New.
	const fn new(pattern: &'a str) -> Self { Self { rest: pattern } }
}

impl<'a> Iterator for Groups<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let start = self.rest.find('{')?;
			let after = &self.rest[start + 1..];
			let end = after.find(['{', '}'])?;

			// Another opening brace; start over from there.
			if after.as_bytes()[end] == b'{' {
				self.rest = &after[end..];
				continue;
			}

			self.rest = &after[end + 1..];
			return Some(&after[..end]);
		}
	}
}
