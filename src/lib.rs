/*!
# Signet

[![license](https://img.shields.io/badge/license-wtfpl-ff1493?style=flat-square)](https://en.wikipedia.org/wiki/WTFPL)

Signet lets a program describe the arguments a command accepts with a compact
brace-style signature, and then match raw CLI tokens against it.

It sits somewhere between hand-rolling everything with [`std::env::args`] and
full-service crates like [clap](https://crates.io/crates/clap): there is no
derive, no help screen, no subcommand tree; just a signature, a matcher, and
a result set.

Matching happens in two stages:

1. [`compile`] turns a signature like `{file} {--output=} {-f}` into a list of [`FlagSpec`]s, which [`FlagRegistry`] then indexes.
2. [`Matcher`] scans the tokens, returning a [`ResultSet`] or a [`MatchError`] explaining what went wrong.

Signatures are normally fixed at build time, so a [`CompileError`] is a bug
in the program and should be dealt with at startup. A [`MatchError`], on the
other hand, is the user's fault and is meant to be printed.



## Signatures

Each `{...}` group declares one flag; everything else is ignored.

| Group | Meaning |
| ----- | ------- |
| `{name}` | Required positional. |
| `{name?}` | Optional positional. |
| `{name*}` | Required positional array (must be last). |
| `{name?*}` | Optional positional array (must be last). |
| `{name=val}` | Optional positional defaulting to `val`. |
| `{-k}`, `{--key}` | Switch. |
| `{--key=}` | Option with an optional value. |
| `{--key=*}` | Repeatable option with optional values. |
| `{--key=+}` | Repeatable option requiring values. |
| `{--key=val}` | Option defaulting to `val`. |

Any group can carry a description after `" : "`, e.g. `{file : The input.}`.



## Crate Features

| Feature | Description | Default |
| ------- | ----------- | ------- |
| `serde` | Serialization for [`FlagSpec`] and [`ResultSet`]. | N |



## Example

```
use signet::{FlagRegistry, MatchError};

let registry = FlagRegistry::compile(
    "{src : Source.} {dst?} {-v} {--level=3} {--exclude=*}"
).unwrap(); // Signature errors are bugs.

let result = registry.matches(&[
    "-v",
    "in.txt",
    "--exclude", "*.bak",
    "--exclude=*.tmp",
]).unwrap();

assert!(result.flag("v"));
assert_eq!(result.first("src"), Some("in.txt"));
assert!(! result.has("dst"));
assert_eq!(result.as_int("level", 0), Ok(3));
assert_eq!(result.all("exclude"), ["*.bak", "*.tmp"]);

// User errors are descriptive.
let err = registry.matches(&["in.txt", "--nope"]).unwrap_err();
assert_eq!(err, MatchError::UnknownOption("nope".to_owned()));
assert_eq!(err.to_string(), "The `--nope` option does not exist.");
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::todo,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod compile;
mod env;
mod error;
mod matcher;
mod registry;
mod result;
mod spec;

pub use compile::compile;
pub use env::env_tokens;
pub use error::{
	CompileError,
	ConversionError,
	MatchError,
};
pub use matcher::Matcher;
pub use registry::FlagRegistry;
pub use result::ResultSet;
pub use spec::{
	Cardinality,
	Category,
	FlagSpec,
	Presence,
	ValuePolicy,
};
