/*!
# Signet: Compile + Match Pipeline
*/

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use signet::{
	compile,
	Cardinality,
	Category,
	CompileError,
	FlagRegistry,
	MatchError,
	Presence,
	ValuePolicy,
};
use std::sync::Arc;



/// # Compile and Match.
fn run(signature: &str, tokens: &[&str]) -> Result<signet::ResultSet, MatchError> {
	FlagRegistry::compile(signature)
		.expect("Signature failed to compile.")
		.matches(tokens)
}

/// # Install a Test Subscriber.
///
/// Output is captured by the test harness; set `RUST_LOG=signet=trace` to
/// see it.
fn init_tracing() {
	let _res = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}



#[test]
fn t_compile_properties() {
	init_tracing();

	let specs = compile("{user} {other}").expect("Compile failed.");
	assert_eq!(specs.len(), 2);
	assert_eq!(specs[0].name(), "user");
	assert_eq!(specs[1].name(), "other");
	assert!(specs.iter().all(|s|
		s.category() == Category::Argument &&
		s.presence() == Presence::Required &&
		s.cardinality() == Cardinality::Single
	));

	let specs = compile("{file : desc}").expect("Compile failed.");
	assert_eq!(specs[0].description(), "desc");

	let user = |p: &str| compile(p).expect("Compile failed.").remove(0);
	assert_eq!(user("{user?}").presence(), Presence::Optional);
	assert_eq!(user("{user?}").cardinality(), Cardinality::Single);
	assert_eq!(user("{user*}").presence(), Presence::Required);
	assert_eq!(user("{user*}").cardinality(), Cardinality::Array);
	assert_eq!(user("{user?*}").presence(), Presence::Optional);
	assert_eq!(user("{user?*}").cardinality(), Cardinality::Array);
	assert_eq!(user("{user=ionut}").presence(), Presence::Optional);
	assert_eq!(user("{user=ionut}").default_value(), Some("ionut"));

	assert_eq!(
		compile("{user*} {other}"),
		Err(CompileError::ArrayPositionalNotLast("other".to_owned())),
	);
}

#[test]
fn t_match_properties() {
	init_tracing();

	assert_eq!(
		run("{file} {file2}", &["file1"]),
		Err(MatchError::MissingRequiredArguments(vec!["file2".to_owned()])),
	);

	let res = run("{file} {file2}", &["file1", "file2"]).expect("Match failed.");
	assert_eq!(res.all("file"), ["file1"]);
	assert_eq!(res.all("file2"), ["file2"]);

	assert!(matches!(
		run("{file2}", &["file1", "file2"]),
		Err(MatchError::TooManyPositionalArguments(_)),
	));

	let res = run("{-f} {-j} {-s}", &["-fjs"]).expect("Match failed.");
	for k in ["f", "j", "s"] {
		assert!(res.has(k), "Missing {k}.");
		assert!(res.all(k).is_empty(), "{k} should not have a value.");
	}

	assert!(matches!(
		run("{-f} {-j}", &["-fjs"]),
		Err(MatchError::UnknownOption(_)),
	));

	let res = run("{--file=+}", &["--file=22", "--file", "something"])
		.expect("Match failed.");
	assert_eq!(res.all("file"), ["22", "something"]);

	let res = run("{--file=ion}", &[]).expect("Match failed.");
	assert_eq!(res.all("file"), ["ion"]);
}

#[test]
fn t_error_families() {
	// The two stages fail with distinct types.
	let compile_err: CompileError = FlagRegistry::compile("{}").unwrap_err();
	assert_eq!(compile_err.as_str(), "Empty flag token.");

	let registry = FlagRegistry::compile("{a} {-v} {--o=+}").expect("Compile failed.");
	for (tokens, expected) in [
		(&["a", "-v=1"][..], MatchError::OptionValueNotAccepted("v".to_owned())),
		(&["a", "--o"][..], MatchError::OptionValueRequired("o".to_owned())),
		(&["a", "-vo=x"][..], MatchError::AmbiguousBundledOptionValue("vo".to_owned())),
		(&["a", "b"][..], MatchError::TooManyPositionalArguments("b".to_owned())),
		(&["-v"][..], MatchError::MissingRequiredArguments(vec!["a".to_owned()])),
	] {
		assert_eq!(registry.matches(tokens), Err(expected), "{tokens:?}");
	}
}

#[test]
fn t_shared_registry() {
	let registry = Arc::new(
		FlagRegistry::compile("{n} {--tag=*}").expect("Compile failed.")
	);

	let handles: Vec<_> = (0..4_i64)
		.map(|i| {
			let registry = Arc::clone(&registry);
			std::thread::spawn(move || {
				let n = i.to_string();
				let res = registry.matches(&[n.as_str(), "--tag", "x"])
					.expect("Match failed.");
				res.as_int("n", 0).expect("Not an int.")
			})
		})
		.collect();

	let mut out: Vec<i64> = handles.into_iter()
		.map(|h| h.join().expect("Thread panicked."))
		.collect();
	out.sort_unstable();
	assert_eq!(out, [0, 1, 2, 3]);
}

#[test]
fn t_value_policy_surface() {
	let registry = FlagRegistry::compile("{-a} {--b=} {--c=*} {--d=+} {--e=x}")
		.expect("Compile failed.");
	let policies: Vec<ValuePolicy> = registry.options().map(|s| s.value_policy()).collect();
	assert_eq!(policies, [
		ValuePolicy::None,
		ValuePolicy::Optional,
		ValuePolicy::Optional,
		ValuePolicy::Required,
		ValuePolicy::Optional,
	]);
}

#[cfg(feature = "serde")]
#[test]
fn t_serde() {
	let res = run("{file} {-v} {--tag=*}", &["a.txt", "-v", "--tag=x"])
		.expect("Match failed.");
	let json = serde_json::to_value(&res).expect("Serialize failed.");
	assert_eq!(json, serde_json::json!({
		"arguments": { "file": ["a.txt"] },
		"options": { "v": [], "tag": ["x"] },
	}));

	let specs = compile("{file? : In.} {--tag=*}").expect("Compile failed.");
	let raw = serde_json::to_string(&specs).expect("Serialize failed.");
	let back: Vec<signet::FlagSpec> = serde_json::from_str(&raw).expect("Deserialize failed.");
	assert_eq!(back, specs);
}



/// # Arbitrary Signature.
fn signature() -> impl Strategy<Value=String> {
	(
		prop::collection::vec(("[a-z]{1,6}", prop::sample::select(vec!["", "?", "=d"])), 0..4),
		prop::sample::select(vec!["", "{rest*}", "{rest?*}"]),
		prop::collection::vec(
			("[a-z]{2,6}", prop::sample::select(vec!["", "=", "=*", "=+", "=v"])),
			0..4,
		),
	).prop_map(|(args, tail, opts)| {
		let mut out = String::new();
		for (i, (name, suffix)) in args.iter().enumerate() {
			out.push_str(&format!("{{a{i}{name}{suffix}}} "));
		}
		out.push_str(tail);
		for (i, (name, suffix)) in opts.iter().enumerate() {
			out.push_str(&format!(" {{--o{i}{name}{suffix}}}"));
		}
		out
	})
}

proptest! {
	#[test]
	fn t_compile_is_pure(pattern in signature()) {
		let a = compile(&pattern);
		let b = compile(&pattern);
		prop_assert!(a.is_ok());
		prop_assert_eq!(a, b);
	}

	#[test]
	fn t_display_recompiles(pattern in signature()) {
		let registry = FlagRegistry::compile(&pattern).expect("Compile failed.");
		let again = FlagRegistry::compile(&registry.to_string()).expect("Recompile failed.");
		prop_assert_eq!(registry, again);
	}

	#[test]
	fn t_match_is_pure(
		pattern in signature(),
		tokens in prop::collection::vec("(-{0,2})[a-z0-9=]{0,5}", 0..8),
	) {
		let registry = FlagRegistry::compile(&pattern).expect("Compile failed.");
		prop_assert_eq!(registry.matches(&tokens), registry.matches(&tokens));
	}
}
