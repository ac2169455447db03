/*!
# Benchmark: `signet::Matcher`
*/

use brunch::{
	Bench,
	benches,
};
use signet::{
	FlagRegistry,
	Matcher,
};

fn registry() -> FlagRegistry {
	FlagRegistry::compile("{src} {dst?} {rest?*} {-v} {-q} {--level=3} {--tag=*} {--out=+}")
		.expect("Compile failed.")
}

benches!(
	Bench::new("signet::Matcher::run([])")
		.run_seeded_with(registry, |r| Matcher::new(&r, &[] as &[&str]).run().is_ok()),

	Bench::new("signet::Matcher::run(-vq)")
		.run_seeded_with(registry, |r| r.matches(&["in.txt", "-vq"]).is_ok()),

	Bench::new("signet::Matcher::run(mixed)")
		.run_seeded_with(registry, |r| r.matches(&[
			"in.txt",
			"out.txt",
			"--tag", "a",
			"--tag=b",
			"--out", "x",
			"extra1",
			"extra2",
			"-v",
		]).is_ok()),
);
