/*!
# Signet: Environment Arguments
*/

use std::ffi::OsString;



#[must_use]
/// # Environment Tokens.
///
/// Collect [`std::env::args_os`] as a token list suitable for
/// [`Matcher`](crate::Matcher), skipping the program path and then `skip`
/// more leading entries (e.g. `1` for a command name).
///
/// Invalid UTF-8 is converted lossily rather than panicking.
///
/// ## Examples
///
/// ```no_run
/// let registry = signet::FlagRegistry::compile("{file} {-v}").unwrap();
///
/// // Skip the command name too: `app build file.txt -v`.
/// match registry.matches(&signet::env_tokens(1)) {
///     Ok(result) => println!("{:?}", result.first("file")),
///     Err(e) => {
///         eprintln!("{e}");
///         std::process::exit(e.exit_code());
///     },
/// }
/// ```
pub fn env_tokens(skip: usize) -> Vec<String> {
	tokens_from(std::env::args_os().skip(1), skip)
}

/// # Tokens From Iterator.
fn tokens_from<I: IntoIterator<Item=OsString>>(src: I, skip: usize) -> Vec<String> {
	src.into_iter()
		.skip(skip)
		.map(|s| s.into_string().unwrap_or_else(|e| e.to_string_lossy().into_owned()))
		.collect()
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_tokens_from() {
		let raw = vec![
			OsString::from("build"),
			OsString::from("file.txt"),
			OsString::from("-v"),
		];
		assert_eq!(tokens_from(raw.clone(), 0), ["build", "file.txt", "-v"]);
		assert_eq!(tokens_from(raw.clone(), 1), ["file.txt", "-v"]);
		assert!(tokens_from(raw, 5).is_empty());
	}

	#[cfg(unix)]
	#[test]
	fn t_tokens_lossy() {
		use std::os::unix::ffi::OsStringExt;
		let raw = vec![OsString::from_vec(vec![b'a', 0xff, b'b'])];
		assert_eq!(tokens_from(raw, 0), ["a\u{fffd}b"]);
	}
}
