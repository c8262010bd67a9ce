//! Closure-based text tagging.
//!
//! [`tagger`] captures a tag name and returns a closure that wraps text in
//! that tag at call time. Taggers compose with [`compose`], so markup can
//! be built up from small transformation functions.

/// Returns a closure that wraps text in `<TAG>`/`</TAG>` markers.
///
/// The tag name is captured by the closure and reused on every call.
pub fn tagger(tag: &str) -> impl Fn(&str) -> String {
    let tag = tag.to_owned();
    move |text: &str| format!("<{tag}>{text}</{tag}>")
}

/// Applies a tagging function to `text`.
pub fn apply_tag(text: &str, tagger: impl Fn(&str) -> String) -> String {
    tagger(text)
}

/// Chains two tagging functions: `first` runs, then `second` wraps its
/// output.
pub fn compose(
    first: impl Fn(&str) -> String,
    second: impl Fn(&str) -> String,
) -> impl Fn(&str) -> String {
    move |text: &str| second(&first(text))
}
