use std::error::Error;
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use scraper::{Html, Node};

/// Web text source holding a reusable blocking HTTP client.
#[derive(Clone, Debug)]
pub(crate) struct WebTextSource {
	client: Client,
}

impl WebTextSource {
	/// Creates a new source with a request timeout.
	pub(crate) fn new() -> Result<Self, Box<dyn Error>> {
		let client = Client::builder()
			.timeout(Duration::new(30, 0))
			.build()?;
		Ok(Self { client })
	}

	/// Fetches `url` and returns the page's visible text, markup stripped.
	///
	/// Network, HTTP status and body decoding failures all propagate to the
	/// caller unchanged; there is no retry and no caching.
	pub(crate) fn fetch_text(&self, url: &str) -> Result<String, Box<dyn Error>> {
		info!("retrieving text...");
		let html = self.client
			.get(url)
			.send()?
			.error_for_status()?
			.text()?;
		debug!("fetched {} bytes from {}", html.len(), url);
		Ok(extract_text(&html))
	}
}

/// Extracts the visible text of an HTML document.
///
/// Walks every text node outside `<script>`, `<style>` and `<noscript>`,
/// joins the fragments with single spaces and collapses whitespace runs.
/// The parse is error-recovering, so malformed markup still yields text.
pub(crate) fn extract_text(html: &str) -> String {
	let document = Html::parse_document(html);

	let mut parts: Vec<&str> = Vec::new();
	for node in document.root_element().descendants() {
		if let Node::Text(text) = node.value() {
			let skipped = node.ancestors().any(|ancestor| match ancestor.value() {
				Node::Element(element) => {
					matches!(element.name(), "script" | "style" | "noscript")
				}
				_ => false,
			});
			if !skipped {
				parts.push(text);
			}
		}
	}

	// Collapse the whitespace runs left behind by the markup
	parts.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_markup_and_collapses_whitespace() {
		let html = "<html><body><h1>Natural   History</h1>\n<p>Pliny the <b>Elder</b>.</p></body></html>";
		assert_eq!(extract_text(html), "Natural History Pliny the Elder .");
	}

	#[test]
	fn drops_script_style_and_noscript_content() {
		let html = "<html><head><style>p { color: red; }</style>\
			<script>var tracked = true;</script></head>\
			<body><noscript>enable js</noscript><p>Visible text.</p></body></html>";
		assert_eq!(extract_text(html), "Visible text.");
	}

	#[test]
	fn decodes_entities_in_text() {
		let html = "<p>Fish &amp; chips</p>";
		assert_eq!(extract_text(html), "Fish & chips");
	}

	#[test]
	fn survives_malformed_markup() {
		let html = "<p>Unclosed <b>tags<p>still yield text";
		assert_eq!(extract_text(html), "Unclosed tags still yield text");
	}

	#[test]
	fn empty_document_yields_empty_text() {
		assert_eq!(extract_text(""), "");
	}
}
