//! Fixed source-text scaffolding, addressed by named region.
//!
//! A template is plain text split into regions by marker lines of the
//! form `@@ name`.  The generator splices generated fragments between
//! regions; the regions themselves are immutable.  Region names replace
//! the hard-coded line ranges of the original scheme, so templates can be
//! edited without renumbering.

use crate::error::GenError;

/// A parsed template: ordered named regions of verbatim text.
#[derive(Debug, Clone)]
pub struct Template {
	regions: Vec<(String, String)>,
}

impl Template {
	/// Splits `text` into regions at `@@ name` marker lines.
	///
	/// # Errors
	///
	/// Non-blank content before the first marker and duplicate region
	/// names are malformed templates.
	pub fn parse(text: &str) -> Result<Self, GenError> {
		let mut regions: Vec<(String, String)> = Vec::new();
		for line in text.lines() {
			if let Some(name) = line.strip_prefix("@@ ") {
				let name = name.trim();
				if regions.iter().any(|(existing, _)| existing == name) {
					return Err(GenError::DuplicateRegion(name.to_string()));
				}
				regions.push((name.to_string(), String::new()));
			} else if let Some((_, content)) = regions.last_mut() {
				content.push_str(line);
				content.push('\n');
			} else if !line.trim().is_empty() {
				return Err(GenError::LeadingContent);
			}
		}
		Ok(Self {
			regions,
		})
	}

	/// Returns the text of the named region.
	///
	/// # Errors
	///
	/// Referencing a region the template does not define is fatal to the
	/// generation run.
	pub fn region(&self, name: &str) -> Result<&str, GenError> {
		self.regions
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, content)| content.as_str())
			.ok_or_else(|| GenError::MissingRegion(name.to_string()))
	}

	/// Names of the regions, in template order.
	pub fn region_names(&self) -> impl Iterator<Item = &str> {
		self.regions.iter().map(|(name, _)| name.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_regions() {
		let template = Template::parse("@@ one\nalpha\nbeta\n@@ two\n\ngamma\n").unwrap();
		assert_eq!(template.region("one").unwrap(), "alpha\nbeta\n");
		assert_eq!(template.region("two").unwrap(), "\ngamma\n");
		let names: Vec<&str> = template.region_names().collect();
		assert_eq!(names, ["one", "two"]);
	}

	#[test]
	fn test_parse_preserves_tabs_and_blanks() {
		let template = Template::parse("@@ body\n\tindented\n\n\t\tdeeper\n").unwrap();
		assert_eq!(template.region("body").unwrap(), "\tindented\n\n\t\tdeeper\n");
	}

	#[test]
	fn test_missing_region() {
		let template = Template::parse("@@ one\ntext\n").unwrap();
		assert!(matches!(
			template.region("absent"),
			Err(GenError::MissingRegion(name)) if name == "absent"
		));
	}

	#[test]
	fn test_duplicate_region() {
		assert!(matches!(
			Template::parse("@@ one\n@@ one\n"),
			Err(GenError::DuplicateRegion(name)) if name == "one"
		));
	}

	#[test]
	fn test_leading_content() {
		assert!(matches!(
			Template::parse("stray\n@@ one\n"),
			Err(GenError::LeadingContent)
		));
		// leading blank lines are tolerated
		assert!(Template::parse("\n\n@@ one\ntext\n").is_ok());
	}

	#[test]
	fn test_embedded_templates_parse() {
		let dispatch = Template::parse(crate::generate::DISPATCH_TEMPLATE).unwrap();
		let expected = [
			"header",
			"prelude",
			"entry_doc",
			"entry_open",
			"entry_mid",
			"entry_close",
		];
		assert_eq!(dispatch.region_names().collect::<Vec<_>>(), expected);

		let kernels = Template::parse(crate::generate::KERNELS_TEMPLATE).unwrap();
		let expected = [
			"header",
			"dispatch_doc",
			"dispatch_params",
			"dispatch_close",
			"kernel_intro",
			"kernel_params",
			"loop_open",
			"loop_close",
		];
		assert_eq!(kernels.region_names().collect::<Vec<_>>(), expected);
	}
}
