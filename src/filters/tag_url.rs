use std::fmt;
use liquid_core::{Runtime, ValueView, Value, Result as LiquidResult};
use liquid_core::parser::{FilterArguments, ParseFilter, ParameterReflection};
use liquid_core::{FilterReflection};

/// TagUrl filter implementation
#[derive(Debug, Clone)]
pub struct TagUrlFilter;

impl liquid_core::Filter for TagUrlFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        let tag = input.to_kstr().to_string();

        // The tag is substituted verbatim; tag pages are generated from the
        // same strings, so both sides stay consistent without escaping
        Ok(Value::scalar(format!("/tag/{}.html", tag)))
    }
}

impl fmt::Display for TagUrlFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag_url")
    }
}

/// Parse filter factory for tag_url
#[derive(Debug, Clone)]
pub struct TagUrlFilterParser;

impl FilterReflection for TagUrlFilterParser {
    fn name(&self) -> &str {
        "tag_url"
    }

    fn description(&self) -> &str {
        "Returns the URL path for a tag listing page"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for TagUrlFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(TagUrlFilter))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
