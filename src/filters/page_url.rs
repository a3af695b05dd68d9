use std::fmt;
use liquid_core::{Runtime, ValueView, Value, Result as LiquidResult, Error as LiquidError};
use liquid_core::parser::{FilterArguments, ParseFilter, ParameterReflection};
use liquid_core::{FilterReflection};

/// GeneratePageUrl filter implementation
#[derive(Debug, Clone)]
pub struct GeneratePageUrlFilter;

impl liquid_core::Filter for GeneratePageUrlFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        let page = match input.as_scalar().and_then(|s| s.to_integer()) {
            Some(page) => page,
            None => {
                return Err(LiquidError::with_msg(
                    "generate_page_url filter expects a page number",
                ))
            }
        };

        Ok(Value::scalar(page_url(page)))
    }
}

// The first page of the index lives at the site root rather than /page1
fn page_url(page: i64) -> String {
    if page == 1 {
        "/".to_string()
    } else {
        format!("/page{}", page)
    }
}

impl fmt::Display for GeneratePageUrlFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "generate_page_url")
    }
}

/// Parse filter factory for generate_page_url
#[derive(Debug, Clone)]
pub struct GeneratePageUrlFilterParser;

impl FilterReflection for GeneratePageUrlFilterParser {
    fn name(&self) -> &str {
        "generate_page_url"
    }

    fn description(&self) -> &str {
        "Returns the URL path for a page of the paginated index"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for GeneratePageUrlFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(GeneratePageUrlFilter))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
