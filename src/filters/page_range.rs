use std::fmt;
use liquid_core::{Runtime, ValueView, Value, Result as LiquidResult};
use liquid_core::parser::{FilterArguments, ParseFilter, ParameterReflection};
use liquid_core::{FilterReflection};

use crate::pagination::Paginator;

/// CalculatePageRange filter implementation
#[derive(Debug, Clone)]
pub struct CalculatePageRangeFilter;

impl liquid_core::Filter for CalculatePageRangeFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        // Pages rendered outside a pagination context pass nil through here;
        // return nil so templates can skip the widget instead of failing
        let paginator = match Paginator::from_view(input) {
            Some(paginator) => paginator,
            None => return Ok(Value::Nil),
        };

        let range = paginator
            .page_range()
            .into_iter()
            .map(Value::scalar)
            .collect();

        Ok(Value::Array(range))
    }
}

impl fmt::Display for CalculatePageRangeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "calculate_page_range")
    }
}

/// Parse filter factory for calculate_page_range
#[derive(Debug, Clone)]
pub struct CalculatePageRangeFilterParser;

impl FilterReflection for CalculatePageRangeFilterParser {
    fn name(&self) -> &str {
        "calculate_page_range"
    }

    fn description(&self) -> &str {
        "Computes the window of page numbers to show in a pagination widget"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for CalculatePageRangeFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(CalculatePageRangeFilter))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
