//! Liquid template filters for blog pagination: the page-number window for
//! pagination widgets plus page and tag URL formatting. The surrounding
//! static site generator supplies the `paginator` object and renders the
//! returned strings into HTML.

mod filters;
mod pagination;

use std::error::Error;
use liquid::{Parser, ParserBuilder};

pub use filters::{
    register_filters, CalculatePageRangeFilterParser, GeneratePageUrlFilterParser,
    TagUrlFilterParser,
};
pub use pagination::{Paginator, PAGE_RANGE_LIMIT};

type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Create a Liquid parser with the blog filters registered on top of the
/// standard filter set
///
/// Hosts that manage their own `ParserBuilder` can call `register_filters`
/// on it directly instead.
pub fn create_parser() -> BoxResult<Parser> {
    // Create the parser builder and register the custom filters
    let mut parser_builder = ParserBuilder::with_stdlib();
    parser_builder = filters::register_filters(parser_builder);

    let parser = parser_builder.build()?;

    Ok(parser)
}
