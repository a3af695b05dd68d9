mod page_range;
mod page_url;
mod tag_url;

use liquid::ParserBuilder;

/// Register the blog pagination filters for use in Liquid templates
pub fn register_filters(parser_builder: ParserBuilder) -> ParserBuilder {
    log::debug!("Registering blog pagination filters");

    // Add calculate_page_range filter
    let parser_builder = parser_builder.filter(page_range::CalculatePageRangeFilterParser);

    // Add generate_page_url filter
    let parser_builder = parser_builder.filter(page_url::GeneratePageUrlFilterParser);

    // Add tag_url filter
    let parser_builder = parser_builder.filter(tag_url::TagUrlFilterParser);

    parser_builder
}

// Re-export the filter types
pub use page_range::CalculatePageRangeFilterParser;
pub use page_url::GeneratePageUrlFilterParser;
pub use tag_url::TagUrlFilterParser;
