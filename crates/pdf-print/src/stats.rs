use crate::constants::DEFAULT_OVERLAP_INCHES;
use crate::layout::calculate_poster_dimensions;
use crate::options::PrintConstants;
use crate::specs::compute_print_specs;
use crate::types::*;

/// Calculate statistics for a poster order
pub fn calculate_poster_statistics(
    config: &PosterConfig,
    size: &PrintSize,
    constants: &PrintConstants,
) -> PosterStatistics {
    let specs = compute_print_specs(size, constants);

    PosterStatistics {
        rows: config.rows,
        cols: config.cols,
        sheets: config.sheet_count(),
        page_width_pt: specs.total_width,
        page_height_pt: specs.total_height,
        printed_width_inches: size.width_inches * config.cols as f32,
        printed_height_inches: size.height_inches * config.rows as f32,
        assembled: calculate_poster_dimensions(
            config,
            size.width_inches,
            size.height_inches,
            DEFAULT_OVERLAP_INCHES,
        ),
    }
}
