// Setlist catalog: embedded corpus and parser
pub mod catalog;
pub mod corpus;
pub mod heuristics;
pub mod parser;
pub mod slug;

pub use catalog::Catalog;
pub use corpus::Corpus;
pub use heuristics::{EraTable, Heuristics, PopularityTable};
pub use parser::{CatalogParser, ParseReport, parse_setlist};
pub use slug::create_slug;
