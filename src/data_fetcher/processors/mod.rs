pub mod bracket_matrix;
pub mod bracket_tree;
pub mod pool_rows;
pub mod text;
pub mod title;

pub use bracket_matrix::{extract_fencer_matches, looks_like_score};
pub use bracket_tree::{Bracket, BracketRow, BracketSlot, MatchId};
pub use pool_rows::{PoolRowContext, classify_pool_row};
pub use text::{cell_text, clean_text, element_lines, element_text};
pub use title::{convert_french_to_english, parse_event_title};
