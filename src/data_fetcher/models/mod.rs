pub mod context;
pub mod pools;
pub mod results;
pub mod tableau;

pub use context::{EventLink, EventTitle, ScrapeContext};
pub use pools::{BoutOrderRecord, PoolResults, PoolRow, PoolSheetRecord};
pub use results::{EventResult, Placing};
pub use tableau::{
    MatchTuple, PairedMatchRecord, TableauEntry, TableauMatrix, TableauPage, TableauTree,
};
