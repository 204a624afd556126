pub mod catalog;
pub mod error;
pub mod index;
pub mod profile;
pub mod recommend;
pub mod scorer;
pub mod suggest;
pub mod tokenizer;

pub use catalog::{load_catalog, Posting};
pub use error::{CatalogError, IndexError};
pub use index::{CorpusIndex, TermId};
pub use profile::{match_profile, MatchStatus, ProfileMatches};
pub use recommend::{recommend, Recommendation};
pub use scorer::{similarities, Query};
pub use suggest::{suggest, PartialMatch};
