//! App pages

mod landing;
mod mock_index;

pub use landing::Landing;
pub use mock_index::{MockBenefitCard, MockIndex};
