//! Component mocks with interactive controls

mod benefit_card;
pub mod url_state;
pub mod viewport;

pub use benefit_card::BenefitCardMock;
