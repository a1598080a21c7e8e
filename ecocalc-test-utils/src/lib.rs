pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL_API_KEY, TEST_EMAIL_FROM, TEST_EMAIL_ID},
        fixtures::factory,
        TestBuilder, TestContext, TestError,
    };
}
