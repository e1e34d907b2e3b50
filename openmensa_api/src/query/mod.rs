mod common;
pub use self::common::{Query, QueryCommon};

mod canteen;
pub use self::canteen::{CanteenQuery, Near};
