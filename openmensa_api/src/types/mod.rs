mod page;
pub use self::page::{Page, PageInfo};

mod canteen;
pub use self::canteen::{Canteen, CanteenDay, CanteenID};

mod meal;
pub use self::meal::{Meal, Prices};
